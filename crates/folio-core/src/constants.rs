use std::time::Duration;

// Shared motion tuning constants used by the web frontend.

// Pointer follower spring
pub const SPRING_STIFFNESS: f32 = 200.0;
pub const SPRING_DAMPING: f32 = 25.0;
pub const SPRING_MASS: f32 = 1.0;
pub const SPRING_MAX_SUBSTEP_SEC: f32 = 1.0 / 120.0; // upper bound on the integration step
pub const SPRING_STABILITY_MARGIN: f32 = 0.5; // max h*omega and h*c/m per sub-step
pub const SPRING_MAX_SUBSTEPS: u32 = 4096; // per frame; stiffer springs are rejected
pub const SPRING_MAX_DT_SEC: f32 = 0.1; // frame gaps beyond this are treated as one slow frame

// Parallax: follower value over [0, viewport] maps onto [-range, range] px
pub const PARALLAX_RANGE_PX: f32 = 20.0;

// Ambient particles
pub const PARTICLE_COUNT: usize = 30;
pub const PARTICLE_RADIUS_PX: f32 = 50.0;
pub const PARTICLE_DURATION_MIN_SEC: f32 = 1.0;
pub const PARTICLE_DURATION_SPAN_SEC: f32 = 2.0;
pub const PARTICLE_REPEAT_DELAY_MAX_SEC: f32 = 2.0;
pub const PARTICLE_PEAK_OPACITY: f32 = 0.8;
pub const PARTICLE_FOLLOW_TAU_FRACTION: f32 = 0.25; // of each particle's cycle duration
pub const PARTICLE_DEFAULT_SEED: u64 = 0x5EED_F011;

// Active section detection
pub const ACTIVE_LINE_FRACTION: f32 = 0.3; // reference line as a fraction of viewport height
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(100);

pub const SECTION_IDS: [&str; 5] = ["home", "about", "projects", "experience", "contact"];
