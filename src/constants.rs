// DOM hooks the page markup is expected to provide.

// Pointer-driven decoration
pub const CURSOR_ID: &str = "cursor-follower";
pub const PARALLAX_ID: &str = "parallax-layer";
pub const PARTICLE_FIELD_ID: &str = "particle-field";
pub const PARTICLE_CLASS: &str = "particle";

// Navigation
pub const PROGRESS_BAR_ID: &str = "scroll-progress";
pub const NAV_LINK_PREFIX: &str = "nav-"; // `#nav-<section>` anchors
pub const NAV_ACTIVE_CLASS: &str = "active";
pub const ACTIVE_SECTION_ATTR: &str = "data-active-section";

// Decimal places written into inline styles
pub const PX_PRECISION: usize = 2;
pub const UNIT_PRECISION: usize = 4;
