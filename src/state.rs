use folio_core::{
    default_bindings, ActiveSectionTracker, MotionConfig, MotionError, PointerFollower,
    ScrollBinding, Viewport,
};
use instant::Instant;
use std::time::Duration;

/// Every motion component for one page load. Each component owns its own
/// derived state; the browser glue only reads snapshots out of it.
pub struct MotionState {
    pub follower: PointerFollower,
    pub tracker: ActiveSectionTracker,
    pub bindings: Vec<ScrollBinding>,
    started: Instant,
}

impl MotionState {
    pub fn new(config: &MotionConfig, viewport: Viewport) -> Result<Self, MotionError> {
        config.validate()?;
        Ok(Self {
            follower: PointerFollower::new(config, viewport)?,
            tracker: ActiveSectionTracker::from_config(config)?,
            bindings: default_bindings()?,
            started: Instant::now(),
        })
    }

    /// Monotonic clock shared by scroll events and the frame loop.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
