use crate::constants::{
    ACTIVE_LINE_FRACTION, PARALLAX_RANGE_PX, PARTICLE_COUNT, PARTICLE_DEFAULT_SEED,
    PARTICLE_RADIUS_PX, SCROLL_DEBOUNCE, SECTION_IDS,
};
use crate::error::MotionError;
use crate::spring::SpringParams;
use std::time::Duration;

/// Tuning for every motion component, built once at mount.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    pub spring: SpringParams,
    pub parallax_range: f32,
    pub particle_count: usize,
    pub particle_radius: f32,
    pub particle_seed: u64,
    pub active_line_fraction: f32,
    pub scroll_debounce: Duration,
    pub sections: Vec<String>,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            spring: SpringParams::default(),
            parallax_range: PARALLAX_RANGE_PX,
            particle_count: PARTICLE_COUNT,
            particle_radius: PARTICLE_RADIUS_PX,
            particle_seed: PARTICLE_DEFAULT_SEED,
            active_line_fraction: ACTIVE_LINE_FRACTION,
            scroll_debounce: SCROLL_DEBOUNCE,
            sections: SECTION_IDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl MotionConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.particle_seed = seed;
        self
    }

    /// First misconfiguration found, if any.
    pub fn validate(&self) -> Result<(), MotionError> {
        self.spring.validate()?;
        if !(self.parallax_range.is_finite() && self.parallax_range >= 0.0) {
            return Err(MotionError::InvalidParallaxRange(self.parallax_range));
        }
        if !(self.particle_radius.is_finite() && self.particle_radius >= 0.0) {
            return Err(MotionError::InvalidParticleRadius(self.particle_radius));
        }
        if !(0.0..=1.0).contains(&self.active_line_fraction) {
            return Err(MotionError::InvalidLineFraction(self.active_line_fraction));
        }
        crate::sections::validate_ids(&self.sections)
    }
}
