//! Spring-smoothed pointer follower driving the custom cursor, the background
//! parallax and the ambient particle field.

use crate::config::MotionConfig;
use crate::error::MotionError;
use crate::interpolate::remap;
use crate::particles::{ParticleField, ParticleFrame};
use crate::spring::{Spring, SpringParams};
use crate::viewport::{PointerSample, Viewport};
use glam::Vec2;

pub struct PointerFollower {
    params: SpringParams,
    x: Spring,
    y: Spring,
    parallax_range: f32,
    pointer_norm: Vec2,
    particles: ParticleField,
}

impl PointerFollower {
    pub fn new(config: &MotionConfig, viewport: Viewport) -> Result<Self, MotionError> {
        config.spring.validate()?;
        if !(config.parallax_range.is_finite() && config.parallax_range >= 0.0) {
            return Err(MotionError::InvalidParallaxRange(config.parallax_range));
        }
        if !(config.particle_radius.is_finite() && config.particle_radius >= 0.0) {
            return Err(MotionError::InvalidParticleRadius(config.particle_radius));
        }
        Ok(Self {
            params: config.spring,
            x: Spring::new(),
            y: Spring::new(),
            parallax_range: config.parallax_range,
            pointer_norm: Vec2::ZERO,
            particles: ParticleField::new(
                config.particle_count,
                config.particle_radius,
                config.particle_seed,
                viewport,
            ),
        })
    }

    /// Latest sample wins; samples arriving between frames simply retarget
    /// the springs again.
    pub fn on_pointer_move(&mut self, sample: PointerSample, viewport: Viewport) {
        self.x.set_target(sample.x);
        self.y.set_target(sample.y);
        self.pointer_norm = viewport.normalize(sample.as_vec2());
    }

    /// Advance springs and particles by one frame of `dt` seconds.
    pub fn step(&mut self, dt: f32, viewport: Viewport) {
        self.x.step(&self.params, dt);
        self.y.step(&self.params, dt);
        self.particles.step(dt, self.pointer_norm, viewport);
    }

    /// Smoothed follower coordinates; `(0, 0)` until the first pointer sample.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x.value, self.y.value)
    }

    pub fn target(&self) -> Vec2 {
        Vec2::new(self.x.target, self.y.target)
    }

    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.x.velocity, self.y.velocity)
    }

    /// Background offset: `[0, width] -> [-range, range]` and likewise for Y.
    /// The domain comes from the viewport passed in, so a resize changes the
    /// output without touching spring state.
    pub fn parallax(&self, viewport: Viewport) -> Vec2 {
        let r = self.parallax_range;
        Vec2::new(
            remap(self.x.value, (0.0, viewport.width), (-r, r)),
            remap(self.y.value, (0.0, viewport.height), (-r, r)),
        )
    }

    pub fn normalized_pointer(&self) -> Vec2 {
        self.pointer_norm
    }

    pub fn has_pointer(&self) -> bool {
        self.x.is_initialized()
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn particle_frames(&self) -> impl Iterator<Item = ParticleFrame> + '_ {
        self.particles.frames()
    }

    pub fn is_settled(&self, threshold: f32) -> bool {
        self.x.is_settled(threshold) && self.y.is_settled(threshold)
    }
}
