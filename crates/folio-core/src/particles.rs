//! Decorative particles that drift around the pointer and pulse in and out.

use crate::constants::{
    PARTICLE_DURATION_MIN_SEC, PARTICLE_DURATION_SPAN_SEC, PARTICLE_FOLLOW_TAU_FRACTION,
    PARTICLE_PEAK_OPACITY, PARTICLE_REPEAT_DELAY_MAX_SEC,
};
use crate::interpolate::Keyframes;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct Particle {
    /// Fixed offset from the pointer-derived anchor.
    pub offset: Vec2,
    /// Length of one fade-in/fade-out cycle, seconds.
    pub duration: f32,
    /// Hidden pause between cycles, seconds.
    pub repeat_delay: f32,
    pub position: Vec2,
    phase: f32,
}

impl Particle {
    /// Progress through the visible part of the cycle, or `None` while the
    /// particle waits out its repeat delay.
    pub fn cycle_progress(&self) -> Option<f32> {
        (self.phase < self.duration).then(|| self.phase / self.duration)
    }
}

/// Per-particle presentation for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleFrame {
    pub position: Vec2,
    pub opacity: f32,
    pub scale: f32,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    opacity: Keyframes,
    scale: Keyframes,
}

impl ParticleField {
    /// Timing and start positions are drawn once from `seed`; the field is
    /// never reseeded afterwards.
    pub fn new(count: usize, radius: f32, seed: u64, viewport: Viewport) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|i| {
                let angle = i as f32;
                Particle {
                    offset: Vec2::new(angle.sin(), angle.cos()) * radius,
                    duration: PARTICLE_DURATION_MIN_SEC
                        + rng.gen::<f32>() * PARTICLE_DURATION_SPAN_SEC,
                    repeat_delay: rng.gen::<f32>() * PARTICLE_REPEAT_DELAY_MAX_SEC,
                    position: Vec2::new(
                        rng.gen::<f32>() * viewport.width.max(0.0),
                        rng.gen::<f32>() * viewport.height.max(0.0),
                    ),
                    phase: 0.0,
                }
            })
            .collect();
        Self {
            particles,
            opacity: fade_curve(PARTICLE_PEAK_OPACITY),
            scale: fade_curve(1.0),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Where particle `i` is heading for the given normalized pointer.
    #[inline]
    pub fn target(&self, i: usize, pointer_norm: Vec2, viewport: Viewport) -> Vec2 {
        pointer_norm * viewport.size() + self.particles[i].offset
    }

    pub fn step(&mut self, dt: f32, pointer_norm: Vec2, viewport: Viewport) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let anchor = pointer_norm * viewport.size();
        for p in &mut self.particles {
            let period = p.duration + p.repeat_delay;
            p.phase = (p.phase + dt) % period;
            let tau = p.duration * PARTICLE_FOLLOW_TAU_FRACTION;
            let alpha = 1.0 - (-dt / tau).exp();
            let target = anchor + p.offset;
            p.position += (target - p.position) * alpha;
        }
    }

    pub fn frames(&self) -> impl Iterator<Item = ParticleFrame> + '_ {
        self.particles.iter().map(|p| match p.cycle_progress() {
            Some(u) => ParticleFrame {
                position: p.position,
                opacity: self.opacity.sample(u),
                scale: self.scale.sample(u),
            },
            None => ParticleFrame {
                position: p.position,
                opacity: 0.0,
                scale: 0.0,
            },
        })
    }
}

// 0 -> peak -> 0 over one cycle
fn fade_curve(peak: f32) -> Keyframes {
    Keyframes {
        points: [(0.0, 0.0), (0.5, peak), (1.0, 0.0)].into_iter().collect(),
    }
}
