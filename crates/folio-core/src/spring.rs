//! Damped spring used to smooth pointer-driven motion.
//!
//! The integrator is decoupled from any frame scheduler: callers advance it
//! with `step(params, dt)` using whatever time step they measured, so tests can
//! drive it with synthetic steps.

use crate::constants::{
    SPRING_DAMPING, SPRING_MASS, SPRING_MAX_DT_SEC, SPRING_MAX_SUBSTEPS, SPRING_MAX_SUBSTEP_SEC,
    SPRING_STABILITY_MARGIN, SPRING_STIFFNESS,
};
use crate::error::MotionError;

/// Fixed parameters of a damped harmonic oscillator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
        }
    }
}

impl SpringParams {
    pub fn validate(&self) -> Result<(), MotionError> {
        if !(self.stiffness.is_finite() && self.stiffness > 0.0) {
            return Err(MotionError::InvalidStiffness(self.stiffness));
        }
        if !(self.damping.is_finite() && self.damping > 0.0) {
            return Err(MotionError::InvalidDamping(self.damping));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(MotionError::InvalidMass(self.mass));
        }
        if SPRING_MAX_DT_SEC / self.substep() > SPRING_MAX_SUBSTEPS as f32 {
            return Err(MotionError::UnstableSpring {
                stiffness: self.stiffness,
                damping: self.damping,
            });
        }
        Ok(())
    }

    /// Largest integration step that keeps semi-implicit Euler stable:
    /// both `h * sqrt(k / m)` and `h * c / m` stay at the stability margin.
    pub fn substep(&self) -> f32 {
        let omega = (self.stiffness / self.mass).sqrt();
        let damping_rate = self.damping / self.mass;
        SPRING_MAX_SUBSTEP_SEC
            .min(SPRING_STABILITY_MARGIN / omega)
            .min(SPRING_STABILITY_MARGIN / damping_rate)
    }

    /// Damping ratio; 1.0 is critical.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// One tracked scalar: value and velocity chasing a moving target.
#[derive(Clone, Debug, Default)]
pub struct Spring {
    pub value: f32,
    pub velocity: f32,
    pub target: f32,
    initialized: bool,
}

impl Spring {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retarget the spring. The first target ever received is adopted
    /// immediately with zero velocity; later targets are chased smoothly.
    pub fn set_target(&mut self, target: f32) {
        if !target.is_finite() {
            return;
        }
        if !self.initialized {
            self.snap(target);
            return;
        }
        self.target = target;
    }

    pub fn snap(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.initialized = true;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Advance by `dt` seconds using semi-implicit Euler, sub-stepped at
    /// `params.substep()` so stiff or heavily damped springs stay stable.
    pub fn step(&mut self, params: &SpringParams, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let max_h = params.substep();
        if !(max_h.is_finite() && max_h > 0.0) {
            return;
        }
        let mut remaining = dt.min(SPRING_MAX_DT_SEC);
        for _ in 0..SPRING_MAX_SUBSTEPS {
            if remaining <= 0.0 {
                break;
            }
            let h = remaining.min(max_h);
            let displacement = self.value - self.target;
            let accel = (-params.stiffness * displacement - params.damping * self.velocity)
                / params.mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
    }

    pub fn is_settled(&self, threshold: f32) -> bool {
        (self.value - self.target).abs() < threshold && self.velocity.abs() < threshold
    }
}
