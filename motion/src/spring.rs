//! Second-order spring used to ease visual values toward a moving target.
//!
//! The integrator is semi-implicit Euler over fixed sub-steps, so results do
//! not depend on the caller's frame rate beyond the final partial sub-step.
//! Callers sample it once per animation frame and stop ticking when
//! [`Spring::step`] reports the spring has come to rest.

#[cfg(test)]
#[path = "spring_test.rs"]
mod spring_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    SPRING_DAMPING, SPRING_MASS, SPRING_MAX_FRAME_SECS, SPRING_REST_DISTANCE, SPRING_REST_VELOCITY, SPRING_STIFFNESS,
    SPRING_SUBSTEP_SECS,
};

/// A 2D value in CSS pixels or normalized units, depending on the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self { x: self.x * factor, y: self.y * factor }
    }

    #[must_use]
    pub fn sub(self, other: Self) -> Self {
        Self { x: self.x - other.x, y: self.y - other.y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self { stiffness: SPRING_STIFFNESS, damping: SPRING_DAMPING, mass: SPRING_MASS }
    }
}

impl SpringConfig {
    /// `damping / (2 * sqrt(stiffness * mass))`; `1.0` is critical damping.
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        let denom = 2.0 * (self.stiffness * self.mass).sqrt();
        if denom <= 0.0 { 0.0 } else { self.damping / denom }
    }
}

/// One-dimensional spring state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    pub position: f64,
    pub velocity: f64,
    pub target: f64,
    pub config: SpringConfig,
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(SpringConfig::default())
    }
}

impl Spring {
    #[must_use]
    pub fn new(config: SpringConfig) -> Self {
        Self { position: 0.0, velocity: 0.0, target: 0.0, config }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jump to `value` with no motion.
    pub fn snap_to(&mut self, value: f64) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
    }

    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.velocity == 0.0 && self.position == self.target
    }

    /// Advance by `dt_secs`. Returns `true` while still moving.
    pub fn step(&mut self, dt_secs: f64) -> bool {
        if !dt_secs.is_finite() || dt_secs <= 0.0 {
            return !self.is_at_rest();
        }
        if self.is_at_rest() {
            return false;
        }
        let mass = if self.config.mass > 0.0 { self.config.mass } else { SPRING_MASS };

        let mut remaining = dt_secs.min(SPRING_MAX_FRAME_SECS);
        while remaining > 0.0 {
            let h = remaining.min(SPRING_SUBSTEP_SECS);
            let displacement = self.position - self.target;
            let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
            self.velocity += (force / mass) * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if self.velocity.abs() < SPRING_REST_VELOCITY && (self.position - self.target).abs() < SPRING_REST_DISTANCE {
            self.snap_to(self.target);
            return false;
        }
        true
    }
}

/// Two independent springs sharing one config.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Spring2 {
    pub x: Spring,
    pub y: Spring,
}

impl Spring2 {
    #[must_use]
    pub fn new(config: SpringConfig) -> Self {
        Self { x: Spring::new(config), y: Spring::new(config) }
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn snap_to(&mut self, value: Vec2) {
        self.x.snap_to(value.x);
        self.y.snap_to(value.y);
    }

    #[must_use]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x.position, self.y.position)
    }

    #[must_use]
    pub fn target(&self) -> Vec2 {
        Vec2::new(self.x.target, self.y.target)
    }

    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }

    /// Advance both axes. Returns `true` while either axis is moving.
    pub fn step(&mut self, dt_secs: f64) -> bool {
        let x_active = self.x.step(dt_secs);
        let y_active = self.y.step(dt_secs);
        x_active || y_active
    }
}
