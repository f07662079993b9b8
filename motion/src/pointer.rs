//! Pointer-tracked transforms: magnetic buttons and tilt cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components attach pointer-move listeners only between `enter` and `leave`
//! and only when [`PointerTracker::subscribes`] is true. Each frame they call
//! [`PointerTracker::tick`] and render [`PointerTracker::transform`]. With
//! reduced motion enabled the tracker never asks for listeners and always
//! reports a zero offset.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAGNETIC_STRENGTH, TILT_MAX_DEG, TILT_PERSPECTIVE_PX};
use crate::spring::{Spring2, SpringConfig, Vec2};

/// Element bounding box in client (viewport) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Pointer position as a `0..=1` fraction of width and height.
    ///
    /// Degenerate (zero-size) boxes map everything to the middle.
    #[must_use]
    pub fn fraction_of(&self, point: Vec2) -> Vec2 {
        let fx = if self.width > 0.0 { ((point.x - self.left) / self.width).clamp(0.0, 1.0) } else { 0.5 };
        let fy = if self.height > 0.0 { ((point.y - self.top) / self.height).clamp(0.0, 1.0) } else { 0.5 };
        Vec2::new(fx, fy)
    }
}

/// How pointer position maps to a target offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TrackingMode {
    /// Translate toward the pointer by `strength` times its distance from center.
    Magnetic { strength: f64 },
    /// Rotate around both axes; `max_deg` is reached at the element edges.
    Tilt { max_deg: f64 },
}

impl TrackingMode {
    #[must_use]
    pub fn magnetic() -> Self {
        Self::Magnetic { strength: MAGNETIC_STRENGTH }
    }

    #[must_use]
    pub fn tilt() -> Self {
        Self::Tilt { max_deg: TILT_MAX_DEG }
    }
}

/// Visual transform to apply to the tracked element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Identity,
    Translate { x_px: f64, y_px: f64 },
    Tilt { rotate_x_deg: f64, rotate_y_deg: f64 },
}

impl Transform {
    /// CSS `transform` property value.
    #[must_use]
    pub fn to_css(&self) -> String {
        match *self {
            Self::Identity => "none".to_owned(),
            Self::Translate { x_px, y_px } => format!("translate3d({x_px:.2}px, {y_px:.2}px, 0)"),
            Self::Tilt { rotate_x_deg, rotate_y_deg } => format!(
                "perspective({TILT_PERSPECTIVE_PX}px) rotateX({rotate_x_deg:.2}deg) rotateY({rotate_y_deg:.2}deg)"
            ),
        }
    }
}

/// Hover-gated pointer tracker with spring smoothing.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerTracker {
    mode: TrackingMode,
    reduced_motion: bool,
    hovered: bool,
    spring: Spring2,
}

impl PointerTracker {
    #[must_use]
    pub fn new(mode: TrackingMode, config: SpringConfig, reduced_motion: bool) -> Self {
        Self { mode, reduced_motion, hovered: false, spring: Spring2::new(config) }
    }

    #[must_use]
    pub fn mode(&self) -> TrackingMode {
        self.mode
    }

    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether the view should attach pointer listeners at all.
    #[must_use]
    pub fn subscribes(&self) -> bool {
        !self.reduced_motion
    }

    /// Update the reduced-motion preference. Enabling it discards all motion.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
        if reduced {
            self.hovered = false;
            self.spring.snap_to(Vec2::ZERO);
        }
    }

    /// Pointer entered the element. Returns `true` if move events should now be tracked.
    pub fn enter(&mut self) -> bool {
        if self.reduced_motion {
            return false;
        }
        self.hovered = true;
        true
    }

    /// Pointer moved to `pointer` (client coordinates) over an element at `rect`.
    ///
    /// Ignored unless hovered. Returns `true` if the target changed.
    pub fn pointer_move(&mut self, pointer: Vec2, rect: Rect) -> bool {
        if self.reduced_motion || !self.hovered {
            return false;
        }
        let target = match self.mode {
            TrackingMode::Magnetic { strength } => pointer.sub(rect.center()).scale(strength),
            TrackingMode::Tilt { .. } => rect.fraction_of(pointer).sub(Vec2::new(0.5, 0.5)),
        };
        if target == self.spring.target() {
            return false;
        }
        self.spring.set_target(target);
        true
    }

    /// Pointer left the element; spring back to rest.
    pub fn leave(&mut self) {
        self.hovered = false;
        self.spring.set_target(Vec2::ZERO);
    }

    /// Advance smoothing by one frame. Returns `true` while motion is active.
    pub fn tick(&mut self, dt_secs: f64) -> bool {
        if self.reduced_motion {
            return false;
        }
        self.spring.step(dt_secs)
    }

    /// Whether a frame loop needs to keep running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.reduced_motion && !self.spring.is_at_rest()
    }

    /// Smoothed offset. Pixels for magnetic mode, `-0.5..=0.5` fractions for tilt.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        if self.reduced_motion { Vec2::ZERO } else { self.spring.position() }
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        let offset = self.offset();
        if offset == Vec2::ZERO {
            return Transform::Identity;
        }
        match self.mode {
            TrackingMode::Magnetic { .. } => Transform::Translate { x_px: offset.x, y_px: offset.y },
            TrackingMode::Tilt { max_deg } => Transform::Tilt {
                rotate_x_deg: -offset.y * 2.0 * max_deg,
                rotate_y_deg: offset.x * 2.0 * max_deg,
            },
        }
    }
}
