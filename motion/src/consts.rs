//! Shared tuning constants for the motion crate.

// ── Hover disclosure ────────────────────────────────────────────

/// Delay before a hover disclosure closes after the pointer leaves, in ms.
pub const HOVER_HIDE_DELAY_MS: u32 = 200;

// ── Spring defaults ─────────────────────────────────────────────

/// Default spring stiffness (force per unit displacement).
pub const SPRING_STIFFNESS: f64 = 200.0;

/// Default spring damping. Together with the defaults above and below this
/// lands exactly on critical damping: `2 * sqrt(200 * 0.5) == 20`.
pub const SPRING_DAMPING: f64 = 20.0;

/// Default spring mass.
pub const SPRING_MASS: f64 = 0.5;

/// Fixed integration sub-step, in seconds.
pub const SPRING_SUBSTEP_SECS: f64 = 1.0 / 240.0;

/// Largest frame delta accepted by a single `step`. Backgrounded tabs can
/// deliver multi-second gaps; anything above this is treated as one long frame.
pub const SPRING_MAX_FRAME_SECS: f64 = 0.064;

/// Below this speed the spring is eligible to snap to rest.
pub const SPRING_REST_VELOCITY: f64 = 0.01;

/// Below this distance from target the spring is eligible to snap to rest.
pub const SPRING_REST_DISTANCE: f64 = 0.005;

// ── Pointer tracking ────────────────────────────────────────────

/// Fraction of the pointer's distance from center that a magnetic element follows.
pub const MAGNETIC_STRENGTH: f64 = 0.2;

/// Peak rotation of a tilt card at its edges, in degrees.
pub const TILT_MAX_DEG: f64 = 10.0;

/// CSS perspective distance used by tilt transforms, in pixels.
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;

// ── Carousel ────────────────────────────────────────────────────

/// Horizontal travel of an entering/exiting slide, as percent of its width.
pub const SLIDE_TRAVEL_PCT: f64 = 100.0;

/// Autoplay interval for carousels that opt into it, in ms.
pub const CAROUSEL_AUTOPLAY_MS: u32 = 6000;
