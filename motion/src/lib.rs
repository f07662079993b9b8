//! Interaction state machines for the marketing site.
//!
//! Everything here is plain data plus pure transitions: no DOM, no timers, no
//! clocks. The `client` crate owns event wiring (pointer/keyboard listeners,
//! frame ticks, hide timers) and feeds observations into these types, then
//! reads back the state it should render.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`carousel`] | Wrapping index over a fixed list with slide direction metadata |
//! | [`spring`] | Second-order spring integrator used to ease visual values |
//! | [`pointer`] | Pointer-tracked magnetic/tilt transforms with reduced-motion gating |
//! | [`hover`] | Debounced hover disclosure shared across a sibling group |
//! | [`consts`] | Shared tuning constants (delays, spring defaults, thresholds) |

pub mod carousel;
pub mod consts;
pub mod hover;
pub mod pointer;
pub mod spring;
