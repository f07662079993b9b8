//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod admin_guard;
pub mod markdown;
pub mod mounted;
pub mod reduced_motion;
