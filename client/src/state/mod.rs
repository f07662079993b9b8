//! Client-side reactive state modules.
//!
//! DESIGN
//! ======
//! Each struct is plain data wrapped in an `RwSignal` by the component that
//! owns it. Transitions are methods so the admin flows can be unit tested
//! without a browser.

pub mod auth;
pub mod editor;
pub mod toast;
