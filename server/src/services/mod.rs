//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and remote-service concerns so route
//! handlers can stay focused on protocol translation and auth plumbing.

pub mod auth;
pub mod editor;
pub mod store;
