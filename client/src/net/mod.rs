//! Networking modules for the site's JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls; `types` defines client-only wire shapes. Record
//! rows and drafts come from the shared `records` crate.

pub mod api;
pub mod types;
