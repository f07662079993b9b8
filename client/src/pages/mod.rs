//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Admin pages share request helpers from `admin`.

pub mod admin;
pub mod admin_case_studies;
pub mod admin_integrations;
pub mod admin_login;
pub mod case_studies;
pub mod case_study_detail;
pub mod home;
