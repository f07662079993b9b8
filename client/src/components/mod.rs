//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components bind the `motion` state machines to DOM events and render the
//! admin forms over `state::editor::EditorState`.

pub mod carousel;
pub mod case_study_card;
pub mod case_study_form;
pub mod confirm_dialog;
pub mod form_fields;
pub mod hover_menu;
pub mod integration_form;
pub mod magnetic_button;
pub mod pointer_surface;
pub mod site_header;
pub mod tilt_card;
pub mod toast;
