//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interaction surfaces while reading and
//! writing shared state from the Leptos context providers installed in
//! `app`.

pub mod navbar;
pub mod password_field;
pub mod post_modal;
pub mod tag_input;
pub mod toast_host;
