//! Shared application state provided as Leptos contexts.

pub mod auth;
pub mod toasts;
pub mod ui;
