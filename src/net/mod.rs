//! Simulated external collaborators: authentication and link preview.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no server. These modules stand in for the network boundary with
//! an explicit async contract so the auth and composer flows never depend
//! on where the answers actually come from.

pub mod api;
pub mod types;
