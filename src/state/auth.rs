//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the home-page route guard and by post/comment composition to
//! attribute content to the signed-in user. `loading` stays `true` until
//! the stored session has been restored, so guards do not redirect during
//! the first render.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::util::session::SessionUser;

/// Demo identity used when a stored session has no display name.
const FALLBACK_NAME: &str = "Rohit Kumar";

/// Authentication state tracking the current user and restore status.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Display name for composed posts and comments.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .filter(|user| !user.name.trim().is_empty())
            .map_or_else(|| FALLBACK_NAME.to_owned(), |user| user.name.clone())
    }
}
