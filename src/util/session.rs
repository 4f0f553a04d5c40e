//! Signed-in user persistence across page loads.
//!
//! The session record lives in `sessionStorage` for the normal flow and in
//! `localStorage` when the user asked to be remembered. Reads prefer the
//! session copy. Outside a browser build every operation is a silent no-op.

use serde::{Deserialize, Serialize};

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "campus_connect_user";

/// The stored identity of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
}

/// Persist the signed-in user. `remember` selects localStorage so the
/// session survives the browser closing.
pub fn save_user(user: &SessionUser, remember: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(json) = serde_json::to_string(user) else {
            return;
        };
        let storage = if remember {
            window.local_storage()
        } else {
            window.session_storage()
        };
        if let Ok(Some(storage)) = storage {
            let _ = storage.set_item(STORAGE_KEY, &json);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (user, remember);
    }
}

/// Read the signed-in user, if any.
#[must_use]
pub fn load_user() -> Option<SessionUser> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        for storage in [window.session_storage(), window.local_storage()] {
            if let Ok(Some(storage)) = storage {
                if let Ok(Some(json)) = storage.get_item(STORAGE_KEY) {
                    if let Ok(user) = serde_json::from_str::<SessionUser>(&json) {
                        return Some(user);
                    }
                }
            }
        }
        None
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Remove the stored user from both storage areas.
pub fn clear_user() {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        for storage in [window.session_storage(), window.local_storage()] {
            if let Ok(Some(storage)) = storage {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
