//! Theme preference and the `dark-theme` body class.
//!
//! Reads the saved preference from `localStorage` (`theme` key holding
//! `dark` or `light`), falling back to the system color scheme. Applying
//! toggles the `dark-theme` class on `<body>`. Requires a browser
//! environment; native builds no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "theme";

/// Read the dark-theme preference: saved value first, then the system
/// `prefers-color-scheme` setting.
#[must_use]
pub fn read_preference() -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(saved)) = storage.get_item(STORAGE_KEY) {
                return saved == "dark";
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Add or remove the `dark-theme` class on `<body>`.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        let classes = body.class_list();
        if enabled {
            let _ = classes.add_1("dark-theme");
        } else {
            let _ = classes.remove_1("dark-theme");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, apply it, and persist the new choice.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, if next { "dark" } else { "light" });
            }
        }
    }
    next
}
