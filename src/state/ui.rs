//! Local UI chrome state (dropdowns, mobile nav, theme flag, feed filter).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of auth and feed logic so the
//! chrome can evolve independently. Only one dropdown may be open at a
//! time; opening another closes the first.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// The navbar dropdown menus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownMenu {
    Profile,
    Notifications,
}

/// Feed filter tabs above the post list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedFilter {
    #[default]
    All,
    Trending,
    Following,
}

impl FeedFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Trending, Self::Following];

    /// Label used on the filter button and in the filter toast.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Trending => "trending",
            Self::Following => "following",
        }
    }
}

/// UI state for navbar chrome and the post-composition modal.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub mobile_nav_open: bool,
    pub open_dropdown: Option<DropdownMenu>,
    pub active_filter: FeedFilter,
    pub post_modal_open: bool,
}

/// Clicking a dropdown trigger toggles it; clicking the other trigger
/// switches to it.
#[must_use]
pub fn toggle_dropdown(
    current: Option<DropdownMenu>,
    clicked: DropdownMenu,
) -> Option<DropdownMenu> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}
