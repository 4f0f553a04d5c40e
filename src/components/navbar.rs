//! Top navigation bar: brand, links, theme toggle, and dropdown menus.
//!
//! Dropdown triggers stop click propagation; the page root's click handler
//! closes whichever menu is open, so clicking anywhere else dismisses it.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::{DropdownMenu, UiState, toggle_dropdown};
use crate::util::{session, theme};

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_theme_toggle = move |_| {
        let next = theme::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    let on_menu_toggle = move |_| ui.update(|u| u.mobile_nav_open = !u.mobile_nav_open);

    let on_notifications = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        ui.update(|u| u.open_dropdown = toggle_dropdown(u.open_dropdown, DropdownMenu::Notifications));
    };

    let on_profile = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        ui.update(|u| u.open_dropdown = toggle_dropdown(u.open_dropdown, DropdownMenu::Profile));
    };

    let on_sign_out = move |_| {
        session::clear_user();
        // The home-page guard redirects once the user is gone.
        auth.update(|state| state.user = None);
    };

    view! {
        <header class="navbar">
            <div class="logo">"CampusConnect"</div>
            <button class="menu-toggle" on:click=on_menu_toggle>
                <i class="fas fa-bars"></i>
            </button>
            <nav class:nav-open=move || ui.get().mobile_nav_open>
                <a href="/">"Home"</a>
                <a href="/">"My Network"</a>
                <a href="/">"Events"</a>
            </nav>
            <div class="nav-actions">
                <label class="theme-toggle" title="Toggle dark mode">
                    <input
                        type="checkbox"
                        prop:checked=move || ui.get().dark_mode
                        on:change=on_theme_toggle
                    />
                    <span class="slider"></span>
                </label>
                <div class="notification-menu">
                    <button class="notification-btn" on:click=on_notifications>
                        <i class="fas fa-bell"></i>
                    </button>
                    <Show when=move || ui.get().open_dropdown == Some(DropdownMenu::Notifications)>
                        <div class="dropdown" on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                            <div class="dropdown-item">"No new notifications"</div>
                        </div>
                    </Show>
                </div>
                <div class="profile-menu">
                    <button class="profile-btn" on:click=on_profile>
                        <img class="profile-img-small" src="images/profile.jpg" alt="Profile"/>
                        <span>{move || auth.get().display_name()}</span>
                    </button>
                    <Show when=move || ui.get().open_dropdown == Some(DropdownMenu::Profile)>
                        <div class="dropdown" on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                            <a class="dropdown-item" href="/">"View Profile"</a>
                            <a class="dropdown-item" href="/">"Settings"</a>
                            <button class="dropdown-item" on:click=on_sign_out>"Sign Out"</button>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}
