//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! All shared state (auth session, UI chrome, toast queue) is provided here
//! as `RwSignal` contexts so pages and components share explicit instances
//! instead of module-level globals.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{home::HomePage, signin::SignInPage, signup::SignUpPage};
use crate::state::{auth::AuthState, toasts::ToastState, ui::UiState};
use crate::util::{session, theme};

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(toasts);

    // Restore the stored session and theme preference before route guards run.
    Effect::new(move || {
        let dark = theme::read_preference();
        theme::apply(dark);
        ui.update(|u| u.dark_mode = dark);
        auth.set(AuthState { user: session::load_user(), loading: false });
    });

    view! {
        <Title text="CampusConnect"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("signin") view=SignInPage/>
                <Route path=StaticSegment("signup") view=SignUpPage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
