//! Home feed page: composer entry point, filters, and the posts container.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Posts are rendered fragments
//! prepended to the container (newest first); the container itself carries
//! the two delegated listeners that make every post interactive, including
//! ones composed after the initial render.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::post_modal::PostModal;
use crate::components::toast_host::notify;
use crate::feed::compose::{PostAuthor, PostRecord, compose};
use crate::net::api::preview_for;
use crate::state::auth::AuthState;
use crate::state::toasts::{DEFAULT_TOAST_DURATION_MS, ToastKind, ToastState};
use crate::state::ui::{FeedFilter, UiState};
use crate::util::relative_time::now_ms;

const HOUR_MS: f64 = 60.0 * 60.0 * 1000.0;

/// Demo posts shown before the user composes anything, newest first.
#[must_use]
pub fn seed_posts(now: f64) -> Vec<PostRecord> {
    vec![
        PostRecord::new(
            PostAuthor {
                name: "Priya Sharma".to_owned(),
                image: "images/profile-priya.jpg".to_owned(),
                details: "Electronics • 2nd Year".to_owned(),
            },
            "Our robotics club project is finally public: https://github.com/campus/line-follower \
             and issues and stars are welcome!",
            vec!["Robotics".to_owned(), "OpenSource".to_owned()],
            Some(preview_for("https://github.com/campus/line-follower")),
            now - 2.0 * HOUR_MS,
        ),
        PostRecord::new(
            PostAuthor {
                name: "Arjun Mehta".to_owned(),
                image: "images/profile-arjun.jpg".to_owned(),
                details: "Mechanical • 4th Year".to_owned(),
            },
            "Placement season tip: practice explaining your projects out loud. \
             It helped me more than any mock test.",
            vec!["Placements".to_owned()],
            None,
            now - 26.0 * HOUR_MS,
        ),
    ]
}

/// Initial feed markup, one composed fragment per seed post.
#[must_use]
pub fn seed_feed_html(now: f64) -> String {
    seed_posts(now)
        .iter()
        .map(|post| compose(post, now).to_html())
        .collect()
}

/// Toast shown when a feed filter is selected (filtering itself is a stub).
#[must_use]
pub fn filter_toast_message(filter: FeedFilter) -> String {
    format!("Viewing {} posts", filter.label())
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    // Redirect to sign-in once the session restore finishes with no user.
    let navigate_signin = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate_signin("/signin", NavigateOptions::default());
        }
    });

    let feed_ref = NodeRef::<leptos::html::Div>::new();

    let on_new_post = Callback::new(move |record: PostRecord| {
        #[cfg(feature = "csr")]
        {
            if let Some(container) = feed_ref.get() {
                if let Some(document) = container.owner_document() {
                    if let Some(node) = compose(&record, now_ms()).to_dom(&document) {
                        let _ = container.insert_before(&node, container.first_child().as_ref());
                    }
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = record;
        notify(
            toasts,
            "Post created successfully!",
            ToastKind::Success,
            DEFAULT_TOAST_DURATION_MS,
        );
    });

    let on_feed_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        crate::feed::actions::handle_feed_click(
            &ev,
            toasts,
            &auth.get_untracked().display_name(),
            "images/profile.jpg",
        );
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    let on_feed_keydown = move |ev: leptos::ev::KeyboardEvent| {
        #[cfg(feature = "csr")]
        crate::feed::actions::handle_feed_keydown(
            &ev,
            &auth.get_untracked().display_name(),
            "images/profile.jpg",
        );
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    let on_filter = move |filter: FeedFilter| {
        ui.update(|u| u.active_filter = filter);
        notify(
            toasts,
            filter_toast_message(filter),
            ToastKind::Info,
            DEFAULT_TOAST_DURATION_MS,
        );
    };

    let open_modal = move |_| {
        ui.update(|u| u.post_modal_open = true);
    };

    view! {
        <div class="home-page" on:click=move |_| ui.update(|u| u.open_dropdown = None)>
            <Navbar/>
            <main class="feed">
                <div class="start-post">
                    <img class="profile-img-small" src="images/profile.jpg" alt="Profile"/>
                    <button class="open-post-modal" on:click=open_modal>
                        "Start a post"
                    </button>
                </div>
                <div class="feed-filters">
                    {FeedFilter::ALL
                        .iter()
                        .map(|&filter| {
                            view! {
                                <button
                                    class="filter-btn"
                                    class:active=move || ui.get().active_filter == filter
                                    on:click=move |_| on_filter(filter)
                                >
                                    {filter.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div
                    class="posts-container"
                    node_ref=feed_ref
                    inner_html=seed_feed_html(now_ms())
                    on:click=on_feed_click
                    on:keydown=on_feed_keydown
                ></div>
            </main>
            <PostModal on_submit=on_new_post/>
        </div>
    }
}
