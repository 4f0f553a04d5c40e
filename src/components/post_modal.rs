//! Post composition modal: content draft, tags, and debounced link preview.
//!
//! CONCURRENCY
//! ===========
//! Every edit bumps a generation counter and schedules a lookup task; when
//! a task wakes it checks that its generation is still current before doing
//! any work. Within the debounce window only the last edit survives, so a
//! burst of typing produces exactly one preview fetch.

#[cfg(test)]
#[path = "post_modal_test.rs"]
mod post_modal_test;

use leptos::prelude::*;

use crate::components::tag_input::{TagInput, TagSet};
use crate::feed::compose::{PostAuthor, PostRecord, compose_link_preview};
use crate::net::types::LinkPreview;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::relative_time::now_ms;

/// Quiet period after the last edit before the preview lookup fires.
pub const PREVIEW_DEBOUNCE_MS: u64 = 500;

/// Detail line attached to self-authored posts until real profiles exist.
const AUTHOR_DETAILS: &str = "Computer Science • 3rd Year";

/// First `http(s)://` token in the draft, if any.
#[must_use]
pub fn extract_first_url(content: &str) -> Option<&str> {
    let start = match (content.find("http://"), content.find("https://")) {
        (Some(a), Some(b)) => a.min(b),
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (None, None) => return None,
    };
    let rest = &content[start..];
    let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    Some(&rest[..end])
}

/// The post button enables once the draft has visible content.
#[must_use]
pub fn can_post(content: &str) -> bool {
    !content.trim().is_empty()
}

/// A scheduled preview lookup only fires if no later edit superseded it.
#[must_use]
pub fn should_fire(scheduled_generation: u64, current_generation: u64) -> bool {
    scheduled_generation == current_generation
}

/// Modal dialog for composing a post. Submission hands the assembled
/// [`PostRecord`] to `on_submit` and resets the draft.
#[component]
pub fn PostModal(on_submit: Callback<PostRecord>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let content = RwSignal::new(String::new());
    let tags = RwSignal::new(TagSet::new());
    let preview = RwSignal::new(None::<LinkPreview>);
    let preview_generation = RwSignal::new(0_u64);

    let schedule_preview = move |generation: u64| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(PREVIEW_DEBOUNCE_MS))
                .await;
            if !should_fire(generation, preview_generation.get_untracked()) {
                return;
            }
            let draft = content.get_untracked();
            match extract_first_url(&draft) {
                Some(url) => {
                    let fetched = crate::net::api::fetch_link_preview(url).await;
                    preview.set(Some(fetched));
                }
                None => preview.set(None),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = generation;
    };

    let on_content_input = move |ev| {
        content.set(event_target_value(&ev));
        let generation = preview_generation.get_untracked() + 1;
        preview_generation.set(generation);
        schedule_preview(generation);
    };

    let reset_draft = move || {
        content.set(String::new());
        tags.update(TagSet::clear);
        preview.set(None);
        // Invalidate any lookup still sleeping on the old draft.
        preview_generation.update(|g| *g += 1);
    };

    let close = move |_| {
        ui.update(|u| u.post_modal_open = false);
    };

    let on_post = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let text = content.get_untracked().trim().to_owned();
        if text.is_empty() {
            return;
        }
        let record = PostRecord::new(
            PostAuthor {
                name: auth.get_untracked().display_name(),
                image: "images/profile.jpg".to_owned(),
                details: AUTHOR_DETAILS.to_owned(),
            },
            text,
            tags.get_untracked().values().to_vec(),
            preview.get_untracked(),
            now_ms(),
        );
        on_submit.run(record);
        reset_draft();
        ui.update(|u| u.post_modal_open = false);
    };

    view! {
        <Show when=move || ui.get().post_modal_open>
            <div class="modal-backdrop" on:click=close>
                <div
                    class="modal-content"
                    on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                >
                    <div class="modal-header">
                        <h2>"Create Post"</h2>
                        <button class="close-modal" on:click=close>"✕"</button>
                    </div>
                    <textarea
                        class="post-content"
                        placeholder="What do you want to talk about?"
                        prop:value=move || content.get()
                        on:input=on_content_input
                    ></textarea>
                    {move || {
                        preview.get().map(|p| {
                            view! {
                                <div class="post-preview" inner_html=compose_link_preview(&p).to_html()></div>
                            }
                        })
                    }}
                    <TagInput
                        tags=tags
                        placeholder="Add tags (press Enter or comma)"
                    />
                    <div class="modal-footer">
                        <button
                            class="post-btn"
                            disabled=move || !can_post(&content.get())
                            on:click=on_post
                        >
                            "Post"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
