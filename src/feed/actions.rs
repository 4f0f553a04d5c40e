//! Delegated feed interaction handling.
//!
//! ARCHITECTURE
//! ============
//! The feed container owns exactly two listeners (click and keydown).
//! Dispatch classifies the event target by walking up to the nearest
//! `data-action` ancestor and parsing the attribute into [`FeedAction`],
//! so posts composed after the initial render participate without any
//! per-post registration. Counter arithmetic is pure and clamped at zero.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

#[cfg(feature = "csr")]
use leptos::prelude::*;
#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

#[cfg(feature = "csr")]
use crate::components::toast_host::notify;
#[cfg(feature = "csr")]
use crate::state::toasts::{DEFAULT_TOAST_DURATION_MS, ToastKind, ToastState};
#[cfg(feature = "csr")]
use crate::util::dom::el;

/// Typed form of the `data-action` attribute on feed affordances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedAction {
    Like,
    Comment,
    Share,
    CommentSubmit,
}

impl FeedAction {
    /// Parse a `data-action` value; unknown values dispatch nothing.
    #[must_use]
    pub fn from_attr(raw: &str) -> Option<Self> {
        match raw {
            "like" => Some(Self::Like),
            "comment" => Some(Self::Comment),
            "share" => Some(Self::Share),
            "comment-submit" => Some(Self::CommentSubmit),
            _ => None,
        }
    }

    #[must_use]
    pub fn attr(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Comment => "comment",
            Self::Share => "share",
            Self::CommentSubmit => "comment-submit",
        }
    }
}

/// Leading integer of a counter label ("5 Likes" -> 5). Unparsable labels
/// count as zero.
#[must_use]
pub fn parse_count(label: &str) -> u32 {
    label
        .trim()
        .split_whitespace()
        .next()
        .and_then(|word| word.parse().ok())
        .unwrap_or(0)
}

/// Render a counter label ("5 Likes").
#[must_use]
pub fn format_count(count: u32, noun: &str) -> String {
    format!("{count} {noun}")
}

/// Flip the like state and move the counter, clamped at zero.
#[must_use]
pub fn toggle_like(liked: bool, count: u32) -> (bool, u32) {
    if liked {
        (false, count.saturating_sub(1))
    } else {
        (true, count.saturating_add(1))
    }
}

/// Trimmed comment text, or `None` when the submission is empty.
#[must_use]
pub fn normalized_comment(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Delegated click handler for the posts container.
#[cfg(feature = "csr")]
pub fn handle_feed_click(
    ev: &web_sys::MouseEvent,
    toasts: RwSignal<ToastState>,
    author_name: &str,
    author_image: &str,
) {
    let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return;
    };
    let Ok(Some(action_el)) = target.closest("[data-action]") else {
        return;
    };
    let Some(action) = action_el
        .get_attribute("data-action")
        .as_deref()
        .and_then(FeedAction::from_attr)
    else {
        return;
    };

    match action {
        FeedAction::Like => apply_like_toggle(&action_el),
        FeedAction::Comment => focus_comment_box(&action_el),
        FeedAction::Share => notify(
            toasts,
            "Share functionality coming soon!",
            ToastKind::Info,
            DEFAULT_TOAST_DURATION_MS,
        ),
        FeedAction::CommentSubmit => {
            if let Some(input) = comment_box_of(&action_el) {
                submit_comment(&input, author_name, author_image);
            }
        }
    }
}

/// Delegated keydown handler: Enter inside a comment box submits it.
#[cfg(feature = "csr")]
pub fn handle_feed_keydown(ev: &web_sys::KeyboardEvent, author_name: &str, author_image: &str) {
    if ev.key() != "Enter" {
        return;
    }
    let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
    else {
        return;
    };
    if input.get_attribute("data-role").as_deref() != Some("comment-box") {
        return;
    }
    submit_comment(&input, author_name, author_image);
}

#[cfg(feature = "csr")]
fn apply_like_toggle(button: &web_sys::Element) {
    let was_liked = button.class_list().contains("liked");
    let now_liked = !was_liked;

    if let Ok(Some(icon)) = button.query_selector("i") {
        let classes = icon.class_list();
        if now_liked {
            let _ = classes.remove_1("far");
            let _ = classes.add_1("fas");
        } else {
            let _ = classes.remove_1("fas");
            let _ = classes.add_1("far");
        }
    }
    if now_liked {
        let _ = button.class_list().add_1("liked");
        play_like_animation(button);
    } else {
        let _ = button.class_list().remove_1("liked");
    }

    if let Some(counter) = stat_counter_of(button, "likes") {
        let count = parse_count(&counter.text_content().unwrap_or_default());
        let next = toggle_like(was_liked, count).1;
        counter.set_text_content(Some(&format_count(next, "Likes")));
    }
}

#[cfg(feature = "csr")]
fn play_like_animation(button: &web_sys::Element) {
    let Some(document) = button.owner_document() else {
        return;
    };
    let Some(animation) = el("div").class("like-animation").to_dom(&document) else {
        return;
    };
    let _ = button.append_child(&animation);
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(1000)).await;
        animation.remove();
    });
}

#[cfg(feature = "csr")]
fn focus_comment_box(action_el: &web_sys::Element) {
    if let Some(input) = comment_box_of(action_el) {
        let _ = input.focus();
    }
}

#[cfg(feature = "csr")]
fn comment_box_of(el_in_post: &web_sys::Element) -> Option<web_sys::HtmlInputElement> {
    let post = el_in_post.closest("[data-post-id]").ok().flatten()?;
    post.query_selector("[data-role='comment-box']")
        .ok()
        .flatten()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()
}

#[cfg(feature = "csr")]
fn stat_counter_of(el_in_post: &web_sys::Element, stat: &str) -> Option<web_sys::Element> {
    let post = el_in_post.closest("[data-post-id]").ok().flatten()?;
    post.query_selector(&format!("[data-stat='{stat}'] span"))
        .ok()
        .flatten()
}

/// Append a comment under the owning post, bump its counter, clear the box.
/// Empty or whitespace-only input is a no-op.
#[cfg(feature = "csr")]
fn submit_comment(input: &web_sys::HtmlInputElement, author_name: &str, author_image: &str) {
    let Some(text) = normalized_comment(&input.value()) else {
        return;
    };
    let Ok(Some(post)) = input.closest("[data-post-id]") else {
        return;
    };
    let Some(document) = post.owner_document() else {
        return;
    };

    // The comment list is created lazily on the first comment.
    let list = match post.query_selector("[data-role='comments']").ok().flatten() {
        Some(list) => list,
        None => {
            let Some(list) = el("div")
                .class("comments-list")
                .attr("data-role", "comments")
                .to_dom(&document)
            else {
                return;
            };
            let Ok(Some(area)) = post.query_selector("[data-role='comment-area']") else {
                return;
            };
            let _ = area.append_child(&list);
            list
        }
    };

    if let Some(comment) =
        crate::feed::compose::compose_comment(author_name, author_image, &text).to_dom(&document)
    {
        let _ = list.append_child(&comment);
    }

    if let Some(counter) = stat_counter_of(&post, "comments") {
        let count = parse_count(&counter.text_content().unwrap_or_default());
        counter.set_text_content(Some(&format_count(count + 1, "Comments")));
    }

    input.set_value("");
}
