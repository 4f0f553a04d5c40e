//! Post, comment, and link-preview fragment assembly.
//!
//! DESIGN
//! ======
//! Composition is pure: a `PostRecord` goes in, an element tree comes out,
//! and the caller decides where to insert it. Interactive affordances carry
//! `data-action` / `data-stat` / `data-role` identifiers so the delegated
//! handlers in `actions` can classify clicks without caring about markup
//! structure.

#[cfg(test)]
#[path = "compose_test.rs"]
mod compose_test;

use uuid::Uuid;

use crate::net::types::LinkPreview;
use crate::util::dom::{El, el};
use crate::util::relative_time::relative_time_from_ms;

/// Author block displayed in the post header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostAuthor {
    pub name: String,
    pub image: String,
    pub details: String,
}

/// One feed post. Tags keep their insertion order for display.
#[derive(Clone, Debug, PartialEq)]
pub struct PostRecord {
    pub id: String,
    pub author: PostAuthor,
    pub content: String,
    pub timestamp_ms: f64,
    pub tags: Vec<String>,
    pub link_preview: Option<LinkPreview>,
}

impl PostRecord {
    /// Build a record with a fresh id.
    #[must_use]
    pub fn new(
        author: PostAuthor,
        content: impl Into<String>,
        tags: Vec<String>,
        link_preview: Option<LinkPreview>,
        timestamp_ms: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author,
            content: content.into(),
            tags,
            link_preview,
            timestamp_ms,
        }
    }
}

/// Assemble the rendered fragment for one post. `now_ms` anchors the
/// relative timestamp in the header.
#[must_use]
pub fn compose(post: &PostRecord, now_ms: f64) -> El {
    let meta = format!(
        "{} • {}",
        post.author.details,
        relative_time_from_ms(now_ms - post.timestamp_ms)
    );

    let tag_row = if post.tags.is_empty() {
        None
    } else {
        Some(
            el("div")
                .class("post-tags")
                .children(post.tags.iter().map(|tag| el("span").class("tag").child(tag.as_str()))),
        )
    };

    el("article")
        .class("post")
        .attr("data-post-id", &post.id)
        .child(
            el("div")
                .class("post-header")
                .child(
                    el("img")
                        .class("post-avatar")
                        .attr("src", &post.author.image)
                        .attr("alt", &post.author.name),
                )
                .child(
                    el("div")
                        .class("post-author-info")
                        .child(el("div").class("post-author-name").child(post.author.name.as_str()))
                        .child(el("div").class("post-meta").child(meta)),
                )
                .child(
                    el("button")
                        .class("post-menu-btn")
                        .child(el("i").class("fas fa-ellipsis-h")),
                ),
        )
        .child(
            el("div")
                .class("post-content")
                .child(el("p").child(post.content.as_str()))
                .child_opt(post.link_preview.as_ref().map(compose_link_preview))
                .child_opt(tag_row),
        )
        .child(
            el("div")
                .class("post-stats")
                .child(
                    el("div")
                        .class("stat-item")
                        .attr("data-stat", "likes")
                        .child(el("i").class("fas fa-thumbs-up"))
                        .child(el("span").child("0 Likes")),
                )
                .child(
                    el("div")
                        .class("stat-item")
                        .attr("data-stat", "comments")
                        .child(el("span").child("0 Comments")),
                )
                .child(
                    el("div")
                        .class("stat-item")
                        .attr("data-stat", "shares")
                        .child(el("span").child("0 Shares")),
                ),
        )
        .child(
            el("div")
                .class("post-actions")
                .child(action_button("like", "far fa-thumbs-up", "Like"))
                .child(action_button("comment", "far fa-comment", "Comment"))
                .child(action_button("share", "far fa-share-square", "Share")),
        )
        .child(
            el("div")
                .class("post-comments")
                .attr("data-role", "comment-area")
                .child(
                    el("div")
                        .class("comment-input")
                        .child(
                            el("img")
                                .class("profile-img-small")
                                .attr("src", &post.author.image)
                                .attr("alt", "Your Profile"),
                        )
                        .child(
                            el("input")
                                .class("comment-box")
                                .attr("data-role", "comment-box")
                                .attr("type", "text")
                                .attr("placeholder", "Write a comment..."),
                        )
                        .child(
                            el("button")
                                .class("comment-send")
                                .attr("data-action", "comment-submit")
                                .child(el("i").class("fas fa-paper-plane")),
                        ),
                ),
        )
}

/// Card for a linked URL inside the post body.
#[must_use]
pub fn compose_link_preview(preview: &LinkPreview) -> El {
    el("div")
        .class("link-preview")
        .child(
            el("div").class("link-image").child(
                el("img")
                    .attr("src", &preview.image)
                    .attr("alt", "Link Preview"),
            ),
        )
        .child(
            el("div")
                .class("link-details")
                .child(el("h4").child(preview.title.as_str()))
                .child(el("p").child(preview.description.as_str()))
                .child(el("p").class("link-url").child(preview.domain.as_str())),
        )
}

/// One rendered comment entry.
#[must_use]
pub fn compose_comment(author_name: &str, author_image: &str, text: &str) -> El {
    el("div")
        .class("comment")
        .child(
            el("img")
                .class("comment-avatar")
                .attr("src", author_image)
                .attr("alt", author_name),
        )
        .child(
            el("div")
                .class("comment-content")
                .child(el("div").class("comment-author").child(author_name))
                .child(el("p").child(text))
                .child(
                    el("div")
                        .class("comment-actions")
                        .child(el("button").child("Like"))
                        .child(el("button").child("Reply"))
                        .child(el("span").class("comment-time").child("just now")),
                ),
        )
}

fn action_button(action: &str, icon: &str, label: &str) -> El {
    el("button")
        .class("post-action-btn")
        .attr("data-action", action)
        .child(el("i").class(icon))
        .child(el("span").child(label))
}
