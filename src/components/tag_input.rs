//! Multi-value tag collector with removable chips.
//!
//! DESIGN
//! ======
//! `TagSet` owns the collected values: ordered for display, deduplicated by
//! normalized equality. Chips render *from* the set, so a chip exists if
//! and only if its value is a member; there is no separate chip list to
//! drift out of sync. Commit runs on Enter, on comma, and on blur; empty
//! and duplicate submissions clear the field without adding anything.

#[cfg(test)]
#[path = "tag_input_test.rs"]
mod tag_input_test;

use leptos::prelude::*;

/// Ordered, deduplicated tag collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagSet {
    values: Vec<String>,
}

impl TagSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical form of raw input: trimmed, commas stripped. `None` when
    /// nothing is left.
    #[must_use]
    pub fn normalize(raw: &str) -> Option<String> {
        let value = raw.trim().replace(',', "");
        if value.is_empty() { None } else { Some(value) }
    }

    /// Add a value if it normalizes to something new. Returns whether the
    /// set grew; duplicates are dropped silently.
    pub fn insert(&mut self, raw: &str) -> bool {
        let Some(value) = Self::normalize(raw) else {
            return false;
        };
        if self.values.contains(&value) {
            return false;
        }
        self.values.push(value);
        true
    }

    /// Remove one value. Returns whether it was present.
    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.values.len();
        self.values.retain(|v| v != value);
        self.values.len() != before
    }

    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Values in insertion order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

/// Text field that collects tags into `tags`, rendering one removable chip
/// per value.
#[component]
pub fn TagInput(
    tags: RwSignal<TagSet>,
    #[prop(into)] placeholder: String,
    #[prop(default = String::from("selected-tags"))] list_class: String,
    #[prop(default = String::from("tag"))] chip_class: String,
) -> impl IntoView {
    let pending = RwSignal::new(String::new());

    let commit = move || {
        let raw = pending.get_untracked();
        tags.update(|set| {
            let _ = set.insert(&raw);
        });
        pending.set(String::new());
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let key = ev.key();
        if key == "Enter" || key == "," {
            ev.prevent_default();
            commit();
        }
    };

    let remove = move |value: &str| {
        tags.update(|set| {
            let _ = set.remove(value);
        });
    };

    view! {
        <div class="tag-input-field">
            <input
                class="tag-input"
                type="text"
                placeholder=placeholder
                prop:value=move || pending.get()
                on:input=move |ev| pending.set(event_target_value(&ev))
                on:keydown=on_keydown
                on:blur=move |_| commit()
            />
            <div class=list_class>
                {move || {
                    tags.get()
                        .values()
                        .iter()
                        .cloned()
                        .map(|value| {
                            let chip_value = value.clone();
                            view! {
                                <span class=chip_class.clone()>
                                    {value}
                                    <span
                                        class="remove-tag"
                                        on:click=move |_| remove(&chip_value)
                                    >
                                        "×"
                                    </span>
                                </span>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
