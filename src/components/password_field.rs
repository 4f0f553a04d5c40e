//! Password input with visibility toggle and optional strength meter.

#[cfg(test)]
#[path = "password_field_test.rs"]
mod password_field_test;

use leptos::prelude::*;

use crate::util::validate::{StrengthLevel, strength_score};

/// Meter fill width for the current password; empty input shows no bar.
#[must_use]
pub fn meter_width(password: &str) -> &'static str {
    if password.is_empty() {
        "0"
    } else {
        StrengthLevel::from_score(strength_score(password)).bar_width()
    }
}

/// Meter fill color for the current password.
#[must_use]
pub fn meter_color(password: &str) -> &'static str {
    if password.is_empty() {
        "transparent"
    } else {
        StrengthLevel::from_score(strength_score(password)).bar_color()
    }
}

/// Meter container class, carrying the strength bucket once non-empty.
#[must_use]
pub fn meter_class(password: &str) -> String {
    if password.is_empty() {
        "password-strength".to_owned()
    } else {
        let level = StrengthLevel::from_score(strength_score(password));
        format!("password-strength {}", level.css_class())
    }
}

/// Password field bound to `value`. `show_strength` adds the live meter
/// used on the sign-up page.
#[component]
pub fn PasswordField(
    value: RwSignal<String>,
    #[prop(into)] id: String,
    #[prop(default = String::from("Enter your password"))] placeholder: String,
    #[prop(optional)] show_strength: bool,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <div class="password-input">
            <input
                id=id
                class="form-input"
                type=move || if visible.get() { "text" } else { "password" }
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button
                type="button"
                class="password-toggle"
                on:click=move |_| visible.update(|v| *v = !*v)
            >
                <i class=move || {
                    if visible.get() { "fas fa-eye-slash" } else { "fas fa-eye" }
                }></i>
            </button>
            <Show when=move || show_strength>
                <div class=move || meter_class(&value.get())>
                    <div
                        class="strength-bar"
                        style=move || {
                            format!(
                                "width: {}; background-color: {}",
                                meter_width(&value.get()),
                                meter_color(&value.get()),
                            )
                        }
                    ></div>
                </div>
            </Show>
        </div>
    }
}
