//! Sign-up page: profile fields, password strength, skills, and terms.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::components::password_field::PasswordField;
use crate::components::tag_input::{TagInput, TagSet};
#[cfg(feature = "csr")]
use crate::net::types::{AuthMode, AuthRequest, SignupProfile};
use crate::state::auth::AuthState;
#[cfg(feature = "csr")]
use crate::util::session::{self, SessionUser};
use crate::util::validate::{FormError, is_strong_password, is_valid_email};

const BRANCHES: &[(&str, &str)] = &[
    ("cse", "Computer Science"),
    ("ece", "Electronics"),
    ("mech", "Mechanical"),
    ("civil", "Civil"),
];

const YEARS: &[(&str, &str)] = &[
    ("1", "1st Year"),
    ("2", "2nd Year"),
    ("3", "3rd Year"),
    ("4", "4th Year"),
];

/// Raw sign-up form contents as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub branch: String,
    pub year: String,
    pub password: String,
    pub confirm_password: String,
    pub terms_accepted: bool,
}

/// Validate in field order, stopping at the first failure. Returns the
/// form with text fields trimmed.
pub fn validate_signup(form: &SignupForm) -> Result<SignupForm, FormError> {
    let first_name = form.first_name.trim();
    let last_name = form.last_name.trim();
    let email = form.email.trim();
    let password = form.password.trim();
    let confirm_password = form.confirm_password.trim();

    if first_name.is_empty() {
        return Err(FormError::new("firstname", "First name is required"));
    }
    if last_name.is_empty() {
        return Err(FormError::new("lastname", "Last name is required"));
    }
    if email.is_empty() {
        return Err(FormError::new("email", "Email is required"));
    }
    if !is_valid_email(email) {
        return Err(FormError::new("email", "Please enter a valid email"));
    }
    if form.branch.is_empty() {
        return Err(FormError::new("branch", "Please select your branch"));
    }
    if form.year.is_empty() {
        return Err(FormError::new("year", "Please select your year"));
    }
    if password.is_empty() {
        return Err(FormError::new("password", "Password is required"));
    }
    if password.len() < 8 {
        return Err(FormError::new(
            "password",
            "Password must be at least 8 characters long",
        ));
    }
    if !is_strong_password(password) {
        return Err(FormError::new(
            "password",
            "Password must include uppercase, lowercase, number, and special character",
        ));
    }
    if confirm_password.is_empty() {
        return Err(FormError::new("confirm-password", "Please confirm your password"));
    }
    if password != confirm_password {
        return Err(FormError::new("confirm-password", "Passwords do not match"));
    }
    if !form.terms_accepted {
        return Err(FormError::new("terms", "You must accept the terms and conditions"));
    }

    Ok(SignupForm {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        branch: form.branch.clone(),
        year: form.year.clone(),
        password: password.to_owned(),
        confirm_password: confirm_password.to_owned(),
        terms_accepted: form.terms_accepted,
    })
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let branch = RwSignal::new(String::new());
    let year = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let terms = RwSignal::new(false);
    let skills = RwSignal::new(TagSet::new());
    let error = RwSignal::new(None::<FormError>);
    let busy = RwSignal::new(false);

    let field_error = move |field: &'static str| {
        error.get().filter(|e| e.field == field).map(|e| e.message)
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        let form = SignupForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            branch: branch.get_untracked(),
            year: year.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            terms_accepted: terms.get_untracked(),
        };
        let form = match validate_signup(&form) {
            Ok(form) => form,
            Err(err) => {
                error.set(Some(err));
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let request = AuthRequest {
                email: form.email.clone(),
                password: form.password.clone(),
                mode: AuthMode::SignUp,
                profile: Some(SignupProfile {
                    first_name: form.first_name.clone(),
                    last_name: form.last_name.clone(),
                    branch: form.branch.clone(),
                    year: form.year.clone(),
                }),
            };
            let response = crate::net::api::authenticate(&request).await;
            if response.success {
                let user = SessionUser {
                    name: format!("{} {}", form.first_name, form.last_name),
                    email: form.email,
                };
                session::save_user(&user, false);
                auth.set(AuthState { user: Some(user), loading: false });
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
            } else {
                error.set(Some(FormError::new("email", response.message)));
                busy.set(false);
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (form, auth);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>"Join CampusConnect"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <div class="form-row">
                        <div class="form-group" class:has-error=move || field_error("firstname").is_some()>
                            <label for="firstname">"First name"</label>
                            <input
                                id="firstname"
                                class="form-input"
                                type="text"
                                prop:value=move || first_name.get()
                                on:input=move |ev| first_name.set(event_target_value(&ev))
                            />
                            <p class="error-message">{move || field_error("firstname").unwrap_or_default()}</p>
                        </div>
                        <div class="form-group" class:has-error=move || field_error("lastname").is_some()>
                            <label for="lastname">"Last name"</label>
                            <input
                                id="lastname"
                                class="form-input"
                                type="text"
                                prop:value=move || last_name.get()
                                on:input=move |ev| last_name.set(event_target_value(&ev))
                            />
                            <p class="error-message">{move || field_error("lastname").unwrap_or_default()}</p>
                        </div>
                    </div>
                    <div class="form-group" class:has-error=move || field_error("email").is_some()>
                        <label for="email">"College email"</label>
                        <input
                            id="email"
                            class="form-input"
                            type="text"
                            placeholder="you@college.edu"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <p class="error-message">{move || field_error("email").unwrap_or_default()}</p>
                    </div>
                    <div class="form-row">
                        <div class="form-group" class:has-error=move || field_error("branch").is_some()>
                            <label for="branch">"Branch"</label>
                            <select
                                id="branch"
                                on:change=move |ev| branch.set(event_target_value(&ev))
                            >
                                <option value="">"Select branch"</option>
                                {BRANCHES
                                    .iter()
                                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                    .collect_view()}
                            </select>
                            <p class="error-message">{move || field_error("branch").unwrap_or_default()}</p>
                        </div>
                        <div class="form-group" class:has-error=move || field_error("year").is_some()>
                            <label for="year">"Year"</label>
                            <select
                                id="year"
                                on:change=move |ev| year.set(event_target_value(&ev))
                            >
                                <option value="">"Select year"</option>
                                {YEARS
                                    .iter()
                                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                    .collect_view()}
                            </select>
                            <p class="error-message">{move || field_error("year").unwrap_or_default()}</p>
                        </div>
                    </div>
                    <div class="form-group" class:has-error=move || field_error("password").is_some()>
                        <label for="password">"Password"</label>
                        <PasswordField value=password id="password" show_strength=true/>
                        <p class="error-message">{move || field_error("password").unwrap_or_default()}</p>
                    </div>
                    <div class="form-group" class:has-error=move || field_error("confirm-password").is_some()>
                        <label for="confirm-password">"Confirm password"</label>
                        <PasswordField
                            value=confirm_password
                            id="confirm-password"
                            placeholder={"Repeat your password".to_owned()}
                        />
                        <p class="error-message">{move || field_error("confirm-password").unwrap_or_default()}</p>
                    </div>
                    <div class="form-group">
                        <label for="skills">"Skills"</label>
                        <TagInput
                            tags=skills
                            placeholder="Add a skill and press Enter"
                            list_class={"selected-skills".to_owned()}
                            chip_class={"skill-tag".to_owned()}
                        />
                    </div>
                    <div class="form-group" class:has-error=move || field_error("terms").is_some()>
                        <label class="terms-label">
                            <input
                                type="checkbox"
                                prop:checked=move || terms.get()
                                on:change=move |_| terms.update(|t| *t = !*t)
                            />
                            "I accept the terms and conditions"
                        </label>
                        <p class="error-message">{move || field_error("terms").unwrap_or_default()}</p>
                    </div>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "Already have an account? " <a href="/signin">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
