//! Sign-in page with first-failure validation and the simulated auth flow.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use leptos::prelude::*;

use crate::components::password_field::PasswordField;
#[cfg(feature = "csr")]
use crate::net::types::{AuthMode, AuthRequest};
use crate::state::auth::AuthState;
#[cfg(feature = "csr")]
use crate::util::session::{self, SessionUser};
use crate::util::validate::{FormError, is_valid_email};

/// Validate in field order, stopping at the first failure. Returns the
/// trimmed credentials.
pub fn validate_signin(email: &str, password: &str) -> Result<(String, String), FormError> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() {
        return Err(FormError::new("email", "Email is required"));
    }
    if !is_valid_email(email) {
        return Err(FormError::new("email", "Please enter a valid email"));
    }
    if password.is_empty() {
        return Err(FormError::new("password", "Password is required"));
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
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
        let (email_value, password_value) =
            match validate_signin(&email.get_untracked(), &password.get_untracked()) {
                Ok(credentials) => credentials,
                Err(err) => {
                    error.set(Some(err));
                    return;
                }
            };
        busy.set(true);
        let remember_value = remember.get_untracked();

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let request = AuthRequest {
                email: email_value.clone(),
                password: password_value,
                mode: AuthMode::SignIn,
                profile: None,
            };
            let response = crate::net::api::authenticate(&request).await;
            if response.success {
                let user = SessionUser { name: String::new(), email: email_value };
                session::save_user(&user, remember_value);
                auth.set(AuthState { user: Some(user), loading: false });
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
            } else {
                error.set(Some(FormError::new("password", response.message)));
                busy.set(false);
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email_value, password_value, remember_value, auth);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"CampusConnect"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <div class="form-group" class:has-error=move || field_error("email").is_some()>
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            class="form-input"
                            type="text"
                            placeholder="you@college.edu"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <p class="error-message">
                            {move || field_error("email").unwrap_or_default()}
                        </p>
                    </div>
                    <div class="form-group" class:has-error=move || field_error("password").is_some()>
                        <label for="password">"Password"</label>
                        <PasswordField value=password id="password"/>
                        <p class="error-message">
                            {move || field_error("password").unwrap_or_default()}
                        </p>
                    </div>
                    <label class="remember-me">
                        <input
                            type="checkbox"
                            prop:checked=move || remember.get()
                            on:change=move |_| remember.update(|r| *r = !*r)
                        />
                        "Remember me"
                    </label>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "Don't have an account? " <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
