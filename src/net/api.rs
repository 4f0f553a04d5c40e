//! Simulated authentication and link-preview lookups.
//!
//! Browser builds add an artificial latency so the UI exercises its busy
//! states; native builds resolve immediately so tests stay fast. The
//! accept/reject decision and the preview classification are pure
//! functions, independent of the timing.
//!
//! ERROR HANDLING
//! ==============
//! Failures are data (`AuthResponse { success: false, .. }`), never panics;
//! callers surface the message in the form's error slot.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthMode, AuthRequest, AuthResponse, AuthUser, LinkPreview};

/// Demo credential rule: any campus address with this password signs in.
const DEMO_EMAIL_DOMAIN: &str = "@college.edu";
const DEMO_PASSWORD: &str = "Password1!";

const AUTH_DELAY_MS: u64 = 1000;

/// Authenticate a sign-in or sign-up request.
pub async fn authenticate(request: &AuthRequest) -> AuthResponse {
    simulated_latency(AUTH_DELAY_MS).await;
    evaluate_auth(request)
}

/// The decision half of [`authenticate`], without the latency.
#[must_use]
pub fn evaluate_auth(request: &AuthRequest) -> AuthResponse {
    match request.mode {
        AuthMode::SignIn => {
            if request.email.ends_with(DEMO_EMAIL_DOMAIN) && request.password == DEMO_PASSWORD {
                AuthResponse {
                    success: true,
                    message: "Authentication successful".to_owned(),
                    user: None,
                }
            } else {
                AuthResponse {
                    success: false,
                    message: "Invalid email or password".to_owned(),
                    user: None,
                }
            }
        }
        AuthMode::SignUp => {
            let profile = request.profile.clone().unwrap_or_default();
            AuthResponse {
                success: true,
                message: "Registration successful".to_owned(),
                user: Some(AuthUser {
                    email: request.email.clone(),
                    first_name: profile.first_name,
                    last_name: profile.last_name,
                    branch: profile.branch,
                    year: profile.year,
                }),
            }
        }
    }
}

/// Resolve mock preview metadata for a URL. The composer debounces input
/// upstream, so this resolves without further delay.
pub async fn fetch_link_preview(url: &str) -> LinkPreview {
    preview_for(url)
}

/// Classify a URL into one of the canned preview cards.
#[must_use]
pub fn preview_for(url: &str) -> LinkPreview {
    let domain = host_of(url).to_owned();
    let (title, description, image) = if domain.contains("github") {
        (
            "GitHub Repository".to_owned(),
            "View this project on GitHub".to_owned(),
            "images/github-preview.jpg".to_owned(),
        )
    } else if domain.contains("linkedin") {
        (
            "LinkedIn Profile".to_owned(),
            "Professional profile on LinkedIn".to_owned(),
            "images/linkedin-preview.jpg".to_owned(),
        )
    } else if domain.contains("medium") {
        (
            "Medium Article".to_owned(),
            "Read this article on Medium".to_owned(),
            "images/medium-preview.jpg".to_owned(),
        )
    } else {
        (
            "Web Link".to_owned(),
            url.to_owned(),
            "images/link-preview.jpg".to_owned(),
        )
    };
    LinkPreview { title, description, image, domain }
}

/// Hostname portion of a URL, without scheme, port, path, or query.
#[must_use]
pub fn host_of(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    rest.split(['/', ':', '?', '#']).next().unwrap_or(rest)
}

async fn simulated_latency(ms: u64) {
    #[cfg(feature = "csr")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
    #[cfg(not(feature = "csr"))]
    let _ = ms;
}
