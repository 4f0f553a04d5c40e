//! Request/response types for the simulated auth and link-preview calls.

use serde::{Deserialize, Serialize};

/// Which auth flow a request belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    SignIn,
    SignUp,
}

/// Extra profile fields collected during sign-up.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupProfile {
    pub first_name: String,
    pub last_name: String,
    pub branch: String,
    pub year: String,
}

/// One authentication attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
    pub mode: AuthMode,
    pub profile: Option<SignupProfile>,
}

/// The registered user echoed back by a successful sign-up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub branch: String,
    pub year: String,
}

/// Outcome of an authentication attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub user: Option<AuthUser>,
}

/// Metadata card for a linked URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPreview {
    pub title: String,
    pub description: String,
    pub image: String,
    pub domain: String,
}
