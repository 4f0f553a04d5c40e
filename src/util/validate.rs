//! Form validation primitives shared by the sign-in and sign-up pages.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Characters accepted as "special" by the strong-password rule.
const SPECIAL_CHARS: &str = "!@#$%^&*";

/// First-failure form validation error: the field slot it belongs to and
/// the message shown there. Validation short-circuits, so at most one of
/// these exists per submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormError {
    pub field: &'static str,
    pub message: String,
}

impl FormError {
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

/// Loose email shape check: one `@`, a dot in the domain, no whitespace.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Strong passwords carry at least one lowercase letter, one uppercase
/// letter, one digit, and one of `!@#$%^&*`.
#[must_use]
pub fn is_strong_password(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| SPECIAL_CHARS.contains(c))
}

/// Password strength score, one point per satisfied criterion (0-5).
#[must_use]
pub fn strength_score(password: &str) -> u8 {
    let mut score = 0;
    if password.len() >= 8 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }
    score
}

/// Strength bucket driving the meter bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Self::Weak,
            3..=4 => Self::Medium,
            _ => Self::Strong,
        }
    }

    #[must_use]
    pub fn bar_width(self) -> &'static str {
        match self {
            Self::Weak => "33%",
            Self::Medium => "66%",
            Self::Strong => "100%",
        }
    }

    #[must_use]
    pub fn bar_color(self) -> &'static str {
        match self {
            Self::Weak => "var(--danger-color)",
            Self::Medium => "var(--warning-color)",
            Self::Strong => "var(--success-color)",
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Weak => "strength-weak",
            Self::Medium => "strength-medium",
            Self::Strong => "strength-strong",
        }
    }
}
