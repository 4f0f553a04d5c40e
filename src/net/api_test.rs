use super::*;
use crate::net::types::SignupProfile;

fn signin_request(email: &str, password: &str) -> AuthRequest {
    AuthRequest {
        email: email.to_owned(),
        password: password.to_owned(),
        mode: AuthMode::SignIn,
        profile: None,
    }
}

#[test]
fn signin_accepts_campus_email_with_demo_password() {
    let response = evaluate_auth(&signin_request("rohit@college.edu", "Password1!"));
    assert!(response.success);
    assert_eq!(response.message, "Authentication successful");
    assert!(response.user.is_none());
}

#[test]
fn signin_rejects_wrong_password_or_foreign_domain() {
    for (email, password) in [
        ("rohit@college.edu", "Password2!"),
        ("rohit@gmail.com", "Password1!"),
    ] {
        let response = evaluate_auth(&signin_request(email, password));
        assert!(!response.success);
        assert_eq!(response.message, "Invalid email or password");
    }
}

#[test]
fn signup_succeeds_and_echoes_the_registered_user() {
    let request = AuthRequest {
        email: "new@college.edu".to_owned(),
        password: "Abcdef1!".to_owned(),
        mode: AuthMode::SignUp,
        profile: Some(SignupProfile {
            first_name: "Asha".to_owned(),
            last_name: "Verma".to_owned(),
            branch: "cse".to_owned(),
            year: "2".to_owned(),
        }),
    };
    let response = evaluate_auth(&request);
    assert!(response.success);
    assert_eq!(response.message, "Registration successful");
    let user = response.user.expect("signup echoes user");
    assert_eq!(user.email, "new@college.edu");
    assert_eq!(user.first_name, "Asha");
    assert_eq!(user.year, "2");
}

#[test]
fn host_of_strips_scheme_port_and_path() {
    assert_eq!(host_of("https://github.com/owner/repo"), "github.com");
    assert_eq!(host_of("http://medium.com:8080/story?id=1"), "medium.com");
    assert_eq!(host_of("example.org/page"), "example.org");
}

#[test]
fn preview_classifies_known_hosts() {
    assert_eq!(preview_for("https://github.com/x/y").title, "GitHub Repository");
    assert_eq!(
        preview_for("https://www.linkedin.com/in/someone").title,
        "LinkedIn Profile"
    );
    assert_eq!(preview_for("https://medium.com/story").title, "Medium Article");
}

#[test]
fn preview_falls_back_to_generic_card_with_url_description() {
    let preview = preview_for("https://example.org/notes");
    assert_eq!(preview.title, "Web Link");
    assert_eq!(preview.description, "https://example.org/notes");
    assert_eq!(preview.domain, "example.org");
    assert_eq!(preview.image, "images/link-preview.jpg");
}
