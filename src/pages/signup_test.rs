use super::*;

fn valid_form() -> SignupForm {
    SignupForm {
        first_name: "Asha".to_owned(),
        last_name: "Verma".to_owned(),
        email: "asha@college.edu".to_owned(),
        branch: "cse".to_owned(),
        year: "2".to_owned(),
        password: "Abcdef1!".to_owned(),
        confirm_password: "Abcdef1!".to_owned(),
        terms_accepted: true,
    }
}

#[test]
fn empty_form_fails_on_the_first_field() {
    let err = validate_signup(&SignupForm::default()).unwrap_err();
    assert_eq!(err.field, "firstname");
    assert_eq!(err.message, "First name is required");
}

#[test]
fn validation_walks_fields_in_order() {
    let mut form = SignupForm { first_name: "Asha".to_owned(), ..SignupForm::default() };
    assert_eq!(validate_signup(&form).unwrap_err().field, "lastname");

    form.last_name = "Verma".to_owned();
    assert_eq!(validate_signup(&form).unwrap_err().field, "email");

    form.email = "asha@college.edu".to_owned();
    assert_eq!(validate_signup(&form).unwrap_err().field, "branch");

    form.branch = "cse".to_owned();
    assert_eq!(validate_signup(&form).unwrap_err().field, "year");

    form.year = "2".to_owned();
    assert_eq!(validate_signup(&form).unwrap_err().field, "password");
}

#[test]
fn short_password_reports_the_length_rule() {
    let form = SignupForm { password: "abc".to_owned(), ..valid_form() };
    let err = validate_signup(&form).unwrap_err();
    assert_eq!(err.field, "password");
    assert_eq!(err.message, "Password must be at least 8 characters long");
}

#[test]
fn long_but_weak_password_reports_the_strength_rule() {
    let form = SignupForm {
        password: "abcdefgh".to_owned(),
        confirm_password: "abcdefgh".to_owned(),
        ..valid_form()
    };
    let err = validate_signup(&form).unwrap_err();
    assert_eq!(err.field, "password");
    assert_eq!(
        err.message,
        "Password must include uppercase, lowercase, number, and special character"
    );
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let form = SignupForm { confirm_password: "Abcdef1?".to_owned(), ..valid_form() };
    let err = validate_signup(&form).unwrap_err();
    assert_eq!(err.field, "confirm-password");
    assert_eq!(err.message, "Passwords do not match");
}

#[test]
fn missing_confirmation_asks_for_it() {
    let form = SignupForm { confirm_password: String::new(), ..valid_form() };
    let err = validate_signup(&form).unwrap_err();
    assert_eq!(err.message, "Please confirm your password");
}

#[test]
fn unaccepted_terms_fail_last() {
    let form = SignupForm { terms_accepted: false, ..valid_form() };
    let err = validate_signup(&form).unwrap_err();
    assert_eq!(err.field, "terms");
}

#[test]
fn valid_form_passes_and_trims_text_fields() {
    let form = SignupForm {
        first_name: "  Asha ".to_owned(),
        email: " asha@college.edu ".to_owned(),
        ..valid_form()
    };
    let cleaned = validate_signup(&form).unwrap();
    assert_eq!(cleaned.first_name, "Asha");
    assert_eq!(cleaned.email, "asha@college.edu");
}
