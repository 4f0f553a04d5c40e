use super::*;

#[test]
fn empty_email_fails_first() {
    let err = validate_signin("", "Password1!").unwrap_err();
    assert_eq!(err.field, "email");
    assert_eq!(err.message, "Email is required");
}

#[test]
fn malformed_email_is_reported_before_password() {
    let err = validate_signin("not-an-email", "").unwrap_err();
    assert_eq!(err.field, "email");
    assert_eq!(err.message, "Please enter a valid email");
}

#[test]
fn missing_password_is_reported_last() {
    let err = validate_signin("rohit@college.edu", "   ").unwrap_err();
    assert_eq!(err.field, "password");
    assert_eq!(err.message, "Password is required");
}

#[test]
fn valid_credentials_come_back_trimmed() {
    let (email, password) = validate_signin("  rohit@college.edu  ", " Password1! ").unwrap();
    assert_eq!(email, "rohit@college.edu");
    assert_eq!(password, "Password1!");
}
