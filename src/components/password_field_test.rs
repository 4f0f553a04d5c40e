use super::*;

#[test]
fn empty_password_renders_no_bar() {
    assert_eq!(meter_width(""), "0");
    assert_eq!(meter_color(""), "transparent");
    assert_eq!(meter_class(""), "password-strength");
}

#[test]
fn weak_passwords_fill_a_third() {
    assert_eq!(meter_width("abc"), "33%");
    assert_eq!(meter_color("abc"), "var(--danger-color)");
    assert_eq!(meter_class("abc"), "password-strength strength-weak");
}

#[test]
fn medium_passwords_fill_two_thirds() {
    assert_eq!(meter_width("Abcdefg1"), "66%");
    assert_eq!(meter_class("Abcdefg1"), "password-strength strength-medium");
}

#[test]
fn strong_passwords_fill_the_meter() {
    assert_eq!(meter_width("Abcdef1!"), "100%");
    assert_eq!(meter_color("Abcdef1!"), "var(--success-color)");
    assert_eq!(meter_class("Abcdef1!"), "password-strength strength-strong");
}
