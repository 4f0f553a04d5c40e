use super::*;

#[test]
fn email_accepts_common_shapes() {
    assert!(is_valid_email("student@college.edu"));
    assert!(is_valid_email("first.last@dept.college.edu"));
}

#[test]
fn email_rejects_malformed_values() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("no-at-sign.edu"));
    assert!(!is_valid_email("@college.edu"));
    assert!(!is_valid_email("student@"));
    assert!(!is_valid_email("student@college"));
    assert!(!is_valid_email("student@college."));
    assert!(!is_valid_email("student@.edu"));
    assert!(!is_valid_email("stu dent@college.edu"));
}

#[test]
fn strong_password_requires_all_four_classes() {
    assert!(is_strong_password("Password1!"));
    assert!(!is_strong_password("password1!"));
    assert!(!is_strong_password("PASSWORD1!"));
    assert!(!is_strong_password("Password!"));
    assert!(!is_strong_password("Password1"));
}

#[test]
fn strength_score_counts_criteria() {
    assert_eq!(strength_score(""), 0);
    assert_eq!(strength_score("abc"), 1);
    assert_eq!(strength_score("abcdefgh"), 2);
    assert_eq!(strength_score("Abcdefg1"), 4);
    assert_eq!(strength_score("Abcdef1!"), 5);
}

#[test]
fn strength_levels_bucket_scores() {
    assert_eq!(StrengthLevel::from_score(0), StrengthLevel::Weak);
    assert_eq!(StrengthLevel::from_score(2), StrengthLevel::Weak);
    assert_eq!(StrengthLevel::from_score(3), StrengthLevel::Medium);
    assert_eq!(StrengthLevel::from_score(4), StrengthLevel::Medium);
    assert_eq!(StrengthLevel::from_score(5), StrengthLevel::Strong);
}

#[test]
fn strength_level_renders_meter_values() {
    assert_eq!(StrengthLevel::Weak.bar_width(), "33%");
    assert_eq!(StrengthLevel::Medium.bar_width(), "66%");
    assert_eq!(StrengthLevel::Strong.bar_width(), "100%");
    assert_eq!(StrengthLevel::Strong.css_class(), "strength-strong");
}
