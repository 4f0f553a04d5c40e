use super::*;

#[test]
fn extract_first_url_finds_the_earliest_link() {
    assert_eq!(
        extract_first_url("see https://github.com/x/y and http://medium.com/z"),
        Some("https://github.com/x/y")
    );
    assert_eq!(
        extract_first_url("http://a.org then https://b.org"),
        Some("http://a.org")
    );
}

#[test]
fn extract_first_url_handles_attached_punctuation_and_absence() {
    assert_eq!(
        extract_first_url("(https://example.org/page)"),
        Some("https://example.org/page)")
    );
    assert_eq!(extract_first_url("no links here"), None);
    assert_eq!(extract_first_url(""), None);
}

#[test]
fn post_button_needs_visible_content() {
    assert!(can_post("hello"));
    assert!(!can_post(""));
    assert!(!can_post("   \n  "));
}

#[test]
fn only_the_last_edit_in_the_window_fires() {
    // Edits at t=0 and t=100 inside one debounce window: the first task
    // wakes to find a newer generation and does nothing.
    let first_edit = 1;
    let second_edit = 2;
    let current = second_edit;
    assert!(!should_fire(first_edit, current));
    assert!(should_fire(second_edit, current));
}
