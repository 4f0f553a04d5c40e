use super::*;

#[test]
fn normalize_trims_and_strips_commas() {
    assert_eq!(TagSet::normalize("Python, "), Some("Python".to_owned()));
    assert_eq!(TagSet::normalize("  Rust  "), Some("Rust".to_owned()));
    assert_eq!(TagSet::normalize(" , "), None);
    assert_eq!(TagSet::normalize(""), None);
}

#[test]
fn insert_grows_the_set_by_exactly_one() {
    let mut set = TagSet::new();
    assert!(set.insert("Python, "));
    assert_eq!(set.len(), 1);
    assert!(set.contains("Python"));
}

#[test]
fn duplicate_submissions_leave_the_set_unchanged() {
    let mut set = TagSet::new();
    assert!(set.insert("Python"));
    assert!(!set.insert("Python"));
    assert!(!set.insert("  Python, "));
    assert_eq!(set.len(), 1);
}

#[test]
fn empty_submissions_add_nothing() {
    let mut set = TagSet::new();
    assert!(!set.insert("   "));
    assert!(!set.insert(",,,"));
    assert!(set.is_empty());
}

#[test]
fn values_keep_insertion_order() {
    let mut set = TagSet::new();
    set.insert("c");
    set.insert("a");
    set.insert("b");
    assert_eq!(set.values(), ["c", "a", "b"]);
}

#[test]
fn remove_deletes_exactly_the_named_value() {
    let mut set = TagSet::new();
    set.insert("Rust");
    set.insert("WASM");
    assert!(set.remove("Rust"));
    assert!(!set.remove("Rust"));
    assert_eq!(set.values(), ["WASM"]);
}

#[test]
fn clear_resets_for_the_next_draft() {
    let mut set = TagSet::new();
    set.insert("Rust");
    set.clear();
    assert!(set.is_empty());
}
