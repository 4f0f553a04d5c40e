use super::*;

#[test]
fn action_attrs_round_trip() {
    for action in [
        FeedAction::Like,
        FeedAction::Comment,
        FeedAction::Share,
        FeedAction::CommentSubmit,
    ] {
        assert_eq!(FeedAction::from_attr(action.attr()), Some(action));
    }
}

#[test]
fn unknown_actions_dispatch_nothing() {
    assert_eq!(FeedAction::from_attr("repost"), None);
    assert_eq!(FeedAction::from_attr(""), None);
}

#[test]
fn parse_count_reads_the_leading_integer() {
    assert_eq!(parse_count("5 Likes"), 5);
    assert_eq!(parse_count("0 Comments"), 0);
    assert_eq!(parse_count("  12 Shares "), 12);
    assert_eq!(parse_count("Likes"), 0);
    assert_eq!(parse_count(""), 0);
}

#[test]
fn format_count_matches_label_shape() {
    assert_eq!(format_count(3, "Likes"), "3 Likes");
    assert_eq!(format_count(0, "Comments"), "0 Comments");
}

#[test]
fn toggling_like_twice_returns_to_the_start() {
    let (liked, count) = toggle_like(false, 4);
    assert!(liked);
    assert_eq!(count, 5);
    let (liked, count) = toggle_like(liked, count);
    assert!(!liked);
    assert_eq!(count, 4);
}

#[test]
fn unlike_never_drives_the_counter_negative() {
    // A liked state over a zero label (stale markup) clamps instead of wrapping.
    let (liked, count) = toggle_like(true, 0);
    assert!(!liked);
    assert_eq!(count, 0);
}

#[test]
fn comment_normalization_rejects_whitespace_only_input() {
    assert_eq!(normalized_comment("  Nice!  "), Some("Nice!".to_owned()));
    assert_eq!(normalized_comment("   "), None);
    assert_eq!(normalized_comment(""), None);
}
