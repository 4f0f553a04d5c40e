use super::*;

#[test]
fn seed_posts_are_newest_first() {
    let posts = seed_posts(1_000_000_000.0);
    assert_eq!(posts.len(), 2);
    assert!(posts[0].timestamp_ms > posts[1].timestamp_ms);
}

#[test]
fn seed_feed_renders_every_post_with_relative_times() {
    let html = seed_feed_html(1_000_000_000.0);
    assert_eq!(html.matches("data-post-id=").count(), 2);
    assert!(html.contains("Priya Sharma"));
    assert!(html.contains("2 hours ago"));
    assert!(html.contains("1 day ago"));
}

#[test]
fn seeded_github_link_gets_its_preview_card() {
    let html = seed_feed_html(0.0);
    assert!(html.contains("link-preview"));
    assert!(html.contains("GitHub Repository"));
}

#[test]
fn filter_selection_announces_the_filter() {
    assert_eq!(filter_toast_message(FeedFilter::All), "Viewing all posts");
    assert_eq!(
        filter_toast_message(FeedFilter::Trending),
        "Viewing trending posts"
    );
}
