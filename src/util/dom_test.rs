use super::*;

#[test]
fn children_render_in_insertion_order() {
    let node = el("div")
        .child("first")
        .child(el("span").child("second"))
        .child("third");
    assert_eq!(
        node.to_html(),
        "<div>first<span>second</span>third</div>"
    );
}

#[test]
fn child_opt_skips_none() {
    let node = el("div")
        .child("always")
        .child_opt(None::<Child>)
        .child_opt(Some(el("em").child("maybe")));
    assert_eq!(node.child_nodes().len(), 2);
    assert_eq!(node.to_html(), "<div>always<em>maybe</em></div>");
}

#[test]
fn class_tokens_join_in_order() {
    let node = el("button").class("post-action-btn").class("liked");
    assert_eq!(node.class_attr(), Some("post-action-btn liked".to_owned()));
}

#[test]
fn style_merges_and_overwrites_repeated_properties() {
    let node = el("div")
        .style("width", "33%")
        .style("background-color", "red")
        .style("width", "66%");
    assert_eq!(
        node.style_attr(),
        Some("width: 66%; background-color: red".to_owned())
    );
}

#[test]
fn build_routes_reserved_and_generic_keys() {
    let node = build(
        "img",
        vec![
            ("class".to_owned(), AttrValue::Text("post-avatar".to_owned())),
            (
                "style".to_owned(),
                AttrValue::Style(vec![("width".to_owned(), "44px".to_owned())]),
            ),
            ("src".to_owned(), AttrValue::Text("images/profile.jpg".to_owned())),
        ],
        Vec::new(),
    );
    assert_eq!(node.class_attr(), Some("post-avatar".to_owned()));
    assert_eq!(node.style_attr(), Some("width: 44px".to_owned()));
    assert_eq!(node.attr_value("src"), Some("images/profile.jpg"));
}

#[test]
fn void_tags_have_no_closing_tag() {
    let node = el("img").attr("src", "x.jpg");
    assert_eq!(node.to_html(), "<img src=\"x.jpg\">");
}

#[test]
fn text_and_attribute_values_are_escaped() {
    let node = el("p")
        .attr("title", "a \"quoted\" <value>")
        .child("5 < 6 & 7 > 2");
    assert_eq!(
        node.to_html(),
        "<p title=\"a &quot;quoted&quot; &lt;value&gt;\">5 &lt; 6 &amp; 7 &gt; 2</p>"
    );
}
