//! Declarative element builder for dynamically composed UI fragments.
//!
//! DESIGN
//! ======
//! `El` is a plain descriptor tree: one tag, class list, inline style
//! record, generic attributes, and ordered children. Building a tree has no
//! side effects; rendering is a separate step, either `to_html` for
//! embedding through `inner_html`, or `to_dom` (browser builds only) when a
//! fragment must be inserted into a live document. Keeping construction
//! pure lets every fragment-producing function run under plain `cargo
//! test`.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// A single child slot: literal text or a nested element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Child {
    Text(String),
    Node(El),
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<El> for Child {
    fn from(node: El) -> Self {
        Self::Node(node)
    }
}

/// Attribute value for the map-style [`build`] entry point. The `style`
/// key carries a nested property record; everything else is plain text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrValue {
    Text(String),
    Style(Vec<(String, String)>),
}

/// Declarative element descriptor.
///
/// Children keep insertion order; that order is rendering order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct El {
    tag: String,
    classes: Vec<String>,
    styles: Vec<(String, String)>,
    attrs: Vec<(String, String)>,
    children: Vec<Child>,
}

impl El {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            styles: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append a class token.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Merge one property into the inline style record. A repeated property
    /// overwrites the earlier value.
    #[must_use]
    pub fn style(mut self, prop: impl Into<String>, value: impl Into<String>) -> Self {
        let prop = prop.into();
        let value = value.into();
        if let Some(slot) = self.styles.iter_mut().find(|(p, _)| *p == prop) {
            slot.1 = value;
        } else {
            self.styles.push((prop, value));
        }
        self
    }

    /// Set a generic attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Append one child.
    #[must_use]
    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append one optional child; `None` is silently skipped. Conditional
    /// fragments (tag rows, link previews) rely on this.
    #[must_use]
    pub fn child_opt(mut self, child: Option<impl Into<Child>>) -> Self {
        if let Some(child) = child {
            self.children.push(child.into());
        }
        self
    }

    /// Append a sequence of children in order.
    #[must_use]
    pub fn children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn child_nodes(&self) -> &[Child] {
        &self.children
    }

    /// Joined class attribute value, `None` when no class was set.
    #[must_use]
    pub fn class_attr(&self) -> Option<String> {
        if self.classes.is_empty() {
            None
        } else {
            Some(self.classes.join(" "))
        }
    }

    /// Joined inline style attribute value, `None` when no style was set.
    #[must_use]
    pub fn style_attr(&self) -> Option<String> {
        if self.styles.is_empty() {
            None
        } else {
            Some(
                self.styles
                    .iter()
                    .map(|(p, v)| format!("{p}: {v}"))
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        }
    }

    /// Look up a generic attribute by name.
    #[must_use]
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Serialize the subtree to an HTML string.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if let Some(class) = self.class_attr() {
            write_attr(out, "class", &class);
        }
        if let Some(style) = self.style_attr() {
            write_attr(out, "style", &style);
        }
        for (name, value) in &self.attrs {
            write_attr(out, name, value);
        }
        out.push('>');
        if is_void_tag(&self.tag) {
            return;
        }
        for child in &self.children {
            match child {
                Child::Text(text) => out.push_str(&escape_text(text)),
                Child::Node(node) => node.write_html(out),
            }
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }

    /// Materialize the subtree as live DOM nodes. The returned element is
    /// still detached; the caller inserts it. Returns `None` when the
    /// document refuses the tag name.
    #[cfg(feature = "csr")]
    pub fn to_dom(&self, document: &web_sys::Document) -> Option<web_sys::Element> {
        let element = document.create_element(&self.tag).ok()?;
        if let Some(class) = self.class_attr() {
            let _ = element.set_attribute("class", &class);
        }
        if let Some(style) = self.style_attr() {
            let _ = element.set_attribute("style", &style);
        }
        for (name, value) in &self.attrs {
            let _ = element.set_attribute(name, value);
        }
        for child in &self.children {
            match child {
                Child::Text(text) => {
                    let node = document.create_text_node(text);
                    let _ = element.append_child(&node);
                }
                Child::Node(node) => {
                    if let Some(child_el) = node.to_dom(document) {
                        let _ = element.append_child(&child_el);
                    }
                }
            }
        }
        Some(element)
    }
}

/// Shorthand constructor.
#[must_use]
pub fn el(tag: impl Into<String>) -> El {
    El::new(tag)
}

/// Map-style construction: reserved keys `class` and `style` route to the
/// class list and inline style record, everything else becomes a generic
/// attribute.
#[must_use]
pub fn build<I>(tag: &str, attrs: I, children: Vec<Child>) -> El
where
    I: IntoIterator<Item = (String, AttrValue)>,
{
    let mut node = El::new(tag);
    for (key, value) in attrs {
        node = match (key.as_str(), value) {
            ("class", AttrValue::Text(class)) => node.class(class),
            ("style", AttrValue::Style(props)) => {
                props.into_iter().fold(node, |n, (p, v)| n.style(p, v))
            }
            (_, AttrValue::Text(text)) => node.attr(key, text),
            // A style record under a non-reserved key has no meaning; drop it.
            (_, AttrValue::Style(_)) => node,
        };
    }
    node.children(children)
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}

fn is_void_tag(tag: &str) -> bool {
    matches!(
        tag,
        "area" | "base" | "br" | "col" | "embed" | "hr" | "img" | "input" | "link" | "meta"
            | "source" | "track" | "wbr"
    )
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
