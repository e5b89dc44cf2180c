// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-neutral description of visual structure.
//!
//! Components render to a [`Node`] tree: elements with a tag, an ordered
//! attribute list, and children, plus text leaves. A
//! [`Presenter`](crate::backend::Presenter) turns the tree into something
//! visible; [`Node::to_html`] serializes it for tests and static export.
//!
//! Attributes keep insertion order. Setting an attribute that already exists
//! replaces its value in place, except `class`, which goes through
//! [`Element::class`] and is appended to.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use crate::class_names::{ClassFragment, ClassList};

/// Elements that never have children or a closing tag.
const VOID_TAGS: [&str; 6] = ["img", "br", "hr", "input", "meta", "link"];

/// One node of a rendered tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// An element with attributes and children.
    Element(Element),
    /// A text leaf.
    Text(String),
}

impl Node {
    /// Creates a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Returns the element if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }

    /// Concatenated text content of this node and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(t) => out.push_str(t),
            Self::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Depth-first search for the first element with the given `id`.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find(&|el| el.attr("id") == Some(id))
    }

    /// Depth-first search for the first element matching `pred`.
    pub fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        let el = self.as_element()?;
        if pred(el) {
            return Some(el);
        }
        el.children.iter().find_map(|child| child.find(pred))
    }

    /// Serializes the tree as HTML, escaping text and attribute values.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(t) => escape_into(out, t, false),
            Self::Element(el) => {
                out.push('<');
                out.push_str(el.tag);
                for (name, value) in &el.attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    escape_into(out, value, true);
                    out.push('"');
                }
                out.push('>');
                if VOID_TAGS.contains(&el.tag) {
                    return;
                }
                for child in &el.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", el.tag);
            }
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

fn escape_into(out: &mut String, s: &str, attr: bool) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attr => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

/// Attributes forwarded unchanged from a component's caller to its element.
pub type Attrs = Vec<(Cow<'static, str>, String)>;

/// An element under construction or in a finished tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: &'static str,
    attrs: Attrs,
    children: Vec<Node>,
}

impl Element {
    /// Creates an element with no attributes or children.
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The tag name.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Attributes in insertion order.
    #[must_use]
    pub fn attrs(&self) -> &[(Cow<'static, str>, String)] {
        &self.attrs
    }

    /// Child nodes.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Looks up an attribute value.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The `class` attribute, or `""`.
    #[must_use]
    pub fn class_name(&self) -> &str {
        self.attr("class").unwrap_or("")
    }

    /// Sets an attribute, replacing any previous value.
    #[must_use]
    pub fn attr_set(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// In-place form of [`attr_set`](Self::attr_set).
    pub fn set_attr(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.attrs.push((name, value));
        }
    }

    /// Appends class fragments to the `class` attribute.
    ///
    /// Fragments without text are skipped; an element whose class list stays
    /// empty gets no `class` attribute at all.
    #[must_use]
    pub fn class(mut self, fragment: impl ClassFragment) -> Self {
        let mut list = ClassList::new();
        if let Some(existing) = self.attr("class") {
            list.push_str(existing);
        }
        list.push(fragment);
        if !list.is_empty() {
            self.set_attr("class", list.finish());
        }
        self
    }

    /// Forwards pass-through attributes; `class` entries are merged into the
    /// class list, everything else is set as given.
    #[must_use]
    pub fn pass_through(mut self, attrs: Attrs) -> Self {
        for (name, value) in attrs {
            if name == "class" {
                self = self.class(value);
            } else {
                self.set_attr(name, value);
            }
        }
        self
    }

    /// Appends one child.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends several children.
    #[must_use]
    pub fn children_from<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Converts into a [`Node`].
    #[must_use]
    pub fn into_node(self) -> Node {
        Node::Element(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_escapes_text_and_attributes() {
        let node = Element::new("p")
            .attr_set("title", "say \"hi\" & <go>")
            .child("1 < 2 & 3 > 2")
            .into_node();
        assert_eq!(
            node.to_html(),
            "<p title=\"say &quot;hi&quot; &amp; &lt;go&gt;\">1 &lt; 2 &amp; 3 &gt; 2</p>"
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let node = Element::new("img").attr_set("src", "a.jpg").into_node();
        assert_eq!(node.to_html(), "<img src=\"a.jpg\">");
    }

    #[test]
    fn class_accumulates() {
        let el = Element::new("div").class("a").class(None::<&str>).class("b");
        assert_eq!(el.class_name(), "a b");
        let bare = Element::new("div").class(false);
        assert_eq!(bare.attr("class"), None);
    }

    #[test]
    fn set_attr_replaces_in_place() {
        let el = Element::new("a")
            .attr_set("href", "#one")
            .attr_set("id", "x")
            .attr_set("href", "#two");
        assert_eq!(el.attrs().len(), 2);
        assert_eq!(el.attr("href"), Some("#two"));
        assert_eq!(el.attrs()[0].0, "href");
    }

    #[test]
    fn pass_through_merges_class() {
        let el = Element::new("div").class("base").pass_through(alloc::vec![
            (Cow::Borrowed("class"), "extra".into()),
            (Cow::Borrowed("aria-label"), "gallery".into()),
        ]);
        assert_eq!(el.class_name(), "base extra");
        assert_eq!(el.attr("aria-label"), Some("gallery"));
    }

    #[test]
    fn find_and_text_content() {
        let tree = Element::new("div")
            .child(Element::new("span").attr_set("id", "inner").child("hello"))
            .child(" world")
            .into_node();
        assert_eq!(tree.text_content(), "hello world");
        let inner = tree.find_by_id("inner").unwrap();
        assert_eq!(inner.tag(), "span");
        assert!(tree.find_by_id("missing").is_none());
    }
}
