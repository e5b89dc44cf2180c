// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateless presentational primitives.
//!
//! Every primitive is a builder over [`Primitive`]: a tag, a fixed base class
//! string, caller classes appended after the base, pass-through attributes,
//! and children. Rendering is a pure function of those inputs.

mod badge;
mod button;
mod card;
mod image;

pub use badge::badge;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{card, card_content, card_description, card_footer, card_header, card_title};
pub use image::{card_image, image};

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use crate::class_names::ClassFragment;
use crate::view::{Attrs, Element, Node};

/// Builder shared by the primitives.
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    tag: &'static str,
    base: &'static str,
    extra: Vec<String>,
    attrs: Attrs,
    children: Vec<Node>,
}

impl Primitive {
    /// Creates a primitive rendering `tag` with the given base classes.
    #[must_use]
    pub fn new(tag: &'static str, base: &'static str) -> Self {
        Self {
            tag,
            base,
            extra: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends caller classes after the base classes.
    #[must_use]
    pub fn class(mut self, fragment: impl ClassFragment) -> Self {
        let mut list = crate::class_names::ClassList::new();
        list.push(fragment);
        if !list.is_empty() {
            self.extra.push(list.finish());
        }
        self
    }

    /// Forwards an attribute to the rendered element unchanged.
    #[must_use]
    pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Forwards a batch of attributes.
    #[must_use]
    pub fn attrs(mut self, attrs: Attrs) -> Self {
        self.attrs.extend(attrs);
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends several children.
    #[must_use]
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Renders with additional variant classes placed between the base and
    /// the caller classes.
    pub(crate) fn render_with(self, variant_classes: &[Option<&'static str>]) -> Element {
        let mut el = Element::new(self.tag).class(self.base);
        for fragment in variant_classes {
            el = el.class(*fragment);
        }
        for extra in self.extra {
            el = el.class(extra);
        }
        el.pass_through(self.attrs).children_from(self.children)
    }

    /// Renders the element.
    #[must_use]
    pub fn render(self) -> Element {
        self.render_with(&[])
    }
}

impl From<Primitive> for Node {
    fn from(p: Primitive) -> Self {
        Self::Element(p.render())
    }
}
