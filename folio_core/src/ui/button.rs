// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Button with visual variants and sizes.

use alloc::borrow::Cow;
use alloc::string::String;

use super::Primitive;
use crate::class_names::ClassFragment;
use crate::view::{Element, Node};

const BASE: &str = "inline-flex items-center justify-center whitespace-nowrap rounded-md \
    text-sm font-medium ring-offset-background transition-colors focus-visible:outline-none \
    focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 \
    disabled:pointer-events-none disabled:opacity-50";

/// Color treatment of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    /// Filled with the primary color.
    #[default]
    Default,
    /// Filled with the destructive color.
    Destructive,
    /// Bordered, transparent background.
    Outline,
    /// Filled with the secondary color.
    Secondary,
    /// No background until hovered.
    Ghost,
    /// Looks like a text link.
    Link,
}

impl ButtonVariant {
    /// Looks a variant up by its lowercase name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "default" => Self::Default,
            "destructive" => Self::Destructive,
            "outline" => Self::Outline,
            "secondary" => Self::Secondary,
            "ghost" => Self::Ghost,
            "link" => Self::Link,
            _ => return None,
        })
    }

    /// The class fragment for this variant.
    #[must_use]
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-primary text-primary-foreground hover:bg-primary/90",
            Self::Destructive => {
                "bg-destructive text-destructive-foreground hover:bg-destructive/90"
            }
            Self::Outline => {
                "border border-input bg-background hover:bg-accent hover:text-accent-foreground"
            }
            Self::Secondary => "bg-secondary text-secondary-foreground hover:bg-secondary/80",
            Self::Ghost => "hover:bg-accent hover:text-accent-foreground",
            Self::Link => "underline-offset-4 hover:underline",
        }
    }
}

/// Dimensions of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    /// Standard height and padding.
    #[default]
    Default,
    /// Compact.
    Sm,
    /// Large.
    Lg,
    /// Square, for a single icon.
    Icon,
}

impl ButtonSize {
    /// Looks a size up by its lowercase name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "default" => Self::Default,
            "sm" => Self::Sm,
            "lg" => Self::Lg,
            "icon" => Self::Icon,
            _ => return None,
        })
    }

    /// The class fragment for this size.
    #[must_use]
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Default => "h-10 px-4 py-2",
            Self::Sm => "h-9 rounded-md px-3",
            Self::Lg => "h-11 rounded-md px-8",
            Self::Icon => "h-10 w-10",
        }
    }
}

/// A `<button>` element.
///
/// Variant and size default to [`ButtonVariant::Default`] and
/// [`ButtonSize::Default`]. Setting either by an unknown name leaves that
/// dimension without classes rather than failing.
#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    inner: Primitive,
    variant: Option<ButtonVariant>,
    size: Option<ButtonSize>,
}

impl Default for Button {
    fn default() -> Self {
        Self::new()
    }
}

impl Button {
    /// A default-variant, default-size button.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Primitive::new("button", BASE),
            variant: Some(ButtonVariant::Default),
            size: Some(ButtonSize::Default),
        }
    }

    /// Sets the variant.
    #[must_use]
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Sets the variant by name; unknown names clear it.
    #[must_use]
    pub fn variant_named(mut self, name: &str) -> Self {
        self.variant = ButtonVariant::from_name(name);
        self
    }

    /// Sets the size.
    #[must_use]
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the size by name; unknown names clear it.
    #[must_use]
    pub fn size_named(mut self, name: &str) -> Self {
        self.size = ButtonSize::from_name(name);
        self
    }

    /// Appends caller classes.
    #[must_use]
    pub fn class(mut self, fragment: impl ClassFragment) -> Self {
        self.inner = self.inner.class(fragment);
        self
    }

    /// Forwards an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.inner = self.inner.attr(name, value);
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.inner = self.inner.child(child);
        self
    }

    /// Renders the element.
    #[must_use]
    pub fn render(self) -> Element {
        self.inner.render_with(&[
            self.variant.map(ButtonVariant::classes),
            self.size.map(ButtonSize::classes),
        ])
    }
}

impl From<Button> for Node {
    fn from(b: Button) -> Self {
        Self::Element(b.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_button_classes() {
        let el = Button::new().child("View Live").render();
        assert_eq!(el.tag(), "button");
        let class = el.class_name();
        assert!(class.starts_with("inline-flex items-center"));
        assert!(class.contains("bg-primary text-primary-foreground"));
        assert!(class.ends_with("h-10 px-4 py-2"));
    }

    #[test]
    fn outline_small_with_caller_class_last() {
        let el = Button::new()
            .variant(ButtonVariant::Outline)
            .size(ButtonSize::Sm)
            .class("w-full")
            .render();
        let class = el.class_name();
        assert!(class.contains("border border-input"));
        assert!(class.contains("h-9 rounded-md px-3"));
        assert!(!class.contains("bg-primary"));
        assert!(class.ends_with("w-full"));
    }

    #[test]
    fn unknown_names_degrade_to_no_classes() {
        let el = Button::new()
            .variant_named("sparkly")
            .size_named("huge")
            .render();
        assert_eq!(el.class_name(), BASE);
    }

    #[test]
    fn every_name_round_trips() {
        for name in ["default", "destructive", "outline", "secondary", "ghost", "link"] {
            assert!(ButtonVariant::from_name(name).is_some(), "{name}");
        }
        for name in ["default", "sm", "lg", "icon"] {
            assert!(ButtonSize::from_name(name).is_some(), "{name}");
        }
    }

    #[test]
    fn attributes_pass_through() {
        let el = Button::new()
            .attr("type", "submit")
            .attr("aria-label", "Next")
            .render();
        assert_eq!(el.attr("type"), Some("submit"));
        assert_eq!(el.attr("aria-label"), Some("Next"));
    }
}
