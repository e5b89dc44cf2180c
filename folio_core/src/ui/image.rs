// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Images.

use alloc::string::String;

use super::Primitive;

/// A plain `<img>`.
#[must_use]
pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Primitive {
    Primitive::new("img", "").attr("src", src).attr("alt", alt)
}

/// An `<img>` inside a card, never taller than the viewport.
#[must_use]
pub fn card_image(src: impl Into<String>, alt: impl Into<String>) -> Primitive {
    Primitive::new("img", "max-h-screen")
        .attr("src", src)
        .attr("alt", alt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Node;

    #[test]
    fn plain_image_has_no_class() {
        let node: Node = image("a.jpg", "").into();
        assert_eq!(node.to_html(), "<img src=\"a.jpg\" alt=\"\">");
    }

    #[test]
    fn card_image_is_height_capped() {
        let el = card_image("b.jpg", "street").class("rounded").render();
        assert_eq!(el.class_name(), "max-h-screen rounded");
        assert_eq!(el.attr("alt"), Some("street"));
    }
}
