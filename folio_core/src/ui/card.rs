// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Card container and its slots.

use super::Primitive;

/// Outer card container.
#[must_use]
pub fn card() -> Primitive {
    Primitive::new("div", "rounded-lg border bg-card text-card-foreground shadow-sm")
}

/// Header slot, stacks title and description.
#[must_use]
pub fn card_header() -> Primitive {
    Primitive::new("div", "flex flex-col space-y-1.5 p-6 pb-0")
}

/// Title line.
#[must_use]
pub fn card_title() -> Primitive {
    Primitive::new("p", "text-2xl font-semibold leading-none tracking-tight")
}

/// Muted description under the title.
#[must_use]
pub fn card_description() -> Primitive {
    Primitive::new("p", "text-sm text-muted-foreground")
}

/// Body slot.
#[must_use]
pub fn card_content() -> Primitive {
    Primitive::new("div", "p-6")
}

/// Footer slot, lays children out in a row.
#[must_use]
pub fn card_footer() -> Primitive {
    Primitive::new("div", "flex items-center p-6 pt-0")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Node;

    #[test]
    fn card_with_slots() {
        let node: Node = card()
            .class("mb-8")
            .child(
                card_header()
                    .child(card_title().child("About Me"))
                    .child(card_description().child("Photographer")),
            )
            .child(card_content().child("Body"))
            .into();
        let html = node.to_html();
        assert!(html.starts_with(
            "<div class=\"rounded-lg border bg-card text-card-foreground shadow-sm mb-8\">"
        ));
        assert!(html.contains(
            "<p class=\"text-2xl font-semibold leading-none tracking-tight\">About Me</p>"
        ));
        assert!(html.contains("<div class=\"flex flex-col space-y-1.5 p-6 pb-0\">"));
        assert!(html.contains("<div class=\"p-6\">Body</div>"));
    }

    #[test]
    fn content_keeps_top_padding_without_header() {
        let el = card().child(card_content().child("Gallery")).render();
        let Some(Node::Element(content)) = el.children().first() else {
            panic!("card content should be the only child");
        };
        assert_eq!(content.class_name(), "p-6");
    }

    #[test]
    fn footer_forwards_attributes() {
        let el = card_footer().attr("data-role", "actions").render();
        assert_eq!(el.class_name(), "flex items-center p-6 pt-0");
        assert_eq!(el.attr("data-role"), Some("actions"));
    }
}
