// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel markup.
//!
//! Controls carry `data-carousel-*` attributes instead of handlers; the
//! backend listens once on the carousel root and maps the clicked element
//! back to a [`CarouselInput`] with [`delegated_input`].

use alloc::format;
use alloc::string::{String, ToString as _};

use super::{Carousel, CarouselInput};
use crate::cn;
use crate::site::SiteConfig;
use crate::ui::{Button, ButtonSize, ButtonVariant, card_image};
use crate::view::Element;

/// Marks the carousel root; the value is the instance label.
pub const ROOT_ATTR: &str = "data-carousel";
/// Marks the slide image.
pub const IMAGE_ATTR: &str = "data-carousel-image";
/// Previous/next control attribute.
pub const ACTION_ATTR: &str = "data-carousel-action";
/// Dot indicator attribute; the value is the 1-based position.
pub const DOT_ATTR: &str = "data-carousel-dot";
/// [`ACTION_ATTR`] value of the next control.
pub const NEXT_ACTION: &str = "next";
/// [`ACTION_ATTR`] value of the previous control.
pub const PREVIOUS_ACTION: &str = "previous";

const DOT_BASE: &str = "h-2 w-2 rounded-full transition-colors duration-200";
const DOT_ACTIVE: &str = "bg-primary";
const DOT_INACTIVE: &str = "bg-muted-foreground/40 hover:bg-muted-foreground";

/// Renders `carousel` showing its current slide.
#[must_use]
pub fn view(carousel: &Carousel, site: &SiteConfig, label: &str) -> Element {
    let current = carousel.current();
    let config = carousel.config();
    let alt = if config.alt_text.is_empty() {
        String::new()
    } else {
        format!("{} {current}", config.alt_text)
    };

    let image = card_image(carousel.current_source(site), alt)
        .class("w-full object-contain")
        .attr(IMAGE_ATTR, "")
        .render();

    let control = |action: &'static str, label: &'static str, glyph: &'static str, side: &str| {
        Button::new()
            .variant(ButtonVariant::Ghost)
            .size(ButtonSize::Icon)
            .class(cn!("absolute top-1/2 -translate-y-1/2", side))
            .attr("type", "button")
            .attr(ACTION_ATTR, action)
            .attr("aria-label", label)
            .child(glyph)
            .render()
    };

    let dots = (1..=carousel.total()).map(|p| {
        let active = p == current;
        let mut dot = Element::new("button")
            .class(cn!(DOT_BASE, if active { DOT_ACTIVE } else { DOT_INACTIVE }))
            .attr_set("type", "button")
            .attr_set(DOT_ATTR, p.to_string())
            .attr_set("aria-label", format!("Go to image {p}"));
        if active {
            dot.set_attr("aria-current", "true");
        }
        dot
    });

    Element::new("div")
        .class("relative select-none")
        .attr_set(ROOT_ATTR, label)
        .attr_set("data-carousel-index", current.to_string())
        .child(image)
        .child(control(PREVIOUS_ACTION, "Previous image", "\u{2039}", "left-2"))
        .child(control(NEXT_ACTION, "Next image", "\u{203a}", "right-2"))
        .child(
            Element::new("div")
                .class("flex justify-center gap-2 mt-4")
                .children_from(dots),
        )
}

/// Maps the delegation attributes of a clicked control to an input.
///
/// `action` is the value of [`ACTION_ATTR`] and `dot` the value of
/// [`DOT_ATTR`] on the nearest marked ancestor, if any. Clicks that hit
/// neither return `None`; the caller then treats them as zone clicks.
#[must_use]
pub fn delegated_input(action: Option<&str>, dot: Option<&str>) -> Option<CarouselInput> {
    match action {
        Some(NEXT_ACTION) => return Some(CarouselInput::Next),
        Some(PREVIOUS_ACTION) => return Some(CarouselInput::Previous),
        _ => {}
    }
    dot.and_then(|d| d.parse().ok()).map(CarouselInput::Dot)
}
