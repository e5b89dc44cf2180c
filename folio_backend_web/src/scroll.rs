// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section geometry and smooth scrolling.

use folio_core::scroll_spy::Extent;
use wasm_bindgen::JsCast as _;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scrolls the element with `id` into view.
///
/// Returns `false`, doing nothing, when no such element exists.
pub fn scroll_to_section(document: &Document, id: &str) -> bool {
    let Some(el) = document.get_element_by_id(id) else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Layout extent (`offsetTop`, `offsetHeight`) of the element with `id`.
#[must_use]
pub fn section_extent(document: &Document, id: &str) -> Option<Extent> {
    let el = document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()?;
    Some(Extent::new(
        f64::from(el.offset_top()),
        f64::from(el.offset_height()),
    ))
}
