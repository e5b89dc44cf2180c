// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The portfolio page in the browser.
//!
//! Mounts the page into `#app`, wires the scroll-spy navigation and starts
//! every project gallery.
//!
//! Build with: `wasm-pack build --target web demos/portfolio_site`
//! Then serve `demos/portfolio_site/` and open `index.html`. Enable the
//! `trace` feature to see transitions in the console, or `trace-lifecycle`
//! to also see timers and listeners.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod content;

use alloc::rc::Rc;
use core::cell::RefCell;

use folio_backend_web::{ConsoleSink, SharedSink, WebViewport, mount_page};
use wasm_bindgen::prelude::*;

/// Id of the element the page renders into.
const ROOT_ID: &str = "app";

/// Entry point: renders the page and starts its behavior.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let root = document
        .get_element_by_id(ROOT_ID)
        .ok_or_else(|| JsValue::from_str("missing #app"))?;

    let page = content::page().map_err(|e| JsValue::from_str(&alloc::format!("{e}")))?;
    let sink: Option<SharedSink> = if cfg!(feature = "trace") {
        Some(Rc::new(RefCell::new(console_sink())))
    } else {
        None
    };

    let viewport = WebViewport::new(window);
    let handle = mount_page(page, &root, &viewport, sink)?;

    // The page lives as long as the document.
    core::mem::forget(handle);
    core::mem::forget(viewport);
    Ok(())
}

fn console_sink() -> ConsoleSink {
    let sink = ConsoleSink::new();
    if cfg!(feature = "trace-lifecycle") {
        sink.with_lifecycle()
    } else {
        sink
    }
}
