// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser backend for folio.
//!
//! This crate connects the browser to `folio_core`:
//!
//! - [`WebViewport`]: the [`ViewportHost`] (`setTimeout` timers and
//!   window-level listeners, dispatched per instance)
//! - [`DomPresenter`]: builds DOM nodes from a [`Node`] tree
//! - [`EventListenerGuard`]: element listeners removed on drop
//! - [`CarouselWidget`]: a mounted carousel with click delegation
//! - [`mount_page`]: the whole page with scroll-spy and navigation
//! - [`ConsoleSink`]: trace events to the browser console
//!
//! [`ViewportHost`]: folio_core::backend::ViewportHost
//! [`Node`]: folio_core::view::Node

#![no_std]

extern crate alloc;

mod carousel;
mod console;
mod listener;
mod page;
mod presenter;
mod scroll;
mod viewport;

pub use carousel::CarouselWidget;
pub use console::ConsoleSink;
pub use folio_core::backend::Presenter;
pub use listener::EventListenerGuard;
pub use page::{PageHandle, mount_page};
pub use presenter::DomPresenter;
pub use scroll::{scroll_to_section, section_extent};
pub use viewport::{Handler, WebViewport};

use alloc::rc::Rc;
use core::cell::RefCell;

use folio_core::time::HostTime;
use folio_core::trace::{TraceSink, Tracer};

/// A trace sink shared by every callback of a mounted page.
pub type SharedSink = Rc<RefCell<dyn TraceSink>>;

/// Returns the current host time from `performance.now()`.
#[must_use]
pub fn now() -> HostTime {
    HostTime::from_millis_f64(viewport::performance_now())
}

/// Runs `f` with a tracer over `sink`, or a no-op tracer without one.
pub(crate) fn with_tracer<R>(sink: Option<&SharedSink>, f: impl FnOnce(&mut Tracer<'_>) -> R) -> R {
    match sink.and_then(|s| s.try_borrow_mut().ok()) {
        Some(mut guard) => f(&mut Tracer::new(&mut *guard)),
        None => f(&mut Tracer::none()),
    }
}
