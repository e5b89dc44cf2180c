// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for a single-page portfolio site.
//!
//! `folio_core` holds everything about the page that can be decided without a
//! browser: how class names are composed, what the page looks like as a node
//! tree, and the two small state machines that react to the viewport (the
//! image [`carousel`] and the [`scroll_spy`]). It is `no_std` compatible (with
//! `alloc`) so it can be compiled for `wasm32-unknown-unknown` and tested
//! natively.
//!
//! # Architecture
//!
//! ```text
//!   ViewportHost (timers, global listeners)
//!       │ ViewportEvent
//!       ▼
//!   CarouselMount / ScrollSpy ──► Transition / new active id
//!                                        │
//!                 ┌──────────────────────┘
//!                 ▼
//!   Observable<SectionId> ──► PortfolioPage::render_*() ──► Node
//!                                                            │
//!                                                            ▼
//!                                                  Presenter::present()
//! ```
//!
//! **[`class_names`]**: The [`cn!`] macro and [`ClassFragment`] trait.
//!
//! **[`view`]**: [`Node`](view::Node) / [`Element`](view::Element) tree and
//! HTML serialization.
//!
//! **[`ui`]**: Stateless primitives: button, card family, image, badge.
//!
//! **[`carousel`]**: Cyclic index state, click zones, swipe detection, and
//! the [`CarouselMount`](carousel::CarouselMount) lifecycle.
//!
//! **[`scroll_spy`]**: Active-section detection from scroll offset.
//!
//! **[`page`]**: The assembled portfolio page.
//!
//! **[`backend`]**: [`Presenter`](backend::Presenter) and
//! [`ViewportHost`](backend::ViewportHost) contracts implemented by platform
//! crates.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies.
//!
//! [`ClassFragment`]: class_names::ClassFragment

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod backend;
pub mod carousel;
pub mod class_names;
pub mod error;
pub mod page;
pub mod scroll_spy;
pub mod section;
pub mod site;
pub mod state;
pub mod time;
pub mod trace;
pub mod ui;
pub mod view;

#[doc(hidden)]
pub use class_names::ClassList as __ClassList;
