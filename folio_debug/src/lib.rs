// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing, recording, and Chrome trace export for folio
//! diagnostics.
//!
//! This crate provides [`TraceSink`](folio_core::trace::TraceSink)
//! implementations for development and for inspecting an interaction after
//! the fact:
//!
//! - [`pretty::PrettyPrintSink`]: one human-readable line per event.
//! - [`recorder::RecorderSink`]: an owned, in-order event log.
//! - [`chrome::export`]: writes Chrome Trace Event Format JSON from a
//!   recording.

pub mod chrome;
pub mod pretty;
pub mod recorder;
