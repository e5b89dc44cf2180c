// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyword chip.

use alloc::string::String;

use super::Primitive;

/// A rounded chip holding one keyword.
#[must_use]
pub fn badge(text: impl Into<String>) -> Primitive {
    Primitive::new(
        "span",
        "px-3 py-1 bg-accent text-accent-foreground rounded-full text-sm",
    )
    .child(text.into())
}
