// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conditional class-name composition.
//!
//! Styling is done with utility classes, so most elements build their `class`
//! attribute from a fixed base plus a few fragments that only apply in some
//! state. [`cn!`](crate::cn) takes any number of [`ClassFragment`] values and
//! joins the ones that carry text with single spaces, in argument order:
//!
//! ```
//! use folio_core::cn;
//!
//! let active = false;
//! let extra: Option<&str> = None;
//! assert_eq!(cn!("a", active.then_some("x"), "b", extra, "c"), "a b c");
//! ```
//!
//! Nothing is deduplicated or reordered, and no input is an error.

use alloc::string::String;

/// A value that may contribute text to a class list.
///
/// Strings contribute themselves unless empty. `Option` contributes its
/// payload when `Some`. Booleans never contribute text; they exist so a bare
/// `false` can be passed where a fragment was conditionally suppressed.
pub trait ClassFragment {
    /// Appends this fragment (if it has text) to `list`.
    fn append_to(self, list: &mut ClassList);
}

impl ClassFragment for &str {
    fn append_to(self, list: &mut ClassList) {
        list.push_str(self);
    }
}

impl ClassFragment for String {
    fn append_to(self, list: &mut ClassList) {
        list.push_str(&self);
    }
}

impl ClassFragment for &String {
    fn append_to(self, list: &mut ClassList) {
        list.push_str(self);
    }
}

impl<T: ClassFragment> ClassFragment for Option<T> {
    fn append_to(self, list: &mut ClassList) {
        if let Some(fragment) = self {
            fragment.append_to(list);
        }
    }
}

impl ClassFragment for bool {
    fn append_to(self, list: &mut ClassList) {
        _ = list;
    }
}

/// Accumulator behind [`cn!`](crate::cn) and [`compose`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    out: String,
}

impl ClassList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { out: String::new() }
    }

    /// Appends any fragment.
    pub fn push(&mut self, fragment: impl ClassFragment) {
        fragment.append_to(self);
    }

    /// Appends raw class text, inserting a separator when needed.
    pub fn push_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if !self.out.is_empty() {
            self.out.push(' ');
        }
        self.out.push_str(text);
    }

    /// Returns `true` if nothing has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Consumes the list and returns the joined string.
    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }
}

/// Joins every fragment that carries text, in iteration order.
#[must_use]
pub fn compose<I, F>(fragments: I) -> String
where
    I: IntoIterator<Item = F>,
    F: ClassFragment,
{
    let mut list = ClassList::new();
    for fragment in fragments {
        list.push(fragment);
    }
    list.finish()
}

/// Composes class fragments into one space-separated string.
///
/// Each argument may be any [`ClassFragment`]: `&str`, `String`, `Option<_>`,
/// or `bool`. See the [module docs](crate::class_names).
#[macro_export]
macro_rules! cn {
    ($($fragment:expr),* $(,)?) => {{
        #[allow(unused_mut, reason = "an empty invocation pushes nothing")]
        let mut list = $crate::__ClassList::new();
        $( list.push($fragment); )*
        list.finish()
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;
    use alloc::vec;

    #[test]
    fn drops_falsy_inputs_and_keeps_order() {
        let undefined: Option<&str> = None;
        assert_eq!(cn!("a", false, "b", undefined, "c"), "a b c");
    }

    #[test]
    fn conditional_fragments() {
        let active = true;
        let s = cn!(
            "base",
            active.then_some("on"),
            (!active).then_some("off"),
        );
        assert_eq!(s, "base on");
    }

    #[test]
    fn empty_strings_are_skipped() {
        assert_eq!(cn!("", "x", ""), "x");
        assert_eq!(cn!(), "");
        assert_eq!(cn!(false, None::<&str>), "");
    }

    #[test]
    fn duplicates_are_preserved() {
        assert_eq!(cn!("p-6", "p-6"), "p-6 p-6");
    }

    #[test]
    fn owned_and_borrowed_strings() {
        let owned = "owned".to_string();
        assert_eq!(cn!(&owned, Some(owned.clone()), "x"), "owned owned x");
    }

    #[test]
    fn compose_iterates_in_order() {
        let parts = vec![Some("one"), None, Some("two"), Some("")];
        assert_eq!(compose(parts), "one two");
    }

    #[test]
    fn multi_class_fragments_pass_through() {
        assert_eq!(cn!("flex gap-2", "p-4"), "flex gap-2 p-4");
    }
}
