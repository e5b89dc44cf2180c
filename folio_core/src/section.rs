// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page sections and their identities.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::error::ConfigError;

/// Stable key of a section; also the `id` attribute of its element.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionId(String);

impl SectionId {
    /// Creates an id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self(id.into())
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Debug for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SectionId({:?})", self.0)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named, ordered region of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    id: SectionId,
    number: String,
    title: String,
}

impl Section {
    /// Creates a section. `ordinal` is shown zero-padded to two digits.
    #[must_use]
    pub fn new(ordinal: u32, id: impl Into<SectionId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            number: format!("{ordinal:02}"),
            title: title.into(),
        }
    }

    /// The stable id.
    #[must_use]
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    /// Zero-padded ordinal, e.g. `"03"`.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Checks that `sections` is non-empty and has unique ids.
pub fn validate(sections: &[Section]) -> Result<(), ConfigError> {
    if sections.is_empty() {
        return Err(ConfigError::NoSections);
    }
    for (i, s) in sections.iter().enumerate() {
        if sections[..i].iter().any(|prev| prev.id == s.id) {
            return Err(ConfigError::DuplicateSection);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;
    use alloc::vec;

    #[test]
    fn number_is_zero_padded() {
        assert_eq!(Section::new(0, "about", "About").number(), "00");
        assert_eq!(Section::new(4, "project-d", "D").number(), "04");
        assert_eq!(Section::new(12, "x", "X").number(), "12");
    }

    #[test]
    fn id_compares_with_str() {
        let s = Section::new(1, "project-a", "A");
        assert!(*s.id() == "project-a");
        assert_eq!(s.id().to_string(), "project-a");
    }

    #[test]
    fn validate_rejects_empty_and_duplicates() {
        assert_eq!(validate(&[]), Err(ConfigError::NoSections));
        let dup = vec![Section::new(0, "a", "A"), Section::new(1, "a", "B")];
        assert_eq!(validate(&dup), Err(ConfigError::DuplicateSection));
        let ok = vec![Section::new(0, "a", "A"), Section::new(1, "b", "B")];
        assert_eq!(validate(&ok), Ok(()));
    }
}
