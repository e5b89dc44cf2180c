// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.
//!
//! Runtime event handling never fails: an event that cannot apply is simply
//! ignored. The only errors are invalid configurations caught at construction.

use core::fmt;

/// A configuration value that the page or one of its components cannot use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A carousel was configured with zero images.
    NoImages,
    /// A carousel auto-advance interval of zero.
    ZeroInterval,
    /// A carousel path template without an `{index}` placeholder, so every
    /// slide would resolve to the same file.
    MissingIndexPlaceholder,
    /// A scroll-spy or page was given an empty section list.
    NoSections,
    /// Two sections share an id.
    DuplicateSection,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoImages => f.write_str("carousel needs at least one image"),
            Self::ZeroInterval => f.write_str("carousel interval must be non-zero"),
            Self::MissingIndexPlaceholder => {
                f.write_str("carousel path template has no `{index}` placeholder")
            }
            Self::NoSections => f.write_str("page needs at least one section"),
            Self::DuplicateSection => f.write_str("section ids must be unique"),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;

    #[test]
    fn display_messages() {
        assert_eq!(
            ConfigError::NoImages.to_string(),
            "carousel needs at least one image"
        );
        assert!(
            ConfigError::MissingIndexPlaceholder
                .to_string()
                .contains("{index}")
        );
    }
}
