// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Site-wide configuration.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;

/// Where the site is served from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Path prefix the site is deployed under, e.g. `/portfolio`. `/` when
    /// served from the domain root.
    pub base_path: Cow<'static, str>,
}

impl SiteConfig {
    /// A site served from the domain root.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            base_path: Cow::Borrowed("/"),
        }
    }

    /// A site served under `base_path`.
    #[must_use]
    pub const fn under(base_path: &'static str) -> Self {
        Self {
            base_path: Cow::Borrowed(base_path),
        }
    }

    /// Resolves an asset path against the base path.
    ///
    /// Absolute URLs (with a scheme) and protocol-relative paths are returned
    /// unchanged. Everything else is joined with exactly one `/`.
    #[must_use]
    pub fn asset_url(&self, path: &str) -> String {
        if path.contains("://") || path.starts_with("//") {
            return path.into();
        }
        let base = self.base_path.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_paths() {
        let site = SiteConfig::root();
        assert_eq!(site.asset_url("images/a.jpg"), "/images/a.jpg");
        assert_eq!(site.asset_url("/images/a.jpg"), "/images/a.jpg");
    }

    #[test]
    fn base_path_is_prefixed_once() {
        let site = SiteConfig::under("/portfolio/");
        assert_eq!(site.asset_url("/images/a.jpg"), "/portfolio/images/a.jpg");
        assert_eq!(site.asset_url("images/a.jpg"), "/portfolio/images/a.jpg");
    }

    #[test]
    fn absolute_urls_pass_through() {
        let site = SiteConfig::under("/portfolio");
        assert_eq!(
            site.asset_url("https://cdn.example.com/a.jpg"),
            "https://cdn.example.com/a.jpg"
        );
    }
}
