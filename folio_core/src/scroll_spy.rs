// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-section detection.
//!
//! On every scroll the sections are scanned in declaration order and the
//! first one whose vertical extent contains `scroll_y + lookahead` becomes
//! active. If none matches, or no section has a layout yet, the previous
//! active section is kept.
//!
//! Navigation clicks never set the active section directly; the smooth
//! scroll they start produces scroll events, and those do.

use alloc::vec::Vec;

use crate::error::ConfigError;
use crate::section::{self, Section, SectionId};
use crate::time::HostTime;
use crate::trace::{SectionActivatedEvent, Tracer};

/// Vertical placement of a section, in document pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    /// Distance from the document top (`offsetTop`).
    pub top: f64,
    /// Height (`offsetHeight`).
    pub height: f64,
}

impl Extent {
    /// Creates an extent.
    #[must_use]
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Whether `y` lies in `[top, top + height)`.
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Scroll-spy tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSpyConfig {
    /// Pixels added to the scroll offset before probing, so a section
    /// becomes active slightly before its top reaches the viewport top.
    pub lookahead: f64,
}

impl ScrollSpyConfig {
    /// The page default: 100px lookahead.
    pub const DEFAULT: Self = Self { lookahead: 100.0 };
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Tracks which section is active.
#[derive(Clone, Debug)]
pub struct ScrollSpy {
    ids: Vec<SectionId>,
    active: usize,
    config: ScrollSpyConfig,
}

impl ScrollSpy {
    /// Starts with the first section active.
    pub fn new(sections: &[Section], config: ScrollSpyConfig) -> Result<Self, ConfigError> {
        section::validate(sections)?;
        Ok(Self {
            ids: sections.iter().map(|s| s.id().clone()).collect(),
            active: 0,
            config,
        })
    }

    /// The active section id.
    #[must_use]
    pub fn active(&self) -> &SectionId {
        &self.ids[self.active]
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> ScrollSpyConfig {
        self.config
    }

    /// Recomputes the active section for a scroll offset.
    ///
    /// `layout` returns the extent of a section, or `None` when its element
    /// is missing. Returns the new id only when the active section changed.
    pub fn recompute(
        &mut self,
        scroll_y: f64,
        layout: impl Fn(&SectionId) -> Option<Extent>,
    ) -> Option<&SectionId> {
        self.recompute_traced(scroll_y, layout, HostTime(0), &mut Tracer::none())
    }

    /// [`recompute`](Self::recompute) with a trace event on change.
    pub fn recompute_traced(
        &mut self,
        scroll_y: f64,
        layout: impl Fn(&SectionId) -> Option<Extent>,
        now: HostTime,
        tracer: &mut Tracer<'_>,
    ) -> Option<&SectionId> {
        let probe_y = scroll_y + self.config.lookahead;
        let hit = self
            .ids
            .iter()
            .position(|id| layout(id).is_some_and(|e| e.contains(probe_y)))?;
        if hit == self.active {
            return None;
        }
        tracer.section_activated(&SectionActivatedEvent {
            at: now,
            previous: self.ids[self.active].as_str(),
            active: self.ids[hit].as_str(),
            probe_y,
        });
        self.active = hit;
        Some(&self.ids[hit])
    }
}
