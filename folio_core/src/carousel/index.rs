// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cyclic 1-based slide index.

use crate::error::ConfigError;

/// Direction of a one-step move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards higher indices, wrapping `total → 1`.
    Forward,
    /// Towards lower indices, wrapping `1 → total`.
    Backward,
}

/// Current slide of a carousel.
///
/// `current` is always in `1..=total` and `total` is fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CarouselState {
    current: usize,
    total: usize,
}

impl CarouselState {
    /// Starts at slide 1 of `total`.
    pub fn new(total: usize) -> Result<Self, ConfigError> {
        if total == 0 {
            return Err(ConfigError::NoImages);
        }
        Ok(Self { current: 1, total })
    }

    /// 1-based current index.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Number of slides.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Moves one step and returns the new index.
    pub fn step(&mut self, direction: Direction) -> usize {
        self.current = match direction {
            Direction::Forward if self.current == self.total => 1,
            Direction::Forward => self.current + 1,
            Direction::Backward if self.current == 1 => self.total,
            Direction::Backward => self.current - 1,
        };
        self.current
    }

    /// Jumps to `position`. Out-of-range positions are ignored and return
    /// `false`.
    pub fn go_to(&mut self, position: usize) -> bool {
        if position == 0 || position > self.total {
            return false;
        }
        self.current = position;
        true
    }
}
