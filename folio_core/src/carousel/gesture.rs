// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer geometry: click zones and swipes.

use kurbo::{Point, Rect};

use super::index::Direction;

/// Horizontal fraction of the carousel width that acts as a previous/next
/// zone on each side.
pub const CLICK_ZONE_FRACTION: f64 = 0.2;

/// Minimum horizontal travel, in pixels, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Maps a click at `point` inside `bounds` to a navigation direction.
///
/// The left 20% goes backward, the right 20% goes forward, the middle does
/// nothing. Degenerate bounds never navigate.
#[must_use]
pub fn click_zone(point: Point, bounds: Rect) -> Option<Direction> {
    let width = bounds.width();
    if width <= 0.0 {
        return None;
    }
    let fraction = (point.x - bounds.x0) / width;
    if fraction < CLICK_ZONE_FRACTION {
        Some(Direction::Backward)
    } else if fraction > 1.0 - CLICK_ZONE_FRACTION {
        Some(Direction::Forward)
    } else {
        None
    }
}

/// Tracks one touch gesture from start to end.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    /// Creates a tracker with no gesture in progress.
    #[must_use]
    pub const fn new() -> Self {
        Self { start_x: None }
    }

    /// Records where a touch started, replacing any unfinished gesture.
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finishes the gesture and classifies it.
    ///
    /// `delta = start − end`: a finger moving left (positive delta) past the
    /// threshold goes forward, moving right goes backward. The gesture is
    /// consumed either way.
    pub fn end(&mut self, x: f64) -> Option<Direction> {
        let start = self.start_x.take()?;
        let delta = start - x;
        if delta > SWIPE_THRESHOLD {
            Some(Direction::Forward)
        } else if delta < -SWIPE_THRESHOLD {
            Some(Direction::Backward)
        } else {
            None
        }
    }

    /// Whether a touch has started and not yet ended.
    #[must_use]
    pub const fn in_progress(&self) -> bool {
        self.start_x.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rect {
        Rect::new(100.0, 0.0, 600.0, 300.0)
    }

    fn at_fraction(f: f64) -> Point {
        Point::new(100.0 + 500.0 * f, 150.0)
    }

    #[test]
    fn click_fractions() {
        assert_eq!(click_zone(at_fraction(0.1), bounds()), Some(Direction::Backward));
        assert_eq!(click_zone(at_fraction(0.5), bounds()), None);
        assert_eq!(click_zone(at_fraction(0.9), bounds()), Some(Direction::Forward));
    }

    #[test]
    fn zone_edges_belong_to_the_middle() {
        assert_eq!(click_zone(at_fraction(0.2), bounds()), None);
        assert_eq!(click_zone(at_fraction(0.8), bounds()), None);
        assert_eq!(click_zone(at_fraction(0.19), bounds()), Some(Direction::Backward));
        assert_eq!(click_zone(at_fraction(0.81), bounds()), Some(Direction::Forward));
    }

    #[test]
    fn zero_width_never_navigates() {
        let r = Rect::new(10.0, 0.0, 10.0, 50.0);
        assert_eq!(click_zone(Point::new(10.0, 5.0), r), None);
    }

    #[test]
    fn swipe_threshold() {
        let mut t = SwipeTracker::new();
        for delta in [0.0, 1.0, 49.0, 50.0, -50.0, -12.5] {
            t.begin(300.0);
            assert_eq!(t.end(300.0 - delta), None, "delta={delta}");
        }
        t.begin(300.0);
        assert_eq!(t.end(249.0), Some(Direction::Forward));
        t.begin(300.0);
        assert_eq!(t.end(351.0), Some(Direction::Backward));
    }

    #[test]
    fn end_without_begin_is_ignored() {
        let mut t = SwipeTracker::new();
        assert_eq!(t.end(0.0), None);
        t.begin(200.0);
        assert!(t.in_progress());
        assert_eq!(t.end(0.0), Some(Direction::Forward));
        assert!(!t.in_progress());
        assert_eq!(t.end(0.0), None);
    }
}
