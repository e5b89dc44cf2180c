// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for page interaction.
//!
//! This module provides a [`TraceSink`] trait with one method per event the
//! interactive components emit. All method bodies default to no-ops, so
//! implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing. When **on**, each
//! method performs a single `Option` branch before dispatching.
//!
//! Sinks live in other crates: `folio_debug` has pretty-printing, recording
//! and Chrome trace export; `folio_backend_web` has a browser console sink.

use crate::backend::{InstanceId, TimerToken, ViewportEventKind};
use crate::carousel::TransitionCause;
use crate::time::HostTime;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// What happened to a timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerAction {
    /// Armed with the host.
    Armed,
    /// Cancelled before firing.
    Cancelled,
    /// Fired and was acted on.
    Fired,
    /// Fired but was no longer the armed timer; ignored.
    Stale,
}

/// What happened to a viewport subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerAction {
    /// Subscription taken.
    Subscribed,
    /// Subscription released.
    Unsubscribed,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when scroll-spy recomputation changes the active section.
#[derive(Clone, Copy, Debug)]
pub struct SectionActivatedEvent<'a> {
    /// When the recomputation ran.
    pub at: HostTime,
    /// Previously active section id.
    pub previous: &'a str,
    /// Newly active section id.
    pub active: &'a str,
    /// The probed vertical position (scroll offset plus lookahead).
    pub probe_y: f64,
}

/// Emitted when a carousel changes slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselTransitionEvent {
    /// When the transition happened.
    pub at: HostTime,
    /// Which carousel.
    pub instance: InstanceId,
    /// 1-based index before.
    pub from: usize,
    /// 1-based index after.
    pub to: usize,
    /// What triggered it.
    pub cause: TransitionCause,
}

/// Emitted for timer lifecycle changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerEvent {
    /// When it happened.
    pub at: HostTime,
    /// Owning instance.
    pub instance: InstanceId,
    /// The timer.
    pub token: TimerToken,
    /// What happened.
    pub action: TimerAction,
}

/// Emitted for viewport subscription changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerEvent {
    /// When it happened.
    pub at: HostTime,
    /// Owning instance.
    pub instance: InstanceId,
    /// Event category.
    pub kind: ViewportEventKind,
    /// What happened.
    pub action: ListenerAction,
}

/// Emitted when a navigation item is clicked.
#[derive(Clone, Copy, Debug)]
pub struct NavigateEvent<'a> {
    /// When the click was handled.
    pub at: HostTime,
    /// Requested section id.
    pub target: &'a str,
    /// Whether a matching element existed to scroll to.
    pub found: bool,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the interactive components.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when the active section changes.
    fn on_section_activated(&mut self, e: &SectionActivatedEvent<'_>) {
        _ = e;
    }

    /// Called when a carousel changes slide.
    fn on_carousel_transition(&mut self, e: &CarouselTransitionEvent) {
        _ = e;
    }

    /// Called for timer lifecycle changes.
    fn on_timer(&mut self, e: &TimerEvent) {
        _ = e;
    }

    /// Called for subscription lifecycle changes.
    fn on_listener(&mut self, e: &ListenerEvent) {
        _ = e;
    }

    /// Called when a navigation item is clicked.
    fn on_navigate(&mut self, e: &NavigateEvent<'_>) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`SectionActivatedEvent`].
    #[inline]
    pub fn section_activated(&mut self, e: &SectionActivatedEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_section_activated(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`CarouselTransitionEvent`].
    #[inline]
    pub fn carousel_transition(&mut self, e: &CarouselTransitionEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_carousel_transition(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TimerEvent`].
    #[inline]
    pub fn timer(&mut self, e: &TimerEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_timer(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ListenerEvent`].
    #[inline]
    pub fn listener(&mut self, e: &ListenerEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_listener(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`NavigateEvent`].
    #[inline]
    pub fn navigate(&mut self, e: &NavigateEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_navigate(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_transition() -> CarouselTransitionEvent {
        CarouselTransitionEvent {
            at: HostTime(5_000_000),
            instance: InstanceId(3),
            from: 2,
            to: 3,
            cause: TransitionCause::Timer,
        }
    }

    #[test]
    fn noop_sink_accepts_everything() {
        let mut sink = NoopSink;
        sink.on_carousel_transition(&sample_transition());
        sink.on_section_activated(&SectionActivatedEvent {
            at: HostTime(0),
            previous: "about",
            active: "project-a",
            probe_y: 900.0,
        });
        sink.on_navigate(&NavigateEvent {
            at: HostTime(0),
            target: "project-b",
            found: true,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.carousel_transition(&sample_transition());
        tracer.timer(&TimerEvent {
            at: HostTime(0),
            instance: InstanceId(0),
            token: TimerToken(1),
            action: TimerAction::Armed,
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            moves: Vec<(usize, usize)>,
        }
        impl TraceSink for RecordingSink {
            fn on_carousel_transition(&mut self, e: &CarouselTransitionEvent) {
                self.moves.push((e.from, e.to));
            }
        }

        let mut sink = RecordingSink { moves: Vec::new() };
        Tracer::new(&mut sink).carousel_transition(&sample_transition());
        assert_eq!(sink.moves, &[(2, 3)]);
    }
}
