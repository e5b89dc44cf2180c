// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps every event, in
//! arrival order, as an owned [`RecordedEvent`]. Borrowed section ids are
//! copied into `String`s; the other events are small `Copy` structs and are
//! stored as they are.

use folio_core::backend::InstanceId;
use folio_core::time::HostTime;
use folio_core::trace::{
    CarouselTransitionEvent, ListenerEvent, NavigateEvent, SectionActivatedEvent, TimerEvent,
    TraceSink,
};

/// One recorded event.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// See [`SectionActivatedEvent`].
    SectionActivated {
        /// When the recomputation ran.
        at: HostTime,
        /// Previously active section id.
        previous: String,
        /// Newly active section id.
        active: String,
        /// The probed vertical position.
        probe_y: f64,
    },
    /// See [`CarouselTransitionEvent`].
    CarouselTransition(CarouselTransitionEvent),
    /// See [`TimerEvent`].
    Timer(TimerEvent),
    /// See [`ListenerEvent`].
    Listener(ListenerEvent),
    /// See [`NavigateEvent`].
    Navigate {
        /// When the click was handled.
        at: HostTime,
        /// Requested section id.
        target: String,
        /// Whether the section existed.
        found: bool,
    },
}

impl RecordedEvent {
    /// When the event happened.
    #[must_use]
    pub fn at(&self) -> HostTime {
        match self {
            Self::SectionActivated { at, .. } | Self::Navigate { at, .. } => *at,
            Self::CarouselTransition(e) => e.at,
            Self::Timer(e) => e.at,
            Self::Listener(e) => e.at,
        }
    }

    /// The carousel instance the event belongs to, if any.
    #[must_use]
    pub fn instance(&self) -> Option<InstanceId> {
        match self {
            Self::CarouselTransition(e) => Some(e.instance),
            Self::Timer(e) => Some(e.instance),
            Self::Listener(e) => Some(e.instance),
            Self::SectionActivated { .. } | Self::Navigate { .. } => None,
        }
    }
}

/// A [`TraceSink`] that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// The `(from, to)` slide pairs of one carousel, in order.
    pub fn slides(&self, instance: InstanceId) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.events.iter().filter_map(move |e| match e {
            RecordedEvent::CarouselTransition(t) if t.instance == instance => Some((t.from, t.to)),
            _ => None,
        })
    }
}

impl TraceSink for RecorderSink {
    fn on_section_activated(&mut self, e: &SectionActivatedEvent<'_>) {
        self.events.push(RecordedEvent::SectionActivated {
            at: e.at,
            previous: e.previous.into(),
            active: e.active.into(),
            probe_y: e.probe_y,
        });
    }

    fn on_carousel_transition(&mut self, e: &CarouselTransitionEvent) {
        self.events.push(RecordedEvent::CarouselTransition(*e));
    }

    fn on_timer(&mut self, e: &TimerEvent) {
        self.events.push(RecordedEvent::Timer(*e));
    }

    fn on_listener(&mut self, e: &ListenerEvent) {
        self.events.push(RecordedEvent::Listener(*e));
    }

    fn on_navigate(&mut self, e: &NavigateEvent<'_>) {
        self.events.push(RecordedEvent::Navigate {
            at: e.at,
            target: e.target.into(),
            found: e.found,
        });
    }
}
