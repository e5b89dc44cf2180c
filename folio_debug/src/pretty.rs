// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Timestamps
//! are printed in milliseconds.

use std::io::Write;

use folio_core::time::HostTime;
use folio_core::trace::{
    CarouselTransitionEvent, ListenerAction, ListenerEvent, NavigateEvent, SectionActivatedEvent,
    TimerAction, TimerEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn ms(t: HostTime) -> f64 {
    t.micros() as f64 / 1000.0
}

fn timer_action(action: TimerAction) -> &'static str {
    match action {
        TimerAction::Armed => "armed",
        TimerAction::Cancelled => "cancelled",
        TimerAction::Fired => "fired",
        TimerAction::Stale => "stale",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_section_activated(&mut self, e: &SectionActivatedEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[section] {} -> {} probe={:.0}px at {:.1}ms",
            e.previous,
            e.active,
            e.probe_y,
            ms(e.at),
        );
    }

    fn on_carousel_transition(&mut self, e: &CarouselTransitionEvent) {
        let _ = writeln!(
            self.writer,
            "[carousel] instance={} {} -> {} cause={:?} at {:.1}ms",
            e.instance.0,
            e.from,
            e.to,
            e.cause,
            ms(e.at),
        );
    }

    fn on_timer(&mut self, e: &TimerEvent) {
        let _ = writeln!(
            self.writer,
            "[timer:{}] instance={} token={} at {:.1}ms",
            timer_action(e.action),
            e.instance.0,
            e.token.0,
            ms(e.at),
        );
    }

    fn on_listener(&mut self, e: &ListenerEvent) {
        let action = match e.action {
            ListenerAction::Subscribed => "subscribe",
            ListenerAction::Unsubscribed => "unsubscribe",
        };
        let _ = writeln!(
            self.writer,
            "[listener:{action}] instance={} {} at {:.1}ms",
            e.instance.0,
            e.kind.dom_name(),
            ms(e.at),
        );
    }

    fn on_navigate(&mut self, e: &NavigateEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[navigate] #{}{} at {:.1}ms",
            e.target,
            if e.found { "" } else { " (missing)" },
            ms(e.at),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::backend::{InstanceId, TimerToken, ViewportEventKind};
    use folio_core::carousel::TransitionCause;

    fn output(f: impl FnOnce(&mut PrettyPrintSink<Vec<u8>>)) -> String {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        f(&mut sink);
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn pretty_print_transition() {
        let out = output(|sink| {
            sink.on_carousel_transition(&CarouselTransitionEvent {
                at: HostTime(5_000_000),
                instance: InstanceId(2),
                from: 3,
                to: 1,
                cause: TransitionCause::Timer,
            });
        });
        assert_eq!(out, "[carousel] instance=2 3 -> 1 cause=Timer at 5000.0ms\n");
    }

    #[test]
    fn pretty_print_section_and_navigation() {
        let out = output(|sink| {
            sink.on_section_activated(&SectionActivatedEvent {
                at: HostTime(1500),
                previous: "about",
                active: "project-a",
                probe_y: 900.0,
            });
            sink.on_navigate(&NavigateEvent {
                at: HostTime(2000),
                target: "nowhere",
                found: false,
            });
        });
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "[section] about -> project-a probe=900px at 1.5ms");
        assert_eq!(lines[1], "[navigate] #nowhere (missing) at 2.0ms");
    }

    #[test]
    fn pretty_print_lifecycle() {
        let out = output(|sink| {
            sink.on_timer(&TimerEvent {
                at: HostTime(0),
                instance: InstanceId(1),
                token: TimerToken(7),
                action: TimerAction::Stale,
            });
            sink.on_listener(&ListenerEvent {
                at: HostTime(0),
                instance: InstanceId(1),
                kind: ViewportEventKind::KeyDown,
                action: ListenerAction::Unsubscribed,
            });
        });
        assert!(out.contains("[timer:stale] instance=1 token=7"));
        assert!(out.contains("[listener:unsubscribe] instance=1 keydown"));
    }
}
