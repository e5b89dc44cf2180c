// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trace output to the browser console.

use alloc::format;
use alloc::string::String;

use folio_core::trace::{
    CarouselTransitionEvent, ListenerAction, ListenerEvent, NavigateEvent, SectionActivatedEvent,
    TimerAction, TimerEvent, TraceSink,
};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Writes one `console.debug` line per trace event.
///
/// Timer and listener bookkeeping is noisy (every slide change re-arms a
/// timer), so it is only logged when enabled with
/// [`with_lifecycle`](Self::with_lifecycle).
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink {
    lifecycle: bool,
}

impl ConsoleSink {
    /// Logs transitions, section changes and navigation.
    #[must_use]
    pub const fn new() -> Self {
        Self { lifecycle: false }
    }

    /// Also logs timer and listener events.
    #[must_use]
    pub const fn with_lifecycle(mut self) -> Self {
        self.lifecycle = true;
        self
    }

    /// Whether timer and listener events are logged.
    #[must_use]
    pub const fn logs_lifecycle(&self) -> bool {
        self.lifecycle
    }

    fn log(line: String) {
        console::debug_1(&JsValue::from_str(&line));
    }
}

impl TraceSink for ConsoleSink {
    fn on_section_activated(&mut self, e: &SectionActivatedEvent<'_>) {
        Self::log(format!(
            "[folio:section] {} -> {} probe={:.0}px",
            e.previous, e.active, e.probe_y
        ));
    }

    fn on_carousel_transition(&mut self, e: &CarouselTransitionEvent) {
        Self::log(format!(
            "[folio:carousel] instance={} {} -> {} cause={:?}",
            e.instance.0, e.from, e.to, e.cause
        ));
    }

    fn on_timer(&mut self, e: &TimerEvent) {
        if !self.lifecycle {
            return;
        }
        let action = match e.action {
            TimerAction::Armed => "armed",
            TimerAction::Cancelled => "cancelled",
            TimerAction::Fired => "fired",
            TimerAction::Stale => "stale",
        };
        Self::log(format!(
            "[folio:timer] instance={} token={} {action}",
            e.instance.0, e.token.0
        ));
    }

    fn on_listener(&mut self, e: &ListenerEvent) {
        if !self.lifecycle {
            return;
        }
        let action = match e.action {
            ListenerAction::Subscribed => "+",
            ListenerAction::Unsubscribed => "-",
        };
        Self::log(format!(
            "[folio:listener] instance={} {action}{}",
            e.instance.0,
            e.kind.dom_name()
        ));
    }

    fn on_navigate(&mut self, e: &NavigateEvent<'_>) {
        let found = if e.found { "" } else { " (missing)" };
        Self::log(format!("[folio:navigate] {}{found}", e.target));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_is_opt_in() {
        assert!(!ConsoleSink::new().logs_lifecycle());
        assert!(!ConsoleSink::default().logs_lifecycle());
        assert!(ConsoleSink::new().with_lifecycle().logs_lifecycle());
    }
}
