// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] writes events recorded by a
//! [`RecorderSink`](super::recorder::RecorderSink) as [Chrome Trace Event
//! Format][format] JSON.
//!
//! Each carousel gets its own track (`tid` = instance id + 1; track 0 holds
//! page-level events). Armed timers become async spans from arming to the
//! fire, cancellation or stale delivery that ends them.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use folio_core::time::HostTime;
use folio_core::trace::{ListenerAction, TimerAction};

use crate::recorder::RecordedEvent;

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let mut out: Vec<Value> = Vec::with_capacity(events.len());

    for recorded in events {
        match recorded {
            RecordedEvent::SectionActivated {
                at,
                previous,
                active,
                probe_y,
            } => {
                out.push(json!({
                    "ph": "i",
                    "name": "SectionActivated",
                    "cat": "ScrollSpy",
                    "ts": us(*at),
                    "pid": 0,
                    "tid": 0,
                    "s": "p",
                    "args": {
                        "previous": previous,
                        "active": active,
                        "probe_y": probe_y,
                    }
                }));
            }
            RecordedEvent::CarouselTransition(e) => {
                out.push(json!({
                    "ph": "i",
                    "name": format!("{:?}", e.cause),
                    "cat": "Carousel",
                    "ts": us(e.at),
                    "pid": 0,
                    "tid": track(e.instance.0),
                    "s": "t",
                    "args": {
                        "from": e.from,
                        "to": e.to,
                    }
                }));
            }
            RecordedEvent::Timer(e) => {
                let (ph, name) = match e.action {
                    TimerAction::Armed => ("b", "Timer"),
                    TimerAction::Fired | TimerAction::Cancelled => ("e", "Timer"),
                    TimerAction::Stale => ("i", "StaleTimer"),
                };
                let mut event = json!({
                    "ph": ph,
                    "name": name,
                    "cat": "Timer",
                    "ts": us(e.at),
                    "pid": 0,
                    "tid": track(e.instance.0),
                    "args": {
                        "token": e.token.0,
                        "action": format!("{:?}", e.action),
                    }
                });
                if ph == "i" {
                    event["s"] = json!("t");
                } else {
                    event["id"] = json!(e.token.0);
                }
                out.push(event);
            }
            RecordedEvent::Listener(e) => {
                out.push(json!({
                    "ph": "i",
                    "name": match e.action {
                        ListenerAction::Subscribed => "Subscribe",
                        ListenerAction::Unsubscribed => "Unsubscribe",
                    },
                    "cat": "Listener",
                    "ts": us(e.at),
                    "pid": 0,
                    "tid": track(e.instance.0),
                    "s": "t",
                    "args": {
                        "kind": e.kind.dom_name(),
                    }
                }));
            }
            RecordedEvent::Navigate { at, target, found } => {
                out.push(json!({
                    "ph": "i",
                    "name": "Navigate",
                    "cat": "Navigation",
                    "ts": us(*at),
                    "pid": 0,
                    "tid": 0,
                    "s": "p",
                    "args": {
                        "target": target,
                        "found": found,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &out)?;
    Ok(())
}

fn us(t: HostTime) -> u64 {
    t.micros()
}

fn track(instance: u32) -> u64 {
    u64::from(instance) + 1
}
