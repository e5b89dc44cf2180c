// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped DOM event listeners.

use alloc::boxed::Box;
use alloc::string::String;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

/// An event listener that is removed when the guard is dropped.
///
/// The guard owns the JS closure, so the callback stays valid exactly as
/// long as it is registered.
pub struct EventListenerGuard {
    target: EventTarget,
    event: String,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventListenerGuard {
    /// Adds `callback` as a listener for `event` on `target`.
    pub fn new(
        target: &EventTarget,
        event: &str,
        callback: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event: event.into(),
            closure,
        })
    }

    /// The event type this guard listens for.
    #[must_use]
    pub fn event(&self) -> &str {
        &self.event
    }
}

impl Drop for EventListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(&self.event, self.closure.as_ref().unchecked_ref());
    }
}

impl core::fmt::Debug for EventListenerGuard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventListenerGuard")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}
