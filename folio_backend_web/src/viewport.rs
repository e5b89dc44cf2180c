// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timers and window-level listeners.
//!
//! [`WebViewport`] implements [`ViewportHost`] on top of `setTimeout` and
//! `addEventListener` on the window. Components register a handler under an
//! [`InstanceId`]; every timer and subscription is keyed by that id, and
//! events are delivered only to the instance that asked for them.
//!
//! There is one JS closure for all timers (the token travels as the
//! `setTimeout` argument) and one per event kind. They are created lazily and
//! live as long as the viewport, so a handler may cancel, re-arm or
//! unsubscribe from inside a callback without dropping the closure that is
//! running. The window listener for a kind is attached while at least one
//! subscription for it exists.

use alloc::boxed::Box;
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Event, KeyboardEvent, TouchEvent, Window};

use folio_core::backend::{
    InstanceGuard, InstanceId, Key, ListenerToken, TimerToken, ViewportEvent, ViewportEventKind,
    ViewportHost,
};
use folio_core::time::Duration;

// Direct global bindings instead of `web_sys::Window` methods; the token is
// passed through `setTimeout`'s extra argument.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(callback: &JsValue, delay_ms: i32, token: f64) -> i32;

    #[wasm_bindgen(js_name = "clearTimeout")]
    fn clear_timeout(id: i32);
}

/// Receives the events delivered to one instance.
pub type Handler = Rc<dyn Fn(ViewportEvent)>;

type TimerClosure = Closure<dyn FnMut(f64)>;
type EventClosure = Closure<dyn FnMut(Event)>;

/// The browser [`ViewportHost`].
///
/// Cloning is cheap and yields a handle to the same viewport.
#[derive(Clone)]
pub struct WebViewport {
    inner: Rc<ViewportInner>,
}

struct ViewportInner {
    window: Window,
    next_instance: Cell<u32>,
    next_token: Cell<u64>,
    handlers: RefCell<BTreeMap<InstanceId, Handler>>,
    /// Armed timers: owner and the id returned by `setTimeout`.
    timers: RefCell<BTreeMap<TimerToken, (InstanceId, i32)>>,
    listeners: RefCell<BTreeMap<ListenerToken, (InstanceId, ViewportEventKind)>>,
    timer_closure: RefCell<Option<TimerClosure>>,
    kind_closures: RefCell<BTreeMap<ViewportEventKind, EventClosure>>,
    attached: RefCell<BTreeSet<ViewportEventKind>>,
}

impl WebViewport {
    /// Creates a viewport over `window` with nothing registered.
    #[must_use]
    pub fn new(window: Window) -> Self {
        let inner = Rc::new(ViewportInner {
            window,
            next_instance: Cell::new(0),
            next_token: Cell::new(0),
            handlers: RefCell::new(BTreeMap::new()),
            timers: RefCell::new(BTreeMap::new()),
            listeners: RefCell::new(BTreeMap::new()),
            timer_closure: RefCell::new(None),
            kind_closures: RefCell::new(BTreeMap::new()),
            attached: RefCell::new(BTreeSet::new()),
        });

        let weak = Rc::downgrade(&inner);
        let closure = Closure::wrap(Box::new(move |token: f64| {
            if let Some(inner) = weak.upgrade() {
                inner.fire_timer(token_from_js(token));
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.timer_closure.borrow_mut() = Some(closure);

        Self { inner }
    }

    /// The window this viewport listens on.
    #[must_use]
    pub fn window(&self) -> &Window {
        &self.inner.window
    }

    /// Reserves an id for a component about to register.
    #[must_use]
    pub fn next_instance_id(&self) -> InstanceId {
        let id = self.inner.next_instance.get();
        self.inner.next_instance.set(id + 1);
        InstanceId(id)
    }

    /// Starts delivering events for `id` to `handler`.
    ///
    /// Dropping the returned guard stops delivery and releases every timer
    /// and subscription `id` still holds.
    #[must_use = "dropping the guard unregisters the instance"]
    pub fn register(&self, id: InstanceId, handler: Handler) -> InstanceGuard<Self> {
        self.inner.handlers.borrow_mut().insert(id, handler);
        InstanceGuard::new(self.clone(), id)
    }

    /// Number of armed timers.
    #[must_use]
    pub fn armed_timers(&self) -> usize {
        self.inner.timers.borrow().len()
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriptions(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn bump(&self) -> u64 {
        let n = self.inner.next_token.get() + 1;
        self.inner.next_token.set(n);
        n
    }

    fn attach(&self, kind: ViewportEventKind) {
        if !self.inner.attached.borrow_mut().insert(kind) {
            return;
        }
        let mut closures = self.inner.kind_closures.borrow_mut();
        let closure = closures.entry(kind).or_insert_with(|| {
            let weak = Rc::downgrade(&self.inner);
            Closure::wrap(Box::new(move |event: Event| {
                if let Some(inner) = weak.upgrade() {
                    inner.dispatch_dom(kind, &event);
                }
            }) as Box<dyn FnMut(Event)>)
        });
        let _ = self
            .inner
            .window
            .add_event_listener_with_callback(kind.dom_name(), closure.as_ref().unchecked_ref());
    }

    fn detach_if_unused(&self, kind: ViewportEventKind) {
        let in_use = self.inner.listeners.borrow().values().any(|(_, k)| *k == kind);
        if in_use || !self.inner.attached.borrow_mut().remove(&kind) {
            return;
        }
        if let Some(closure) = self.inner.kind_closures.borrow().get(&kind) {
            let _ = self.inner.window.remove_event_listener_with_callback(
                kind.dom_name(),
                closure.as_ref().unchecked_ref(),
            );
        }
    }
}

impl ViewportHost for WebViewport {
    fn arm_timer(&self, owner: InstanceId, delay: Duration) -> TimerToken {
        let token = TimerToken(self.bump());
        let id = match &*self.inner.timer_closure.borrow() {
            Some(closure) => set_timeout(closure.as_ref(), delay_to_js(delay), token_to_js(token)),
            None => return token,
        };
        self.inner.timers.borrow_mut().insert(token, (owner, id));
        token
    }

    fn cancel_timer(&self, token: TimerToken) {
        let removed = self.inner.timers.borrow_mut().remove(&token);
        if let Some((_, id)) = removed {
            clear_timeout(id);
        }
    }

    fn subscribe(&self, owner: InstanceId, kind: ViewportEventKind) -> ListenerToken {
        let token = ListenerToken(self.bump());
        self.inner.listeners.borrow_mut().insert(token, (owner, kind));
        self.attach(kind);
        token
    }

    fn unsubscribe(&self, token: ListenerToken) {
        let removed = self.inner.listeners.borrow_mut().remove(&token);
        if let Some((_, kind)) = removed {
            self.detach_if_unused(kind);
        }
    }

    fn release(&self, owner: InstanceId) {
        self.inner.handlers.borrow_mut().remove(&owner);
        let timers: Vec<TimerToken> = self
            .inner
            .timers
            .borrow()
            .iter()
            .filter(|(_, (o, _))| *o == owner)
            .map(|(t, _)| *t)
            .collect();
        for token in timers {
            self.cancel_timer(token);
        }
        let listeners: Vec<ListenerToken> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .filter(|(_, (o, _))| *o == owner)
            .map(|(t, _)| *t)
            .collect();
        for token in listeners {
            self.unsubscribe(token);
        }
    }
}

impl ViewportInner {
    fn handler(&self, id: InstanceId) -> Option<Handler> {
        self.handlers.borrow().get(&id).cloned()
    }

    fn fire_timer(&self, token: TimerToken) {
        // Removed before dispatch so the handler can re-arm freely.
        let owner = self.timers.borrow_mut().remove(&token).map(|(o, _)| o);
        if let Some(handler) = owner.and_then(|o| self.handler(o)) {
            handler(ViewportEvent::Timer(token));
        }
    }

    fn dispatch_dom(&self, kind: ViewportEventKind, event: &Event) {
        let Some(event) = self.translate(kind, event) else {
            return;
        };
        // Handlers are cloned out first; none of the registries is borrowed
        // while they run.
        let owners: BTreeSet<InstanceId> = self
            .listeners
            .borrow()
            .values()
            .filter(|(_, k)| *k == kind)
            .map(|(o, _)| *o)
            .collect();
        let handlers: Vec<Handler> = owners.into_iter().filter_map(|o| self.handler(o)).collect();
        for handler in handlers {
            handler(event);
        }
    }

    fn translate(&self, kind: ViewportEventKind, event: &Event) -> Option<ViewportEvent> {
        match kind {
            ViewportEventKind::Scroll => Some(ViewportEvent::Scroll {
                scroll_y: self.window.scroll_y().unwrap_or(0.0),
            }),
            ViewportEventKind::KeyDown => {
                let key = event.dyn_ref::<KeyboardEvent>()?.key();
                Some(ViewportEvent::Key(Key::from_dom(&key)))
            }
            ViewportEventKind::TouchStart => {
                touch_x(event).map(|x| ViewportEvent::TouchStart { x })
            }
            ViewportEventKind::TouchEnd => touch_x(event).map(|x| ViewportEvent::TouchEnd { x }),
        }
    }
}

impl Drop for ViewportInner {
    fn drop(&mut self) {
        for (_, (_, id)) in core::mem::take(self.timers.get_mut()) {
            clear_timeout(id);
        }
        let closures = self.kind_closures.get_mut();
        for kind in core::mem::take(self.attached.get_mut()) {
            if let Some(closure) = closures.get(&kind) {
                let _ = self.window.remove_event_listener_with_callback(
                    kind.dom_name(),
                    closure.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

impl core::fmt::Debug for WebViewport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WebViewport")
            .field("handlers", &self.inner.handlers.borrow().len())
            .field("timers", &self.inner.timers.borrow().len())
            .field("listeners", &self.inner.listeners.borrow().len())
            .field("attached", &*self.inner.attached.borrow())
            .finish()
    }
}

/// Horizontal position of the first changed touch point.
pub(crate) fn touch_x(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
    Some(f64::from(touch.client_x()))
}

/// `setTimeout` delay in milliseconds, saturated to the JS range.
fn delay_to_js(delay: Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(i32::MAX)
}

// Tokens stay far below 2^53 in a page session.
fn token_to_js(token: TimerToken) -> f64 {
    token.0 as f64
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value round-trips a token produced by `token_to_js`"
)]
fn token_from_js(value: f64) -> TimerToken {
    TimerToken(value as u64)
}
