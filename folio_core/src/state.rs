// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A value with change notification.
//!
//! [`Observable`] decouples whoever mutates page state (the scroll-spy) from
//! whoever redraws because of it (the navigation). Subscribers run
//! synchronously inside [`Observable::set`], in subscription order, and only
//! when the value actually changed.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Handle returned by [`Observable::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

type Callback<T> = Box<dyn FnMut(&T)>;

/// Holds a value and notifies subscribers when it changes.
pub struct Observable<T> {
    value: T,
    subscribers: Vec<(SubscriptionId, Callback<T>)>,
    next_id: u32,
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl<T: PartialEq> Observable<T> {
    /// Creates an observable with an initial value and no subscribers.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// The current value.
    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value. Returns `true` and notifies subscribers if it
    /// differs from the previous one.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        for (_, callback) in &mut self.subscribers {
            callback(&self.value);
        }
        true
    }

    /// Registers a callback for future changes. The current value is not
    /// replayed.
    pub fn subscribe(&mut self, callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscription. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    #[test]
    fn notifies_only_on_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut obs = Observable::new(1);
        let sink = Rc::clone(&seen);
        obs.subscribe(move |v| sink.borrow_mut().push(*v));

        assert!(!obs.set(1));
        assert!(obs.set(2));
        assert!(obs.set(3));
        assert!(!obs.set(3));
        assert_eq!(*seen.borrow(), vec![2, 3]);
        assert_eq!(*obs.get(), 3);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let count = Rc::new(RefCell::new(0));
        let mut obs = Observable::new("a");
        let c = Rc::clone(&count);
        let id = obs.subscribe(move |_| *c.borrow_mut() += 1);
        obs.set("b");
        assert!(obs.unsubscribe(id));
        assert!(!obs.unsubscribe(id));
        obs.set("c");
        assert_eq!(*count.borrow(), 1);
        assert_eq!(obs.subscriber_count(), 0);
    }

    #[test]
    fn subscribers_run_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut obs = Observable::new(0);
        for tag in ["first", "second"] {
            let log = Rc::clone(&log);
            obs.subscribe(move |_| log.borrow_mut().push(tag));
        }
        obs.set(1);
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }
}
