// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A carousel bound to a viewport host for the duration of its mount.

use alloc::vec::Vec;

use super::{Carousel, CarouselInput, Transition, TouchScope};
use crate::backend::{
    InstanceId, ListenerToken, TimerToken, ViewportEvent, ViewportEventKind, ViewportHost,
};
use crate::time::HostTime;
use crate::trace::{
    CarouselTransitionEvent, ListenerAction, ListenerEvent, TimerAction, TimerEvent, Tracer,
};

/// A mounted [`Carousel`].
///
/// While alive it holds exactly one armed auto-advance timer and its
/// viewport subscriptions. Dropping it (or calling [`unmount`](Self::unmount))
/// cancels the timer and releases every subscription.
#[derive(Debug)]
pub struct CarouselMount<H: ViewportHost> {
    carousel: Carousel,
    host: H,
    instance: InstanceId,
    timer: Option<TimerToken>,
    listeners: Vec<(ListenerToken, ViewportEventKind)>,
}

impl<H: ViewportHost> CarouselMount<H> {
    /// Arms the first timer and subscribes to key events, plus touch events
    /// when the carousel listens viewport-wide.
    pub fn mount(
        carousel: Carousel,
        host: H,
        instance: InstanceId,
        now: HostTime,
        tracer: &mut Tracer<'_>,
    ) -> Self {
        let mut kinds = Vec::with_capacity(3);
        kinds.push(ViewportEventKind::KeyDown);
        if carousel.config().touch_scope == TouchScope::Viewport {
            kinds.push(ViewportEventKind::TouchStart);
            kinds.push(ViewportEventKind::TouchEnd);
        }
        let listeners = kinds
            .into_iter()
            .map(|kind| {
                let token = host.subscribe(instance, kind);
                tracer.listener(&ListenerEvent {
                    at: now,
                    instance,
                    kind,
                    action: ListenerAction::Subscribed,
                });
                (token, kind)
            })
            .collect();

        let mut mount = Self {
            carousel,
            host,
            instance,
            timer: None,
            listeners,
        };
        mount.rearm(now, tracer);
        mount
    }

    /// The carousel state.
    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// This mount's instance id.
    #[must_use]
    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    /// The currently armed timer.
    #[must_use]
    pub fn armed_timer(&self) -> Option<TimerToken> {
        self.timer
    }

    /// Handles an event the host delivered to this instance.
    ///
    /// A timer event whose token is not the armed one is stale and ignored.
    /// A fresh one advances the carousel and always arms the next timer, so
    /// auto-advance keeps running even when the index did not change.
    pub fn on_viewport_event(
        &mut self,
        event: ViewportEvent,
        now: HostTime,
        tracer: &mut Tracer<'_>,
    ) -> Option<Transition> {
        let input = match event {
            ViewportEvent::Timer(token) => {
                if self.timer != Some(token) {
                    tracer.timer(&TimerEvent {
                        at: now,
                        instance: self.instance,
                        token,
                        action: TimerAction::Stale,
                    });
                    return None;
                }
                self.timer = None;
                tracer.timer(&TimerEvent {
                    at: now,
                    instance: self.instance,
                    token,
                    action: TimerAction::Fired,
                });
                let transition = self.carousel.handle(CarouselInput::Tick);
                self.trace_transition(transition, now, tracer);
                self.rearm(now, tracer);
                return transition;
            }
            ViewportEvent::Key(key) => CarouselInput::Key(key),
            ViewportEvent::TouchStart { x } => CarouselInput::TouchStart { x },
            ViewportEvent::TouchEnd { x } => CarouselInput::TouchEnd { x },
            ViewportEvent::Scroll { .. } => return None,
        };
        self.on_input(input, now, tracer)
    }

    /// Applies a user input. A resulting transition restarts the interval.
    pub fn on_input(
        &mut self,
        input: CarouselInput,
        now: HostTime,
        tracer: &mut Tracer<'_>,
    ) -> Option<Transition> {
        let transition = self.carousel.handle(input)?;
        self.trace_transition(Some(transition), now, tracer);
        self.rearm(now, tracer);
        Some(transition)
    }

    /// Releases the timer and every subscription, tracing each.
    pub fn unmount(mut self, now: HostTime, tracer: &mut Tracer<'_>) {
        self.release(now, tracer);
    }

    fn rearm(&mut self, now: HostTime, tracer: &mut Tracer<'_>) {
        self.cancel_timer(now, tracer);
        let token = self
            .host
            .arm_timer(self.instance, self.carousel.config().interval);
        self.timer = Some(token);
        tracer.timer(&TimerEvent {
            at: now,
            instance: self.instance,
            token,
            action: TimerAction::Armed,
        });
    }

    fn cancel_timer(&mut self, now: HostTime, tracer: &mut Tracer<'_>) {
        if let Some(token) = self.timer.take() {
            self.host.cancel_timer(token);
            tracer.timer(&TimerEvent {
                at: now,
                instance: self.instance,
                token,
                action: TimerAction::Cancelled,
            });
        }
    }

    fn release(&mut self, now: HostTime, tracer: &mut Tracer<'_>) {
        self.cancel_timer(now, tracer);
        for (token, kind) in self.listeners.drain(..) {
            self.host.unsubscribe(token);
            tracer.listener(&ListenerEvent {
                at: now,
                instance: self.instance,
                kind,
                action: ListenerAction::Unsubscribed,
            });
        }
    }

    fn trace_transition(
        &self,
        transition: Option<Transition>,
        now: HostTime,
        tracer: &mut Tracer<'_>,
    ) {
        if let Some(t) = transition {
            tracer.carousel_transition(&CarouselTransitionEvent {
                at: now,
                instance: self.instance,
                from: t.from,
                to: t.to,
                cause: t.cause,
            });
        }
    }
}

impl<H: ViewportHost> Drop for CarouselMount<H> {
    fn drop(&mut self) {
        // No clock here; `unmount` is the traced path.
        self.release(HostTime(0), &mut Tracer::none());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;

    use crate::backend::Key;
    use crate::backend::testing::FakeHost;
    use crate::carousel::{CarouselConfig, TransitionCause};
    use crate::time::Duration;

    const ID: InstanceId = InstanceId(7);

    fn mount(host: &Rc<FakeHost>, total: usize, scope: TouchScope) -> CarouselMount<Rc<FakeHost>> {
        let cfg = CarouselConfig::new("img/{index}.jpg", total)
            .with_interval(Duration::from_millis(3000))
            .with_touch_scope(scope);
        CarouselMount::mount(
            Carousel::new(cfg).unwrap(),
            Rc::clone(host),
            ID,
            HostTime(0),
            &mut Tracer::none(),
        )
    }

    #[test]
    fn mount_arms_one_timer_and_subscribes() {
        let host = Rc::new(FakeHost::default());
        let m = mount(&host, 3, TouchScope::Viewport);
        assert_eq!(host.timers.borrow().len(), 1);
        let (owner, delay) = host.timers.borrow()[&m.armed_timer().unwrap()];
        assert_eq!(owner, ID);
        assert_eq!(delay, Duration::from_millis(3000));
        assert_eq!(host.subscribers(ViewportEventKind::KeyDown), vec![ID]);
        assert_eq!(host.subscribers(ViewportEventKind::TouchStart), vec![ID]);
        assert_eq!(host.subscribers(ViewportEventKind::TouchEnd), vec![ID]);
        assert!(host.subscribers(ViewportEventKind::Scroll).is_empty());
    }

    #[test]
    fn element_scope_skips_viewport_touch() {
        let host = Rc::new(FakeHost::default());
        let _m = mount(&host, 3, TouchScope::Element);
        assert_eq!(host.subscribers(ViewportEventKind::KeyDown), vec![ID]);
        assert!(host.subscribers(ViewportEventKind::TouchStart).is_empty());
    }

    #[test]
    fn drop_releases_everything() {
        let host = Rc::new(FakeHost::default());
        let m = mount(&host, 3, TouchScope::Viewport);
        drop(m);
        assert!(host.timers.borrow().is_empty());
        assert!(host.listeners.borrow().is_empty());
    }

    #[test]
    fn unmount_releases_everything() {
        let host = Rc::new(FakeHost::default());
        let mut m = mount(&host, 3, TouchScope::Viewport);
        m.on_input(CarouselInput::Next, HostTime(1), &mut Tracer::none());
        m.unmount(HostTime(2), &mut Tracer::none());
        assert!(host.timers.borrow().is_empty());
        assert!(host.listeners.borrow().is_empty());
    }

    #[test]
    fn timer_advances_and_rearms() {
        let host = Rc::new(FakeHost::default());
        let mut m = mount(&host, 3, TouchScope::Viewport);
        let mut seen = vec![];
        for _ in 0..4 {
            let token = host.fire_timer_of(ID).unwrap();
            let t = m
                .on_viewport_event(ViewportEvent::Timer(token), HostTime(0), &mut Tracer::none())
                .unwrap();
            assert_eq!(t.cause, TransitionCause::Timer);
            seen.push(t.to);
            assert_eq!(host.timers.borrow().len(), 1);
        }
        assert_eq!(seen, vec![2, 3, 1, 2]);
    }

    #[test]
    fn single_image_keeps_ticking_without_transitions() {
        let host = Rc::new(FakeHost::default());
        let mut m = mount(&host, 1, TouchScope::Viewport);
        for _ in 0..3 {
            let token = host.fire_timer_of(ID).unwrap();
            assert_eq!(
                m.on_viewport_event(ViewportEvent::Timer(token), HostTime(0), &mut Tracer::none()),
                None
            );
            assert_eq!(host.timers.borrow().len(), 1);
        }
        assert_eq!(m.carousel().current(), 1);
    }

    #[test]
    fn manual_navigation_restarts_the_interval() {
        let host = Rc::new(FakeHost::default());
        let mut m = mount(&host, 4, TouchScope::Viewport);
        let first = m.armed_timer().unwrap();
        m.on_viewport_event(
            ViewportEvent::Key(Key::ArrowRight),
            HostTime(0),
            &mut Tracer::none(),
        );
        let second = m.armed_timer().unwrap();
        assert_ne!(first, second);
        assert!(!host.timers.borrow().contains_key(&first));
        assert_eq!(host.timers.borrow().len(), 1);

        // The replaced timer firing late changes nothing.
        assert_eq!(
            m.on_viewport_event(ViewportEvent::Timer(first), HostTime(0), &mut Tracer::none()),
            None
        );
        assert_eq!(m.carousel().current(), 2);
        assert_eq!(m.armed_timer(), Some(second));
    }

    #[test]
    fn no_op_input_keeps_the_timer() {
        let host = Rc::new(FakeHost::default());
        let mut m = mount(&host, 4, TouchScope::Viewport);
        let armed = m.armed_timer();
        let mut tracer = Tracer::none();
        m.on_viewport_event(ViewportEvent::Key(Key::Other), HostTime(0), &mut tracer);
        m.on_input(CarouselInput::Dot(1), HostTime(0), &mut tracer);
        m.on_viewport_event(ViewportEvent::Scroll { scroll_y: 40.0 }, HostTime(0), &mut tracer);
        assert_eq!(m.armed_timer(), armed);
    }

    #[test]
    fn swipe_through_viewport_events() {
        let host = Rc::new(FakeHost::default());
        let mut m = mount(&host, 4, TouchScope::Viewport);
        let mut tracer = Tracer::none();
        m.on_viewport_event(ViewportEvent::TouchStart { x: 300.0 }, HostTime(0), &mut tracer);
        let t = m
            .on_viewport_event(ViewportEvent::TouchEnd { x: 380.0 }, HostTime(0), &mut tracer)
            .unwrap();
        assert_eq!((t.from, t.to, t.cause), (1, 4, TransitionCause::Swipe));
    }

    #[test]
    fn two_mounts_are_independent() {
        let host = Rc::new(FakeHost::default());
        let a = mount(&host, 3, TouchScope::Viewport);
        let cfg = CarouselConfig::new("b/{index}.jpg", 2);
        let b = CarouselMount::mount(
            Carousel::new(cfg).unwrap(),
            Rc::clone(&host),
            InstanceId(8),
            HostTime(0),
            &mut Tracer::none(),
        );
        assert_eq!(host.timers.borrow().len(), 2);
        drop(a);
        assert_eq!(host.timers.borrow().len(), 1);
        assert_eq!(
            host.subscribers(ViewportEventKind::KeyDown),
            vec![InstanceId(8)]
        );
        drop(b);
        assert!(host.listeners.borrow().is_empty());
    }

    #[cfg(feature = "trace")]
    #[test]
    fn traces_stale_timers() {
        use crate::trace::TraceSink;

        #[derive(Default)]
        struct Timers(Vec<TimerAction>);
        impl TraceSink for Timers {
            fn on_timer(&mut self, e: &TimerEvent) {
                self.0.push(e.action);
            }
        }

        let host = Rc::new(FakeHost::default());
        let mut m = mount(&host, 3, TouchScope::Viewport);
        let stale = m.armed_timer().unwrap();
        let mut sink = Timers::default();
        {
            let mut tracer = Tracer::new(&mut sink);
            m.on_input(CarouselInput::Next, HostTime(1), &mut tracer);
            m.on_viewport_event(ViewportEvent::Timer(stale), HostTime(2), &mut tracer);
        }
        assert_eq!(
            sink.0,
            vec![TimerAction::Cancelled, TimerAction::Armed, TimerAction::Stale]
        );
    }
}
