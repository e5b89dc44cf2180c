// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! The core never touches a browser directly. A backend crate provides:
//!
//! - **Presenter**: Implements [`Presenter`] to make a [`Node`] tree visible
//!   (DOM elements on the web, an HTML string in [`HtmlPresenter`]).
//!
//! - **Viewport host**: Implements [`ViewportHost`], providing one-shot timers and
//!   subscriptions to viewport-wide events (scroll, key, touch). Both are
//!   keyed by the [`InstanceId`] of the component that asked for them, and
//!   the host delivers the resulting [`ViewportEvent`]s to that instance only.
//!
//! - **Time**: A `now() -> HostTime` free function.
//!
//! # Lifecycle
//!
//! Every timer armed and every subscription taken through a [`ViewportHost`]
//! must be released by the same component, at the latest when it unmounts.
//! [`CarouselMount`](crate::carousel::CarouselMount) does this in `Drop`.

use alloc::rc::Rc;
use alloc::string::String;
use core::fmt;

use crate::view::Node;

/// Makes a rendered [`Node`] tree visible on a platform surface.
pub trait Presenter {
    /// Replaces whatever this presenter currently shows with `node`.
    fn present(&mut self, node: &Node);
}

/// A [`Presenter`] that keeps the latest tree serialized as HTML.
#[derive(Clone, Debug, Default)]
pub struct HtmlPresenter {
    html: String,
}

impl HtmlPresenter {
    /// Creates an empty presenter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently presented HTML.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }
}

impl Presenter for HtmlPresenter {
    fn present(&mut self, node: &Node) {
        self.html = node.to_html();
    }
}

/// Identifies a mounted component to its [`ViewportHost`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct InstanceId(pub u32);

impl fmt::Debug for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InstanceId({})", self.0)
    }
}

/// Handle for one armed timer.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerToken(pub u64);

impl fmt::Debug for TimerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimerToken({})", self.0)
    }
}

/// Handle for one viewport subscription.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerToken(pub u64);

impl fmt::Debug for ListenerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListenerToken({})", self.0)
    }
}

/// Viewport-wide event categories a component can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ViewportEventKind {
    /// Window scroll.
    Scroll,
    /// Key press anywhere in the document.
    KeyDown,
    /// First touch point placed.
    TouchStart,
    /// Touch point lifted.
    TouchEnd,
}

impl ViewportEventKind {
    /// The DOM event type name.
    #[must_use]
    pub const fn dom_name(self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::KeyDown => "keydown",
            Self::TouchStart => "touchstart",
            Self::TouchEnd => "touchend",
        }
    }
}

/// Keys the page reacts to. Everything else maps to [`Key::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// `ArrowLeft`.
    ArrowLeft,
    /// `ArrowRight`.
    ArrowRight,
    /// Any other key.
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

/// An event delivered by a [`ViewportHost`] to the instance that asked for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportEvent {
    /// A timer armed by this instance fired.
    Timer(TimerToken),
    /// The window scrolled; `scroll_y` is the new vertical offset in pixels.
    Scroll {
        /// Vertical scroll offset.
        scroll_y: f64,
    },
    /// A key was pressed.
    Key(Key),
    /// A touch started at horizontal viewport coordinate `x`.
    TouchStart {
        /// Horizontal coordinate in pixels.
        x: f64,
    },
    /// A touch ended at horizontal viewport coordinate `x`.
    TouchEnd {
        /// Horizontal coordinate in pixels.
        x: f64,
    },
}

/// Timers and viewport-wide subscriptions, keyed by instance.
///
/// Methods take `&self`; implementations use interior mutability because the
/// host is shared by every mounted component and is re-entered from inside
/// event dispatch (a timer callback re-arms the next timer).
pub trait ViewportHost {
    /// Arms a one-shot timer that delivers [`ViewportEvent::Timer`] to
    /// `owner` after `delay`.
    fn arm_timer(&self, owner: InstanceId, delay: crate::time::Duration) -> TimerToken;

    /// Cancels a timer. Unknown or already-fired tokens are ignored.
    fn cancel_timer(&self, token: TimerToken);

    /// Starts delivering events of `kind` to `owner`.
    fn subscribe(&self, owner: InstanceId, kind: ViewportEventKind) -> ListenerToken;

    /// Stops a subscription. Unknown tokens are ignored.
    fn unsubscribe(&self, token: ListenerToken);

    /// Cancels every timer and stops every subscription `owner` still
    /// holds, and forgets anything else the host keeps for it.
    fn release(&self, owner: InstanceId);
}

impl<T: ViewportHost + ?Sized> ViewportHost for Rc<T> {
    fn arm_timer(&self, owner: InstanceId, delay: crate::time::Duration) -> TimerToken {
        (**self).arm_timer(owner, delay)
    }

    fn cancel_timer(&self, token: TimerToken) {
        (**self).cancel_timer(token);
    }

    fn subscribe(&self, owner: InstanceId, kind: ViewportEventKind) -> ListenerToken {
        (**self).subscribe(owner, kind)
    }

    fn unsubscribe(&self, token: ListenerToken) {
        (**self).unsubscribe(token);
    }

    fn release(&self, owner: InstanceId) {
        (**self).release(owner);
    }
}

/// Releases an instance's host resources when dropped.
///
/// Taken as soon as an instance starts acquiring timers or subscriptions, so
/// that a mount which fails halfway still gives everything back.
pub struct InstanceGuard<H: ViewportHost> {
    host: H,
    owner: InstanceId,
}

impl<H: ViewportHost> InstanceGuard<H> {
    /// Guards `owner` on `host`.
    #[must_use]
    pub fn new(host: H, owner: InstanceId) -> Self {
        Self { host, owner }
    }

    /// The guarded instance.
    #[must_use]
    pub fn owner(&self) -> InstanceId {
        self.owner
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }
}

impl<H: ViewportHost> Drop for InstanceGuard<H> {
    fn drop(&mut self) {
        self.host.release(self.owner);
    }
}

impl<H: ViewportHost> fmt::Debug for InstanceGuard<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceGuard")
            .field("owner", &self.owner)
            .finish_non_exhaustive()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeHost;
    use super::*;
    use alloc::vec::Vec;

    use crate::time::Duration;
    use crate::view::Element;

    #[test]
    fn html_presenter_replaces_content() {
        let mut p = HtmlPresenter::new();
        p.present(&Element::new("p").child("one").into_node());
        p.present(&Element::new("p").child("two").into_node());
        assert_eq!(p.html(), "<p>two</p>");
    }

    #[test]
    fn key_mapping() {
        assert_eq!(Key::from_dom("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_dom("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from_dom("Enter"), Key::Other);
    }

    #[test]
    fn guard_releases_only_its_instance() {
        let host = Rc::new(FakeHost::default());
        let other = host.subscribe(InstanceId(2), ViewportEventKind::KeyDown);
        {
            let guard = InstanceGuard::new(Rc::clone(&host), InstanceId(1));
            guard.host().subscribe(guard.owner(), ViewportEventKind::Scroll);
            guard.host().arm_timer(guard.owner(), Duration::from_millis(10));
            assert_eq!(host.listeners.borrow().len(), 2);
        }
        assert!(host.timers.borrow().is_empty());
        assert_eq!(host.listeners.borrow().keys().copied().collect::<Vec<_>>(), [other]);
    }

    #[test]
    fn guard_covers_early_return() {
        fn half_mount(
            host: &Rc<FakeHost>,
            fail: bool,
        ) -> Result<InstanceGuard<Rc<FakeHost>>, &'static str> {
            let guard = InstanceGuard::new(Rc::clone(host), InstanceId(7));
            host.subscribe(guard.owner(), ViewportEventKind::Scroll);
            host.subscribe(guard.owner(), ViewportEventKind::KeyDown);
            if fail {
                return Err("element missing");
            }
            Ok(guard)
        }

        let host = Rc::new(FakeHost::default());
        assert!(half_mount(&host, true).is_err());
        assert!(host.listeners.borrow().is_empty());

        let guard = half_mount(&host, false).unwrap();
        assert_eq!(host.listeners.borrow().len(), 2);
        drop(guard);
        assert!(host.listeners.borrow().is_empty());
    }

    #[test]
    fn dom_names() {
        assert_eq!(ViewportEventKind::KeyDown.dom_name(), "keydown");
        assert_eq!(ViewportEventKind::TouchEnd.dom_name(), "touchend");
    }
}
