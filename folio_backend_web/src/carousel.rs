// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A carousel mounted in the DOM.

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use folio_core::backend::{InstanceGuard, InstanceId, Presenter as _, ViewportEvent};
use folio_core::carousel::{
    self, ACTION_ATTR, Carousel, CarouselInput, CarouselMount, DOT_ATTR, IMAGE_ATTR, TouchScope,
    delegated_input,
};
use folio_core::site::SiteConfig;
use kurbo::{Point, Rect};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, MouseEvent};

use crate::listener::EventListenerGuard;
use crate::presenter::DomPresenter;
use crate::viewport::{WebViewport, touch_x};
use crate::{SharedSink, now, with_tracer};

/// A live carousel.
///
/// The carousel renders into the children of a host element, which also
/// carries the delegated click listener (and the touch listeners when the
/// carousel's touch scope is [`TouchScope::Element`]). Key events, viewport
/// touches and the auto-advance timer come through the [`WebViewport`].
///
/// Dropping the widget cancels its timer, releases its subscriptions and
/// removes its listeners. A mount that fails halfway releases the same way.
pub struct CarouselWidget {
    inner: Rc<WidgetInner>,
    registration: InstanceGuard<WebViewport>,
    _listeners: Vec<EventListenerGuard>,
}

struct WidgetInner {
    id: InstanceId,
    mount: RefCell<Option<CarouselMount<WebViewport>>>,
    presenter: RefCell<DomPresenter>,
    site: SiteConfig,
    label: String,
    sink: Option<SharedSink>,
}

impl CarouselWidget {
    /// Mounts `carousel` into `host` and starts auto-advance.
    ///
    /// `label` becomes the carousel root's `data-carousel` value.
    pub fn mount(
        carousel: Carousel,
        host: Element,
        viewport: &WebViewport,
        site: SiteConfig,
        label: &str,
        sink: Option<SharedSink>,
    ) -> Result<Self, JsValue> {
        let id = viewport.next_instance_id();
        let touch_scope = carousel.config().touch_scope;
        let inner = Rc::new(WidgetInner {
            id,
            mount: RefCell::new(None),
            presenter: RefCell::new(DomPresenter::into_children(host.clone())?),
            site,
            label: label.into(),
            sink,
        });

        let weak = Rc::downgrade(&inner);
        let registration = viewport.register(
            id,
            Rc::new(move |event: ViewportEvent| {
                if let Some(inner) = weak.upgrade() {
                    inner.on_viewport_event(event);
                }
            }),
        );
        let mount = with_tracer(inner.sink.as_ref(), |tracer| {
            CarouselMount::mount(carousel, viewport.clone(), id, now(), tracer)
        });
        *inner.mount.borrow_mut() = Some(mount);
        inner.render();

        let mut listeners = Vec::with_capacity(3);
        let weak = Rc::downgrade(&inner);
        listeners.push(EventListenerGuard::new(&host, "click", move |event| {
            if let Some(inner) = weak.upgrade() {
                inner.on_click(&event);
            }
        })?);
        if touch_scope == TouchScope::Element {
            let weak = Rc::downgrade(&inner);
            listeners.push(EventListenerGuard::new(&host, "touchstart", move |event| {
                if let (Some(inner), Some(x)) = (weak.upgrade(), touch_x(&event)) {
                    inner.on_input(CarouselInput::TouchStart { x });
                }
            })?);
            let weak = Rc::downgrade(&inner);
            listeners.push(EventListenerGuard::new(&host, "touchend", move |event| {
                if let (Some(inner), Some(x)) = (weak.upgrade(), touch_x(&event)) {
                    inner.on_input(CarouselInput::TouchEnd { x });
                }
            })?);
        }

        Ok(Self {
            inner,
            registration,
            _listeners: listeners,
        })
    }

    /// The viewport instance id.
    #[must_use]
    pub fn instance(&self) -> InstanceId {
        self.registration.owner()
    }

    /// 1-based current slide.
    #[must_use]
    pub fn current(&self) -> usize {
        self.inner
            .mount
            .borrow()
            .as_ref()
            .map_or(1, |m| m.carousel().current())
    }

    /// The instance label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.inner.label
    }
}

impl WidgetInner {
    fn on_viewport_event(&self, event: ViewportEvent) {
        let transition = {
            let mut mount = self.mount.borrow_mut();
            let Some(mount) = mount.as_mut() else {
                return;
            };
            with_tracer(self.sink.as_ref(), |tracer| {
                mount.on_viewport_event(event, now(), tracer)
            })
        };
        if transition.is_some() {
            self.render();
        }
    }

    fn on_input(&self, input: CarouselInput) {
        let transition = {
            let mut mount = self.mount.borrow_mut();
            let Some(mount) = mount.as_mut() else {
                return;
            };
            with_tracer(self.sink.as_ref(), |tracer| mount.on_input(input, now(), tracer))
        };
        if transition.is_some() {
            self.render();
        }
    }

    fn on_click(&self, event: &Event) {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let input = match target.closest(&control_selector()).ok().flatten() {
            Some(control) => delegated_input(
                control.get_attribute(ACTION_ATTR).as_deref(),
                control.get_attribute(DOT_ATTR).as_deref(),
            ),
            None => zone_click(&target, event),
        };
        if let Some(input) = input {
            self.on_input(input);
        }
    }

    fn render(&self) {
        let mount = self.mount.borrow();
        let Some(mount) = mount.as_ref() else {
            return;
        };
        let tree = carousel::view(mount.carousel(), &self.site, &self.label).into_node();
        self.presenter.borrow_mut().present(&tree);
    }
}

impl Drop for CarouselWidget {
    fn drop(&mut self) {
        let mount = self.inner.mount.borrow_mut().take();
        if let Some(mount) = mount {
            with_tracer(self.inner.sink.as_ref(), |tracer| mount.unmount(now(), tracer));
        }
        // `registration` drops next and releases whatever is left.
    }
}

impl core::fmt::Debug for CarouselWidget {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselWidget")
            .field("instance", &self.inner.id)
            .field("label", &self.inner.label)
            .field("current", &self.current())
            .finish_non_exhaustive()
    }
}

/// Matches the previous/next controls and the dots.
fn control_selector() -> String {
    format!("[{ACTION_ATTR}],[{DOT_ATTR}]")
}

/// A click on the slide image, mapped to a zone click in image coordinates.
fn zone_click(target: &Element, event: &Event) -> Option<CarouselInput> {
    let image = target.closest(&format!("[{IMAGE_ATTR}]")).ok()??;
    let mouse = event.dyn_ref::<MouseEvent>()?;
    let r = image.get_bounding_client_rect();
    Some(CarouselInput::Click {
        point: Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y())),
        bounds: Rect::new(r.left(), r.top(), r.right(), r.bottom()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_matches_both_controls() {
        assert_eq!(
            control_selector(),
            "[data-carousel-action],[data-carousel-dot]"
        );
    }
}
