// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The portfolio page mounted in the DOM.

use alloc::format;
use alloc::rc::Rc;
use alloc::string::{String, ToString as _};
use alloc::vec::Vec;
use core::cell::RefCell;

use folio_core::backend::{
    InstanceGuard, Presenter as _, ViewportEvent, ViewportEventKind, ViewportHost as _,
};
use folio_core::carousel::{Carousel, ROOT_ATTR};
use folio_core::error::ConfigError;
use folio_core::page::{
    DESKTOP_NAV_ID, MOBILE_NAV_ID, NAV_SECTION_ATTR, PageState, PortfolioPage,
};
use folio_core::scroll_spy::ScrollSpyConfig;
use folio_core::section::SectionId;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event};

use crate::carousel::CarouselWidget;
use crate::listener::EventListenerGuard;
use crate::presenter::DomPresenter;
use crate::scroll::{scroll_to_section, section_extent};
use crate::viewport::WebViewport;
use crate::{SharedSink, now, with_tracer};

/// Everything a mounted page holds. Dropping it tears the page's behavior
/// down: carousels stop, the scroll subscription and the navigation
/// listener are removed. The rendered DOM stays.
pub struct PageHandle {
    page: Rc<PortfolioPage>,
    state: Rc<RefCell<PageState>>,
    carousels: Vec<CarouselWidget>,
    _nav_listener: EventListenerGuard,
    registration: InstanceGuard<WebViewport>,
}

impl PageHandle {
    /// The page content.
    #[must_use]
    pub fn page(&self) -> &PortfolioPage {
        &self.page
    }

    /// The active section.
    #[must_use]
    pub fn active(&self) -> SectionId {
        self.state.borrow().active().clone()
    }

    /// The mounted galleries, in page order.
    #[must_use]
    pub fn carousels(&self) -> &[CarouselWidget] {
        &self.carousels
    }
}

impl Drop for PageHandle {
    fn drop(&mut self) {
        // Carousels first; the page's own registration goes with the fields.
        self.carousels.clear();
    }
}

impl core::fmt::Debug for PageHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PageHandle")
            .field("instance", &self.registration.owner())
            .field("active", &self.active())
            .field("carousels", &self.carousels)
            .finish_non_exhaustive()
    }
}

/// Renders `page` into `root` and wires its behavior:
///
/// - scroll events drive the scroll-spy, and a change of active section
///   redraws both navigation containers;
/// - clicks on navigation items smooth-scroll to their section;
/// - every project gallery is mounted as a [`CarouselWidget`].
pub fn mount_page(
    page: PortfolioPage,
    root: &Element,
    viewport: &WebViewport,
    sink: Option<SharedSink>,
) -> Result<PageHandle, JsValue> {
    let document = root
        .owner_document()
        .ok_or_else(|| JsValue::from_str("root has no owner document"))?;
    let page = Rc::new(page);
    let state = Rc::new(RefCell::new(
        page.state(ScrollSpyConfig::default()).map_err(config_error)?,
    ));

    let initial = state.borrow().active().clone();
    DomPresenter::into_children(root.clone())?.present(&page.render(&initial).into_node());

    subscribe_nav_redraw(&page, &state, &document)?;

    // Any early return below drops the guard, which releases the handler and
    // the scroll subscription.
    let id = viewport.next_instance_id();
    let registration = {
        let state = Rc::downgrade(&state);
        let document = document.clone();
        let sink = sink.clone();
        viewport.register(
            id,
            Rc::new(move |event: ViewportEvent| {
                let (ViewportEvent::Scroll { scroll_y }, Some(state)) = (event, state.upgrade())
                else {
                    return;
                };
                let layout = |id: &SectionId| section_extent(&document, id.as_str());
                with_tracer(sink.as_ref(), |tracer| {
                    state.borrow_mut().on_scroll(scroll_y, layout, now(), tracer)
                });
            }),
        )
    };
    viewport.subscribe(id, ViewportEventKind::Scroll);

    // The page may load already scrolled.
    let scroll_y = viewport.window().scroll_y().unwrap_or(0.0);
    with_tracer(sink.as_ref(), |tracer| {
        state.borrow_mut().on_scroll(
            scroll_y,
            |id: &SectionId| section_extent(&document, id.as_str()),
            now(),
            tracer,
        )
    });

    let nav_listener = {
        let state = Rc::downgrade(&state);
        let document = document.clone();
        let sink = sink.clone();
        EventListenerGuard::new(root, "click", move |event: Event| {
            let Some(target) = nav_target(&event) else {
                return;
            };
            let found = scroll_to_section(&document, &target);
            if let Some(state) = state.upgrade() {
                with_tracer(sink.as_ref(), |tracer| {
                    state.borrow().on_navigate(&target, found, now(), tracer);
                });
            }
        })?
    };

    let mut carousels = Vec::new();
    for (section, config) in page.galleries() {
        let Some(host) = gallery_root(root, section.as_str())?.and_then(|el| el.parent_element())
        else {
            continue;
        };
        let carousel = Carousel::new(config.clone()).map_err(config_error)?;
        carousels.push(CarouselWidget::mount(
            carousel,
            host,
            viewport,
            page.site().clone(),
            section.as_str(),
            sink.clone(),
        )?);
    }

    Ok(PageHandle {
        page,
        state,
        carousels,
        _nav_listener: nav_listener,
        registration,
    })
}

/// The carousel root rendered for `section`.
///
/// Roots are matched on the attribute value itself rather than through an
/// attribute selector, so ids that need CSS escaping still resolve.
fn gallery_root(root: &Element, section: &str) -> Result<Option<Element>, JsValue> {
    let roots = root.query_selector_all(&format!("[{ROOT_ATTR}]"))?;
    Ok((0..roots.length())
        .filter_map(|i| roots.item(i)?.dyn_into::<Element>().ok())
        .find(|el| el.get_attribute(ROOT_ATTR).as_deref() == Some(section)))
}

/// Redraws both navigation containers whenever the active section changes.
fn subscribe_nav_redraw(
    page: &Rc<PortfolioPage>,
    state: &Rc<RefCell<PageState>>,
    document: &Document,
) -> Result<(), JsValue> {
    let find = |id: &str| {
        document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("#{id} missing after render")))
    };
    let mut desktop = DomPresenter::replacing(find(DESKTOP_NAV_ID)?)?;
    let mut mobile = DomPresenter::replacing(find(MOBILE_NAV_ID)?)?;
    let page = Rc::clone(page);
    state.borrow_mut().active_mut().subscribe(move |active| {
        desktop.present(&page.render_desktop_nav(active).into_node());
        mobile.present(&page.render_mobile_nav(active).into_node());
    });
    Ok(())
}

/// The section a click on a navigation item asks for.
fn nav_target(event: &Event) -> Option<String> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let item = target.closest(&format!("[{NAV_SECTION_ATTR}]")).ok()??;
    item.get_attribute(NAV_SECTION_ATTR)
}

fn config_error(e: ConfigError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
