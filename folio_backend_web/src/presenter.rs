// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM construction.
//!
//! Translates a [`Node`] tree into live DOM nodes. Each [`present`] call
//! rebuilds the presented subtree; the trees involved (one navigation list,
//! one carousel) are small.
//!
//! [`present`]: DomPresenter::present

use folio_core::backend::Presenter;
use folio_core::view::Node;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

/// Where presented trees go.
#[derive(Debug)]
enum Target {
    /// Replace the children of this element.
    Children(Element),
    /// Replace this element itself; the new element becomes the target.
    Replace(Element),
}

/// Builds DOM nodes from [`Node`] trees.
///
/// Created with [`into_children`](Self::into_children) it fills a container;
/// with [`replacing`](Self::replacing) it swaps an existing element for each
/// new tree, which keeps an element's position among its siblings.
#[derive(Debug)]
pub struct DomPresenter {
    document: Document,
    target: Target,
}

impl DomPresenter {
    /// Presents into the children of `container`.
    pub fn into_children(container: Element) -> Result<Self, JsValue> {
        Ok(Self {
            document: owner_document(&container)?,
            target: Target::Children(container),
        })
    }

    /// Presents by replacing `element`.
    pub fn replacing(element: Element) -> Result<Self, JsValue> {
        Ok(Self {
            document: owner_document(&element)?,
            target: Target::Replace(element),
        })
    }

    /// The container, or the element currently standing in for the tree.
    #[must_use]
    pub fn element(&self) -> &Element {
        match &self.target {
            Target::Children(el) | Target::Replace(el) => el,
        }
    }

    /// Builds the DOM for `node` without attaching it.
    pub fn build(&self, node: &Node) -> Result<web_sys::Node, JsValue> {
        build(&self.document, node)
    }

    fn try_present(&mut self, node: &Node) -> Result<(), JsValue> {
        let built = self.build(node)?;
        match &mut self.target {
            Target::Children(container) => {
                container.set_text_content(None);
                container.append_child(&built)?;
            }
            Target::Replace(current) => {
                current.replace_with_with_node_1(&built)?;
                if let Ok(el) = built.dyn_into::<Element>() {
                    *current = el;
                }
            }
        }
        Ok(())
    }
}

impl Presenter for DomPresenter {
    /// Rebuilds the presented subtree. DOM failures leave the previous
    /// content in place.
    fn present(&mut self, node: &Node) {
        let _ = self.try_present(node);
    }
}

fn owner_document(el: &Element) -> Result<Document, JsValue> {
    el.owner_document()
        .ok_or_else(|| JsValue::from_str("element has no owner document"))
}

/// Builds the DOM for `node` in `document`.
pub(crate) fn build(document: &Document, node: &Node) -> Result<web_sys::Node, JsValue> {
    match node {
        Node::Text(text) => Ok(document.create_text_node(text).into()),
        Node::Element(el) => {
            let dom = document.create_element(el.tag())?;
            for (name, value) in el.attrs() {
                dom.set_attribute(name, value)?;
            }
            for child in el.children() {
                dom.append_child(&build(document, child)?)?;
            }
            Ok(dom.into())
        }
    }
}
