// Copyright 2025 the Pinstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory single-column document host.
//!
//! ## Overview
//!
//! [`MemoryDoc`] models just enough of a scrollable page for the engine to
//! coordinate against: a vertical flow of block elements with natural
//! heights, a scroll offset, inline vs computed styles, and `position:
//! fixed` taking an element out of flow and pinning it to the viewport.
//! Geometry reported by [`bounds`](ElementHost::bounds) is viewport-relative,
//! exactly as a real host would report it.
//!
//! This is the workspace's test and demo host. It is deliberately synchronous
//! and single-threaded, matching the engine's scheduling model.

use alloc::vec::Vec;

use kurbo::Rect;
use pinstack_style::{StyleProp, StyleSet, StyleValue};

use crate::types::{DocOrder, ElementHost, ScrollSurface};

/// Handle into a [`MemoryDoc`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementId(u32);

impl ElementId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct ElementData {
    natural_height: f64,
    inline: StyleSet,
    in_tree: bool,
    is_placeholder: bool,
    destroyed: bool,
}

/// A single-column scrollable document.
///
/// Elements enter the flow in [`push_element`](MemoryDoc::push_element)
/// order; each occupies the full viewport width and its natural height
/// unless an inline `height` overrides it. An element with inline
/// `position: fixed` leaves the flow and sits at its inline `top`,
/// scroll-independent.
#[derive(Clone, Debug)]
pub struct MemoryDoc {
    elements: Vec<ElementData>,
    /// Document order of attached elements.
    order: Vec<ElementId>,
    scroll: f64,
    viewport_width: f64,
    subscriptions: usize,
}

impl Default for MemoryDoc {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDoc {
    /// Default viewport width for pushed elements.
    pub const DEFAULT_WIDTH: f64 = 800.0;

    /// Create an empty document at scroll offset zero.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            order: Vec::new(),
            scroll: 0.0,
            viewport_width: Self::DEFAULT_WIDTH,
            subscriptions: 0,
        }
    }

    /// Append a block element of the given natural height to the document
    /// flow and return its handle.
    pub fn push_element(&mut self, natural_height: f64) -> ElementId {
        let id = self.alloc(natural_height, false);
        self.elements[id.idx()].in_tree = true;
        self.order.push(id);
        id
    }

    /// Current scroll offset.
    pub fn scroll(&self) -> f64 {
        self.scroll
    }

    /// Scroll the document to `offset` (pixels from the top).
    pub fn set_scroll(&mut self, offset: f64) {
        self.scroll = offset;
    }

    /// Change an element's natural (content) height, simulating dynamic
    /// content.
    pub fn set_natural_height(&mut self, el: ElementId, height: f64) {
        if let Some(d) = self.elements.get_mut(el.idx()) {
            d.natural_height = height;
        }
    }

    /// Detach an element from the tree without destroying it, simulating a
    /// host removing the element while it stays registered.
    pub fn detach(&mut self, el: ElementId) {
        self.remove_from_tree(el);
    }

    /// Whether the element is currently attached to the tree.
    pub fn is_attached(&self, el: ElementId) -> bool {
        self.elements
            .get(el.idx())
            .is_some_and(|d| d.in_tree && !d.destroyed)
    }

    /// Whether the handle names an engine-created placeholder.
    pub fn is_placeholder(&self, el: ElementId) -> bool {
        self.elements
            .get(el.idx())
            .is_some_and(|d| d.is_placeholder)
    }

    /// Number of times a scroll subscription was installed.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions
    }

    fn alloc(&mut self, natural_height: f64, is_placeholder: bool) -> ElementId {
        let id = ElementId(u32::try_from(self.elements.len()).unwrap_or(u32::MAX));
        self.elements.push(ElementData {
            natural_height,
            inline: StyleSet::new(),
            in_tree: false,
            is_placeholder,
            destroyed: false,
        });
        id
    }

    fn data(&self, el: ElementId) -> Option<&ElementData> {
        self.elements.get(el.idx()).filter(|d| !d.destroyed)
    }

    fn is_fixed(&self, el: ElementId) -> bool {
        self.data(el).is_some_and(|d| {
            d.inline
                .get(StyleProp::Position)
                .and_then(StyleValue::as_keyword)
                == Some("fixed")
        })
    }

    fn height_of(&self, el: ElementId) -> f64 {
        let Some(d) = self.data(el) else { return 0.0 };
        match d.inline.get(StyleProp::Height) {
            Some(StyleValue::Px(h)) => *h,
            _ => d.natural_height,
        }
    }

    /// Flow position (document-relative top) of an in-flow element.
    fn flow_top(&self, el: ElementId) -> Option<f64> {
        let mut cursor = 0.0;
        for &id in &self.order {
            if self.is_fixed(id) {
                continue;
            }
            if id == el {
                return Some(cursor);
            }
            cursor += self.height_of(id);
        }
        None
    }
}

impl ElementHost for MemoryDoc {
    type Handle = ElementId;

    fn bounds(&self, el: ElementId) -> Option<Rect> {
        let d = self.data(el)?;
        if !d.in_tree {
            return None;
        }
        let height = self.height_of(el);
        let top = if self.is_fixed(el) {
            match d.inline.get(StyleProp::Top) {
                Some(StyleValue::Px(t)) => *t,
                _ => 0.0,
            }
        } else {
            self.flow_top(el)? - self.scroll
        };
        Some(Rect::new(0.0, top, self.viewport_width, top + height))
    }

    fn document_order(&self, a: ElementId, b: ElementId) -> DocOrder {
        let (Some(pa), Some(pb)) = (
            self.order.iter().position(|&id| id == a),
            self.order.iter().position(|&id| id == b),
        ) else {
            return DocOrder::Unknown;
        };
        match pa.cmp(&pb) {
            core::cmp::Ordering::Less => DocOrder::Before,
            core::cmp::Ordering::Greater => DocOrder::After,
            core::cmp::Ordering::Equal => DocOrder::Unknown,
        }
    }

    fn computed_style(&self, el: ElementId, prop: StyleProp) -> Option<StyleValue> {
        let d = self.data(el)?;
        if !d.in_tree {
            return None;
        }
        if let Some(v) = d.inline.get(prop) {
            return Some(v.clone());
        }
        // Resolved defaults for a plain block element.
        Some(match prop {
            StyleProp::Position => StyleValue::keyword("static"),
            StyleProp::Display => StyleValue::keyword("block"),
            StyleProp::Top
            | StyleProp::Left
            | StyleProp::Bottom
            | StyleProp::Right
            | StyleProp::ZIndex => StyleValue::keyword("auto"),
            StyleProp::Margin | StyleProp::Padding | StyleProp::Border => StyleValue::Px(0.0),
            StyleProp::Width => StyleValue::Px(self.viewport_width),
            StyleProp::Height => StyleValue::Px(self.height_of(el)),
            StyleProp::Opacity => StyleValue::Number(1.0),
        })
    }

    fn style(&self, el: ElementId, prop: StyleProp) -> StyleValue {
        self.data(el)
            .and_then(|d| d.inline.get(prop).cloned())
            .unwrap_or(StyleValue::Unset)
    }

    fn set_style(&mut self, el: ElementId, prop: StyleProp, value: StyleValue) {
        let Some(d) = self.elements.get_mut(el.idx()) else {
            return;
        };
        if d.destroyed {
            return;
        }
        if value.is_unset() {
            d.inline.remove(prop);
        } else {
            d.inline.insert(prop, value);
        }
    }

    fn create_placeholder(&mut self) -> ElementId {
        self.alloc(0.0, true)
    }

    fn destroy_placeholder(&mut self, el: ElementId) {
        self.remove_from_tree(el);
        if let Some(d) = self.elements.get_mut(el.idx()) {
            d.destroyed = true;
        }
    }

    fn insert_before(&mut self, el: ElementId, anchor: ElementId) -> bool {
        if self.data(el).is_none() {
            return false;
        }
        let Some(pos) = self.order.iter().position(|&id| id == anchor) else {
            return false;
        };
        self.order.retain(|&id| id != el);
        // Anchor position may have shifted if `el` preceded it.
        let pos = self
            .order
            .iter()
            .position(|&id| id == anchor)
            .unwrap_or(pos);
        self.order.insert(pos, el);
        self.elements[el.idx()].in_tree = true;
        true
    }

    fn remove_from_tree(&mut self, el: ElementId) {
        self.order.retain(|&id| id != el);
        if let Some(d) = self.elements.get_mut(el.idx()) {
            d.in_tree = false;
        }
    }
}

impl ScrollSurface for MemoryDoc {
    fn subscribe(&mut self) {
        self.subscriptions += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_positions_accumulate_heights() {
        let mut doc = MemoryDoc::new();
        let a = doc.push_element(100.0);
        let b = doc.push_element(50.0);
        assert_eq!(doc.bounds(a).unwrap().y0, 0.0);
        assert_eq!(doc.bounds(b).unwrap().y0, 100.0);

        doc.set_scroll(30.0);
        assert_eq!(doc.bounds(b).unwrap().y0, 70.0);
    }

    #[test]
    fn fixed_elements_leave_the_flow() {
        let mut doc = MemoryDoc::new();
        let a = doc.push_element(100.0);
        let b = doc.push_element(50.0);
        doc.set_style(a, StyleProp::Position, StyleValue::keyword("fixed"));
        doc.set_style(a, StyleProp::Top, StyleValue::Px(12.0));

        // a pins to the viewport; b takes over the flow origin.
        assert_eq!(doc.bounds(a).unwrap().y0, 12.0);
        assert_eq!(doc.bounds(b).unwrap().y0, 0.0);

        doc.set_scroll(500.0);
        assert_eq!(doc.bounds(a).unwrap().y0, 12.0, "fixed ignores scroll");
    }

    #[test]
    fn detached_elements_have_no_geometry_and_unknown_order() {
        let mut doc = MemoryDoc::new();
        let a = doc.push_element(10.0);
        let b = doc.push_element(10.0);
        assert_eq!(doc.document_order(a, b), DocOrder::Before);
        assert_eq!(doc.document_order(b, a), DocOrder::After);

        doc.detach(a);
        assert!(doc.bounds(a).is_none());
        assert_eq!(doc.document_order(a, b), DocOrder::Unknown);
    }

    #[test]
    fn insert_before_requires_attached_anchor() {
        let mut doc = MemoryDoc::new();
        let a = doc.push_element(10.0);
        let ph = doc.create_placeholder();
        assert!(!doc.is_attached(ph));

        doc.detach(a);
        assert!(!doc.insert_before(ph, a));

        let b = doc.push_element(10.0);
        assert!(doc.insert_before(ph, b));
        assert!(doc.is_attached(ph));
        assert_eq!(doc.document_order(ph, b), DocOrder::Before);
    }

    #[test]
    fn inline_height_overrides_natural() {
        let mut doc = MemoryDoc::new();
        let a = doc.push_element(40.0);
        assert_eq!(doc.bounds(a).unwrap().height(), 40.0);
        doc.set_style(a, StyleProp::Height, StyleValue::Px(90.0));
        assert_eq!(doc.bounds(a).unwrap().height(), 90.0);
        // Clearing the inline value falls back to natural height.
        doc.set_style(a, StyleProp::Height, StyleValue::Unset);
        assert_eq!(doc.bounds(a).unwrap().height(), 40.0);
    }

    #[test]
    fn destroyed_placeholders_reject_everything() {
        let mut doc = MemoryDoc::new();
        let a = doc.push_element(10.0);
        let ph = doc.create_placeholder();
        doc.insert_before(ph, a);
        doc.destroy_placeholder(ph);
        assert!(!doc.is_attached(ph));
        assert!(doc.bounds(ph).is_none());
        assert!(!doc.insert_before(ph, a));
    }
}
