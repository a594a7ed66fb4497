// Copyright 2025 the Pinstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: the host seam, per-tick geometry bundles, policy decisions,
//! and candidate state flags.
//!
//! ## Overview
//!
//! These types describe the protocol between the engine and its host render
//! tree. The engine never dereferences an element; everything it knows about
//! one flows through [`ElementHost`], and everything a policy decides flows
//! back as an [`Action`].

use alloc::boxed::Box;

use kurbo::Rect;
use pinstack_style::{StyleProp, StyleSet, StyleValue};

/// Relative document order of two elements.
///
/// This is the comparator result driving registry ordering. The ambiguous
/// case is an explicit variant rather than a caught error: when either side
/// is detached from the render tree (or the elements are unrelated), the
/// host reports [`Unknown`](Self::Unknown) and the registry keeps the pair
/// in its current relative order. Availability over ordering correctness.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DocOrder {
    /// The first element precedes the second in document order.
    Before,
    /// The first element follows the second in document order.
    After,
    /// Relative order could not be determined.
    Unknown,
}

/// Capability seam to the host render tree.
///
/// The engine observes externally-owned elements and mutates only what a
/// sticky transition requires: inline styles and placeholder membership.
/// Handles are small copyable keys; the host decides what they index.
///
/// Geometry is viewport-relative: `bounds` reports where the element
/// currently is on screen, already accounting for scroll.
pub trait ElementHost {
    /// Key identifying one element in the host tree.
    type Handle: Copy + Eq + core::fmt::Debug;

    /// Current viewport-relative bounding box, or `None` while the element
    /// is not attached to the render tree.
    fn bounds(&self, el: Self::Handle) -> Option<Rect>;

    /// Relative document order of `a` and `b`.
    fn document_order(&self, a: Self::Handle, b: Self::Handle) -> DocOrder;

    /// Resolved (computed) value of `prop`, or `None` while detached.
    fn computed_style(&self, el: Self::Handle, prop: StyleProp) -> Option<StyleValue>;

    /// The element's own inline value of `prop`; [`StyleValue::Unset`] when
    /// no inline value is present. This is what snapshots capture.
    fn style(&self, el: Self::Handle, prop: StyleProp) -> StyleValue;

    /// Set the element's inline value of `prop`. Setting
    /// [`StyleValue::Unset`] clears any inline value.
    fn set_style(&mut self, el: Self::Handle, prop: StyleProp, value: StyleValue);

    /// Create a detached shadow element for placeholder duty.
    fn create_placeholder(&mut self) -> Self::Handle;

    /// Destroy a placeholder previously obtained from
    /// [`create_placeholder`](Self::create_placeholder).
    fn destroy_placeholder(&mut self, el: Self::Handle);

    /// Insert `el` into the tree immediately before `anchor`. Returns
    /// `false` (and does nothing) when `anchor` is not attached.
    fn insert_before(&mut self, el: Self::Handle, anchor: Self::Handle) -> bool;

    /// Remove `el` from the tree. No-op when already detached.
    fn remove_from_tree(&mut self, el: Self::Handle);
}

/// The scrollable root surface the engine binds to.
///
/// [`Engine::init`](crate::engine::Engine::init) calls
/// [`subscribe`](Self::subscribe) exactly once per engine; hosts typically
/// install a passive, capture-phase scroll listener here that forwards each
/// notification to [`Engine::on_scroll`](crate::engine::Engine::on_scroll).
pub trait ScrollSurface {
    /// Install the scroll subscription.
    fn subscribe(&mut self);
}

bitflags::bitflags! {
    /// Per-candidate state bits.
    ///
    /// Invariant between passes: `PLACEHOLDER_IN` implies `STUCK` — the
    /// placeholder enters the tree strictly as part of entering the stuck
    /// state and leaves it as part of leaving (or unregistration).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct CandidateFlags: u8 {
        /// The candidate is currently pinned to the viewport top.
        const STUCK = 0b0000_0001;
        /// The candidate's placeholder is inserted in the render tree.
        const PLACEHOLDER_IN = 0b0000_0010;
    }
}

/// Per-node geometry and state for one tick of the recomputation pass.
///
/// All vertical positions are viewport-relative. `prev_*` fields describe
/// the predecessor in registry order — the element that establishes the
/// stacking line this node would pin beneath — with a synthetic zero box
/// (`top: 0`, `height: 0`) standing in at index 0 or when the predecessor is
/// itself detached.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollBundle {
    /// This node's current top.
    pub top: f64,
    /// Predecessor's top.
    pub prev_top: f64,
    /// Predecessor's bottom edge: the stacking line for this node.
    pub prev_bottom: f64,
    /// Signed gap to the stacking line; `<= 0` means the node has reached
    /// or passed it. Equals `top` at index 0.
    pub prev_top_diff: f64,
    /// Whether this pass was requested with forced placeholder reflow.
    pub force_reflow: bool,
    /// Position of this node in the registry.
    pub index: usize,
    /// Number of registered nodes.
    pub count: usize,
    /// Whether the node is currently stuck.
    pub stuck: bool,
    /// Whether the node's placeholder is currently inserted.
    pub placeholder_in: bool,
    /// Current top of the node's placeholder, when it has geometry.
    pub placeholder_top: Option<f64>,
}

impl ScrollBundle {
    /// Whether a stuck node should remain stuck.
    ///
    /// False once the inserted placeholder's top has risen below (greater
    /// than) the live element's top — the page scrolled back far enough that
    /// the element's natural position is on screen again. Vacuously true
    /// while the placeholder is out of the tree or has no geometry.
    pub fn keep_sticky(&self) -> bool {
        match self.placeholder_top {
            Some(ph_top) if self.placeholder_in => ph_top <= self.top,
            _ => true,
        }
    }
}

/// A policy decision for one node and one tick.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// No state change.
    Hold,
    /// Enter the stuck state, overriding the element's style with the given
    /// set. Ignored when the node is already stuck.
    Stick(StyleSet),
    /// Leave the stuck state, restoring the snapshotted style.
    Unstick,
    /// Already stuck: recalibrate only the top offset to the given value.
    /// Cheap correction for predecessor height drift; does not re-run the
    /// enter sequence.
    Repin(f64),
}

/// Per-node stick/unstick decision capability.
///
/// The default implementation is
/// [`DefaultPolicy`](crate::policy::DefaultPolicy); hosts may register a
/// node with their own implementation to replace the state machine
/// entirely. `decide` must be pure with respect to the host tree — the
/// engine executes the returned [`Action`], policies never mutate.
pub trait StickyPolicy {
    /// Decide this node's action for the tick.
    fn decide(&self, bundle: &ScrollBundle) -> Action;
}

/// Hook supplying extra override style when a node enters the stuck state.
///
/// Merged over the default override (so the hook wins on conflicts).
pub type StickyStyleFn = fn(&ScrollBundle) -> StyleSet;

/// Registration options for [`Engine::add_with`](crate::engine::Engine::add_with).
pub struct Options {
    /// Replacement for the default stick/unstick state machine. When set,
    /// `sticky_style` is ignored — a custom policy composes its own
    /// override style.
    pub policy: Option<Box<dyn StickyPolicy>>,
    /// Extra style merged into the default override while stuck.
    pub sticky_style: Option<StickyStyleFn>,
    /// Run one recomputation pass immediately after registration, so the
    /// element can stick without waiting for the next scroll tick.
    pub trigger: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            policy: None,
            sticky_style: None,
            trigger: true,
        }
    }
}

impl core::fmt::Debug for Options {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Options")
            .field("policy", &self.policy.as_ref().map(|_| "custom"))
            .field("sticky_style", &self.sticky_style.is_some())
            .field("trigger", &self.trigger)
            .finish()
    }
}
