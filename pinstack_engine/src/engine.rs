// Copyright 2025 the Pinstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine implementation: registration surface, the recomputation pass, and
//! action execution.
//!
//! ## Overview
//!
//! [`Engine`] is an explicitly constructed, explicitly owned instance —
//! inject one into whatever owns the scrollable surface. Multiple engines
//! coexist; nothing here is process-global.
//!
//! ## The pass
//!
//! One pass walks the registry in ascending document order. Per node it
//! resolves current geometry (a detached node is skipped for the tick),
//! derives the deltas against its predecessor's box, and executes the
//! node's policy decision. A node's decision depends only on its own and
//! its predecessor's already-computed values; there is no forward
//! dependency, and the pass has no suspension point.

use alloc::boxed::Box;

use kurbo::Rect;
use pinstack_style::{StyleProp, StyleSet, StyleValue};

use crate::placeholder;
use crate::policy::DefaultPolicy;
use crate::registry::{Candidate, Registry};
use crate::types::{
    Action, CandidateFlags, ElementHost, Options, ScrollBundle, ScrollSurface, StickyPolicy,
};

/// Sticky coordination engine for one scrollable surface.
///
/// ## Usage
///
/// - Construct with [`Engine::new`] and bind once with [`Engine::init`].
/// - Register candidates with [`Engine::add`] / [`Engine::add_with`];
///   unregister with [`Engine::remove`] on teardown.
/// - Forward every scroll notification to [`Engine::on_scroll`]; call
///   [`Engine::recompute`] directly to force a pass (with optional
///   placeholder reflow) after bulk changes.
///
/// The handle type `K` is the host's element key; all host interaction goes
/// through an [`ElementHost`] with that handle type.
pub struct Engine<K> {
    registry: Registry<K>,
    subscribed: bool,
}

impl<K: Copy + Eq + core::fmt::Debug> Default for Engine<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: core::fmt::Debug> core::fmt::Debug for Engine<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Engine")
            .field("registry", &self.registry)
            .field("subscribed", &self.subscribed)
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq + core::fmt::Debug> Engine<K> {
    /// Create an engine with an empty registry.
    pub const fn new() -> Self {
        Self {
            registry: Registry::new(),
            subscribed: false,
        }
    }

    /// Bind the engine to its scrollable surface.
    ///
    /// Idempotent: the first call invokes
    /// [`ScrollSurface::subscribe`] and returns `true`; every later call is
    /// a no-op returning `false`.
    pub fn init<S: ScrollSurface>(&mut self, surface: &mut S) -> bool {
        if self.subscribed {
            return false;
        }
        self.subscribed = true;
        surface.subscribe();
        true
    }

    /// Number of registered candidates.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether no candidates are registered.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Register `handle` with default options (default policy, immediate
    /// trigger pass). No-op returning `false` when already registered.
    pub fn add<H: ElementHost<Handle = K>>(&mut self, host: &mut H, handle: K) -> bool {
        self.add_with(host, handle, Options::default())
    }

    /// Register `handle` with explicit [`Options`].
    ///
    /// Creates the candidate's placeholder, inserts the candidate in
    /// document order, and — unless `options.trigger` is off — runs one
    /// pass so the element can stick without waiting for the next scroll
    /// tick. No-op returning `false` when already registered.
    pub fn add_with<H: ElementHost<Handle = K>>(
        &mut self,
        host: &mut H,
        handle: K,
        options: Options,
    ) -> bool {
        let Options {
            policy,
            sticky_style,
            trigger,
        } = options;
        let policy: Box<dyn StickyPolicy> = match (policy, sticky_style) {
            (Some(p), _) => p,
            (None, Some(style)) => Box::new(DefaultPolicy::with_style(style)),
            (None, None) => Box::new(DefaultPolicy::new()),
        };
        if !self.registry.add(host, handle, policy) {
            return false;
        }
        if trigger {
            self.recompute(host, false);
        }
        true
    }

    /// Unregister `handle`, forcing its placeholder out of the tree and
    /// destroying it regardless of sticky state. No-op returning `false`
    /// for unknown handles.
    pub fn remove<H: ElementHost<Handle = K>>(&mut self, host: &mut H, handle: K) -> bool {
        self.registry.remove(host, handle)
    }

    /// Candidate record for `handle`, if registered.
    pub fn find(&self, handle: K) -> Option<&Candidate<K>> {
        let index = self.registry.position(handle)?;
        Some(self.registry.get(index))
    }

    /// One recomputation pass with `force_reflow = false`. Forward scroll
    /// notifications here.
    pub fn on_scroll<H: ElementHost<Handle = K>>(&mut self, host: &mut H) {
        self.recompute(host, false);
    }

    /// One recomputation pass over the registry in document order.
    ///
    /// `force_reflow` additionally refreshes the placeholder mirror of
    /// already-stuck nodes, for use after bulk registration or content
    /// changes.
    pub fn recompute<H: ElementHost<Handle = K>>(&mut self, host: &mut H, force_reflow: bool) {
        let count = self.registry.len();
        for index in 0..count {
            let (handle, ph, flags) = {
                let c = self.registry.get(index);
                (c.handle, c.placeholder, c.flags)
            };
            // Absence of geometry is a transient-detached condition, not an
            // error: skip the node for this tick.
            let Some(rect) = host.bounds(handle) else {
                continue;
            };
            let top = rect.y0;

            // Predecessor box, or the synthetic zero box at the head of the
            // stack (also when the predecessor is itself detached).
            let prev_rect = if index == 0 {
                Rect::ZERO
            } else {
                host.bounds(self.registry.get(index - 1).handle)
                    .unwrap_or(Rect::ZERO)
            };
            let prev_top = prev_rect.y0;
            let prev_bottom = prev_rect.y0 + prev_rect.height();
            let prev_top_diff = if index == 0 { top } else { top - prev_bottom };

            let stuck = flags.contains(CandidateFlags::STUCK);
            if stuck && force_reflow {
                placeholder::refresh(host, ph, handle, placeholder::DEFAULT_MIRROR_PROPS);
            }

            let bundle = ScrollBundle {
                top,
                prev_top,
                prev_bottom,
                prev_top_diff,
                force_reflow,
                index,
                count,
                stuck,
                placeholder_in: flags.contains(CandidateFlags::PLACEHOLDER_IN),
                placeholder_top: host.bounds(ph).map(|r| r.y0),
            };
            let action = self.registry.get(index).policy.decide(&bundle);
            self.apply(host, index, action);
        }
    }

    /// Refresh one candidate's placeholder with the default height-only
    /// property set. Returns `false` for unknown handles.
    pub fn update_placeholder<H: ElementHost<Handle = K>>(
        &mut self,
        host: &mut H,
        handle: K,
    ) -> bool {
        self.update_placeholder_with(host, handle, placeholder::HEIGHT_ONLY)
    }

    /// Refresh one candidate's placeholder for an explicit property set,
    /// independent of any sticky-state transition.
    pub fn update_placeholder_with<H: ElementHost<Handle = K>>(
        &mut self,
        host: &mut H,
        handle: K,
        props: &[StyleProp],
    ) -> bool {
        let Some(index) = self.registry.position(handle) else {
            return false;
        };
        let c = self.registry.get(index);
        let (handle, ph) = (c.handle, c.placeholder);
        placeholder::refresh(host, ph, handle, props);
        true
    }

    fn apply<H: ElementHost<Handle = K>>(&mut self, host: &mut H, index: usize, action: Action) {
        match action {
            Action::Hold => {}
            Action::Stick(style) => self.enter_stuck(host, index, style),
            Action::Unstick => self.leave_stuck(host, index),
            Action::Repin(top) => {
                let handle = self.registry.get(index).handle;
                host.set_style(handle, StyleProp::Top, StyleValue::Px(top));
            }
        }
    }

    /// Enter sequence: mirror the placeholder, snapshot and override the
    /// element's style, insert the placeholder. Idempotent while stuck —
    /// re-running would snapshot already-overridden values and corrupt the
    /// restore set.
    fn enter_stuck<H: ElementHost<Handle = K>>(
        &mut self,
        host: &mut H,
        index: usize,
        style: StyleSet,
    ) {
        let (handle, ph, flags) = {
            let c = self.registry.get(index);
            (c.handle, c.placeholder, c.flags)
        };
        if flags.contains(CandidateFlags::STUCK) {
            return;
        }

        // (a) Mirror the live element so the placeholder occupies the space
        // about to be vacated.
        placeholder::refresh(host, ph, handle, placeholder::DEFAULT_MIRROR_PROPS);

        // (b) Snapshot the inline value of every property the override
        // touches, then apply the override.
        let mut saved = StyleSet::new();
        for (prop, value) in style.iter() {
            saved.insert(prop, host.style(handle, prop));
            host.set_style(handle, prop, value.clone());
        }

        // (c) Reserve the vacated slot.
        let inserted = host.insert_before(ph, handle);

        let c = self.registry.get_mut(index);
        c.saved = Some(saved);
        c.flags.insert(CandidateFlags::STUCK);
        c.flags.set(CandidateFlags::PLACEHOLDER_IN, inserted);
    }

    /// Leave sequence: restore the snapshot, then remove the placeholder.
    /// Restoring first puts the element back into flow in the same layout
    /// step that frees the reserved space, avoiding a one-frame jump.
    fn leave_stuck<H: ElementHost<Handle = K>>(&mut self, host: &mut H, index: usize) {
        let (handle, ph, saved) = {
            let c = self.registry.get_mut(index);
            c.flags.remove(CandidateFlags::STUCK);
            let Some(saved) = c.saved.take() else {
                return;
            };
            (c.handle, c.placeholder, saved)
        };
        for (prop, value) in saved {
            host.set_style(handle, prop, value);
        }
        let c = self.registry.get_mut(index);
        if c.flags.contains(CandidateFlags::PLACEHOLDER_IN) {
            c.flags.remove(CandidateFlags::PLACEHOLDER_IN);
            host.remove_from_tree(ph);
        }
    }
}
