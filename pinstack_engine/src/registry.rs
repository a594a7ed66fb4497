// Copyright 2025 the Pinstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered candidate registry.
//!
//! ## Overview
//!
//! The registry is the engine's only persistent state: one
//! [`Candidate`] per registered handle, kept sorted ascending by document
//! order. Uniqueness is by handle identity. Order is recomputed when a
//! candidate is added; the render tree reordering elements *after*
//! registration does not re-sort the registry. The stacking sequence is
//! fixed as of the last add.
//!
//! ## Ordering fallback
//!
//! Sorting consults [`ElementHost::document_order`]. The
//! [`DocOrder::Unknown`] result (either side detached, or unrelated
//! elements) keeps the pair in its current relative order, so a detached
//! candidate settles deterministically where it already is — newly added
//! ones at the end — instead of failing the sort.

use alloc::boxed::Box;
use alloc::vec::Vec;

use pinstack_style::StyleSet;

use crate::types::{CandidateFlags, DocOrder, ElementHost, StickyPolicy};

/// One registered element eligible to become sticky.
///
/// The engine owns the candidate record and its placeholder; the element
/// itself stays host-owned and is only observed. State is exposed through
/// explicit accessors so call sites see exactly what they depend on.
pub struct Candidate<K> {
    pub(crate) handle: K,
    pub(crate) placeholder: K,
    pub(crate) flags: CandidateFlags,
    pub(crate) saved: Option<StyleSet>,
    pub(crate) policy: Box<dyn StickyPolicy>,
}

impl<K: Copy> Candidate<K> {
    /// Handle of the host-owned element.
    pub fn handle(&self) -> K {
        self.handle
    }

    /// Handle of the engine-owned placeholder element.
    pub fn placeholder(&self) -> K {
        self.placeholder
    }

    /// Whether the candidate is currently stuck.
    pub fn is_stuck(&self) -> bool {
        self.flags.contains(CandidateFlags::STUCK)
    }

    /// Whether the placeholder is currently inserted in the render tree.
    pub fn placeholder_in(&self) -> bool {
        self.flags.contains(CandidateFlags::PLACEHOLDER_IN)
    }

    /// Style snapshot captured on entering the stuck state.
    ///
    /// Present iff [`is_stuck`](Self::is_stuck); holds the inline values of
    /// exactly the properties the override touched.
    pub fn saved_style(&self) -> Option<&StyleSet> {
        self.saved.as_ref()
    }
}

impl<K: core::fmt::Debug> core::fmt::Debug for Candidate<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Candidate")
            .field("handle", &self.handle)
            .field("placeholder", &self.placeholder)
            .field("flags", &self.flags)
            .field("saved", &self.saved)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of candidates.
pub(crate) struct Registry<K> {
    entries: Vec<Candidate<K>>,
}

impl<K: Copy + Eq + core::fmt::Debug> Registry<K> {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn get(&self, index: usize) -> &Candidate<K> {
        &self.entries[index]
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> &mut Candidate<K> {
        &mut self.entries[index]
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Candidate<K>> {
        self.entries.iter()
    }

    pub(crate) fn position(&self, handle: K) -> Option<usize> {
        self.entries.iter().position(|c| c.handle == handle)
    }

    /// Append a candidate for `handle` and restore ascending document
    /// order. Returns `false` (and changes nothing) when the handle is
    /// already registered.
    pub(crate) fn add<H: ElementHost<Handle = K>>(
        &mut self,
        host: &mut H,
        handle: K,
        policy: Box<dyn StickyPolicy>,
    ) -> bool {
        if self.position(handle).is_some() {
            return false;
        }
        let placeholder = host.create_placeholder();
        self.entries.push(Candidate {
            handle,
            placeholder,
            flags: CandidateFlags::empty(),
            saved: None,
            policy,
        });
        self.resort(host);
        true
    }

    /// Remove the candidate for `handle`, forcing its placeholder out of
    /// the tree and destroying it regardless of sticky state. Returns
    /// `false` when the handle is unknown.
    pub(crate) fn remove<H: ElementHost<Handle = K>>(&mut self, host: &mut H, handle: K) -> bool {
        let Some(index) = self.position(handle) else {
            return false;
        };
        let candidate = self.entries.remove(index);
        if candidate.flags.contains(CandidateFlags::PLACEHOLDER_IN) {
            host.remove_from_tree(candidate.placeholder);
        }
        host.destroy_placeholder(candidate.placeholder);
        true
    }

    /// Insertion sort by document order.
    ///
    /// Hand-rolled rather than `sort_by` because [`DocOrder::Unknown`] is
    /// not a total order: the standard sort may reject an inconsistent
    /// comparator, while insertion simply leaves ambiguous pairs where they
    /// are.
    pub(crate) fn resort<H: ElementHost<Handle = K>>(&mut self, host: &H) {
        for i in 1..self.entries.len() {
            let mut j = i;
            while j > 0 {
                match host.document_order(self.entries[j - 1].handle, self.entries[j].handle) {
                    DocOrder::After => {
                        self.entries.swap(j - 1, j);
                        j -= 1;
                    }
                    DocOrder::Before | DocOrder::Unknown => break,
                }
            }
        }
    }
}

impl<K: core::fmt::Debug> core::fmt::Debug for Registry<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{ElementId, MemoryDoc};
    use crate::policy::DefaultPolicy;
    use alloc::vec;

    fn policy() -> Box<dyn StickyPolicy> {
        Box::new(DefaultPolicy::new())
    }

    fn order_of(reg: &Registry<ElementId>) -> Vec<ElementId> {
        reg.iter().map(|c| c.handle()).collect()
    }

    #[test]
    fn add_sorts_by_document_order() {
        let mut doc = MemoryDoc::new();
        let a = doc.push_element(10.0);
        let b = doc.push_element(10.0);
        let c = doc.push_element(10.0);

        // Register out of document order.
        let mut reg = Registry::new();
        assert!(reg.add(&mut doc, c, policy()));
        assert!(reg.add(&mut doc, a, policy()));
        assert!(reg.add(&mut doc, b, policy()));
        assert_eq!(order_of(&reg), vec![a, b, c]);
    }

    #[test]
    fn add_is_idempotent_per_handle() {
        let mut doc = MemoryDoc::new();
        let a = doc.push_element(10.0);
        let mut reg = Registry::new();
        assert!(reg.add(&mut doc, a, policy()));
        assert!(!reg.add(&mut doc, a, policy()));
        assert_eq!(reg.len(), 1);
    }

    // A detached element compares Unknown against everything and stays at
    // the end where it was appended.
    #[test]
    fn detached_candidate_settles_at_end() {
        let mut doc = MemoryDoc::new();
        let a = doc.push_element(10.0);
        let b = doc.push_element(10.0);
        let loose = doc.push_element(10.0);
        doc.detach(loose);

        let mut reg = Registry::new();
        reg.add(&mut doc, loose, policy());
        reg.add(&mut doc, b, policy());
        reg.add(&mut doc, a, policy());
        // Attached elements are ordered among themselves; the detached one
        // never moves past a comparison, so it cannot displace them.
        let order = order_of(&reg);
        let pos_a = order.iter().position(|&h| h == a).unwrap();
        let pos_b = order.iter().position(|&h| h == b).unwrap();
        assert!(pos_a < pos_b, "attached elements keep document order");
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn remove_unknown_handle_is_noop() {
        let mut doc = MemoryDoc::new();
        let a = doc.push_element(10.0);
        let mut reg: Registry<ElementId> = Registry::new();
        assert!(!reg.remove(&mut doc, a));
    }

    #[test]
    fn remove_destroys_placeholder() {
        let mut doc = MemoryDoc::new();
        let a = doc.push_element(10.0);
        let mut reg = Registry::new();
        reg.add(&mut doc, a, policy());
        let ph = reg.get(0).placeholder();
        assert!(reg.remove(&mut doc, a));
        assert!(reg.is_empty());
        // Destroyed placeholders have no geometry and no order.
        assert!(doc.bounds(ph).is_none());
    }
}
