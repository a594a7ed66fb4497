// Copyright 2025 the Pinstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered property→value sets.

use alloc::vec::Vec;

use crate::props::{StyleProp, StyleValue};

/// A small ordered map from [`StyleProp`] to [`StyleValue`].
///
/// Backed by a flat vector: the property sets the engine works with are a
/// dozen entries at most, where a linear scan beats any hashing. Insertion
/// order is preserved, which matters when a set is applied property by
/// property (later inserts win on conflict via replacement, and restore
/// order follows capture order).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleSet {
    entries: Vec<(StyleProp, StyleValue)>,
}

impl StyleSet {
    /// Create an empty set.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of properties in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or replace the value for `prop`.
    ///
    /// Replacement keeps the property's original position in the set.
    pub fn insert(&mut self, prop: StyleProp, value: StyleValue) {
        match self.entries.iter_mut().find(|(p, _)| *p == prop) {
            Some((_, v)) => *v = value,
            None => self.entries.push((prop, value)),
        }
    }

    /// Value for `prop`, if present.
    pub fn get(&self, prop: StyleProp) -> Option<&StyleValue> {
        self.entries.iter().find(|(p, _)| *p == prop).map(|(_, v)| v)
    }

    /// Remove `prop`, returning its value if it was present.
    pub fn remove(&mut self, prop: StyleProp) -> Option<StyleValue> {
        let i = self.entries.iter().position(|(p, _)| *p == prop)?;
        Some(self.entries.remove(i).1)
    }

    /// Whether `prop` is present.
    pub fn contains(&self, prop: StyleProp) -> bool {
        self.entries.iter().any(|(p, _)| *p == prop)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleProp, &StyleValue)> {
        self.entries.iter().map(|(p, v)| (*p, v))
    }

    /// Merge `other` into `self`; properties in `other` win on conflict.
    pub fn merge(&mut self, other: Self) {
        for (p, v) in other.entries {
            self.insert(p, v);
        }
    }
}

impl FromIterator<(StyleProp, StyleValue)> for StyleSet {
    fn from_iter<I: IntoIterator<Item = (StyleProp, StyleValue)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (p, v) in iter {
            set.insert(p, v);
        }
        set
    }
}

impl IntoIterator for StyleSet {
    type Item = (StyleProp, StyleValue);
    type IntoIter = alloc::vec::IntoIter<(StyleProp, StyleValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn insert_then_get() {
        let mut s = StyleSet::new();
        s.insert(StyleProp::Top, StyleValue::Px(10.0));
        assert_eq!(s.get(StyleProp::Top), Some(&StyleValue::Px(10.0)));
        assert_eq!(s.get(StyleProp::Left), None);
    }

    // Replacement keeps position; no duplicate entries.
    #[test]
    fn insert_replaces_in_place() {
        let mut s = StyleSet::new();
        s.insert(StyleProp::Top, StyleValue::Px(10.0));
        s.insert(StyleProp::ZIndex, StyleValue::Integer(1));
        s.insert(StyleProp::Top, StyleValue::Px(20.0));
        assert_eq!(s.len(), 2);
        let order: Vec<StyleProp> = s.iter().map(|(p, _)| p).collect();
        assert_eq!(order, vec![StyleProp::Top, StyleProp::ZIndex]);
        assert_eq!(s.get(StyleProp::Top), Some(&StyleValue::Px(20.0)));
    }

    #[test]
    fn remove_returns_value() {
        let mut s = StyleSet::new();
        s.insert(StyleProp::Position, StyleValue::keyword("fixed"));
        assert_eq!(
            s.remove(StyleProp::Position),
            Some(StyleValue::keyword("fixed"))
        );
        assert!(s.is_empty());
        assert_eq!(s.remove(StyleProp::Position), None);
    }

    // Merge semantics: other wins on conflict, new entries append.
    #[test]
    fn merge_prefers_other() {
        let mut base: StyleSet = [
            (StyleProp::Position, StyleValue::keyword("fixed")),
            (StyleProp::Top, StyleValue::Px(0.0)),
        ]
        .into_iter()
        .collect();
        let over: StyleSet = [
            (StyleProp::Top, StyleValue::Px(48.0)),
            (StyleProp::ZIndex, StyleValue::Integer(10)),
        ]
        .into_iter()
        .collect();
        base.merge(over);
        assert_eq!(base.get(StyleProp::Top), Some(&StyleValue::Px(48.0)));
        assert_eq!(base.get(StyleProp::ZIndex), Some(&StyleValue::Integer(10)));
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let s: StyleSet = [
            (StyleProp::Height, StyleValue::Px(50.0)),
            (StyleProp::Width, StyleValue::Px(100.0)),
            (StyleProp::Opacity, StyleValue::Number(0.0)),
        ]
        .into_iter()
        .collect();
        let props: Vec<StyleProp> = s.iter().map(|(p, _)| p).collect();
        assert_eq!(
            props,
            vec![StyleProp::Height, StyleProp::Width, StyleProp::Opacity]
        );
    }
}
