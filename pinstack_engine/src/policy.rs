// Copyright 2025 the Pinstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The default stick/unstick policy.
//!
//! ## State machine
//!
//! Two states per node, `Unstuck ⇄ Stuck`, toggling for the node's whole
//! lifetime:
//!
//! - `Unstuck`: once the node reaches the stacking line established by its
//!   predecessor (`prev_top_diff <= 0`), stick — pin to the viewport at the
//!   predecessor's bottom edge with an elevated stacking order, plus any
//!   node-supplied custom style.
//! - `Stuck`: release once the placeholder has scrolled back below the
//!   pinned element ([`ScrollBundle::keep_sticky`]); otherwise, if the
//!   pinned top has drifted off the stacking line (a preceding stuck node
//!   changed height), re-pin only the top offset.
//!
//! A node wanting entirely different behavior implements
//! [`StickyPolicy`] itself and registers with
//! [`Options::policy`](crate::types::Options::policy).

use pinstack_style::{StyleProp, StyleSet, StyleValue};

use crate::types::{Action, ScrollBundle, StickyPolicy, StickyStyleFn};

/// Stacking order applied to stuck elements.
const STUCK_Z_INDEX: i32 = 100;

/// The default sticky state machine.
///
/// Optionally carries a per-node style hook whose result is merged over the
/// default override when entering the stuck state (the hook wins on
/// conflicting properties).
#[derive(Clone, Debug, Default)]
pub struct DefaultPolicy {
    style: Option<StickyStyleFn>,
}

impl DefaultPolicy {
    /// Policy with the default override style only.
    pub const fn new() -> Self {
        Self { style: None }
    }

    /// Policy with a custom style hook merged over the default override.
    pub const fn with_style(style: StickyStyleFn) -> Self {
        Self {
            style: Some(style),
        }
    }

    fn stick_style(&self, bundle: &ScrollBundle) -> StyleSet {
        let mut style: StyleSet = [
            (StyleProp::Position, StyleValue::keyword("fixed")),
            (StyleProp::ZIndex, StyleValue::Integer(STUCK_Z_INDEX)),
            (StyleProp::Top, StyleValue::Px(bundle.prev_bottom)),
        ]
        .into_iter()
        .collect();
        if let Some(hook) = self.style {
            style.merge(hook(bundle));
        }
        style
    }
}

impl StickyPolicy for DefaultPolicy {
    fn decide(&self, bundle: &ScrollBundle) -> Action {
        if bundle.stuck {
            if !bundle.keep_sticky() {
                Action::Unstick
            } else if bundle.top != bundle.prev_bottom {
                // Predecessor height drift; correct the pin without
                // re-entering the stuck state.
                Action::Repin(bundle.prev_bottom)
            } else {
                Action::Hold
            }
        } else if bundle.prev_top_diff <= 0.0 {
            Action::Stick(self.stick_style(bundle))
        } else {
            Action::Hold
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unstuck_at(prev_top_diff: f64, prev_bottom: f64) -> ScrollBundle {
        ScrollBundle {
            top: prev_bottom + prev_top_diff,
            prev_top: 0.0,
            prev_bottom,
            prev_top_diff,
            force_reflow: false,
            index: 1,
            count: 2,
            stuck: false,
            placeholder_in: false,
            placeholder_top: None,
        }
    }

    fn stuck_at(top: f64, prev_bottom: f64, placeholder_top: f64) -> ScrollBundle {
        ScrollBundle {
            top,
            prev_top: 0.0,
            prev_bottom,
            prev_top_diff: top - prev_bottom,
            force_reflow: false,
            index: 1,
            count: 2,
            stuck: true,
            placeholder_in: true,
            placeholder_top: Some(placeholder_top),
        }
    }

    #[test]
    fn holds_above_the_stacking_line() {
        let p = DefaultPolicy::new();
        assert_eq!(p.decide(&unstuck_at(10.0, 50.0)), Action::Hold);
    }

    #[test]
    fn sticks_at_and_past_the_line() {
        let p = DefaultPolicy::new();
        for diff in [0.0, -5.0] {
            match p.decide(&unstuck_at(diff, 50.0)) {
                Action::Stick(style) => {
                    assert_eq!(
                        style.get(StyleProp::Position),
                        Some(&StyleValue::keyword("fixed"))
                    );
                    assert_eq!(style.get(StyleProp::Top), Some(&StyleValue::Px(50.0)));
                    assert_eq!(
                        style.get(StyleProp::ZIndex),
                        Some(&StyleValue::Integer(STUCK_Z_INDEX))
                    );
                }
                other => panic!("expected Stick, got {other:?}"),
            }
        }
    }

    #[test]
    fn releases_when_placeholder_catches_up() {
        let p = DefaultPolicy::new();
        // Placeholder top (5) greater than pinned top (0): scrolled back.
        assert_eq!(p.decide(&stuck_at(0.0, 0.0, 5.0)), Action::Unstick);
    }

    #[test]
    fn repins_on_predecessor_drift() {
        let p = DefaultPolicy::new();
        // Pinned at 50, stacking line moved to 80.
        assert_eq!(p.decide(&stuck_at(50.0, 80.0, -100.0)), Action::Repin(80.0));
    }

    #[test]
    fn holds_while_pinned_on_the_line() {
        let p = DefaultPolicy::new();
        assert_eq!(p.decide(&stuck_at(50.0, 50.0, -100.0)), Action::Hold);
    }

    // Custom hook wins over the default on conflicting properties and adds
    // its own.
    #[test]
    fn style_hook_merges_over_default() {
        fn hook(_: &ScrollBundle) -> StyleSet {
            [
                (StyleProp::ZIndex, StyleValue::Integer(7)),
                (StyleProp::Left, StyleValue::Px(16.0)),
            ]
            .into_iter()
            .collect()
        }
        let p = DefaultPolicy::with_style(hook);
        match p.decide(&unstuck_at(0.0, 20.0)) {
            Action::Stick(style) => {
                assert_eq!(style.get(StyleProp::ZIndex), Some(&StyleValue::Integer(7)));
                assert_eq!(style.get(StyleProp::Left), Some(&StyleValue::Px(16.0)));
                assert_eq!(style.get(StyleProp::Top), Some(&StyleValue::Px(20.0)));
            }
            other => panic!("expected Stick, got {other:?}"),
        }
    }
}
