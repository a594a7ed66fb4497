// Copyright 2025 the Pinstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placeholder style mirroring.
//!
//! A placeholder reserves the layout space its owner vacates while stuck.
//! To occupy exactly that space it mirrors the owner's computed box-model
//! style, then forces itself fully transparent so it is invisible without
//! giving up the space.

use pinstack_style::{StyleProp, StyleValue};

use crate::types::ElementHost;

/// Box-model properties mirrored onto a placeholder by default.
pub const DEFAULT_MIRROR_PROPS: &[StyleProp] = &[
    StyleProp::Position,
    StyleProp::Top,
    StyleProp::Left,
    StyleProp::Bottom,
    StyleProp::Right,
    StyleProp::Display,
    StyleProp::Margin,
    StyleProp::Padding,
    StyleProp::Width,
    StyleProp::Height,
    StyleProp::Border,
];

/// Property set for height-only refreshes, the common case after dynamic
/// content resizing.
pub const HEIGHT_ONLY: &[StyleProp] = &[StyleProp::Height];

/// Mirror `live`'s computed style onto `placeholder` for each property in
/// `props`, then force the placeholder fully transparent.
///
/// A property with no resolvable computed value (the live element may be
/// mid-detach) is cleared on the placeholder rather than left stale.
pub fn refresh<H: ElementHost>(
    host: &mut H,
    placeholder: H::Handle,
    live: H::Handle,
    props: &[StyleProp],
) {
    for &prop in props {
        let mut value = host
            .computed_style(live, prop)
            .unwrap_or(StyleValue::Unset);
        // The placeholder reserves flow space. When the live element is
        // currently pinned its computed position is `fixed`; mirroring that
        // would take the placeholder out of flow too.
        if prop == StyleProp::Position && value.as_keyword() == Some("fixed") {
            value = StyleValue::Unset;
        }
        host.set_style(placeholder, prop, value);
    }
    host.set_style(placeholder, StyleProp::Opacity, StyleValue::Number(0.0));
}
