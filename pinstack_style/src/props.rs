// Copyright 2025 the Pinstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style properties and their values.

use alloc::string::String;

/// A style property the sticky engine can touch.
///
/// This is a closed set on purpose: the engine only ever reads, mirrors,
/// snapshots, or overrides box-model geometry, positioning, stacking, and
/// opacity. Hosts map each variant to their own property naming via
/// [`StyleProp::name`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum StyleProp {
    /// Positioning scheme (`static`, `fixed`, ...).
    Position,
    /// Offset from the top of the containing context.
    Top,
    /// Offset from the left edge.
    Left,
    /// Offset from the bottom edge.
    Bottom,
    /// Offset from the right edge.
    Right,
    /// Stacking order.
    ZIndex,
    /// Display mode (`block`, `none`, ...).
    Display,
    /// Outer spacing shorthand.
    Margin,
    /// Inner spacing shorthand.
    Padding,
    /// Content width.
    Width,
    /// Content height.
    Height,
    /// Border shorthand.
    Border,
    /// Transparency, `0.0` (invisible) to `1.0` (opaque).
    Opacity,
}

impl StyleProp {
    /// Canonical kebab-case name of the property.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Top => "top",
            Self::Left => "left",
            Self::Bottom => "bottom",
            Self::Right => "right",
            Self::ZIndex => "z-index",
            Self::Display => "display",
            Self::Margin => "margin",
            Self::Padding => "padding",
            Self::Width => "width",
            Self::Height => "height",
            Self::Border => "border",
            Self::Opacity => "opacity",
        }
    }
}

/// A value carried by a [`StyleProp`].
///
/// `Unset` is a first-class value rather than an `Option` wrapper so that a
/// snapshot can record "this property had no explicit value" and restoring it
/// clears the property again.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    /// No explicit value; the host's cascade or defaults apply.
    Unset,
    /// A pixel length.
    Px(f64),
    /// A unitless number (e.g. opacity).
    Number(f64),
    /// An integer (e.g. stacking order).
    Integer(i32),
    /// A keyword or shorthand text (e.g. `fixed`, `1px solid`).
    Keyword(String),
}

impl StyleValue {
    /// Build a keyword value from any string-ish input.
    pub fn keyword(s: impl Into<String>) -> Self {
        Self::Keyword(s.into())
    }

    /// Whether this is the unset value.
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// The keyword text, when this is a [`Keyword`](Self::Keyword) value.
    pub fn as_keyword(&self) -> Option<&str> {
        match self {
            Self::Keyword(s) => Some(s),
            _ => None,
        }
    }
}

impl Default for StyleValue {
    fn default() -> Self {
        Self::Unset
    }
}

impl core::fmt::Display for StyleValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unset => Ok(()),
            Self::Px(v) => write!(f, "{v}px"),
            Self::Number(v) => write!(f, "{v}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Keyword(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn prop_names_are_kebab_case() {
        assert_eq!(StyleProp::ZIndex.name(), "z-index");
        assert_eq!(StyleProp::Top.name(), "top");
        assert_eq!(StyleProp::Opacity.name(), "opacity");
    }

    #[test]
    fn value_display_forms() {
        assert_eq!(StyleValue::Px(12.5).to_string(), "12.5px");
        assert_eq!(StyleValue::Integer(100).to_string(), "100");
        assert_eq!(StyleValue::keyword("fixed").to_string(), "fixed");
        assert_eq!(StyleValue::Unset.to_string(), "");
    }

    #[test]
    fn unset_is_default() {
        assert!(StyleValue::default().is_unset());
        assert!(!StyleValue::Px(0.0).is_unset());
    }
}
