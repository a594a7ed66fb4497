// Copyright 2025 the Pinstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinstack Style: the style vocabulary shared by the sticky engine.
//!
//! - [`StyleProp`]: the fixed set of properties the engine reads, mirrors onto
//!   placeholders, snapshots, and overrides.
//! - [`StyleValue`]: the values those properties take (unset, pixel lengths,
//!   numbers, integers, keywords).
//! - [`StyleSet`]: a small ordered property→value map used for override
//!   styles, saved snapshots, and placeholder mirrors.
//!
//! This crate carries no geometry and no host knowledge; it is the common
//! data model between an engine and whatever render tree hosts it. Higher
//! layers decide what a value *means* — a `top` in viewport pixels here is a
//! `top` in whatever unit the host's viewport uses.
//!
//! # Example
//!
//! ```
//! use pinstack_style::{StyleProp, StyleSet, StyleValue};
//!
//! let mut over = StyleSet::new();
//! over.insert(StyleProp::Position, StyleValue::keyword("fixed"));
//! over.insert(StyleProp::Top, StyleValue::Px(48.0));
//!
//! assert_eq!(over.get(StyleProp::Top), Some(&StyleValue::Px(48.0)));
//! assert_eq!(over.len(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod props;
mod set;

pub use props::{StyleProp, StyleValue};
pub use set::StyleSet;
