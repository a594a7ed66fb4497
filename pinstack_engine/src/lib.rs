// Copyright 2025 the Pinstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinstack Engine: sticky coordination for vertically scrollable surfaces.
//!
//! ## Overview
//!
//! This crate decides which registered elements should pin ("stick") to the
//! top of the viewport as the surface scrolls, stacking stuck elements
//! beneath one another in document order. While an element is stuck, an
//! invisible placeholder reserves its original layout space so the page does
//! not collapse, and the properties the override touched are snapshotted so
//! leaving the stuck state restores the element exactly.
//!
//! The engine does not own a render tree. A host implements
//! [`ElementHost`](crate::types::ElementHost) — geometry reads, style reads
//! and writes, placeholder insertion — and the engine coordinates on top of
//! it, the same way a hit-test router coordinates on top of pre-resolved
//! hits rather than doing its own picking.
//!
//! ## Workflow
//!
//! 1) Construct an [`Engine`](crate::engine::Engine) and bind it once to the
//!    scrollable surface with [`Engine::init`](crate::engine::Engine::init).
//! 2) Register candidate elements with
//!    [`Engine::add`](crate::engine::Engine::add) (or
//!    [`add_with`](crate::engine::Engine::add_with) for a custom policy or
//!    style hook). The registry keeps candidates sorted by document order.
//! 3) On every scroll notification, call
//!    [`Engine::on_scroll`](crate::engine::Engine::on_scroll). One
//!    synchronous pass walks the registry in order, computes each node's
//!    geometry relative to its predecessor's stacking line, and lets the
//!    node's [`StickyPolicy`](crate::types::StickyPolicy) decide an
//!    [`Action`](crate::types::Action) which the engine executes.
//!
//! ## Degradation, not failure
//!
//! There are no fatal errors. A detached element is skipped for the tick and
//! picked up again once it has geometry; an ambiguous document-order
//! comparison ([`DocOrder::Unknown`](crate::types::DocOrder::Unknown)) keeps
//! the pair's current order; re-registering a known handle and removing an
//! unknown one are silent no-ops.
//!
//! ## Concurrency model
//!
//! Single-threaded and cooperative: a pass runs synchronously to completion,
//! and registration changes happen between passes. The engine relies on the
//! hosting event loop for this serialization rather than enforcing it; a
//! genuinely multi-threaded host must put one mutual-exclusion boundary
//! around the engine.
//!
//! ## Example
//!
//! ```
//! use pinstack_engine::adapters::memory::MemoryDoc;
//! use pinstack_engine::engine::Engine;
//!
//! let mut doc = MemoryDoc::new();
//! let _spacer = doc.push_element(100.0);
//! let header = doc.push_element(50.0);
//!
//! let mut engine = Engine::new();
//! engine.init(&mut doc);
//! engine.add(&mut doc, header);
//!
//! // Scroll far enough that the header reaches the viewport top.
//! doc.set_scroll(120.0);
//! engine.on_scroll(&mut doc);
//! assert!(engine.find(header).unwrap().is_stuck());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod engine;
pub mod placeholder;
pub mod policy;
pub mod registry;
pub mod types;
