// Copyright 2025 the Pinstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters bridging the host seam to concrete trees.
//!
//! The engine only ever talks to an
//! [`ElementHost`](crate::types::ElementHost); adapters supply one. The
//! in-memory document here is a complete, layout-faithful host used by this
//! workspace's tests, demos, and benches, and a template for real
//! integrations.

pub mod memory;
