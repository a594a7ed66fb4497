// Copyright 2025 the Pinstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placeholder refresh after dynamic content resizing.
//!
//! While a header is stuck, its placeholder holds the page open at the
//! header's old height. When the header's content grows, the public
//! passthrough resizes the reserved space — height only, no state
//! transition.
//!
//! Run:
//! - `cargo run -p pinstack_demos --example placeholder_refresh`

use pinstack_engine::adapters::memory::MemoryDoc;
use pinstack_engine::engine::Engine;
use pinstack_engine::types::ElementHost;
use pinstack_style::StyleProp;

fn main() {
    let mut doc = MemoryDoc::new();
    let _intro = doc.push_element(100.0);
    let header = doc.push_element(50.0);
    let below = doc.push_element(400.0);

    let mut engine = Engine::new();
    engine.init(&mut doc);
    engine.add(&mut doc, header);

    doc.set_scroll(150.0);
    engine.on_scroll(&mut doc);
    let ph = engine.find(header).unwrap().placeholder();
    println!(
        "stuck: placeholder height = {}",
        doc.style(ph, StyleProp::Height)
    );
    println!("content below at {:?}", doc.bounds(below).map(|r| r.y0));

    // Header content expands while pinned.
    doc.set_natural_height(header, 120.0);
    engine.update_placeholder(&mut doc, header);
    println!(
        "after resize: placeholder height = {}",
        doc.style(ph, StyleProp::Height)
    );
    println!("content below at {:?}", doc.bounds(below).map(|r| r.y0));
}
