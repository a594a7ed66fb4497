// Copyright 2025 the Pinstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sticky stacking basics.
//!
//! Three section headers in a scrollable column pin to the viewport top one
//! after another as the page scrolls, each stacking beneath the previous
//! stuck header.
//!
//! Run:
//! - `cargo run -p pinstack_demos --example stacking_basics`

use pinstack_engine::adapters::memory::{ElementId, MemoryDoc};
use pinstack_engine::engine::Engine;
use pinstack_engine::types::ElementHost;

fn report(doc: &MemoryDoc, engine: &Engine<ElementId>, headers: &[ElementId]) {
    print!("scroll {:>4}:", doc.scroll());
    for (i, &h) in headers.iter().enumerate() {
        let c = engine.find(h).unwrap();
        let top = doc.bounds(h).map(|r| r.y0);
        match top {
            Some(top) if c.is_stuck() => print!("  H{} stuck@{top}", i + 1),
            Some(top) => print!("  H{} flow@{top}", i + 1),
            None => print!("  H{} detached", i + 1),
        }
    }
    println!();
}

fn main() {
    let mut doc = MemoryDoc::new();
    let _intro = doc.push_element(100.0);
    let mut headers = Vec::new();
    for _section in 0..3 {
        headers.push(doc.push_element(50.0));
        let _body = doc.push_element(400.0);
    }

    let mut engine = Engine::new();
    engine.init(&mut doc);
    for &h in &headers {
        engine.add(&mut doc, h);
    }

    println!("== scrolling down ==");
    for y in [0.0, 100.0, 400.0, 600.0, 1000.0, 1100.0] {
        doc.set_scroll(y);
        engine.on_scroll(&mut doc);
        report(&doc, &engine, &headers);
    }

    println!("== scrolling back up ==");
    for y in [600.0, 400.0, 50.0, 0.0] {
        doc.set_scroll(y);
        engine.on_scroll(&mut doc);
        report(&doc, &engine, &headers);
    }
}
