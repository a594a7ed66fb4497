// Copyright 2025 the Pinstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-node customization.
//!
//! One header registers a style hook that merges extra properties over the
//! default stuck override; another replaces the whole policy with one that
//! only sticks past a hard scroll threshold.
//!
//! Run:
//! - `cargo run -p pinstack_demos --example custom_sticky_style`

use pinstack_engine::adapters::memory::MemoryDoc;
use pinstack_engine::engine::Engine;
use pinstack_engine::types::{Action, ElementHost, Options, ScrollBundle, StickyPolicy};
use pinstack_style::{StyleProp, StyleSet, StyleValue};

/// Extra style while stuck: inset from the left, custom stacking order.
fn banner_style(_bundle: &ScrollBundle) -> StyleSet {
    [
        (StyleProp::Left, StyleValue::Px(16.0)),
        (StyleProp::ZIndex, StyleValue::Integer(9)),
    ]
    .into_iter()
    .collect()
}

/// Sticks only once the node has scrolled a full 100px past the line, and
/// never releases. A toy, but it shows the policy seam: the engine executes
/// whatever `decide` returns.
struct Stubborn;

impl StickyPolicy for Stubborn {
    fn decide(&self, bundle: &ScrollBundle) -> Action {
        if bundle.stuck {
            Action::Hold
        } else if bundle.prev_top_diff <= -100.0 {
            Action::Stick(
                [
                    (StyleProp::Position, StyleValue::keyword("fixed")),
                    (StyleProp::Top, StyleValue::Px(bundle.prev_bottom)),
                ]
                .into_iter()
                .collect(),
            )
        } else {
            Action::Hold
        }
    }
}

fn main() {
    let mut doc = MemoryDoc::new();
    let _intro = doc.push_element(80.0);
    let banner = doc.push_element(40.0);
    let _body = doc.push_element(600.0);
    let late = doc.push_element(40.0);
    let _tail = doc.push_element(600.0);

    let mut engine = Engine::new();
    engine.init(&mut doc);
    engine.add_with(
        &mut doc,
        banner,
        Options {
            sticky_style: Some(banner_style),
            ..Options::default()
        },
    );
    engine.add_with(
        &mut doc,
        late,
        Options {
            policy: Some(Box::new(Stubborn)),
            ..Options::default()
        },
    );

    for y in [0.0, 80.0, 500.0, 680.0, 780.0, 900.0] {
        doc.set_scroll(y);
        engine.on_scroll(&mut doc);
        let b = engine.find(banner).unwrap();
        let l = engine.find(late).unwrap();
        println!(
            "scroll {y:>4}: banner stuck={} left={:?}  late stuck={}",
            b.is_stuck(),
            doc.style(banner, StyleProp::Left),
            l.is_stuck(),
        );
    }
}
