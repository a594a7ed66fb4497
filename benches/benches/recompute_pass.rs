// Copyright 2025 the Pinstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use pinstack_engine::adapters::memory::{ElementId, MemoryDoc};
use pinstack_engine::engine::Engine;

const HEADER_HEIGHT: f64 = 50.0;
const SECTION_HEIGHT: f64 = 400.0;

/// A document with `n` sticky headers, each followed by a body section.
fn build(n: usize) -> (MemoryDoc, Engine<ElementId>) {
    let mut doc = MemoryDoc::new();
    let mut engine = Engine::new();
    engine.init(&mut doc);
    for _ in 0..n {
        let header = doc.push_element(HEADER_HEIGHT);
        let _body = doc.push_element(SECTION_HEIGHT);
        engine.add_with(
            &mut doc,
            header,
            pinstack_engine::types::Options {
                trigger: false,
                ..Default::default()
            },
        );
    }
    (doc, engine)
}

fn bench_pass_cold(c: &mut Criterion) {
    let mut g = c.benchmark_group("pass_cold");
    for n in [16usize, 128, 1024] {
        g.throughput(Throughput::Elements(n as u64));
        g.bench_function(format!("candidates_{n}"), |b| {
            b.iter_batched(
                || build(n),
                |(mut doc, mut engine)| {
                    doc.set_scroll(0.0);
                    engine.on_scroll(&mut doc);
                    black_box(engine.len())
                },
                BatchSize::SmallInput,
            );
        });
    }
    g.finish();
}

fn bench_pass_scrolling(c: &mut Criterion) {
    let mut g = c.benchmark_group("pass_scrolling");
    for n in [16usize, 128] {
        g.throughput(Throughput::Elements(n as u64));
        g.bench_function(format!("candidates_{n}"), |b| {
            b.iter_batched(
                || build(n),
                |(mut doc, mut engine)| {
                    // Sweep deep enough to stick roughly half the headers.
                    let depth = (n as f64 / 2.0) * (HEADER_HEIGHT + SECTION_HEIGHT);
                    for step in 0..16 {
                        doc.set_scroll(depth * f64::from(step) / 16.0);
                        engine.on_scroll(&mut doc);
                    }
                    black_box(engine.len())
                },
                BatchSize::SmallInput,
            );
        });
    }
    g.finish();
}

criterion_group!(benches, bench_pass_cold, bench_pass_scrolling);
criterion_main!(benches);
