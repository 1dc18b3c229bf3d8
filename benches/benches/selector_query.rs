// Copyright 2025 the Overword Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use overword_document::{Document, Selector};

/// A page of `sections` sections with `spans` spans each; every fourth span
/// is an inline term reference and every third carries a class.
fn build_page(sections: usize, spans: usize) -> Document {
    let mut doc = Document::new();
    for s in 0..sections {
        let section = doc.create_element(doc.root(), "section");
        for i in 0..spans {
            let span = doc.create_element(section, "span");
            if i % 4 == 0 {
                let key = if s % 2 == 0 { "cache" } else { "proxy" };
                doc.set_attr(span, "data-term", key);
            }
            if i % 3 == 0 {
                doc.add_class(span, "glossary__term");
            }
        }
    }
    doc
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("selector_parse");
    for sel in [
        "span",
        ".glossary__term",
        "[data-term]",
        "a, button, input, [tabindex]",
        "span.glossary__term[data-term=\"cache\"]",
    ] {
        group.bench_function(sel, |b| {
            b.iter(|| Selector::parse(black_box(sel)).unwrap());
        });
    }
    group.finish();
}

fn bench_matches(c: &mut Criterion) {
    let doc = build_page(8, 8);
    let nodes = doc.query(&Selector::parse("span").unwrap());
    let sel = Selector::parse("span.glossary__term[data-term]").unwrap();

    let mut group = c.benchmark_group("selector_matches");
    group.throughput(Throughput::Elements(nodes.len() as u64));
    group.bench_function("compound_over_spans", |b| {
        b.iter(|| {
            nodes
                .iter()
                .filter(|n| doc.matches(black_box(**n), &sel))
                .count()
        });
    });
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_query");
    for n in [16_usize, 64] {
        let doc = build_page(n, n);
        let refs = Selector::parse("[data-term]").unwrap();
        let focusable = Selector::parse("a, button, input, [tabindex]").unwrap();

        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("data_term/{n}x{n}"), |b| {
            b.iter(|| doc.query(black_box(&refs)));
        });
        group.bench_function(format!("focusable_miss/{n}x{n}"), |b| {
            b.iter(|| doc.query(black_box(&focusable)));
        });
    }
    group.finish();
}

fn bench_closest(c: &mut Criterion) {
    let mut doc = Document::new();
    // A deep chain with the reference at the top.
    let mut cur = doc.create_element(doc.root(), "div");
    doc.set_attr(cur, "data-term", "cache");
    for _ in 0..32 {
        cur = doc.create_element(cur, "div");
    }
    let leaf = cur;
    let sel = Selector::parse("[data-term]").unwrap();

    c.bench_function("closest_depth_32", |b| {
        b.iter(|| doc.closest(black_box(leaf), &sel));
    });
}

criterion_group!(benches, bench_parse, bench_matches, bench_query, bench_closest);
criterion_main!(benches);
