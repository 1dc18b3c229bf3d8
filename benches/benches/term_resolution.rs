// Copyright 2025 the Overword Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use overword_document::{Document, NodeId};
use overword_glossary::glossary::Glossary;
use overword_glossary::types::{ClassConfig, Event, EventKind, SelectorConfig, TermEntry};

/// A page with glossary chrome, `entries` entries, and one inline reference
/// per entry scattered through the body.
fn build(entries: usize) -> (Document, Glossary<Document>, Vec<NodeId>) {
    let mut doc = Document::new();

    let para = doc.create_element(doc.root(), "p");
    let mut refs = Vec::with_capacity(entries);
    for i in 0..entries {
        let span = doc.create_element(para, "span");
        doc.set_attr(span, "data-term", &format!("term {i}"));
        refs.push(span);
    }

    let toggle = doc.create_element(doc.root(), "button");
    doc.add_class(toggle, "js-glossary-toggle");
    let overlay = doc.create_element(doc.root(), "div");
    doc.set_attr(overlay, "id", "glossary");
    let search = doc.create_element(overlay, "input");
    doc.add_class(search, "js-glossary-search");
    let list = doc.create_element(overlay, "ul");
    doc.add_class(list, "js-glossary-list");

    let defs: Vec<TermEntry> = (0..entries)
        .map(|i| TermEntry::new(&format!("Term {i}"), &format!("Definition {i}.")))
        .collect();
    let glossary = Glossary::new(
        &mut doc,
        &defs,
        &SelectorConfig::default(),
        ClassConfig::default(),
    )
    .unwrap();
    (doc, glossary, refs)
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    for n in [8_usize, 64] {
        let (mut doc, mut glossary, _) = build(n);
        glossary.show(&mut doc);

        group.bench_function(format!("hit/{n}"), |b| {
            b.iter(|| glossary.resolve(&mut doc, black_box("term 3")));
        });
        group.bench_function(format!("miss/{n}"), |b| {
            b.iter(|| glossary.resolve(&mut doc, black_box("unknown")));
        });
    }
    group.finish();
}

fn bench_event_dispatch(c: &mut Criterion) {
    let (mut doc, mut glossary, refs) = build(32);
    let reference = refs[7];

    c.bench_function("activation_click", |b| {
        b.iter(|| {
            glossary.handle_event(&mut doc, Event::new(EventKind::Click, black_box(reference)));
        });
    });
}

criterion_group!(benches, bench_resolve, bench_event_dispatch);
criterion_main!(benches);
