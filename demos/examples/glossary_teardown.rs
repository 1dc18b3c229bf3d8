// Copyright 2025 the Overword Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outside-click opt-in and teardown.
//!
//! This example enables close-on-outside-click, shows which clicks count as
//! "outside", and then destroys the instance, after which every event is
//! inert.
//!
//! Run:
//! - `cargo run -p overword_demos --example glossary_teardown`

use overword_document::Document;
use overword_glossary::glossary::Glossary;
use overword_glossary::types::{ClassConfig, Event, EventKind, SelectorConfig, TermEntry};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut doc = Document::new();

    let para = doc.create_element(doc.root(), "p");
    let cache_ref = doc.create_element(para, "span");
    doc.set_attr(cache_ref, "data-term", "cache");

    let toggle = doc.create_element(doc.root(), "button");
    doc.add_class(toggle, "js-glossary-toggle");
    let overlay = doc.create_element(doc.root(), "div");
    doc.set_attr(overlay, "id", "glossary");
    let search = doc.create_element(overlay, "input");
    doc.add_class(search, "js-glossary-search");
    let close_button = doc.create_element(overlay, "button");
    doc.add_class(close_button, "js-glossary-close");
    let list = doc.create_element(overlay, "ul");
    doc.add_class(list, "js-glossary-list");

    let entries = [TermEntry::new("Cache", "Stores copies of responses.")];
    let mut glossary = Glossary::new(
        &mut doc,
        &entries,
        &SelectorConfig::default(),
        ClassConfig::default(),
    )
    .expect("page provides all required anchors");

    glossary.set_close_on_outside_click(true);
    println!("listeners registered: {}", glossary.listeners().len());

    // Activating a reference opens the overlay; the reference itself never
    // counts as an outside click.
    glossary.handle_event(&mut doc, Event::new(EventKind::Click, cache_ref));
    println!("after reference click: open={}", glossary.is_open());

    // A click in the page body closes it.
    glossary.handle_event(&mut doc, Event::new(EventKind::Click, para));
    println!("after body click:      open={}", glossary.is_open());

    // The toggle never counts as outside, so it can reopen the overlay; the
    // close control closes it again.
    glossary.handle_event(&mut doc, Event::new(EventKind::Click, toggle));
    println!("after toggle click:    open={}", glossary.is_open());
    glossary.handle_event(&mut doc, Event::new(EventKind::Click, close_button));
    println!("after close click:     open={}", glossary.is_open());

    // Tear down: the listener list drains and events stop having effects.
    glossary.destroy(&mut doc);
    println!(
        "after destroy: destroyed={} listeners={}",
        glossary.is_destroyed(),
        glossary.listeners().len()
    );
    glossary.handle_event(&mut doc, Event::new(EventKind::Click, toggle));
    println!("toggle click after destroy: open={}", glossary.is_open());
}
