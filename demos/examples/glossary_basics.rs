// Copyright 2025 the Overword Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glossary basics.
//!
//! This minimal example builds a page in the stock document, binds a
//! glossary, activates an inline term reference, and walks through search
//! and Escape handling.
//!
//! Run:
//! - `cargo run -p overword_demos --example glossary_basics`

use overword_document::Document;
use overword_glossary::dom::Dom;
use overword_glossary::glossary::Glossary;
use overword_glossary::types::{ClassConfig, Event, EventKind, Key, SelectorConfig, TermEntry};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut doc = Document::new();

    // Article body with two inline references.
    let para = doc.create_element(doc.root(), "p");
    doc.set_text(para, "Responses flow through a proxy and land in the cache.");
    let proxy_ref = doc.create_element(para, "span");
    doc.set_attr(proxy_ref, "data-term", "Proxy");
    let cache_ref = doc.create_element(para, "span");
    doc.set_attr(cache_ref, "data-term", "cache");

    // Glossary chrome: toggle outside the overlay, the rest inside it.
    let toggle = doc.create_element(doc.root(), "button");
    doc.add_class(toggle, "js-glossary-toggle");
    let overlay = doc.create_element(doc.root(), "div");
    doc.set_attr(overlay, "id", "glossary");
    let search = doc.create_element(overlay, "input");
    doc.add_class(search, "js-glossary-search");
    let list = doc.create_element(overlay, "ul");
    doc.add_class(list, "js-glossary-list");

    let entries = [
        TermEntry::new("Cache", "Stores copies of responses close to clients."),
        TermEntry::new("Proxy", "Forwards requests on behalf of clients."),
    ];
    let mut glossary = Glossary::new(
        &mut doc,
        &entries,
        &SelectorConfig::default(),
        ClassConfig::default(),
    )
    .expect("page provides all required anchors");

    println!("== After construction ==");
    println!("  open={}  {:?}", glossary.is_open(), glossary);

    // A reader clicks the inline "Proxy" reference.
    glossary.handle_event(&mut doc, Event::new(EventKind::Click, proxy_ref));
    println!("== After clicking the proxy reference ==");
    println!("  open={}", glossary.is_open());
    println!("  search value = {:?}", doc.attr(search, "value"));
    println!(
        "  proxy ref highlighted = {}",
        doc.has_class(proxy_ref, "term--highlight")
    );
    println!(
        "  cache ref highlighted = {}",
        doc.has_class(cache_ref, "term--highlight")
    );
    for trigger in Dom::query_under(&doc, list, "[data-term]") {
        let item = doc.parent(trigger).expect("triggers sit inside list items");
        println!(
            "  trigger {:?}: item visible = {}",
            doc.attr(trigger, "data-term"),
            Dom::is_visible(&doc, item)
        );
    }

    // Escape closes the overlay and hands focus back to the reference.
    glossary.handle_event(&mut doc, Event::new(EventKind::Keyup(Key::Escape), search));
    println!("== After Escape ==");
    println!("  open={}", glossary.is_open());
    println!("  focused reference = {}", doc.focused() == Some(proxy_ref));
}
