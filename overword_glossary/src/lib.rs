// Copyright 2025 the Overword Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overword_glossary --heading-base-level=0

//! Overword Glossary: a headless, `no_std` engine for in-page glossary
//! overlays.
//!
//! ## Overview
//!
//! This crate coordinates the UI state of a glossary overlay — open/closed
//! state, term resolution, highlight placement, focus hand-off, and tab-order
//! suspension — without owning a renderer or an event loop.
//! It is written against two capability traits, [`Matcher`](crate::dom::Matcher)
//! and [`Dom`](crate::dom::Dom); any document that implements them can host a
//! glossary, including non-DOM test doubles.
//!
//! ## Anchors
//!
//! A [`Glossary`](crate::glossary::Glossary) binds to anchors resolved from a
//! [`SelectorConfig`](crate::types::SelectorConfig): the overlay root, the
//! toggle control, the search field, and the list container are required
//! (construction fails with
//! [`GlossaryError::MissingAnchor`](crate::types::GlossaryError) when any is
//! absent); the close control is optional.
//! Entries are rendered into the list container at construction, and every
//! element carrying `data-term` — inline references in the page as well as the
//! rendered triggers — is normalized to a case-folded key and made
//! keyboard-reachable.
//!
//! ## Events
//!
//! The host feeds discrete [`Event`](crate::types::Event)s (click, keyup,
//! input) through [`Glossary::handle_event`](crate::glossary::Glossary::handle_event).
//! Reactions are registered as [`ListenerRecord`](crate::types::ListenerRecord)
//! triples in one instance-owned list; a record fires when its event category
//! matches and its target is the event target or an ancestor of it.
//! Teardown drains that list, so no reaction survives
//! [`Glossary::destroy`](crate::glossary::Glossary::destroy).
//!
//! ## Term resolution
//!
//! Activating a reference (click or Enter) opens the overlay if needed and
//! resolves its key: the search field mirrors the key, the highlight class
//! moves to every reference with that key, the list is restricted to the
//! matching entry, and its definition panel is expanded through the
//! [`Accordion`](crate::accordion::Accordion) boundary. A key with no entry is
//! not an error; it leaves an empty list.
//!
//! ## Collaborators
//!
//! The rendered list and the expand/collapse behavior sit behind the
//! [`TermList`](crate::list::TermList) and
//! [`Accordion`](crate::accordion::Accordion) traits, with stock
//! implementations ([`StockList`](crate::list::StockList),
//! [`StockAccordion`](crate::accordion::StockAccordion)) used by
//! [`Glossary::new`](crate::glossary::Glossary::new).
//! Hosts with their own list or accordion machinery construct via
//! [`Glossary::with_collaborators`](crate::glossary::Glossary::with_collaborators).
//!
//! ```
//! use overword_glossary::types::{ClassConfig, SelectorConfig, TermEntry};
//!
//! let entries = [
//!     TermEntry::new("Cache", "Stores copies of responses."),
//!     TermEntry::new("Proxy", "Forwards requests on behalf of clients."),
//! ];
//! assert_eq!(entries[1].key(), "proxy");
//!
//! let selectors = SelectorConfig::default();
//! let classes = ClassConfig::default();
//! assert_eq!(selectors.root, "#glossary");
//! assert_eq!(classes.highlight, "term--highlight");
//! ```
//!
//! The `document_adapter` feature implements the capability traits for
//! `overword_document::Document`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod accordion;
pub mod adapters;
pub mod dom;
pub mod glossary;
pub mod list;
pub mod overlay;
pub mod tabstops;
pub mod types;

#[cfg(test)]
mod testdom;
