// Copyright 2025 the Overword Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overword Document: a headless, in-memory document tree.
//!
//! Overword Document is a reusable building block for testing and driving
//! page-level UI engines without a browser.
//!
//! - Represents a hierarchy of elements with tags, attributes, class lists,
//!   text content, and a visibility flag.
//! - Provides CSS-style selector matching (`matches`, `closest`) and
//!   document-order queries (`query`, `query_under`) over a small selector
//!   subset: type, `#id`, `.class`, `[attr]`, `[attr="value"]`, compounds,
//!   and comma lists.
//! - Tracks a single document-wide focus slot.
//!
//! Node handles are generational ([`NodeId`]): holding a handle across
//! removals is safe, and stale handles are inert rather than aliasing new
//! nodes.
//!
//! ## Where this fits
//!
//! Higher layers (such as the Overword glossary engine) are written against
//! abstract document capabilities. This crate is the stock implementation of
//! those capabilities, and doubles as the test bed for engine behavior.
//! It performs no layout, no rendering, and no event delivery of its own.
//!
//! ## Minimal usage
//!
//! ```
//! use overword_document::{Document, Selector};
//!
//! let mut doc = Document::new();
//!
//! let overlay = doc.create_element(doc.root(), "div");
//! doc.set_attr(overlay, "id", "glossary");
//! let button = doc.create_element(overlay, "button");
//! doc.add_class(button, "js-glossary-close");
//!
//! let sel = Selector::parse("#glossary").unwrap();
//! assert_eq!(doc.query(&sel), vec![overlay]);
//! assert_eq!(doc.closest(button, &sel), Some(overlay));
//!
//! doc.focus(button);
//! assert_eq!(doc.focused(), Some(button));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod selector;
mod tree;
mod types;

pub use selector::{AttrTest, Compound, ParseError, Selector};
pub use tree::Document;
pub use types::{NodeFlags, NodeId};
