// Copyright 2025 the Overword Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability-trait implementations for Overword Document.
//!
//! ## Feature
//!
//! Enable with `document_adapter`.
//!
//! ## Notes
//!
//! Selector strings are parsed per call through the document crate's parser;
//! unparsable selectors match nothing, as the [`Matcher`] contract requires.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use overword_document::{Document, NodeId, Selector};

use crate::dom::{Dom, Matcher};

impl Matcher for Document {
    type Node = NodeId;

    fn matches(&self, node: NodeId, selector: &str) -> bool {
        self.matches_str(node, selector)
    }

    fn closest(&self, node: NodeId, selector: &str) -> Option<NodeId> {
        let selector = Selector::parse(selector).ok()?;
        Document::closest(self, node, &selector)
    }
}

impl Dom for Document {
    fn root(&self) -> NodeId {
        Document::root(self)
    }

    fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.parent(node)
    }

    fn create_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        Document::create_element(self, parent, tag)
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        Document::set_text(self, node, text);
    }

    fn attr(&self, node: NodeId, name: &str) -> Option<String> {
        Document::attr(self, node, name).map(ToString::to_string)
    }

    fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        Document::set_attr(self, node, name, value);
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        Document::has_class(self, node, class)
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        Document::add_class(self, node, class);
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        Document::remove_class(self, node, class);
    }

    fn set_visible(&mut self, node: NodeId, visible: bool) {
        Document::set_visible(self, node, visible);
    }

    fn is_visible(&self, node: NodeId) -> bool {
        Document::is_visible(self, node)
    }

    fn focus(&mut self, node: NodeId) {
        Document::focus(self, node);
    }

    fn focused(&self) -> Option<NodeId> {
        Document::focused(self)
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        match Selector::parse(selector) {
            Ok(selector) => self.query(&selector),
            Err(_) => Vec::new(),
        }
    }

    fn query_under(&self, node: NodeId, selector: &str) -> Vec<NodeId> {
        match Selector::parse(selector) {
            Ok(selector) => Document::query_under(self, node, &selector),
            Err(_) => Vec::new(),
        }
    }

    fn reorder_children(&mut self, parent: NodeId, order: &[NodeId]) {
        Document::reorder_children(self, parent, order);
    }
}
