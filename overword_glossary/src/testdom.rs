// Copyright 2025 the Overword Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal in-memory document for the engine's own tests.
//!
//! Nodes are plain `usize` indices into a flat arena; nothing is ever
//! removed, so handles never go stale. The matcher understands exactly the
//! selector shapes the engine emits: a comma list of single simple selectors
//! (`tag`, `#id`, `.class`, `[attr]`).

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::dom::{Dom, Matcher};

#[derive(Debug, Default)]
struct TestNode {
    tag: String,
    parent: Option<usize>,
    children: Vec<usize>,
    attrs: Vec<(String, String)>,
    classes: Vec<String>,
    text: String,
    visible: bool,
}

#[derive(Debug)]
pub(crate) struct TestDom {
    nodes: Vec<TestNode>,
    focused: Option<usize>,
}

impl TestDom {
    pub(crate) fn new() -> Self {
        let root = TestNode {
            tag: "#document".to_string(),
            visible: true,
            ..Default::default()
        };
        Self {
            nodes: alloc::vec![root],
            focused: None,
        }
    }

    pub(crate) fn build(&mut self, parent: usize, tag: &str) -> usize {
        let id = self.nodes.len();
        self.nodes.push(TestNode {
            tag: tag.to_string(),
            parent: Some(parent),
            visible: true,
            ..Default::default()
        });
        self.nodes[parent].children.push(id);
        id
    }

    pub(crate) fn children(&self, node: usize) -> &[usize] {
        &self.nodes[node].children
    }

    pub(crate) fn text(&self, node: usize) -> &str {
        &self.nodes[node].text
    }

    fn matches_simple(&self, node: usize, selector: &str) -> bool {
        let n = &self.nodes[node];
        let selector = selector.trim();
        if selector == "*" {
            return true;
        }
        if let Some(id) = selector.strip_prefix('#') {
            return n.attrs.iter().any(|(k, v)| k == "id" && v == id);
        }
        if let Some(class) = selector.strip_prefix('.') {
            return n.classes.iter().any(|c| c == class);
        }
        if let Some(rest) = selector.strip_prefix('[') {
            let name = rest
                .trim_end_matches(']')
                .split('=')
                .next()
                .unwrap_or_default();
            return n.attrs.iter().any(|(k, _)| k == name);
        }
        n.tag == selector
    }

    fn collect(&self, start: usize, selector: &str, include_start: bool, out: &mut Vec<usize>) {
        if include_start && Matcher::matches(self, start, selector) {
            out.push(start);
        }
        for &child in &self.nodes[start].children {
            self.collect(child, selector, true, out);
        }
    }
}

impl Matcher for TestDom {
    type Node = usize;

    fn matches(&self, node: usize, selector: &str) -> bool {
        selector.split(',').any(|s| self.matches_simple(node, s))
    }

    fn closest(&self, node: usize, selector: &str) -> Option<usize> {
        let mut cur = Some(node);
        while let Some(c) = cur {
            if Matcher::matches(self, c, selector) {
                return Some(c);
            }
            cur = self.nodes[c].parent;
        }
        None
    }
}

impl Dom for TestDom {
    fn root(&self) -> usize {
        0
    }

    fn parent_of(&self, node: usize) -> Option<usize> {
        self.nodes[node].parent
    }

    fn create_element(&mut self, parent: usize, tag: &str) -> usize {
        self.build(parent, tag)
    }

    fn set_text(&mut self, node: usize, text: &str) {
        self.nodes[node].text = text.to_string();
    }

    fn attr(&self, node: usize, name: &str) -> Option<String> {
        self.nodes[node]
            .attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    fn set_attr(&mut self, node: usize, name: &str, value: &str) {
        let attrs = &mut self.nodes[node].attrs;
        match attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => attrs.push((name.to_string(), value.to_string())),
        }
    }

    fn has_class(&self, node: usize, class: &str) -> bool {
        self.nodes[node].classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, node: usize, class: &str) {
        if !self.has_class(node, class) {
            self.nodes[node].classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, node: usize, class: &str) {
        self.nodes[node].classes.retain(|c| c != class);
    }

    fn set_visible(&mut self, node: usize, visible: bool) {
        self.nodes[node].visible = visible;
    }

    fn is_visible(&self, node: usize) -> bool {
        self.nodes[node].visible
    }

    fn focus(&mut self, node: usize) {
        self.focused = Some(node);
    }

    fn focused(&self) -> Option<usize> {
        self.focused
    }

    fn query_all(&self, selector: &str) -> Vec<usize> {
        let mut out = Vec::new();
        self.collect(0, selector, true, &mut out);
        out
    }

    fn query_under(&self, node: usize, selector: &str) -> Vec<usize> {
        let mut out = Vec::new();
        self.collect(node, selector, false, &mut out);
        out
    }

    fn reorder_children(&mut self, parent: usize, order: &[usize]) {
        let current = self.nodes[parent].children.clone();
        let mut next: Vec<usize> = order
            .iter()
            .copied()
            .filter(|n| current.contains(n))
            .collect();
        for n in current {
            if !next.contains(&n) {
                next.push(n);
            }
        }
        self.nodes[parent].children = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matcher_understands_the_engine_selectors() {
        let mut dom = TestDom::new();
        let div = dom.build(dom.root(), "div");
        dom.set_attr(div, "id", "glossary");
        let span = dom.build(div, "span");
        dom.set_attr(span, "data-term", "cache");
        dom.add_class(span, "term--highlight");

        assert!(Matcher::matches(&dom, div, "#glossary"));
        assert!(Matcher::matches(&dom, span, "[data-term]"));
        assert!(Matcher::matches(&dom, span, ".term--highlight"));
        assert!(Matcher::matches(&dom, span, "a, button, span"));
        assert!(!Matcher::matches(&dom, span, "a, button, input"));
        assert_eq!(Matcher::closest(&dom, span, "#glossary"), Some(div));
        assert_eq!(Matcher::closest(&dom, div, "[data-term]"), None);
    }

    #[test]
    fn reorder_keeps_unnamed_children_after_named() {
        let mut dom = TestDom::new();
        let parent = dom.build(dom.root(), "ul");
        let a = dom.build(parent, "li");
        let b = dom.build(parent, "li");
        let c = dom.build(parent, "li");

        dom.reorder_children(parent, &[c, a]);
        assert_eq!(dom.children(parent), &[c, a, b]);
    }

    #[test]
    fn queries_walk_in_document_order() {
        let mut dom = TestDom::new();
        let a = dom.build(dom.root(), "section");
        let a1 = dom.build(a, "span");
        let b = dom.build(dom.root(), "section");
        let b1 = dom.build(b, "span");
        assert_eq!(dom.query_all("span"), alloc::vec![a1, b1]);
        assert_eq!(dom.query_under(a, "span"), alloc::vec![a1]);
        assert!(dom.query_under(a1, "span").is_empty());
    }
}
