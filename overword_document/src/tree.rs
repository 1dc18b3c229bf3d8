// Copyright 2025 the Overword Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core document implementation: structure, mutation, selector queries.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::selector::{Compound, Selector};
use crate::types::{NodeFlags, NodeId};

#[derive(Clone, Debug)]
pub(crate) struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    tag: String,
    attrs: Vec<(String, String)>,
    classes: Vec<String>,
    text: String,
    flags: NodeFlags,
}

impl Node {
    fn new(generation: u32, tag: &str) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            tag: tag.to_string(),
            attrs: Vec::new(),
            classes: Vec::new(),
            text: String::new(),
            flags: NodeFlags::default(),
        }
    }
}

/// An in-memory document tree.
///
/// Owns a hierarchy of elements with tags, attributes, class lists, text, and
/// a [`NodeFlags::VISIBLE`] flag, plus a single document-wide focus slot.
/// A root element (tag `body`) exists from construction and cannot be removed.
///
/// Selector queries return nodes in document order (pre-order traversal).
/// All operations taking a [`NodeId`] tolerate stale ids: mutators become
/// no-ops and queries skip them.
pub struct Document {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    root: NodeId,
    focused: Option<NodeId>,
}

impl core::fmt::Debug for Document {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Document")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document containing only the root element.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            root: NodeId::new(0, 0),
            focused: None,
        };
        doc.root = doc.alloc("body");
        doc
    }

    /// The root element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Create a new element as the last child of `parent`.
    ///
    /// If `parent` is stale, the element is attached to the root instead.
    pub fn create_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = self.alloc(tag);
        let parent = if self.is_alive(parent) {
            parent
        } else {
            self.root
        };
        self.node_mut(parent).children.push(id);
        self.node_mut(id).parent = Some(parent);
        id
    }

    /// Remove an element and its subtree. Removing the root is a no-op.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) || id == self.root {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.node_mut(parent).children.retain(|c| *c != id);
        }
        self.remove_subtree(id);
        if let Some(f) = self.focused
            && !self.is_alive(f)
        {
            self.focused = None;
        }
    }

    fn remove_subtree(&mut self, id: NodeId) {
        let children = self.node(id).children.clone();
        for child in children {
            self.remove_subtree(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Returns true if `id` refers to a live node.
    ///
    /// A `NodeId` is live if its slot exists and its generation matches the
    /// current generation stored in that slot. See [`NodeId`] for semantics.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.1)
            .unwrap_or(false)
    }

    /// Parent of a node, or `None` for the root and stale ids.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| n.parent)
    }

    /// Children of a node in order; empty for stale ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node_opt(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Tag name, or `None` for stale ids.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.node_opt(id).map(|n| n.tag.as_str())
    }

    /// Attribute value.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node_opt(id)?
            .attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set (or replace) an attribute.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        let Some(n) = self.node_opt_mut(id) else {
            return;
        };
        if let Some(slot) = n.attrs.iter_mut().find(|(k, _)| k == name) {
            slot.1 = value.to_string();
        } else {
            n.attrs.push((name.to_string(), value.to_string()));
        }
    }

    /// Remove an attribute if present.
    pub fn remove_attr(&mut self, id: NodeId, name: &str) {
        if let Some(n) = self.node_opt_mut(id) {
            n.attrs.retain(|(k, _)| k != name);
        }
    }

    /// Whether the class list contains `class`.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node_opt(id)
            .map(|n| n.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Add a class (no duplicates).
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if self.has_class(id, class) {
            return;
        }
        if let Some(n) = self.node_opt_mut(id) {
            n.classes.push(class.to_string());
        }
    }

    /// Remove a class if present.
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(n) = self.node_opt_mut(id) {
            n.classes.retain(|c| c != class);
        }
    }

    /// Text content.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.node_opt(id).map(|n| n.text.as_str())
    }

    /// Replace text content.
    pub fn set_text(&mut self, id: NodeId, text: &str) {
        if let Some(n) = self.node_opt_mut(id) {
            n.text = text.to_string();
        }
    }

    /// Node flags; `None` for stale ids.
    pub fn flags(&self, id: NodeId) -> Option<NodeFlags> {
        self.node_opt(id).map(|n| n.flags)
    }

    /// Replace node flags.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        if let Some(n) = self.node_opt_mut(id) {
            n.flags = flags;
        }
    }

    /// Whether the node is marked visible.
    pub fn is_visible(&self, id: NodeId) -> bool {
        self.node_opt(id)
            .map(|n| n.flags.contains(NodeFlags::VISIBLE))
            .unwrap_or(false)
    }

    /// Set or clear the [`NodeFlags::VISIBLE`] flag.
    pub fn set_visible(&mut self, id: NodeId, visible: bool) {
        if let Some(n) = self.node_opt_mut(id) {
            n.flags.set(NodeFlags::VISIBLE, visible);
        }
    }

    /// Move input focus to a node. Stale ids are ignored.
    pub fn focus(&mut self, id: NodeId) {
        if self.is_alive(id) {
            self.focused = Some(id);
        }
    }

    /// Clear input focus.
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// The currently focused node, if any.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Reorder the children of `parent` to follow `order`.
    ///
    /// Ids in `order` that are current children are placed first, in the given
    /// sequence; remaining children keep their relative order after them.
    pub fn reorder_children(&mut self, parent: NodeId, order: &[NodeId]) {
        if !self.is_alive(parent) {
            return;
        }
        let old = self.node(parent).children.clone();
        let mut new: Vec<NodeId> = order.iter().copied().filter(|c| old.contains(c)).collect();
        for c in old {
            if !new.contains(&c) {
                new.push(c);
            }
        }
        self.node_mut(parent).children = new;
    }

    // --- selector queries ---

    /// Whether a node matches a parsed selector.
    pub fn matches(&self, id: NodeId, selector: &Selector) -> bool {
        self.is_alive(id)
            && selector
                .alternatives()
                .iter()
                .any(|c| self.matches_compound(id, c))
    }

    /// Convenience form of [`Document::matches`] taking a selector string.
    ///
    /// Unparsable selectors match nothing; this never panics.
    pub fn matches_str(&self, id: NodeId, selector: &str) -> bool {
        Selector::parse(selector)
            .map(|s| self.matches(id, &s))
            .unwrap_or(false)
    }

    /// Nearest ancestor (inclusive of `id` itself) matching the selector.
    pub fn closest(&self, id: NodeId, selector: &Selector) -> Option<NodeId> {
        let mut cur = if self.is_alive(id) { Some(id) } else { None };
        while let Some(c) = cur {
            if self.matches(c, selector) {
                return Some(c);
            }
            cur = self.parent(c);
        }
        None
    }

    /// All nodes matching the selector, in document order (root included).
    pub fn query(&self, selector: &Selector) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_matches(self.root, selector, true, &mut out);
        out
    }

    /// Descendants of `node` matching the selector, in document order.
    ///
    /// The start node itself is excluded, mirroring scoped element queries.
    pub fn query_under(&self, node: NodeId, selector: &Selector) -> Vec<NodeId> {
        let mut out = Vec::new();
        if self.is_alive(node) {
            self.collect_matches(node, selector, false, &mut out);
        }
        out
    }

    fn collect_matches(
        &self,
        id: NodeId,
        selector: &Selector,
        include_self: bool,
        out: &mut Vec<NodeId>,
    ) {
        if include_self && self.matches(id, selector) {
            out.push(id);
        }
        for child in self.node(id).children.clone() {
            self.collect_matches(child, selector, true, out);
        }
    }

    fn matches_compound(&self, id: NodeId, compound: &Compound) -> bool {
        let n = self.node(id);
        if let Some(tag) = &compound.tag
            && n.tag != *tag
        {
            return false;
        }
        if let Some(want) = &compound.id
            && self.attr(id, "id") != Some(want.as_str())
        {
            return false;
        }
        if !compound.classes.iter().all(|c| n.classes.contains(c)) {
            return false;
        }
        compound.attrs.iter().all(|t| match &t.value {
            Some(v) => self.attr(id, &t.name) == Some(v.as_str()),
            None => self.attr(id, &t.name).is_some(),
        })
    }

    // --- internals ---

    fn alloc(&mut self, tag: &str) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, tag));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, tag)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        NodeId::new(idx, generation)
    }

    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }
}
