// Copyright 2025 the Overword Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The accordion collaborator: one expanded definition panel at a time.
//!
//! The engine consumes the boundary through [`Accordion`]; the contract is
//! that exactly one entry is expanded at a time and expanding a new entry
//! collapses the previous one. [`StockAccordion`] is the bundled
//! implementation, driving `aria-expanded` on triggers and visibility on
//! panels.

use alloc::vec::Vec;

use crate::dom::Dom;
use crate::list::ListItem;

/// Boundary contract for the expand/collapse behavior of rendered entries.
pub trait Accordion<D: Dom> {
    /// Collapse every rendered entry; called once at construction.
    fn prepare(&mut self, dom: &mut D, items: &[ListItem<D::Node>]);

    /// Expand the entry owning `trigger`, collapsing any previous one.
    fn expand(&mut self, dom: &mut D, trigger: D::Node);

    /// Release resources. Subsequent calls are no-ops.
    fn destroy(&mut self, dom: &mut D);
}

/// The bundled [`Accordion`] implementation.
#[derive(Clone, Debug)]
pub struct StockAccordion<K> {
    items: Vec<ListItem<K>>,
    expanded: Option<ListItem<K>>,
    destroyed: bool,
}

impl<K: Copy + Eq + core::fmt::Debug> StockAccordion<K> {
    /// Build an accordion with no entries yet.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            expanded: None,
            destroyed: false,
        }
    }

    /// The currently expanded entry, if any.
    pub fn expanded(&self) -> Option<ListItem<K>> {
        self.expanded
    }

    /// Whether [`Accordion::destroy`] has run.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn collapse<D: Dom<Node = K>>(dom: &mut D, entry: &ListItem<K>) {
        dom.set_attr(entry.trigger, "aria-expanded", "false");
        dom.set_visible(entry.panel, false);
    }
}

impl<K: Copy + Eq + core::fmt::Debug> Default for StockAccordion<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dom> Accordion<D> for StockAccordion<D::Node> {
    fn prepare(&mut self, dom: &mut D, items: &[ListItem<D::Node>]) {
        self.items = items.to_vec();
        self.expanded = None;
        for entry in &self.items {
            Self::collapse(dom, entry);
        }
    }

    fn expand(&mut self, dom: &mut D, trigger: D::Node) {
        let Some(entry) = self.items.iter().copied().find(|i| i.trigger == trigger) else {
            return;
        };
        if let Some(prev) = self.expanded.take()
            && prev.trigger != trigger
        {
            Self::collapse(dom, &prev);
        }
        dom.set_attr(entry.trigger, "aria-expanded", "true");
        dom.set_visible(entry.panel, true);
        self.expanded = Some(entry);
    }

    fn destroy(&mut self, dom: &mut D) {
        if self.destroyed {
            return;
        }
        for entry in &self.items {
            Self::collapse(dom, entry);
        }
        self.expanded = None;
        self.items.clear();
        self.destroyed = true;
    }
}
