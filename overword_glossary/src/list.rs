// Copyright 2025 the Overword Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The list/filter collaborator: the searchable, sortable rendered term list.
//!
//! The engine consumes this boundary abstractly through [`TermList`]; the
//! coordinator only ever restricts visibility, re-runs the search pass, and
//! reads back the first visible entry. [`StockList`] is the bundled
//! implementation: it never regenerates nodes — filtering and searching only
//! toggle visibility of the rendered items, and sorting only reorders them.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::dom::Dom;
use crate::types::{SortOrder, fold_key};

/// One rendered term entry: the nodes created by `populate` plus the indexed
/// values. The mapping from entry to nodes is established once and never
/// rebuilt.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ListItem<K> {
    /// The list item node.
    pub item: K,
    /// The trigger control labeled with the term.
    pub trigger: K,
    /// The definition panel.
    pub panel: K,
}

/// The values indexed for a rendered entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemValues {
    /// The term as displayed.
    pub term: String,
    /// The case-folded lookup key.
    pub key: String,
}

impl ItemValues {
    /// Index the displayed term.
    pub fn new(term: &str) -> Self {
        Self {
            term: term.to_string(),
            key: fold_key(term),
        }
    }
}

/// Boundary contract for the searchable/sortable list over rendered items.
pub trait TermList<D: Dom> {
    /// Adopt the rendered items. Called once, right after `populate`.
    fn assign(&mut self, dom: &mut D, items: Vec<(ListItem<D::Node>, ItemValues)>);

    /// Reorder entries by term. Existing nodes are reordered, not rebuilt.
    fn sort(&mut self, dom: &mut D, order: SortOrder);

    /// Restrict visible entries to those passing `pred`, or clear the
    /// restriction with `None`.
    fn filter(&mut self, dom: &mut D, pred: Option<&dyn Fn(&ItemValues) -> bool>);

    /// Re-run the free-text search pass with `query` (case-folded substring
    /// match on the term). An empty query passes everything.
    fn search(&mut self, dom: &mut D, query: &str);

    /// Whether a filter restriction is currently in force.
    fn is_filtered(&self) -> bool;

    /// The currently visible entries, in list order.
    fn visible(&self) -> Vec<(ListItem<D::Node>, &ItemValues)>;
}

#[derive(Clone, Debug)]
struct Entry<K> {
    item: ListItem<K>,
    values: ItemValues,
    filter_pass: bool,
    search_pass: bool,
}

/// The bundled [`TermList`] implementation.
///
/// Visibility of an entry is the conjunction of the filter pass and the
/// search pass; both start permissive.
#[derive(Debug)]
pub struct StockList<K> {
    container: K,
    entries: Vec<Entry<K>>,
    filtered: bool,
}

impl<K: Copy + Eq + core::fmt::Debug> StockList<K> {
    /// Build an empty list over its container node.
    pub fn new(container: K) -> Self {
        Self {
            container,
            entries: Vec::new(),
            filtered: false,
        }
    }

    fn apply<D: Dom<Node = K>>(&self, dom: &mut D) {
        for e in &self.entries {
            dom.set_visible(e.item.item, e.filter_pass && e.search_pass);
        }
    }
}

impl<D: Dom> TermList<D> for StockList<D::Node> {
    fn assign(&mut self, dom: &mut D, items: Vec<(ListItem<D::Node>, ItemValues)>) {
        self.entries = items
            .into_iter()
            .map(|(item, values)| Entry {
                item,
                values,
                filter_pass: true,
                search_pass: true,
            })
            .collect();
        self.filtered = false;
        self.apply(dom);
    }

    fn sort(&mut self, dom: &mut D, order: SortOrder) {
        self.entries.sort_by(|a, b| {
            let ord = a.values.key.cmp(&b.values.key);
            match order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            }
        });
        let nodes: Vec<D::Node> = self.entries.iter().map(|e| e.item.item).collect();
        dom.reorder_children(self.container, &nodes);
    }

    fn filter(&mut self, dom: &mut D, pred: Option<&dyn Fn(&ItemValues) -> bool>) {
        match pred {
            Some(pred) => {
                for e in &mut self.entries {
                    e.filter_pass = pred(&e.values);
                }
                self.filtered = true;
            }
            None => {
                for e in &mut self.entries {
                    e.filter_pass = true;
                }
                self.filtered = false;
            }
        }
        self.apply(dom);
    }

    fn search(&mut self, dom: &mut D, query: &str) {
        let folded = fold_key(query);
        for e in &mut self.entries {
            e.search_pass = folded.is_empty() || e.values.key.contains(&folded);
        }
        self.apply(dom);
    }

    fn is_filtered(&self) -> bool {
        self.filtered
    }

    fn visible(&self) -> Vec<(ListItem<D::Node>, &ItemValues)> {
        self.entries
            .iter()
            .filter(|e| e.filter_pass && e.search_pass)
            .map(|e| (e.item, &e.values))
            .collect()
    }
}
