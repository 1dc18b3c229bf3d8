// Copyright 2025 the Overword Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document capability traits.
//!
//! The engine never names a concrete document type. It is written against
//! two capability traits:
//!
//! - [`Matcher`] — "can this node satisfy a selector predicate". This is the
//!   seam that makes the engine swappable onto a non-DOM test double.
//! - [`Dom`] — the mutation and query surface the engine needs on top of
//!   matching: attributes, classes, text, visibility, focus, element
//!   creation, and scoped queries.
//!
//! The `document_adapter` feature implements both for
//! `overword_document::Document`; the engine's own tests run against an
//! independent double (see `testdom`).
//!
//! Selector strings passed through these traits are ordinary CSS-subset
//! selectors. Implementations must treat unparsable selectors as matching
//! nothing; `matches` and `closest` never panic.

use alloc::string::String;
use alloc::vec::Vec;

/// Selector matching capability over abstract node handles.
pub trait Matcher {
    /// Copyable node handle. Stale handles must be inert, not reused.
    type Node: Copy + Eq + core::fmt::Debug;

    /// True iff `node` is a member of the document-wide result set of
    /// `selector`. No caching; selector sets may change as the tree mutates.
    fn matches(&self, node: Self::Node, selector: &str) -> bool;

    /// Walk the ancestor chain starting at `node` (inclusive) until one
    /// matches `selector`. `None`, never a panic, when nothing matches.
    fn closest(&self, node: Self::Node, selector: &str) -> Option<Self::Node>;
}

/// Document mutation and query capability.
///
/// All methods must tolerate stale handles (mutators no-op, queries skip).
pub trait Dom: Matcher {
    /// The document root; document-wide listeners attach here.
    fn root(&self) -> Self::Node;

    /// Parent of `node`, or `None` at the root or for stale handles.
    fn parent_of(&self, node: Self::Node) -> Option<Self::Node>;

    /// Create an element as the last child of `parent`.
    fn create_element(&mut self, parent: Self::Node, tag: &str) -> Self::Node;

    /// Replace text content.
    fn set_text(&mut self, node: Self::Node, text: &str);

    /// Attribute value, if present.
    fn attr(&self, node: Self::Node, name: &str) -> Option<String>;

    /// Set (or replace) an attribute.
    fn set_attr(&mut self, node: Self::Node, name: &str, value: &str);

    /// Whether the class list contains `class`.
    fn has_class(&self, node: Self::Node, class: &str) -> bool;

    /// Add a class (idempotent).
    fn add_class(&mut self, node: Self::Node, class: &str);

    /// Remove a class if present.
    fn remove_class(&mut self, node: Self::Node, class: &str);

    /// Set or clear the visibility mark used by list filtering.
    fn set_visible(&mut self, node: Self::Node, visible: bool);

    /// Whether the node is marked visible.
    fn is_visible(&self, node: Self::Node) -> bool;

    /// Move input focus to `node`.
    fn focus(&mut self, node: Self::Node);

    /// The currently focused node, if any.
    fn focused(&self) -> Option<Self::Node>;

    /// All nodes matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    /// Descendants of `node` matching `selector`, in document order,
    /// excluding `node` itself.
    fn query_under(&self, node: Self::Node, selector: &str) -> Vec<Self::Node>;

    /// Reorder the children of `parent` to follow `order`; children not
    /// named keep their relative order after the named ones.
    fn reorder_children(&mut self, parent: Self::Node, order: &[Self::Node]);

    /// First match for `selector`, in document order.
    fn query_first(&self, selector: &str) -> Option<Self::Node> {
        self.query_all(selector).first().copied()
    }

    /// True if `ancestor` is `node` or appears on `node`'s parent chain.
    fn is_ancestor_or_self(&self, ancestor: Self::Node, node: Self::Node) -> bool {
        let mut cur = Some(node);
        while let Some(c) = cur {
            if c == ancestor {
                return true;
            }
            cur = self.parent_of(c);
        }
        false
    }
}
