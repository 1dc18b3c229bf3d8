// Copyright 2025 the Overword Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tab-reachability control for overlay contents.
//!
//! While the overlay is hidden, its interactive descendants must not be
//! reachable by sequential keyboard navigation, but they stay programmatically
//! focusable. [`suspend`] ranks every focusable descendant out of the tab
//! order (`tabindex="-1"`); [`restore`] ranks the same set back to `0`.
//!
//! Both operations are idempotent and safe on containers with no focusable
//! descendants. They are invoked by the overlay state machine on every
//! open/close transition.

use crate::dom::Dom;

/// Selector describing focusable descendants: interactive controls plus any
/// element carrying an explicit reachability attribute.
pub const FOCUSABLE: &str = "a, button, input, [tabindex]";

/// Rank every focusable descendant of `container` out of the tab order.
pub fn suspend<D: Dom>(dom: &mut D, container: D::Node) {
    for node in dom.query_under(container, FOCUSABLE) {
        dom.set_attr(node, "tabindex", "-1");
    }
}

/// Rank every focusable descendant of `container` first in the tab order.
pub fn restore<D: Dom>(dom: &mut D, container: D::Node) {
    for node in dom.query_under(container, FOCUSABLE) {
        dom.set_attr(node, "tabindex", "0");
    }
}
