// Copyright 2025 the Overword Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay state machine: open/closed state, visibility attributes, focus
//! hand-off, and tab-reachability toggling.
//!
//! ## States
//!
//! `CLOSED` (initial) ⇄ `OPEN`. Transitions re-apply all side effects even
//! when the state does not change: `show` on an open overlay is idempotent
//! by repetition, not by an early-out guard, so the visibility attributes,
//! focus position, and tab stops are always consistent with `is_open`.
//!
//! ## Focus hand-off
//!
//! Opening moves focus into the search field. Closing moves focus to the
//! *selected* node — the inline reference whose activation opened the
//! overlay, or the toggle control when the overlay was opened by other
//! means. The coordinator updates the selection on every activation.

use crate::dom::Dom;
use crate::tabstops;

/// Mutable overlay state: open flag plus the focus-restore target.
///
/// `selected` is a back-reference (not ownership) to whichever control
/// should regain focus when the overlay closes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct OverlayState<K> {
    /// Whether the overlay is open.
    pub is_open: bool,
    /// Node to focus when the overlay closes.
    pub selected: K,
}

/// The overlay and its anchor nodes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Overlay<K> {
    root: K,
    toggle: K,
    search: K,
    state: OverlayState<K>,
}

impl<K: Copy + Eq + core::fmt::Debug> Overlay<K> {
    /// Build a closed overlay over resolved anchor nodes.
    ///
    /// The initial selection is the toggle control.
    pub fn new(root: K, toggle: K, search: K) -> Self {
        Self {
            root,
            toggle,
            search,
            state: OverlayState {
                is_open: false,
                selected: toggle,
            },
        }
    }

    /// The overlay root node.
    pub fn root(&self) -> K {
        self.root
    }

    /// The toggle control.
    pub fn toggle_control(&self) -> K {
        self.toggle
    }

    /// The search input.
    pub fn search_field(&self) -> K {
        self.search
    }

    /// Whether the overlay is open.
    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// The node that regains focus on close.
    pub fn selected(&self) -> K {
        self.state.selected
    }

    /// Point the close-time focus hand-off at `node`.
    pub fn set_selected(&mut self, node: K) {
        self.state.selected = node;
    }

    /// Open the overlay.
    ///
    /// Marks the root visible and the toggle expanded, focuses the search
    /// field, and restores tab-reachability of the overlay subtree.
    pub fn show<D: Dom<Node = K>>(&mut self, dom: &mut D) {
        dom.set_attr(self.root, "aria-hidden", "false");
        dom.set_attr(self.toggle, "aria-expanded", "true");
        dom.focus(self.search);
        self.state.is_open = true;
        tabstops::restore(dom, self.root);
        tracing::debug!("overlay shown");
    }

    /// Close the overlay.
    ///
    /// Marks the root hidden and the toggle collapsed, hands focus to the
    /// selected node, and suspends tab-reachability of the overlay subtree.
    pub fn hide<D: Dom<Node = K>>(&mut self, dom: &mut D) {
        dom.set_attr(self.root, "aria-hidden", "true");
        dom.set_attr(self.toggle, "aria-expanded", "false");
        dom.focus(self.state.selected);
        self.state.is_open = false;
        tabstops::suspend(dom, self.root);
        tracing::debug!(selected = ?self.state.selected, "overlay hidden");
    }

    /// Close if open, open if closed.
    pub fn toggle<D: Dom<Node = K>>(&mut self, dom: &mut D) {
        if self.state.is_open {
            self.hide(dom);
        } else {
            self.show(dom);
        }
    }
}
