// Copyright 2025 the Overword Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The glossary coordinator: construction, term resolution, event routing,
//! and teardown.
//!
//! A [`Glossary`] binds to five anchors in the host document (overlay root,
//! toggle control, search field, list container, and an optional close
//! control), renders its entries into the list, links up inline references
//! carrying `data-term`, and from then on reacts to discrete input events fed
//! through [`Glossary::handle_event`].
//!
//! ## Listener ownership
//!
//! Every reaction is a [`ListenerRecord`] in a single list owned by the
//! instance. Dispatch walks that list; teardown drains it. There is no
//! registration outside the list, so [`Glossary::destroy`] leaves nothing
//! behind by construction.
//!
//! ## Term resolution
//!
//! [`Glossary::resolve`] case-folds the requested key and then, in order:
//! mirrors the key into the search field, moves the highlight class onto the
//! inline references whose key matches (rendered triggers inside the overlay
//! are never highlighted), restricts the list to entries whose key matches
//! exactly, clears the free-text search pass, and expands the first visible
//! entry. A key with no entry leaves an empty list
//! and logs at debug level; it is not an error.

use alloc::vec::Vec;

use crate::accordion::{Accordion, StockAccordion};
use crate::dom::Dom;
use crate::list::{ItemValues, ListItem, StockList, TermList};
use crate::overlay::Overlay;
use crate::tabstops;
use crate::types::{
    ClassConfig, Event, EventKind, EventType, GlossaryError, Handler, Key, ListenerRecord,
    SelectorConfig, SortOrder, TermEntry, fold_key,
};

/// Selector for inline term references (and rendered triggers, which carry
/// the same attribute).
const TERM_REF: &str = "[data-term]";

/// One glossary instance over one document.
///
/// Generic over the document capability `D` and, for hosts that bring their
/// own list or accordion behavior, the two collaborator boundaries.
pub struct Glossary<
    D: Dom,
    L = StockList<<D as crate::dom::Matcher>::Node>,
    A = StockAccordion<<D as crate::dom::Matcher>::Node>,
> {
    doc_root: D::Node,
    overlay: Overlay<D::Node>,
    close: Option<D::Node>,
    entries: Vec<TermEntry>,
    list: L,
    accordion: A,
    listeners: Vec<ListenerRecord<D::Node>>,
    classes: ClassConfig,
    destroyed: bool,
}

impl<D: Dom, L, A> core::fmt::Debug for Glossary<D, L, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Glossary")
            .field("open", &self.overlay.is_open())
            .field("listeners", &self.listeners.len())
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}

impl<D: Dom> Glossary<D> {
    /// Bind a glossary with the stock list and accordion collaborators.
    ///
    /// # Errors
    ///
    /// [`GlossaryError::MissingAnchor`] when the overlay root, toggle
    /// control, search field, or list container cannot be found. The close
    /// control is optional.
    pub fn new(
        dom: &mut D,
        entries: &[TermEntry],
        selectors: &SelectorConfig,
        classes: ClassConfig,
    ) -> Result<Self, GlossaryError> {
        Self::with_collaborators(
            dom,
            entries,
            selectors,
            classes,
            StockList::new,
            StockAccordion::new(),
        )
    }
}

impl<D: Dom, L: TermList<D>, A: Accordion<D>> Glossary<D, L, A> {
    /// Bind a glossary with caller-supplied collaborators.
    ///
    /// `make_list` receives the resolved list container; the accordion is
    /// prepared over the rendered entries before this returns.
    pub fn with_collaborators(
        dom: &mut D,
        entries: &[TermEntry],
        selectors: &SelectorConfig,
        classes: ClassConfig,
        make_list: impl FnOnce(D::Node) -> L,
        mut accordion: A,
    ) -> Result<Self, GlossaryError> {
        let doc_root = dom.root();
        let root = dom
            .query_first(&selectors.root)
            .ok_or_else(|| GlossaryError::MissingAnchor {
                role: "overlay root",
                selector: selectors.root.clone(),
            })?;
        let toggle = dom
            .query_first(&selectors.toggle)
            .ok_or_else(|| GlossaryError::MissingAnchor {
                role: "toggle control",
                selector: selectors.toggle.clone(),
            })?;
        let search = dom
            .query_under(root, &selectors.search)
            .first()
            .copied()
            .ok_or_else(|| GlossaryError::MissingAnchor {
                role: "search field",
                selector: selectors.search.clone(),
            })?;
        let list_container = dom
            .query_under(root, &selectors.list)
            .first()
            .copied()
            .ok_or_else(|| GlossaryError::MissingAnchor {
                role: "list container",
                selector: selectors.list.clone(),
            })?;
        let close = dom.query_under(root, &selectors.close).first().copied();

        // Inline references first: the rendered triggers added by `populate`
        // carry their own folded keys and must not get the reference
        // annotation.
        Self::link_terms(dom);

        let rendered = Self::populate(dom, list_container, entries, &classes);
        let items: Vec<ListItem<D::Node>> = rendered.iter().map(|(item, _)| *item).collect();
        let mut list = make_list(list_container);
        list.assign(dom, rendered);
        list.sort(dom, SortOrder::Ascending);
        accordion.prepare(dom, &items);

        // The overlay starts closed: hidden, collapsed, unreachable by tab.
        dom.set_attr(root, "aria-hidden", "true");
        dom.set_attr(toggle, "aria-expanded", "false");
        tabstops::suspend(dom, root);

        let mut listeners = Vec::new();
        Self::add_listener(
            &mut listeners,
            Some(toggle),
            EventType::Click,
            Handler::ToggleOverlay,
        );
        Self::add_listener(&mut listeners, close, EventType::Click, Handler::CloseOverlay);
        Self::add_listener(
            &mut listeners,
            Some(search),
            EventType::Input,
            Handler::SearchInput,
        );
        Self::add_listener(
            &mut listeners,
            Some(doc_root),
            EventType::Keyup,
            Handler::EscapeKey,
        );
        Self::add_listener(
            &mut listeners,
            Some(doc_root),
            EventType::Click,
            Handler::TermActivation,
        );
        Self::add_listener(
            &mut listeners,
            Some(doc_root),
            EventType::Keyup,
            Handler::TermActivation,
        );

        tracing::debug!(entries = entries.len(), "glossary initialized");

        Ok(Self {
            doc_root,
            overlay: Overlay::new(root, toggle, search),
            close,
            entries: entries.to_vec(),
            list,
            accordion,
            listeners,
            classes,
            destroyed: false,
        })
    }

    /// Record a listener. An absent target (an optional anchor the document
    /// does not provide) records nothing.
    fn add_listener(
        listeners: &mut Vec<ListenerRecord<D::Node>>,
        target: Option<D::Node>,
        event: EventType,
        handler: Handler,
    ) {
        if let Some(target) = target {
            listeners.push(ListenerRecord {
                target,
                event,
                handler,
            });
        }
    }

    /// Render the entries into the list container.
    ///
    /// Triggers carry the case-folded key as `data-term`, so activating a
    /// trigger goes through the same resolution path as an inline reference.
    fn populate(
        dom: &mut D,
        list_container: D::Node,
        entries: &[TermEntry],
        classes: &ClassConfig,
    ) -> Vec<(ListItem<D::Node>, ItemValues)> {
        let mut rendered = Vec::with_capacity(entries.len());
        for entry in entries {
            let item = dom.create_element(list_container, "li");
            dom.add_class(item, &classes.item);
            let trigger = dom.create_element(item, "button");
            dom.add_class(trigger, &classes.term);
            dom.set_text(trigger, &entry.term);
            dom.set_attr(trigger, "data-term", &entry.key());
            let panel = dom.create_element(item, "div");
            dom.add_class(panel, &classes.definition);
            dom.set_text(panel, &entry.definition);
            rendered.push((
                ListItem {
                    item,
                    trigger,
                    panel,
                },
                ItemValues::new(&entry.term),
            ));
        }
        rendered
    }

    /// Normalize every `data-term` reference in the document: case-fold the
    /// key in place, make the reference keyboard-reachable, and annotate it
    /// for assistive technology.
    fn link_terms(dom: &mut D) {
        for node in dom.query_all(TERM_REF) {
            if let Some(raw) = dom.attr(node, "data-term") {
                dom.set_attr(node, "data-term", &fold_key(&raw));
            }
            dom.set_attr(node, "tabindex", "0");
            dom.set_attr(node, "title", "Click to define");
        }
    }

    /// Whether the overlay is open.
    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    /// Whether [`Glossary::destroy`] has run.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// The registered listeners, in registration order.
    pub fn listeners(&self) -> &[ListenerRecord<D::Node>] {
        &self.listeners
    }

    /// The entries this instance was loaded with, in supplied order.
    pub fn entries(&self) -> &[TermEntry] {
        &self.entries
    }

    /// The optional close control, when the document provides one.
    pub fn close_control(&self) -> Option<D::Node> {
        self.close
    }

    /// Open the overlay.
    pub fn show(&mut self, dom: &mut D) {
        self.overlay.show(dom);
    }

    /// Close the overlay.
    pub fn hide(&mut self, dom: &mut D) {
        self.overlay.hide(dom);
    }

    /// Reorder the rendered list by term.
    pub fn sort(&mut self, dom: &mut D, order: SortOrder) {
        self.list.sort(dom, order);
    }

    /// Opt in to (or back out of) closing the overlay on clicks outside it.
    ///
    /// Clicks on the toggle control and on term references never count as
    /// outside; those targets have their own reactions.
    pub fn set_close_on_outside_click(&mut self, enabled: bool) {
        if enabled {
            if !self
                .listeners
                .iter()
                .any(|r| r.handler == Handler::OutsideClick)
            {
                self.listeners.push(ListenerRecord {
                    target: self.doc_root,
                    event: EventType::Click,
                    handler: Handler::OutsideClick,
                });
            }
        } else {
            self.listeners.retain(|r| r.handler != Handler::OutsideClick);
        }
    }

    /// Deliver one input event.
    ///
    /// A listener fires when its event category matches and its target is
    /// the event target or one of its ancestors. Matching handlers run in
    /// registration order; after teardown this is a no-op.
    pub fn handle_event(&mut self, dom: &mut D, event: Event<D::Node>) {
        if self.destroyed {
            return;
        }
        let ty = event.kind.event_type();
        let matched: Vec<Handler> = self
            .listeners
            .iter()
            .filter(|r| r.event == ty && dom.is_ancestor_or_self(r.target, event.target))
            .map(|r| r.handler)
            .collect();
        for handler in matched {
            match handler {
                Handler::ToggleOverlay => self.on_toggle(dom),
                Handler::CloseOverlay => self.overlay.hide(dom),
                Handler::SearchInput => self.on_search_input(dom),
                Handler::EscapeKey => self.on_escape(dom, event),
                Handler::TermActivation => self.on_term_activation(dom, event),
                Handler::OutsideClick => self.on_outside_click(dom, event),
            }
        }
    }

    /// Resolve `key` to its entry: mirror it into the search field, move the
    /// highlight, restrict the list, and expand the matching entry.
    pub fn resolve(&mut self, dom: &mut D, key: &str) {
        let folded = fold_key(key);
        dom.set_attr(self.overlay.search_field(), "value", &folded);

        // Only inline references are highlighted; the rendered triggers
        // inside the overlay carry `data-term` too and are skipped.
        for node in dom.query_all(TERM_REF) {
            dom.remove_class(node, &self.classes.highlight);
            if !dom.is_ancestor_or_self(self.overlay.root(), node)
                && dom.attr(node, "data-term").as_deref() == Some(folded.as_str())
            {
                dom.add_class(node, &self.classes.highlight);
            }
        }

        self.list
            .filter(dom, Some(&|v: &ItemValues| v.key == folded));
        self.list.search(dom, "");

        let first = self.list.visible().first().map(|(item, _)| item.trigger);
        match first {
            Some(trigger) => {
                self.accordion.expand(dom, trigger);
                tracing::debug!(key = %folded, "term resolved");
            }
            None => tracing::debug!(key = %folded, "no glossary entry for key"),
        }
    }

    /// Tear the instance down: destroy the accordion, clear highlights, and
    /// drain the listener list. Subsequent calls are no-ops.
    pub fn destroy(&mut self, dom: &mut D) {
        if self.destroyed {
            return;
        }
        self.accordion.destroy(dom);
        for node in dom.query_all(TERM_REF) {
            dom.remove_class(node, &self.classes.highlight);
        }
        self.listeners.clear();
        self.destroyed = true;
        tracing::debug!("glossary destroyed");
    }

    fn on_toggle(&mut self, dom: &mut D) {
        // Opened from the toggle: focus returns there on close.
        self.overlay.set_selected(self.overlay.toggle_control());
        self.overlay.toggle(dom);
    }

    fn on_search_input(&mut self, dom: &mut D) {
        let query = dom
            .attr(self.overlay.search_field(), "value")
            .unwrap_or_default();
        if self.list.is_filtered() {
            self.list.filter(dom, None);
            for node in dom.query_all(TERM_REF) {
                dom.remove_class(node, &self.classes.highlight);
            }
        }
        self.list.search(dom, &query);
    }

    fn on_escape(&mut self, dom: &mut D, event: Event<D::Node>) {
        if event.kind == EventKind::Keyup(Key::Escape) && self.overlay.is_open() {
            self.overlay.hide(dom);
        }
    }

    fn on_term_activation(&mut self, dom: &mut D, event: Event<D::Node>) {
        if let EventKind::Keyup(key) = event.kind
            && key != Key::Enter
        {
            return;
        }
        let Some(reference) = dom.closest(event.target, TERM_REF) else {
            // Activation elsewhere: focus should land on the toggle the next
            // time the overlay closes.
            self.overlay.set_selected(self.overlay.toggle_control());
            return;
        };
        let Some(key) = dom.attr(reference, "data-term") else {
            return;
        };
        self.overlay.set_selected(reference);
        // Shown on every activation, not just the first: an open overlay
        // still needs focus moved back into the search field.
        self.overlay.show(dom);
        self.resolve(dom, &key);
    }

    fn on_outside_click(&mut self, dom: &mut D, event: Event<D::Node>) {
        if !self.overlay.is_open() {
            return;
        }
        if dom.is_ancestor_or_self(self.overlay.root(), event.target)
            || dom.is_ancestor_or_self(self.overlay.toggle_control(), event.target)
            || dom.closest(event.target, TERM_REF).is_some()
        {
            return;
        }
        self.overlay.hide(dom);
    }
}
