// Copyright 2025 the Overword Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the engine: entries, configuration, events, listener
//! records, and construction errors.

use alloc::string::String;

/// One glossary word or phrase plus its definition text.
///
/// Entries are supplied in order at construction and owned by the
/// [`Glossary`](crate::glossary::Glossary) instance for its lifetime; the
/// definition may carry markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermEntry {
    /// The term as displayed on its trigger control.
    pub term: String,
    /// Definition text rendered into the entry's panel.
    pub definition: String,
}

impl TermEntry {
    /// Convenience constructor.
    pub fn new(term: &str, definition: &str) -> Self {
        Self {
            term: String::from(term),
            definition: String::from(definition),
        }
    }

    /// The case-folded lookup key for this entry.
    pub fn key(&self) -> String {
        fold_key(&self.term)
    }
}

/// Case-fold a raw term key for lookup. The only normalization performed.
pub fn fold_key(raw: &str) -> String {
    raw.to_lowercase()
}

/// CSS selectors for the anchors the engine binds to.
///
/// The defaults match the conventional glossary markup; construct with
/// struct-update syntax to override individual roles:
///
/// ```
/// use overword_glossary::types::SelectorConfig;
///
/// let sel = SelectorConfig {
///     root: "#definitions".into(),
///     ..Default::default()
/// };
/// assert_eq!(sel.toggle, ".js-glossary-toggle");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Overlay root element.
    pub root: String,
    /// Control that toggles the overlay open/closed.
    pub toggle: String,
    /// Optional close control inside the overlay.
    pub close: String,
    /// List container the entries are rendered into.
    pub list: String,
    /// Search input inside the overlay.
    pub search: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            root: String::from("#glossary"),
            toggle: String::from(".js-glossary-toggle"),
            close: String::from(".js-glossary-close"),
            list: String::from(".js-glossary-list"),
            search: String::from(".js-glossary-search"),
        }
    }
}

/// Class names applied to rendered entries and highlighted references.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassConfig {
    /// Definition panel inside a rendered entry.
    pub definition: String,
    /// Rendered list item.
    pub item: String,
    /// Inline references matching the currently resolved term.
    pub highlight: String,
    /// Trigger control labeled with the term.
    pub term: String,
}

impl Default for ClassConfig {
    fn default() -> Self {
        Self {
            definition: String::from("glossary__definition"),
            item: String::from("glossary__item"),
            highlight: String::from("term--highlight"),
            term: String::from("glossary__term"),
        }
    }
}

/// Key identity for key-release events.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Key {
    /// The activate key.
    Enter,
    /// The dismiss key.
    Escape,
    /// Any other key; never acted on.
    Other,
}

/// A discrete input event delivered to [`Glossary::handle_event`].
///
/// [`Glossary::handle_event`]: crate::glossary::Glossary::handle_event
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EventKind {
    /// Pointer activation.
    Click,
    /// Key release.
    Keyup(Key),
    /// Search input value changed (read back from the input's `value`
    /// attribute, which the host updates before dispatching).
    Input,
}

impl EventKind {
    /// The listener registration type this event matches.
    pub fn event_type(&self) -> EventType {
        match self {
            Self::Click => EventType::Click,
            Self::Keyup(_) => EventType::Keyup,
            Self::Input => EventType::Input,
        }
    }
}

/// Event categories listeners are registered for.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EventType {
    /// Pointer activation.
    Click,
    /// Key release.
    Keyup,
    /// Input value change.
    Input,
}

/// An input event with its target node.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Event<K> {
    /// What happened.
    pub kind: EventKind,
    /// The innermost node the event occurred on.
    pub target: K,
}

impl<K> Event<K> {
    /// Convenience constructor.
    pub fn new(kind: EventKind, target: K) -> Self {
        Self { kind, target }
    }
}

/// The engine handlers a listener can name.
///
/// Handlers are a closed enum rather than boxed callbacks: the listener set
/// stays plain data, and teardown is a drain with nothing left behind.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Handler {
    /// Toggle the overlay open/closed (the toggle control).
    ToggleOverlay,
    /// Close the overlay (the close control).
    CloseOverlay,
    /// Search input changed: clear a stale filter, re-run the search.
    SearchInput,
    /// Document-wide Escape handling.
    EscapeKey,
    /// Document-wide inline term reference activation.
    TermActivation,
    /// Opt-in close-on-outside-click handling.
    OutsideClick,
}

/// One registered listener: a (target, event, handler) triple.
///
/// A record on node `N` fires for events targeting `N` or any descendant,
/// the bubbling contract. The full set is owned by the glossary instance and
/// drained exhaustively on teardown, never partially.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ListenerRecord<K> {
    /// Node the listener is attached to.
    pub target: K,
    /// Event category the listener fires for.
    pub event: EventType,
    /// Engine handler to run.
    pub handler: Handler,
}

/// Sort direction for the rendered list.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SortOrder {
    /// A before Z.
    Ascending,
    /// Z before A.
    Descending,
}

/// Fatal construction errors.
///
/// The engine cannot establish its state machine without its required
/// anchors, so construction fails fast rather than operating on absent
/// nodes. Absent *optional* anchors (the close control) are tolerated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GlossaryError {
    /// A required anchor was not found in the document.
    #[error("required {role} anchor not found for selector `{selector}`")]
    MissingAnchor {
        /// Logical role of the missing anchor (e.g. "overlay root").
        role: &'static str,
        /// The selector that produced no match.
        selector: String,
    },
}
