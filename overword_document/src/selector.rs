// Copyright 2025 the Overword Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selector parsing: a small CSS subset sufficient for widget configuration.
//!
//! ## Grammar
//!
//! A selector is a comma-separated list of compound selectors. Each compound
//! selector is an optional type selector (or `*`) followed by any number of
//! simple selectors:
//!
//! - `#id` — id attribute equals `id`.
//! - `.class` — class list contains `class`.
//! - `[attr]` — attribute `attr` is present.
//! - `[attr="value"]` — attribute `attr` equals `value` (quotes optional).
//!
//! Combinators (descendant, child, sibling) are not supported and produce a
//! [`ParseError`]. Matching against nodes is performed by
//! [`Document`](crate::Document); this module only builds the parsed form.
//!
//! ## Example
//!
//! ```
//! use overword_document::Selector;
//!
//! let sel = Selector::parse("a, button, input, [tabindex]").unwrap();
//! assert_eq!(sel.alternatives().len(), 4);
//!
//! assert!(Selector::parse("div p").is_err());
//! ```

use alloc::string::String;
use alloc::vec::Vec;

/// Error produced when a selector string cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The selector (or one alternative in a comma list) was empty.
    #[error("empty selector")]
    Empty,
    /// Whitespace between simple selectors; combinators are not supported.
    #[error("combinators are not supported")]
    Combinator,
    /// An attribute test was opened with `[` but never closed.
    #[error("unclosed attribute selector")]
    UnclosedAttribute,
    /// A simple selector prefix (`#`, `.`) was not followed by a name.
    #[error("expected a name after `{0}`")]
    MissingName(char),
    /// A character that has no meaning in this subset.
    #[error("unexpected character `{0}`")]
    Unexpected(char),
}

/// One attribute test inside a compound selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttrTest {
    /// Attribute name.
    pub name: String,
    /// Required value; `None` means presence only.
    pub value: Option<String>,
}

/// A compound selector: all parts must hold on the same node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Compound {
    /// Type selector; `None` matches any tag (including explicit `*`).
    pub tag: Option<String>,
    /// Required id attribute value.
    pub id: Option<String>,
    /// Required class names.
    pub classes: Vec<String>,
    /// Required attribute tests.
    pub attrs: Vec<AttrTest>,
}

/// A parsed selector: a node matches if any alternative matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<Compound>,
}

impl Selector {
    /// Parse a selector string.
    ///
    /// Whitespace around commas is ignored; whitespace inside a compound
    /// selector is a [`ParseError::Combinator`].
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut alternatives = Vec::new();
        for part in split_alternatives(input) {
            alternatives.push(parse_compound(part.trim())?);
        }
        if alternatives.is_empty() {
            return Err(ParseError::Empty);
        }
        Ok(Self { alternatives })
    }

    /// The parsed alternatives of the comma list.
    pub fn alternatives(&self) -> &[Compound] {
        &self.alternatives
    }
}

/// Split on top-level commas, leaving commas inside `[...]` alone.
fn split_alternatives(input: &str) -> impl Iterator<Item = &str> {
    let mut depth = 0_u32;
    input.split(move |c: char| {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return true,
            _ => {}
        }
        false
    })
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn parse_compound(input: &str) -> Result<Compound, ParseError> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut out = Compound::default();
    let mut chars = input.char_indices().peekable();

    // Optional leading type selector.
    if let Some(&(_, c)) = chars.peek() {
        if c == '*' {
            chars.next();
        } else if is_name_char(c) {
            let start = chars.peek().map(|&(i, _)| i).unwrap_or(0);
            let mut end = start;
            while let Some(&(i, c)) = chars.peek() {
                if is_name_char(c) {
                    end = i + c.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }
            out.tag = Some(String::from(&input[start..end]));
        }
    }

    while let Some((i, c)) = chars.next() {
        match c {
            '#' | '.' => {
                let start = i + c.len_utf8();
                let mut end = start;
                while let Some(&(j, d)) = chars.peek() {
                    if is_name_char(d) {
                        end = j + d.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                if end == start {
                    return Err(ParseError::MissingName(c));
                }
                let name = String::from(&input[start..end]);
                if c == '#' {
                    out.id = Some(name);
                } else {
                    out.classes.push(name);
                }
            }
            '[' => {
                let start = i + 1;
                let mut end = None;
                for (j, d) in chars.by_ref() {
                    if d == ']' {
                        end = Some(j);
                        break;
                    }
                }
                let Some(end) = end else {
                    return Err(ParseError::UnclosedAttribute);
                };
                let body = &input[start..end];
                out.attrs.push(parse_attr_test(body)?);
            }
            c if c.is_whitespace() => return Err(ParseError::Combinator),
            c => return Err(ParseError::Unexpected(c)),
        }
    }

    Ok(out)
}

fn parse_attr_test(body: &str) -> Result<AttrTest, ParseError> {
    let Some((name, value)) = body.split_once('=') else {
        if body.is_empty() {
            return Err(ParseError::MissingName('['));
        }
        return Ok(AttrTest {
            name: String::from(body),
            value: None,
        });
    };
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value);
    Ok(AttrTest {
        name: String::from(name),
        value: Some(String::from(value)),
    })
}
