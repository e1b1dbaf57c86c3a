//! Selectors Level 3 — element matching for the widget layer.
//! Spec: <https://www.w3.org/TR/selectors-3/>
//!
//! This crate implements the subset the widget toolkit actually queries
//! with:
//! - Type, class, id, attribute-presence and attribute-equals selectors
//! - Combinators: descendant, child
//! - Comma-separated selector lists
//!
//! Matching is abstracted over [`ElementAdapter`] so the DOM layer stays
//! decoupled from the selector engine.

mod matcher;
mod parser;

pub use matcher::{matches_complex, matches_compound, matches_selector_list};
pub use parser::{parse_complex_selector, parse_selector_list};

use thiserror::Error;

/// Errors produced while parsing selector text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contained no selector at all.
    #[error("empty selector")]
    Empty,
    /// A byte that cannot start or continue a simple selector.
    #[error("unexpected character {found:?} at byte {at}")]
    UnexpectedChar { at: usize, found: char },
    /// An attribute selector was opened with '[' but never closed.
    #[error("unclosed attribute selector")]
    UnclosedAttribute,
    /// A combinator with nothing on one of its sides, e.g. `div >`.
    #[error("dangling combinator")]
    DanglingCombinator,
}

/// An adapter that abstracts DOM access for selector matching.
/// Implement this for your DOM layer.
pub trait ElementAdapter {
    type Handle: Copy + Eq;

    /// Parent element if any.
    fn parent(&self, element: Self::Handle) -> Option<Self::Handle>;

    /// Tag name in ASCII lowercase (per HTML parsing conventions).
    fn tag_name(&self, element: Self::Handle) -> &str;

    /// Returns Some(id) if the element has an id attribute, else None.
    fn element_id(&self, element: Self::Handle) -> Option<&str>;

    /// True if the element has the given class token.
    fn has_class(&self, element: Self::Handle, class: &str) -> bool;

    /// Returns the attribute value if present.
    fn attr(&self, element: Self::Handle, name: &str) -> Option<&str>;
}

/// Simple selectors (subset).
/// Spec: Section 5, 6, 7, 8
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SimpleSelector {
    /// Spec: Section 5 — Type selectors
    Type(String),
    /// Spec: Section 6 — Class selectors
    Class(String),
    /// Spec: Section 7 — ID selectors
    Id(String),
    /// Spec: Section 8 — `[attr]` presence selectors
    AttrExists(String),
    /// Spec: Section 8 — `[attr=value]` selectors
    AttrEquals { name: String, value: String },
    /// Universal selector `*`; matches any element.
    Universal,
}

/// A compound selector is a sequence of simple selectors (no combinators).
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CompoundSelector {
    pub simples: Vec<SimpleSelector>,
}

/// Combinators between compounds.
/// Spec: Section 11
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combinator {
    Descendant,
    Child,
}

/// A complex selector is one or more compounds separated by combinators.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ComplexSelector {
    pub first: CompoundSelector,
    pub rest: Vec<(Combinator, CompoundSelector)>,
}

/// A selector list separated by commas.
/// Spec: Section 4 — Groups of selectors
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SelectorList {
    pub selectors: Vec<ComplexSelector>,
}
