use thiserror::Error;

/// Configuration errors the library reports instead of falling back
/// silently. Missing page elements are deliberately not errors: widget
/// initializers treat an unresolved container as a no-op.
#[derive(Debug, Error)]
pub enum Error {
    /// An effect name other than `show`, `fade` or `slide`.
    #[error("unknown effect {0:?}")]
    UnknownEffect(String),
    /// A placement code outside the twelve recognized ones.
    #[error("unknown placement {0:?}")]
    UnknownPlacement(String),
    /// An easing name other than `linear` or `swing`.
    #[error("unknown easing {0:?}")]
    UnknownEasing(String),
    /// A placeholder hide mode other than `focus` or `change`.
    #[error("unknown placeholder hide mode {0:?}")]
    UnknownHideMode(String),
    /// A selector in a widget configuration failed to parse.
    #[error("invalid selector: {0}")]
    Selector(#[from] dom::SelectorError),
    /// Malformed JSON in a declarative `data-params` attribute.
    #[error("invalid widget parameters: {0}")]
    Params(#[from] serde_json::Error),
}
