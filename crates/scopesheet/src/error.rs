//! Error types for stylesheet construction.

use thiserror::Error;

/// Errors that can occur while building a stylesheet.
///
/// All errors are raised synchronously at the point of misuse and propagate
/// out of the builder closures via `?`. There is no retry or partial-result
/// semantics: either the DSL program is well-formed or construction fails
/// with the rule that was violated.
#[derive(Debug, Error)]
pub enum StyleError {
    /// Rule text was written to a selector that ends in a bare descendant
    /// combinator. Such a node has no concrete target yet; only further
    /// selection is legal on it.
    #[error("incomplete selector '{path}': select a target before writing rules")]
    IncompleteSelector {
        /// The offending selector path.
        path: String,
    },

    /// A custom property was referenced that is not defined on the current
    /// selector or any of its ancestors. Definitions on siblings or
    /// descendants are never visible.
    #[error("undefined custom property '--{name}': not defined on this selector or any ancestor")]
    UndefinedReference {
        /// The property name as passed to `var`.
        name: String,
    },

    /// The declaration adapter was given a value that does not serialize to
    /// a key/value object.
    #[error("declarations must serialize to an object, got {kind}")]
    InvalidDeclarations {
        /// The JSON kind the value serialized to.
        kind: &'static str,
    },

    /// Declaration serialization failure.
    #[error("failed to serialize declarations: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for stylesheet operations.
pub type Result<T> = std::result::Result<T, StyleError>;
