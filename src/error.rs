//! Error types for the kitchen engine.
//!
//! Most engine operations are total and never fail. The few that can are
//! represented by the `CraftError` enum.

use thiserror::Error;

/// Errors that can occur while running a kitchen session.
///
/// # Examples
///
/// ```rust
/// use kitchen_core::CraftError;
///
/// let err = CraftError::UnknownIngredient("truffle".to_string());
/// println!("{}", err); // "Unknown ingredient: truffle"
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CraftError {
    /// A recipe was scored against a request with no attributes.
    ///
    /// The match percentage is a mean over the requested attributes, so an
    /// empty request has no defined match.
    #[error("Request has no attributes to match against")]
    EmptyRequest,

    /// A card index outside the current hand was played.
    #[error("Invalid hand index {index} (hand size {hand_size})")]
    InvalidHandIndex { index: usize, hand_size: usize },

    /// No ingredient with this identifier exists in the catalog.
    #[error("Unknown ingredient: {0}")]
    UnknownIngredient(String),

    /// No prebuilt deck with this name exists.
    #[error("Unknown deck: {0}")]
    UnknownDeck(String),

    /// A configuration failed to parse or validate.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
