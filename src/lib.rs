//! # kitchen_core - Attribute, Effect and Matching Engine for a Cooking Card Game
//!
//! The rules engine behind a cooking card game:
//! - **Bounded attributes**: every dish has Richness, Spiciness and Sweetness
//!   in `[-10, 10]`
//! - **Ordered effects**: ingredients apply their effects in sequence, with
//!   special effects that reshape the next direct value
//! - **Nonlinear scoring**: a dish is compared with a customer request and
//!   scored on an exponential curve
//!
//! Rendering, input and audio live in the host; this crate is a plain,
//! synchronous, in-memory library.
//!
//! ## Core Concepts
//!
//! ### Effect Pipeline
//!
//! ```text
//! [Ingredient] → [Effect...] → [special-effect queue] → [Attribute]
//! ```
//!
//! 1. **Basic** effects add a value to an attribute, after passing it through
//!    every queued special effect
//! 2. **Balance** effects pull an attribute toward zero
//! 3. **Amplify** / **Neutralize** queue on the recipe and transform the next
//!    basic value (double it / drop it if negative)
//!
//! A direct effect consumes the queued specials; they are flushed before the
//! ingredient finishes or before the next special effect queues.
//!
//! ### Scoring
//!
//! Each requested attribute matches at `100 - |diff| / 12 * 100` percent.
//! The rounded mean is the match percentage, and the score is
//! `round(exp((match / 100 - 1) * 4) * 100)`.
//!
//! ## Example
//!
//! ```rust
//! use kitchen_core::*;
//!
//! let mut recipe = Recipe::new();
//! recipe.add_ingredient(Ingredient::new(
//!     "Chili Oil",
//!     vec![Effect::Amplify, Effect::basic("Spiciness", 3)],
//! ));
//! recipe.add_ingredient(Ingredient::new("Chili", vec![Effect::basic("Spiciness", 2)]));
//! assert_eq!(recipe.value("Spiciness"), Some(8));
//!
//! let request = Request::create(0, 8, 0);
//! let result = recipe.compare_with_request(&request).unwrap();
//! assert_eq!(result.match_percentage, 100);
//! assert_eq!(result.score, 100);
//! ```
//!
//! ## Modules
//!
//! - [`attribute_id`] - Attribute identifier type and opposite names
//! - [`attribute`] - Bounded attributes and attribute sets
//! - [`effect`] - Effects and special effects
//! - [`ingredient`] - Ingredients and the queue-flush rule
//! - [`recipe`] - The dish under construction
//! - [`request`] - Customer requests
//! - [`matching`] - Match and score functions
//! - [`satisfaction`] - Customer reactions
//! - [`deck`] - Ingredient suppliers
//! - [`catalog`] - Ingredient catalog and prebuilt decks
//! - [`progression`] - Floors and customers
//! - [`session`] - A player's game session
//! - [`config`] - Game configuration
//! - [`error`] - Error types

pub mod attribute;
pub mod attribute_id;
pub mod catalog;
pub mod config;
pub mod deck;
pub mod effect;
pub mod error;
pub mod ingredient;
pub mod matching;
pub mod progression;
pub mod recipe;
pub mod request;
pub mod satisfaction;
pub mod session;

// Re-export main types for convenience
pub use attribute::{Attribute, AttributeSet, ATTRIBUTE_MAX, ATTRIBUTE_MIN};
pub use attribute_id::AttributeId;
pub use config::GameConfig;
pub use error::CraftError;
pub use recipe::Recipe;
pub use request::{Intensity, Request};

// Re-export effects and ingredients
pub use effect::{Effect, SpecialEffect};
pub use ingredient::Ingredient;

// Re-export scoring types
pub use matching::{AttributeMatch, MatchResult, MAX_DIFF, SCORE_CURVE};
pub use satisfaction::SatisfactionLevel;

// Re-export game flow types
pub use catalog::IngredientCatalog;
pub use deck::{Deck, IngredientSupplier};
pub use progression::{FloorData, Progression, ProgressionEvent};
pub use session::{GameSession, OrderOutcome};
