//! Deck module.
//!
//! The engine only needs something that hands out ingredients and takes
//! them back. `IngredientSupplier` is that seam; `Deck` is the standard
//! draw-pile/discard-pile implementation.

use crate::ingredient::Ingredient;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, warn};

/// Source of ingredient cards for a session.
///
/// `draw` returns `None` when nothing is left. Callers decide whether that
/// matters.
pub trait IngredientSupplier {
    fn draw(&mut self) -> Option<Ingredient>;

    fn return_card(&mut self, ingredient: Ingredient);

    /// Cards left to draw before a reshuffle.
    fn size(&self) -> usize;
}

/// A shuffled draw pile with a discard pile.
///
/// When the draw pile runs out the discard pile is shuffled back in.
///
/// # Examples
///
/// ```rust
/// use kitchen_core::{Deck, Effect, Ingredient, IngredientSupplier};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let card = Ingredient::new("Miso", vec![Effect::basic("Richness", 2)]);
/// let mut deck = Deck::with_rng(vec![card], StdRng::seed_from_u64(1));
///
/// let drawn = deck.draw().unwrap();
/// assert!(deck.draw().is_none());
///
/// deck.return_card(drawn);
/// assert!(deck.draw().is_some()); // reshuffled from discard
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    draw_pile: Vec<Ingredient>,
    discard: Vec<Ingredient>,
    rng: StdRng,
}

impl Deck {
    /// Build a deck shuffled with an entropy-seeded RNG.
    pub fn new(ingredients: Vec<Ingredient>) -> Self {
        Self::with_rng(ingredients, StdRng::from_entropy())
    }

    /// Build a deck with an explicit RNG, for reproducible shuffles.
    pub fn with_rng(mut ingredients: Vec<Ingredient>, mut rng: StdRng) -> Self {
        ingredients.shuffle(&mut rng);
        Self {
            draw_pile: ingredients,
            discard: Vec::new(),
            rng,
        }
    }

    /// Cards in the discard pile.
    pub fn discard_size(&self) -> usize {
        self.discard.len()
    }

    fn reshuffle(&mut self) {
        self.draw_pile.append(&mut self.discard);
        self.draw_pile.shuffle(&mut self.rng);
        debug!(cards = self.draw_pile.len(), "reshuffled discard into deck");
    }
}

impl IngredientSupplier for Deck {
    fn draw(&mut self) -> Option<Ingredient> {
        if self.draw_pile.is_empty() {
            if self.discard.is_empty() {
                warn!("both deck and discard pile are empty");
                return None;
            }
            self.reshuffle();
        }
        self.draw_pile.pop()
    }

    fn return_card(&mut self, ingredient: Ingredient) {
        self.discard.push(ingredient);
    }

    fn size(&self) -> usize {
        self.draw_pile.len()
    }
}
