//! Ingredient catalog and prebuilt decks.

use crate::deck::Deck;
use crate::effect::Effect;
use crate::error::CraftError;
use crate::ingredient::Ingredient;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// The six basic ingredients, in catalog order.
///
/// The first three push one attribute up by 2 and another down by 1; the
/// last three push one attribute down by 2 and another up by 1.
pub fn basic_ingredients() -> Vec<(&'static str, Ingredient)> {
    vec![
        (
            "synthetic_miso",
            Ingredient::new(
                "Synthetic Miso",
                vec![Effect::basic("Richness", 2), Effect::basic("Sweetness", -1)],
            ),
        ),
        (
            "nano_chili_oil",
            Ingredient::new(
                "Nano-Chili Oil",
                vec![Effect::basic("Spiciness", 2), Effect::basic("Richness", -1)],
            ),
        ),
        (
            "bio_engineered_green_onions",
            Ingredient::new(
                "Bio-Engineered Green Onions",
                vec![Effect::basic("Sweetness", 2), Effect::basic("Spiciness", -1)],
            ),
        ),
        (
            "quantum_lightness_broth",
            Ingredient::new(
                "Quantum Lightness Broth",
                vec![Effect::basic("Richness", -2), Effect::basic("Sweetness", 1)],
            ),
        ),
        (
            "cryo_mildness_extract",
            Ingredient::new(
                "Cryo-Mildness Extract",
                vec![Effect::basic("Spiciness", -2), Effect::basic("Richness", 1)],
            ),
        ),
        (
            "synthetic_savory_umami",
            Ingredient::new(
                "Synthetic Savory Umami",
                vec![Effect::basic("Sweetness", -2), Effect::basic("Spiciness", 1)],
            ),
        ),
    ]
}

/// Identifier → ingredient lookup used to seed decks.
///
/// # Examples
///
/// ```rust
/// use kitchen_core::IngredientCatalog;
///
/// let catalog = IngredientCatalog::basic();
/// let miso = catalog.get("synthetic_miso").unwrap();
/// assert_eq!(miso.name(), "Synthetic Miso");
/// assert!(catalog.get("truffle").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct IngredientCatalog {
    entries: Vec<(String, Ingredient)>,
}

impl IngredientCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the six basic ingredients.
    pub fn basic() -> Self {
        let mut catalog = Self::new();
        for (id, ingredient) in basic_ingredients() {
            catalog.insert(id, ingredient);
        }
        catalog
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, id: impl Into<String>, ingredient: Ingredient) {
        let id = id.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => entry.1 = ingredient,
            None => self.entries.push((id, ingredient)),
        }
    }

    /// Look up an ingredient by identifier.
    pub fn get(&self, id: &str) -> Result<&Ingredient, CraftError> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, ingredient)| ingredient)
            .ok_or_else(|| CraftError::UnknownIngredient(id.to_string()))
    }

    /// Identifiers in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Ingredients in insertion order.
    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.entries.iter().map(|(_, ingredient)| ingredient)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Copies of each basic ingredient in the `"basic"` deck.
const BASIC_DECK_COPIES: usize = 3;

/// Build a named prebuilt deck.
///
/// `"basic"` holds three copies of every basic ingredient.
pub fn prebuilt_deck(name: &str) -> Result<Deck, CraftError> {
    prebuilt_deck_with_rng(name, StdRng::from_entropy())
}

/// [`prebuilt_deck`] with an explicit RNG for the initial shuffle.
pub fn prebuilt_deck_with_rng(name: &str, rng: StdRng) -> Result<Deck, CraftError> {
    match name {
        "basic" => {
            let catalog = IngredientCatalog::basic();
            let cards: Vec<Ingredient> = (0..BASIC_DECK_COPIES)
                .flat_map(|_| catalog.ingredients().cloned())
                .collect();
            Ok(Deck::with_rng(cards, rng))
        }
        other => Err(CraftError::UnknownDeck(other.to_string())),
    }
}
