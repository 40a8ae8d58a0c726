//! Recipe module.
//!
//! A `Recipe` is the dish under construction: the three canonical
//! attributes, the ingredients played so far and the queue of pending
//! special effects.

use crate::attribute::{Attribute, AttributeSet};
use crate::effect::SpecialEffect;
use crate::error::CraftError;
use crate::ingredient::Ingredient;
use crate::matching::{self, MatchResult};
use crate::request::Request;
use tracing::{debug, trace};

/// The mutable aggregate the player builds by playing ingredients.
///
/// # Examples
///
/// ```rust
/// use kitchen_core::{Effect, Ingredient, Recipe, Request};
///
/// let mut recipe = Recipe::new();
/// recipe.add_ingredient(Ingredient::new("Miso", vec![Effect::basic("Richness", 2)]));
/// recipe.add_ingredient(Ingredient::new("Miso", vec![Effect::basic("Richness", 2)]));
///
/// let request = Request::create(4, 0, 0);
/// let result = recipe.compare_with_request(&request).unwrap();
/// assert_eq!(result.match_percentage, 100);
/// assert_eq!(result.score, 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    attributes: AttributeSet,
    ingredients: Vec<Ingredient>,
    special_effects: Vec<SpecialEffect>,
}

impl Default for Recipe {
    fn default() -> Self {
        Self::new()
    }
}

impl Recipe {
    /// A fresh recipe: Richness, Spiciness and Sweetness at 0 in `[-10, 10]`.
    pub fn new() -> Self {
        Self {
            attributes: AttributeSet::canonical(),
            ingredients: Vec::new(),
            special_effects: Vec::new(),
        }
    }

    /// Record `ingredient` and apply its effects.
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        debug!(ingredient = ingredient.name(), "adding ingredient");
        ingredient.apply_effects(self);
        self.ingredients.push(ingredient);
    }

    /// Set every attribute back to 0.
    ///
    /// The special-effect queue and the ingredient history are kept.
    pub fn reset_attributes(&mut self) {
        for attribute in self.attributes.iter_mut() {
            attribute.set_value(0);
        }
    }

    /// Queue a special effect for the next direct value.
    pub fn register_special_effect(&mut self, effect: SpecialEffect) {
        trace!(effect = %effect, queued = self.special_effects.len() + 1, "registered special effect");
        self.special_effects.push(effect);
    }

    /// Fold `value` through the queued special effects, front to back.
    pub fn apply_special_effects(&self, value: i32) -> i32 {
        self.special_effects
            .iter()
            .fold(value, |acc, effect| effect.apply_special(acc))
    }

    /// Drop every queued special effect.
    pub fn clear_special_effects(&mut self) {
        if !self.special_effects.is_empty() {
            trace!(cleared = self.special_effects.len(), "cleared special effects");
        }
        self.special_effects.clear();
    }

    /// Score this recipe against a customer request.
    pub fn compare_with_request(&self, request: &Request) -> Result<MatchResult, CraftError> {
        matching::compare(self, request)
    }

    /// All recipe attributes in name order.
    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    /// Attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Mutable attribute by name.
    pub fn attribute_mut(&mut self, name: &str) -> Option<&mut Attribute> {
        self.attributes.get_mut(name)
    }

    /// Current value of `name`, if the recipe has that attribute.
    pub fn value(&self, name: &str) -> Option<i32> {
        self.attribute(name).map(Attribute::value)
    }

    /// Ingredients played so far, oldest first.
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Special effects waiting for the next direct value.
    pub fn special_effects(&self) -> &[SpecialEffect] {
        &self.special_effects
    }
}
