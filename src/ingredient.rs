//! Ingredient module.
//!
//! An ingredient is a named, immutable, ordered list of effects.

use crate::effect::Effect;
use crate::recipe::Recipe;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A named bundle of effects played onto a recipe.
///
/// Effect order is significant: it is the order the effects reach the
/// recipe.
///
/// # Examples
///
/// ```rust
/// use kitchen_core::{Effect, Ingredient, Recipe};
///
/// let chili_oil = Ingredient::new(
///     "Chili Oil",
///     vec![Effect::Amplify, Effect::basic("Spiciness", 3)],
/// );
///
/// let mut recipe = Recipe::new();
/// recipe.add_ingredient(chili_oil);
/// assert_eq!(recipe.value("Spiciness"), Some(6));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ingredient {
    name: String,
    effects: Vec<Effect>,
}

impl Ingredient {
    /// An ingredient applying `effects` in order.
    pub fn new(name: impl Into<String>, effects: Vec<Effect>) -> Self {
        Self {
            name: name.into(),
            effects,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The effects, in application order.
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Card labels for each effect, in order.
    pub fn effect_labels(&self) -> Vec<String> {
        self.effects.iter().map(|e| e.to_string()).collect()
    }

    /// Apply every effect to `recipe`, flushing the special-effect queue at
    /// chain boundaries.
    ///
    /// A direct effect consumes whatever specials are queued. The next
    /// special effect after it, or the end of the ingredient, flushes the
    /// queue first. Specials with no direct effect between them stack and
    /// all carry over to the next ingredient.
    pub fn apply_effects(&self, recipe: &mut Recipe) {
        let mut clear_pending = false;
        for effect in &self.effects {
            if effect.is_special() {
                if clear_pending {
                    recipe.clear_special_effects();
                    clear_pending = false;
                }
            } else {
                clear_pending = true;
            }
            effect.apply(recipe);
        }
        if clear_pending {
            recipe.clear_special_effects();
        }
        trace!(ingredient = %self.name, "applied ingredient effects");
    }
}
