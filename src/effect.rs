//! Effects module.
//!
//! Effects are the units of change an ingredient applies to a recipe.
//! Direct effects (`Basic`, `Balance`) move an attribute. Special effects
//! (`Amplify`, `Neutralize`) move nothing themselves; they queue on the
//! recipe and transform the value of the next `Basic` effect.

use crate::attribute_id::{opposite_name, AttributeId};
use crate::recipe::Recipe;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{trace, warn};

/// Default step of a balance effect.
pub const DEFAULT_BALANCE_AMOUNT: i32 = 3;

/// An effect that modifies how later direct values are computed.
///
/// # Examples
///
/// ```rust
/// use kitchen_core::SpecialEffect;
///
/// assert_eq!(SpecialEffect::Amplify.apply_special(-3), -6);
/// assert_eq!(SpecialEffect::Neutralize.apply_special(-3), 0);
/// assert_eq!(SpecialEffect::Neutralize.apply_special(4), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialEffect {
    /// Doubles the value.
    Amplify,
    /// Zeroes negative values, leaves positive ones.
    Neutralize,
}

impl SpecialEffect {
    /// Transform a value passing through the special-effect queue.
    pub fn apply_special(self, value: i32) -> i32 {
        match self {
            SpecialEffect::Amplify => value.saturating_mul(2),
            SpecialEffect::Neutralize => value.max(0),
        }
    }
}

impl fmt::Display for SpecialEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecialEffect::Amplify => write!(f, "Amplify"),
            SpecialEffect::Neutralize => write!(f, "Neutralize"),
        }
    }
}

/// A single effect carried by an ingredient.
///
/// The `Display` impl renders the label shown on an ingredient card.
/// Value effects show the attribute and the magnitude, switching to the
/// opposite name for negative values.
///
/// # Examples
///
/// ```rust
/// use kitchen_core::Effect;
///
/// assert_eq!(Effect::basic("Richness", 5).to_string(), "Richness 5");
/// assert_eq!(Effect::basic("Richness", -5).to_string(), "Lightness 5");
/// assert_eq!(Effect::balance("Richness").to_string(), "Balance");
/// assert_eq!(Effect::Amplify.to_string(), "Amplify");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Effect {
    /// Add `value` (after queued special effects) to `attribute`.
    Basic { attribute: AttributeId, value: i32 },
    /// Move `attribute` toward zero by up to `|amount|` without crossing it.
    Balance { attribute: AttributeId, amount: i32 },
    /// Queue an amplify on the recipe.
    Amplify,
    /// Queue a neutralize on the recipe.
    Neutralize,
}

impl Effect {
    /// A direct effect adding `value` to `attribute`.
    pub fn basic(attribute: impl Into<AttributeId>, value: i32) -> Self {
        Effect::Basic {
            attribute: attribute.into(),
            value,
        }
    }

    /// A balance effect with the default step of 3.
    pub fn balance(attribute: impl Into<AttributeId>) -> Self {
        Self::balance_by(attribute, DEFAULT_BALANCE_AMOUNT)
    }

    /// A balance effect with a custom step. Negative steps act like their
    /// magnitude.
    pub fn balance_by(attribute: impl Into<AttributeId>, amount: i32) -> Self {
        Effect::Balance {
            attribute: attribute.into(),
            amount,
        }
    }

    /// The special effect this queues, if it is one.
    pub fn as_special(&self) -> Option<SpecialEffect> {
        match self {
            Effect::Amplify => Some(SpecialEffect::Amplify),
            Effect::Neutralize => Some(SpecialEffect::Neutralize),
            Effect::Basic { .. } | Effect::Balance { .. } => None,
        }
    }

    /// `true` for Amplify and Neutralize.
    pub fn is_special(&self) -> bool {
        self.as_special().is_some()
    }

    /// Apply this effect to a recipe.
    ///
    /// Special effects only register themselves on the recipe's queue.
    /// `Basic` routes its value through that queue first; `Balance` does not.
    /// An effect naming an attribute the recipe lacks is ignored.
    pub fn apply(&self, recipe: &mut Recipe) {
        match self {
            Effect::Basic { attribute, value } => {
                let transformed = recipe.apply_special_effects(*value);
                match recipe.attribute_mut(attribute.as_str()) {
                    Some(attr) => {
                        let new_value = attr.add_value(transformed);
                        trace!(
                            attribute = %attribute,
                            raw = *value,
                            transformed,
                            new_value,
                            "applied basic effect"
                        );
                    }
                    None => warn!(attribute = %attribute, "basic effect on unknown attribute ignored"),
                }
            }
            Effect::Balance { attribute, amount } => match recipe.attribute_mut(attribute.as_str()) {
                Some(attr) => {
                    let current = attr.value();
                    // the sign of `amount` is ignored
                    let step = amount.saturating_abs();
                    if current > 0 {
                        attr.add_value(-current.min(step));
                    } else if current < 0 {
                        attr.add_value(current.saturating_neg().min(step));
                    }
                    trace!(attribute = %attribute, from = current, to = attr.value(), "applied balance effect");
                }
                None => warn!(attribute = %attribute, "balance effect on unknown attribute ignored"),
            },
            Effect::Amplify | Effect::Neutralize => {
                if let Some(special) = self.as_special() {
                    recipe.register_special_effect(special);
                }
            }
        }
    }
}

impl From<SpecialEffect> for Effect {
    fn from(special: SpecialEffect) -> Self {
        match special {
            SpecialEffect::Amplify => Effect::Amplify,
            SpecialEffect::Neutralize => Effect::Neutralize,
        }
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Basic { attribute, value } => {
                let name = if *value >= 0 {
                    capitalize(attribute.as_str())
                } else {
                    opposite_name(attribute.as_str())
                };
                write!(f, "{} {}", name, value.unsigned_abs())
            }
            Effect::Balance { .. } => write!(f, "Balance"),
            Effect::Amplify => write!(f, "Amplify"),
            Effect::Neutralize => write!(f, "Neutralize"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_effect_modifies_attribute() {
        let mut recipe = Recipe::new();
        Effect::basic("Richness", 5).apply(&mut recipe);
        assert_eq!(recipe.value("Richness"), Some(5));

        Effect::basic("Richness", -3).apply(&mut recipe);
        assert_eq!(recipe.value("Richness"), Some(2));
    }

    #[test]
    fn test_basic_effect_accepts_lowercase_names() {
        let mut recipe = Recipe::new();
        Effect::basic("richness", 4).apply(&mut recipe);
        assert_eq!(recipe.value("Richness"), Some(4));
    }

    #[test]
    fn test_basic_effect_unknown_attribute_is_noop() {
        let mut recipe = Recipe::new();
        Effect::basic("Umami", 4).apply(&mut recipe);
        for attr in recipe.attributes().iter() {
            assert_eq!(attr.value(), 0);
        }
    }

    #[test]
    fn test_basic_display() {
        assert_eq!(Effect::basic("richness", 5).to_string(), "Richness 5");
        assert_eq!(Effect::basic("richness", -5).to_string(), "Lightness 5");
        assert_eq!(Effect::basic("Spiciness", -2).to_string(), "Mildness 2");
        assert_eq!(Effect::basic("Sweetness", -1).to_string(), "Savory 1");
        assert_eq!(Effect::basic("Umami", -1).to_string(), "Not Umami 1");
        assert_eq!(Effect::basic("Sweetness", 0).to_string(), "Sweetness 0");
    }

    #[test]
    fn test_amplify_apply_special() {
        let amplify = SpecialEffect::Amplify;
        assert_eq!(amplify.apply_special(5), 10);
        assert_eq!(amplify.apply_special(-3), -6);
        assert_eq!(amplify.apply_special(0), 0);
    }

    #[test]
    fn test_neutralize_apply_special() {
        let neutralize = SpecialEffect::Neutralize;
        assert_eq!(neutralize.apply_special(5), 5);
        assert_eq!(neutralize.apply_special(-3), 0);
        assert_eq!(neutralize.apply_special(0), 0);
    }

    #[test]
    fn test_special_apply_registers_on_queue() {
        let mut recipe = Recipe::new();
        Effect::Amplify.apply(&mut recipe);
        Effect::Neutralize.apply(&mut recipe);
        assert_eq!(
            recipe.special_effects(),
            &[SpecialEffect::Amplify, SpecialEffect::Neutralize]
        );
        for attr in recipe.attributes().iter() {
            assert_eq!(attr.value(), 0);
        }
    }

    #[test]
    fn test_balance_positive() {
        let mut recipe = Recipe::new();
        recipe.attribute_mut("Richness").unwrap().set_value(5);
        Effect::balance("Richness").apply(&mut recipe);
        assert_eq!(recipe.value("Richness"), Some(2));
    }

    #[test]
    fn test_balance_negative() {
        let mut recipe = Recipe::new();
        recipe.attribute_mut("Richness").unwrap().set_value(-7);
        Effect::balance("Richness").apply(&mut recipe);
        assert_eq!(recipe.value("Richness"), Some(-4));
    }

    #[test]
    fn test_balance_does_not_cross_zero() {
        let mut recipe = Recipe::new();
        recipe.attribute_mut("Richness").unwrap().set_value(2);
        Effect::balance("Richness").apply(&mut recipe);
        assert_eq!(recipe.value("Richness"), Some(0));

        recipe.attribute_mut("Richness").unwrap().set_value(-1);
        Effect::balance("Richness").apply(&mut recipe);
        assert_eq!(recipe.value("Richness"), Some(0));
    }

    #[test]
    fn test_balance_custom_amount_and_zero() {
        let mut recipe = Recipe::new();
        recipe.attribute_mut("Richness").unwrap().set_value(8);
        Effect::balance_by("Richness", 5).apply(&mut recipe);
        assert_eq!(recipe.value("Richness"), Some(3));

        let mut recipe = Recipe::new();
        Effect::balance("Richness").apply(&mut recipe);
        assert_eq!(recipe.value("Richness"), Some(0));
    }

    #[test]
    fn test_balance_negative_amount_still_moves_toward_zero() {
        let mut recipe = Recipe::new();
        recipe.attribute_mut("Richness").unwrap().set_value(5);
        Effect::balance_by("Richness", -3).apply(&mut recipe);
        assert_eq!(recipe.value("Richness"), Some(2));

        recipe.attribute_mut("Richness").unwrap().set_value(-5);
        Effect::balance_by("Richness", i32::MIN).apply(&mut recipe);
        assert_eq!(recipe.value("Richness"), Some(0));
    }

    #[test]
    fn test_balance_ignores_special_queue() {
        let mut recipe = Recipe::new();
        recipe.attribute_mut("Richness").unwrap().set_value(6);
        recipe.register_special_effect(SpecialEffect::Amplify);
        Effect::balance("Richness").apply(&mut recipe);
        assert_eq!(recipe.value("Richness"), Some(3));
    }

    #[test]
    fn test_is_special() {
        assert!(Effect::Amplify.is_special());
        assert!(Effect::Neutralize.is_special());
        assert!(!Effect::basic("Richness", 1).is_special());
        assert!(!Effect::balance("Richness").is_special());
    }

    #[test]
    fn test_fixed_labels() {
        assert_eq!(Effect::Amplify.to_string(), "Amplify");
        assert_eq!(Effect::Neutralize.to_string(), "Neutralize");
        assert_eq!(Effect::balance_by("Sweetness", 2).to_string(), "Balance");
    }

    #[test]
    fn test_effect_serializes_with_kind_tag() {
        let json = serde_json::to_value(Effect::basic("Richness", 2)).unwrap();
        assert_eq!(json["kind"], "Basic");
        assert_eq!(json["attribute"], "Richness");
        assert_eq!(json["value"], 2);
    }
}
