//! Bounded attribute module.
//!
//! An `Attribute` is a single numeric axis of a recipe or request, held
//! between an inclusive minimum and maximum. Every mutation clamps.

use crate::attribute_id::AttributeId;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Lower bound of every canonical attribute.
pub const ATTRIBUTE_MIN: i32 = -10;
/// Upper bound of every canonical attribute.
pub const ATTRIBUTE_MAX: i32 = 10;

/// A bounded integer attribute.
///
/// Negative values are displayed under the opposite name with their
/// magnitude, so a richness of `-4` reads as "Lightness 4".
///
/// # Examples
///
/// ```rust
/// use kitchen_core::{Attribute, AttributeId};
///
/// let mut rich = Attribute::canonical(AttributeId::richness(), 0);
/// assert_eq!(rich.add_value(15), 10);
/// assert_eq!(rich.add_value(-14), -4);
///
/// assert_eq!(rich.display_name(), "Lightness");
/// assert_eq!(rich.display_value(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAttribute")]
pub struct Attribute {
    name: AttributeId,
    value: i32,
    min: i32,
    max: i32,
}

/// Wire form of an [`Attribute`]; converted through [`Attribute::new`] so
/// the value is clamped on load.
#[derive(Deserialize)]
struct RawAttribute {
    name: AttributeId,
    value: i32,
    #[serde(default = "default_min")]
    min: i32,
    #[serde(default = "default_max")]
    max: i32,
}

fn default_min() -> i32 {
    ATTRIBUTE_MIN
}

fn default_max() -> i32 {
    ATTRIBUTE_MAX
}

impl From<RawAttribute> for Attribute {
    fn from(raw: RawAttribute) -> Self {
        Attribute::new(raw.name, raw.value, raw.min, raw.max)
    }
}

impl Attribute {
    /// Create a new attribute. The initial value is clamped into `[min, max]`.
    pub fn new(name: impl Into<AttributeId>, value: i32, min: i32, max: i32) -> Self {
        let mut attribute = Self {
            name: name.into(),
            value: 0,
            min,
            max,
        };
        attribute.set_value(value);
        attribute
    }

    /// Create an attribute with the canonical `[-10, 10]` range.
    pub fn canonical(name: impl Into<AttributeId>, value: i32) -> Self {
        Self::new(name, value, ATTRIBUTE_MIN, ATTRIBUTE_MAX)
    }

    /// The attribute's name.
    pub fn name(&self) -> &AttributeId {
        &self.name
    }

    /// Current value, always within `[min, max]`.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Inclusive lower bound.
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Inclusive upper bound.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Add `amount` and clamp. Returns the new value.
    pub fn add_value(&mut self, amount: i32) -> i32 {
        self.set_value(self.value.saturating_add(amount))
    }

    /// Set the value and clamp. Returns the new value.
    pub fn set_value(&mut self, new_value: i32) -> i32 {
        // unlike i32::clamp this cannot panic when min > max
        self.value = new_value.min(self.max).max(self.min);
        self.value
    }

    /// Name used when the value is negative.
    pub fn opposite_name(&self) -> String {
        self.name.opposite_name()
    }

    /// `name` when the value is zero or positive, the opposite name otherwise.
    pub fn display_name(&self) -> String {
        if self.value >= 0 {
            self.name.to_string()
        } else {
            self.opposite_name()
        }
    }

    /// Magnitude of the value.
    pub fn display_value(&self) -> i32 {
        self.value.abs()
    }
}

/// An ordered collection of attributes keyed by name.
///
/// Iteration follows name order, which for the canonical set is
/// Richness, Spiciness, Sweetness. Lookups try the exact name first and
/// then fall back to an ASCII-case-insensitive match.
///
/// Serialized as a map from name to attribute. On load every entry is
/// re-keyed by the attribute's own name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttributeSet {
    attributes: BTreeMap<AttributeId, Attribute>,
}

impl AttributeSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The three canonical attributes, all at zero.
    pub fn canonical() -> Self {
        AttributeId::canonical()
            .into_iter()
            .map(|id| Attribute::canonical(id, 0))
            .collect()
    }

    /// Insert an attribute, replacing any previous one with the same name.
    pub fn insert(&mut self, attribute: Attribute) {
        self.attributes.insert(attribute.name.clone(), attribute);
    }

    /// Look up an attribute by name.
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        if let Some(attribute) = self.attributes.get(name) {
            return Some(attribute);
        }
        self.attributes
            .values()
            .find(|a| a.name.as_str().eq_ignore_ascii_case(name))
    }

    /// Mutable lookup by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Attribute> {
        if self.attributes.contains_key(name) {
            return self.attributes.get_mut(name);
        }
        self.attributes
            .values_mut()
            .find(|a| a.name.as_str().eq_ignore_ascii_case(name))
    }

    /// `true` if `name` resolves to an attribute.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.values()
    }

    /// Mutable attributes in name order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Attribute> {
        self.attributes.values_mut()
    }

    /// Attribute names in order.
    pub fn names(&self) -> impl Iterator<Item = &AttributeId> {
        self.attributes.keys()
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// `true` if the set holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl<'de> Deserialize<'de> for AttributeSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let keyed = BTreeMap::<AttributeId, Attribute>::deserialize(deserializer)?;
        Ok(keyed.into_values().collect())
    }
}

impl FromIterator<Attribute> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut set = Self::new();
        for attribute in iter {
            set.insert(attribute);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_initial_value() {
        let attr = Attribute::canonical("Spiciness", 25);
        assert_eq!(attr.value(), 10);
        assert_eq!(attr.min(), -10);
        assert_eq!(attr.max(), 10);
    }

    #[test]
    fn test_add_value() {
        let mut attr = Attribute::canonical("Richness", 0);
        attr.add_value(5);
        assert_eq!(attr.value(), 5);
        attr.add_value(-3);
        assert_eq!(attr.value(), 2);
    }

    #[test]
    fn test_add_value_respects_bounds() {
        let mut attr = Attribute::canonical("Richness", 0);
        assert_eq!(attr.add_value(15), 10);
        assert_eq!(attr.add_value(-25), -10);
        assert_eq!(attr.add_value(i32::MIN), -10);
    }

    #[test]
    fn test_set_value_clamps_every_input() {
        let mut attr = Attribute::canonical("Richness", 0);
        for v in -40..=40 {
            let result = attr.set_value(v);
            assert!((-10..=10).contains(&result));
            if (-10..=10).contains(&v) {
                assert_eq!(result, v);
            }
        }
    }

    #[test]
    fn test_display_name_flips_on_sign() {
        let mut attr = Attribute::canonical("Richness", 5);
        assert_eq!(attr.display_name(), "Richness");
        attr.set_value(-5);
        assert_eq!(attr.display_name(), "Lightness");
        attr.set_value(0);
        assert_eq!(attr.display_name(), "Richness");
    }

    #[test]
    fn test_display_value_is_absolute() {
        let mut attr = Attribute::canonical("Richness", 5);
        assert_eq!(attr.display_value(), 5);
        attr.set_value(-7);
        assert_eq!(attr.display_value(), 7);
    }

    #[test]
    fn test_attribute_set_lookup_ignores_case() {
        let mut set = AttributeSet::canonical();
        assert_eq!(set.len(), 3);
        set.get_mut("spiciness").unwrap().set_value(4);
        assert_eq!(set.get("Spiciness").unwrap().value(), 4);
        assert!(set.get("Umami").is_none());
    }

    #[test]
    fn test_attribute_set_iterates_in_name_order() {
        let set: AttributeSet = vec![
            Attribute::canonical("Sweetness", 1),
            Attribute::canonical("Richness", 2),
        ]
        .into_iter()
        .collect();
        let names: Vec<&str> = set.names().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["Richness", "Sweetness"]);
    }

    #[test]
    fn test_deserialize_clamps_value() {
        let attr: Attribute = serde_json::from_str(
            r#"{"name":"Richness","value":50,"min":-10,"max":10}"#,
        )
        .unwrap();
        assert_eq!(attr.value(), 10);

        let attr: Attribute = serde_json::from_str(r#"{"name":"Sweetness","value":-99}"#).unwrap();
        assert_eq!(attr.value(), -10);
        assert_eq!(attr.min(), ATTRIBUTE_MIN);
        assert_eq!(attr.max(), ATTRIBUTE_MAX);
    }

    #[test]
    fn test_deserialize_set_rekeys_by_attribute_name() {
        let set: AttributeSet = serde_json::from_str(
            r#"{"Richness":{"name":"Spiciness","value":-99,"min":-10,"max":10}}"#,
        )
        .unwrap();
        assert_eq!(set.len(), 1);
        let names: Vec<&str> = set.names().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["Spiciness"]);
        assert_eq!(set.get("Spiciness").unwrap().value(), -10);
        assert!(set.get("Richness").is_none());
    }

    #[test]
    fn test_unknown_opposite() {
        let attr = Attribute::canonical("Other", -1);
        assert_eq!(attr.opposite_name(), "Not Other");
        assert_eq!(attr.display_name(), "Not Other");
    }
}
