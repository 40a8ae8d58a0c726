//! Attribute identifier module.
//!
//! Provides the `AttributeId` type, an interned string naming one axis of a
//! recipe. Uses `Arc<str>` so recipes, requests and effects can share names
//! cheaply.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::sync::Arc;

/// Canonical name of the richness axis.
pub const RICHNESS: &str = "Richness";
/// Canonical name of the spiciness axis.
pub const SPICINESS: &str = "Spiciness";
/// Canonical name of the sweetness axis.
pub const SWEETNESS: &str = "Sweetness";

/// Interned string identifier for attributes.
///
/// # Examples
///
/// ```rust
/// use kitchen_core::AttributeId;
///
/// let rich = AttributeId::from_str("Richness");
/// let rich2: AttributeId = "Richness".into();
///
/// assert_eq!(rich, rich2);
/// assert_eq!(rich.opposite_name(), "Lightness");
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct AttributeId(Arc<str>);

impl Serialize for AttributeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.as_ref().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AttributeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(AttributeId::from(s))
    }
}

impl AttributeId {
    /// Create a new `AttributeId` from a string slice, kept exactly as given.
    pub fn from_str(s: &str) -> Self {
        Self(Arc::from(s))
    }

    /// The richness axis.
    pub fn richness() -> Self {
        Self::from_str(RICHNESS)
    }

    /// The spiciness axis.
    pub fn spiciness() -> Self {
        Self::from_str(SPICINESS)
    }

    /// The sweetness axis.
    pub fn sweetness() -> Self {
        Self::from_str(SWEETNESS)
    }

    /// The three canonical axes in their fixed order.
    pub fn canonical() -> [AttributeId; 3] {
        [Self::richness(), Self::spiciness(), Self::sweetness()]
    }

    /// Map any casing of a canonical name onto its canonical spelling.
    ///
    /// Names outside the canonical set are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kitchen_core::AttributeId;
    ///
    /// assert_eq!(AttributeId::canonicalize("richness").as_str(), "Richness");
    /// assert_eq!(AttributeId::canonicalize("Umami").as_str(), "Umami");
    /// ```
    pub fn canonicalize(s: &str) -> Self {
        [RICHNESS, SPICINESS, SWEETNESS]
            .into_iter()
            .find(|name| name.eq_ignore_ascii_case(s))
            .map(Self::from_str)
            .unwrap_or_else(|| Self::from_str(s))
    }

    /// Get the string representation of this `AttributeId`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name shown when this attribute carries a negative value.
    ///
    /// `Richness` ↔ `Lightness`, `Spiciness` ↔ `Mildness`,
    /// `Sweetness` ↔ `Savory`; anything else becomes `Not <name>`.
    pub fn opposite_name(&self) -> String {
        opposite_name(self.as_str())
    }
}

/// Opposite-name table shared by attributes and effect labels.
///
/// Lookup ignores ASCII case so that `richness` and `Richness` render the
/// same way.
pub fn opposite_name(name: &str) -> String {
    if name.eq_ignore_ascii_case(RICHNESS) {
        "Lightness".to_string()
    } else if name.eq_ignore_ascii_case(SPICINESS) {
        "Mildness".to_string()
    } else if name.eq_ignore_ascii_case(SWEETNESS) {
        "Savory".to_string()
    } else {
        format!("Not {}", name)
    }
}

impl From<&str> for AttributeId {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<String> for AttributeId {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl Borrow<str> for AttributeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AttributeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
