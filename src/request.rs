//! Customer request module.
//!
//! A `Request` is the target attribute vector a customer wants. It may name
//! only some of the three attributes; only those are scored.

use crate::attribute::{Attribute, AttributeSet, ATTRIBUTE_MAX, ATTRIBUTE_MIN};
use crate::attribute_id::AttributeId;
use crate::error::CraftError;
use crate::matching::{self, MatchResult};
use crate::recipe::Recipe;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Prefix on the description of a boss request.
pub const BOSS_PREFIX: &str = "BOSS REQUEST: ";

/// Intensity words used in request descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intensity {
    /// Magnitude 3 or less.
    Slight,
    /// Magnitude 4 to 6.
    Medium,
    /// Magnitude 7 or more.
    Great,
}

impl Intensity {
    /// Band for a requested value, by magnitude.
    pub fn from_value(value: i32) -> Self {
        let magnitude = value.unsigned_abs();
        if magnitude <= 3 {
            Intensity::Slight
        } else if magnitude >= 7 {
            Intensity::Great
        } else {
            Intensity::Medium
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Intensity::Slight => "Slight",
            Intensity::Medium => "Medium",
            Intensity::Great => "Great",
        }
    }
}

/// What a customer asked for.
///
/// # Examples
///
/// ```rust
/// use kitchen_core::Request;
///
/// let request = Request::create(2, 5, -8);
/// assert_eq!(
///     request.description(),
///     "Slight Richness,\nMedium Spiciness,\nGreat Savory"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    attributes: AttributeSet,
    is_boss: bool,
}

impl Request {
    /// A request over the given attributes.
    pub fn new(attributes: impl IntoIterator<Item = Attribute>, is_boss: bool) -> Self {
        Self {
            attributes: attributes.into_iter().collect(),
            is_boss,
        }
    }

    /// A regular request over all three attributes, values clamped to `[-10, 10]`.
    pub fn create(richness: i32, spiciness: i32, sweetness: i32) -> Self {
        let [r, s, w] = AttributeId::canonical();
        Self::new(
            [
                Attribute::canonical(r, richness),
                Attribute::canonical(s, spiciness),
                Attribute::canonical(w, sweetness),
            ],
            false,
        )
    }

    /// A random request using the thread-local RNG.
    ///
    /// See [`Request::create_random_with_rng`].
    pub fn create_random(difficulty: u32, is_boss: bool) -> Self {
        Self::create_random_with_rng(&mut rand::thread_rng(), difficulty, is_boss)
    }

    /// A random request.
    ///
    /// Boss requests name all three attributes. Otherwise `min(difficulty, 3)`
    /// distinct attributes are picked uniformly. Every picked attribute gets
    /// a non-zero value drawn uniformly from `[-10, 10]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kitchen_core::Request;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let request = Request::create_random_with_rng(&mut rng, 2, false);
    /// assert_eq!(request.len(), 2);
    /// assert!(request.attributes().iter().all(|a| a.value() != 0));
    /// ```
    pub fn create_random_with_rng<R: Rng>(
        rng: &mut R,
        difficulty: u32,
        is_boss: bool,
    ) -> Self {
        let mut names = AttributeId::canonical().to_vec();
        let count = if is_boss {
            names.len()
        } else {
            names.shuffle(rng);
            (difficulty as usize).min(names.len())
        };

        let attributes: Vec<Attribute> = names
            .into_iter()
            .take(count)
            .map(|name| Attribute::canonical(name, non_zero_value(rng)))
            .collect();

        let request = Self::new(attributes, is_boss);
        debug!(
            difficulty,
            is_boss,
            attributes = request.len(),
            "generated random request"
        );
        request
    }

    /// Set a requested value. Names the request does not already carry are
    /// ignored.
    pub fn set_attribute(&mut self, name: &str, value: i32) {
        match self.attributes.get_mut(name) {
            Some(attribute) => {
                attribute.set_value(value);
            }
            None => warn!(attribute = name, "ignoring value for attribute not in request"),
        }
    }

    /// Requested attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// All requested attributes in name order.
    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    /// `true` for a boss customer's request.
    pub fn is_boss(&self) -> bool {
        self.is_boss
    }

    /// Number of requested attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// `true` if nothing is requested.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Customer-facing text, one `<Intensity> <Name>` line per attribute.
    pub fn description(&self) -> String {
        let lines: Vec<String> = self
            .attributes
            .iter()
            .map(|attr| {
                format!(
                    "{} {}",
                    Intensity::from_value(attr.value()).as_str(),
                    attr.display_name()
                )
            })
            .collect();
        let body = lines.join(",\n");
        if self.is_boss {
            format!("{}{}", BOSS_PREFIX, body)
        } else {
            body
        }
    }

    /// Score `recipe` against this request. Same result as
    /// [`Recipe::compare_with_request`].
    pub fn compare_with_recipe(&self, recipe: &Recipe) -> Result<MatchResult, CraftError> {
        matching::compare(recipe, self)
    }
}

fn non_zero_value<R: Rng>(rng: &mut R) -> i32 {
    loop {
        let value = rng.gen_range(ATTRIBUTE_MIN..=ATTRIBUTE_MAX);
        if value != 0 {
            return value;
        }
    }
}
