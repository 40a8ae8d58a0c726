//! Matching and scoring module.
//!
//! Compares a recipe with a request attribute by attribute and turns the
//! mean closeness into a score.
//!
//! ```text
//! match_i          = 100 - |current_i - requested_i| / 12 * 100
//! match_percentage = max(0, round(mean(match_i)))
//! score            = round(exp((match_percentage / 100 - 1) * 4) * 100)
//! ```
//!
//! The constants encode game balance and are fixed.

use crate::attribute_id::AttributeId;
use crate::error::CraftError;
use crate::recipe::Recipe;
use crate::request::Request;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Distance at which a single attribute stops matching at all.
pub const MAX_DIFF: i32 = 12;

/// Steepness of the exponential score curve.
pub const SCORE_CURVE: f64 = 4.0;

/// Per-attribute breakdown of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeMatch {
    /// Value the customer asked for.
    pub requested: i32,
    /// Value the recipe ended with (0 if the recipe lacks the attribute).
    pub current: i32,
    /// `current - requested`; positive means the recipe overshoots.
    pub diff: i32,
    /// Closeness in percent, clamped at 0.
    pub match_percent: f64,
}

/// The outcome of scoring a recipe against a request.
///
/// # Examples
///
/// ```rust
/// use kitchen_core::{Recipe, Request};
///
/// let recipe = Recipe::new();
/// let request = Request::create(6, 0, 0);
/// let result = recipe.compare_with_request(&request).unwrap();
///
/// // Richness is off by 6 (50%), the other two match exactly.
/// assert_eq!(result.match_percentage, 83);
/// assert_eq!(result.details["Richness"].diff, -6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Rounded mean closeness over the requested attributes, at least 0.
    pub match_percentage: u32,
    /// Exponential score derived from `match_percentage`.
    pub score: u32,
    /// Breakdown keyed by requested attribute.
    pub details: BTreeMap<AttributeId, AttributeMatch>,
}

impl MatchResult {
    /// Breakdown for one requested attribute.
    pub fn detail(&self, name: &str) -> Option<&AttributeMatch> {
        self.details.get(name)
    }

    /// The attribute with the lowest match, if any is below 100.
    ///
    /// Ties go to the first attribute in name order.
    pub fn worst_attribute(&self) -> Option<(&AttributeId, &AttributeMatch)> {
        let mut worst: Option<(&AttributeId, &AttributeMatch)> = None;
        let mut worst_match = 100.0;
        for (name, detail) in &self.details {
            if detail.match_percent < worst_match {
                worst_match = detail.match_percent;
                worst = Some((name, detail));
            }
        }
        worst
    }
}

/// Unclamped closeness of one attribute pair, in percent.
pub fn attribute_match(current: i32, requested: i32) -> f64 {
    let diff = (i64::from(current) - i64::from(requested)).abs() as f64;
    100.0 - (diff / f64::from(MAX_DIFF)) * 100.0
}

/// Exponential score for a match percentage.
///
/// # Examples
///
/// ```rust
/// use kitchen_core::matching::score_for;
///
/// assert_eq!(score_for(100), 100);
/// assert_eq!(score_for(50), 14);
/// assert_eq!(score_for(0), 2);
/// ```
pub fn score_for(match_percentage: u32) -> u32 {
    let exponent = (f64::from(match_percentage) / 100.0 - 1.0) * SCORE_CURVE;
    (exponent.exp() * 100.0).max(0.0).round() as u32
}

/// Compare `recipe` with `request`.
///
/// A request with no attributes has no defined match and yields
/// [`CraftError::EmptyRequest`].
pub fn compare(recipe: &Recipe, request: &Request) -> Result<MatchResult, CraftError> {
    if request.is_empty() {
        return Err(CraftError::EmptyRequest);
    }

    let mut details = BTreeMap::new();
    let mut total = 0.0;
    for wanted in request.attributes().iter() {
        let requested = wanted.value();
        let current = recipe.value(wanted.name().as_str()).unwrap_or(0);
        let raw = attribute_match(current, requested);
        total += raw;
        details.insert(
            wanted.name().clone(),
            AttributeMatch {
                requested,
                current,
                diff: current - requested,
                match_percent: raw.max(0.0),
            },
        );
    }

    let mean = total / request.len() as f64;
    let match_percentage = mean.round().max(0.0) as u32;
    let score = score_for(match_percentage);
    debug!(match_percentage, score, "scored recipe");

    Ok(MatchResult {
        match_percentage,
        score,
        details,
    })
}
