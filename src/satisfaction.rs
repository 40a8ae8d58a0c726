//! Customer satisfaction module.
//!
//! Maps a match percentage to a satisfaction level and builds the line the
//! customer says when served.

use crate::attribute_id::{RICHNESS, SPICINESS, SWEETNESS};
use crate::matching::MatchResult;
use serde::{Deserialize, Serialize};

/// How the customer feels about the dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SatisfactionLevel {
    Disgusted,
    Dissatisfied,
    Neutral,
    Satisfied,
    Ecstatic,
}

impl SatisfactionLevel {
    /// Level for a match percentage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kitchen_core::SatisfactionLevel;
    ///
    /// assert_eq!(SatisfactionLevel::from_match(95), SatisfactionLevel::Ecstatic);
    /// assert_eq!(SatisfactionLevel::from_match(50), SatisfactionLevel::Neutral);
    /// assert_eq!(SatisfactionLevel::from_match(10), SatisfactionLevel::Disgusted);
    /// ```
    pub fn from_match(match_percentage: u32) -> Self {
        match match_percentage {
            90.. => SatisfactionLevel::Ecstatic,
            70..=89 => SatisfactionLevel::Satisfied,
            50..=69 => SatisfactionLevel::Neutral,
            30..=49 => SatisfactionLevel::Dissatisfied,
            _ => SatisfactionLevel::Disgusted,
        }
    }

    /// The generic line for this level.
    pub fn message(self) -> &'static str {
        match self {
            SatisfactionLevel::Ecstatic => "Perfect! Exactly what I wanted!",
            SatisfactionLevel::Satisfied => "This is good, I enjoyed it!",
            SatisfactionLevel::Neutral => "It's okay, but could be better.",
            SatisfactionLevel::Dissatisfied => "This isn't what I asked for...",
            SatisfactionLevel::Disgusted => "This is terrible! Nothing like what I wanted!",
        }
    }

    fn is_happy(self) -> bool {
        self >= SatisfactionLevel::Satisfied
    }
}

/// Complaint about one attribute. `too_much` is true when the recipe
/// overshot the request.
fn complaint(attribute: &str, too_much: bool) -> Option<&'static str> {
    let line = if attribute.eq_ignore_ascii_case(RICHNESS) {
        if too_much {
            "It's too rich for my taste."
        } else {
            "It's too light, I wanted something richer."
        }
    } else if attribute.eq_ignore_ascii_case(SPICINESS) {
        if too_much {
            "It's too spicy for me!"
        } else {
            "I wanted more spice in this."
        }
    } else if attribute.eq_ignore_ascii_case(SWEETNESS) {
        if too_much {
            "It's too sweet."
        } else {
            "It's too savoury."
        }
    } else {
        return None;
    };
    Some(line)
}

/// What the customer says about a served dish.
///
/// Happy customers only give the generic line. Otherwise the complaint
/// about the worst-matching attribute is appended.
///
/// # Examples
///
/// ```rust
/// use kitchen_core::{satisfaction::feedback_message, Recipe, Request, SatisfactionLevel};
///
/// let recipe = Recipe::new();
/// let result = recipe.compare_with_request(&Request::create(0, 8, 0)).unwrap();
/// let level = SatisfactionLevel::from_match(result.match_percentage);
///
/// assert_eq!(level, SatisfactionLevel::Satisfied);
/// assert_eq!(feedback_message(level, &result), "This is good, I enjoyed it!");
/// ```
pub fn feedback_message(level: SatisfactionLevel, result: &MatchResult) -> String {
    let generic = level.message();
    if level.is_happy() {
        return generic.to_string();
    }

    result
        .worst_attribute()
        .and_then(|(name, detail)| complaint(name.as_str(), detail.diff > 0))
        .map(|line| format!("{} {}", generic, line))
        .unwrap_or_else(|| generic.to_string())
}
