//! Game configuration.
//!
//! `GameConfig` holds the tunables of a run. It can be built in code or
//! parsed from JSON. Scoring constants and attribute bounds are not part of
//! it; see [`crate::matching`] and [`crate::attribute`].

use crate::error::CraftError;
use serde::{Deserialize, Serialize};

/// Tunables for a game session and its floor progression.
///
/// Missing JSON fields fall back to the defaults.
///
/// # Examples
///
/// ```rust
/// use kitchen_core::GameConfig;
///
/// let config = GameConfig::from_json(r#"{ "hand_size": 5 }"#).unwrap();
/// assert_eq!(config.hand_size, 5);
/// assert_eq!(config.total_floors, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cards drawn into a fresh hand.
    pub hand_size: usize,
    /// Number of floors; the last one is the boss floor.
    pub total_floors: u32,
    /// Customers served on each regular floor.
    pub customers_per_floor: u32,
    /// Customers served on the boss floor; the last of them is the boss.
    pub boss_floor_customers: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: 9,
            total_floors: 4,
            customers_per_floor: 2,
            boss_floor_customers: 2,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, CraftError> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| CraftError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, CraftError> {
        serde_json::to_string_pretty(self).map_err(|e| CraftError::InvalidConfig(e.to_string()))
    }

    /// Check that every count is at least one.
    pub fn validate(&self) -> Result<(), CraftError> {
        if self.hand_size == 0 {
            return Err(CraftError::InvalidConfig("hand_size must be at least 1".into()));
        }
        if self.total_floors == 0 {
            return Err(CraftError::InvalidConfig("total_floors must be at least 1".into()));
        }
        if self.customers_per_floor == 0 || self.boss_floor_customers == 0 {
            return Err(CraftError::InvalidConfig(
                "customer counts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
