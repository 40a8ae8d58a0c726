//! Floor and customer progression.
//!
//! A run climbs a fixed number of floors, serving a few customers on each.
//! The last floor is the boss floor and its last customer is the boss.

use crate::config::GameConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Highest difficulty a floor reaches.
pub const MAX_FLOOR_DIFFICULTY: u32 = 4;

/// Snapshot of where the run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorData {
    pub floor_number: u32,
    pub difficulty: u32,
    pub is_boss_floor: bool,
    pub total_customers: u32,
    pub current_customer: u32,
}

/// What happened when a customer was served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressionEvent {
    CustomerComplete { floor_number: u32, customer_number: u32 },
    NewCustomer { floor_number: u32, customer_number: u32, is_boss: bool },
    FloorComplete { floor_number: u32 },
    NewFloor { floor_number: u32, difficulty: u32, is_boss_floor: bool },
    GameComplete,
}

/// Tracks floor and customer position through a run.
///
/// # Examples
///
/// ```rust
/// use kitchen_core::{GameConfig, Progression, ProgressionEvent};
///
/// let mut progression = Progression::new(GameConfig::default());
/// let events = progression.next_customer();
/// assert!(matches!(events[1], ProgressionEvent::NewCustomer { customer_number: 2, .. }));
/// ```
#[derive(Debug, Clone)]
pub struct Progression {
    config: GameConfig,
    current_floor: u32,
    current_customer: u32,
    complete: bool,
}

impl Progression {
    /// Start at floor 1, customer 1.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            current_floor: 1,
            current_customer: 1,
            complete: false,
        }
    }

    /// Difficulty of a floor: its number, capped at 4.
    pub fn difficulty_for_floor(floor: u32) -> u32 {
        floor.min(MAX_FLOOR_DIFFICULTY)
    }

    pub fn current_floor(&self) -> u32 {
        self.current_floor
    }

    pub fn current_customer(&self) -> u32 {
        self.current_customer
    }

    /// `true` once the last floor has been served.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// `true` on the final floor.
    pub fn is_boss_floor(&self) -> bool {
        self.current_floor == self.config.total_floors
    }

    /// `true` if the customer being served is a boss.
    pub fn is_current_customer_boss(&self) -> bool {
        self.is_boss_floor() && self.current_customer == self.config.boss_floor_customers
    }

    fn customers_on_current_floor(&self) -> u32 {
        if self.is_boss_floor() {
            self.config.boss_floor_customers
        } else {
            self.config.customers_per_floor
        }
    }

    /// Snapshot of the current floor.
    pub fn floor_data(&self) -> FloorData {
        FloorData {
            floor_number: self.current_floor,
            difficulty: Self::difficulty_for_floor(self.current_floor),
            is_boss_floor: self.is_boss_floor(),
            total_customers: self.customers_on_current_floor(),
            current_customer: self.current_customer,
        }
    }

    /// Mark the current customer served and advance.
    ///
    /// Returns the resulting events in order. After the game is complete
    /// this returns nothing.
    pub fn next_customer(&mut self) -> Vec<ProgressionEvent> {
        if self.complete {
            return Vec::new();
        }

        let mut events = vec![ProgressionEvent::CustomerComplete {
            floor_number: self.current_floor,
            customer_number: self.current_customer,
        }];

        if self.current_customer >= self.customers_on_current_floor() {
            events.push(ProgressionEvent::FloorComplete {
                floor_number: self.current_floor,
            });
            if self.current_floor >= self.config.total_floors {
                self.complete = true;
                info!(floors = self.config.total_floors, "game complete");
                events.push(ProgressionEvent::GameComplete);
            } else {
                self.current_floor += 1;
                self.current_customer = 1;
                info!(floor = self.current_floor, "advanced to next floor");
                events.push(ProgressionEvent::NewFloor {
                    floor_number: self.current_floor,
                    difficulty: Self::difficulty_for_floor(self.current_floor),
                    is_boss_floor: self.is_boss_floor(),
                });
            }
        } else {
            self.current_customer += 1;
            events.push(ProgressionEvent::NewCustomer {
                floor_number: self.current_floor,
                customer_number: self.current_customer,
                is_boss: self.is_current_customer_boss(),
            });
        }
        events
    }

    /// Back to floor 1, customer 1.
    pub fn reset(&mut self) {
        self.current_floor = 1;
        self.current_customer = 1;
        self.complete = false;
    }
}
