//! Game session module.
//!
//! A `GameSession` owns everything one player touches during a run: the
//! recipe being cooked, the current customer's request, the hand of
//! ingredient cards and the running score.

use crate::config::GameConfig;
use crate::deck::{Deck, IngredientSupplier};
use crate::error::CraftError;
use crate::ingredient::Ingredient;
use crate::matching::MatchResult;
use crate::recipe::Recipe;
use crate::request::Request;
use crate::satisfaction::{feedback_message, SatisfactionLevel};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Highest difficulty reachable through [`GameSession::increase_difficulty`].
pub const MAX_SESSION_DIFFICULTY: u32 = 3;

/// Result of serving a dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderOutcome {
    /// Points added to the running score.
    pub score_earned: u32,
    pub result: MatchResult,
    pub satisfaction: SatisfactionLevel,
    /// What the customer says.
    pub feedback: String,
}

/// One player's kitchen.
///
/// # Examples
///
/// ```rust
/// use kitchen_core::{catalog, GameConfig, GameSession};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let deck = catalog::prebuilt_deck_with_rng("basic", StdRng::seed_from_u64(1)).unwrap();
/// let mut session =
///     GameSession::with_rng(deck, 2, GameConfig::default(), StdRng::seed_from_u64(2));
/// assert_eq!(session.hand().len(), 9);
///
/// session.play_ingredient(0).unwrap();
/// let outcome = session.complete_order().unwrap();
/// assert_eq!(session.score(), u64::from(outcome.score_earned));
/// ```
#[derive(Debug)]
pub struct GameSession<S: IngredientSupplier = Deck> {
    config: GameConfig,
    supplier: S,
    recipe: Recipe,
    request: Request,
    hand: Vec<Ingredient>,
    difficulty: u32,
    score: u64,
    rng: StdRng,
}

impl<S: IngredientSupplier> GameSession<S> {
    /// Start a session with an entropy-seeded RNG for requests.
    pub fn new(supplier: S, difficulty: u32, config: GameConfig) -> Self {
        Self::with_rng(supplier, difficulty, config, StdRng::from_entropy())
    }

    /// Start a session with an explicit RNG for requests.
    ///
    /// Generates the first request and draws a full hand.
    pub fn with_rng(supplier: S, difficulty: u32, config: GameConfig, mut rng: StdRng) -> Self {
        let request = Request::create_random_with_rng(&mut rng, difficulty, false);
        let mut session = Self {
            config,
            supplier,
            recipe: Recipe::new(),
            request,
            hand: Vec::new(),
            difficulty,
            score: 0,
            rng,
        };
        session.draw_new_hand();
        session
    }

    /// Return the hand to the supplier and draw a fresh one.
    pub fn draw_new_hand(&mut self) {
        for card in self.hand.drain(..) {
            self.supplier.return_card(card);
        }
        for slot in 0..self.config.hand_size {
            match self.supplier.draw() {
                Some(card) => self.hand.push(card),
                None => warn!(slot = slot + 1, hand_size = self.config.hand_size, "failed to draw card"),
            }
        }
        debug!(cards = self.hand.len(), "drew new hand");
    }

    /// Play the card at `index` onto the recipe.
    ///
    /// The card goes back to the supplier's discard.
    pub fn play_ingredient(&mut self, index: usize) -> Result<(), CraftError> {
        if index >= self.hand.len() {
            return Err(CraftError::InvalidHandIndex {
                index,
                hand_size: self.hand.len(),
            });
        }
        let played = self.hand.remove(index);
        self.supplier.return_card(played.clone());
        self.recipe.add_ingredient(played);
        Ok(())
    }

    /// Zero the recipe and draw a new hand.
    pub fn finish_turn(&mut self) {
        self.recipe.reset_attributes();
        self.draw_new_hand();
    }

    /// Score the current recipe against the current request.
    pub fn evaluate(&self) -> Result<MatchResult, CraftError> {
        self.recipe.compare_with_request(&self.request)
    }

    /// Serve the dish: score it, bank the points, and start the next
    /// customer with a fresh recipe.
    ///
    /// On error nothing changes.
    pub fn complete_order(&mut self) -> Result<OrderOutcome, CraftError> {
        let result = self.evaluate()?;
        let satisfaction = SatisfactionLevel::from_match(result.match_percentage);
        let feedback = feedback_message(satisfaction, &result);
        let score_earned = result.score;
        self.score += u64::from(score_earned);
        info!(
            match_percentage = result.match_percentage,
            score_earned,
            total = self.score,
            "order completed"
        );

        self.recipe = Recipe::new();
        self.generate_new_request(false);

        Ok(OrderOutcome {
            score_earned,
            result,
            satisfaction,
            feedback,
        })
    }

    /// Replace the current request with a random one at the session difficulty.
    pub fn generate_new_request(&mut self, is_boss: bool) -> &Request {
        self.request = Request::create_random_with_rng(&mut self.rng, self.difficulty, is_boss);
        &self.request
    }

    /// Replace the current request with a specific one.
    pub fn set_request(&mut self, request: Request) {
        self.request = request;
    }

    /// The customer's current request.
    pub fn current_request(&self) -> &Request {
        &self.request
    }

    /// The dish under construction.
    pub fn current_recipe(&self) -> &Recipe {
        &self.recipe
    }

    /// A copy of the hand.
    pub fn hand(&self) -> Vec<Ingredient> {
        self.hand.clone()
    }

    /// Cards left in the supplier's draw pile.
    pub fn deck_size(&self) -> usize {
        self.supplier.size()
    }

    /// The ingredient supplier backing the hand.
    pub fn supplier(&self) -> &S {
        &self.supplier
    }

    /// Difficulty used for the next random request.
    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    /// Set the difficulty used for the next random request.
    pub fn set_difficulty(&mut self, difficulty: u32) {
        self.difficulty = difficulty;
    }

    /// Raise the difficulty by one, up to [`MAX_SESSION_DIFFICULTY`].
    pub fn increase_difficulty(&mut self) {
        self.difficulty = self.difficulty.saturating_add(1).min(MAX_SESSION_DIFFICULTY);
    }

    /// Points banked so far.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Bank extra points.
    pub fn add_score(&mut self, points: u64) {
        self.score += points;
    }

    /// Zero the running score.
    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    /// The configuration this session was started with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::Effect;

    /// Supplier that hands out the same card forever.
    #[derive(Debug, Default)]
    struct EndlessChili {
        returned: usize,
    }

    impl IngredientSupplier for EndlessChili {
        fn draw(&mut self) -> Option<Ingredient> {
            Some(Ingredient::new("Chili", vec![Effect::basic("Spiciness", 2)]))
        }

        fn return_card(&mut self, _ingredient: Ingredient) {
            self.returned += 1;
        }

        fn size(&self) -> usize {
            usize::MAX
        }
    }

    fn session() -> GameSession<EndlessChili> {
        GameSession::with_rng(
            EndlessChili::default(),
            3,
            GameConfig::default(),
            StdRng::seed_from_u64(8),
        )
    }

    #[test]
    fn test_new_session_has_full_hand_and_request() {
        let session = session();
        assert_eq!(session.hand().len(), 9);
        assert_eq!(session.current_request().len(), 3);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_play_ingredient_applies_and_returns_card() {
        let mut session = session();
        session.play_ingredient(0).unwrap();
        session.play_ingredient(0).unwrap();
        assert_eq!(session.current_recipe().value("Spiciness"), Some(4));
        assert_eq!(session.hand().len(), 7);
        assert_eq!(session.supplier().returned, 2);
    }

    #[test]
    fn test_play_out_of_range() {
        let mut session = session();
        assert_eq!(
            session.play_ingredient(9),
            Err(CraftError::InvalidHandIndex {
                index: 9,
                hand_size: 9
            })
        );
    }

    #[test]
    fn test_finish_turn_resets_and_redraws() {
        let mut session = session();
        session.play_ingredient(3).unwrap();
        session.finish_turn();
        assert_eq!(session.current_recipe().value("Spiciness"), Some(0));
        assert_eq!(session.hand().len(), 9);
        // 1 played + 8 left in hand
        assert_eq!(session.supplier().returned, 9);
    }

    #[test]
    fn test_complete_order_banks_score() {
        let mut session = session();
        session.set_request(Request::create(0, 4, 0));
        session.play_ingredient(0).unwrap();
        session.play_ingredient(0).unwrap();

        let outcome = session.complete_order().unwrap();
        assert_eq!(outcome.result.match_percentage, 100);
        assert_eq!(outcome.score_earned, 100);
        assert_eq!(outcome.satisfaction, SatisfactionLevel::Ecstatic);
        assert_eq!(outcome.feedback, "Perfect! Exactly what I wanted!");
        assert_eq!(session.score(), 100);
        assert_eq!(session.current_recipe().value("Spiciness"), Some(0));
        assert!(session.current_recipe().ingredients().is_empty());
    }

    #[test]
    fn test_complete_order_on_empty_request_changes_nothing() {
        let mut session = session();
        session.set_request(Request::new(Vec::new(), false));
        session.play_ingredient(0).unwrap();
        assert_eq!(session.complete_order(), Err(CraftError::EmptyRequest));
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_recipe().value("Spiciness"), Some(2));
    }

    #[test]
    fn test_boss_request_generation() {
        let mut session = session();
        session.set_difficulty(1);
        assert!(session.generate_new_request(true).is_boss());
        assert_eq!(session.current_request().len(), 3);
        assert_eq!(session.generate_new_request(false).len(), 1);
    }

    #[test]
    fn test_increase_difficulty_caps() {
        let mut session = session();
        session.set_difficulty(2);
        session.increase_difficulty();
        session.increase_difficulty();
        assert_eq!(session.difficulty(), 3);

        session.set_difficulty(u32::MAX);
        session.increase_difficulty();
        assert_eq!(session.difficulty(), MAX_SESSION_DIFFICULTY);
    }

    #[test]
    fn test_score_helpers() {
        let mut session = session();
        session.add_score(40);
        assert_eq!(session.score(), 40);
        session.reset_score();
        assert_eq!(session.score(), 0);
    }
}
