use kitchen_core::catalog::{self, prebuilt_deck_with_rng};
use kitchen_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn basic_session(seed: u64) -> GameSession {
    let deck = prebuilt_deck_with_rng("basic", StdRng::seed_from_u64(seed)).unwrap();
    GameSession::with_rng(deck, 1, GameConfig::default(), StdRng::seed_from_u64(seed + 1))
}

/// A new session draws nine cards from the 18-card basic deck.
#[test]
fn test_session_draws_from_basic_deck() {
    let session = basic_session(1);
    assert_eq!(session.hand().len(), 9);
    assert_eq!(session.deck_size(), 9);
    assert_eq!(session.current_request().len(), 1);
}

/// Cards cycle through the discard pile without being lost.
#[test]
fn test_cards_are_conserved() {
    let mut session = basic_session(2);
    for _ in 0..5 {
        session.play_ingredient(0).unwrap();
        session.play_ingredient(0).unwrap();
        session.finish_turn();
        let in_hand = session.hand().len();
        let in_deck = session.deck_size();
        let in_discard = session.supplier().discard_size();
        assert_eq!(in_hand + in_deck + in_discard, 18);
        assert_eq!(in_hand, 9);
    }
}

/// Playing a card changes the recipe by that card's effects.
#[test]
fn test_played_card_reaches_recipe() {
    let mut session = basic_session(3);
    let card = session.hand()[0].clone();

    let mut expected = Recipe::new();
    expected.add_ingredient(card);

    session.play_ingredient(0).unwrap();
    for attr in expected.attributes().iter() {
        assert_eq!(
            session.current_recipe().value(attr.name().as_str()),
            Some(attr.value())
        );
    }
}

/// Serving every customer of a default run advances floors and banks score.
#[test]
fn test_full_run() {
    let config = GameConfig::default();
    let mut progression = Progression::new(config.clone());
    let deck = prebuilt_deck_with_rng("basic", StdRng::seed_from_u64(10)).unwrap();
    let mut session =
        GameSession::with_rng(deck, 1, config, StdRng::seed_from_u64(11));

    let mut served = 0;
    while !progression.is_complete() {
        session.play_ingredient(0).unwrap();
        let outcome = session.complete_order().unwrap();
        assert!(outcome.score_earned <= 100);
        served += 1;

        for event in progression.next_customer() {
            match event {
                ProgressionEvent::NewFloor { difficulty, .. } => {
                    session.set_difficulty(difficulty);
                    session.generate_new_request(false);
                }
                ProgressionEvent::NewCustomer { is_boss: true, .. } => {
                    session.generate_new_request(true);
                    assert_eq!(session.current_request().len(), 3);
                }
                _ => {}
            }
        }
        session.finish_turn();
    }

    assert_eq!(served, 8);
    assert!(session.score() >= 8 * 2);
    assert!(session.score() <= 8 * 100);
}

/// Catalog ingredients render their card labels.
#[test]
fn test_catalog_labels() {
    let catalog = IngredientCatalog::basic();
    let chili = catalog.get("nano_chili_oil").unwrap();
    assert_eq!(chili.effect_labels(), vec!["Spiciness 2", "Lightness 1"]);
    let onions = catalog.get("bio_engineered_green_onions").unwrap();
    assert_eq!(onions.effect_labels(), vec!["Sweetness 2", "Mildness 1"]);
}

/// Unknown deck names are rejected.
#[test]
fn test_unknown_prebuilt_deck() {
    assert!(catalog::prebuilt_deck("deluxe").is_err());
}

/// A configured hand size larger than the deck leaves a short hand.
#[test]
fn test_short_deck_short_hand() {
    let config = GameConfig::from_json(r#"{ "hand_size": 4 }"#).unwrap();
    let cards = vec![
        Ingredient::new("A", vec![Effect::basic("Richness", 1)]),
        Ingredient::new("B", vec![Effect::basic("Richness", 1)]),
    ];
    let deck = Deck::with_rng(cards, StdRng::seed_from_u64(4));
    let session = GameSession::with_rng(deck, 2, config, StdRng::seed_from_u64(5));
    assert_eq!(session.hand().len(), 2);
}
