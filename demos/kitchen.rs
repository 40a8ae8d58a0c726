//! Kitchen example: one customer served from the basic deck
//!
//! This example demonstrates:
//! - Building a session from the prebuilt basic deck
//! - Playing ingredient cards and watching the recipe change
//! - Serving the dish and reading the score breakdown
//!
//! Run with `RUST_LOG=kitchen_core=trace` to see every effect applied.

use kitchen_core::catalog::prebuilt_deck;
use kitchen_core::*;
use tracing_subscriber::EnvFilter;

fn print_recipe(recipe: &Recipe) {
    for attr in recipe.attributes().iter() {
        println!("  {:<10} {:>3}", attr.name(), attr.value());
    }
}

fn main() -> Result<(), CraftError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let deck = prebuilt_deck("basic")?;
    let mut session = GameSession::new(deck, 2, GameConfig::default());

    println!("=== Customer Request ===");
    println!("{}", session.current_request().description());

    println!("\n=== Hand ===");
    for (i, card) in session.hand().iter().enumerate() {
        println!("  [{}] {} ({})", i, card.name(), card.effect_labels().join(", "));
    }

    // Greedy: play whichever card brings the dish closest to the request.
    for _ in 0..4 {
        let hand = session.hand();
        let mut best: Option<(usize, u32)> = None;
        for (i, card) in hand.iter().enumerate() {
            let mut trial = session.current_recipe().clone();
            trial.add_ingredient(card.clone());
            let result = trial.compare_with_request(session.current_request())?;
            if best.map_or(true, |(_, m)| result.match_percentage > m) {
                best = Some((i, result.match_percentage));
            }
        }
        let Some((index, _)) = best else { break };
        println!("\nPlaying {}", hand[index].name());
        session.play_ingredient(index)?;
        print_recipe(session.current_recipe());
    }

    let outcome = session.complete_order()?;
    println!("\n=== Result ===");
    for (name, detail) in &outcome.result.details {
        println!(
            "  {:<10} wanted {:>3}, got {:>3} ({:.0}%)",
            name, detail.requested, detail.current, detail.match_percent
        );
    }
    println!("Match: {}%", outcome.result.match_percentage);
    println!("Score: {}", outcome.score_earned);
    println!("Customer: \"{}\"", outcome.feedback);

    Ok(())
}
