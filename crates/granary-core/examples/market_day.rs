//! Market day example: plan production for a small farm.
//!
//! Builds a seven-good catalog inline, runs the optimizer with the Feed Mill
//! excluded, and prints the resulting plan.
//!
//! Run with: `cargo run -p granary-core --example market_day`

use granary_core::{Good, GoodId, IngredientRef, PlanOptimizer, PlannerConfig};

fn good(id: u32, name: &str, level: u32, price: i64, minutes: u32, source: &str) -> Good {
    Good {
        id: GoodId(id),
        name: name.to_string(),
        required_level: level,
        max_price: price,
        production_minutes: minutes,
        experience: level,
        ingredients: vec![],
        source: source.to_string(),
    }
}

fn needs(good: Good, ingredients: &[(u32, &str, u32)]) -> Good {
    Good {
        ingredients: ingredients
            .iter()
            .map(|&(id, name, quantity)| IngredientRef {
                good: GoodId(id),
                name: name.to_string(),
                quantity,
            })
            .collect(),
        ..good
    }
}

fn main() {
    let catalog = vec![
        good(0, "Wheat", 1, 3, 2, "Field"),
        good(1, "Corn", 2, 7, 5, "Field"),
        good(2, "Egg", 1, 14, 20, "Chicken Coop"),
        good(3, "Milk", 6, 32, 60, "Dairy"),
        needs(good(4, "Bread", 2, 60, 5, "Bakery"), &[(0, "Wheat", 3)]),
        needs(good(5, "Cream", 7, 50, 30, "Creamery"), &[(3, "Milk", 1)]),
        needs(
            good(6, "Chicken Feed", 3, 20, 5, "Feed Mill"),
            &[(0, "Wheat", 1), (1, "Corn", 1)],
        ),
    ];

    let optimizer = PlanOptimizer::new(&catalog, PlannerConfig::excluding(["Feed Mill"]));

    // A level-9 player has everything unlocked.
    let available: Vec<Good> = catalog
        .iter()
        .filter(|good| good.required_level <= 9)
        .cloned()
        .collect();

    let plan = optimizer.optimize(&available);

    println!("Production plan ({} goods):", plan.len());
    for good in &plan {
        println!(
            "  {:>4} coins  {:<12} at {} ({} min)",
            good.max_price, good.name, good.source, good.production_minutes
        );
    }
}
