//! Catalog construction helpers shared by unit, scenario, and property tests.
//!
//! Available to integration tests via the `test-utils` feature.

use crate::good::{Good, IngredientRef};
use crate::id::GoodId;

/// A base product: no ingredients, unlocked at level 1, trivial duration.
pub fn base_good(id: u32, name: &str, price: i64, source: &str) -> Good {
    Good {
        id: GoodId(id),
        name: name.to_string(),
        required_level: 1,
        max_price: price,
        production_minutes: 5,
        experience: 1,
        ingredients: vec![],
        source: source.to_string(),
    }
}

/// A crafted good whose recipe references other goods by id.
pub fn crafted_good(
    id: u32,
    name: &str,
    price: i64,
    source: &str,
    ingredients: &[(u32, u32)],
) -> Good {
    let ingredients = ingredients
        .iter()
        .map(|&(good, quantity)| IngredientRef {
            good: GoodId(good),
            name: format!("good-{good}"),
            quantity,
        })
        .collect();
    Good {
        ingredients,
        ..base_good(id, name, price, source)
    }
}
