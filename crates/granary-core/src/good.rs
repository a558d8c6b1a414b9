use crate::id::GoodId;
use serde::{Deserialize, Serialize};

/// Minutes are the unit of production duration.
pub type Minutes = u32;

/// A reference to another good consumed as a recipe ingredient.
///
/// The `name` is denormalized for display and is not authoritative; traversals
/// resolve the `good` id through the index. The id may be dangling (absent
/// from the catalog the index was built from) -- every consumer treats that
/// as "ignore this edge".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientRef {
    pub good: GoodId,
    pub name: String,
    pub quantity: u32,
}

/// A produceable item in the catalog.
///
/// Immutable for the duration of an optimization run: the planner copies
/// goods into its working list and never mutates their contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Good {
    pub id: GoodId,
    pub name: String,
    /// Player level at which this good unlocks.
    pub required_level: u32,
    /// Maximum sale price. May be zero or negative for unsellable goods.
    pub max_price: i64,
    pub production_minutes: Minutes,
    /// Experience gained per unit produced.
    pub experience: u32,
    /// Recipe, in display order. Empty for base products.
    #[serde(default)]
    pub ingredients: Vec<IngredientRef>,
    /// The building that produces this good. Never empty; the grouping key
    /// for "one building cannot produce two things at once" conflicts.
    pub source: String,
}

impl Good {
    /// A base product is a raw material: a good with no ingredients.
    pub fn is_base_product(&self) -> bool {
        self.ingredients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheat() -> Good {
        Good {
            id: GoodId(0),
            name: "Wheat".to_string(),
            required_level: 1,
            max_price: 3,
            production_minutes: 2,
            experience: 1,
            ingredients: vec![],
            source: "Field".to_string(),
        }
    }

    #[test]
    fn no_ingredients_is_base_product() {
        assert!(wheat().is_base_product());
    }

    #[test]
    fn with_ingredients_is_not_base_product() {
        let mut bread = wheat();
        bread.id = GoodId(1);
        bread.name = "Bread".to_string();
        bread.ingredients = vec![IngredientRef {
            good: GoodId(0),
            name: "Wheat".to_string(),
            quantity: 3,
        }];
        assert!(!bread.is_base_product());
    }

    #[test]
    fn serde_round_trip_preserves_recipe() {
        let mut bread = wheat();
        bread.ingredients = vec![IngredientRef {
            good: GoodId(0),
            name: "Wheat".to_string(),
            quantity: 3,
        }];

        let json = serde_json::to_string(&bread).unwrap();
        let restored: Good = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, bread);
    }

    #[test]
    fn missing_ingredients_field_deserializes_empty() {
        let json = r#"{
            "id": 7,
            "name": "Egg",
            "required_level": 1,
            "max_price": 14,
            "production_minutes": 10,
            "experience": 2,
            "source": "Chicken Coop"
        }"#;
        let egg: Good = serde_json::from_str(json).unwrap();
        assert!(egg.is_base_product());
        assert_eq!(egg.id, GoodId(7));
    }
}
