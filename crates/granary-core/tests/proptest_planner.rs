//! Property-based tests for the planner.
//!
//! Uses proptest to generate random catalogs -- including dangling ingredient
//! references and cycles -- then verifies the structural invariants of the
//! selection pipeline.

use granary_core::{Good, GoodId, IngredientRef, PlanOptimizer, PlannerConfig};
use proptest::prelude::*;
use std::collections::HashSet;

// ===========================================================================
// Generators
// ===========================================================================

const SOURCES: &[&str] = &[
    "Field",
    "Chicken Coop",
    "Dairy",
    "Bakery",
    "Feed Mill",
    "Sugar Mill",
    "Smelter",
];

/// Generate a random catalog of up to `max_goods` goods. Ingredient ids are
/// drawn from a range wider than the catalog, so references may dangle, point
/// at later goods, or close cycles.
fn arb_catalog(max_goods: usize) -> impl Strategy<Value = Vec<Good>> {
    (1..=max_goods).prop_flat_map(move |n| {
        let good = (
            -50i64..500,
            0..SOURCES.len(),
            proptest::collection::vec((0..(n as u32 * 2), 1..5u32), 0..4),
        );
        proptest::collection::vec(good, n).prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(id, (price, source, refs))| Good {
                    id: GoodId(id as u32),
                    name: format!("good-{id}"),
                    required_level: 1,
                    max_price: price,
                    production_minutes: 5,
                    experience: 1,
                    ingredients: refs
                        .into_iter()
                        .map(|(target, quantity)| IngredientRef {
                            good: GoodId(target),
                            name: format!("good-{target}"),
                            quantity,
                        })
                        .collect(),
                    source: SOURCES[source].to_string(),
                })
                .collect()
        })
    })
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every planned good was in the available input.
    #[test]
    fn plan_is_subset_of_available(catalog in arb_catalog(30)) {
        let optimizer = PlanOptimizer::new(&catalog, PlannerConfig::default());
        let plan = optimizer.optimize(&catalog);

        let available: HashSet<GoodId> = catalog.iter().map(|good| good.id).collect();
        for good in &plan {
            prop_assert!(available.contains(&good.id));
        }
    }

    /// No planned good sells for zero or less.
    #[test]
    fn plan_has_only_positive_prices(catalog in arb_catalog(30)) {
        let optimizer = PlanOptimizer::new(&catalog, PlannerConfig::default());
        for good in optimizer.optimize(&catalog) {
            prop_assert!(good.max_price > 0);
        }
    }

    /// No planned good comes from an excluded source.
    #[test]
    fn plan_respects_excluded_sources(catalog in arb_catalog(30)) {
        let config = PlannerConfig::excluding(["Feed Mill", "Smelter"]);
        let optimizer = PlanOptimizer::new(&catalog, config.clone());
        for good in optimizer.optimize(&catalog) {
            prop_assert!(!config.excluded_sources.contains(&good.source));
        }
    }

    /// At most one planned good per source: stage 1 picks one per building
    /// and later stages only remove.
    #[test]
    fn plan_has_at_most_one_good_per_source(catalog in arb_catalog(30)) {
        let optimizer = PlanOptimizer::new(&catalog, PlannerConfig::default());
        let plan = optimizer.optimize(&catalog);

        let mut seen = HashSet::new();
        for good in &plan {
            prop_assert!(seen.insert(good.source.clone()),
                "two planned goods from source {}", good.source);
        }
    }

    /// The plan is ordered by non-increasing price.
    #[test]
    fn plan_is_sorted_by_descending_price(catalog in arb_catalog(30)) {
        let optimizer = PlanOptimizer::new(&catalog, PlannerConfig::default());
        let plan = optimizer.optimize(&catalog);
        for pair in plan.windows(2) {
            prop_assert!(pair[0].max_price >= pair[1].max_price);
        }
    }

    /// Identical inputs produce identical plans, run after run.
    #[test]
    fn optimize_is_deterministic(catalog in arb_catalog(30)) {
        let optimizer = PlanOptimizer::new(&catalog, PlannerConfig::default());
        let first = optimizer.optimize(&catalog);
        let second = optimizer.optimize(&catalog);
        prop_assert_eq!(first, second);

        // A rebuilt optimizer over the same catalog agrees too.
        let rebuilt = PlanOptimizer::new(&catalog, PlannerConfig::default());
        let third = rebuilt.optimize(&catalog);
        let fresh = optimizer.optimize(&catalog);
        prop_assert_eq!(fresh, third);
    }

    /// Optimizing a plan again returns it unchanged once the per-source and
    /// price invariants already hold -- with one caveat: conflict resolution
    /// consults the full catalog index, so re-runs are only checked for
    /// termination and subset here.
    #[test]
    fn reoptimizing_a_plan_never_grows_it(catalog in arb_catalog(30)) {
        let optimizer = PlanOptimizer::new(&catalog, PlannerConfig::default());
        let plan = optimizer.optimize(&catalog);
        let replanned = optimizer.optimize(&plan);
        prop_assert!(replanned.len() <= plan.len());

        let planned: HashSet<GoodId> = plan.iter().map(|good| good.id).collect();
        for good in &replanned {
            prop_assert!(planned.contains(&good.id));
        }
    }
}
