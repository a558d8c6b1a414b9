//! Granary Core -- the production-planning engine for farm-style games.
//!
//! Given a catalog of produceable goods (each with a sale price, a producing
//! building, and an optional recipe), the planner selects the subset a player
//! should actively produce to maximize profit, resolving conflicts caused by
//! shared buildings and nested ingredient dependencies.
//!
//! # Six-Stage Selection Pipeline
//!
//! Each call to [`planner::PlanOptimizer::optimize`] rewrites a working list
//! through the following stages, strictly in order:
//!
//! 1. **Per-source best pick** -- keep the highest-priced good per building.
//! 2. **Base-product pruning** -- drop raw materials already produced inside
//!    a selected good's ingredient chain.
//! 3. **Ingredient pruning** -- drop goods consumed as ingredients by a
//!    higher-priced selection.
//! 4. **Source exclusion** -- drop goods from configured excluded buildings.
//! 5. **Source-conflict resolution** -- drop goods whose building is needed
//!    to supply ingredients for a higher-priced selection.
//! 6. **Profitability filter** -- drop goods with non-positive price.
//!
//! # Key Types
//!
//! - [`planner::PlanOptimizer`] -- Pipeline orchestrator; the single entry
//!   point. Pure and deterministic: no errors, no I/O, no shared mutable
//!   state between calls.
//! - [`good::Good`] -- A produceable item: price, unlock level, duration,
//!   recipe, and producing building (its `source`).
//! - [`index::GoodsIndex`] -- Immutable id-to-good lookup built once per
//!   optimizer (frozen at construction).
//! - [`chain`] -- Cycle-safe depth-first traversals over the ingredient
//!   graph. Dangling references are skipped, never an error; cycles are cut
//!   by per-traversal visited sets.

pub mod chain;
pub mod good;
pub mod id;
pub mod index;
pub mod planner;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use good::{Good, IngredientRef, Minutes};
pub use id::GoodId;
pub use index::GoodsIndex;
pub use planner::{PlanOptimizer, PlannerConfig};
