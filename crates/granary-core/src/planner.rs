//! The six-stage selection pipeline and its orchestrator.
//!
//! [`PlanOptimizer::optimize`] turns a level-filtered list of available goods
//! into a conflict-free, profit-maximizing production plan. Each stage
//! rewrites the working list; no stage mutates a good's contents. The whole
//! pipeline is pure and deterministic: identical catalog, config, and input
//! sequence produce an identical plan.

use crate::chain::{base_products_in_chain, ingredient_sources, mark_chain_ingredients};
use crate::good::Good;
use crate::id::GoodId;
use crate::index::GoodsIndex;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Planner configuration. Loadable from a data file through `granary-data`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Buildings whose output is never worth producing standalone. Goods from
    /// these sources are dropped regardless of price.
    #[serde(default)]
    pub excluded_sources: HashSet<String>,
}

impl PlannerConfig {
    /// Config excluding the named sources and nothing else.
    pub fn excluding<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded_sources: sources.into_iter().map(Into::into).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// PlanOptimizer
// ---------------------------------------------------------------------------

/// Pipeline orchestrator. Built once per catalog snapshot; `optimize` may be
/// called any number of times (concurrently, too -- it takes `&self` and
/// allocates its working state per call).
#[derive(Debug, Clone)]
pub struct PlanOptimizer {
    index: GoodsIndex,
    config: PlannerConfig,
}

impl PlanOptimizer {
    /// Build the optimizer over a full catalog. The id-to-good index is
    /// constructed once, here; a catalog refresh means a new optimizer.
    pub fn new(catalog: &[Good], config: PlannerConfig) -> Self {
        Self {
            index: GoodsIndex::new(catalog),
            config,
        }
    }

    pub fn index(&self) -> &GoodsIndex {
        &self.index
    }

    /// Compute the production plan for the given available goods (the caller
    /// applies level filtering beforehand).
    ///
    /// Never fails: dangling references, cyclic recipes, and empty inputs
    /// degrade to smaller or empty plans. The result is ordered by descending
    /// price.
    pub fn optimize(&self, available: &[Good]) -> Vec<Good> {
        let working = best_per_source(available);
        let working = self.prune_chained_base_products(working);
        let working = self.prune_consumed_ingredients(working);
        let working = self.drop_excluded_sources(working);
        let working = self.resolve_source_conflicts(working);
        drop_unprofitable(working)
    }

    /// Stage 2: drop base products already produced inside a selected good's
    /// ingredient chain -- no need to also produce them standalone.
    ///
    /// Chains are traversed through the full catalog index, not just the
    /// working list. Preserves relative order.
    fn prune_chained_base_products(&self, working: Vec<Good>) -> Vec<Good> {
        let mut covered: HashSet<GoodId> = HashSet::new();
        for good in working.iter().filter(|good| !good.is_base_product()) {
            covered.extend(base_products_in_chain(&self.index, good));
        }

        working
            .into_iter()
            .filter(|good| !(good.is_base_product() && covered.contains(&good.id)))
            .collect()
    }

    /// Stage 3: drop selected goods that are themselves consumed as
    /// ingredients by another selected good.
    ///
    /// Re-sorts descending by price, then marks every id appearing in any
    /// selected good's ingredient chain.
    fn prune_consumed_ingredients(&self, mut working: Vec<Good>) -> Vec<Good> {
        sort_by_price_descending(&mut working);

        let mut consumed: HashSet<GoodId> = HashSet::new();
        for good in &working {
            mark_chain_ingredients(&self.index, good, &mut consumed);
        }

        working
            .into_iter()
            .filter(|good| !consumed.contains(&good.id))
            .collect()
    }

    /// Stage 4: drop goods from configured excluded sources. Preserves
    /// relative order.
    fn drop_excluded_sources(&self, working: Vec<Good>) -> Vec<Good> {
        working
            .into_iter()
            .filter(|good| !self.config.excluded_sources.contains(&good.source))
            .collect()
    }

    /// Stage 5: drop goods whose building is needed to supply ingredients for
    /// a higher-priced kept good.
    ///
    /// Walks the list from highest price down, accumulating the sources
    /// required by each surviving good's ingredient chain; any later good
    /// produced by an already-required source is marked for removal.
    fn resolve_source_conflicts(&self, mut working: Vec<Good>) -> Vec<Good> {
        sort_by_price_descending(&mut working);

        let mut required_sources: HashSet<String> = HashSet::new();
        let mut removed: HashSet<GoodId> = HashSet::new();

        for (position, good) in working.iter().enumerate() {
            if removed.contains(&good.id) {
                continue;
            }

            let mut visited = HashSet::new();
            required_sources.extend(ingredient_sources(&self.index, good, &mut visited));

            for lower in &working[position + 1..] {
                if required_sources.contains(&lower.source) {
                    removed.insert(lower.id);
                }
            }
        }

        working
            .into_iter()
            .filter(|good| !removed.contains(&good.id))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Stages without index access
// ---------------------------------------------------------------------------

/// Stage 1: keep the highest-priced good per source.
///
/// Partitions preserve first-seen source order; within a partition the first
/// element seeds the running maximum and later elements replace it only on a
/// strictly greater price, so price ties keep the earliest-seen good. The
/// result is sorted descending by price.
fn best_per_source(available: &[Good]) -> Vec<Good> {
    let mut source_order: Vec<&str> = Vec::new();
    let mut best: HashMap<&str, &Good> = HashMap::new();

    for good in available {
        match best.entry(good.source.as_str()) {
            Entry::Vacant(slot) => {
                source_order.push(good.source.as_str());
                slot.insert(good);
            }
            Entry::Occupied(mut slot) => {
                if good.max_price > slot.get().max_price {
                    slot.insert(good);
                }
            }
        }
    }

    let mut picked: Vec<Good> = source_order
        .iter()
        .map(|source| best[source].clone())
        .collect();
    sort_by_price_descending(&mut picked);
    picked
}

/// Stage 6: drop goods that sell for nothing (or worse). Preserves relative
/// order.
fn drop_unprofitable(working: Vec<Good>) -> Vec<Good> {
    working
        .into_iter()
        .filter(|good| good.max_price > 0)
        .collect()
}

/// Stable descending price sort: equal prices keep their prior relative
/// order, which keeps the whole pipeline deterministic for a fixed input
/// sequence.
fn sort_by_price_descending(goods: &mut [Good]) {
    goods.sort_by(|a, b| b.max_price.cmp(&a.max_price));
}

// ===========================================================================
// Tests
// ===========================================================================
