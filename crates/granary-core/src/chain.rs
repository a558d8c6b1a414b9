//! Depth-first traversals over the ingredient-dependency graph.
//!
//! Ingredient references are resolved through a [`GoodsIndex`]; a reference
//! that does not resolve is skipped silently. The graph may contain cycles,
//! so every traversal threads an explicit visited set and never revisits a
//! node -- termination is guaranteed regardless of catalog shape.

use crate::good::Good;
use crate::id::GoodId;
use crate::index::GoodsIndex;
use std::collections::HashSet;

/// Ids of base products reachable (directly or transitively) through `good`'s
/// ingredient chain.
///
/// A resolved ingredient that is itself a base product is recorded and that
/// branch ends; anything else is descended into.
pub fn base_products_in_chain(index: &GoodsIndex, good: &Good) -> HashSet<GoodId> {
    let mut found = HashSet::new();
    let mut visited = HashSet::new();
    visited.insert(good.id);
    collect_base_products(index, good, &mut found, &mut visited);
    found
}

fn collect_base_products(
    index: &GoodsIndex,
    good: &Good,
    found: &mut HashSet<GoodId>,
    visited: &mut HashSet<GoodId>,
) {
    for ingredient in &good.ingredients {
        let Some(node) = index.get(ingredient.good) else {
            continue;
        };
        if node.is_base_product() {
            found.insert(node.id);
        } else if visited.insert(node.id) {
            collect_base_products(index, node, found, visited);
        }
    }
}

/// Distinct `source` values of every good reachable through `good`'s
/// ingredient chain.
///
/// A node already in `visited` contributes an empty set on re-entry. On
/// diamond-shaped graphs this is an approximation, not a full transitive
/// closure after the first visit; it is what cuts cycles.
pub fn ingredient_sources(
    index: &GoodsIndex,
    good: &Good,
    visited: &mut HashSet<GoodId>,
) -> HashSet<String> {
    if !visited.insert(good.id) {
        return HashSet::new();
    }

    let mut sources = HashSet::new();
    for ingredient in &good.ingredients {
        let Some(node) = index.get(ingredient.good) else {
            continue;
        };
        sources.insert(node.source.clone());
        if !node.is_base_product() {
            sources.extend(ingredient_sources(index, node, visited));
        }
    }
    sources
}

/// Insert into `marked` the id of every good appearing anywhere in `good`'s
/// ingredient chain, resolving each reference through the index.
///
/// Carries the same visited guard as the other traversals, so cyclic recipes
/// terminate here too.
pub fn mark_chain_ingredients(index: &GoodsIndex, good: &Good, marked: &mut HashSet<GoodId>) {
    let mut visited = HashSet::new();
    visited.insert(good.id);
    mark_ingredients(index, good, marked, &mut visited);
}

fn mark_ingredients(
    index: &GoodsIndex,
    good: &Good,
    marked: &mut HashSet<GoodId>,
    visited: &mut HashSet<GoodId>,
) {
    for ingredient in &good.ingredients {
        let Some(node) = index.get(ingredient.good) else {
            continue;
        };
        marked.insert(node.id);
        if !node.is_base_product() && visited.insert(node.id) {
            mark_ingredients(index, node, marked, visited);
        }
    }
}
