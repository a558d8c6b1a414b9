use crate::good::Good;
use crate::id::GoodId;
use std::collections::HashMap;

/// Immutable id-to-good lookup, built once from a full catalog snapshot.
///
/// The index has no mutation API after construction -- immutability is
/// enforced by the type system. A catalog refresh builds a brand-new index;
/// in-flight optimizations keep reading the snapshot they were given.
///
/// A lookup miss is never a fatal condition: an [`IngredientRef`] is allowed
/// to point at an id absent from the catalog, and callers treat `None` as
/// "ignore this edge".
///
/// [`IngredientRef`]: crate::good::IngredientRef
#[derive(Debug, Clone)]
pub struct GoodsIndex {
    goods: HashMap<GoodId, Good>,
}

impl GoodsIndex {
    /// Build an index over a full catalog. Duplicate ids keep the last
    /// occurrence; ids are expected to be unique within a catalog.
    pub fn new(catalog: &[Good]) -> Self {
        let goods = catalog
            .iter()
            .map(|good| (good.id, good.clone()))
            .collect();
        Self { goods }
    }

    pub fn get(&self, id: GoodId) -> Option<&Good> {
        self.goods.get(&id)
    }

    pub fn contains(&self, id: GoodId) -> bool {
        self.goods.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.goods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goods.is_empty()
    }
}
