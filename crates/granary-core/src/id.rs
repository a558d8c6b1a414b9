use serde::{Deserialize, Serialize};

/// Identifies a good within one catalog snapshot. Cheap to copy and compare.
///
/// Ids are assigned sequentially when a catalog is resolved and stay stable
/// for the lifetime of that snapshot. A fresh snapshot may assign fresh ids;
/// nothing in the planner outlives the snapshot it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GoodId(pub u32);
