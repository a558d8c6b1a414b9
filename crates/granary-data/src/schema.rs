//! Serde structs for catalog data files and raw imported rows.
//!
//! These define the on-disk shape only; name references are resolved into
//! [`Good`] values by [`catalog::resolve_records`].
//!
//! [`Good`]: granary_core::Good
//! [`catalog::resolve_records`]: crate::catalog::resolve_records

use serde::{Deserialize, Serialize};

/// One catalog entry in a data file. Ingredients reference goods by name;
/// the duration is kept as its display string ("2 h 30 min") and parsed at
/// resolution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodRecord {
    pub name: String,
    /// Player level at which the good unlocks.
    #[serde(default)]
    pub level: u32,
    pub price: i64,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub xp: u32,
    pub source: String,
    #[serde(default)]
    pub ingredients: Vec<IngredientEntry>,
}

/// A recipe entry in a data file, referencing another good by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientEntry {
    pub name: String,
    pub quantity: u32,
}

/// The top-level catalog file: a single `goods` table in every format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub goods: Vec<GoodRecord>,
}

/// A raw table row as imported from an external goods listing, before any
/// text processing. Field names mirror the import format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub price: i64,
    #[serde(rename = "timeStr", default)]
    pub time_str: String,
    #[serde(default)]
    pub xp: u32,
    #[serde(rename = "rawNeeds", default)]
    pub raw_needs: String,
    #[serde(default)]
    pub source: String,
}
