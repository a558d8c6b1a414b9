//! Record resolution and the catalog query surface.
//!
//! Resolution turns on-disk [`GoodRecord`]s into planner [`Good`]s in two
//! phases, mirroring how goods reference each other by name in data files:
//! first every record's name is bound to a sequential [`GoodId`] in file
//! order, then each record is built with its ingredient names resolved
//! through that binding. Anomalies (dangling names, duplicate names, bad
//! durations) are logged and absorbed, never fatal -- one bad row must not
//! sink a catalog load.

use crate::parse::{parse_duration, parse_needs};
use crate::schema::{GoodRecord, IngredientEntry, RawRow};
use granary_core::{Good, GoodId, IngredientRef};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Resolve data-file records into planner goods.
///
/// Ids are assigned in file order. Duplicate names keep their first binding
/// (the later record still becomes a good of its own). A needs list that
/// leads with the good itself is treated as "no recipe".
pub fn resolve_records(records: &[GoodRecord]) -> Vec<Good> {
    let mut name_to_id: HashMap<&str, GoodId> = HashMap::new();
    for (position, record) in records.iter().enumerate() {
        match name_to_id.entry(record.name.as_str()) {
            Entry::Vacant(slot) => {
                slot.insert(GoodId(position as u32));
            }
            Entry::Occupied(_) => {
                log::warn!(
                    "duplicate good name '{}'; ingredient references keep the first id",
                    record.name
                );
            }
        }
    }

    records
        .iter()
        .enumerate()
        .map(|(position, record)| resolve_record(record, GoodId(position as u32), &name_to_id))
        .collect()
}

fn resolve_record(
    record: &GoodRecord,
    id: GoodId,
    name_to_id: &HashMap<&str, GoodId>,
) -> Good {
    let production_minutes = if record.time.is_empty() {
        0
    } else {
        match parse_duration(&record.time) {
            Ok(minutes) => minutes,
            Err(err) => {
                log::warn!("good '{}': {err}; assuming instant", record.name);
                0
            }
        }
    };

    let mut ingredients: Vec<IngredientRef> = record
        .ingredients
        .iter()
        .filter_map(|entry| match name_to_id.get(entry.name.as_str()) {
            Some(&target) => Some(IngredientRef {
                good: target,
                name: entry.name.clone(),
                quantity: entry.quantity,
            }),
            None => {
                log::warn!(
                    "good '{}': unresolved ingredient '{}', skipping",
                    record.name,
                    entry.name
                );
                None
            }
        })
        .collect();

    // A needs list that leads with the good itself means "no recipe".
    if ingredients.first().is_some_and(|first| first.good == id) {
        ingredients.clear();
    }

    Good {
        id,
        name: record.name.clone(),
        required_level: record.level,
        max_price: record.price,
        production_minutes,
        experience: record.xp,
        ingredients,
        source: record.source.clone(),
    }
}

/// Turn raw imported rows into catalog records: skip empty names, title-case
/// the name, strip the source suffix, and parse the need list into named
/// ingredient entries. The duration string is carried through verbatim and
/// parsed at resolution.
pub fn rows_to_records(rows: &[RawRow]) -> Vec<GoodRecord> {
    use crate::parse::{capitalize_words, normalize_source};

    rows.iter()
        .filter(|row| !row.name.is_empty())
        .map(|row| GoodRecord {
            name: capitalize_words(&row.name),
            level: row.level,
            price: row.price,
            time: row.time_str.clone(),
            xp: row.xp,
            source: normalize_source(&row.source),
            ingredients: parse_needs(&row.raw_needs)
                .into_iter()
                .map(|(name, quantity)| IngredientEntry { name, quantity })
                .collect(),
        })
        .collect()
}

/// An in-memory catalog snapshot with the query surface the serving layer
/// uses: everything, by name, or the level-filtered "available" subset that
/// feeds the planner.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    goods: Vec<Good>,
}

impl Catalog {
    pub fn new(goods: Vec<Good>) -> Self {
        Self { goods }
    }

    pub fn from_records(records: &[GoodRecord]) -> Self {
        Self::new(resolve_records(records))
    }

    pub fn all(&self) -> &[Good] {
        &self.goods
    }

    pub fn get(&self, id: GoodId) -> Option<&Good> {
        self.goods.iter().find(|good| good.id == id)
    }

    /// Exact-name lookup.
    pub fn by_name(&self, name: &str) -> Option<&Good> {
        self.goods.iter().find(|good| good.name == name)
    }

    /// Goods unlocked at the given player level, in catalog order.
    pub fn unlocked_at(&self, level: u32) -> Vec<Good> {
        self.goods
            .iter()
            .filter(|good| good.required_level <= level)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.goods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goods.is_empty()
    }

    pub fn into_goods(self) -> Vec<Good> {
        self.goods
    }
}

// ===========================================================================
// Tests
// ===========================================================================
