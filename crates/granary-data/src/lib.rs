//! Granary Data -- catalog files, parsing, and queries for the planner.
//!
//! The planner in `granary-core` consumes a complete in-memory catalog of
//! [`Good`] records. This crate owns everything on the way there:
//!
//! - [`schema`] -- serde structs for catalog data files (goods referenced by
//!   name) and for raw imported table rows.
//! - [`parse`] -- the text pipeline raw rows go through: duration strings,
//!   ingredient need lists, word capitalization, source-cell normalization.
//! - [`catalog`] -- record resolution (id assignment, name-reference
//!   resolution) and the catalog query surface (by name, by level).
//! - [`store`] -- file persistence with format detection (RON / JSON / TOML
//!   by extension).
//!
//! Resolution is deliberately forgiving: a dangling ingredient name, an
//! unparseable amount, or a bad duration is logged via [`log::warn!`] and
//! skipped, never fatal. Strict errors ([`CatalogStoreError`], [`ParseError`])
//! are reserved for files that cannot be read or parsed at all.
//!
//! [`Good`]: granary_core::Good
//! [`CatalogStoreError`]: store::CatalogStoreError
//! [`ParseError`]: parse::ParseError

pub mod catalog;
pub mod parse;
pub mod schema;
pub mod store;

pub use catalog::Catalog;
pub use schema::{GoodRecord, IngredientEntry, RawRow};
pub use store::{CatalogStore, CatalogStoreError};
