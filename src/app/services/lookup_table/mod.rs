//! Code -> integer lookup tables for categorical columns
//!
//! Each [`LookupCategory`] gets its own [`LookupTable`], built once at
//! startup and read-only afterwards. Tables are held together in a
//! [`LookupTables`] registry that is passed explicitly to the transcoder.
//!
//! ## Architecture
//!
//! - [`builder`] - Reading reference files and the inline cancellation table
//! - [`stats`] - Per-table loading statistics

pub mod builder;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use stats::LoadStats;

use crate::app::models::LookupCategory;
use std::collections::HashMap;

/// Mapping from code string to sequential integer id for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    category: LookupCategory,
    ids: HashMap<String, i32>,
}

impl LookupTable {
    /// Create an empty table
    pub fn new(category: LookupCategory) -> Self {
        Self {
            category,
            ids: HashMap::new(),
        }
    }

    /// Map `code` to `id`, replacing any earlier id for the same code
    pub fn insert(&mut self, code: impl Into<String>, id: i32) {
        self.ids.insert(code.into(), id);
    }

    pub fn category(&self) -> LookupCategory {
        self.category
    }

    /// Id assigned to a code
    pub fn id_for(&self, code: &str) -> Option<i32> {
        self.ids.get(code).copied()
    }

    /// Code currently mapped to an id (reverse lookup)
    pub fn code_for(&self, id: i32) -> Option<&str> {
        self.ids
            .iter()
            .find(|&(_, &value)| value == id)
            .map(|(code, _)| code.as_str())
    }

    /// Number of distinct codes
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// All entries ordered by id
    pub fn entries(&self) -> Vec<(&str, i32)> {
        let mut entries: Vec<(&str, i32)> = self
            .ids
            .iter()
            .map(|(code, &id)| (code.as_str(), id))
            .collect();
        entries.sort_by_key(|&(_, id)| id);
        entries
    }
}

/// Registry of lookup tables, one per category
#[derive(Debug, Clone, Default)]
pub struct LookupTables {
    tables: HashMap<LookupCategory, LookupTable>,
}

impl LookupTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table, replacing any table of the same category
    pub fn insert(&mut self, table: LookupTable) {
        self.tables.insert(table.category(), table);
    }

    /// Table for a category
    pub fn get(&self, category: LookupCategory) -> Option<&LookupTable> {
        self.tables.get(&category)
    }

    /// Check whether a category has a table
    pub fn contains(&self, category: LookupCategory) -> bool {
        self.tables.contains_key(&category)
    }

    /// Number of tables held
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}
