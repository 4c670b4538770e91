//! Column layouts for the airline dataset

use crate::app::models::LookupCategory;
use crate::app::services::field_codec::{FieldCodec, StringCodec};
use crate::constants::AIRLINE_COLUMNS;

/// One column: its name and the codec applied to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub codec: FieldCodec,
}

impl ColumnSpec {
    pub fn new(name: &'static str, codec: FieldCodec) -> Self {
        Self { name, codec }
    }
}

/// Ordered column descriptors for one CSV row format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<ColumnSpec>,
}

impl Schema {
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self { columns }
    }

    /// 29-column airline schema with categorical columns mapped to ids
    pub fn airline() -> Self {
        Self::from_names(|name| match categorical_column(name) {
            Some(category) => FieldCodec::Lookup(category),
            None => FieldCodec::Integer,
        })
    }

    /// 29-column airline schema with categorical columns kept as plain text
    pub fn airline_reformat() -> Self {
        Self::from_names(|name| match categorical_column(name) {
            Some(_) => FieldCodec::Text(StringCodec::Plain),
            None => FieldCodec::Integer,
        })
    }

    fn from_names(codec_for: impl Fn(&str) -> FieldCodec) -> Self {
        let columns = AIRLINE_COLUMNS
            .iter()
            .map(|&name| ColumnSpec::new(name, codec_for(name)))
            .collect();
        Self::new(columns)
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.name == name)
    }

    /// Lookup categories used by the schema, in first-use order, without repeats
    pub fn required_categories(&self) -> Vec<LookupCategory> {
        let mut categories = Vec::new();
        for category in self.columns.iter().filter_map(|c| c.codec.lookup_category()) {
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories
    }
}

/// Lookup category of a categorical airline column
fn categorical_column(name: &str) -> Option<LookupCategory> {
    match name {
        "UniqueCarrier" => Some(LookupCategory::Carrier),
        "TailNum" => Some(LookupCategory::Aircraft),
        "Origin" | "Dest" => Some(LookupCategory::Airport),
        "CancellationCode" => Some(LookupCategory::CancellationCode),
        _ => None,
    }
}
