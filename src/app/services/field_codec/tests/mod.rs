//! Shared fixtures for field codec tests

use crate::app::models::LookupCategory;
use crate::app::services::lookup_table::{LookupTable, LookupTables};

pub mod scanner_tests;

/// Tables with two carriers, two airports and the cancellation codes
pub fn create_test_tables() -> LookupTables {
    let mut carriers = LookupTable::new(LookupCategory::Carrier);
    carriers.insert("AA", 1);
    carriers.insert("PS", 2);

    let mut airports = LookupTable::new(LookupCategory::Airport);
    airports.insert("SAN", 1);
    airports.insert("SFO", 2);

    let mut tables = LookupTables::new();
    tables.insert(carriers);
    tables.insert(airports);
    tables.insert(LookupTable::cancellation_codes());
    tables
}
