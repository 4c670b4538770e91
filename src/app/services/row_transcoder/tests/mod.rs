//! Shared fixtures for row transcoder tests

use crate::app::models::LookupCategory;
use crate::app::services::lookup_table::{LookupTable, LookupTables};


/// Sample row from the 1987 file (29 columns)
pub const SAMPLE_ROW: &str =
    "1987,10,14,3,741,730,912,849,PS,1451,NA,91,79,NA,23,11,SAN,SFO,447,NA,NA,0,NA,0,NA,NA,NA,NA,NA";

/// A 2008 row with every categorical column populated
pub const FULL_ROW: &str =
    "2008,1,3,4,2003,1955,2211,2225,WN,335,N712SW,128,150,116,-14,8,IAD,TPA,810,4,8,0,B,0,2,0,0,0,-3";

/// Tables covering every code used by the sample rows
pub fn create_full_tables() -> LookupTables {
    let mut carriers = LookupTable::new(LookupCategory::Carrier);
    carriers.insert("AA", 1);
    carriers.insert("PS", 2);
    carriers.insert("WN", 3);

    let mut aircraft = LookupTable::new(LookupCategory::Aircraft);
    aircraft.insert("N050AA", 1);
    aircraft.insert("N712SW", 2);

    let mut airports = LookupTable::new(LookupCategory::Airport);
    airports.insert("IAD", 1);
    airports.insert("SAN", 2);
    airports.insert("SFO", 3);
    airports.insert("TPA", 4);

    let mut tables = LookupTables::new();
    tables.insert(carriers);
    tables.insert(aircraft);
    tables.insert(airports);
    tables.insert(LookupTable::cancellation_codes());
    tables
}

/// Replace one column of a comma-separated row
pub fn with_column(row: &str, index: usize, value: &str) -> String {
    let mut fields: Vec<&str> = row.split(',').collect();
    fields[index] = value;
    fields.join(",")
}
