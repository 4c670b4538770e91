//! Application constants for the airline preprocessor
//!
//! This module contains the dataset column layout, reference file names,
//! default values and the fixed cancellation reason mapping.

// =============================================================================
// Dataset Layout
// =============================================================================

/// Column names of the airline on-time-performance dataset, in file order
pub const AIRLINE_COLUMNS: [&str; 29] = [
    "Year",
    "Month",
    "DayofMonth",
    "DayOfWeek",
    "DepTime",
    "CRSDepTime",
    "ArrTime",
    "CRSArrTime",
    "UniqueCarrier",
    "FlightNum",
    "TailNum",
    "ActualElapsedTime",
    "CRSElapsedTime",
    "AirTime",
    "ArrDelay",
    "DepDelay",
    "Origin",
    "Dest",
    "Distance",
    "TaxiIn",
    "TaxiOut",
    "Cancelled",
    "CancellationCode",
    "Diverted",
    "CarrierDelay",
    "WeatherDelay",
    "NASDelay",
    "SecurityDelay",
    "LateAircraftDelay",
];

/// Field delimiter used by the dataset and the reference files
pub const FIELD_DELIMITER: u8 = b',';

/// Record terminator
pub const LINE_TERMINATOR: u8 = b'\n';

/// Literal marker for a missing value in the source data
pub const MISSING_MARKER: &str = "NA";

// =============================================================================
// Defaults
// =============================================================================

/// Integer written in place of missing or unknown values
pub const DEFAULT_MISSING_VALUE: i32 = -1;

/// Directory searched for the reference files when none is given
pub const DEFAULT_REFERENCE_DIR: &str = ".";

/// Number of lines between progress bar refreshes
pub const PROGRESS_REFRESH_LINES: u64 = 100_000;

/// Read buffer size for the byte filter
pub const CLEAN_BUFFER_SIZE: usize = 64 * 1024;

// =============================================================================
// Reference Data
// =============================================================================

/// Carrier reference file (quoted codes)
pub const CARRIERS_FILE_NAME: &str = "carriers.csv";

/// Aircraft reference file (unquoted tail numbers)
pub const AIRCRAFT_FILE_NAME: &str = "plane-data.csv";

/// Airport reference file (quoted IATA codes)
pub const AIRPORTS_FILE_NAME: &str = "airports.csv";

/// Cancellation reasons: A = carrier, B = weather, C = NAS, D = security
pub const CANCELLATION_CODES: &[(&str, i32)] = &[("A", 1), ("B", 2), ("C", 3), ("D", 4)];
