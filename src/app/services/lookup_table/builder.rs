//! Lookup table construction from reference files
//!
//! Reference files are two-column CSV (code, description) with a header line.
//! The header is skipped unconditionally. Every following line assigns the
//! next id (1-based line counter) to the code in its first column, so a code
//! that appears twice ends up with the later id. Short or empty lines are
//! not rejected: they map an empty code.

use super::{LoadStats, LookupTable, LookupTables};
use crate::app::adapters::line_reader::LineReader;
use crate::app::models::LookupCategory;
use crate::app::services::field_codec::{StringCodec, extract_field};
use crate::config::PrepConfig;
use crate::constants::CANCELLATION_CODES;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, trace};

impl LookupCategory {
    /// How the code column is written in this category's reference file
    ///
    /// Carrier and airport codes are double-quoted, tail numbers are not.
    pub fn code_codec(&self) -> StringCodec {
        match self {
            LookupCategory::Carrier | LookupCategory::Airport => StringCodec::Quoted,
            LookupCategory::Aircraft | LookupCategory::CancellationCode => StringCodec::Plain,
        }
    }
}

impl LookupTable {
    /// Build a table from a reference stream
    pub fn load<R: BufRead>(
        category: LookupCategory,
        reader: R,
        code_codec: StringCodec,
    ) -> Result<(Self, LoadStats)> {
        let mut table = Self::new(category);
        let mut stats = LoadStats::new(category);
        let mut lines = LineReader::new(reader);

        // Header: Code, Description
        if lines
            .next_line()
            .map_err(|e| Error::io(format!("Failed to read {} header", category), e))?
            .is_none()
        {
            debug!("Reference data for {} is empty", category);
            return Ok((table, stats));
        }

        while let Some(line) = lines
            .next_line()
            .map_err(|e| Error::io(format!("Failed to read {} reference data", category), e))?
        {
            stats.data_lines += 1;
            let id = i32::try_from(stats.data_lines).map_err(|_| {
                Error::configuration(format!("Too many {} reference lines", category))
            })?;

            let text = String::from_utf8_lossy(line);
            let code = code_codec.decode(extract_field(&text));
            table.insert(code, id);
        }

        stats.distinct_codes = table.len();
        Ok((table, stats))
    }

    /// Build a table from a reference file on disk
    pub fn load_from_path(category: LookupCategory, path: &Path) -> Result<(Self, LoadStats)> {
        let file = File::open(path)
            .map_err(|e| Error::file_open(format!("{} reference", category), path, e))?;
        debug!("Loading {} codes from {}", category, path.display());

        Self::load(category, BufReader::new(file), category.code_codec())
    }

    /// The fixed cancellation reason table: A = carrier, B = weather, C = NAS, D = security
    pub fn cancellation_codes() -> Self {
        let mut table = Self::new(LookupCategory::CancellationCode);
        for &(code, id) in CANCELLATION_CODES {
            table.insert(code, id);
        }
        table
    }
}

impl LookupTables {
    /// Build the tables for the given categories using the configured reference directory
    ///
    /// Categories without a reference file use their inline table.
    pub fn load(
        config: &PrepConfig,
        categories: impl IntoIterator<Item = LookupCategory>,
    ) -> Result<(Self, Vec<LoadStats>)> {
        let mut tables = Self::new();
        let mut all_stats = Vec::new();

        for category in categories {
            if tables.contains(category) {
                continue;
            }

            let (table, stats) = match config.reference_path(category) {
                Some(path) => LookupTable::load_from_path(category, &path)?,
                None => {
                    let table = LookupTable::cancellation_codes();
                    let stats = LoadStats {
                        category,
                        data_lines: table.len(),
                        distinct_codes: table.len(),
                    };
                    (table, stats)
                }
            };

            info!(
                "Loaded {} {} codes from {} lines",
                stats.distinct_codes, category, stats.data_lines
            );
            for (code, id) in table.entries() {
                trace!("{} {},{}", category, code, id);
            }

            tables.insert(table);
            all_stats.push(stats);
        }

        Ok((tables, all_stats))
    }
}
