//! # CSV Loader Adapter
//!
//! Reads the housing dataset from a CSV file with a header row, one
//! [`HouseRecord`](crate::core::HouseRecord) per line.
//!
//! Extra columns in the file are ignored; missing or unparseable fields are
//! reported with their line number. A file that parses to zero rows is an
//! error, not an empty dataset -- every downstream statistic assumes at
//! least one observation.

use std::path::PathBuf;

use log::{debug, info};

use crate::core::{Dataset, HouseRecord};
use crate::ports::{Load, LoadError, LoadResult};

/// Loads a dataset from a CSV file on disk.
pub struct CsvLoader {
    /// Path to the CSV file
    path: PathBuf,
}

impl CsvLoader {
    /// Create a loader for the given path. Nothing is read until `load`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this loader reads from.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Load for CsvLoader {
    fn load(&self) -> LoadResult<Dataset> {
        if !self.path.exists() {
            return Err(LoadError::NotFound(self.path.clone()));
        }

        debug!("reading housing data from {}", self.path.display());

        let mut reader = csv::Reader::from_path(&self.path).map_err(from_csv_error)?;

        let mut records = Vec::new();
        for result in reader.deserialize::<HouseRecord>() {
            let record = result.map_err(from_csv_error)?;
            records.push(record);
        }

        if records.is_empty() {
            return Err(LoadError::Empty);
        }

        info!(
            "loaded {} housing records from {}",
            records.len(),
            self.path.display()
        );

        Ok(Dataset::new(records))
    }
}

/// Map a csv-crate error onto the Load port's taxonomy.
fn from_csv_error(e: csv::Error) -> LoadError {
    let line = e.position().map(|p| p.line()).unwrap_or(0);
    if e.is_io_error() {
        match e.into_kind() {
            csv::ErrorKind::Io(io) => LoadError::Io(io),
            other => LoadError::Malformed {
                line,
                reason: format!("{:?}", other),
            },
        }
    } else {
        LoadError::Malformed {
            line,
            reason: e.to_string(),
        }
    }
}
