//! # Memory Loader Adapter
//!
//! Serves a fixed set of records from memory. No I/O.
//!
//! Good for:
//! - Testing
//! - Embedding a small dataset directly in an application

use crate::core::{Dataset, HouseRecord};
use crate::ports::{Load, LoadError, LoadResult};

/// In-memory loader over a fixed record set.
pub struct MemoryLoader {
    /// The records handed out on every load
    records: Vec<HouseRecord>,
}

impl MemoryLoader {
    /// Create a loader over the given records.
    pub fn new(records: Vec<HouseRecord>) -> Self {
        Self { records }
    }

    /// Number of records this loader holds.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the loader holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Load for MemoryLoader {
    fn load(&self) -> LoadResult<Dataset> {
        if self.records.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(Dataset::new(self.records.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64) -> HouseRecord {
        HouseRecord {
            id,
            date: "20150101T000000".to_string(),
            price: 400_000.0,
            bedrooms: 3,
            bathrooms: 2.0,
            sqft_living: 1800.0,
            sqft_lot: 6000.0,
            floors: 1.0,
            waterfront: 0,
            condition: 3,
            grade: 7,
            yr_built: 1990,
            yr_renovated: 0,
            zipcode: 98001,
        }
    }

    #[test]
    fn test_memory_loader_load() {
        let loader = MemoryLoader::new(vec![record(1), record(2)]);
        let dataset = loader.load().unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_memory_loader_empty() {
        let loader = MemoryLoader::new(vec![]);
        assert!(matches!(loader.load(), Err(LoadError::Empty)));
    }

    #[test]
    fn test_memory_loader_repeatable() {
        // Loading twice yields the same rows
        let loader = MemoryLoader::new(vec![record(7)]);
        let a = loader.load().unwrap();
        let b = loader.load().unwrap();
        assert_eq!(a.records(), b.records());
    }
}
