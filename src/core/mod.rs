//! # Core Domain
//!
//! Pure logic, no I/O. Amicable-number math, descriptive statistics, the
//! housing dataset and its queries, unit conversion, and configuration.

pub mod amicable;
pub mod config;
pub mod convert;
pub mod housing;
pub mod stats;

pub use amicable::{aliquot_sum, are_amicable, divisors, is_perfect};
pub use config::StudyConfig;
pub use convert::{sqft_to_m2, SQFT_TO_M2};
pub use housing::{Column, Dataset, HouseRecord};
pub use stats::{ColumnSummary, CorrelationMatrix};
