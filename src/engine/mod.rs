//! # Engine
//!
//! Orchestration layer.
//! Contains: Study, the main entry point for dataset exploration.

pub mod study;

pub use study::{AreaPreview, DatasetSummary, Study};
