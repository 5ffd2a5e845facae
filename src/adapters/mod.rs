//! # Adapters
//!
//! Swappable implementations of port traits.
//!
//! - Loaders: CSV file, in-memory fixture
//! - Renderers: colored text heatmap
//!
//! Each adapter implements one port trait. Adapters can be swapped without
//! changing core logic.

pub mod csv;
pub mod heatmap;
pub mod memory;

pub use csv::CsvLoader;
pub use heatmap::TextHeatmap;
pub use memory::MemoryLoader;
