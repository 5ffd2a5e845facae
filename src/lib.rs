//! # HEARTH - Housing Exploration And Reckoning Toolkit for Homework
//!
//! Two independent surfaces, no interaction between them:
//!
//! - **Amicable numbers**: a pure predicate over integer pairs, built on
//!   brute-force divisor enumeration.
//! - **Housing study**: load a housing-price CSV, summarize it, correlate
//!   its columns, convert its areas to metric, and answer a handful of
//!   filter/aggregate queries.
//!
//! ## Philosophy
//!
//! - **Pure core, swappable adapters** - Hexagonal architecture
//! - **Statistics without surprises** - pandas-compatible conventions
//!   (sample variance, NaN for degenerate columns)
//! - **Errors for I/O only** - everything after loading is total
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        HEARTH                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure math, no I/O)                                   │
//! │    amicable, stats, housing, convert, config                │
//! │                                                              │
//! │  PORTS (trait contracts)                                     │
//! │    Load, Render                                             │
//! │                                                              │
//! │  ADAPTERS (swappable implementations)                       │
//! │    Loaders: Csv, Memory                                     │
//! │    Renderers: TextHeatmap                                   │
//! │                                                              │
//! │  ENGINE (orchestration)                                      │
//! │    Study - the main entry point                             │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hearth::{are_amicable, Study, StudyConfig};
//!
//! // Number theory needs no setup
//! assert!(are_amicable(220, 284));
//!
//! // The study loads its CSV once at open time
//! let study = Study::open(StudyConfig::new("data/house_data.csv"))?;
//! println!("{}", study.summary_table());
//! println!("{}", study.heatmap()?);
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure math, no I/O
/// Contains: amicable predicates, statistics, the housing dataset, config
pub mod core;

/// Port definitions - trait contracts for adapters
/// Contains: Load trait, Render trait
pub mod ports;

/// Adapter implementations - swappable components
/// Contains: csv, memory, heatmap submodules
pub mod adapters;

/// Engine - orchestration layer
/// Contains: Study main struct
pub mod engine;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core
pub use crate::core::amicable::{aliquot_sum, are_amicable, divisors, is_perfect};
pub use crate::core::config::StudyConfig;
pub use crate::core::convert::{sqft_to_m2, SQFT_TO_M2};
pub use crate::core::housing::{Column, Dataset, HouseRecord};
pub use crate::core::stats::{ColumnSummary, CorrelationMatrix};

// Port traits
pub use crate::ports::{Load, LoadError, LoadResult, Render, RenderError, RenderResult};

// Adapters
pub use crate::adapters::{CsvLoader, MemoryLoader, TextHeatmap};

// Engine
pub use crate::engine::{AreaPreview, DatasetSummary, Study};
