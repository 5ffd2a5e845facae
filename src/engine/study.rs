//! # Study Engine
//!
//! The main exploration orchestrator.
//!
//! This struct wires together:
//! - A loader (Load port)
//! - A renderer (Render port)
//! - Configuration
//!
//! And exposes a unified API for summarizing, correlating, converting, and
//! querying the housing dataset. The dataset is loaded once at open time;
//! every operation after that is pure and infallible apart from rendering.

use log::{debug, info};

use comfy_table::{presets, Table};

use crate::adapters::{CsvLoader, TextHeatmap};
use crate::core::stats::{correlation_matrix, summarize};
use crate::core::{Column, ColumnSummary, CorrelationMatrix, Dataset, HouseRecord, StudyConfig};
use crate::ports::{Load, LoadResult, Render, RenderResult};

/// Shape and per-column statistics for a dataset.
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    /// Row count
    pub rows: usize,

    /// Column count, identifiers included
    pub columns: usize,

    /// Attribute names in file order
    pub attributes: Vec<String>,

    /// One summary per numeric column
    pub summaries: Vec<ColumnSummary>,
}

/// One row of the sqft-to-m2 conversion preview.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaPreview {
    /// Listing id
    pub id: u64,

    /// Living area, square feet
    pub sqft_living: f64,

    /// Living area, square metres
    pub m2_living: f64,

    /// Lot area, square feet
    pub sqft_lot: f64,

    /// Lot area, square metres
    pub m2_lot: f64,
}

/// The main study engine.
///
/// Loads the dataset through a Load adapter at open time, then answers
/// statistical and query operations over it.
pub struct Study {
    /// Configuration
    config: StudyConfig,

    /// The loaded dataset
    dataset: Dataset,

    /// Renderer backend (Render port)
    renderer: Box<dyn Render>,
}

impl Study {
    /// Open a study with default adapters.
    ///
    /// Uses CsvLoader on the configured path and TextHeatmap.
    pub fn open(config: StudyConfig) -> LoadResult<Self> {
        let loader = CsvLoader::new(&config.data_path);
        Self::with_adapters(config, Box::new(loader), Box::new(TextHeatmap::new()))
    }

    /// Open with custom adapters.
    pub fn with_adapters(
        config: StudyConfig,
        loader: Box<dyn Load>,
        renderer: Box<dyn Render>,
    ) -> LoadResult<Self> {
        let dataset = loader.load()?;
        info!("study opened: {} rows", dataset.len());

        Ok(Self {
            config,
            dataset,
            renderer,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &StudyConfig {
        &self.config
    }

    /// Get the loaded dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    // ========================================================================
    // SUMMARY OPERATIONS
    // ========================================================================

    /// Shape, attribute names, and per-column descriptive statistics.
    pub fn summary(&self) -> DatasetSummary {
        let (rows, columns) = self.dataset.shape();

        let summaries = self
            .dataset
            .numeric_columns()
            .iter()
            .map(|(name, values)| summarize(name, values))
            .collect();

        DatasetSummary {
            rows,
            columns,
            attributes: self
                .dataset
                .attributes()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            summaries,
        }
    }

    /// The summary as a printable table.
    pub fn summary_table(&self) -> String {
        let summary = self.summary();

        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL_CONDENSED);
        table.set_header(vec!["column", "count", "mean", "median", "variance", "std"]);

        for s in &summary.summaries {
            table.add_row(vec![
                s.name.clone(),
                s.count.to_string(),
                format!("{:.2}", s.mean),
                format!("{:.2}", s.median),
                format!("{:.2}", s.variance),
                format!("{:.2}", s.std_dev),
            ]);
        }

        table.to_string()
    }

    // ========================================================================
    // CORRELATION OPERATIONS
    // ========================================================================

    /// Pearson correlation matrix over the numeric columns.
    pub fn correlation(&self) -> CorrelationMatrix {
        debug!("computing correlation over {} columns", Column::ALL.len());
        correlation_matrix(&self.dataset.numeric_columns())
    }

    /// The correlation matrix rendered through the configured renderer.
    pub fn heatmap(&self) -> RenderResult<String> {
        self.renderer.render(&self.correlation())
    }

    // ========================================================================
    // CONVERSION OPERATIONS
    // ========================================================================

    /// Sqft-to-m2 conversion over the first `preview_rows` rows.
    pub fn metric_preview(&self) -> Vec<AreaPreview> {
        self.dataset
            .records()
            .iter()
            .take(self.config.preview_rows)
            .map(|r| AreaPreview {
                id: r.id,
                sqft_living: r.sqft_living,
                m2_living: r.living_m2(),
                sqft_lot: r.sqft_lot,
                m2_lot: r.lot_m2(),
            })
            .collect()
    }

    // ========================================================================
    // QUERY OPERATIONS
    // ========================================================================

    /// The house with the largest living area.
    pub fn largest_living_area(&self) -> Option<&HouseRecord> {
        self.dataset.largest_living_area()
    }

    /// Houses built in the inclusive year range.
    pub fn built_between(&self, from: u32, to: u32) -> Vec<&HouseRecord> {
        self.dataset.built_between(from, to)
    }

    /// Among renovated houses, the one with the smallest lot.
    pub fn renovated_smallest_lot(&self) -> Option<&HouseRecord> {
        self.dataset.renovated_smallest_lot()
    }

    /// Houses whose living area exceeds the given size in square metres.
    pub fn living_area_over_m2(&self, min_m2: f64) -> Vec<&HouseRecord> {
        self.dataset.living_area_over_m2(min_m2)
    }

    /// The cheapest house with exactly the given floor count.
    pub fn cheapest_with_floors(&self, floors: f64) -> Option<&HouseRecord> {
        self.dataset.cheapest_with_floors(floors)
    }

    /// Three-floor houses priced above the mean with bedroom and bathroom
    /// counts below their means.
    pub fn upscale_compact(&self) -> Vec<&HouseRecord> {
        self.dataset.upscale_compact()
    }
}
