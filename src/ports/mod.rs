//! # Ports
//!
//! Trait contracts the engine talks through. Adapters implement them.
//!
//! - **Load**: produce a [`Dataset`] from wherever the rows live.
//! - **Render**: turn a correlation matrix into displayable text.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::{CorrelationMatrix, Dataset};

/// Errors a loader can produce.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data file does not exist
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// The file exists but could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A row failed to parse
    #[error("malformed record at line {line}: {reason}")]
    Malformed {
        /// 1-based line number, 0 when unknown
        line: u64,
        /// What the parser rejected
        reason: String,
    },

    /// The file parsed but contained no rows
    #[error("dataset is empty")]
    Empty,
}

/// Result alias for Load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Loads a housing dataset.
pub trait Load {
    /// Produce the full dataset. Must never return an empty one; loaders
    /// report that as [`LoadError::Empty`].
    fn load(&self) -> LoadResult<Dataset>;
}

/// Errors a renderer can produce.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Nothing to draw
    #[error("correlation matrix has no columns")]
    EmptyMatrix,
}

/// Result alias for Render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Renders a correlation matrix as text.
pub trait Render {
    /// Produce a displayable heatmap for the matrix.
    fn render(&self, matrix: &CorrelationMatrix) -> RenderResult<String>;
}
