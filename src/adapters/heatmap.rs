//! # Text Heatmap Renderer
//!
//! Draws a correlation matrix as a colored table in the terminal.
//!
//! By default the upper triangle and diagonal are masked (blank), the same
//! view a masked seaborn heatmap gives: the matrix is symmetric and the
//! diagonal is always 1, so only the lower triangle carries information.
//!
//! Cells are shaded on a cool/warm scale: strong negative correlations in
//! blue, strong positive in red, weak ones unshaded.

use comfy_table::{presets, Cell, Color, Table};

use crate::core::CorrelationMatrix;
use crate::ports::{Render, RenderError, RenderResult};

/// Renders correlation matrices as colored text tables.
pub struct TextHeatmap {
    /// Blank out the upper triangle and diagonal
    mask_upper: bool,

    /// Decimal places per cell
    precision: usize,
}

impl TextHeatmap {
    /// Masked renderer with 2-decimal cells.
    pub fn new() -> Self {
        Self {
            mask_upper: true,
            precision: 2,
        }
    }

    /// Render the full symmetric matrix, diagonal included.
    pub fn unmasked() -> Self {
        Self {
            mask_upper: false,
            precision: 2,
        }
    }

    /// Override the decimal places per cell.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Cool/warm shade for a correlation value.
    fn shade(r: f64) -> Option<Color> {
        if r >= 0.6 {
            Some(Color::Red)
        } else if r >= 0.2 {
            Some(Color::Yellow)
        } else if r <= -0.6 {
            Some(Color::Blue)
        } else if r <= -0.2 {
            Some(Color::Cyan)
        } else {
            None
        }
    }

    fn cell(&self, r: f64) -> Cell {
        if r.is_nan() {
            // Zero-variance column; nothing meaningful to show
            return Cell::new("");
        }

        let text = format!("{:.*}", self.precision, r);
        match Self::shade(r) {
            Some(color) => Cell::new(text).fg(color),
            None => Cell::new(text),
        }
    }
}

impl Default for TextHeatmap {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for TextHeatmap {
    fn render(&self, matrix: &CorrelationMatrix) -> RenderResult<String> {
        if matrix.columns.is_empty() {
            return Err(RenderError::EmptyMatrix);
        }

        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL_CONDENSED);

        let mut header = vec![Cell::new("")];
        header.extend(matrix.columns.iter().map(Cell::new));
        table.set_header(header);

        for (i, name) in matrix.columns.iter().enumerate() {
            let mut row = vec![Cell::new(name)];
            for j in 0..matrix.columns.len() {
                if self.mask_upper && j >= i {
                    row.push(Cell::new(""));
                } else {
                    row.push(self.cell(matrix.values[i][j]));
                }
            }
            table.add_row(row);
        }

        Ok(table.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> CorrelationMatrix {
        CorrelationMatrix {
            columns: vec!["price".to_string(), "sqft".to_string()],
            values: vec![vec![1.0, 0.85], vec![0.85, 1.0]],
        }
    }

    #[test]
    fn test_render_masked_hides_upper_triangle() {
        let out = TextHeatmap::new().render(&matrix()).unwrap();

        // Lower-triangle value appears exactly once; the symmetric copy
        // and the diagonal 1.00s are masked
        assert_eq!(out.matches("0.85").count(), 1);
        assert!(!out.contains("1.00"));
    }

    #[test]
    fn test_render_unmasked_shows_everything() {
        let out = TextHeatmap::unmasked().render(&matrix()).unwrap();

        assert_eq!(out.matches("0.85").count(), 2);
        assert_eq!(out.matches("1.00").count(), 2);
    }

    #[test]
    fn test_render_includes_column_labels() {
        let out = TextHeatmap::new().render(&matrix()).unwrap();
        assert!(out.contains("price"));
        assert!(out.contains("sqft"));
    }

    #[test]
    fn test_render_empty_matrix() {
        let empty = CorrelationMatrix {
            columns: vec![],
            values: vec![],
        };
        let result = TextHeatmap::new().render(&empty);
        assert!(matches!(result, Err(RenderError::EmptyMatrix)));
    }

    #[test]
    fn test_render_nan_as_blank() {
        let m = CorrelationMatrix {
            columns: vec!["a".to_string(), "flat".to_string()],
            values: vec![vec![1.0, f64::NAN], vec![f64::NAN, f64::NAN]],
        };
        let out = TextHeatmap::new().render(&m).unwrap();
        assert!(!out.contains("NaN"));
    }

    #[test]
    fn test_precision() {
        let out = TextHeatmap::unmasked()
            .with_precision(3)
            .render(&matrix())
            .unwrap();
        assert!(out.contains("0.850"));
    }
}
