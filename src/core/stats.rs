//! # Descriptive Statistics
//!
//! Pure statistics over `f64` slices: mean, median, sample variance, sample
//! standard deviation, and Pearson correlation.
//!
//! ## Conventions
//!
//! - Variance and standard deviation use the sample form (divide by n - 1).
//! - An empty slice has no mean or median; variance needs at least two
//!   observations. These cases return `f64::NAN` rather than erroring, so a
//!   degenerate column shows up as a blank cell instead of aborting a whole
//!   report.
//! - Correlation of a zero-variance column with anything is NaN.

/// Descriptive summary of one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    /// Column name
    pub name: String,

    /// Number of observations
    pub count: usize,

    /// Arithmetic mean
    pub mean: f64,

    /// Median (midpoint average for even counts)
    pub median: f64,

    /// Sample variance (n - 1 denominator)
    pub variance: f64,

    /// Sample standard deviation
    pub std_dev: f64,
}

/// Pairwise Pearson correlations over a set of named columns.
///
/// Square and symmetric; `values[i][j]` is the correlation between column i
/// and column j. Diagonal entries are 1.0 unless the column has zero
/// variance, in which case the whole row/column is NaN.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    /// Column names, in matrix order
    pub columns: Vec<String>,

    /// Row-major correlation values
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Correlation between two columns by name.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        Some(self.values[i][j])
    }

    /// Number of columns (the matrix is square).
    pub fn dim(&self) -> usize {
        self.columns.len()
    }
}

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median. Averages the two middle values for even counts. NaN when empty.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Sample variance (n - 1 denominator). NaN for fewer than two values.
pub fn variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }

    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    sum_sq / (values.len() - 1) as f64
}

/// Sample standard deviation.
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Pearson correlation coefficient between two equal-length series.
///
/// NaN when the lengths differ, fewer than two observations, or either
/// series has zero variance.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.len() < 2 {
        return f64::NAN;
    }

    let mx = mean(x);
    let my = mean(y);

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y.iter()) {
        let dx = a - mx;
        let dy = b - my;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return f64::NAN;
    }
    cov / denom
}

/// Summarize one named column.
pub fn summarize(name: &str, values: &[f64]) -> ColumnSummary {
    ColumnSummary {
        name: name.to_string(),
        count: values.len(),
        mean: mean(values),
        median: median(values),
        variance: variance(values),
        std_dev: std_dev(values),
    }
}

/// Build the full correlation matrix for a set of named columns.
///
/// Columns must all have the same length; mismatched pairs come out NaN.
pub fn correlation_matrix(columns: &[(String, Vec<f64>)]) -> CorrelationMatrix {
    let names: Vec<String> = columns.iter().map(|(n, _)| n.clone()).collect();
    let n = columns.len();

    let mut values = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..=i {
            let r = pearson(&columns[i].1, &columns[j].1);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix {
        columns: names,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_mean() {
        assert!((mean(&[1.0, 2.0, 3.0, 4.0]) - 2.5).abs() < EPS);
    }

    #[test]
    fn test_mean_empty_is_nan() {
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_median_odd() {
        assert!((median(&[5.0, 1.0, 3.0]) - 3.0).abs() < EPS);
    }

    #[test]
    fn test_median_even() {
        // midpoint of 2 and 4
        assert!((median(&[4.0, 1.0, 2.0, 8.0]) - 3.0).abs() < EPS);
    }

    #[test]
    fn test_sample_variance() {
        // mean = 3, squared deviations 4+1+0+1+4 = 10, / (5-1) = 2.5
        let v = variance(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((v - 2.5).abs() < EPS);
    }

    #[test]
    fn test_variance_single_value_is_nan() {
        assert!(variance(&[42.0]).is_nan());
    }

    #[test]
    fn test_std_dev() {
        let s = std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((s - 2.5f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn test_pearson_perfect_positive() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        assert!((pearson(&x, &y) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_pearson_perfect_negative() {
        let x = [1.0, 2.0, 3.0];
        let y = [3.0, 2.0, 1.0];
        assert!((pearson(&x, &y) + 1.0).abs() < EPS);
    }

    #[test]
    fn test_pearson_zero_variance_is_nan() {
        let x = [1.0, 1.0, 1.0];
        let y = [1.0, 2.0, 3.0];
        assert!(pearson(&x, &y).is_nan());
    }

    #[test]
    fn test_correlation_matrix_symmetry_and_diagonal() {
        let cols = vec![
            ("a".to_string(), vec![1.0, 2.0, 3.0, 4.0]),
            ("b".to_string(), vec![2.0, 1.0, 4.0, 3.0]),
        ];
        let m = correlation_matrix(&cols);

        assert_eq!(m.dim(), 2);
        assert!((m.values[0][0] - 1.0).abs() < EPS);
        assert!((m.values[1][1] - 1.0).abs() < EPS);
        assert!((m.values[0][1] - m.values[1][0]).abs() < EPS);
    }

    #[test]
    fn test_correlation_matrix_get_by_name() {
        let cols = vec![
            ("x".to_string(), vec![1.0, 2.0, 3.0]),
            ("y".to_string(), vec![2.0, 4.0, 6.0]),
        ];
        let m = correlation_matrix(&cols);

        let r = m.get("x", "y").unwrap();
        assert!((r - 1.0).abs() < EPS);
        assert!(m.get("x", "missing").is_none());
    }

    #[test]
    fn test_summarize() {
        let s = summarize("price", &[10.0, 20.0, 30.0]);
        assert_eq!(s.count, 3);
        assert!((s.mean - 20.0).abs() < EPS);
        assert!((s.median - 20.0).abs() < EPS);
        assert!((s.variance - 100.0).abs() < EPS);
        assert!((s.std_dev - 10.0).abs() < EPS);
    }
}
