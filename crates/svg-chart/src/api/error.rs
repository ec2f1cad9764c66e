//! Unified error type for the svg-chart public API.

use std::fmt;

/// Error returned when a [`Dataset`](crate::Dataset) cannot be charted.
///
/// # Example
///
/// ```
/// use svg_chart::{ChartError, Dataset, TimeSeriesChart};
///
/// let err = TimeSeriesChart::new(400, 300)
///     .render(&Dataset::new(Vec::new()))
///     .unwrap_err();
/// assert_eq!(err, ChartError::EmptyDataset);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    /// No categories or no series to draw
    EmptyDataset,
    /// A series does not carry one value (or label) per category
    LengthMismatch {
        /// Name of the offending series
        series: String,
        /// Number of categories in the dataset
        expected: usize,
        /// Number of values or labels found in the series
        actual: usize,
    },
    /// A value is NaN or infinite
    NonFiniteValue {
        /// Name of the offending series
        series: String,
        /// Position of the value within the series
        index: usize,
    },
    /// Chart area too small to hold the plot margins
    InvalidSize {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::EmptyDataset => write!(f, "dataset has no categories or no series"),
            ChartError::LengthMismatch {
                series,
                expected,
                actual,
            } => write!(
                f,
                "series '{}' has {} entries, expected {}",
                series, actual, expected
            ),
            ChartError::NonFiniteValue { series, index } => {
                write!(f, "series '{}' has a non-finite value at {}", series, index)
            }
            ChartError::InvalidSize { width, height } => {
                write!(f, "chart size {}x{} is too small", width, height)
            }
        }
    }
}

impl std::error::Error for ChartError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_length_mismatch() {
        let err = ChartError::LengthMismatch {
            series: "Income".to_string(),
            expected: 9,
            actual: 8,
        };
        assert_eq!(err.to_string(), "series 'Income' has 8 entries, expected 9");
    }

    #[test]
    fn test_display_non_finite() {
        let err = ChartError::NonFiniteValue {
            series: "Balance".to_string(),
            index: 3,
        };
        assert_eq!(
            err.to_string(),
            "series 'Balance' has a non-finite value at 3"
        );
    }
}
