//! Input types: ordered categories and the series drawn over them.

mod series;

pub use series::{Series, SeriesMode};

/// One position on the x axis.
///
/// `key` identifies the category in the output (`data-x` attribute and
/// [`Mark::key`](crate::Mark)); `label` is the text shown under the axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub key: String,
    pub label: String,
}

impl Category {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Ordered categories plus the series drawn against them.
///
/// Categories are drawn in the order given; the dataset does not sort.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    categories: Vec<Category>,
    series: Vec<Series>,
}

impl Dataset {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            series: Vec::new(),
        }
    }

    /// Append a series. Series are drawn in insertion order, so line series
    /// added after bar series end up on top.
    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Smallest and largest value over every series, if any.
    pub(crate) fn value_range(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
