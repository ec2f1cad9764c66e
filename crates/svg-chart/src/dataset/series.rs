/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesMode {
    /// One bar per category, rising from zero. Label sits above the bar.
    Bar,
    /// A polyline through one marker per category. Label sits above the marker.
    Line,
}

/// One named dimension of a chart.
#[derive(Debug, Clone)]
pub struct Series {
    pub name: String,
    pub mode: SeriesMode,
    pub color: String,
    pub values: Vec<f64>,
    /// Text drawn above each mark. Empty means no annotations.
    pub labels: Vec<String>,
}

impl Series {
    /// Create a series with the default color for its mode.
    pub fn new(name: impl Into<String>, mode: SeriesMode, values: Vec<f64>) -> Self {
        let color = match mode {
            SeriesMode::Bar => "rgba(230, 126, 34, 0.7)",
            SeriesMode::Line => "rgba(46, 204, 113, 1)",
        };
        Self {
            name: name.into(),
            mode,
            color: color.to_string(),
            values,
            labels: Vec::new(),
        }
    }

    /// Set the fill (bars) or stroke (lines) color. Any CSS color string.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the per-point annotations, one per value.
    pub fn labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }
}
