//! Declarative description of a chart: which table it reads, which fields
//! become series and how each series is drawn.

use serde::Serialize;

/// Fixed table a chart reads its records from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartTable {
    Balance,
    AdminExpense,
}

/// Chartable field of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesField {
    TotalIncome,
    EndingBalance,
    AdminExpense,
}

/// How a series is drawn on the shared axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesMode {
    Bar,
    Line,
}

impl From<SeriesMode> for svg_chart::SeriesMode {
    fn from(mode: SeriesMode) -> Self {
        match mode {
            SeriesMode::Bar => svg_chart::SeriesMode::Bar,
            SeriesMode::Line => svg_chart::SeriesMode::Line,
        }
    }
}

/// Annotation text rule for each data point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueFormat {
    /// `1,234.50`
    #[default]
    Currency,
}

/// Tick label rule for the value axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisFormat {
    #[default]
    Plain,
    /// `$350,000`
    Currency,
}

impl From<AxisFormat> for svg_chart::TickFormat {
    fn from(format: AxisFormat) -> Self {
        match format {
            AxisFormat::Plain => svg_chart::TickFormat::Plain,
            AxisFormat::Currency => svg_chart::TickFormat::Currency,
        }
    }
}

/// One series of a chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSpec {
    /// Legend name
    pub name: String,
    pub field: SeriesField,
    pub mode: SeriesMode,
    /// CSS color; `None` uses the chart default for the mode
    pub color: Option<String>,
    pub format: ValueFormat,
}

impl SeriesSpec {
    pub fn new(name: impl Into<String>, field: SeriesField, mode: SeriesMode) -> Self {
        Self {
            name: name.into(),
            field,
            mode,
            color: None,
            format: ValueFormat::Currency,
        }
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// A chart placed in the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Stable identifier, used in URLs (`/charts/{id}.svg`)
    pub id: String,
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub y_tick_format: AxisFormat,
    pub width: u32,
    pub height: u32,
    pub table: ChartTable,
    /// Drawn in order; later series end up on top
    pub series: Vec<SeriesSpec>,
}

/// Default drawing width of a chart. The page scales charts to its column.
pub const DEFAULT_CHART_WIDTH: u32 = 1000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_spec_defaults() {
        let spec = SeriesSpec::new("Saldo", SeriesField::EndingBalance, SeriesMode::Bar);
        assert_eq!(spec.color, None);
        assert_eq!(spec.format, ValueFormat::Currency);

        let colored = spec.color("rgba(192, 57, 43, 0.9)");
        assert_eq!(colored.color.as_deref(), Some("rgba(192, 57, 43, 0.9)"));
    }

    #[test]
    fn test_chart_spec_serializes_snake_case() {
        let spec = ChartSpec {
            id: "admin-expense".to_string(),
            title: "Gasto".to_string(),
            x_axis_title: "Fecha".to_string(),
            y_axis_title: "Monto".to_string(),
            y_tick_format: AxisFormat::Currency,
            width: DEFAULT_CHART_WIDTH,
            height: 400,
            table: ChartTable::AdminExpense,
            series: vec![SeriesSpec::new(
                "Gasto",
                SeriesField::AdminExpense,
                SeriesMode::Bar,
            )],
        };
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["table"], "admin_expense");
        assert_eq!(json["y_tick_format"], "currency");
        assert_eq!(json["series"][0]["field"], "admin_expense");
        assert_eq!(json["series"][0]["mode"], "bar");
    }

    #[test]
    fn test_conversions_into_chart_crate() {
        assert_eq!(
            svg_chart::SeriesMode::from(SeriesMode::Line),
            svg_chart::SeriesMode::Line
        );
        assert_eq!(
            svg_chart::TickFormat::from(AxisFormat::Currency),
            svg_chart::TickFormat::Currency
        );
    }
}
