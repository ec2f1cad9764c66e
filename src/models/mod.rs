pub mod chart_spec;
pub mod config;
pub mod records;
pub mod section;

pub use chart_spec::{
    AxisFormat, ChartSpec, ChartTable, SeriesField, SeriesMode, SeriesSpec, ValueFormat,
    DEFAULT_CHART_WIDTH,
};
pub use config::{AppConfig, PageConfig, PageLayout};
pub use records::{DatedRecord, MonthlyBalanceRecord, MonthlyExpenseRecord, RecordError};
pub use section::{Block, CalloutLevel, ImageRef, Section};
