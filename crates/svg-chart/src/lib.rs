//! svg-chart: time-series bar and line charts as self-contained SVG
//!
//! This library draws one chart per call: an ordered list of categories on
//! the x axis (usually month-end dates) and any number of series sharing a
//! single value axis. Every series is drawn either as bars or as a line with
//! markers, and every data point can carry a text label placed above its
//! mark.
//!
//! # Quick Start
//!
//! The [`TimeSeriesChart`] builder is the primary entry point:
//!
//! ```
//! use svg_chart::{Category, Dataset, MarkKind, Series, SeriesMode, TimeSeriesChart};
//!
//! let dataset = Dataset::new(vec![
//!     Category::new("2024-09-30", "Sep 2024"),
//!     Category::new("2024-10-31", "Oct 2024"),
//! ])
//! .with_series(
//!     Series::new("Balance", SeriesMode::Bar, vec![125_816.38, 178_279.38])
//!         .labels(vec!["125,816.38".into(), "178,279.38".into()]),
//! )
//! .with_series(Series::new("Income", SeriesMode::Line, vec![199_110.73, 98_953.00]));
//!
//! let chart = TimeSeriesChart::new(800, 400)
//!     .title("Income and balance")
//!     .render(&dataset)
//!     .unwrap();
//!
//! assert!(chart.svg().starts_with("<svg"));
//! assert_eq!(chart.marks_of(MarkKind::Bar).count(), 2);
//! assert_eq!(chart.marks_of(MarkKind::Point).count(), 2);
//! ```
//!
//! # Shared Axis
//!
//! All series are scaled against one y axis. The axis always includes zero
//! and extends to a rounded ("nice") bound above the largest value, with
//! extra headroom so the labels above the tallest mark stay inside the
//! plot. Series of very different magnitude are not rescaled; a small
//! series simply draws close to the baseline.
//!
//! # Marks
//!
//! Each drawn data point is recorded as a [`Mark`] and tagged in the SVG with
//! `class="mark bar"` or `class="mark point"` plus a `data-x` attribute
//! holding the category key, so the output can be inspected both as a
//! structure and as markup.

pub mod api;
pub mod chart;
pub mod dataset;

#[cfg(test)]
mod domain_tests;

pub use api::{ChartError, TimeSeriesChart};
pub use chart::{Mark, MarkKind, RenderedChart, TickFormat};
pub use dataset::{Category, Dataset, Series, SeriesMode};
