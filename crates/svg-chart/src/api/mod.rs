//! Public API for the svg-chart crate.
//!
//! This module provides the high-level API: [`TimeSeriesChart`] builder and
//! [`ChartError`] unified error type.

mod builder;
mod error;

pub use builder::TimeSeriesChart;
pub use error::ChartError;
