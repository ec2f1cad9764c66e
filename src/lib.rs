//! Parma report
//!
//! Financial accountability report for the Privada Parma community, served
//! as a single HTML page with embedded SVG charts.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod format;
pub mod models;
pub mod rendering;
pub mod report;
pub mod server;
pub mod services;
