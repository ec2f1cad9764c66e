pub mod charts;
pub mod headers;
pub mod report;

pub use charts::{handle_chart, ChartQuery, __path_handle_chart};
pub use report::{handle_page, handle_report_json, handle_stylesheet, ErrorResponse};
pub use report::{__path_handle_page, __path_handle_report_json, __path_handle_stylesheet};
