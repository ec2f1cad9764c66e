pub mod chart;
pub mod markdown;
pub mod svg_to_png;

pub use chart::render_time_series_chart;
pub use markdown::markdown_to_html;
pub use svg_to_png::{PngSize, SvgRasterizer};
