//! TimeSeriesChart builder -- the primary entry point for the crate.
//!
//! [`TimeSeriesChart`] holds the presentation settings (size, titles, tick
//! style) and turns a [`Dataset`] into a [`RenderedChart`].

use crate::api::ChartError;
use crate::chart::{escape, px, LinearScale, Mark, MarkKind, RenderedChart, TickFormat};
use crate::dataset::{Category, Dataset, Series, SeriesMode};

const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 80.0;
const TITLE_HEIGHT: f64 = 36.0;
const LEGEND_HEIGHT: f64 = 22.0;
const MARGIN_TOP: f64 = 16.0;

/// Category bands narrower than this get rotated axis labels.
const ROTATE_LABELS_BELOW: f64 = 64.0;
/// Fraction of each band covered by the bar group.
const BAR_GROUP_FILL: f64 = 0.7;
const POINT_RADIUS: f64 = 3.5;
const LABEL_GAP: f64 = 6.0;
const TARGET_TICKS: usize = 5;

/// Builder for a combined bar/line chart over ordered categories.
///
/// # Design
///
/// - All series share one y axis; nothing is rescaled per series
/// - Configuration methods consume and return `self`
/// - [`render()`](Self::render) takes `&self` so one builder can draw many datasets
///
/// # Example
///
/// ```
/// use svg_chart::{Category, Dataset, Series, SeriesMode, TickFormat, TimeSeriesChart};
///
/// let dataset = Dataset::new(vec![Category::new("2025-05-31", "May 2025")])
///     .with_series(Series::new("Expense", SeriesMode::Bar, vec![10_600.0]));
///
/// let chart = TimeSeriesChart::new(600, 400)
///     .title("Monthly expense")
///     .y_axis_title("Amount ($)")
///     .y_tick_format(TickFormat::Currency)
///     .render(&dataset)
///     .unwrap();
///
/// assert!(chart.svg().contains("Monthly expense"));
/// ```
#[derive(Debug, Clone)]
pub struct TimeSeriesChart {
    width: u32,
    height: u32,
    title: Option<String>,
    x_axis_title: Option<String>,
    y_axis_title: Option<String>,
    tick_format: TickFormat,
    headroom: f64,
}

/// Pixel geometry of the plot area, computed once per render.
struct Layout {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    band: f64,
    rotate_labels: bool,
}

impl Layout {
    fn band_start(&self, index: usize) -> f64 {
        self.left + self.band * index as f64
    }

    fn band_center(&self, index: usize) -> f64 {
        self.band_start(index) + self.band / 2.0
    }

    /// Center of bar `slot` out of `slots` side-by-side bars in a band.
    ///
    /// A lone bar sits exactly on `band_center`, the x of any line point
    /// in the same band.
    fn slot_center(&self, index: usize, slot: usize, slots: usize, bar_width: f64) -> f64 {
        if slots <= 1 {
            return self.band_center(index);
        }
        let offset = slot as f64 + 0.5 - slots as f64 / 2.0;
        self.band_center(index) + bar_width * offset
    }
}

impl TimeSeriesChart {
    /// Create a builder for a chart of the given size in SVG units.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            title: None,
            x_axis_title: None,
            y_axis_title: None,
            tick_format: TickFormat::Plain,
            headroom: 0.12,
        }
    }

    #[inline]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[inline]
    pub fn x_axis_title(mut self, title: impl Into<String>) -> Self {
        self.x_axis_title = Some(title.into());
        self
    }

    #[inline]
    pub fn y_axis_title(mut self, title: impl Into<String>) -> Self {
        self.y_axis_title = Some(title.into());
        self
    }

    #[inline]
    pub fn y_tick_format(mut self, format: TickFormat) -> Self {
        self.tick_format = format;
        self
    }

    /// Extra room above the largest value, as a fraction of the value span.
    #[inline]
    pub fn headroom(mut self, fraction: f64) -> Self {
        self.headroom = fraction.max(0.0);
        self
    }

    /// Draw the dataset.
    ///
    /// Fails if the dataset is empty, if any series does not carry exactly
    /// one value (and, when present, one label) per category, or if a value
    /// is not finite.
    pub fn render(&self, dataset: &Dataset) -> Result<RenderedChart, ChartError> {
        validate(dataset)?;
        let layout = self.layout(dataset)?;

        let (lo, hi) = dataset.value_range().unwrap_or((0.0, 0.0));
        let scale = LinearScale::nice(
            lo,
            hi,
            TARGET_TICKS,
            self.headroom,
            layout.bottom,
            layout.top,
        );

        let mut svg = String::new();
        let mut marks = Vec::new();

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
            w = self.width,
            h = self.height
        ));
        svg.push_str(&format!(
            r#"<rect width="{}" height="{}" fill="white"/>"#,
            self.width, self.height
        ));

        if let Some(title) = &self.title {
            svg.push_str(&format!(
                r##"<text class="chart-title" x="{}" y="24" font-size="16" font-weight="bold" fill="#2c3e50">{}</text>"##,
                px(layout.left),
                escape(title)
            ));
        }

        self.draw_value_axis(&mut svg, &scale, &layout);
        self.draw_category_axis(&mut svg, dataset, &scale, &layout);

        let bar_series: Vec<&Series> = dataset
            .series()
            .iter()
            .filter(|s| s.mode == SeriesMode::Bar)
            .collect();
        let bar_width = if bar_series.is_empty() {
            0.0
        } else {
            layout.band * BAR_GROUP_FILL / bar_series.len() as f64
        };

        // Bars first so lines and their markers stay visible on top.
        for (slot, series) in bar_series.iter().enumerate() {
            draw_bars(
                &mut svg,
                &mut marks,
                dataset,
                series,
                slot,
                bar_series.len(),
                bar_width,
                &scale,
                &layout,
            );
        }
        for series in dataset.series().iter().filter(|s| s.mode == SeriesMode::Line) {
            draw_line(&mut svg, &mut marks, dataset, series, &scale, &layout);
        }

        if dataset.series().len() > 1 {
            self.draw_legend(&mut svg, dataset, &layout);
        }

        svg.push_str("</svg>");

        Ok(RenderedChart::new(svg, marks, self.width, self.height))
    }

    fn layout(&self, dataset: &Dataset) -> Result<Layout, ChartError> {
        let mut top = MARGIN_TOP;
        if self.title.is_some() {
            top += TITLE_HEIGHT;
        }
        if dataset.series().len() > 1 {
            top += LEGEND_HEIGHT;
        }

        let left = MARGIN_LEFT;
        let right = self.width as f64 - MARGIN_RIGHT;
        let bottom = self.height as f64 - MARGIN_BOTTOM;

        if right - left < 20.0 || bottom - top < 20.0 {
            return Err(ChartError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }

        let band = (right - left) / dataset.categories().len() as f64;
        Ok(Layout {
            left,
            right,
            top,
            bottom,
            band,
            rotate_labels: band < ROTATE_LABELS_BELOW,
        })
    }

    fn draw_value_axis(&self, svg: &mut String, scale: &LinearScale, layout: &Layout) {
        let decimals = scale.tick_decimals();
        for tick in scale.ticks() {
            let y = px(scale.map(tick));
            svg.push_str(&format!(
                r##"<line class="grid" x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="#ecf0f1" stroke-width="1"/>"##,
                px(layout.left),
                px(layout.right)
            ));
            svg.push_str(&format!(
                r##"<text class="tick" x="{}" y="{y}" dy="4" text-anchor="end" font-size="11" fill="#7f8c8d">{}</text>"##,
                px(layout.left - 8.0),
                escape(&self.tick_format.format(tick, decimals))
            ));
        }

        if let Some(title) = &self.y_axis_title {
            let cx = 18.0;
            let cy = (layout.top + layout.bottom) / 2.0;
            svg.push_str(&format!(
                r##"<text class="axis-title" x="{x}" y="{y}" text-anchor="middle" font-size="12" font-weight="bold" fill="#2c3e50" transform="rotate(-90 {x} {y})">{}</text>"##,
                escape(title),
                x = px(cx),
                y = px(cy)
            ));
        }
    }

    fn draw_category_axis(
        &self,
        svg: &mut String,
        dataset: &Dataset,
        scale: &LinearScale,
        layout: &Layout,
    ) {
        let baseline = px(scale.map(0.0));
        svg.push_str(&format!(
            r##"<line class="baseline" x1="{}" y1="{baseline}" x2="{}" y2="{baseline}" stroke="#95a5a6" stroke-width="1"/>"##,
            px(layout.left),
            px(layout.right)
        ));

        let label_y = layout.bottom + 16.0;
        for (i, category) in dataset.categories().iter().enumerate() {
            let x = px(layout.band_center(i));
            if layout.rotate_labels {
                svg.push_str(&format!(
                    r##"<text class="category" x="{x}" y="{y}" text-anchor="end" font-size="11" fill="#7f8c8d" transform="rotate(-45 {x} {y})">{}</text>"##,
                    escape(&category.label),
                    y = px(label_y)
                ));
            } else {
                svg.push_str(&format!(
                    r##"<text class="category" x="{x}" y="{}" text-anchor="middle" font-size="11" fill="#7f8c8d">{}</text>"##,
                    px(label_y),
                    escape(&category.label)
                ));
            }
        }

        if let Some(title) = &self.x_axis_title {
            svg.push_str(&format!(
                r##"<text class="axis-title" x="{}" y="{}" text-anchor="middle" font-size="12" font-weight="bold" fill="#2c3e50">{}</text>"##,
                px((layout.left + layout.right) / 2.0),
                px(self.height as f64 - 8.0),
                escape(title)
            ));
        }
    }

    fn draw_legend(&self, svg: &mut String, dataset: &Dataset, layout: &Layout) {
        let y = layout.top - LEGEND_HEIGHT + 4.0;
        let mut x = layout.left;
        svg.push_str(r#"<g class="legend">"#);
        for series in dataset.series() {
            match series.mode {
                SeriesMode::Bar => svg.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="14" height="10" fill="{}"/>"#,
                    px(x),
                    px(y),
                    escape(&series.color)
                )),
                SeriesMode::Line => svg.push_str(&format!(
                    r#"<line x1="{}" y1="{y5}" x2="{}" y2="{y5}" stroke="{}" stroke-width="3"/>"#,
                    px(x),
                    px(x + 14.0),
                    escape(&series.color),
                    y5 = px(y + 5.0)
                )),
            }
            svg.push_str(&format!(
                r##"<text x="{}" y="{}" font-size="11" fill="#2c3e50">{}</text>"##,
                px(x + 20.0),
                px(y + 9.0),
                escape(&series.name)
            ));
            // Rough advance; legend entries are short series names.
            x += 40.0 + series.name.chars().count() as f64 * 6.5;
        }
        svg.push_str("</g>");
    }
}

fn validate(dataset: &Dataset) -> Result<(), ChartError> {
    let expected = dataset.categories().len();
    if expected == 0 || dataset.series().is_empty() {
        return Err(ChartError::EmptyDataset);
    }

    for series in dataset.series() {
        if series.values.len() != expected {
            return Err(ChartError::LengthMismatch {
                series: series.name.clone(),
                expected,
                actual: series.values.len(),
            });
        }
        if !series.labels.is_empty() && series.labels.len() != expected {
            return Err(ChartError::LengthMismatch {
                series: series.name.clone(),
                expected,
                actual: series.labels.len(),
            });
        }
        if let Some(index) = series.values.iter().position(|v| !v.is_finite()) {
            return Err(ChartError::NonFiniteValue {
                series: series.name.clone(),
                index,
            });
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn draw_bars(
    svg: &mut String,
    marks: &mut Vec<Mark>,
    dataset: &Dataset,
    series: &Series,
    slot: usize,
    slots: usize,
    bar_width: f64,
    scale: &LinearScale,
    layout: &Layout,
) {
    let zero = scale.map(0.0);
    debug_assert!(slot < slots);

    svg.push_str(&format!(
        r#"<g class="series" data-series="{}">"#,
        escape(&series.name)
    ));
    for (i, (category, &value)) in dataset
        .categories()
        .iter()
        .zip(series.values.iter())
        .enumerate()
    {
        let center = layout.slot_center(i, slot, slots, bar_width);
        let x = center - bar_width / 2.0;
        let y = scale.map(value);
        let (top, height) = if y <= zero { (y, zero - y) } else { (zero, y - zero) };

        svg.push_str(&format!(
            r#"<rect class="mark bar" data-x="{}" x="{}" y="{}" width="{}" height="{}" fill="{}" opacity="0.8"><title>{}</title></rect>"#,
            escape(&category.key),
            px(x),
            px(top),
            px(bar_width),
            px(height),
            escape(&series.color),
            escape(&mark_title(series, category, i))
        ));

        // Positive bars carry the label above the bar, negative ones below it.
        let label_y = series.labels.get(i).map(|label| {
            let ly = if value >= 0.0 {
                top - LABEL_GAP
            } else {
                top + height + LABEL_GAP + 10.0
            };
            push_value_label(svg, &category.key, center, ly, label);
            ly
        });

        marks.push(Mark {
            series: series.name.clone(),
            kind: MarkKind::Bar,
            key: category.key.clone(),
            value,
            x: center,
            y: top,
            label_y,
        });
    }
    svg.push_str("</g>");
}

fn draw_line(
    svg: &mut String,
    marks: &mut Vec<Mark>,
    dataset: &Dataset,
    series: &Series,
    scale: &LinearScale,
    layout: &Layout,
) {
    let points: Vec<(f64, f64)> = series
        .values
        .iter()
        .enumerate()
        .map(|(i, &v)| (layout.band_center(i), scale.map(v)))
        .collect();

    svg.push_str(&format!(
        r#"<g class="series" data-series="{}">"#,
        escape(&series.name)
    ));
    let path: Vec<String> = points
        .iter()
        .map(|(x, y)| format!("{},{}", px(*x), px(*y)))
        .collect();
    svg.push_str(&format!(
        r#"<polyline class="line" points="{}" fill="none" stroke="{}" stroke-width="3"/>"#,
        path.join(" "),
        escape(&series.color)
    ));

    for (i, (category, &(x, y))) in dataset.categories().iter().zip(points.iter()).enumerate() {
        svg.push_str(&format!(
            r#"<circle class="mark point" data-x="{}" cx="{}" cy="{}" r="{}" fill="{}"><title>{}</title></circle>"#,
            escape(&category.key),
            px(x),
            px(y),
            POINT_RADIUS,
            escape(&series.color),
            escape(&mark_title(series, category, i))
        ));

        let label_y = series.labels.get(i).map(|label| {
            let ly = y - POINT_RADIUS - LABEL_GAP;
            push_value_label(svg, &category.key, x, ly, label);
            ly
        });

        marks.push(Mark {
            series: series.name.clone(),
            kind: MarkKind::Point,
            key: category.key.clone(),
            value: series.values[i],
            x,
            y,
            label_y,
        });
    }
    svg.push_str("</g>");
}

/// Hover text of a mark: series, category label and the value as labelled.
fn mark_title(series: &Series, category: &Category, index: usize) -> String {
    let value = match series.labels.get(index) {
        Some(label) => label.clone(),
        None => series.values[index].to_string(),
    };
    format!("{} | {}: {}", series.name, category.label, value)
}

fn push_value_label(svg: &mut String, key: &str, x: f64, y: f64, label: &str) {
    svg.push_str(&format!(
        r##"<text class="value-label" data-x="{}" x="{}" y="{}" text-anchor="middle" font-size="10" fill="#2c3e50">{}</text>"##,
        escape(key),
        px(x),
        px(y),
        escape(label)
    ));
}
