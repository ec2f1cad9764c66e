//! Output types and the drawing primitives behind [`TimeSeriesChart`](crate::TimeSeriesChart).
//!
//! [`RenderedChart`] is the canonical output: the SVG markup plus the list of
//! [`Mark`]s that were drawn, in series order then category order.

mod scale;
mod svg;

pub(crate) use scale::LinearScale;
pub(crate) use svg::{escape, px};

/// Kind of mark a data point was drawn as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkKind {
    Bar,
    Point,
}

impl MarkKind {
    /// CSS class suffix used in the SVG (`class="mark bar"`).
    pub fn css_class(self) -> &'static str {
        match self {
            MarkKind::Bar => "bar",
            MarkKind::Point => "point",
        }
    }
}

/// One drawn data point.
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    /// Name of the series the mark belongs to
    pub series: String,
    pub kind: MarkKind,
    /// Category key (`data-x` in the SVG)
    pub key: String,
    /// Data value
    pub value: f64,
    /// Horizontal center of the mark in SVG units
    pub x: f64,
    /// Top edge (bars) or center (points) of the mark in SVG units
    pub y: f64,
    /// Baseline of the value label, if the point was annotated
    pub label_y: Option<f64>,
}

/// Tick label style for the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickFormat {
    /// Grouped number: `350,000`
    #[default]
    Plain,
    /// Grouped number with dollar sign: `$350,000`
    Currency,
}

impl TickFormat {
    /// Format a tick value with the given number of decimals.
    pub fn format(self, value: f64, decimals: usize) -> String {
        let grouped = group_number(value.abs(), decimals);
        let sign = if value < 0.0 && grouped.chars().any(|c| c.is_ascii_digit() && c != '0') {
            "-"
        } else {
            ""
        };
        match self {
            TickFormat::Plain => format!("{sign}{grouped}"),
            TickFormat::Currency => format!("{sign}${grouped}"),
        }
    }
}

/// Format a non-negative number with thousands separators.
fn group_number(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{grouped}.{frac}"),
        None => grouped,
    }
}

/// A rendered chart: SVG markup and the marks it contains.
#[derive(Debug, Clone)]
pub struct RenderedChart {
    svg: String,
    marks: Vec<Mark>,
    width: u32,
    height: u32,
}

impl RenderedChart {
    pub(crate) fn new(svg: String, marks: Vec<Mark>, width: u32, height: u32) -> Self {
        Self {
            svg,
            marks,
            width,
            height,
        }
    }

    pub fn svg(&self) -> &str {
        &self.svg
    }

    pub fn into_svg(self) -> String {
        self.svg
    }

    /// All marks in drawing order.
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Marks of one kind, in drawing order.
    pub fn marks_of(&self, kind: MarkKind) -> impl Iterator<Item = &Mark> {
        self.marks.iter().filter(move |m| m.kind == kind)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_number() {
        assert_eq!(group_number(0.0, 0), "0");
        assert_eq!(group_number(999.0, 0), "999");
        assert_eq!(group_number(1000.0, 0), "1,000");
        assert_eq!(group_number(353_948.09, 0), "353,948");
        assert_eq!(group_number(1_234_567.5, 2), "1,234,567.50");
    }

    #[test]
    fn test_tick_format_currency() {
        assert_eq!(TickFormat::Currency.format(350_000.0, 0), "$350,000");
        assert_eq!(TickFormat::Currency.format(-2_000.0, 0), "-$2,000");
        assert_eq!(TickFormat::Plain.format(12_000.0, 0), "12,000");
    }

    #[test]
    fn test_tick_format_no_negative_zero() {
        assert_eq!(TickFormat::Plain.format(-0.0, 0), "0");
        assert_eq!(TickFormat::Plain.format(-0.2, 0), "0");
    }
}
