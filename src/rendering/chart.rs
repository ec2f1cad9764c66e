//! Turns dated records plus a chart description into an SVG chart.

use rust_decimal::prelude::ToPrimitive;
use svg_chart::{Category, Dataset, RenderedChart, Series, TimeSeriesChart};

use crate::error::RenderError;
use crate::format::{format_currency, month_label};
use crate::models::{ChartSpec, ChartTable, DatedRecord, ValueFormat};
use crate::report::FixedTables;

/// Draw `records` as one combined chart: one x position per record date,
/// one shared y axis, every point annotated with its formatted amount.
pub fn render_time_series_chart<R: DatedRecord>(
    records: &[R],
    spec: &ChartSpec,
) -> Result<RenderedChart, RenderError> {
    let categories = records
        .iter()
        .map(|r| {
            let date = r.report_date();
            Category::new(date.format("%Y-%m-%d").to_string(), month_label(date))
        })
        .collect();

    let mut dataset = Dataset::new(categories);
    for series_spec in &spec.series {
        let amounts = records
            .iter()
            .map(|r| {
                r.value(series_spec.field)
                    .ok_or_else(|| RenderError::MissingField {
                        chart: spec.id.clone(),
                        field: series_spec.field,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let labels = amounts
            .iter()
            .map(|amount| match series_spec.format {
                ValueFormat::Currency => format_currency(*amount),
            })
            .collect();
        let values = amounts
            .iter()
            .map(|amount| amount.to_f64().unwrap_or(f64::NAN))
            .collect();

        let mut series =
            Series::new(series_spec.name.as_str(), series_spec.mode.into(), values).labels(labels);
        if let Some(ref color) = series_spec.color {
            series = series.color(color.as_str());
        }
        dataset = dataset.with_series(series);
    }

    let chart = TimeSeriesChart::new(spec.width, spec.height)
        .title(spec.title.as_str())
        .x_axis_title(spec.x_axis_title.as_str())
        .y_axis_title(spec.y_axis_title.as_str())
        .y_tick_format(spec.y_tick_format.into())
        .render(&dataset)?;

    tracing::debug!(
        chart = %spec.id,
        marks = chart.marks().len(),
        "Rendered chart"
    );
    Ok(chart)
}

/// Draw a chart against the table it names.
pub fn render_chart(tables: &FixedTables, spec: &ChartSpec) -> Result<RenderedChart, RenderError> {
    match spec.table {
        ChartTable::Balance => render_time_series_chart(&tables.balance, spec),
        ChartTable::AdminExpense => render_time_series_chart(&tables.admin_expense, spec),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SeriesField, SeriesMode, SeriesSpec};
    use crate::report::charts::{admin_expense_chart, balance_income_chart};
    use svg_chart::MarkKind;

    fn tables() -> FixedTables {
        FixedTables::load().unwrap()
    }

    #[test]
    fn test_balance_chart_pairs_bars_and_points() {
        let chart = render_chart(&tables(), &balance_income_chart()).unwrap();

        let bars: Vec<_> = chart.marks_of(MarkKind::Bar).collect();
        let points: Vec<_> = chart.marks_of(MarkKind::Point).collect();
        assert_eq!(bars.len(), 9);
        assert_eq!(points.len(), 9);
        for (bar, point) in bars.iter().zip(&points) {
            assert_eq!(bar.key, point.key);
            assert_eq!(bar.x, point.x);

            // Both value labels of the month are emitted at the same x.
            let label = format!(
                r#"class="value-label" data-x="{}" x="{:.1}""#,
                point.key, point.x
            );
            assert_eq!(chart.svg().matches(&label).count(), 2, "{label}");
        }
        assert_eq!(bars[0].key, "2024-09-30");
        assert_eq!(bars[0].series, "Saldo Final (Mensual)");
        assert_eq!(points[0].series, "Ingresos Totales (Mensual)");
    }

    #[test]
    fn test_expense_chart_has_eighteen_bars_in_order() {
        let chart = render_chart(&tables(), &admin_expense_chart()).unwrap();
        let keys: Vec<_> = chart
            .marks_of(MarkKind::Bar)
            .map(|m| m.key.clone())
            .collect();
        assert_eq!(keys.len(), 18);
        assert_eq!(keys.first().map(String::as_str), Some("2023-11-30"));
        assert_eq!(keys.last().map(String::as_str), Some("2025-05-31"));
        assert_eq!(chart.marks_of(MarkKind::Point).count(), 0);
    }

    #[test]
    fn test_points_annotated_with_currency() {
        let chart = render_chart(&tables(), &balance_income_chart()).unwrap();
        let svg = chart.svg();
        assert!(svg.contains(">125,816.38<"));
        assert!(svg.contains(">199,110.73<"));
        assert!(svg.contains(">98,953.00<"));
        assert!(svg.contains("Sep 2024"));
    }

    #[test]
    fn test_zero_expense_labelled() {
        let chart = render_chart(&tables(), &admin_expense_chart()).unwrap();
        assert!(chart.svg().contains(">0.00<"));
        assert!(chart.svg().contains(">10,600.00<"));
    }

    #[test]
    fn test_field_missing_from_table() {
        let mut spec = admin_expense_chart();
        spec.series = vec![SeriesSpec::new(
            "Ingresos",
            SeriesField::TotalIncome,
            SeriesMode::Line,
        )];
        let err = render_chart(&tables(), &spec).unwrap_err();
        assert!(matches!(err, RenderError::MissingField { .. }));
    }

    #[test]
    fn test_empty_records_rejected() {
        let spec = admin_expense_chart();
        let records: Vec<crate::models::MonthlyExpenseRecord> = Vec::new();
        let err = render_time_series_chart(&records, &spec).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Chart(svg_chart::ChartError::EmptyDataset)
        ));
    }
}
