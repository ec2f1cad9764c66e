//! The two charts placed in the report.

use crate::models::{
    AxisFormat, ChartSpec, ChartTable, SeriesField, SeriesMode, SeriesSpec, DEFAULT_CHART_WIDTH,
};

pub const BALANCE_INCOME_CHART: &str = "balance-income";
pub const ADMIN_EXPENSE_CHART: &str = "admin-expense";

/// Closing balance as bars with monthly income as a line, on one axis.
pub fn balance_income_chart() -> ChartSpec {
    ChartSpec {
        id: BALANCE_INCOME_CHART.to_string(),
        title: "Flujo de Ingresos (Línea) y Saldo Acumulado (Barras)".to_string(),
        x_axis_title: "Fecha de Reporte".to_string(),
        y_axis_title: "Monto Total ($)".to_string(),
        y_tick_format: AxisFormat::Currency,
        width: DEFAULT_CHART_WIDTH,
        height: 500,
        table: ChartTable::Balance,
        series: vec![
            SeriesSpec::new(
                "Saldo Final (Mensual)",
                SeriesField::EndingBalance,
                SeriesMode::Bar,
            )
            .color("rgba(230, 126, 34, 0.7)"),
            SeriesSpec::new(
                "Ingresos Totales (Mensual)",
                SeriesField::TotalIncome,
                SeriesMode::Line,
            )
            .color("rgba(46, 204, 113, 1)"),
        ],
    }
}

/// Monthly administration fee as bars.
pub fn admin_expense_chart() -> ChartSpec {
    ChartSpec {
        id: ADMIN_EXPENSE_CHART.to_string(),
        title: "Gasto de Administración Mensual (Se observa el aumento del 60%)".to_string(),
        x_axis_title: "Fecha de Reporte".to_string(),
        y_axis_title: "Monto ($)".to_string(),
        y_tick_format: AxisFormat::Plain,
        width: DEFAULT_CHART_WIDTH,
        height: 400,
        table: ChartTable::AdminExpense,
        series: vec![SeriesSpec::new(
            "Gasto de Administración",
            SeriesField::AdminExpense,
            SeriesMode::Bar,
        )
        .color("rgba(192, 57, 43, 0.9)")],
    }
}

/// Look up a chart by id.
pub fn chart_by_id(id: &str) -> Option<ChartSpec> {
    match id {
        BALANCE_INCOME_CHART => Some(balance_income_chart()),
        ADMIN_EXPENSE_CHART => Some(admin_expense_chart()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_by_id() {
        assert_eq!(
            chart_by_id("balance-income").map(|c| c.table),
            Some(ChartTable::Balance)
        );
        assert_eq!(
            chart_by_id("admin-expense").map(|c| c.height),
            Some(400)
        );
        assert!(chart_by_id("nope").is_none());
    }

    #[test]
    fn test_balance_chart_bars_below_line() {
        let chart = balance_income_chart();
        let modes: Vec<_> = chart.series.iter().map(|s| s.mode).collect();
        assert_eq!(modes, vec![SeriesMode::Bar, SeriesMode::Line]);
    }
}
