//! The report document: page chrome, fixed tables and ordered sections.

pub mod charts;
pub mod content;
pub mod data;

use serde::Serialize;

use crate::models::{Block, ChartSpec, PageConfig, RecordError, Section};
pub use data::FixedTables;

/// Everything the renderer needs, assembled once and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub page: PageConfig,
    pub tables: FixedTables,
    pub sections: Vec<Section>,
}

impl Report {
    /// Parse the fixed tables and assemble the sections.
    ///
    /// A malformed table literal fails the whole build; there is no partial
    /// report.
    pub fn build(page: PageConfig) -> Result<Self, RecordError> {
        let tables = FixedTables::load()?;
        let sections = content::sections();
        tracing::debug!(
            sections = sections.len(),
            balance_rows = tables.balance.len(),
            expense_rows = tables.admin_expense.len(),
            "Assembled report"
        );
        Ok(Self {
            page,
            tables,
            sections,
        })
    }

    /// Chart specs in page order.
    pub fn charts(&self) -> impl Iterator<Item = &ChartSpec> {
        self.sections
            .iter()
            .flat_map(|s| s.blocks().iter())
            .filter_map(|b| match b {
                Block::Chart(spec) => Some(spec),
                _ => None,
            })
    }

    pub fn chart(&self, id: &str) -> Option<&ChartSpec> {
        self.charts().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_report() {
        let report = Report::build(PageConfig::default()).unwrap();
        assert_eq!(report.tables.balance.len(), 9);
        assert_eq!(report.tables.admin_expense.len(), 18);
        assert_eq!(report.charts().count(), 2);
        assert!(report.chart("admin-expense").is_some());
        assert!(report.chart("missing").is_none());
    }

    #[test]
    fn test_report_json_shape() {
        let report = Report::build(PageConfig::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["page"]["layout"], "wide");
        assert_eq!(json["sections"][0]["type"], "header");
        assert_eq!(json["tables"]["balance"][0]["report_date"], "2024-09-30");
    }
}
