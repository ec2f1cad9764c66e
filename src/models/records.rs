//! Dated records of the two fixed financial tables.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

use crate::models::SeriesField;

/// Literal date format of the source statements: day/month/two-digit year.
pub const REPORT_DATE_FORMAT: &str = "%d/%m/%y";

/// One month of the community account: inflow and closing balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyBalanceRecord {
    pub report_date: NaiveDate,
    pub total_income: Decimal,
    pub ending_balance: Decimal,
}

/// One month of administrative cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyExpenseRecord {
    pub report_date: NaiveDate,
    pub admon_expense: Decimal,
}

/// A record that can be placed on a time axis and charted.
pub trait DatedRecord {
    fn report_date(&self) -> NaiveDate;

    /// Value of a chartable field, or `None` if this record has no such field.
    fn value(&self, field: SeriesField) -> Option<Decimal>;
}

impl DatedRecord for MonthlyBalanceRecord {
    fn report_date(&self) -> NaiveDate {
        self.report_date
    }

    fn value(&self, field: SeriesField) -> Option<Decimal> {
        match field {
            SeriesField::TotalIncome => Some(self.total_income),
            SeriesField::EndingBalance => Some(self.ending_balance),
            SeriesField::AdminExpense => None,
        }
    }
}

impl DatedRecord for MonthlyExpenseRecord {
    fn report_date(&self) -> NaiveDate {
        self.report_date
    }

    fn value(&self, field: SeriesField) -> Option<Decimal> {
        match field {
            SeriesField::AdminExpense => Some(self.admon_expense),
            _ => None,
        }
    }
}

/// Error from parsing the embedded tables
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Invalid report date '{value}': {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },

    #[error("Invalid amount '{value}': {source}")]
    InvalidAmount {
        value: String,
        source: rust_decimal::Error,
    },

    #[error("Records out of order: {next} does not follow {previous}")]
    OutOfOrder { previous: NaiveDate, next: NaiveDate },
}

/// Parse a `dd/mm/yy` date. Day and month may omit the leading zero.
pub fn parse_report_date(value: &str) -> Result<NaiveDate, RecordError> {
    NaiveDate::parse_from_str(value.trim(), REPORT_DATE_FORMAT).map_err(|source| {
        RecordError::InvalidDate {
            value: value.to_string(),
            source,
        }
    })
}

/// Parse a decimal currency literal such as `199110.73`.
pub fn parse_amount(value: &str) -> Result<Decimal, RecordError> {
    Decimal::from_str(value.trim()).map_err(|source| RecordError::InvalidAmount {
        value: value.to_string(),
        source,
    })
}

/// Check that report dates are strictly increasing.
pub fn ensure_ascending<R: DatedRecord>(records: &[R]) -> Result<(), RecordError> {
    for pair in records.windows(2) {
        let (previous, next) = (pair[0].report_date(), pair[1].report_date());
        if next <= previous {
            return Err(RecordError::OutOfOrder { previous, next });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_padded_date() {
        assert_eq!(parse_report_date("30/09/24").unwrap(), date(2024, 9, 30));
    }

    #[test]
    fn test_parse_unpadded_month() {
        assert_eq!(parse_report_date("31/1/24").unwrap(), date(2024, 1, 31));
        assert_eq!(parse_report_date("29/2/24").unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_parse_invalid_date_keeps_value() {
        let err = parse_report_date("31/02/25").unwrap_err();
        assert!(err.to_string().contains("'31/02/25'"));
        assert!(matches!(err, RecordError::InvalidDate { .. }));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("2637.21").unwrap(), Decimal::new(263_721, 2));
        assert!(matches!(
            parse_amount("12,00"),
            Err(RecordError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_ensure_ascending() {
        let rows = vec![
            MonthlyExpenseRecord {
                report_date: date(2024, 1, 31),
                admon_expense: Decimal::ZERO,
            },
            MonthlyExpenseRecord {
                report_date: date(2024, 2, 29),
                admon_expense: Decimal::ZERO,
            },
        ];
        assert!(ensure_ascending(&rows).is_ok());

        let reversed: Vec<_> = rows.into_iter().rev().collect();
        let err = ensure_ascending(&reversed).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Records out of order: 2024-01-31 does not follow 2024-02-29"
        );
    }

    #[test]
    fn test_duplicate_dates_rejected() {
        let row = MonthlyExpenseRecord {
            report_date: date(2025, 3, 31),
            admon_expense: Decimal::ZERO,
        };
        assert!(ensure_ascending(&[row.clone(), row]).is_err());
    }

    #[test]
    fn test_field_access() {
        let balance = MonthlyBalanceRecord {
            report_date: date(2024, 9, 30),
            total_income: Decimal::new(19_911_073, 2),
            ending_balance: Decimal::new(12_581_638, 2),
        };
        assert_eq!(
            balance.value(SeriesField::EndingBalance),
            Some(Decimal::new(12_581_638, 2))
        );
        assert_eq!(balance.value(SeriesField::AdminExpense), None);

        let expense = MonthlyExpenseRecord {
            report_date: date(2024, 9, 30),
            admon_expense: Decimal::new(584_154, 2),
        };
        assert_eq!(expense.value(SeriesField::TotalIncome), None);
    }
}
