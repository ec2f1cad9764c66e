//! The two fixed financial tables, transcribed from the monthly statements.
//!
//! Figures are kept exactly as published, including the ones that do not
//! reconcile month to month.

use serde::Serialize;

use crate::models::records::{ensure_ascending, parse_amount, parse_report_date};
use crate::models::{MonthlyBalanceRecord, MonthlyExpenseRecord, RecordError};

/// `(report_date, total_income, ending_balance)`
const BALANCE_ROWS: &[(&str, &str, &str)] = &[
    ("30/09/24", "199110.73", "125816.38"),
    ("31/10/24", "98953.00", "178279.38"),
    ("30/11/24", "135121.00", "223518.38"),
    ("31/12/24", "84747.50", "247926.88"),
    ("31/01/25", "99044.50", "270112.87"),
    ("28/02/25", "103502.91", "301470.79"),
    ("31/03/25", "95864.81", "333063.10"),
    ("30/04/25", "91449.99", "353948.09"),
    ("31/05/25", "109351.66", "338189.75"),
];

/// `(report_date, admon_expense)`
const ADMIN_EXPENSE_ROWS: &[(&str, &str)] = &[
    ("30/11/23", "0.00"),
    ("31/1/24", "0.00"),
    ("29/2/24", "2637.21"),
    ("31/3/24", "2176.26"),
    ("30/4/24", "3321.66"),
    ("31/5/24", "9960.00"),
    ("30/6/24", "5268.84"),
    ("31/07/24", "5669.73"),
    ("31/08/24", "8863.50"),
    ("30/09/24", "5841.54"),
    ("31/10/24", "5841.54"),
    ("30/11/24", "5898.81"),
    ("31/12/24", "5953.35"),
    ("31/01/25", "10455.00"),
    ("28/02/25", "10600.00"),
    ("31/03/25", "10600.00"),
    ("30/04/25", "10600.00"),
    ("31/05/25", "10600.00"),
];

/// Both tables, parsed and validated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixedTables {
    pub balance: Vec<MonthlyBalanceRecord>,
    pub admin_expense: Vec<MonthlyExpenseRecord>,
}

impl FixedTables {
    /// Parse both tables. The first malformed literal aborts.
    pub fn load() -> Result<Self, RecordError> {
        Ok(Self {
            balance: balance_records()?,
            admin_expense: admin_expense_records()?,
        })
    }
}

/// Monthly income and closing balance, Sep 2024 to May 2025.
pub fn balance_records() -> Result<Vec<MonthlyBalanceRecord>, RecordError> {
    let records = BALANCE_ROWS
        .iter()
        .map(|(date, income, balance)| {
            Ok(MonthlyBalanceRecord {
                report_date: parse_report_date(date)?,
                total_income: parse_amount(income)?,
                ending_balance: parse_amount(balance)?,
            })
        })
        .collect::<Result<Vec<_>, RecordError>>()?;
    ensure_ascending(&records)?;
    Ok(records)
}

/// Monthly administration fee, Nov 2023 to May 2025.
pub fn admin_expense_records() -> Result<Vec<MonthlyExpenseRecord>, RecordError> {
    let records = ADMIN_EXPENSE_ROWS
        .iter()
        .map(|(date, expense)| {
            Ok(MonthlyExpenseRecord {
                report_date: parse_report_date(date)?,
                admon_expense: parse_amount(expense)?,
            })
        })
        .collect::<Result<Vec<_>, RecordError>>()?;
    ensure_ascending(&records)?;
    Ok(records)
}
