//! Report rows and output rendering

mod format;

pub use format::{
    format_currency, format_percent, render_table, to_csv_string, to_json_string, FormattedRow,
};

use rust_decimal::Decimal;
use serde::Serialize;

/// One line of the finished report: a ranked product-year with its
/// prior-year baseline and relative changes.
///
/// Values stay numeric here; string formatting happens only when a row
/// is rendered through [`FormattedRow`] or one of the output writers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub rank: u32,
    pub department: String,
    pub product: String,
    pub year: i32,
    pub revenue: Decimal,
    pub prior_revenue: Decimal,
    /// Relative revenue change from the prior year, as a fraction
    /// (0.5 means +50%).
    pub revenue_pct_change: Decimal,
    pub quantity: i64,
    pub prior_quantity: i64,
    pub quantity_pct_change: Decimal,
}
