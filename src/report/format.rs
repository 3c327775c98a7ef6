//! Output formatting for report rows
//!
//! Three renderings share one formatting convention: box-drawn tables
//! for terminals, CSV and JSON for downstream tools. Currency renders
//! as `$1,234.56`, percentages as `50.00%`, both rounded half away
//! from zero at two decimal places.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::common::constants::{CURRENCY_SYMBOL, DISPLAY_DECIMAL_PLACES};
use crate::common::error::{SpectraError, SpectraResult};
use crate::internal_err;
use crate::report::ReportRow;

/// A report row with currency and percentage fields rendered as
/// display strings. This is the shape written to CSV and JSON.
#[derive(Debug, Clone, Serialize)]
pub struct FormattedRow {
    pub rank: u32,
    pub department: String,
    pub product: String,
    pub year: i32,
    pub revenue: String,
    pub prior_revenue: String,
    pub revenue_pct_change: String,
    pub quantity: i64,
    pub prior_quantity: i64,
    pub quantity_pct_change: String,
}

impl From<&ReportRow> for FormattedRow {
    fn from(row: &ReportRow) -> Self {
        FormattedRow {
            rank: row.rank,
            department: row.department.clone(),
            product: row.product.clone(),
            year: row.year,
            revenue: format_currency(row.revenue),
            prior_revenue: format_currency(row.prior_revenue),
            revenue_pct_change: format_percent(row.revenue_pct_change),
            quantity: row.quantity,
            prior_quantity: row.prior_quantity,
            quantity_pct_change: format_percent(row.quantity_pct_change),
        }
    }
}

/// Render an amount as `$1,234.56` (or `-$1,234.56` when negative).
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(
        DISPLAY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    );
    let magnitude = format!(
        "{:.places$}",
        rounded.abs(),
        places = DISPLAY_DECIMAL_PLACES as usize
    );
    let (digits, cents) = match magnitude.split_once('.') {
        Some((digits, cents)) => (digits, cents),
        None => (magnitude.as_str(), ""),
    };
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!(
        "{sign}{CURRENCY_SYMBOL}{}.{cents}",
        group_thousands(digits)
    )
}

/// Render a fraction as a percentage: `0.5` becomes `50.00%`.
pub fn format_percent(fraction: Decimal) -> String {
    let percent = (fraction * Decimal::ONE_HUNDRED).round_dp_with_strategy(
        DISPLAY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    );
    format!(
        "{:.places$}%",
        percent,
        places = DISPLAY_DECIMAL_PLACES as usize
    )
}

/// Insert comma separators into an unsigned digit run.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

const TABLE_HEADERS: [&str; 10] = [
    "rank",
    "department",
    "product",
    "year",
    "revenue",
    "prior_revenue",
    "revenue_change",
    "quantity",
    "prior_quantity",
    "quantity_change",
];

fn table_cells(row: &FormattedRow) -> [String; 10] {
    [
        row.rank.to_string(),
        row.department.clone(),
        row.product.clone(),
        row.year.to_string(),
        row.revenue.clone(),
        row.prior_revenue.clone(),
        row.revenue_pct_change.clone(),
        row.quantity.to_string(),
        row.prior_quantity.to_string(),
        row.quantity_pct_change.clone(),
    ]
}

/// Convert report rows to a formatted table string
pub fn render_table(rows: &[ReportRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let formatted: Vec<[String; 10]> = rows
        .iter()
        .map(|row| table_cells(&FormattedRow::from(row)))
        .collect();

    // Calculate column widths from headers and data
    let mut column_widths: Vec<usize> = TABLE_HEADERS.iter().map(|h| h.len()).collect();
    for cells in &formatted {
        for (col_idx, cell) in cells.iter().enumerate() {
            column_widths[col_idx] = column_widths[col_idx].max(cell.len());
        }
    }

    let mut output = String::new();

    // Print header
    output.push('┌');
    for (i, width) in column_widths.iter().enumerate() {
        output.push_str(&"─".repeat(width + 2));
        if i < column_widths.len() - 1 {
            output.push('┬');
        }
    }
    output.push_str("┐\n");

    // Print column names
    output.push('│');
    for (i, (name, width)) in TABLE_HEADERS.iter().zip(&column_widths).enumerate() {
        output.push_str(&format!(" {:width$} ", name, width = width));
        if i < TABLE_HEADERS.len() - 1 {
            output.push('│');
        }
    }
    output.push_str("│\n");

    // Print separator
    output.push('├');
    for (i, width) in column_widths.iter().enumerate() {
        output.push_str(&"─".repeat(width + 2));
        if i < column_widths.len() - 1 {
            output.push('┼');
        }
    }
    output.push_str("┤\n");

    // Print rows
    for cells in &formatted {
        output.push('│');
        for (col_idx, cell) in cells.iter().enumerate() {
            output.push_str(&format!(
                " {:width$} ",
                cell,
                width = column_widths[col_idx]
            ));
            if col_idx < cells.len() - 1 {
                output.push('│');
            }
        }
        output.push_str("│\n");
    }

    // Print footer
    output.push('└');
    for (i, width) in column_widths.iter().enumerate() {
        output.push_str(&"─".repeat(width + 2));
        if i < column_widths.len() - 1 {
            output.push('┴');
        }
    }
    output.push_str("┘\n");

    output
}

/// Serialize report rows to CSV with a header record.
pub fn to_csv_string(rows: &[ReportRow]) -> SpectraResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer
            .serialize(FormattedRow::from(row))
            .map_err(|e| SpectraError::Serialization(format!("CSV write failed: {}", e)))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| internal_err!("CSV writer flush failed: {}", e))?;
    String::from_utf8(bytes).map_err(|e| internal_err!("CSV output was not UTF-8: {}", e))
}

/// Serialize report rows to pretty-printed JSON.
pub fn to_json_string(rows: &[ReportRow]) -> SpectraResult<String> {
    let formatted: Vec<FormattedRow> = rows.iter().map(FormattedRow::from).collect();
    serde_json::to_string_pretty(&formatted)
        .map_err(|e| SpectraError::Serialization(format!("JSON write failed: {}", e)))
}
