//! Aggregation stage
//!
//! Groups joined rows by (department, product, year) and accumulates
//! revenue and quantity. Revenue sums stay in [`Decimal`] throughout so
//! currency totals are exact regardless of accumulation order.

use std::collections::HashMap;

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::pipeline::stage::JoinedRow;

/// Yearly revenue and quantity totals for one product in one department.
#[derive(Debug, Clone, PartialEq)]
pub struct YearlyAggregate {
    pub department: String,
    pub product: String,
    pub year: i32,
    pub revenue: Decimal,
    pub quantity: i64,
}

/// Collapse joined rows into one aggregate per (department, product, year).
///
/// Accumulation uses a hash table keyed on borrowed names, so the input
/// order never influences the totals. The output is sorted by
/// (department, product, year) to make the stage deterministic.
pub fn aggregate_by_year(rows: &[JoinedRow]) -> Vec<YearlyAggregate> {
    let mut totals: HashMap<(&str, &str, i32), (Decimal, i64)> = HashMap::new();

    for row in rows {
        let key = (
            row.department_name.as_str(),
            row.product_name.as_str(),
            row.date.year(),
        );
        let entry = totals.entry(key).or_insert((Decimal::ZERO, 0));
        entry.0 += row.revenue();
        entry.1 += row.quantity;
    }

    let mut aggregates: Vec<YearlyAggregate> = totals
        .into_iter()
        .map(|((department, product, year), (revenue, quantity))| YearlyAggregate {
            department: department.to_string(),
            product: product.to_string(),
            year,
            revenue,
            quantity,
        })
        .collect();

    aggregates.sort_by(|a, b| {
        a.department
            .cmp(&b.department)
            .then_with(|| a.product.cmp(&b.product))
            .then_with(|| a.year.cmp(&b.year))
    });

    aggregates
}
