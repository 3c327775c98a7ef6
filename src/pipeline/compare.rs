//! Year-over-year comparison stage
//!
//! Pairs every ranked row with the same product's totals from the
//! previous year and computes relative change for revenue and quantity.
//! A product with no prior-year activity compares against a zero
//! baseline.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::common::constants::PRIOR_YEAR_OFFSET;
use crate::pipeline::aggregate::YearlyAggregate;
use crate::pipeline::rank::RankedRow;
use crate::report::ReportRow;

/// Where prior-year totals are looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorYearScope {
    /// Look up the previous year in the full aggregate set, whether or
    /// not the product ranked that year. This is the default: a product
    /// that fell out of last year's top N still gets its real baseline.
    #[default]
    FullHistory,
    /// Look up the previous year only among rows that ranked. A product
    /// outside last year's top N reads as having no prior activity.
    TopRankedOnly,
}

/// (department, product) → year → (revenue, quantity).
type HistoryIndex = HashMap<(String, String), HashMap<i32, (Decimal, i64)>>;

fn build_history<'a>(entries: impl Iterator<Item = &'a YearlyAggregate>) -> HistoryIndex {
    let mut history: HistoryIndex = HashMap::new();
    for entry in entries {
        history
            .entry((entry.department.clone(), entry.product.clone()))
            .or_default()
            .insert(entry.year, (entry.revenue, entry.quantity));
    }
    history
}

/// Relative change from `prior` to `current`.
///
/// When `prior` is zero the true ratio is undefined; the stage reports
/// `1` (a 100% increase) so a first-year product reads as fully new
/// rather than poisoning the report with a division error.
pub fn pct_change(current: Decimal, prior: Decimal) -> Decimal {
    if prior.is_zero() {
        return Decimal::ONE;
    }
    (current - prior) / prior
}

/// Attach prior-year totals and percentage changes to the ranked rows.
///
/// Row order is preserved exactly as produced by the ranking stage. The
/// `scope` picks the lookup universe for prior-year totals; missing
/// years resolve to a zero baseline either way.
pub fn compare_year_over_year(
    ranked: &[RankedRow],
    aggregates: &[YearlyAggregate],
    scope: PriorYearScope,
) -> Vec<ReportRow> {
    let history = match scope {
        PriorYearScope::FullHistory => build_history(aggregates.iter()),
        PriorYearScope::TopRankedOnly => build_history(ranked.iter().map(|r| &r.aggregate)),
    };

    ranked
        .iter()
        .map(|row| {
            let aggregate = &row.aggregate;
            let prior_year = aggregate.year - PRIOR_YEAR_OFFSET;
            let (prior_revenue, prior_quantity) = history
                .get(&(aggregate.department.clone(), aggregate.product.clone()))
                .and_then(|years| years.get(&prior_year))
                .copied()
                .unwrap_or((Decimal::ZERO, 0));

            ReportRow {
                rank: row.rank,
                department: aggregate.department.clone(),
                product: aggregate.product.clone(),
                year: aggregate.year,
                revenue: aggregate.revenue,
                prior_revenue,
                revenue_pct_change: pct_change(aggregate.revenue, prior_revenue),
                quantity: aggregate.quantity,
                prior_quantity,
                quantity_pct_change: pct_change(
                    Decimal::from(aggregate.quantity),
                    Decimal::from(prior_quantity),
                ),
            }
        })
        .collect()
}
