//! Ranking stage
//!
//! Partitions yearly aggregates by (department, year), orders each
//! partition by revenue then quantity descending, and keeps every row
//! whose dense rank is within the requested top N. Ties share a rank
//! and never create gaps, so a tie on the boundary can push a partition
//! past N rows.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::pipeline::aggregate::YearlyAggregate;

/// A yearly aggregate together with its dense rank inside the
/// (department, year) partition. Rank 1 is the top seller.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRow {
    pub aggregate: YearlyAggregate,
    pub rank: u32,
}

/// Keep the top `top_n` dense ranks of every (department, year) partition.
///
/// Partition order in the output is department ascending then year
/// ascending; rows inside a partition are rank ascending. Rows that tie
/// on both revenue and quantity share a rank and are ordered by product
/// name, which keeps the stage deterministic without affecting ranks.
pub fn rank_top_products(aggregates: &[YearlyAggregate], top_n: usize) -> Vec<RankedRow> {
    let mut partitions: BTreeMap<(&str, i32), Vec<&YearlyAggregate>> = BTreeMap::new();
    for aggregate in aggregates {
        partitions
            .entry((aggregate.department.as_str(), aggregate.year))
            .or_default()
            .push(aggregate);
    }

    let mut ranked = Vec::new();
    for (_, mut members) in partitions {
        members.sort_by(|a, b| {
            b.revenue
                .cmp(&a.revenue)
                .then_with(|| b.quantity.cmp(&a.quantity))
                .then_with(|| a.product.cmp(&b.product))
        });

        let mut rank = 0u32;
        let mut prev: Option<(Decimal, i64)> = None;
        for member in members {
            let key = (member.revenue, member.quantity);
            if prev != Some(key) {
                rank += 1;
                prev = Some(key);
            }
            if rank as usize > top_n {
                break;
            }
            ranked.push(RankedRow {
                aggregate: member.clone(),
                rank,
            });
        }
    }

    ranked
}
