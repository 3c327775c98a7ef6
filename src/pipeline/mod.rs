//! Report pipeline stages
//!
//! The report is produced by four pure stages applied in order:
//! join, yearly aggregation, per-partition ranking, and year-over-year
//! comparison. Each stage takes plain slices and returns owned rows, so
//! stages compose and test in isolation.

pub mod aggregate;
pub mod compare;
pub mod rank;
pub mod stage;

pub use aggregate::{aggregate_by_year, YearlyAggregate};
pub use compare::{compare_year_over_year, pct_change, PriorYearScope};
pub use rank::{rank_top_products, RankedRow};
pub use stage::{join_rows, JoinedRow};
