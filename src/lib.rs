//! Spectra - Year-over-Year Sales Reporting Engine
//!
//! Spectra turns three flat sales collections (transactions, products,
//! departments) into a ranked year-over-year report: the top products
//! of every department and year with revenue and quantity changes
//! against the previous year.
//!
pub mod common;
pub mod engine;
pub mod ingest;
pub mod model;
pub mod pipeline;
pub mod report;

// Re-export common types for convenience
pub use common::{SpectraError, SpectraResult};

// Re-export data model for convenience
pub use model::{Department, InMemorySource, Product, ReportSource, Transaction};

// Re-export pipeline stages for convenience
pub use pipeline::{
    aggregate_by_year, compare_year_over_year, join_rows, pct_change, rank_top_products,
    JoinedRow, PriorYearScope, RankedRow, YearlyAggregate,
};

// Re-export report rendering for convenience
pub use report::{render_table, to_csv_string, to_json_string, FormattedRow, ReportRow};

// Re-export engine for convenience
pub use crate::engine::{ReportConfig, ReportEngine};
