//! Report engine
//!
//! Owns a [`ReportSource`] and a [`ReportConfig`] and drives the four
//! pipeline stages end to end. Every invocation reads a fresh snapshot
//! from the source, so concurrent source mutation between runs never
//! bleeds into a report in progress.

use crate::common::constants::DEFAULT_TOP_N;
use crate::common::error::{SpectraError, SpectraResult};
use crate::model::ReportSource;
use crate::pipeline::{
    aggregate_by_year, compare_year_over_year, join_rows, rank_top_products, PriorYearScope,
};
use crate::report::ReportRow;

/// Report generation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// How many dense ranks to keep per (department, year) partition.
    pub top_n: usize,
    /// Where prior-year totals are looked up.
    pub prior_year_scope: PriorYearScope,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            top_n: DEFAULT_TOP_N,
            prior_year_scope: PriorYearScope::default(),
        }
    }
}

/// Drives the report pipeline over a data source.
pub struct ReportEngine<S: ReportSource> {
    source: S,
    config: ReportConfig,
}

impl<S: ReportSource> ReportEngine<S> {
    /// Create an engine with the default configuration (top 5,
    /// full-history prior-year lookup).
    pub fn new(source: S) -> Self {
        ReportEngine {
            source,
            config: ReportConfig::default(),
        }
    }

    /// Create an engine with an explicit configuration.
    pub fn with_config(source: S, config: ReportConfig) -> Self {
        ReportEngine { source, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Run the full pipeline and return the finished report rows,
    /// ordered by department, year, then rank.
    ///
    /// Source read failures propagate unchanged. A configured `top_n`
    /// of zero is rejected before any data is read.
    pub fn run_yoy_top5_report(&self) -> SpectraResult<Vec<ReportRow>> {
        if self.config.top_n == 0 {
            return Err(SpectraError::InvalidArgument(
                "top_n must be at least 1".to_string(),
            ));
        }

        let transactions = self.source.transactions()?;
        let products = self.source.products()?;
        let departments = self.source.departments()?;
        tracing::debug!(
            transactions = transactions.len(),
            products = products.len(),
            departments = departments.len(),
            "loaded source snapshot"
        );

        let joined = join_rows(&transactions, &products, &departments);
        let aggregates = aggregate_by_year(&joined);
        let ranked = rank_top_products(&aggregates, self.config.top_n);
        let report = compare_year_over_year(&ranked, &aggregates, self.config.prior_year_scope);
        tracing::debug!(
            joined = joined.len(),
            aggregates = aggregates.len(),
            report_rows = report.len(),
            "pipeline complete"
        );

        Ok(report)
    }
}
