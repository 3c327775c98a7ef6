//! Read-only input sources
//!
//! The pipeline consumes its inputs through the [`ReportSource`] seam so
//! the same report runs over in-memory fixtures, CSV-loaded data, or a
//! caller's own store adapter.

use crate::common::error::SpectraResult;
use crate::model::{Department, Product, Transaction};

/// Read-only access to the three input collections.
///
/// Every accessor returns an owned snapshot: a report invocation works on
/// its own copy of the data, so concurrent invocations never share
/// intermediate state. A failed read (for example
/// [`crate::SpectraError::Source`] from a query-backed implementation)
/// aborts the whole report and reaches the caller unchanged.
pub trait ReportSource {
    /// All sales transactions.
    fn transactions(&self) -> SpectraResult<Vec<Transaction>>;

    /// The product catalog.
    fn products(&self) -> SpectraResult<Vec<Product>>;

    /// All departments.
    fn departments(&self) -> SpectraResult<Vec<Department>>;
}

/// In-memory source backed by three vectors.
///
/// Reads never fail. Callers constructing one directly own the
/// non-negative price/quantity contract documented on
/// [`Transaction`].
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    transactions: Vec<Transaction>,
    products: Vec<Product>,
    departments: Vec<Department>,
}

impl InMemorySource {
    /// Create a source over the given collections.
    pub fn new(
        transactions: Vec<Transaction>,
        products: Vec<Product>,
        departments: Vec<Department>,
    ) -> Self {
        Self {
            transactions,
            products,
            departments,
        }
    }

    /// Number of transactions held.
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Number of products held.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Number of departments held.
    pub fn department_count(&self) -> usize {
        self.departments.len()
    }
}

impl ReportSource for InMemorySource {
    fn transactions(&self) -> SpectraResult<Vec<Transaction>> {
        Ok(self.transactions.clone())
    }

    fn products(&self) -> SpectraResult<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn departments(&self) -> SpectraResult<Vec<Department>> {
        Ok(self.departments.clone())
    }
}
