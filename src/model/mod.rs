//! Input data model
//!
//! The three read-only collections the report consumes: raw sales
//! transactions, the product catalog, and departments. All three are
//! created externally; the pipeline only ever reads them.

mod source;

pub use source::{InMemorySource, ReportSource};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier for a product
pub type ProductId = i64;

/// Identifier for a department
pub type DepartmentId = i64;

/// A single sales transaction.
///
/// `unit_price` and `quantity` are non-negative by upstream contract; the
/// pipeline assumes that integrity and does not re-check it (the CSV
/// ingestion boundary in [`crate::ingest`] enforces it for file-loaded
/// data). The date is a plain calendar date with no timezone attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub product_id: ProductId,
    pub date: NaiveDate,
    pub unit_price: Decimal,
    pub quantity: i64,
}

/// A catalog product, owned by exactly one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    pub department_id: DepartmentId,
}

/// A department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub department_id: DepartmentId,
    pub name: String,
}
