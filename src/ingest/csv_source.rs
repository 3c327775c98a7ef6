//! CSV Loading Functionality
//!
//! Loads the three input collections from CSV files into an
//! [`InMemorySource`]. Expected headers:
//!
//! - transactions: `product_id,date,unit_price,quantity` (ISO-8601 dates)
//! - products:     `product_id,name,department_id`
//! - departments:  `department_id,name`
//!
//! Ingestion is the integrity boundary: records with a negative unit
//! price or quantity are rejected here, so the pipeline itself never
//! re-validates.

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use serde::de::DeserializeOwned;

use crate::common::error::{SpectraError, SpectraResult};
use crate::model::{Department, InMemorySource, Product, Transaction};

/// Load the three sales collections from CSV files.
pub fn load_sales_data<P: AsRef<Path>>(
    transactions: P,
    products: P,
    departments: P,
) -> SpectraResult<InMemorySource> {
    let transactions: Vec<Transaction> = read_records(transactions.as_ref())?;
    for transaction in &transactions {
        validate_transaction(transaction)?;
    }
    let products: Vec<Product> = read_records(products.as_ref())?;
    let departments: Vec<Department> = read_records(departments.as_ref())?;

    tracing::info!(
        transactions = transactions.len(),
        products = products.len(),
        departments = departments.len(),
        "loaded sales data"
    );

    Ok(InMemorySource::new(transactions, products, departments))
}

/// Read and deserialize every record of one CSV file.
fn read_records<T: DeserializeOwned>(path: &Path) -> SpectraResult<Vec<T>> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut records = Vec::new();
    for (index, result) in reader.deserialize().enumerate() {
        let record = result.map_err(|e| {
            SpectraError::Parse(format!(
                "{} record {}: {}",
                path.display(),
                index + 1,
                e
            ))
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Reject transactions that violate the non-negativity contract.
fn validate_transaction(transaction: &Transaction) -> SpectraResult<()> {
    if transaction.unit_price.is_sign_negative() {
        return Err(SpectraError::InvalidValue(format!(
            "negative unit price {} for product {}",
            transaction.unit_price, transaction.product_id
        )));
    }
    if transaction.quantity < 0 {
        return Err(SpectraError::InvalidValue(format!(
            "negative quantity {} for product {}",
            transaction.quantity, transaction.product_id
        )));
    }
    Ok(())
}
