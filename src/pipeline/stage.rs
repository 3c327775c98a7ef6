//! Staging / join stage
//!
//! Combines the three input collections into a flat row set via inner
//! join on product and department ids. Transactions without a matching
//! product, or whose product references a missing department, are
//! silently dropped rather than treated as an error.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::model::{Department, DepartmentId, Product, ProductId, Transaction};

/// A transaction flattened with its product and department names.
///
/// Exists only for the duration of one report invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRow {
    pub product_id: ProductId,
    pub product_name: String,
    pub department_name: String,
    pub date: NaiveDate,
    pub unit_price: Decimal,
    pub quantity: i64,
}

impl JoinedRow {
    /// Revenue contributed by this row: quantity × unit price, exact.
    pub fn revenue(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

/// Join transactions against the product catalog and departments.
///
/// Build phase: one id-keyed lookup table per reference collection (last
/// record wins on a duplicate id, though ids are unique by upstream
/// contract). Probe phase: one pass over the transactions. Output order
/// follows transaction order, but no ordering guarantee is part of the
/// contract.
pub fn join_rows(
    transactions: &[Transaction],
    products: &[Product],
    departments: &[Department],
) -> Vec<JoinedRow> {
    let product_table: HashMap<ProductId, &Product> =
        products.iter().map(|p| (p.product_id, p)).collect();
    let department_table: HashMap<DepartmentId, &Department> =
        departments.iter().map(|d| (d.department_id, d)).collect();

    let mut rows = Vec::with_capacity(transactions.len());
    let mut dropped = 0usize;

    for transaction in transactions {
        let product = match product_table.get(&transaction.product_id) {
            Some(product) => product,
            None => {
                dropped += 1;
                continue;
            }
        };
        let department = match department_table.get(&product.department_id) {
            Some(department) => department,
            None => {
                dropped += 1;
                continue;
            }
        };

        rows.push(JoinedRow {
            product_id: transaction.product_id,
            product_name: product.name.clone(),
            department_name: department.name.clone(),
            date: transaction.date,
            unit_price: transaction.unit_price,
            quantity: transaction.quantity,
        });
    }

    if dropped > 0 {
        tracing::debug!(dropped, "excluded transactions without a matching product or department");
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn transaction(product_id: ProductId, unit_price: &str, quantity: i64) -> Transaction {
        Transaction {
            product_id,
            date: date(2023, 6, 15),
            unit_price: unit_price.parse().unwrap(),
            quantity,
        }
    }

    #[test]
    fn test_join_carries_names() {
        let transactions = vec![transaction(1, "99.99", 2)];
        let products = vec![Product {
            product_id: 1,
            name: "TV".to_string(),
            department_id: 10,
        }];
        let departments = vec![Department {
            department_id: 10,
            name: "Electronics".to_string(),
        }];

        let rows = join_rows(&transactions, &products, &departments);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].product_name, "TV");
        assert_eq!(rows[0].department_name, "Electronics");
        assert_eq!(rows[0].unit_price, "99.99".parse().unwrap());
        assert_eq!(rows[0].quantity, 2);
    }

    #[test]
    fn test_transaction_without_product_is_dropped() {
        let transactions = vec![transaction(1, "10.00", 1), transaction(99, "10.00", 1)];
        let products = vec![Product {
            product_id: 1,
            name: "TV".to_string(),
            department_id: 10,
        }];
        let departments = vec![Department {
            department_id: 10,
            name: "Electronics".to_string(),
        }];

        let rows = join_rows(&transactions, &products, &departments);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].product_id, 1);
    }

    #[test]
    fn test_product_without_department_is_dropped() {
        let transactions = vec![transaction(1, "10.00", 1)];
        let products = vec![Product {
            product_id: 1,
            name: "TV".to_string(),
            department_id: 99,
        }];
        let departments = vec![Department {
            department_id: 10,
            name: "Electronics".to_string(),
        }];

        let rows = join_rows(&transactions, &products, &departments);

        assert!(rows.is_empty());
    }

    #[test]
    fn test_empty_inputs_produce_no_rows() {
        let rows = join_rows(&[], &[], &[]);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_row_revenue_is_exact() {
        let row = JoinedRow {
            product_id: 1,
            product_name: "TV".to_string(),
            department_name: "Electronics".to_string(),
            date: date(2023, 1, 1),
            unit_price: "0.10".parse().unwrap(),
            quantity: 3,
        };

        assert_eq!(row.revenue(), "0.30".parse::<Decimal>().unwrap());
    }
}
