//! Year-over-Year Scenario Tests
//!
//! Reference scenarios for the comparison stage: growth against a
//! prior year, first-year products, ties, unknown products, and the
//! configuration switches.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use spectra::{
    Department, InMemorySource, PriorYearScope, Product, ReportConfig, ReportEngine, ReportRow,
    SpectraResult, Transaction,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn tx(product_id: i64, when: (i32, u32, u32), unit_price: &str, quantity: i64) -> Transaction {
    Transaction {
        product_id,
        date: date(when.0, when.1, when.2),
        unit_price: dec(unit_price),
        quantity,
    }
}

fn product(product_id: i64, name: &str, department_id: i64) -> Product {
    Product {
        product_id,
        name: name.to_string(),
        department_id,
    }
}

fn electronics() -> Vec<Department> {
    vec![Department {
        department_id: 10,
        name: "Electronics".to_string(),
    }]
}

fn run_report(source: InMemorySource) -> SpectraResult<Vec<ReportRow>> {
    ReportEngine::new(source).run_yoy_top5_report()
}

fn find<'a>(report: &'a [ReportRow], product: &str, year: i32) -> &'a ReportRow {
    report
        .iter()
        .find(|r| r.product == product && r.year == year)
        .unwrap_or_else(|| panic!("no report row for {product}/{year}"))
}

#[test]
fn test_growth_against_prior_year() -> SpectraResult<()> {
    // TV: $1,000 over 10 units in 2022, $1,500 over 15 units in 2023.
    let source = InMemorySource::new(
        vec![tx(1, (2022, 5, 1), "100.00", 10), tx(1, (2023, 5, 1), "100.00", 15)],
        vec![product(1, "TV", 10)],
        electronics(),
    );
    let report = run_report(source)?;

    let row_2023 = find(&report, "TV", 2023);
    assert_eq!(row_2023.rank, 1);
    assert_eq!(row_2023.revenue, dec("1500.00"));
    assert_eq!(row_2023.prior_revenue, dec("1000.00"));
    assert_eq!(row_2023.revenue_pct_change, dec("0.5"));
    assert_eq!(row_2023.quantity, 15);
    assert_eq!(row_2023.prior_quantity, 10);
    assert_eq!(row_2023.quantity_pct_change, dec("0.5"));

    // 2022 has no 2021 baseline.
    let row_2022 = find(&report, "TV", 2022);
    assert_eq!(row_2022.prior_revenue, Decimal::ZERO);
    assert_eq!(row_2022.revenue_pct_change, Decimal::ONE);

    Ok(())
}

#[test]
fn test_first_year_product_reads_as_fully_new() -> SpectraResult<()> {
    let source = InMemorySource::new(
        vec![tx(2, (2023, 7, 4), "100.00", 5)],
        vec![product(2, "Radio", 10)],
        electronics(),
    );
    let report = run_report(source)?;

    let row = find(&report, "Radio", 2023);
    assert_eq!(row.revenue, dec("500.00"));
    assert_eq!(row.prior_revenue, Decimal::ZERO);
    assert_eq!(row.revenue_pct_change, Decimal::ONE);
    assert_eq!(row.prior_quantity, 0);
    assert_eq!(row.quantity_pct_change, Decimal::ONE);

    Ok(())
}

#[test]
fn test_full_tie_shares_rank_without_gap() -> SpectraResult<()> {
    // TV and Radio tie on both revenue and quantity; Lamp trails.
    let source = InMemorySource::new(
        vec![
            tx(1, (2023, 1, 1), "200.00", 10),
            tx(2, (2023, 1, 2), "200.00", 10),
            tx(3, (2023, 1, 3), "50.00", 10),
        ],
        vec![product(1, "TV", 10), product(2, "Radio", 10), product(3, "Lamp", 10)],
        electronics(),
    );
    let report = run_report(source)?;

    assert_eq!(find(&report, "TV", 2023).rank, 1);
    assert_eq!(find(&report, "Radio", 2023).rank, 1);
    assert_eq!(find(&report, "Lamp", 2023).rank, 2);

    Ok(())
}

#[test]
fn test_quantity_breaks_revenue_ties() -> SpectraResult<()> {
    // Equal revenue, but Radio moved twice the units.
    let source = InMemorySource::new(
        vec![tx(1, (2023, 1, 1), "200.00", 10), tx(2, (2023, 1, 2), "100.00", 20)],
        vec![product(1, "TV", 10), product(2, "Radio", 10)],
        electronics(),
    );
    let report = run_report(source)?;

    assert_eq!(find(&report, "Radio", 2023).rank, 1);
    assert_eq!(find(&report, "TV", 2023).rank, 2);

    Ok(())
}

#[test]
fn test_unknown_product_is_excluded() -> SpectraResult<()> {
    let known = vec![tx(1, (2023, 3, 3), "100.00", 2)];
    let mut with_orphan = known.clone();
    with_orphan.push(tx(99, (2023, 3, 4), "999.00", 50));

    let clean = run_report(InMemorySource::new(
        known,
        vec![product(1, "TV", 10)],
        electronics(),
    ))?;
    let dirty = run_report(InMemorySource::new(
        with_orphan,
        vec![product(1, "TV", 10)],
        electronics(),
    ))?;

    // The orphan transaction leaves no trace anywhere in the report.
    assert_eq!(clean, dirty);

    Ok(())
}

#[test]
fn test_prior_year_scope_modes_diverge() -> SpectraResult<()> {
    // Six products in 2022: Lamp ranks sixth and misses the top five,
    // then leads 2023.
    let mut transactions: Vec<Transaction> = (1..=5)
        .map(|i| tx(i, (2022, 1, 1), &format!("{}.00", 1000 * (6 - i)), 1))
        .collect();
    transactions.push(tx(6, (2022, 6, 1), "400.00", 1));
    transactions.push(tx(6, (2023, 6, 1), "1000.00", 1));

    let mut products: Vec<Product> = (1..=5)
        .map(|i| product(i, &format!("Product{i}"), 10))
        .collect();
    products.push(product(6, "Lamp", 10));

    let make_source = || {
        InMemorySource::new(transactions.clone(), products.clone(), electronics())
    };

    let full = ReportEngine::new(make_source()).run_yoy_top5_report()?;
    let lamp_full = find(&full, "Lamp", 2023);
    assert_eq!(lamp_full.prior_revenue, dec("400.00"));
    assert_eq!(lamp_full.revenue_pct_change, dec("1.5"));

    let config = ReportConfig {
        prior_year_scope: PriorYearScope::TopRankedOnly,
        ..ReportConfig::default()
    };
    let top_only = ReportEngine::with_config(make_source(), config).run_yoy_top5_report()?;
    let lamp_top = find(&top_only, "Lamp", 2023);
    assert_eq!(lamp_top.prior_revenue, Decimal::ZERO);
    assert_eq!(lamp_top.revenue_pct_change, Decimal::ONE);

    Ok(())
}

#[test]
fn test_top_n_is_configurable() -> SpectraResult<()> {
    let transactions: Vec<Transaction> = (1..=4)
        .map(|i| tx(i, (2023, 1, 1), &format!("{}.00", 100 * (5 - i)), 1))
        .collect();
    let products: Vec<Product> = (1..=4)
        .map(|i| product(i, &format!("Product{i}"), 10))
        .collect();

    let config = ReportConfig {
        top_n: 2,
        ..ReportConfig::default()
    };
    let engine = ReportEngine::with_config(
        InMemorySource::new(transactions, products, electronics()),
        config,
    );
    let report = engine.run_yoy_top5_report()?;

    assert_eq!(report.len(), 2);
    assert_eq!(report[0].product, "Product1");
    assert_eq!(report[1].product, "Product2");

    Ok(())
}
