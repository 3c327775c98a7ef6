//! Spectra - Main Entry Point
//!
//! Command-line front end: load the three sales CSV files, run the
//! year-over-year report, and print it in the requested format.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::Level;

use spectra::ingest::load_sales_data;
use spectra::{render_table, to_csv_string, to_json_string};
use spectra::{PriorYearScope, ReportConfig, ReportEngine};

#[derive(Parser)]
#[command(name = "spectra")]
#[command(about = "Spectra - Year-over-Year Sales Reporting Engine")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Path to the transactions CSV file
    #[arg(long)]
    transactions: String,

    /// Path to the products CSV file
    #[arg(long)]
    products: String,

    /// Path to the departments CSV file
    #[arg(long)]
    departments: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,

    /// How many ranks to keep per department and year
    #[arg(long, default_value_t = spectra::common::constants::DEFAULT_TOP_N)]
    top: usize,

    /// Look up prior-year totals only among products that ranked that year
    #[arg(long)]
    top_ranked_history: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let source = load_sales_data(&cli.transactions, &cli.products, &cli.departments)
        .context("failed to load sales data")?;

    let config = ReportConfig {
        top_n: cli.top,
        prior_year_scope: if cli.top_ranked_history {
            PriorYearScope::TopRankedOnly
        } else {
            PriorYearScope::FullHistory
        },
    };
    let engine = ReportEngine::with_config(source, config);
    let report = engine
        .run_yoy_top5_report()
        .context("report generation failed")?;

    match cli.output {
        OutputFormat::Table => {
            print!("{}", render_table(&report));
            println!(
                "{} row{}",
                report.len(),
                if report.len() == 1 { "" } else { "s" }
            );
        }
        OutputFormat::Csv => print!("{}", to_csv_string(&report)?),
        OutputFormat::Json => println!("{}", to_json_string(&report)?),
    }

    Ok(())
}
