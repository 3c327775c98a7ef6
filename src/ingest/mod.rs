//! Data ingestion

mod csv_source;

pub use csv_source::load_sales_data;
