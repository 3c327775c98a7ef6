//! Constants used throughout Spectra

/// Number of top-ranked products retained per (department, year) partition
pub const DEFAULT_TOP_N: usize = 5;

/// Offset subtracted from a row's year to locate its comparison baseline
pub const PRIOR_YEAR_OFFSET: i32 = 1;

/// Decimal places used when rendering currency and percentage values
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Currency symbol used by the presentation layer
pub const CURRENCY_SYMBOL: &str = "$";
