//! Input format constants
//!
//! Defines the expected CSV layout and the date formats accepted for the
//! `Date` column.

/// Required CSV header columns in the standard export order
/// (Date, Open, High, Low, Close, Adj Close, Volume).
///
/// Lookup is by header name, so files may order columns freely and carry
/// extras; only these seven must be present.
pub const REQUIRED_COLUMNS: &[&str] =
    &["Date", "Open", "High", "Low", "Close", "Adj Close", "Volume"];

/// Date formats tried in order for each `Date` value.
///
/// A single file may mix formats row to row; every value must match one of
/// these or ingestion fails identifying the row.
pub const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",  // 2024-01-31
    "%m/%d/%Y",  // 01/31/2024
    "%Y/%m/%d",  // 2024/01/31
    "%d-%b-%Y",  // 31-Jan-2024
    "%b %d, %Y", // Jan 31, 2024
];

/// Maximum accepted size for an uploaded CSV file
pub const MAX_CSV_SIZE: usize = 20 * 1024 * 1024; // 20MB

/// Extensions accepted for uploaded price files
pub const ALLOWED_CSV_EXTS: &[&str] = &["csv", "txt"];
