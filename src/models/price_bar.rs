use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One raw calendar day of trading data, as parsed from the uploaded CSV
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Trading date
    pub date: NaiveDate,

    /// Opening price
    pub open: f64,

    /// Highest price
    pub high: f64,

    /// Lowest price
    pub low: f64,

    /// Closing price
    pub close: f64,

    /// Closing price adjusted for dividends and splits; canonical price
    /// series for return calculations
    pub adj_close: f64,

    /// Trading volume (number of shares)
    pub volume: u64,
}

impl PriceBar {
    /// Create a new price bar
    pub fn new(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        adj_close: f64,
        volume: u64,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            adj_close,
            volume,
        }
    }
}
