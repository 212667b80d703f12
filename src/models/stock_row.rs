use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{PriceBar, Trend};

/// One derived day of trading data
///
/// Produced by the derivation pass from a [`PriceBar`] and its predecessor.
/// Rows are never mutated after derivation; a new upload builds a fresh
/// series from scratch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRow {
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

    /// Adjusted closing price
    pub adj_close: f64,

    /// Trading volume (number of shares)
    pub volume: u64,

    /// Percentage change in adjusted close from the prior trading day:
    /// ((adj_close - prev_adj_close) / prev_adj_close) * 100
    pub daily_return: f64,

    /// Compounded growth factor of a unit investment, accumulated from daily
    /// returns. At the first retained row this is 1 + daily_return/100, not 1.0.
    pub cumulative_return: f64,

    /// Trend label classifying the day's return
    pub trend: Trend,
}

impl StockRow {
    /// Build a derived row from a raw bar and its computed metrics
    pub fn from_bar(bar: &PriceBar, daily_return: f64, cumulative_return: f64) -> Self {
        Self {
            date: bar.date,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            adj_close: bar.adj_close,
            volume: bar.volume,
            daily_return,
            cumulative_return,
            trend: Trend::classify(daily_return),
        }
    }
}
