//! Return derivation
//!
//! Single pass over a sorted bar series computing daily return, cumulative
//! return and trend label per row. The earliest row has no prior close and is
//! dropped from the output.

use crate::models::{PriceBar, StockRow, StockSeries};

/// Derive the metric columns from a chronologically sorted bar series
///
/// Daily return is the percentage change of adjusted close against the prior
/// row; cumulative return is the running product of `1 + daily_return/100`,
/// seeded at 1.0. Inputs shorter than two rows yield an empty series.
///
/// A zero or negative prior adjusted close produces a non-finite return; it
/// is propagated into the row as-is rather than treated as a data error.
pub fn derive(bars: &[PriceBar]) -> StockSeries {
    let mut series = Vec::with_capacity(bars.len().saturating_sub(1));
    let mut cumulative = 1.0;

    for pair in bars.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);
        let daily_return = (curr.adj_close - prev.adj_close) / prev.adj_close * 100.0;
        cumulative *= 1.0 + daily_return / 100.0;
        series.push(StockRow::from_bar(curr, daily_return, cumulative));
    }

    series
}
