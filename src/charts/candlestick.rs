//! Candlestick chart: one open/high/low/close glyph per trading day

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::StockRow;

/// Candlestick chart data, column-oriented with all arrays index-aligned
#[derive(Debug, Clone, Serialize)]
pub struct CandlestickChart {
    pub dates: Vec<NaiveDate>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
    /// The frontend renders this chart without the draggable range slider
    pub range_slider: bool,
}

impl CandlestickChart {
    pub fn build(series: &[StockRow]) -> Self {
        Self {
            dates: series.iter().map(|row| row.date).collect(),
            open: series.iter().map(|row| row.open).collect(),
            high: series.iter().map(|row| row.high).collect(),
            low: series.iter().map(|row| row.low).collect(),
            close: series.iter().map(|row| row.close).collect(),
            range_slider: false,
        }
    }
}
