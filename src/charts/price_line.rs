//! Price line chart: adjusted close over time with zoom presets

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::StockRow;

/// Range-selector step unit, mirroring the frontend's zoom buttons
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeStep {
    Month,
    Year,
    All,
}

/// One interactive zoom preset (e.g. "1m" = one month back from the end)
#[derive(Debug, Clone, Serialize)]
pub struct RangePreset {
    pub label: &'static str,
    pub step: RangeStep,
    /// Number of steps back from the latest date; None for the full range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// Line chart of adjusted close by date
#[derive(Debug, Clone, Serialize)]
pub struct PriceLineChart {
    pub dates: Vec<NaiveDate>,
    pub adj_close: Vec<f64>,
    pub range_presets: Vec<RangePreset>,
}

impl PriceLineChart {
    pub fn build(series: &[StockRow]) -> Self {
        Self {
            dates: series.iter().map(|row| row.date).collect(),
            adj_close: series.iter().map(|row| row.adj_close).collect(),
            range_presets: range_presets(),
        }
    }
}

/// The fixed zoom presets: 1 month, 3 months, 6 months, 1 year, all
fn range_presets() -> Vec<RangePreset> {
    vec![
        RangePreset { label: "1m", step: RangeStep::Month, count: Some(1) },
        RangePreset { label: "3m", step: RangeStep::Month, count: Some(3) },
        RangePreset { label: "6m", step: RangeStep::Month, count: Some(6) },
        RangePreset { label: "1y", step: RangeStep::Year, count: Some(1) },
        RangePreset { label: "All", step: RangeStep::All, count: None },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PriceBar, Trend};

    fn row(day: u32, adj_close: f64) -> StockRow {
        let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        let bar = PriceBar::new(date, adj_close, adj_close, adj_close, adj_close, adj_close, 100);
        StockRow::from_bar(&bar, 0.0, 1.0)
    }

    #[test]
    fn test_build_tracks_adj_close() {
        let chart = PriceLineChart::build(&[row(2, 10.0), row(3, 11.0)]);
        assert_eq!(chart.adj_close, vec![10.0, 11.0]);
        assert_eq!(chart.dates.len(), 2);
    }

    #[test]
    fn test_presets_cover_the_five_zoom_levels() {
        let chart = PriceLineChart::build(&[]);
        let labels: Vec<_> = chart.range_presets.iter().map(|p| p.label).collect();
        assert_eq!(labels, vec!["1m", "3m", "6m", "1y", "All"]);
    }

    #[test]
    fn test_preset_serialization() {
        let json = serde_json::to_string(&range_presets()).unwrap();
        assert!(json.contains(r#""step":"month""#));
        assert!(json.contains(r#""step":"all""#));
    }

    #[test]
    fn test_unused_row_fields_do_not_leak() {
        let mut sample = row(2, 10.0);
        sample.trend = Trend::BullRun;
        let json = serde_json::to_string(&PriceLineChart::build(&[sample])).unwrap();
        assert!(!json.contains("Bull Run"));
    }
}
