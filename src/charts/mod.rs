//! Chart descriptions
//!
//! The core generates these; the frontend just renders them. Each chart
//! consumes only the columns it names and depends on none of the others, so
//! any subset can be rendered alone.

pub mod candlestick;
pub mod growth_curve;
pub mod price_line;
pub mod trend_pie;
pub mod volume_scatter;

pub use candlestick::CandlestickChart;
pub use growth_curve::CumulativeGrowthChart;
pub use price_line::PriceLineChart;
pub use trend_pie::TrendDistributionChart;
pub use volume_scatter::VolumePriceChart;

use serde::Serialize;

use crate::models::StockRow;

/// The five charts of one dashboard, in fixed render order
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub price_line: PriceLineChart,
    pub trend_distribution: TrendDistributionChart,
    pub candlestick: CandlestickChart,
    pub volume_price: VolumePriceChart,
    pub cumulative_growth: CumulativeGrowthChart,
}

/// Build all five chart descriptions from a derived series
///
/// The series is read-only here; an empty series yields a dashboard of empty
/// charts rather than an error.
pub fn build_dashboard(series: &[StockRow]) -> Dashboard {
    Dashboard {
        price_line: PriceLineChart::build(series),
        trend_distribution: TrendDistributionChart::build(series),
        candlestick: CandlestickChart::build(series),
        volume_price: VolumePriceChart::build(series),
        cumulative_growth: CumulativeGrowthChart::build(series),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceBar;
    use crate::services::derive;
    use chrono::NaiveDate;

    fn sample_series() -> Vec<StockRow> {
        let bars: Vec<PriceBar> = [100.0, 103.0, 99.91, 110.0]
            .iter()
            .enumerate()
            .map(|(i, &price)| {
                let date = NaiveDate::from_ymd_opt(2024, 1, 2 + i as u32).unwrap();
                PriceBar::new(date, price, price, price, price, price, 1000 + i as u64)
            })
            .collect();
        derive(&bars)
    }

    #[test]
    fn test_dashboard_charts_agree_on_length() {
        let series = sample_series();
        let dashboard = build_dashboard(&series);
        assert_eq!(dashboard.price_line.dates.len(), series.len());
        assert_eq!(dashboard.candlestick.dates.len(), series.len());
        assert_eq!(dashboard.volume_price.points.len(), series.len());
        assert_eq!(dashboard.cumulative_growth.dates.len(), series.len());

        let slice_total: usize = dashboard
            .trend_distribution
            .slices
            .iter()
            .map(|s| s.count)
            .sum();
        assert_eq!(slice_total, series.len());
    }

    #[test]
    fn test_empty_series_builds_empty_dashboard() {
        let dashboard = build_dashboard(&[]);
        assert!(dashboard.price_line.dates.is_empty());
        assert!(dashboard.trend_distribution.slices.is_empty());
        assert!(dashboard.candlestick.dates.is_empty());
        assert!(dashboard.volume_price.points.is_empty());
        assert!(dashboard.cumulative_growth.dates.is_empty());
    }

    #[test]
    fn test_dashboard_serializes_in_fixed_order() {
        let json = serde_json::to_string(&build_dashboard(&sample_series())).unwrap();
        let price = json.find("\"price_line\"").unwrap();
        let trend = json.find("\"trend_distribution\"").unwrap();
        let candle = json.find("\"candlestick\"").unwrap();
        let volume = json.find("\"volume_price\"").unwrap();
        let growth = json.find("\"cumulative_growth\"").unwrap();
        assert!(price < trend && trend < candle && candle < volume && volume < growth);
    }
}
