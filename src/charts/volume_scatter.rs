//! Volume vs. price scatterplot, points colored by trend label

use serde::Serialize;

use crate::models::{StockRow, Trend};

/// One scatter point: a day's volume against its adjusted close
#[derive(Debug, Clone, Serialize)]
pub struct VolumePricePoint {
    pub volume: u64,
    pub adj_close: f64,
    /// Drives the point color on the frontend
    pub trend: Trend,
}

/// Scatter chart of trading volume against adjusted close
#[derive(Debug, Clone, Serialize)]
pub struct VolumePriceChart {
    pub points: Vec<VolumePricePoint>,
}

impl VolumePriceChart {
    pub fn build(series: &[StockRow]) -> Self {
        Self {
            points: series
                .iter()
                .map(|row| VolumePricePoint {
                    volume: row.volume,
                    adj_close: row.adj_close,
                    trend: row.trend,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceBar;
    use chrono::NaiveDate;

    #[test]
    fn test_points_carry_trend() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let bar = PriceBar::new(date, 10.0, 10.0, 10.0, 10.0, 10.5, 4200);
        let series = vec![StockRow::from_bar(&bar, 5.0, 1.05)];

        let chart = VolumePriceChart::build(&series);
        assert_eq!(chart.points.len(), 1);
        assert_eq!(chart.points[0].volume, 4200);
        assert_eq!(chart.points[0].adj_close, 10.5);
        assert_eq!(chart.points[0].trend, Trend::LargePositiveChange);
    }
}
