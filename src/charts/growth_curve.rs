//! Cumulative growth curve: value of a unit investment over time

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::StockRow;

/// Area chart of cumulative return by date
#[derive(Debug, Clone, Serialize)]
pub struct CumulativeGrowthChart {
    pub dates: Vec<NaiveDate>,
    pub cumulative_return: Vec<f64>,
    /// The frontend fills the area between the curve and zero
    pub fill_to_zero: bool,
}

impl CumulativeGrowthChart {
    pub fn build(series: &[StockRow]) -> Self {
        Self {
            dates: series.iter().map(|row| row.date).collect(),
            cumulative_return: series.iter().map(|row| row.cumulative_return).collect(),
            fill_to_zero: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceBar;

    #[test]
    fn test_build_tracks_cumulative_return() {
        let series: Vec<StockRow> = [(3, 1.03), (4, 1.05)]
            .iter()
            .map(|&(day, cumulative)| {
                let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
                let bar = PriceBar::new(date, 10.0, 10.0, 10.0, 10.0, 10.0, 100);
                StockRow::from_bar(&bar, 1.0, cumulative)
            })
            .collect();

        let chart = CumulativeGrowthChart::build(&series);
        assert_eq!(chart.cumulative_return, vec![1.03, 1.05]);
        assert!(chart.fill_to_zero);
    }
}
