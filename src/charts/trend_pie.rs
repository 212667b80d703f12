//! Trend distribution chart: one slice per trend label present in the series

use serde::Serialize;

use crate::models::{StockRow, Trend};

/// One pie slice: a trend label and the number of days carrying it
#[derive(Debug, Clone, Serialize)]
pub struct TrendSlice {
    pub label: Trend,
    pub count: usize,
}

/// Pie/donut chart of how the series' days distribute across trend labels
///
/// Slices are ordered by descending count; labels with no days are absent.
#[derive(Debug, Clone, Serialize)]
pub struct TrendDistributionChart {
    pub slices: Vec<TrendSlice>,
}

impl TrendDistributionChart {
    pub fn build(series: &[StockRow]) -> Self {
        let mut counts: Vec<(Trend, usize)> = Vec::new();
        for row in series {
            match counts.iter_mut().find(|(trend, _)| *trend == row.trend) {
                Some((_, count)) => *count += 1,
                None => counts.push((row.trend, 1)),
            }
        }

        // Stable sort: ties keep first-appearance order
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        Self {
            slices: counts
                .into_iter()
                .map(|(label, count)| TrendSlice { label, count })
                .collect(),
        }
    }
}
