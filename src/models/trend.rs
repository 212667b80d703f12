/// Trend label for a day's return
///
/// Categorizes the magnitude and direction of a daily percentage return into
/// a closed set of labels.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    /// -0.3 < r <= 0.3
    #[serde(rename = "Insignificant Change")]
    InsignificantChange,

    /// 0.3 < r <= 3
    #[serde(rename = "Positive Change")]
    PositiveChange,

    /// -3 < r <= -0.3
    #[serde(rename = "Negative Change")]
    NegativeChange,

    /// 3 < r <= 7
    #[serde(rename = "Large Positive Change")]
    LargePositiveChange,

    /// -7 < r <= -3
    #[serde(rename = "Large Negative Change")]
    LargeNegativeChange,

    /// r > 7
    #[serde(rename = "Bull Run")]
    BullRun,

    /// r <= -7
    #[serde(rename = "Bear Sell Off")]
    BearSellOff,

    /// Fallback. The buckets above cover every real number, so this is only
    /// reachable for NaN returns.
    #[serde(rename = "Stable")]
    Stable,
}

type Predicate = fn(f64) -> bool;

/// Ordered (predicate, label) partition of the return line, first match wins.
///
/// The intervals are half-open exactly as documented on each variant; keeping
/// them as an explicit table makes the partition auditable in isolation.
const BUCKETS: &[(Predicate, Trend)] = &[
    (|r| -0.3 < r && r <= 0.3, Trend::InsignificantChange),
    (|r| 0.3 < r && r <= 3.0, Trend::PositiveChange),
    (|r| -3.0 < r && r <= -0.3, Trend::NegativeChange),
    (|r| 3.0 < r && r <= 7.0, Trend::LargePositiveChange),
    (|r| -7.0 < r && r <= -3.0, Trend::LargeNegativeChange),
    (|r| r > 7.0, Trend::BullRun),
    (|r| r <= -7.0, Trend::BearSellOff),
];

impl Trend {
    /// Classify a daily percentage return
    pub fn classify(daily_return: f64) -> Trend {
        BUCKETS
            .iter()
            .find(|(matches, _)| matches(daily_return))
            .map(|&(_, trend)| trend)
            .unwrap_or(Trend::Stable)
    }

    /// Human-readable label, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::InsignificantChange => "Insignificant Change",
            Trend::PositiveChange => "Positive Change",
            Trend::NegativeChange => "Negative Change",
            Trend::LargePositiveChange => "Large Positive Change",
            Trend::LargeNegativeChange => "Large Negative Change",
            Trend::BullRun => "Bull Run",
            Trend::BearSellOff => "Bear Sell Off",
            Trend::Stable => "Stable",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
