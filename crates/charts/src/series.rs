//! Bucketed time series as delivered by the stats API, and the chart points
//! derived from it.

use serde::{Deserialize, Serialize};

/// One aggregated value inside a bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountValue {
    #[serde(default)]
    pub count: u64,
}

/// A bucket: start timestamp in seconds plus its values.
///
/// Wire format is a two-element array `[timestamp, [{"count": n}, ...]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(i64, Vec<CountValue>)", into = "(i64, Vec<CountValue>)")]
pub struct SeriesPoint {
    pub timestamp: i64,
    pub values: Vec<CountValue>,
}

impl SeriesPoint {
    pub fn new(timestamp: i64, counts: &[u64]) -> Self {
        Self {
            timestamp,
            values: counts.iter().map(|&count| CountValue { count }).collect(),
        }
    }

    /// Sum of all counts; an empty bucket is 0. Saturates at `u64::MAX`.
    pub fn aggregate(&self) -> u64 {
        self.values
            .iter()
            .fold(0u64, |total, v| total.saturating_add(v.count))
    }

    /// Timestamps beyond the `i64` millisecond range clamp to its bounds.
    pub fn to_chart_point(&self) -> ChartPoint {
        ChartPoint(self.timestamp.saturating_mul(1000), self.aggregate())
    }
}

impl From<(i64, Vec<CountValue>)> for SeriesPoint {
    fn from((timestamp, values): (i64, Vec<CountValue>)) -> Self {
        Self { timestamp, values }
    }
}

impl From<SeriesPoint> for (i64, Vec<CountValue>) {
    fn from(point: SeriesPoint) -> Self {
        (point.timestamp, point.values)
    }
}

/// `[timestamp_millis, value]` as plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint(pub i64, pub u64);

impl ChartPoint {
    pub fn timestamp_millis(&self) -> i64 {
        self.0
    }

    pub fn value(&self) -> u64 {
        self.1
    }
}

/// Convert every bucket to a chart point, preserving order.
pub fn to_chart_points(series: &[SeriesPoint]) -> Vec<ChartPoint> {
    series.iter().map(SeriesPoint::to_chart_point).collect()
}
