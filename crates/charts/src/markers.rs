//! Incident start / resolution markers pinned to chart points.

use serde::Serialize;
use tracing::debug;

use crate::align::nearest_bucket_index;
use crate::series::{ChartPoint, SeriesPoint};

pub const STARTED_MARKER_NAME: &str = "Alert Triggered";
pub const CLOSED_MARKER_NAME: &str = "Alert Resolved";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Started,
    Closed,
}

/// Annotation placed on an existing chart point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkPoint {
    pub name: &'static str,
    pub kind: MarkerKind,
    pub series_name: String,
    pub coord: ChartPoint,
}

/// Markers for an incident window given in seconds.
///
/// `chart_points` must be derived from `series` (same length and order).
/// The closed marker is only drawn when the data reaches the close time.
pub fn incident_markers(
    series: &[SeriesPoint],
    chart_points: &[ChartPoint],
    series_name: &str,
    started: Option<i64>,
    closed: Option<i64>,
) -> Vec<MarkPoint> {
    let Some(last) = series.last() else {
        return Vec::new();
    };

    let mut markers = Vec::new();
    let mut place = |kind, name, needle| {
        if let Some(&coord) = chart_points.get(nearest_bucket_index(series, needle)) {
            markers.push(MarkPoint {
                name,
                kind,
                series_name: series_name.to_string(),
                coord,
            });
        }
    };

    if let Some(started) = started {
        place(MarkerKind::Started, STARTED_MARKER_NAME, started);
    }

    if let Some(closed) = closed {
        if last.timestamp >= closed {
            place(MarkerKind::Closed, CLOSED_MARKER_NAME, closed);
        } else {
            debug!(closed, last = last.timestamp, "resolution is past the data window");
        }
    }

    markers
}
