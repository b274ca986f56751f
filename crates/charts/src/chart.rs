//! Assembly of the series handed to the chart renderer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use scrubwatch_core::config::ChartConfig;

use crate::markers::{incident_markers, MarkPoint};
use crate::series::{to_chart_points, ChartPoint, SeriesPoint};
use crate::thresholds::{threshold_overlays, ThresholdLine, Trigger};

pub const THRESHOLD_SERIES_NAME: &str = "Threshold Line";

/// Everything the incident chart is drawn from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentChartInput {
    /// Aggregate expression, used as the series name (e.g. `count()`).
    pub aggregate: String,
    #[serde(default)]
    pub started: Option<DateTime<Utc>>,
    #[serde(default)]
    pub closed: Option<DateTime<Utc>>,
    #[serde(default)]
    pub triggers: Vec<Trigger>,
    #[serde(default)]
    pub series: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkPointSet {
    pub data: Vec<MarkPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: &'static str,
    #[serde(rename = "type")]
    pub line_type: &'static str,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkLineDatum {
    pub y_axis: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkLineLabel {
    pub show: bool,
    pub formatter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkLine {
    pub silent: bool,
    pub line_style: LineStyle,
    pub data: Vec<MarkLineDatum>,
    pub label: MarkLineLabel,
}

impl From<&ThresholdLine> for MarkLine {
    fn from(line: &ThresholdLine) -> Self {
        Self {
            silent: true,
            line_style: LineStyle {
                color: line.color,
                line_type: "dashed",
                width: 1,
            },
            data: vec![MarkLineDatum { y_axis: line.value }],
            label: MarkLineLabel {
                show: true,
                formatter: line.label(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub series_name: String,
    pub data_array: Vec<ChartPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_point: Option<MarkPointSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_line: Option<MarkLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentChart {
    pub series: Vec<ChartSeries>,
    /// Set when a threshold line would sit above the highest data point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_max: Option<f64>,
}

/// Build the data series, its incident markers, and one series per
/// threshold overlay.
pub fn build_incident_chart(input: &IncidentChartInput, config: &ChartConfig) -> IncidentChart {
    let data = to_chart_points(&input.series);
    let markers = incident_markers(
        &input.series,
        &data,
        &input.aggregate,
        input.started.map(|t| t.timestamp()),
        input.closed.map(|t| t.timestamp()),
    );
    let overlays = threshold_overlays(&input.triggers, config.max_precision);

    let max_data = data.iter().map(|p| p.value() as f64).fold(0.0_f64, f64::max);
    let max_threshold = overlays.iter().map(|l| l.value).reduce(f64::max);
    let y_axis_max = max_threshold.filter(|&t| t > max_data);

    debug!(
        points = data.len(),
        markers = markers.len(),
        overlays = overlays.len(),
        "built incident chart"
    );

    let mut series = Vec::with_capacity(1 + overlays.len());
    series.push(ChartSeries {
        series_name: input.aggregate.clone(),
        data_array: data,
        mark_point: Some(MarkPointSet { data: markers }),
        mark_line: None,
    });
    series.extend(overlays.iter().map(|line| ChartSeries {
        series_name: THRESHOLD_SERIES_NAME.to_string(),
        data_array: Vec::new(),
        mark_point: None,
        mark_line: Some(MarkLine::from(line)),
    }));

    IncidentChart { series, y_axis_max }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thresholds::TriggerLabel;

    fn input() -> IncidentChartInput {
        IncidentChartInput {
            aggregate: "count()".to_string(),
            started: DateTime::from_timestamp(15, 0),
            closed: None,
            triggers: vec![Trigger {
                label: TriggerLabel::Critical,
                alert_threshold: Some(50.0),
                resolve_threshold: None,
            }],
            series: vec![
                SeriesPoint::new(0, &[1]),
                SeriesPoint::new(10, &[4, 4]),
                SeriesPoint::new(20, &[]),
            ],
        }
    }

    #[test]
    fn builds_data_series_and_threshold_series() {
        let chart = build_incident_chart(&input(), &ChartConfig::default());
        assert_eq!(chart.series.len(), 2);

        let main = &chart.series[0];
        assert_eq!(main.series_name, "count()");
        assert_eq!(
            main.data_array,
            vec![ChartPoint(0, 1), ChartPoint(10_000, 8), ChartPoint(20_000, 0)]
        );
        let markers = &main.mark_point.as_ref().unwrap().data;
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].coord, ChartPoint(10_000, 8));

        let threshold = &chart.series[1];
        assert_eq!(threshold.series_name, THRESHOLD_SERIES_NAME);
        assert!(threshold.data_array.is_empty());
        assert_eq!(threshold.mark_line.as_ref().unwrap().data[0].y_axis, 50.0);
    }

    #[test]
    fn y_axis_raised_only_for_high_thresholds() {
        let chart = build_incident_chart(&input(), &ChartConfig::default());
        assert_eq!(chart.y_axis_max, Some(50.0));

        let mut low = input();
        low.triggers[0].alert_threshold = Some(5.0);
        let chart = build_incident_chart(&low, &ChartConfig::default());
        assert_eq!(chart.y_axis_max, None);
    }

    #[test]
    fn empty_series_still_renders() {
        let mut empty = input();
        empty.series.clear();
        let chart = build_incident_chart(&empty, &ChartConfig::default());
        assert!(chart.series[0].data_array.is_empty());
        assert!(chart.series[0].mark_point.as_ref().unwrap().data.is_empty());
    }

    #[test]
    fn far_future_bucket_does_not_overflow() {
        let mut far = input();
        far.started = None;
        far.series = serde_json::from_str(r#"[[9300000000000000, [{"count": 1}]]]"#).unwrap();
        let chart = build_incident_chart(&far, &ChartConfig::default());
        assert_eq!(chart.series[0].data_array, vec![ChartPoint(i64::MAX, 1)]);
    }

    #[test]
    fn output_uses_renderer_field_names() {
        let chart = build_incident_chart(&input(), &ChartConfig::default());
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["series"][0]["seriesName"], "count()");
        assert_eq!(json["series"][0]["dataArray"][1], serde_json::json!([10000, 8]));
        assert_eq!(json["series"][1]["markLine"]["lineStyle"]["type"], "dashed");
        assert_eq!(json["yAxisMax"], 50.0);
    }
}
