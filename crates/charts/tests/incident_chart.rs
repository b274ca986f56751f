//! End-to-end chart assembly from `data/fixtures/incident-chart.json`.

use scrubwatch_charts::chart::THRESHOLD_SERIES_NAME;
use scrubwatch_charts::markers::{CLOSED_MARKER_NAME, STARTED_MARKER_NAME};
use scrubwatch_charts::{build_incident_chart, nearest_bucket_index, ChartPoint, IncidentChartInput};
use scrubwatch_core::config::ChartConfig;

fn load_input() -> IncidentChartInput {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/fixtures/incident-chart.json");
    let json = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    serde_json::from_str(&json)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e))
}

#[test]
fn fixture_aligns_incident_window() {
    let input = load_input();
    let started = input.started.unwrap().timestamp();
    let closed = input.closed.unwrap().timestamp();

    // 10:00:30 falls in the 10:00 bucket, 10:03:00 is exactly a bucket start.
    assert_eq!(nearest_bucket_index(&input.series, started), 1);
    assert_eq!(nearest_bucket_index(&input.series, closed), 4);
}

#[test]
fn fixture_builds_full_chart() {
    let input = load_input();
    let chart = build_incident_chart(&input, &ChartConfig::default());

    // data series + warning alert + critical alert + critical resolve
    assert_eq!(chart.series.len(), 4);

    let main = &chart.series[0];
    assert_eq!(main.series_name, "count()");
    assert_eq!(main.data_array.len(), 6);
    assert_eq!(main.data_array[1], ChartPoint(1_709_287_200_000, 15));
    assert_eq!(main.data_array[4], ChartPoint(1_709_287_380_000, 0));

    let markers = &main.mark_point.as_ref().unwrap().data;
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].name, STARTED_MARKER_NAME);
    assert_eq!(markers[0].coord, main.data_array[1]);
    assert_eq!(markers[1].name, CLOSED_MARKER_NAME);
    assert_eq!(markers[1].coord, main.data_array[4]);

    let labels: Vec<String> = chart.series[1..]
        .iter()
        .map(|s| {
            assert_eq!(s.series_name, THRESHOLD_SERIES_NAME);
            s.mark_line.as_ref().unwrap().label.formatter.clone()
        })
        .collect();
    assert_eq!(labels, vec!["40.25", "70", "12.5"]);

    // Highest threshold (70) is below the peak of 80.
    assert_eq!(chart.y_axis_max, None);
}

#[test]
fn resolution_beyond_data_hides_closed_marker() {
    let mut input = load_input();
    input.series.truncate(4); // data now ends at 10:02
    let chart = build_incident_chart(&input, &ChartConfig::default());
    let markers = &chart.series[0].mark_point.as_ref().unwrap().data;
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].name, STARTED_MARKER_NAME);
}
