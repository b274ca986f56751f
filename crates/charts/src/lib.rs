//! Incident chart data preparation.
//!
//! This crate provides:
//! - Bucketed time series types and per-bucket aggregation
//! - Alignment of absolute timestamps onto bucket indices
//! - Threshold overlay lines for warning / critical triggers
//! - "Alert Triggered" / "Alert Resolved" markers
//! - Assembly of the chart series consumed by the renderer

pub mod align;
pub mod chart;
pub mod markers;
pub mod series;
pub mod thresholds;

pub use align::{nearest_bucket_index, Bucketed};
pub use chart::{build_incident_chart, IncidentChart, IncidentChartInput};
pub use series::{ChartPoint, CountValue, SeriesPoint};
pub use thresholds::{decimal_precision, Trigger, TriggerLabel};
