//! Alert trigger thresholds and the overlay lines drawn for them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Iteration cap for [`decimal_precision`].
pub const MAX_PRECISION: u32 = 20;

pub const WARNING_COLOR: &str = "#FFC227";
pub const CRITICAL_COLOR: &str = "#F55459";
pub const RESOLVE_COLOR: &str = "#2BA185";

/// Severity of an alert trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerLabel {
    Warning,
    Critical,
    #[serde(other)]
    Other,
}

/// Threshold configuration of one trigger of an alert rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trigger {
    pub label: TriggerLabel,
    #[serde(default, deserialize_with = "numeric_or_none")]
    pub alert_threshold: Option<f64>,
    #[serde(default, deserialize_with = "numeric_or_none")]
    pub resolve_threshold: Option<f64>,
}

/// Anything that is not a JSON number means "no threshold".
fn numeric_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

/// Which of a trigger's two thresholds a line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdKind {
    Alert,
    Resolve,
}

/// A horizontal dashed overlay line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdLine {
    pub trigger: TriggerLabel,
    pub kind: ThresholdKind,
    pub value: f64,
    /// Decimal places used when printing `value`.
    pub precision: u32,
    pub color: &'static str,
}

impl ThresholdLine {
    pub fn label(&self) -> String {
        format_threshold(self.value, self.precision)
    }
}

/// Smallest number of decimal places that represents `value` exactly.
///
/// Missing, NaN and infinite values give 0.
pub fn decimal_precision(value: Option<f64>) -> u32 {
    decimal_precision_bounded(value, MAX_PRECISION)
}

/// [`decimal_precision`] with an explicit iteration cap. Values that never
/// round-trip return `max_precision`.
pub fn decimal_precision_bounded(value: Option<f64>, max_precision: u32) -> u32 {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return 0;
    };

    let mut scale = 1.0_f64;
    let mut precision = 0;
    while precision < max_precision && (value * scale).round() / scale != value {
        scale *= 10.0;
        precision += 1;
    }
    precision
}

pub fn format_threshold(value: f64, precision: u32) -> String {
    format!("{:.*}", precision as usize, value)
}

fn first_with_label(triggers: &[Trigger], label: TriggerLabel) -> Option<&Trigger> {
    triggers.iter().find(|t| t.label == label)
}

/// Overlay lines for the warning and critical triggers, alert threshold
/// before resolve threshold. Only the first trigger of each label counts.
pub fn threshold_overlays(triggers: &[Trigger], max_precision: u32) -> Vec<ThresholdLine> {
    let mut lines = Vec::new();

    for (label, alert_color) in [
        (TriggerLabel::Warning, WARNING_COLOR),
        (TriggerLabel::Critical, CRITICAL_COLOR),
    ] {
        let Some(trigger) = first_with_label(triggers, label) else {
            continue;
        };

        let thresholds = [
            (ThresholdKind::Alert, trigger.alert_threshold, alert_color),
            (ThresholdKind::Resolve, trigger.resolve_threshold, RESOLVE_COLOR),
        ];
        for (kind, value, color) in thresholds {
            let Some(value) = value.filter(|v| v.is_finite()) else {
                continue;
            };
            lines.push(ThresholdLine {
                trigger: label,
                kind,
                value,
                precision: decimal_precision_bounded(Some(value), max_precision),
                color,
            });
        }
    }

    lines
}
