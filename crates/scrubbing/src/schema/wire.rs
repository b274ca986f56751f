//! Relay PII config wire format.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Method, RuleType};

/// Serialized scrubbing configuration as stored on an organization or project.
///
/// Both maps keep document order; `applications` order decides the order in
/// which rules without a numeric key are listed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PiiConfig {
    #[serde(default)]
    pub rules: IndexMap<String, RuleConfig>,
    /// Selector → rule references (rule keys or `@type:method` built-ins).
    #[serde(default)]
    pub applications: IndexMap<String, Vec<String>>,
}

/// One entry of `rules`. Fields beyond these are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<RuleType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redaction: Option<Redaction>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Redaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<Method>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}
