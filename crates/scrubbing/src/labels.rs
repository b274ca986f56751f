//! Human-readable labels and dropdown options for the rule editor.

use serde::Serialize;

use crate::schema::{Method, RuleType};

/// Display text for a redaction method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodLabel {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One entry of a select dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub fn method_label(method: &Method) -> MethodLabel {
    let (label, description) = match method {
        Method::Mask => ("Mask", "Replace with ****"),
        Method::Hash => ("Hash", "Replace with DEADBEEF"),
        Method::Remove => ("Remove", "Replace with null"),
        Method::Replace => ("Replace", "Replace with Placeholder"),
        Method::Custom(token) => {
            return MethodLabel {
                label: token.clone(),
                description: None,
            }
        }
    };
    MethodLabel {
        label: label.to_string(),
        description: Some(description.to_string()),
    }
}

pub fn rule_type_label(rule_type: &RuleType) -> String {
    let label = match rule_type {
        RuleType::Anything => "Anything",
        RuleType::Imei => "IMEI numbers",
        RuleType::Mac => "MAC addresses",
        RuleType::Email => "Email addresses",
        RuleType::PemKey => "PEM keys",
        RuleType::UrlAuth => "Auth in URLs",
        RuleType::UsSsn => "US social security numbers",
        RuleType::UserPath => "Usernames in filepaths",
        RuleType::Uuid => "UUIDs",
        RuleType::CreditCard => "Credit card numbers",
        RuleType::Password => "Password fields",
        RuleType::Ip => "IP addresses",
        RuleType::Pattern => "Regex matches",
        RuleType::Custom(token) => token.as_str(),
    };
    label.to_string()
}

/// Built-in methods sorted by wire token.
pub fn method_options() -> Vec<SelectOption> {
    let mut methods = Method::BUILT_IN.to_vec();
    methods.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    methods
        .iter()
        .map(|method| {
            let MethodLabel { label, description } = method_label(method);
            SelectOption {
                label,
                value: method.as_str().to_string(),
                description,
            }
        })
        .collect()
}

/// Built-in rule types sorted by wire token.
pub fn rule_type_options() -> Vec<SelectOption> {
    let mut types = RuleType::BUILT_IN.to_vec();
    types.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    types
        .iter()
        .map(|rule_type| SelectOption {
            label: rule_type_label(rule_type),
            value: rule_type.as_str().to_string(),
            description: None,
        })
        .collect()
}

/// Selector suggestion shown under the source input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceSuggestion {
    pub value: &'static str,
    pub description: &'static str,
}

const SOURCE_SUGGESTIONS: &[SourceSuggestion] = &[
    SourceSuggestion { value: "**", description: "everywhere" },
    SourceSuggestion { value: "$string", description: "Any string value" },
    SourceSuggestion { value: "$number", description: "Any integer or float value" },
    SourceSuggestion { value: "$boolean", description: "Any boolean value" },
    SourceSuggestion { value: "$datetime", description: "Timestamps and dates" },
    SourceSuggestion { value: "$array", description: "Any JSON array value" },
    SourceSuggestion { value: "$object", description: "Any JSON object" },
    SourceSuggestion { value: "$event", description: "The entire event" },
    SourceSuggestion { value: "$exception", description: "Exception interface" },
    SourceSuggestion { value: "$stacktrace", description: "Stack trace" },
    SourceSuggestion { value: "$frame", description: "Stack trace frame" },
    SourceSuggestion { value: "$request", description: "HTTP request" },
    SourceSuggestion { value: "$user", description: "User information" },
    SourceSuggestion { value: "$logentry", description: "Log message" },
    SourceSuggestion { value: "$thread", description: "Thread" },
    SourceSuggestion { value: "$breadcrumb", description: "Breadcrumb" },
    SourceSuggestion { value: "$span", description: "Trace span" },
    SourceSuggestion { value: "$sdk", description: "SDK information" },
    SourceSuggestion { value: "$error.value", description: "Exception message" },
    SourceSuggestion { value: "$message", description: "Log message text" },
    SourceSuggestion { value: "$http.headers", description: "HTTP request headers" },
    SourceSuggestion { value: "$user.ip_address", description: "User IP address" },
    SourceSuggestion { value: "$frame.vars", description: "Local variables in stack frames" },
    SourceSuggestion { value: "extra", description: "Additional data" },
];

pub fn source_suggestions() -> &'static [SourceSuggestion] {
    SOURCE_SUGGESTIONS
}
