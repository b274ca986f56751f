use indexmap::IndexMap;
use serde_json::Value;
use tracing::error;

use crate::schema::{Method, PiiConfig, Redaction, Rule, RuleConfig, RuleType};

/// Serialize the rule list as a PII config JSON string.
pub fn encode(rules: &[Rule]) -> String {
    let config = encode_config(rules);
    match serde_json::to_string(&config) {
        Ok(json) => json,
        Err(e) => {
            error!(error = %e, "failed to serialize PII config");
            "{}".to_string()
        }
    }
}

/// Build the wire config: rule `i` is stored under key `"i"` and listed in
/// the application of its source selector.
pub fn encode_config(rules: &[Rule]) -> PiiConfig {
    let mut config = PiiConfig::default();

    for (position, rule) in rules.iter().enumerate() {
        let key = position.to_string();
        config.rules.insert(key.clone(), rule_config(rule));

        let references = config.applications.entry(rule.source.clone()).or_default();
        if !references.contains(&key) {
            references.push(key);
        }
    }

    config
}

fn rule_config(rule: &Rule) -> RuleConfig {
    let text = match rule.method {
        Method::Replace => rule.placeholder.clone(),
        _ => None,
    };
    let pattern = match rule.rule_type {
        RuleType::Pattern => rule.pattern.clone(),
        _ => None,
    };

    RuleConfig {
        rule_type: Some(rule.rule_type.clone()),
        pattern,
        redaction: Some(Redaction {
            method: Some(rule.method.clone()),
            text,
            extra: unmodeled(&rule.redaction_options, &["method", "text"]),
        }),
        extra: unmodeled(&rule.options, &["type", "pattern", "redaction"]),
    }
}

/// Copy pass-through fields, letting modeled fields win over a name clash.
fn unmodeled(options: &IndexMap<String, Value>, modeled: &[&str]) -> IndexMap<String, Value> {
    options
        .iter()
        .filter(|(key, _)| !modeled.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
