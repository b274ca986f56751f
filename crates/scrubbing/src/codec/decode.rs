use serde_json::Value;
use tracing::{debug, warn};

use crate::schema::{Method, PiiConfig, Rule, RuleConfig, RuleType};

/// Method recorded when a rule leaves the redaction to Relay (`@ip`, or an
/// entry without `redaction.method`).
const DEFAULT_METHOD_TOKEN: &str = "default";

/// Parse a serialized PII config into the flat rule list.
///
/// Empty, non-JSON, or non-object input gives an empty list. Individual rule
/// entries that cannot be read are skipped, the rest of the config survives.
pub fn decode(serialized: &str) -> Vec<Rule> {
    if serialized.trim().is_empty() {
        return Vec::new();
    }

    let value: Value = match serde_json::from_str(serialized) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "PII config is not valid JSON, showing no rules");
            return Vec::new();
        }
    };

    match lenient_config(&value) {
        Some(config) => decode_config(&config),
        None => {
            warn!("PII config is not a JSON object, showing no rules");
            Vec::new()
        }
    }
}

/// Flatten an already-parsed config into rules with positional ids.
pub fn decode_config(config: &PiiConfig) -> Vec<Rule> {
    let mut entries: Vec<(u64, Rule)> = Vec::new();

    for (source, references) in &config.applications {
        for reference in references {
            let rule = match config.rules.get(reference) {
                Some(rule_config) => match resolve_rule(reference, rule_config, source) {
                    Some(rule) => rule,
                    None => continue,
                },
                None => match reference.strip_prefix('@') {
                    Some(builtin) => resolve_builtin(builtin, source),
                    None => {
                        warn!(reference = %reference, source = %source, "dangling rule reference");
                        continue;
                    }
                },
            };
            let order = reference.parse::<u64>().unwrap_or(u64::MAX);
            entries.push((order, rule));
        }
    }

    // Stable: non-numeric references keep document order after numeric ones.
    entries.sort_by_key(|(order, _)| *order);

    let rules: Vec<Rule> = entries
        .into_iter()
        .enumerate()
        .map(|(position, (_, mut rule))| {
            rule.id = position as u32;
            rule
        })
        .collect();

    debug!(count = rules.len(), "decoded PII config");
    rules
}

fn resolve_rule(reference: &str, rule_config: &RuleConfig, source: &str) -> Option<Rule> {
    let Some(rule_type) = rule_config.rule_type.clone() else {
        warn!(reference = %reference, "rule has no type, skipping");
        return None;
    };
    let redaction = rule_config.redaction.as_ref();
    let method = redaction
        .and_then(|r| r.method.clone())
        .unwrap_or_else(|| Method::from(DEFAULT_METHOD_TOKEN));

    let placeholder = match method {
        Method::Replace => redaction.and_then(|r| r.text.clone()),
        _ => None,
    };
    let pattern = match rule_type {
        RuleType::Pattern => rule_config.pattern.clone(),
        _ => None,
    };

    Some(Rule {
        id: 0,
        method,
        rule_type,
        source: source.to_string(),
        placeholder,
        pattern,
        options: rule_config.extra.clone(),
        redaction_options: redaction.map(|r| r.extra.clone()).unwrap_or_default(),
    })
}

/// `anything:remove` → type `anything`, method `remove`.
fn resolve_builtin(builtin: &str, source: &str) -> Rule {
    let (type_token, method_token) = builtin
        .split_once(':')
        .unwrap_or((builtin, DEFAULT_METHOD_TOKEN));

    Rule {
        id: 0,
        method: Method::from(method_token),
        rule_type: RuleType::from(type_token),
        source: source.to_string(),
        placeholder: None,
        pattern: None,
        options: Default::default(),
        redaction_options: Default::default(),
    }
}

/// Build a [`PiiConfig`] from loosely-typed JSON, dropping unreadable parts.
fn lenient_config(value: &Value) -> Option<PiiConfig> {
    let object = value.as_object()?;
    let mut config = PiiConfig::default();

    if let Some(rules) = object.get("rules").and_then(Value::as_object) {
        for (key, entry) in rules {
            match serde_json::from_value::<RuleConfig>(entry.clone()) {
                Ok(rule_config) => {
                    config.rules.insert(key.clone(), rule_config);
                }
                Err(e) => warn!(reference = %key, error = %e, "unreadable rule entry"),
            }
        }
    }

    if let Some(applications) = object.get("applications").and_then(Value::as_object) {
        for (selector, references) in applications {
            let Some(references) = references.as_array() else {
                warn!(source = %selector, "application is not a list of rule references");
                continue;
            };
            let references = references
                .iter()
                .filter_map(|r| r.as_str().map(str::to_string))
                .collect();
            config.applications.insert(selector.clone(), references);
        }
    }

    Some(config)
}
