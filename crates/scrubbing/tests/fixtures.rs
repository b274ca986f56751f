//! Integration tests against the sample PII config in `data/fixtures/`.

use scrubwatch_scrubbing::labels::{method_label, method_options, rule_type_label, rule_type_options};
use scrubwatch_scrubbing::{decode, encode, Method, RuleSet, RuleType};

/// Integration tests run from the crate directory, so we go up two levels.
fn fixture(name: &str) -> String {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../data/fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}

#[test]
fn sample_config_decodes_to_documented_enumerations() {
    let rules = decode(&fixture("relay-pii-config.json"));
    assert_eq!(rules.len(), 3);

    let methods: Vec<&Method> = rules.iter().map(|r| &r.method).collect();
    assert_eq!(methods, vec![&Method::Replace, &Method::Mask, &Method::Replace]);

    let types: Vec<&RuleType> = rules.iter().map(|r| &r.rule_type).collect();
    assert_eq!(types, vec![&RuleType::Password, &RuleType::CreditCard, &RuleType::Pattern]);

    assert!(rules.iter().all(|r| !r.method.is_custom() && !r.rule_type.is_custom()));

    let labels: Vec<String> = rules.iter().map(|r| rule_type_label(&r.rule_type)).collect();
    assert_eq!(
        labels,
        vec!["Password fields", "Credit card numbers", "Regex matches"]
    );
    assert_eq!(method_label(&rules[1].method).label, "Mask");
}

#[test]
fn option_lists_match_sorted_enumerations() {
    let methods = Method::BUILT_IN;
    let mut method_values: Vec<&str> = methods.iter().map(|m| m.as_str()).collect();
    method_values.sort();
    let expected: Vec<(String, String)> = method_values
        .iter()
        .map(|v| (method_label(&Method::from(*v)).label, v.to_string()))
        .collect();
    let actual: Vec<(String, String)> = method_options()
        .into_iter()
        .map(|o| (o.label, o.value))
        .collect();
    assert_eq!(actual, expected);

    let types = RuleType::BUILT_IN;
    let mut type_values: Vec<&str> = types.iter().map(|t| t.as_str()).collect();
    type_values.sort();
    let expected: Vec<(String, String)> = type_values
        .iter()
        .map(|v| (rule_type_label(&RuleType::from(*v)), v.to_string()))
        .collect();
    let actual: Vec<(String, String)> = rule_type_options()
        .into_iter()
        .map(|o| (o.label, o.value))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn sample_config_survives_edit_and_save() {
    let mut set = RuleSet::from_config(&fixture("relay-pii-config.json"));
    let removed = set.remove(0).unwrap();
    assert_eq!(removed.rule_type, RuleType::Password);

    let saved = set.to_config();
    let reloaded = decode(&saved);
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded[0].rule_type, RuleType::CreditCard);
    assert_eq!(reloaded[1].pattern.as_deref(), Some("[a-zA-Z0-9]+"));
    assert_eq!(encode(&reloaded), saved);
}
