//! Tests for schema types.

use super::*;

#[test]
fn known_tokens_map_to_variants() {
    assert_eq!(Method::from("mask"), Method::Mask);
    assert_eq!(Method::from("hash"), Method::Hash);
    assert_eq!(RuleType::from("url_auth"), RuleType::UrlAuth);
    assert_eq!(RuleType::from("us_ssn"), RuleType::UsSsn);
    assert_eq!(RuleType::from("creditcard"), RuleType::CreditCard);
}

#[test]
fn unknown_tokens_are_kept_verbatim() {
    let method = Method::from("scramble");
    assert_eq!(method, Method::Custom("scramble".to_string()));
    assert_eq!(method.as_str(), "scramble");
    assert!(method.is_custom());

    let rule_type = RuleType::from("redactPair".to_string());
    assert_eq!(rule_type.to_string(), "redactPair");
}

#[test]
fn every_built_in_token_parses_back() {
    for method in Method::BUILT_IN {
        assert_eq!(Method::from(method.as_str()), method);
        assert!(!method.is_custom());
    }
    for rule_type in RuleType::BUILT_IN {
        assert_eq!(RuleType::from(rule_type.as_str()), rule_type);
    }
}

#[test]
fn rule_serializes_with_wire_field_names() {
    let rule = Rule {
        id: 3,
        method: Method::Replace,
        rule_type: RuleType::Ip,
        source: "$user.ip_address".to_string(),
        placeholder: Some("[ip]".to_string()),
        pattern: None,
        options: Default::default(),
        redaction_options: Default::default(),
    };

    let value = serde_json::to_value(&rule).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "id": 3,
            "method": "replace",
            "type": "ip",
            "source": "$user.ip_address",
            "placeholder": "[ip]",
        })
    );

    let back: Rule = serde_json::from_value(value).unwrap();
    assert_eq!(back, rule);
}

#[test]
fn normalized_draft_drops_unused_fields() {
    let draft = RuleDraft::new(Method::Mask, RuleType::Email, "$string")
        .with_placeholder("[email]")
        .with_pattern("[a-z]+@");
    let draft = draft.normalized();
    assert_eq!(draft.placeholder, None);
    assert_eq!(draft.pattern, None);

    let draft = RuleDraft::new(Method::Replace, RuleType::Pattern, "$string")
        .with_placeholder("[secret]")
        .with_pattern("sk_[0-9a-f]+")
        .normalized();
    assert_eq!(draft.placeholder.as_deref(), Some("[secret]"));
    assert_eq!(draft.pattern.as_deref(), Some("sk_[0-9a-f]+"));
}

#[test]
fn pii_config_keeps_document_order() {
    let json = r#"{
        "rules": {},
        "applications": {"$string": ["@ip"], "$http.headers": ["@anything:remove"], "$error.value": ["@email"]}
    }"#;
    let config: PiiConfig = serde_json::from_str(json).unwrap();
    let selectors: Vec<&str> = config.applications.keys().map(|s| s.as_str()).collect();
    assert_eq!(selectors, vec!["$string", "$http.headers", "$error.value"]);
}
