//! Flat rule records as edited in the rule list.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Method, RuleType};

/// One scrubbing instruction: what to look for, where, and how to redact it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub id: u32,
    pub method: Method,
    #[serde(rename = "type")]
    pub rule_type: RuleType,
    /// Selector expression naming the event fields the rule applies to.
    pub source: String,
    /// Replacement text; only meaningful for [`Method::Replace`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Regex; only meaningful for [`RuleType::Pattern`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Type-specific wire fields the editor does not model (`keyPattern`,
    /// `replaceGroups`, `rules`, ...), written back unchanged.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub options: IndexMap<String, Value>,
    /// Unmodeled fields of the `redaction` object, such as `hashKey`.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub redaction_options: IndexMap<String, Value>,
}

impl Rule {
    pub fn from_draft(id: u32, draft: RuleDraft) -> Self {
        let draft = draft.normalized();
        Self {
            id,
            method: draft.method,
            rule_type: draft.rule_type,
            source: draft.source,
            placeholder: draft.placeholder,
            pattern: draft.pattern,
            options: draft.options,
            redaction_options: draft.redaction_options,
        }
    }

    pub fn to_draft(&self) -> RuleDraft {
        RuleDraft {
            method: self.method.clone(),
            rule_type: self.rule_type.clone(),
            source: self.source.clone(),
            placeholder: self.placeholder.clone(),
            pattern: self.pattern.clone(),
            options: self.options.clone(),
            redaction_options: self.redaction_options.clone(),
        }
    }
}

/// A rule as entered in the editor form, before it has an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDraft {
    pub method: Method,
    #[serde(rename = "type")]
    pub rule_type: RuleType,
    #[serde(default)]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub options: IndexMap<String, Value>,
    /// Unmodeled fields of the `redaction` object, such as `hashKey`.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub redaction_options: IndexMap<String, Value>,
}

impl RuleDraft {
    pub fn new(method: Method, rule_type: RuleType, source: impl Into<String>) -> Self {
        Self {
            method,
            rule_type,
            source: source.into(),
            placeholder: None,
            pattern: None,
            options: IndexMap::new(),
            redaction_options: IndexMap::new(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Drop fields the selected method/type does not use.
    pub fn normalized(mut self) -> Self {
        if self.method != Method::Replace {
            self.placeholder = None;
        }
        if self.rule_type != RuleType::Pattern {
            self.pattern = None;
        }
        self
    }
}
