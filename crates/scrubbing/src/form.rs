//! Form-level validation for the rule editor.
//!
//! The codec passes selectors through untouched. Editors run [`validate`]
//! on a draft before adding it to a rule set.

use std::collections::BTreeMap;
use std::fmt;

use crate::schema::{RuleDraft, RuleType};

pub const FIELD_REQUIRED: &str = "Field Required";

/// Editor form fields that can carry an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Source,
    Pattern,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::Source => write!(f, "source"),
            FormField::Pattern => write!(f, "pattern"),
        }
    }
}

/// Per-field error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("invalid rule: {}", describe(.0))]
pub struct FormErrors(BTreeMap<FormField, &'static str>);

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

fn describe(errors: &BTreeMap<FormField, &'static str>) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Check the required fields of a draft. The placeholder is always optional.
pub fn validate(draft: &RuleDraft) -> Result<(), FormErrors> {
    let mut errors = BTreeMap::new();

    if is_blank(Some(draft.source.as_str())) {
        errors.insert(FormField::Source, FIELD_REQUIRED);
    }
    if draft.rule_type == RuleType::Pattern && is_blank(draft.pattern.as_deref()) {
        errors.insert(FormField::Pattern, FIELD_REQUIRED);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(FormErrors(errors))
    }
}
