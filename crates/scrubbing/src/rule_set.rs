//! Editable rule list backing the data-scrubbing settings page.

use tracing::debug;

use crate::codec;
use crate::error::{Result, ScrubbingError};
use crate::schema::{Rule, RuleDraft};

/// Ordered list of rules with unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a serialized PII config. Unreadable input gives an empty set.
    pub fn from_config(serialized: &str) -> Self {
        Self {
            rules: codec::decode(serialized),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// One past the highest id in use.
    fn next_id(&self) -> Result<u32> {
        match self.rules.iter().map(|r| r.id).max() {
            None => Ok(0),
            Some(highest) => highest
                .checked_add(1)
                .ok_or(ScrubbingError::IdsExhausted(highest)),
        }
    }

    /// Append a new rule and return its id.
    pub fn add(&mut self, draft: RuleDraft) -> Result<u32> {
        let id = self.next_id()?;
        self.rules.push(Rule::from_draft(id, draft));
        debug!(id, "added scrubbing rule");
        Ok(id)
    }

    /// Replace the rule with the same id, keeping its position.
    pub fn update(&mut self, rule: Rule) -> Result<()> {
        let slot = self
            .rules
            .iter_mut()
            .find(|r| r.id == rule.id)
            .ok_or(ScrubbingError::RuleNotFound(rule.id))?;
        *slot = Rule::from_draft(rule.id, rule.to_draft());
        debug!(id = rule.id, "updated scrubbing rule");
        Ok(())
    }

    pub fn remove(&mut self, id: u32) -> Result<Rule> {
        let index = self
            .rules
            .iter()
            .position(|r| r.id == id)
            .ok_or(ScrubbingError::RuleNotFound(id))?;
        debug!(id, "removed scrubbing rule");
        Ok(self.rules.remove(index))
    }

    /// Serialize for saving. Ids are renumbered by position on the next decode.
    pub fn to_config(&self) -> String {
        codec::encode(&self.rules)
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}
