//! Data-scrubbing rule editor core.
//!
//! This crate provides:
//! - Typed scrubbing rules (`Method`, `RuleType`, `Rule`) with passthrough
//!   of unknown wire tokens
//! - A codec between the Relay PII config JSON and the flat rule list
//! - Rule-set editing (add / update / remove) and form-level validation
//! - Dropdown labels and option lists for the rule editor
//! - A pluggable client for saving the encoded config

pub mod codec;
pub mod error;
pub mod form;
pub mod labels;
pub mod rule_set;
pub mod schema;
pub mod submit;

pub use codec::{decode, decode_config, encode, encode_config};
pub use error::{Result, ScrubbingError};
pub use rule_set::RuleSet;
pub use schema::{Method, PiiConfig, Rule, RuleDraft, RuleType};
