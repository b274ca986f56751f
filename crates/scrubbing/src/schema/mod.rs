//! Scrubbing rule types.
//!
//! - `Method` / `RuleType`: closed enumerations with a `Custom` variant that
//!   carries unknown wire tokens verbatim
//! - `Rule` / `RuleDraft`: the flat, editable rule records
//! - `PiiConfig`: the Relay wire format (`rules` + `applications`)

mod method;
mod rule;
mod rule_type;
mod wire;

pub use method::*;
pub use rule::*;
pub use rule_type::*;
pub use wire::*;

#[cfg(test)]
mod tests;
