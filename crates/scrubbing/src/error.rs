//! Error types for rule editing and saving.

/// Errors raised by rule-set edits and the save collaborator.
///
/// Decoding never produces one of these: malformed configs degrade to an
/// empty rule list.
#[derive(Debug, thiserror::Error)]
pub enum ScrubbingError {
    /// No rule with the given id exists in the rule set.
    #[error("rule not found: {0}")]
    RuleNotFound(u32),

    /// The highest id in the set is `u32::MAX`, so no fresh id is left.
    #[error("no rule id available after {0}")]
    IdsExhausted(u32),

    /// Transport-level HTTP failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API returned {status}: {body}")]
    Api { status: u16, body: String },

    /// Missing or invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] scrubwatch_core::CoreError),
}

/// Result alias for scrubbing operations.
pub type Result<T> = std::result::Result<T, ScrubbingError>;
