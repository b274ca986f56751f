//! Redaction method applied by a scrubbing rule.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a matched value is redacted.
///
/// Tokens the editor does not know are kept in `Custom` so that saving an
/// edited rule list never loses a rule configured elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Method {
    Mask,
    Replace,
    Remove,
    Hash,
    Custom(String),
}

impl Method {
    /// Every method the editor offers, in declaration order.
    pub const BUILT_IN: [Method; 4] = [Method::Mask, Method::Replace, Method::Remove, Method::Hash];

    /// Wire token for this method.
    pub fn as_str(&self) -> &str {
        match self {
            Method::Mask => "mask",
            Method::Replace => "replace",
            Method::Remove => "remove",
            Method::Hash => "hash",
            Method::Custom(token) => token,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Method::Custom(_))
    }
}

impl From<&str> for Method {
    fn from(s: &str) -> Self {
        match s {
            "mask" => Method::Mask,
            "replace" => Method::Replace,
            "remove" => Method::Remove,
            "hash" => Method::Hash,
            other => Method::Custom(other.to_string()),
        }
    }
}

impl From<String> for Method {
    fn from(s: String) -> Self {
        match Method::from(s.as_str()) {
            Method::Custom(_) => Method::Custom(s),
            known => known,
        }
    }
}

impl From<Method> for String {
    fn from(method: Method) -> Self {
        match method {
            Method::Custom(token) => token,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
