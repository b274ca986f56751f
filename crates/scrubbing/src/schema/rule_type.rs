//! Kind of data a scrubbing rule matches.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a rule looks for. `Pattern` rules carry their own regex in
/// [`Rule::pattern`](super::Rule::pattern); the others are Relay built-ins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuleType {
    Pattern,
    CreditCard,
    Password,
    Ip,
    Imei,
    Email,
    Uuid,
    PemKey,
    UrlAuth,
    UsSsn,
    UserPath,
    Mac,
    Anything,
    Custom(String),
}

impl RuleType {
    pub const BUILT_IN: [RuleType; 13] = [
        RuleType::Pattern,
        RuleType::CreditCard,
        RuleType::Password,
        RuleType::Ip,
        RuleType::Imei,
        RuleType::Email,
        RuleType::Uuid,
        RuleType::PemKey,
        RuleType::UrlAuth,
        RuleType::UsSsn,
        RuleType::UserPath,
        RuleType::Mac,
        RuleType::Anything,
    ];

    /// Wire token for this type.
    pub fn as_str(&self) -> &str {
        match self {
            RuleType::Pattern => "pattern",
            RuleType::CreditCard => "creditcard",
            RuleType::Password => "password",
            RuleType::Ip => "ip",
            RuleType::Imei => "imei",
            RuleType::Email => "email",
            RuleType::Uuid => "uuid",
            RuleType::PemKey => "pemkey",
            RuleType::UrlAuth => "url_auth",
            RuleType::UsSsn => "us_ssn",
            RuleType::UserPath => "userpath",
            RuleType::Mac => "mac",
            RuleType::Anything => "anything",
            RuleType::Custom(token) => token,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, RuleType::Custom(_))
    }
}

impl From<&str> for RuleType {
    fn from(s: &str) -> Self {
        match s {
            "pattern" => RuleType::Pattern,
            "creditcard" => RuleType::CreditCard,
            "password" => RuleType::Password,
            "ip" => RuleType::Ip,
            "imei" => RuleType::Imei,
            "email" => RuleType::Email,
            "uuid" => RuleType::Uuid,
            "pemkey" => RuleType::PemKey,
            "url_auth" => RuleType::UrlAuth,
            "us_ssn" => RuleType::UsSsn,
            "userpath" => RuleType::UserPath,
            "mac" => RuleType::Mac,
            "anything" => RuleType::Anything,
            other => RuleType::Custom(other.to_string()),
        }
    }
}

impl From<String> for RuleType {
    fn from(s: String) -> Self {
        match RuleType::from(s.as_str()) {
            RuleType::Custom(_) => RuleType::Custom(s),
            known => known,
        }
    }
}

impl From<RuleType> for String {
    fn from(rule_type: RuleType) -> Self {
        match rule_type {
            RuleType::Custom(token) => token,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
