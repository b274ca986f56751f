use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

fn profiled_env_u32(profile: &str, key: &str, default: u32) -> u32 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn profiled_env_u64(profile: &str, key: &str, default: u64) -> u64 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub api: ApiConfig,
    pub chart: ChartConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `SCRUBWATCH_PROFILE` env var. When set (e.g. `PROD`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("SCRUBWATCH_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            api: ApiConfig::from_env_profiled(p),
            chart: ChartConfig::from_env_profiled(p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a redacted summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!(
            "  api:    url={}, org={}, project={}, token={}",
            self.api.base_url,
            self.api.organization.as_deref().unwrap_or("(none)"),
            self.api.project.as_deref().unwrap_or("(none)"),
            if self.api.auth_token.is_some() { "set" } else { "(none)" },
        );
        tracing::info!("  chart:  max_precision={}", self.chart.max_precision);
    }

    /// Return a redacted view safe for printing (no secrets).
    pub fn redacted_summary(&self) -> serde_json::Value {
        serde_json::json!({
            "profile": self.profile_label(),
            "api": {
                "base_url": self.api.base_url,
                "organization": self.api.organization,
                "project": self.api.project,
                "timeout_secs": self.api.timeout_secs,
                "configured": self.api.is_configured(),
            },
            "chart": { "max_precision": self.chart.max_precision },
        })
    }
}

// ── API ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub auth_token: Option<String>,
    pub organization: Option<String>,
    pub project: Option<String>,
    pub timeout_secs: u64,
}

impl ApiConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            base_url: profiled_env_or(p, "SCRUBWATCH_API_URL", "https://sentry.io/api/0"),
            auth_token: profiled_env_opt(p, "SCRUBWATCH_AUTH_TOKEN"),
            organization: profiled_env_opt(p, "SCRUBWATCH_ORG"),
            project: profiled_env_opt(p, "SCRUBWATCH_PROJECT"),
            timeout_secs: profiled_env_u64(p, "SCRUBWATCH_TIMEOUT_SECS", 30),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.auth_token.is_some()
    }

    /// Token for authenticated calls, or an error naming the missing key.
    pub fn require_token(&self) -> Result<&str> {
        self.auth_token
            .as_deref()
            .ok_or(CoreError::MissingConfig("SCRUBWATCH_AUTH_TOKEN"))
    }
}

// ── Chart ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Upper bound for the threshold label precision search.
    pub max_precision: u32,
}

impl ChartConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            max_precision: profiled_env_u32(p, "SCRUBWATCH_MAX_PRECISION", 20),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self { max_precision: 20 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiled_lookup_prefers_prefixed_key() {
        env::set_var("SWTEST_SCRUBWATCH_ORG", "acme-prod");
        env::set_var("SCRUBWATCH_TEST_ONLY_KEY", "plain");

        assert_eq!(
            profiled_env_opt("SWTEST", "SCRUBWATCH_ORG").as_deref(),
            Some("acme-prod")
        );
        // Falls back to the unprefixed key
        assert_eq!(
            profiled_env_opt("SWTEST", "SCRUBWATCH_TEST_ONLY_KEY").as_deref(),
            Some("plain")
        );
        assert_eq!(profiled_env_opt("SWTEST", "SCRUBWATCH_NOT_SET_ANYWHERE"), None);
    }

    #[test]
    fn empty_values_are_ignored() {
        env::set_var("SCRUBWATCH_TEST_EMPTY", "");
        assert_eq!(env_opt("SCRUBWATCH_TEST_EMPTY"), None);
        assert_eq!(profiled_env_u32("", "SCRUBWATCH_TEST_EMPTY", 7), 7);
    }

    #[test]
    fn redacted_summary_hides_token() {
        let config = Config {
            profile: String::new(),
            api: ApiConfig {
                base_url: "https://sentry.example.com/api/0".to_string(),
                auth_token: Some("secret-token".to_string()),
                organization: Some("acme".to_string()),
                project: None,
                timeout_secs: 30,
            },
            chart: ChartConfig::default(),
        };

        let summary = config.redacted_summary().to_string();
        assert!(!summary.contains("secret-token"));
        assert!(summary.contains("\"configured\":true"));
        assert_eq!(config.profile_label(), "default");
    }

    #[test]
    fn require_token_reports_missing_key() {
        let api = ApiConfig {
            base_url: "http://localhost".to_string(),
            auth_token: None,
            organization: None,
            project: None,
            timeout_secs: 5,
        };
        let err = api.require_token().unwrap_err();
        assert!(err.to_string().contains("SCRUBWATCH_AUTH_TOKEN"));
    }
}
