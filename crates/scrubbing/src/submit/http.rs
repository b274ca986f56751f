//! HTTP implementation of [`PiiConfigClient`].

use std::time::Duration;

use scrubwatch_core::config::ApiConfig;
use tracing::debug;

use super::client::{Endpoint, PiiConfigClient, SubmitBody};
use crate::error::{Result, ScrubbingError};

/// Saves PII configs through the REST API with a bearer token.
#[derive(Debug, Clone)]
pub struct HttpPiiConfigClient {
    base_url: String,
    auth_token: Option<String>,
    http: reqwest::Client,
}

impl HttpPiiConfigClient {
    /// Create a client. A trailing `/` on `base_url` is ignored.
    pub fn new(base_url: &str, auth_token: Option<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token,
            http,
        })
    }

    /// Build from the `api` config section. Requires an auth token.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let token = config.require_token()?.to_string();
        Self::new(
            &config.base_url,
            Some(token),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn url_for(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

#[async_trait::async_trait]
impl PiiConfigClient for HttpPiiConfigClient {
    async fn put_pii_config(&self, endpoint: &Endpoint, relay_pii_config: String) -> Result<()> {
        let url = self.url_for(endpoint);
        debug!(url = %url, "PUT PII config");

        let mut request = self.http.put(&url).json(&SubmitBody { relay_pii_config });
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let resp = request.send().await?;
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ScrubbingError::Api { status, body });
        }

        Ok(())
    }
}
