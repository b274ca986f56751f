//! Save collaborator trait and the submit entry point.

use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::codec;
use crate::error::Result;
use crate::schema::Rule;

/// Settings resource that owns a PII config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Organization { org: String },
    Project { org: String, project: String },
}

impl Endpoint {
    pub fn organization(org: impl Into<String>) -> Self {
        Endpoint::Organization { org: org.into() }
    }

    pub fn project(org: impl Into<String>, project: impl Into<String>) -> Self {
        Endpoint::Project {
            org: org.into(),
            project: project.into(),
        }
    }

    /// API path relative to the API base URL.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Organization { org } => format!("/organizations/{}/", org),
            Endpoint::Project { org, project } => format!("/projects/{}/{}/", org, project),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Request body sent with `PUT`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitBody {
    #[serde(rename = "relayPiiConfig")]
    pub relay_pii_config: String,
}

/// Stores an encoded PII config on a settings resource.
#[async_trait::async_trait]
pub trait PiiConfigClient: Send + Sync {
    /// Persist the encoded config. Only success or failure is reported.
    async fn put_pii_config(&self, endpoint: &Endpoint, relay_pii_config: String) -> Result<()>;
}

/// Encode `rules` and save them through `client`.
pub async fn submit_rules(
    client: &dyn PiiConfigClient,
    endpoint: &Endpoint,
    rules: &[Rule],
) -> Result<()> {
    let encoded = codec::encode(rules);
    client.put_pii_config(endpoint, encoded).await?;
    info!(endpoint = %endpoint, rules = rules.len(), "saved PII config");
    Ok(())
}
