//! Saving an edited rule list.
//!
//! The encoded config is handed to a [`PiiConfigClient`]; callers inject the
//! implementation (HTTP in production, an in-memory recorder in tests).

mod client;
mod http;

pub use self::client::{submit_rules, Endpoint, PiiConfigClient, SubmitBody};
pub use self::http::HttpPiiConfigClient;
