mod cli;
mod commands;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use scrubwatch_core::config::{load_dotenv, Config};
use scrubwatch_scrubbing::submit::{submit_rules, HttpPiiConfigClient};

use crate::cli::{CliArgs, Command};

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    load_dotenv();
    let args = CliArgs::parse();
    let config = match args.profile.as_deref() {
        Some(profile) => Config::for_profile(profile),
        None => Config::from_env(),
    };
    config.log_summary();

    let output = match args.command {
        Command::Decode { file } => commands::decode_config(&read_input(file.as_deref())?, args.pretty)?,
        Command::Encode { file } => commands::encode_rules(&read_input(file.as_deref())?)?,
        Command::Options => commands::editor_options(args.pretty)?,
        Command::Chart { file } => {
            commands::chart(&read_input(file.as_deref())?, &config.chart, args.pretty)?
        }
        Command::Submit {
            file,
            org,
            project,
            url,
            token,
        } => {
            let rules = commands::rules_for_submit(&read_input(file.as_deref())?)?;
            let endpoint = commands::resolve_endpoint(&config.api, org, project)?;

            let mut api = config.api.clone();
            if let Some(url) = url {
                api.base_url = url;
            }
            if token.is_some() {
                api.auth_token = token;
            }
            let client = HttpPiiConfigClient::from_config(&api)
                .context("failed to create API client")?;

            info!(endpoint = %endpoint, timeout_secs = api.timeout_secs, "submitting rules");
            submit_rules(&client, &endpoint, &rules)
                .await
                .with_context(|| format!("failed to save rules to {}", endpoint))?;

            format!("saved {} rule(s) to {}", rules.len(), endpoint)
        }
        Command::Config => serde_json::to_string_pretty(&config.redacted_summary())?,
    };

    println!("{output}");
    Ok(())
}
