//! Subcommand handlers. Each takes the raw input text and returns the JSON
//! to print, so they can be exercised without a terminal.

use anyhow::{bail, Context, Result};
use serde::Serialize;

use scrubwatch_charts::{build_incident_chart, IncidentChartInput};
use scrubwatch_core::config::{ApiConfig, ChartConfig};
use scrubwatch_scrubbing::form;
use scrubwatch_scrubbing::labels::{self, SelectOption, SourceSuggestion};
use scrubwatch_scrubbing::submit::Endpoint;
use scrubwatch_scrubbing::{decode, encode, Rule};

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("failed to serialize output")
}

pub fn decode_config(input: &str, pretty: bool) -> Result<String> {
    to_json(&decode(input), pretty)
}

pub fn parse_rules(input: &str) -> Result<Vec<Rule>> {
    serde_json::from_str(input).context("input is not a JSON rule list")
}

pub fn encode_rules(input: &str) -> Result<String> {
    Ok(encode(&parse_rules(input)?))
}

#[derive(Serialize)]
struct EditorOptions {
    methods: Vec<SelectOption>,
    types: Vec<SelectOption>,
    sources: &'static [SourceSuggestion],
}

pub fn editor_options(pretty: bool) -> Result<String> {
    let options = EditorOptions {
        methods: labels::method_options(),
        types: labels::rule_type_options(),
        sources: labels::source_suggestions(),
    };
    to_json(&options, pretty)
}

pub fn chart(input: &str, config: &ChartConfig, pretty: bool) -> Result<String> {
    let input: IncidentChartInput =
        serde_json::from_str(input).context("input is not a valid incident chart description")?;
    to_json(&build_incident_chart(&input, config), pretty)
}

/// Parse and validate a rule list before it is saved.
pub fn rules_for_submit(input: &str) -> Result<Vec<Rule>> {
    let rules = parse_rules(input)?;
    for rule in &rules {
        form::validate(&rule.to_draft()).with_context(|| format!("rule {} is invalid", rule.id))?;
    }
    Ok(rules)
}

/// Project endpoint when a project is known, organization endpoint otherwise.
pub fn resolve_endpoint(
    api: &ApiConfig,
    org: Option<String>,
    project: Option<String>,
) -> Result<Endpoint> {
    let Some(org) = org.or_else(|| api.organization.clone()) else {
        bail!("no organization given (use --org or SCRUBWATCH_ORG)");
    };
    Ok(match project.or_else(|| api.project.clone()) {
        Some(project) => Endpoint::project(org, project),
        None => Endpoint::organization(org),
    })
}
