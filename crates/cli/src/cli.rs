use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Data-scrubbing rule and incident chart toolkit.
///
/// Reads JSON from a file or stdin and writes JSON to stdout.
#[derive(Parser, Debug)]
#[command(name = "scrubwatch", version, about)]
pub struct CliArgs {
    /// Config profile (keys are looked up as {PROFILE}_{KEY} first);
    /// falls back to SCRUBWATCH_PROFILE
    #[arg(long)]
    pub profile: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a serialized PII config into a rule list
    Decode {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Encode a rule list into a serialized PII config
    Encode {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Print method / type dropdown options and selector suggestions
    Options,

    /// Build incident chart series from an alert incident description
    Chart {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Validate a rule list and save it to an organization or project
    Submit {
        /// Input file with a rule list (stdin when omitted)
        file: Option<PathBuf>,

        /// Organization slug (overrides SCRUBWATCH_ORG)
        #[arg(long)]
        org: Option<String>,

        /// Project slug; saves on the project instead of the organization
        #[arg(long)]
        project: Option<String>,

        /// API base URL (overrides SCRUBWATCH_API_URL)
        #[arg(long)]
        url: Option<String>,

        /// Auth token (overrides SCRUBWATCH_AUTH_TOKEN)
        #[arg(long)]
        token: Option<String>,
    },

    /// Print the effective configuration with secrets redacted
    Config,
}
