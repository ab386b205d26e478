use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use clap::Parser;

/// Decision engine configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "lendr")]
#[command(about = "Evaluate consumer credit applications against a credit policy")]
pub struct Config {
    /// Application request JSON (one object or an array); "-" reads stdin
    #[arg(long, short, default_value = "-", env = "LENDR_INPUT")]
    pub input: PathBuf,

    /// Path to policy YAML file (built-in standard policy if unset)
    #[arg(long, env = "LENDR_POLICY_PATH")]
    pub policy_path: Option<PathBuf>,

    /// Evaluation date used to derive applicant age (YYYY-MM-DD, defaults to today)
    #[arg(long, env = "LENDR_AS_OF")]
    pub as_of: Option<NaiveDate>,

    /// Pretty-print JSON output
    #[arg(long, default_value = "false", env = "LENDR_PRETTY")]
    pub pretty: bool,

    /// Write Prometheus text metrics to this file after the run
    #[arg(long, env = "LENDR_METRICS_PATH")]
    pub metrics_path: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, default_value = "false", env = "LENDR_LOG_JSON")]
    pub log_json: bool,
}

impl Config {
    /// Date that anchors age derivation.
    pub fn evaluation_date(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Whether input comes from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from("-"),
            policy_path: None,
            as_of: None,
            pretty: false,
            metrics_path: None,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}
