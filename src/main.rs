use std::fs;
use std::io::{self, Read};
use std::sync::atomic::Ordering;
use std::sync::Arc;

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::Parser;
use serde_json::Value;
use tracing::{info, info_span, warn};

use lendr::api::{ApplicationId, ApplicationRequest, BatchEntry, DecisionResponse, ErrorResponse};
use lendr::config::Config;
use lendr::domain::CreditPolicy;
use lendr::engine::Underwriter;
use lendr::observability::{init_tracing, MetricsRegistry};
use lendr::policy::PolicyLoader;

fn main() -> anyhow::Result<()> {
    // Parse configuration
    let config = Config::parse();

    // Initialize tracing
    init_tracing(&config.log_level, config.log_json);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting lendr decision engine"
    );

    let metrics = Arc::new(MetricsRegistry::new());

    // Load policy
    let policy = match config.policy_path {
        Some(ref path) => {
            let loader = PolicyLoader::new(path);
            let loaded = loader.load_policy();
            metrics.record_policy_load(loaded.is_ok());
            loaded.with_context(|| format!("failed to load policy from {}", path.display()))?
        }
        None => {
            info!("No policy path configured, using standard policy");
            CreditPolicy::standard()
        }
    };

    let underwriter = Underwriter::with_metrics(policy, Arc::clone(&metrics));
    let today = config.evaluation_date();

    // Read and decide input
    let raw = read_input(&config)?;
    let input: Value = serde_json::from_str(&raw).context("input is not valid JSON")?;

    let output = match input {
        Value::Array(items) => {
            let entries: Vec<BatchEntry> = items
                .into_iter()
                .map(|item| decide_one(&underwriter, item, today))
                .collect();
            serde_json::to_value(entries)?
        }
        single => serde_json::to_value(decide_one(&underwriter, single, today))?,
    };

    let rendered = if config.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", rendered);

    if let Some(ref path) = config.metrics_path {
        fs::write(path, metrics.to_prometheus())
            .with_context(|| format!("failed to write metrics to {}", path.display()))?;
    }

    info!(
        decided = metrics.decisions_total.load(Ordering::Relaxed),
        approved = metrics.decisions_approved.load(Ordering::Relaxed),
        rejected = metrics.decisions_rejected.load(Ordering::Relaxed),
        invalid = metrics.validation_errors.load(Ordering::Relaxed),
        policy_version = %underwriter.policy_version(),
        "Run complete"
    );

    Ok(())
}

fn read_input(config: &Config) -> anyhow::Result<String> {
    if config.reads_stdin() {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(&config.input)
            .with_context(|| format!("failed to read {}", config.input.display()))
    }
}

fn decide_one(underwriter: &Underwriter, item: Value, today: NaiveDate) -> BatchEntry {
    let request: ApplicationRequest = match serde_json::from_value(item) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Malformed application request");
            underwriter.metrics().record_validation_error();
            return BatchEntry::Error(ErrorResponse::bad_request(e.to_string()));
        }
    };

    let application_id = ApplicationId::new();
    let _span = info_span!("application", application_id = %application_id.as_str()).entered();

    let decided = request
        .to_facts(today)
        .and_then(|facts| underwriter.decide(&facts));

    match decided {
        Ok(decision) => {
            BatchEntry::Decision(DecisionResponse::new(application_id, &decision, Utc::now()))
        }
        Err(e) => {
            warn!(error = %e, code = e.code(), "Application not decided");
            underwriter.metrics().record_validation_error();
            BatchEntry::Error(ErrorResponse::from(&e))
        }
    }
}
