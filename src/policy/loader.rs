use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::domain::facts::{MAX_SCORE_SCALE, MIN_SCORE_SCALE};
use crate::domain::CreditPolicy;
use crate::rules::RuleSet;

/// Errors that can occur during policy loading.
#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Load a policy from a YAML file.
pub fn load_policy(path: impl AsRef<Path>) -> Result<CreditPolicy, PolicyError> {
    let content = fs::read_to_string(path)?;
    parse_policy(&content)
}

/// Parse and validate a policy from YAML text.
pub fn parse_policy(content: &str) -> Result<CreditPolicy, PolicyError> {
    let policy: CreditPolicy = serde_yaml::from_str(content)?;

    validate_policy(&policy)?;

    Ok(policy)
}

/// Validate policy thresholds.
pub fn validate_policy(policy: &CreditPolicy) -> Result<(), PolicyError> {
    if policy.version.is_empty() {
        return Err(PolicyError::Validation(
            "Policy version cannot be empty".to_string(),
        ));
    }

    let p = &policy.params;

    if p.min_age > p.max_age {
        return Err(PolicyError::Validation(format!(
            "min_age {} exceeds max_age {}",
            p.min_age, p.max_age
        )));
    }

    for (name, score) in [
        ("min_credit_score", p.min_credit_score),
        ("preferred_credit_score", p.preferred_credit_score),
        ("no_history_min_credit_score", p.no_history_min_credit_score),
    ] {
        if !(MIN_SCORE_SCALE..=MAX_SCORE_SCALE).contains(&score) {
            return Err(PolicyError::Validation(format!(
                "{} must be between {} and {}, got {}",
                name, MIN_SCORE_SCALE, MAX_SCORE_SCALE, score
            )));
        }
    }

    if p.min_credit_score > p.preferred_credit_score {
        return Err(PolicyError::Validation(format!(
            "min_credit_score {} exceeds preferred_credit_score {}",
            p.min_credit_score, p.preferred_credit_score
        )));
    }

    for (name, pct) in [
        ("max_income_pct", p.max_income_pct),
        ("fair_score_max_income_pct", p.fair_score_max_income_pct),
        ("no_history_max_income_pct", p.no_history_max_income_pct),
        ("recommended_income_pct", p.recommended_income_pct),
    ] {
        if pct <= Decimal::ZERO || pct > Decimal::ONE_HUNDRED {
            return Err(PolicyError::Validation(format!(
                "{} must be in (0, 100], got {}",
                name, pct
            )));
        }
    }

    for (name, multiple) in [
        ("max_amount_income_multiple", p.max_amount_income_multiple),
        (
            "no_history_max_amount_income_multiple",
            p.no_history_max_amount_income_multiple,
        ),
    ] {
        if multiple <= Decimal::ZERO {
            return Err(PolicyError::Validation(format!(
                "{} must be positive, got {}",
                name, multiple
            )));
        }
    }

    if p.annual_rate_pct < Decimal::ZERO || p.annual_rate_pct > Decimal::ONE_HUNDRED {
        return Err(PolicyError::Validation(format!(
            "annual_rate_pct must be in [0, 100], got {}",
            p.annual_rate_pct
        )));
    }

    Ok(())
}

/// Policy loader bound to a file path.
pub struct PolicyLoader {
    policy_path: PathBuf,
}

impl PolicyLoader {
    /// Create a new policy loader.
    pub fn new(policy_path: impl Into<PathBuf>) -> Self {
        PolicyLoader {
            policy_path: policy_path.into(),
        }
    }

    /// Load the policy and build its gate chain.
    pub fn load(&self) -> Result<(CreditPolicy, RuleSet), PolicyError> {
        let policy = self.load_policy()?;
        let ruleset = RuleSet::from_policy(&policy);

        Ok((policy, ruleset))
    }

    /// Load only the policy.
    pub fn load_policy(&self) -> Result<CreditPolicy, PolicyError> {
        let policy = load_policy(&self.policy_path)?;
        info!(
            path = %self.policy_path.display(),
            version = %policy.version,
            "Policy loaded"
        );
        Ok(policy)
    }

    /// Get the policy file path.
    pub fn policy_path(&self) -> &Path {
        &self.policy_path
    }
}
