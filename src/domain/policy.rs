use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Youngest applicant age accepted.
pub const MIN_AGE: u32 = 18;
/// Oldest applicant age accepted.
pub const MAX_AGE: u32 = 70;
/// Absolute credit score floor.
pub const MIN_CREDIT_SCORE: u16 = 600;
/// Score at which applicants with history are approved outright.
pub const PREFERRED_CREDIT_SCORE: u16 = 650;
/// Minimum score for applicants without credit history.
pub const NO_HISTORY_MIN_CREDIT_SCORE: u16 = 650;
/// Maximum amount as a multiple of monthly income.
pub const MAX_AMOUNT_INCOME_MULTIPLE: Decimal = dec!(10);
/// Maximum amount for applicants without credit history.
pub const NO_HISTORY_MAX_AMOUNT_INCOME_MULTIPLE: Decimal = dec!(5);
/// General cap on naive installment as a percentage of income.
pub const MAX_INCOME_PCT: Decimal = dec!(40);
/// Cap for history holders with a fair score.
pub const FAIR_SCORE_MAX_INCOME_PCT: Decimal = dec!(35);
/// Cap for applicants without credit history.
pub const NO_HISTORY_MAX_INCOME_PCT: Decimal = dec!(30);
/// Percentage the advisor aims for when proposing a new term or amount.
pub const RECOMMENDED_INCOME_PCT: Decimal = dec!(35);
/// Fixed annual rate quoted on approved loans.
pub const ANNUAL_RATE_PCT: Decimal = dec!(12.0);

/// Version label of the built-in policy.
pub const STANDARD_POLICY_VERSION: &str = "standard-1";

/// Credit policy: the thresholds every gate reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditPolicy {
    /// Policy version identifier
    #[serde(rename = "policy_version")]
    pub version: String,

    /// Thresholds used by the gates
    #[serde(default)]
    pub params: PolicyParams,
}

impl CreditPolicy {
    /// The built-in rule set.
    pub fn standard() -> Self {
        CreditPolicy {
            version: STANDARD_POLICY_VERSION.to_string(),
            params: PolicyParams::default(),
        }
    }
}

impl Default for CreditPolicy {
    fn default() -> Self {
        CreditPolicy::standard()
    }
}

/// Thresholds used by the gates. Missing YAML keys take the standard value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyParams {
    pub min_age: u32,
    pub max_age: u32,
    pub min_credit_score: u16,
    pub preferred_credit_score: u16,
    pub no_history_min_credit_score: u16,
    pub max_amount_income_multiple: Decimal,
    pub no_history_max_amount_income_multiple: Decimal,
    pub max_income_pct: Decimal,
    pub fair_score_max_income_pct: Decimal,
    pub no_history_max_income_pct: Decimal,
    pub recommended_income_pct: Decimal,
    pub annual_rate_pct: Decimal,
}

impl Default for PolicyParams {
    fn default() -> Self {
        PolicyParams {
            min_age: MIN_AGE,
            max_age: MAX_AGE,
            min_credit_score: MIN_CREDIT_SCORE,
            preferred_credit_score: PREFERRED_CREDIT_SCORE,
            no_history_min_credit_score: NO_HISTORY_MIN_CREDIT_SCORE,
            max_amount_income_multiple: MAX_AMOUNT_INCOME_MULTIPLE,
            no_history_max_amount_income_multiple: NO_HISTORY_MAX_AMOUNT_INCOME_MULTIPLE,
            max_income_pct: MAX_INCOME_PCT,
            fair_score_max_income_pct: FAIR_SCORE_MAX_INCOME_PCT,
            no_history_max_income_pct: NO_HISTORY_MAX_INCOME_PCT,
            recommended_income_pct: RECOMMENDED_INCOME_PCT,
            annual_rate_pct: ANNUAL_RATE_PCT,
        }
    }
}
