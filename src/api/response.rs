use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::advisor::Recommendation;
use crate::domain::RejectionCode;
use crate::engine::CreditDecision;
use crate::error::CreditError;

/// Unique identifier assigned to each decided application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub String);

impl ApplicationId {
    pub fn new() -> Self {
        ApplicationId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ApplicationId {
    fn default() -> Self {
        ApplicationId::new()
    }
}

/// Response for one decided application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionResponse {
    pub application_id: ApplicationId,

    /// "approved" or "rejected"
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_code: Option<RejectionCode>,

    /// Quote fields, present only for approvals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_installment: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_payable: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_interest: Option<Decimal>,

    /// Advice, omitted when there is none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,

    /// Policy version used for this decision
    pub policy_version: String,

    pub evaluated_at: DateTime<Utc>,
}

impl DecisionResponse {
    /// Build a response from a decision.
    pub fn new(
        application_id: ApplicationId,
        decision: &CreditDecision,
        evaluated_at: DateTime<Utc>,
    ) -> Self {
        let rejection = decision.verdict.rejection();
        let quote = decision.quote.as_ref();
        let recommendation = Some(&decision.recommendation)
            .filter(|r| !r.is_empty())
            .cloned();

        DecisionResponse {
            application_id,
            status: decision.verdict.status().to_string(),
            rejection_reason: rejection.map(|r| r.message.clone()),
            rejection_code: rejection.map(|r| r.code),
            monthly_installment: quote.map(|q| q.monthly_installment),
            annual_rate: quote.map(|q| q.annual_rate),
            total_payable: quote.map(|q| q.total_payable),
            total_interest: quote.map(|q| q.total_interest),
            recommendation,
            policy_version: decision.policy_version.clone(),
            evaluated_at,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == "approved"
    }
}

/// Error response for a request that could not be decided.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.into(),
            code: code.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ErrorResponse::new(message, "BAD_REQUEST")
    }
}

impl From<&CreditError> for ErrorResponse {
    fn from(err: &CreditError) -> Self {
        ErrorResponse::new(err.to_string(), err.code())
    }
}

/// Outcome for one entry in a batch: a decision or an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchEntry {
    Decision(DecisionResponse),
    Error(ErrorResponse),
}
