use serde::{Deserialize, Serialize};
use std::fmt;

/// Which eligibility gate rejected an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectionCode {
    /// Applicant younger than the policy minimum
    AgeBelowMinimum,
    /// Applicant older than the policy maximum
    AgeAboveMaximum,
    /// Score below the absolute floor
    InsufficientCreditScore,
    /// Amount above the income multiple ceiling
    AmountExceedsMaximum,
    /// Naive installment above the general income cap
    DebtToIncomeExceeded,
    /// History holder with a fair score above the stricter income cap
    FairScoreIncomeExceeded,
    /// No credit history and score below the no-history minimum
    NoHistoryScoreTooLow,
    /// No credit history and installment above the no-history cap
    NoHistoryIncomeExceeded,
    /// No credit history and amount above the no-history ceiling
    NoHistoryAmountExceeded,
}

impl RejectionCode {
    /// Number of distinct codes.
    pub const COUNT: usize = 9;

    /// All codes in gate order.
    pub const ALL: [RejectionCode; RejectionCode::COUNT] = [
        RejectionCode::AgeBelowMinimum,
        RejectionCode::AgeAboveMaximum,
        RejectionCode::InsufficientCreditScore,
        RejectionCode::AmountExceedsMaximum,
        RejectionCode::DebtToIncomeExceeded,
        RejectionCode::FairScoreIncomeExceeded,
        RejectionCode::NoHistoryScoreTooLow,
        RejectionCode::NoHistoryIncomeExceeded,
        RejectionCode::NoHistoryAmountExceeded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionCode::AgeBelowMinimum => "AGE_BELOW_MINIMUM",
            RejectionCode::AgeAboveMaximum => "AGE_ABOVE_MAXIMUM",
            RejectionCode::InsufficientCreditScore => "INSUFFICIENT_CREDIT_SCORE",
            RejectionCode::AmountExceedsMaximum => "AMOUNT_EXCEEDS_MAXIMUM",
            RejectionCode::DebtToIncomeExceeded => "DEBT_TO_INCOME_EXCEEDED",
            RejectionCode::FairScoreIncomeExceeded => "FAIR_SCORE_INCOME_EXCEEDED",
            RejectionCode::NoHistoryScoreTooLow => "NO_HISTORY_SCORE_TOO_LOW",
            RejectionCode::NoHistoryIncomeExceeded => "NO_HISTORY_INCOME_EXCEEDED",
            RejectionCode::NoHistoryAmountExceeded => "NO_HISTORY_AMOUNT_EXCEEDED",
        }
    }

    /// Position in gate order, used for per-code counters.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for RejectionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an application was rejected.
///
/// Provides the audit trail behind a rejection: the human-readable reason
/// plus the observed value and the limit it breached, when there is one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// The gate that rejected
    pub code: RejectionCode,

    /// Reason shown to the applicant
    pub message: String,

    /// The observed value (e.g. age, score, percentage)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// The threshold that was breached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
}

impl Rejection {
    pub fn new(code: RejectionCode, message: impl Into<String>) -> Self {
        Rejection {
            code,
            message: message.into(),
            value: None,
            limit: None,
        }
    }

    /// Create a rejection carrying the value and breached limit.
    pub fn with_limit(
        code: RejectionCode,
        message: impl Into<String>,
        value: impl Into<String>,
        limit: impl Into<String>,
    ) -> Self {
        Rejection {
            code,
            message: message.into(),
            value: Some(value.into()),
            limit: Some(limit.into()),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of one evaluation.
///
/// A rejection always carries a reason and an approval never does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    Approved,
    Rejected { reason: Rejection },
}

impl Verdict {
    pub fn rejected(reason: Rejection) -> Self {
        Verdict::Rejected { reason }
    }

    #[inline]
    pub fn is_approved(&self) -> bool {
        matches!(self, Verdict::Approved)
    }

    /// The rejection, if any.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Verdict::Approved => None,
            Verdict::Rejected { reason } => Some(reason),
        }
    }

    /// The human-readable rejection reason, if any.
    pub fn rejection_reason(&self) -> Option<&str> {
        self.rejection().map(|r| r.message.as_str())
    }

    /// Status label as stored alongside the application.
    pub fn status(&self) -> &'static str {
        match self {
            Verdict::Approved => "approved",
            Verdict::Rejected { .. } => "rejected",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Approved => write!(f, "APPROVED"),
            Verdict::Rejected { reason } => write!(f, "REJECTED ({})", reason.code),
        }
    }
}
