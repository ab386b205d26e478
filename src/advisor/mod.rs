use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::domain::{format_amount, DebtRatio, PolicyParams};
use crate::error::{CreditError, Result};

/// One piece of advice for improving an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Suggestion {
    /// Stretch the term so the installment lands at the target ratio
    ExtendTerm { months: u64 },
    /// Shrink the amount so the installment lands at the target ratio
    ReduceAmount { amount: Decimal },
    /// Work on the credit score before reapplying
    ImproveCreditScore,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suggestion::ExtendTerm { months } => {
                write!(f, "consider extending the term to {} months", months)
            }
            Suggestion::ReduceAmount { amount } => {
                write!(f, "or reduce the amount to ${}", format_amount(*amount))
            }
            Suggestion::ImproveCreditScore => {
                write!(f, "improve your credit score for better conditions")
            }
        }
    }
}

/// Advisory output, independent of the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Naive installment (amount / term)
    pub estimated_installment: Decimal,

    /// Naive installment as a percentage of income
    pub income_percentage: Decimal,

    pub suggestions: SmallVec<[Suggestion; 3]>,
}

impl Recommendation {
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    /// Suggestions rendered as applicant-facing sentences.
    pub fn messages(&self) -> Vec<String> {
        self.suggestions.iter().map(ToString::to_string).collect()
    }
}

/// Thresholds the advisor reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisorThresholds {
    /// Ratio above which term/amount alternatives are proposed
    pub trigger_pct: Decimal,
    /// Ratio the alternatives aim for
    pub target_pct: Decimal,
    /// Score below which score improvement is suggested
    pub preferred_score: u16,
}

impl From<&PolicyParams> for AdvisorThresholds {
    fn from(params: &PolicyParams) -> Self {
        AdvisorThresholds {
            trigger_pct: params.max_income_pct,
            target_pct: params.recommended_income_pct,
            preferred_score: params.preferred_credit_score,
        }
    }
}

impl Default for AdvisorThresholds {
    fn default() -> Self {
        AdvisorThresholds::from(&PolicyParams::default())
    }
}

/// Suggest changes using the standard thresholds.
pub fn suggest(
    requested_amount: Decimal,
    monthly_income: Decimal,
    term_months: u32,
    credit_score: u16,
) -> Result<Recommendation> {
    suggest_with(
        &AdvisorThresholds::default(),
        requested_amount,
        monthly_income,
        term_months,
        credit_score,
    )
}

/// Suggest changes that would bring an application within the thresholds.
pub fn suggest_with(
    thresholds: &AdvisorThresholds,
    requested_amount: Decimal,
    monthly_income: Decimal,
    term_months: u32,
    credit_score: u16,
) -> Result<Recommendation> {
    let ratio = DebtRatio::compute(requested_amount, monthly_income, term_months)?;
    let mut suggestions = SmallVec::new();

    if ratio.exceeds(thresholds.trigger_pct) {
        let overflow = || CreditError::Overflow {
            operation: "recommendation",
        };
        let target_installment = monthly_income
            .checked_mul(thresholds.target_pct)
            .map(|v| v / Decimal::ONE_HUNDRED)
            .ok_or_else(overflow)?;

        let months = requested_amount
            .checked_div(target_installment)
            .ok_or_else(overflow)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
        let months = months.to_u64().ok_or_else(|| {
            CreditError::validation(
                "term_months",
                format!("suggested term {} out of range", months),
            )
        })?;
        suggestions.push(Suggestion::ExtendTerm { months });

        let amount = target_installment
            .checked_mul(Decimal::from(term_months))
            .ok_or_else(overflow)?;
        suggestions.push(Suggestion::ReduceAmount { amount });
    }

    if credit_score < thresholds.preferred_score {
        suggestions.push(Suggestion::ImproveCreditScore);
    }

    Ok(Recommendation {
        estimated_installment: ratio.naive_installment,
        income_percentage: ratio.income_percentage,
        suggestions,
    })
}
