use rust_decimal::Decimal;

use crate::domain::{ApplicationFacts, DebtRatio, PolicyParams, Rejection, RejectionCode};
use crate::rules::traits::{EligibilityRule, RuleOutcome};

/// Final gate: splits applicants by credit history.
///
/// Holders of a credit card or auto loan with a preferred score are
/// approved; with a fair score they face a stricter income cap. Applicants
/// with no history need a higher score, a lower ratio and a smaller amount.
/// Every path ends in a terminal outcome.
#[derive(Debug)]
pub struct CreditHistoryRule {
    id: String,
    preferred_score: u16,
    fair_score_max_pct: Decimal,
    no_history_min_score: u16,
    no_history_max_pct: Decimal,
    no_history_income_multiple: Decimal,
}

impl CreditHistoryRule {
    pub fn new(id: String, params: &PolicyParams) -> Self {
        CreditHistoryRule {
            id,
            preferred_score: params.preferred_credit_score,
            fair_score_max_pct: params.fair_score_max_income_pct,
            no_history_min_score: params.no_history_min_credit_score,
            no_history_max_pct: params.no_history_max_income_pct,
            no_history_income_multiple: params.no_history_max_amount_income_multiple,
        }
    }

    fn evaluate_with_history(&self, facts: &ApplicationFacts, ratio: &DebtRatio) -> RuleOutcome {
        if facts.credit_score >= self.preferred_score {
            return RuleOutcome::Approve;
        }

        // fair score: the floor gate already guaranteed the absolute minimum
        if ratio.exceeds(self.fair_score_max_pct) {
            let pct = ratio.display_percentage();
            return RuleOutcome::Reject(Rejection::with_limit(
                RejectionCode::FairScoreIncomeExceeded,
                format!(
                    "for this credit profile the monthly installment must not exceed {}% of income ({}%)",
                    self.fair_score_max_pct.normalize(),
                    pct
                ),
                pct,
                self.fair_score_max_pct.normalize().to_string(),
            ));
        }

        RuleOutcome::Approve
    }

    fn evaluate_without_history(&self, facts: &ApplicationFacts, ratio: &DebtRatio) -> RuleOutcome {
        if facts.credit_score < self.no_history_min_score {
            return RuleOutcome::Reject(Rejection::with_limit(
                RejectionCode::NoHistoryScoreTooLow,
                format!(
                    "credit score of at least {} required for applicants without credit history",
                    self.no_history_min_score
                ),
                facts.credit_score.to_string(),
                self.no_history_min_score.to_string(),
            ));
        }

        if ratio.exceeds(self.no_history_max_pct) {
            let pct = ratio.display_percentage();
            return RuleOutcome::Reject(Rejection::with_limit(
                RejectionCode::NoHistoryIncomeExceeded,
                format!(
                    "installment must not exceed {}% of income for applicants without credit history ({}%)",
                    self.no_history_max_pct.normalize(),
                    pct
                ),
                pct,
                self.no_history_max_pct.normalize().to_string(),
            ));
        }

        let ceiling = facts
            .monthly_income
            .checked_mul(self.no_history_income_multiple);
        if let Some(ceiling) = ceiling.filter(|c| facts.requested_amount > *c) {
            return RuleOutcome::Reject(Rejection::with_limit(
                RejectionCode::NoHistoryAmountExceeded,
                format!(
                    "maximum amount is {}x monthly income for applicants without credit history",
                    self.no_history_income_multiple.normalize()
                ),
                facts.requested_amount.to_string(),
                ceiling.to_string(),
            ));
        }

        RuleOutcome::Approve
    }
}

impl EligibilityRule for CreditHistoryRule {
    fn id(&self) -> &str {
        &self.id
    }

    fn evaluate(&self, facts: &ApplicationFacts, ratio: &DebtRatio) -> RuleOutcome {
        if facts.has_credit_history() {
            self.evaluate_with_history(facts, ratio)
        } else {
            self.evaluate_without_history(facts, ratio)
        }
    }
}
