use rust_decimal::Decimal;

use crate::domain::{ApplicationFacts, DebtRatio, Rejection, RejectionCode};
use crate::rules::traits::{EligibilityRule, RuleOutcome};

/// General debt-to-income cap on the naive installment.
#[derive(Debug)]
pub struct DebtToIncomeRule {
    id: String,
    max_pct: Decimal,
}

impl DebtToIncomeRule {
    pub fn new(id: String, max_pct: Decimal) -> Self {
        DebtToIncomeRule { id, max_pct }
    }
}

impl EligibilityRule for DebtToIncomeRule {
    fn id(&self) -> &str {
        &self.id
    }

    fn evaluate(&self, _facts: &ApplicationFacts, ratio: &DebtRatio) -> RuleOutcome {
        if ratio.exceeds(self.max_pct) {
            let pct = ratio.display_percentage();
            return RuleOutcome::Reject(Rejection::with_limit(
                RejectionCode::DebtToIncomeExceeded,
                format!(
                    "monthly installment exceeds {}% of income ({}%); consider a longer term or a smaller amount",
                    self.max_pct.normalize(),
                    pct
                ),
                pct,
                self.max_pct.normalize().to_string(),
            ));
        }

        RuleOutcome::Continue
    }
}
