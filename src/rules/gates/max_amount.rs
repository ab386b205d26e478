use rust_decimal::Decimal;

use crate::domain::{format_amount, ApplicationFacts, DebtRatio, Rejection, RejectionCode};
use crate::rules::traits::{EligibilityRule, RuleOutcome};

/// Caps the requested amount at a multiple of monthly income.
#[derive(Debug)]
pub struct MaxAmountRule {
    id: String,
    /// Ceiling = monthly_income * income_multiple
    income_multiple: Decimal,
}

impl MaxAmountRule {
    pub fn new(id: String, income_multiple: Decimal) -> Self {
        MaxAmountRule {
            id,
            income_multiple,
        }
    }
}

impl EligibilityRule for MaxAmountRule {
    fn id(&self) -> &str {
        &self.id
    }

    fn evaluate(&self, facts: &ApplicationFacts, _ratio: &DebtRatio) -> RuleOutcome {
        // a ceiling past Decimal::MAX cannot be exceeded
        let Some(ceiling) = facts.monthly_income.checked_mul(self.income_multiple) else {
            return RuleOutcome::Continue;
        };

        if facts.requested_amount > ceiling {
            return RuleOutcome::Reject(Rejection::with_limit(
                RejectionCode::AmountExceedsMaximum,
                format!(
                    "requested amount exceeds the maximum allowed ({}x monthly income: ${})",
                    self.income_multiple.normalize(),
                    format_amount(ceiling)
                ),
                facts.requested_amount.to_string(),
                ceiling.to_string(),
            ));
        }

        RuleOutcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::{facts, ratio_of};
    use rust_decimal_macros::dec;

    fn outcome_for(requested_amount: Decimal, monthly_income: Decimal) -> RuleOutcome {
        let rule = MaxAmountRule::new("R3_MAX_AMOUNT".to_string(), dec!(10));
        let f = ApplicationFacts {
            requested_amount,
            monthly_income,
            ..facts()
        };
        rule.evaluate(&f, &ratio_of(&f))
    }

    #[test]
    fn test_at_ceiling() {
        assert_eq!(outcome_for(dec!(200000), dec!(20000)), RuleOutcome::Continue);
    }

    #[test]
    fn test_over_ceiling() {
        match outcome_for(dec!(500000), dec!(20000)) {
            RuleOutcome::Reject(r) => {
                assert_eq!(r.code, RejectionCode::AmountExceedsMaximum);
                assert_eq!(
                    r.message,
                    "requested amount exceeds the maximum allowed (10x monthly income: $200,000.00)"
                );
                assert_eq!(r.value.as_deref(), Some("500000"));
                assert_eq!(r.limit.as_deref(), Some("200000"));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_one_cent_over() {
        assert!(outcome_for(dec!(200000.01), dec!(20000)).is_terminal());
    }

    #[test]
    fn test_unrepresentable_ceiling_passes() {
        assert_eq!(
            outcome_for(dec!(9999999999999.99), Decimal::MAX),
            RuleOutcome::Continue
        );
    }
}
