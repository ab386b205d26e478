use crate::domain::{ApplicationFacts, DebtRatio, Rejection, RejectionCode};
use crate::rules::traits::{EligibilityRule, RuleOutcome};

/// Absolute credit score floor, applied regardless of history.
#[derive(Debug)]
pub struct CreditScoreFloorRule {
    id: String,
    min_score: u16,
}

impl CreditScoreFloorRule {
    pub fn new(id: String, min_score: u16) -> Self {
        CreditScoreFloorRule { id, min_score }
    }
}

impl EligibilityRule for CreditScoreFloorRule {
    fn id(&self) -> &str {
        &self.id
    }

    fn evaluate(&self, facts: &ApplicationFacts, _ratio: &DebtRatio) -> RuleOutcome {
        if facts.credit_score < self.min_score {
            return RuleOutcome::Reject(Rejection::with_limit(
                RejectionCode::InsufficientCreditScore,
                "insufficient credit score",
                facts.credit_score.to_string(),
                self.min_score.to_string(),
            ));
        }

        RuleOutcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::{facts, ratio_of};

    fn outcome_for(credit_score: u16) -> RuleOutcome {
        let rule = CreditScoreFloorRule::new("R2_CREDIT_SCORE".to_string(), 600);
        let f = ApplicationFacts {
            credit_score,
            ..facts()
        };
        rule.evaluate(&f, &ratio_of(&f))
    }

    #[test]
    fn test_at_floor() {
        assert_eq!(outcome_for(600), RuleOutcome::Continue);
    }

    #[test]
    fn test_below_floor() {
        match outcome_for(599) {
            RuleOutcome::Reject(r) => {
                assert_eq!(r.code, RejectionCode::InsufficientCreditScore);
                assert_eq!(r.message, "insufficient credit score");
                assert_eq!(r.value.as_deref(), Some("599"));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }
}
