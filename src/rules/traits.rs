use std::fmt::Debug;

use crate::domain::{ApplicationFacts, DebtRatio, Rejection};

/// What a single gate concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// Gate passed; evaluation moves to the next gate
    Continue,
    /// Gate approved the application outright
    Approve,
    /// Gate rejected the application
    Reject(Rejection),
}

impl RuleOutcome {
    /// Whether this outcome ends the chain.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RuleOutcome::Continue)
    }
}

/// Trait for eligibility gates.
///
/// Gates are evaluated in order and the first terminal outcome wins. They
/// are stateless and see only the facts of the current application plus
/// the debt ratio computed once for the whole chain.
pub trait EligibilityRule: Send + Sync + Debug {
    /// Unique identifier for this gate.
    fn id(&self) -> &str;

    /// Evaluate the gate against one application.
    fn evaluate(&self, facts: &ApplicationFacts, ratio: &DebtRatio) -> RuleOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RejectionCode;
    use crate::rules::fixtures::facts;

    #[derive(Debug)]
    struct TestRule {
        id: String,
        reject: bool,
    }

    impl EligibilityRule for TestRule {
        fn id(&self) -> &str {
            &self.id
        }

        fn evaluate(&self, _facts: &ApplicationFacts, _ratio: &DebtRatio) -> RuleOutcome {
            if self.reject {
                RuleOutcome::Reject(Rejection::new(
                    RejectionCode::InsufficientCreditScore,
                    "test",
                ))
            } else {
                RuleOutcome::Continue
            }
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule {
            id: "TEST_RULE".to_string(),
            reject: true,
        };
        let f = facts();
        let ratio =
            DebtRatio::compute(f.requested_amount, f.monthly_income, f.term_months).unwrap();

        assert_eq!(rule.id(), "TEST_RULE");
        assert!(rule.evaluate(&f, &ratio).is_terminal());
        assert!(!RuleOutcome::Continue.is_terminal());
        assert!(RuleOutcome::Approve.is_terminal());
    }
}
