use crate::domain::{ApplicationFacts, DebtRatio, Rejection, RejectionCode};
use crate::rules::traits::{EligibilityRule, RuleOutcome};

/// Age range gate.
///
/// Rejects applicants outside `[min_age, max_age]`; both bounds inclusive.
#[derive(Debug)]
pub struct AgeRule {
    id: String,
    min_age: u32,
    max_age: u32,
}

impl AgeRule {
    pub fn new(id: String, min_age: u32, max_age: u32) -> Self {
        AgeRule {
            id,
            min_age,
            max_age,
        }
    }
}

impl EligibilityRule for AgeRule {
    fn id(&self) -> &str {
        &self.id
    }

    fn evaluate(&self, facts: &ApplicationFacts, _ratio: &DebtRatio) -> RuleOutcome {
        if facts.age < self.min_age {
            return RuleOutcome::Reject(Rejection::with_limit(
                RejectionCode::AgeBelowMinimum,
                format!("age below minimum required ({} years)", self.min_age),
                facts.age.to_string(),
                self.min_age.to_string(),
            ));
        }

        if facts.age > self.max_age {
            return RuleOutcome::Reject(Rejection::with_limit(
                RejectionCode::AgeAboveMaximum,
                format!("age above maximum allowed ({} years)", self.max_age),
                facts.age.to_string(),
                self.max_age.to_string(),
            ));
        }

        RuleOutcome::Continue
    }
}
