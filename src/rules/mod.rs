pub mod gates;
pub mod traits;

pub use gates::{AgeRule, CreditHistoryRule, CreditScoreFloorRule, DebtToIncomeRule, MaxAmountRule};
pub use traits::{EligibilityRule, RuleOutcome};

use std::sync::{Arc, OnceLock};

use crate::domain::{ApplicationFacts, CreditPolicy, DebtRatio, Verdict};
use crate::error::Result;

/// Ordered chain of eligibility gates ready for evaluation.
#[derive(Debug)]
pub struct RuleSet {
    pub rules: Vec<Arc<dyn EligibilityRule>>,
    pub policy_version: String,
}

impl RuleSet {
    /// Build the gate chain from a policy.
    ///
    /// Gate order is fixed: age, score floor, amount ceiling, debt-to-income,
    /// then the credit history split.
    pub fn from_policy(policy: &CreditPolicy) -> Self {
        let params = &policy.params;

        let rules: Vec<Arc<dyn EligibilityRule>> = vec![
            Arc::new(AgeRule::new(
                "R1_AGE".to_string(),
                params.min_age,
                params.max_age,
            )),
            Arc::new(CreditScoreFloorRule::new(
                "R2_CREDIT_SCORE".to_string(),
                params.min_credit_score,
            )),
            Arc::new(MaxAmountRule::new(
                "R3_MAX_AMOUNT".to_string(),
                params.max_amount_income_multiple,
            )),
            Arc::new(DebtToIncomeRule::new(
                "R4_DEBT_TO_INCOME".to_string(),
                params.max_income_pct,
            )),
            Arc::new(CreditHistoryRule::new(
                "R5_CREDIT_HISTORY".to_string(),
                params,
            )),
        ];

        RuleSet {
            rules,
            policy_version: policy.version.clone(),
        }
    }

    /// Gate chain for the built-in policy.
    pub fn standard() -> Self {
        RuleSet::from_policy(&CreditPolicy::standard())
    }

    /// Evaluate an application. The first terminal gate decides.
    ///
    /// Errors only when the facts cannot be evaluated at all (zero term,
    /// non-positive income or amount).
    pub fn evaluate(&self, facts: &ApplicationFacts) -> Result<Verdict> {
        facts.ensure_computable()?;
        let ratio = DebtRatio::compute(
            facts.requested_amount,
            facts.monthly_income,
            facts.term_months,
        )?;

        for rule in &self.rules {
            match rule.evaluate(facts, &ratio) {
                RuleOutcome::Continue => continue,
                RuleOutcome::Approve => return Ok(Verdict::Approved),
                RuleOutcome::Reject(reason) => return Ok(Verdict::rejected(reason)),
            }
        }

        // a chain with no terminal gate approves
        Ok(Verdict::Approved)
    }
}

/// Evaluate an application against the built-in policy.
pub fn evaluate(facts: &ApplicationFacts) -> Result<Verdict> {
    static STANDARD: OnceLock<RuleSet> = OnceLock::new();
    STANDARD.get_or_init(RuleSet::standard).evaluate(facts)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PolicyParams, RejectionCode};
    use crate::error::CreditError;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[allow(clippy::too_many_arguments)]
    fn app(
        age: u32,
        requested_amount: Decimal,
        monthly_income: Decimal,
        credit_score: u16,
        has_credit_card: bool,
        has_auto_loan: bool,
        term_months: u32,
    ) -> ApplicationFacts {
        ApplicationFacts {
            age,
            requested_amount,
            monthly_income,
            credit_score,
            has_credit_card,
            has_auto_loan,
            term_months,
        }
    }

    fn code_of(verdict: &Verdict) -> Option<RejectionCode> {
        verdict.rejection().map(|r| r.code)
    }

    #[test]
    fn test_ruleset_from_policy() {
        let ruleset = RuleSet::standard();
        let ids: Vec<&str> = ruleset.rules.iter().map(|r| r.id()).collect();

        assert_eq!(
            ids,
            vec![
                "R1_AGE",
                "R2_CREDIT_SCORE",
                "R3_MAX_AMOUNT",
                "R4_DEBT_TO_INCOME",
                "R5_CREDIT_HISTORY"
            ]
        );
        assert_eq!(ruleset.policy_version, "standard-1");
    }

    #[test]
    fn test_ideal_applicant_approved() {
        let verdict = evaluate(&app(35, dec!(100000), dec!(30000), 750, true, true, 36)).unwrap();
        assert_eq!(verdict, Verdict::Approved);
        assert!(verdict.rejection_reason().is_none());
    }

    #[test]
    fn test_minor_rejected() {
        let verdict = evaluate(&app(17, dec!(50000), dec!(20000), 700, false, false, 24)).unwrap();
        assert!(!verdict.is_approved());
        assert!(verdict.rejection_reason().unwrap().contains("minimum"));
    }

    #[test]
    fn test_senior_rejected() {
        let verdict = evaluate(&app(71, dec!(50000), dec!(20000), 700, true, false, 24)).unwrap();
        assert_eq!(code_of(&verdict), Some(RejectionCode::AgeAboveMaximum));
        assert!(verdict.rejection_reason().unwrap().contains("maximum"));
    }

    #[test]
    fn test_upper_age_boundary_inclusive() {
        let verdict = evaluate(&app(70, dec!(50000), dec!(25000), 700, true, true, 24)).unwrap();
        assert_eq!(verdict, Verdict::Approved);
    }

    #[test]
    fn test_lower_age_boundary_inclusive() {
        // no history, score 680, 30000 / 24 = 1250, 8.3% of 15000, 2x income
        let verdict = evaluate(&app(18, dec!(30000), dec!(15000), 680, false, false, 24)).unwrap();
        assert_eq!(verdict, Verdict::Approved);
    }

    #[test]
    fn test_low_score_rejected() {
        let verdict = evaluate(&app(30, dec!(50000), dec!(20000), 550, false, false, 24)).unwrap();
        assert_eq!(code_of(&verdict), Some(RejectionCode::InsufficientCreditScore));
        assert_eq!(verdict.rejection_reason(), Some("insufficient credit score"));
    }

    #[test]
    fn test_age_gate_precedes_score_gate() {
        let verdict = evaluate(&app(16, dec!(50000), dec!(20000), 400, false, false, 24)).unwrap();
        assert_eq!(code_of(&verdict), Some(RejectionCode::AgeBelowMinimum));
    }

    #[test]
    fn test_excessive_amount_rejected() {
        let verdict = evaluate(&app(30, dec!(500000), dec!(20000), 700, true, false, 24)).unwrap();
        assert_eq!(code_of(&verdict), Some(RejectionCode::AmountExceedsMaximum));
        assert!(verdict.rejection_reason().unwrap().contains("$200,000.00"));
    }

    #[test]
    fn test_high_installment_rejected() {
        let verdict = evaluate(&app(30, dec!(100000), dec!(10000), 700, true, false, 12)).unwrap();
        assert_eq!(code_of(&verdict), Some(RejectionCode::DebtToIncomeExceeded));
        assert!(verdict.rejection_reason().unwrap().contains("40%"));
    }

    #[test]
    fn test_no_history_score_rejection_precedes_ratio() {
        // ratio is 13.9%, so only the no-history score requirement can reject
        let verdict = evaluate(&app(25, dec!(50000), dec!(15000), 620, false, false, 24)).unwrap();
        assert_eq!(code_of(&verdict), Some(RejectionCode::NoHistoryScoreTooLow));
        assert!(verdict
            .rejection_reason()
            .unwrap()
            .contains("without credit history"));
    }

    #[test]
    fn test_no_history_good_score_approved() {
        let verdict = evaluate(&app(25, dec!(30000), dec!(20000), 700, false, false, 24)).unwrap();
        assert_eq!(verdict, Verdict::Approved);
    }

    #[test]
    fn test_history_fair_score() {
        let verdict = evaluate(&app(40, dec!(80000), dec!(30000), 620, true, false, 36)).unwrap();
        assert_eq!(verdict, Verdict::Approved);
    }

    #[test]
    fn test_exact_forty_percent_passes_general_cap() {
        // exactly 40% with a preferred score and history: approved
        let verdict = evaluate(&app(30, dec!(96000), dec!(20000), 700, true, false, 12)).unwrap();
        assert_eq!(verdict, Verdict::Approved);

        // the same ratio with a fair score hits the 35% cap instead
        let verdict = evaluate(&app(30, dec!(96000), dec!(20000), 620, true, false, 12)).unwrap();
        assert_eq!(code_of(&verdict), Some(RejectionCode::FairScoreIncomeExceeded));
    }

    #[test]
    fn test_idempotent() {
        let facts = app(25, dec!(50000), dec!(15000), 620, false, false, 24);
        let first = evaluate(&facts).unwrap();
        let second = evaluate(&facts).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_monotonic_in_requested_amount() {
        let profiles = [
            (700, true, false, 24),
            (620, true, true, 36),
            (700, false, false, 60),
            (680, false, false, 12),
        ];

        for (score, card, auto, term) in profiles {
            let mut was_rejected = false;
            let mut amount = dec!(1000);
            while amount <= dec!(400000) {
                let verdict =
                    evaluate(&app(40, amount, dec!(20000), score, card, auto, term)).unwrap();
                if was_rejected {
                    assert!(
                        !verdict.is_approved(),
                        "approval after rejection at amount {} for score {}",
                        amount,
                        score
                    );
                }
                was_rejected |= !verdict.is_approved();
                amount += dec!(2500);
            }
            assert!(was_rejected);
        }
    }

    #[test]
    fn test_custom_policy() {
        let policy = CreditPolicy {
            version: "strict".to_string(),
            params: PolicyParams {
                min_age: 21,
                ..PolicyParams::default()
            },
        };
        let ruleset = RuleSet::from_policy(&policy);

        let verdict = ruleset
            .evaluate(&app(20, dec!(30000), dec!(20000), 700, true, false, 24))
            .unwrap();
        assert_eq!(
            verdict.rejection_reason(),
            Some("age below minimum required (21 years)")
        );
    }

    #[test]
    fn test_empty_chain_approves() {
        let ruleset = RuleSet {
            rules: Vec::new(),
            policy_version: "empty".to_string(),
        };
        let verdict = ruleset.evaluate(&fixtures::facts()).unwrap();
        assert_eq!(verdict, Verdict::Approved);
    }

    #[test]
    fn test_zero_term_fails_fast() {
        let result = evaluate(&app(30, dec!(1000), dec!(1000), 700, true, false, 0));
        assert_eq!(result, Err(CreditError::InvalidTerm { months: 0 }));
    }

    #[test]
    fn test_largest_accepted_magnitudes() {
        let largest = dec!(9999999999999.99);

        // amount and income at the intake ceiling, longest term
        let verdict = evaluate(&app(40, largest, largest, 750, true, false, 360)).unwrap();
        assert_eq!(verdict, Verdict::Approved);

        // largest amount against the smallest income
        let verdict = evaluate(&app(40, largest, dec!(0.01), 750, true, false, 1)).unwrap();
        assert_eq!(code_of(&verdict), Some(RejectionCode::AmountExceedsMaximum));

        // smallest amount against the largest income
        let verdict = evaluate(&app(40, dec!(0.01), largest, 700, false, false, 360)).unwrap();
        assert_eq!(verdict, Verdict::Approved);
    }

    #[test]
    fn test_unrepresentable_magnitudes_error_instead_of_panicking() {
        // income ceiling beyond Decimal::MAX still reaches a verdict
        let facts = app(40, dec!(100000), Decimal::MAX, 750, false, false, 36);
        assert_eq!(evaluate(&facts).unwrap(), Verdict::Approved);

        let result = evaluate(&app(40, Decimal::MAX, dec!(1), 750, true, false, 1));
        assert_eq!(
            result,
            Err(CreditError::Overflow {
                operation: "debt ratio"
            })
        );
    }

    #[test]
    fn test_concurrent_evaluation() {
        let ruleset = RuleSet::standard();
        let facts = app(35, dec!(100000), dec!(30000), 750, true, true, 36);

        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..100 {
                        assert_eq!(ruleset.evaluate(&facts).unwrap(), Verdict::Approved);
                    }
                });
            }
        });
    }
}
