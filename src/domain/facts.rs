use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{CreditError, Result};

/// Lowest credit score the bureau scale produces.
pub const MIN_SCORE_SCALE: u16 = 300;

/// Highest credit score the bureau scale produces.
pub const MAX_SCORE_SCALE: u16 = 850;

/// Longest term a loan may be quoted for.
pub const MAX_TERM_MONTHS: u32 = 360;

/// Exclusive upper bound on money amounts: 13 integer digits.
pub const MONEY_CEILING: Decimal = dec!(10000000000000);

/// Decision-relevant facts about one credit application.
///
/// Built per evaluation by the intake layer; the engine never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationFacts {
    /// Applicant age in whole years
    pub age: u32,

    /// Principal requested
    pub requested_amount: Decimal,

    /// Declared monthly income
    pub monthly_income: Decimal,

    /// Bureau score on the 300-850 scale
    pub credit_score: u16,

    /// Applicant currently holds a credit card
    pub has_credit_card: bool,

    /// Applicant currently holds an auto loan
    pub has_auto_loan: bool,

    /// Requested term in months
    pub term_months: u32,
}

impl ApplicationFacts {
    /// Whether the applicant has any credit history.
    ///
    /// A credit card or an auto loan counts as history.
    #[inline]
    pub fn has_credit_history(&self) -> bool {
        self.has_credit_card || self.has_auto_loan
    }

    /// Check the invariants the arithmetic in the engine relies on.
    ///
    /// Score and age ranges are left to intake; these are the checks whose
    /// violation would make a division meaningless.
    pub fn ensure_computable(&self) -> Result<()> {
        if self.term_months == 0 {
            return Err(CreditError::InvalidTerm {
                months: self.term_months,
            });
        }
        if self.monthly_income <= Decimal::ZERO {
            return Err(CreditError::NonPositiveIncome {
                income: self.monthly_income,
            });
        }
        if self.requested_amount <= Decimal::ZERO {
            return Err(CreditError::NonPositiveAmount {
                amount: self.requested_amount,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts() -> ApplicationFacts {
        ApplicationFacts {
            age: 35,
            requested_amount: dec!(100000),
            monthly_income: dec!(30000),
            credit_score: 750,
            has_credit_card: false,
            has_auto_loan: false,
            term_months: 36,
        }
    }

    #[test]
    fn test_credit_history_flags() {
        let mut f = facts();
        assert!(!f.has_credit_history());

        f.has_auto_loan = true;
        assert!(f.has_credit_history());

        f.has_auto_loan = false;
        f.has_credit_card = true;
        assert!(f.has_credit_history());
    }

    #[test]
    fn test_ensure_computable() {
        assert!(facts().ensure_computable().is_ok());

        let f = ApplicationFacts {
            term_months: 0,
            ..facts()
        };
        assert_eq!(
            f.ensure_computable(),
            Err(CreditError::InvalidTerm { months: 0 })
        );

        let f = ApplicationFacts {
            monthly_income: Decimal::ZERO,
            ..facts()
        };
        assert!(matches!(
            f.ensure_computable(),
            Err(CreditError::NonPositiveIncome { .. })
        ));

        let f = ApplicationFacts {
            requested_amount: dec!(-1),
            ..facts()
        };
        assert!(matches!(
            f.ensure_computable(),
            Err(CreditError::NonPositiveAmount { .. })
        ));
    }
}
