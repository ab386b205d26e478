use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{CreditError, Result};

/// Debt-to-income figures derived from a request.
///
/// The installment here is the naive one: principal spread evenly over the
/// term, no interest. It is what the eligibility gates compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtRatio {
    /// requested_amount / term_months
    pub naive_installment: Decimal,

    /// naive_installment / monthly_income * 100, full precision
    pub income_percentage: Decimal,
}

impl DebtRatio {
    /// Compute the ratio for an amount, income and term.
    pub fn compute(
        requested_amount: Decimal,
        monthly_income: Decimal,
        term_months: u32,
    ) -> Result<Self> {
        if term_months == 0 {
            return Err(CreditError::InvalidTerm {
                months: term_months,
            });
        }
        if monthly_income <= Decimal::ZERO {
            return Err(CreditError::NonPositiveIncome {
                income: monthly_income,
            });
        }

        let overflow = || CreditError::Overflow {
            operation: "debt ratio",
        };
        let naive_installment = requested_amount
            .checked_div(Decimal::from(term_months))
            .ok_or_else(overflow)?;
        let income_percentage = naive_installment
            .checked_div(monthly_income)
            .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
            .ok_or_else(overflow)?;

        Ok(DebtRatio {
            naive_installment,
            income_percentage,
        })
    }

    /// Whether the percentage strictly exceeds a cap.
    #[inline]
    pub fn exceeds(&self, cap_pct: Decimal) -> bool {
        self.income_percentage > cap_pct
    }

    /// Percentage rounded to one decimal for display, e.g. "13.9".
    pub fn display_percentage(&self) -> String {
        let mut pct = self
            .income_percentage
            .round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven);
        pct.rescale(1);
        pct.to_string()
    }
}
