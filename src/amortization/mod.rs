use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::ApplicationFacts;
use crate::error::{CreditError, Result};

/// Level monthly installment for a fixed-rate loan.
///
/// With a zero rate this is `principal / term_months`, exact and unrounded.
/// Otherwise the annuity formula is applied and the result rounded to the
/// cent, half to even.
pub fn compute_installment(
    principal: Decimal,
    term_months: u32,
    annual_rate_pct: Decimal,
) -> Result<Decimal> {
    if term_months == 0 {
        return Err(CreditError::InvalidTerm {
            months: term_months,
        });
    }

    let overflow = || CreditError::Overflow {
        operation: "installment",
    };
    let monthly_rate = annual_rate_pct / dec!(12) / Decimal::ONE_HUNDRED;

    if monthly_rate.is_zero() {
        return Ok(principal / Decimal::from(term_months));
    }

    // EMI = P * r * (1 + r)^n / ((1 + r)^n - 1)
    let r = monthly_rate;
    let base = Decimal::ONE.checked_add(r).ok_or_else(overflow)?;
    let mut compound = Decimal::ONE;
    for _ in 0..term_months {
        compound = compound.checked_mul(base).ok_or_else(overflow)?;
    }

    let numerator = principal
        .checked_mul(r)
        .and_then(|v| v.checked_mul(compound))
        .ok_or_else(overflow)?;
    let denominator = compound - Decimal::ONE;
    let installment = numerator.checked_div(denominator).ok_or_else(overflow)?;

    Ok(installment.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
}

/// Repayment terms quoted for an approved application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationQuote {
    pub monthly_installment: Decimal,

    /// Annual rate in percent, e.g. 12.0
    pub annual_rate: Decimal,

    /// monthly_installment * term_months
    pub total_payable: Decimal,

    /// total_payable - requested_amount
    pub total_interest: Decimal,
}

impl AmortizationQuote {
    /// Quote an application at the given annual rate.
    pub fn new(facts: &ApplicationFacts, annual_rate_pct: Decimal) -> Result<Self> {
        let monthly_installment =
            compute_installment(facts.requested_amount, facts.term_months, annual_rate_pct)?;
        let total_payable = monthly_installment
            .checked_mul(Decimal::from(facts.term_months))
            .ok_or(CreditError::Overflow {
                operation: "total payable",
            })?;
        let total_interest = total_payable - facts.requested_amount;

        Ok(AmortizationQuote {
            monthly_installment,
            annual_rate: annual_rate_pct,
            total_payable,
            total_interest,
        })
    }
}
