use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::facts::{MAX_SCORE_SCALE, MAX_TERM_MONTHS, MIN_SCORE_SCALE, MONEY_CEILING};
use crate::domain::{format_amount, ApplicationFacts};
use crate::error::{CreditError, Result};

const MAX_NAME_LEN: usize = 100;
const MAX_PHONE_LEN: usize = 20;
const MONEY_DECIMALS: u32 = 2;

/// Applicant contact details. Carried through for the caller; the engine
/// does not read them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A credit application as submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationRequest {
    /// Contact details (optional)
    #[serde(default)]
    pub applicant: Option<ApplicantRequest>,

    /// Date of birth, used to derive age
    pub birth_date: NaiveDate,

    /// Principal requested (string or number)
    pub requested_amount: Decimal,

    /// Declared monthly income (string or number)
    pub monthly_income: Decimal,

    pub credit_score: u16,

    #[serde(default)]
    pub has_credit_card: bool,

    #[serde(default)]
    pub has_auto_loan: bool,

    pub term_months: u32,

    /// Branch the application was filed at (optional)
    #[serde(default)]
    pub branch_id: Option<u64>,
}

impl ApplicationRequest {
    /// Validate the request and derive the facts the engine evaluates.
    ///
    /// `today` anchors the age computation.
    pub fn to_facts(&self, today: NaiveDate) -> Result<ApplicationFacts> {
        if let Some(applicant) = &self.applicant {
            validate_applicant(applicant)?;
        }

        validate_money("requested_amount", self.requested_amount)?;
        validate_money("monthly_income", self.monthly_income)?;

        if !(MIN_SCORE_SCALE..=MAX_SCORE_SCALE).contains(&self.credit_score) {
            return Err(CreditError::validation(
                "credit_score",
                format!(
                    "must be between {} and {}, got {}",
                    MIN_SCORE_SCALE, MAX_SCORE_SCALE, self.credit_score
                ),
            ));
        }

        if !(1..=MAX_TERM_MONTHS).contains(&self.term_months) {
            return Err(CreditError::validation(
                "term_months",
                format!(
                    "must be between 1 and {}, got {}",
                    MAX_TERM_MONTHS, self.term_months
                ),
            ));
        }

        if self.branch_id == Some(0) {
            return Err(CreditError::validation("branch_id", "must be positive"));
        }

        Ok(ApplicationFacts {
            age: age_on(self.birth_date, today)?,
            requested_amount: self.requested_amount,
            monthly_income: self.monthly_income,
            credit_score: self.credit_score,
            has_credit_card: self.has_credit_card,
            has_auto_loan: self.has_auto_loan,
            term_months: self.term_months,
        })
    }
}

/// Whole years between a birth date and `today`.
///
/// One year is subtracted while this year's birthday is still ahead.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> Result<u32> {
    if birth_date > today {
        return Err(CreditError::validation(
            "birth_date",
            format!("{} is in the future", birth_date),
        ));
    }

    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }

    // birth_date <= today keeps this non-negative
    Ok(age as u32)
}

fn validate_money(field: &'static str, amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(CreditError::validation(field, "must be greater than zero"));
    }
    if amount >= MONEY_CEILING {
        return Err(CreditError::validation(
            field,
            format!("must be less than {}", format_amount(MONEY_CEILING)),
        ));
    }
    if amount.normalize().scale() > MONEY_DECIMALS {
        return Err(CreditError::validation(
            field,
            format!("at most {} decimal places allowed", MONEY_DECIMALS),
        ));
    }
    Ok(())
}

fn validate_applicant(applicant: &ApplicantRequest) -> Result<()> {
    for (field, value) in [
        ("first_name", &applicant.first_name),
        ("last_name", &applicant.last_name),
    ] {
        let len = value.trim().chars().count();
        if len == 0 || len > MAX_NAME_LEN {
            return Err(CreditError::validation(
                field,
                format!("must be 1-{} characters", MAX_NAME_LEN),
            ));
        }
    }

    let email_ok = applicant
        .email
        .split_once('@')
        .map(|(local, domain)| !local.is_empty() && domain.contains('.'))
        .unwrap_or(false);
    if !email_ok {
        return Err(CreditError::validation("email", "not a valid address"));
    }

    if let Some(phone) = &applicant.phone {
        if phone.chars().count() > MAX_PHONE_LEN {
            return Err(CreditError::validation(
                "phone",
                format!("at most {} characters", MAX_PHONE_LEN),
            ));
        }
    }

    Ok(())
}
