use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when facts fall outside the engine's input domain.
///
/// In-domain inputs never produce one of these: a verdict is always reached.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CreditError {
    #[error("invalid term: {months} months (must be at least 1)")]
    InvalidTerm { months: u32 },

    #[error("monthly income must be positive, got {income}")]
    NonPositiveIncome { income: Decimal },

    #[error("requested amount must be positive, got {amount}")]
    NonPositiveAmount { amount: Decimal },

    #[error("invalid {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("arithmetic overflow computing {operation}")]
    Overflow { operation: &'static str },
}

impl CreditError {
    /// Shorthand for a field validation failure.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        CreditError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Stable machine-readable code for error responses.
    pub fn code(&self) -> &'static str {
        match self {
            CreditError::InvalidTerm { .. } => "INVALID_TERM",
            CreditError::NonPositiveIncome { .. } => "NON_POSITIVE_INCOME",
            CreditError::NonPositiveAmount { .. } => "NON_POSITIVE_AMOUNT",
            CreditError::Validation { .. } => "VALIDATION_ERROR",
            CreditError::Overflow { .. } => "ARITHMETIC_OVERFLOW",
        }
    }
}

pub type Result<T> = std::result::Result<T, CreditError>;
