pub mod advisor;
pub mod amortization;
pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod observability;
pub mod policy;
pub mod rules;

pub use advisor::{suggest, Recommendation, Suggestion};
pub use amortization::{compute_installment, AmortizationQuote};
pub use config::Config;
pub use domain::{ApplicationFacts, CreditPolicy, Rejection, RejectionCode, Verdict};
pub use engine::{CreditDecision, Underwriter};
pub use error::CreditError;
pub use rules::{evaluate, EligibilityRule, RuleSet};
