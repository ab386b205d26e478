mod age;
mod credit_history;
mod credit_score;
mod debt_to_income;
mod max_amount;

pub use age::AgeRule;
pub use credit_history::CreditHistoryRule;
pub use credit_score::CreditScoreFloorRule;
pub use debt_to_income::DebtToIncomeRule;
pub use max_amount::MaxAmountRule;
