pub mod facts;
pub mod money;
pub mod policy;
pub mod ratio;
pub mod verdict;

pub use facts::ApplicationFacts;
pub use money::format_amount;
pub use policy::{CreditPolicy, PolicyParams};
pub use ratio::DebtRatio;
pub use verdict::{Rejection, RejectionCode, Verdict};
