pub mod request;
pub mod response;

pub use request::{age_on, ApplicantRequest, ApplicationRequest};
pub use response::{ApplicationId, BatchEntry, DecisionResponse, ErrorResponse};
