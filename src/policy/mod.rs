pub mod loader;

pub use loader::{load_policy, parse_policy, validate_policy, PolicyError, PolicyLoader};
