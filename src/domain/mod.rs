pub mod models;
mod outcome;

pub use models::*;
pub use outcome::{OutcomeSummary, ProfileOutcome};
