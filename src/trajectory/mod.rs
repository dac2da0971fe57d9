mod error;
mod fetch;
mod parse;
mod types;

pub use error::TrajectoryError;
pub use fetch::fetch;
pub use types::{QueryWindow, SscConfig, TrajectorySample};
