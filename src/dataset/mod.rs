mod error;
mod merge;
mod sample;

pub use error::DatasetError;
pub use merge::merge;
pub use sample::{LocationSample, ObjectKind};
