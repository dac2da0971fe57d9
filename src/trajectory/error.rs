use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrajectoryError {
    #[error("trajectory request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("trajectory service returned HTTP {0}")]
    Status(u16),
    #[error("trajectory response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unexpected trajectory response shape at {path}")]
    Schema { path: String },
    #[error("unparseable timestamp {0:?} in trajectory response")]
    Timestamp(String),
    #[error(
        "coordinate and time arrays disagree: {latitudes} latitudes, \
         {longitudes} longitudes, {times} times"
    )]
    LengthMismatch {
        latitudes: usize,
        longitudes: usize,
        times: usize,
    },
    #[error("no trajectory samples in the requested window")]
    NoSamples,
}

impl TrajectoryError {
    pub(crate) fn schema(path: impl Into<String>) -> Self {
        TrajectoryError::Schema { path: path.into() }
    }
}
