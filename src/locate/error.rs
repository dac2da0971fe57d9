use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("geolocation request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("geolocation service returned HTTP {0}")]
    Status(u16),
    #[error("geolocation response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("geolocation service returned no match for this address")]
    NoMatch,
    #[error("unparseable coordinate pair {0:?}")]
    BadCoordinates(String),
}
