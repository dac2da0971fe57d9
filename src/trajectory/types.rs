use chrono::{DateTime, Duration, Utc};

/// Request parameters for the SSC locations endpoint.
#[derive(Debug, Clone)]
pub struct SscConfig {
    pub base_url: String,
    pub object_id: String,
    pub api_key: String,
}

/// One position sample for the tracked object. `time` is the minute-resolution
/// `HH:MM` animation-frame key, not a full timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectorySample {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub time: String,
}

/// Closed time range queried against the trajectory service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl QueryWindow {
    pub fn lookback(end: DateTime<Utc>, minutes: i64) -> Self {
        Self {
            start: end - Duration::minutes(minutes),
            end,
        }
    }

    /// `{start},{end}` path segment in the compact UTC form the SSC expects.
    pub fn path_segment(&self) -> String {
        format!("{},{}", compact_utc(&self.start), compact_utc(&self.end))
    }
}

fn compact_utc(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y%m%dT%H%M%SZ").to_string()
}
