mod error;
mod types;

pub use error::LocateError;
pub use types::GeoPoint;

use log::debug;
use serde::Deserialize;

/// Subset of the ipinfo.io response we care about. The service reports the
/// caller's coordinates as a single `"lat,lon"` string, absent when the
/// address could not be matched.
#[derive(Debug, Deserialize)]
struct GeoIpResponse {
    loc: Option<String>,
}

/// Resolve the caller's approximate location from its public IP address.
pub async fn resolve(client: &reqwest::Client, base_url: &str) -> Result<GeoPoint, LocateError> {
    debug!("resolving caller location via {}", base_url);
    let response = client
        .get(base_url)
        .header("Accept", "application/json")
        .send()
        .await?;
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(LocateError::Status(status.as_u16()));
    }
    parse_body(&body)
}

fn parse_body(body: &str) -> Result<GeoPoint, LocateError> {
    let response: GeoIpResponse = serde_json::from_str(body)?;
    let loc = response.loc.ok_or(LocateError::NoMatch)?;
    let (latitude, longitude) = loc
        .split_once(',')
        .ok_or_else(|| LocateError::BadCoordinates(loc.clone()))?;
    let latitude_deg = latitude
        .trim()
        .parse()
        .map_err(|_| LocateError::BadCoordinates(loc.clone()))?;
    let longitude_deg = longitude
        .trim()
        .parse()
        .map_err(|_| LocateError::BadCoordinates(loc.clone()))?;
    Ok(GeoPoint {
        latitude_deg,
        longitude_deg,
    })
}
