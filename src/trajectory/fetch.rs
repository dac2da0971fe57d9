use log::{debug, info};

use super::parse::parse_response;
use super::{QueryWindow, SscConfig, TrajectoryError, TrajectorySample};

/// Fetch the object's position samples over `window` from the SSC service.
pub async fn fetch(
    client: &reqwest::Client,
    config: &SscConfig,
    window: &QueryWindow,
) -> Result<Vec<TrajectorySample>, TrajectoryError> {
    let url = format!(
        "{}/locations/{}/{}/gse",
        config.base_url,
        config.object_id,
        window.path_segment()
    );
    debug!("requesting {}", url);

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .header("Content-Type", "application/json")
        .bearer_auth(&config.api_key)
        .send()
        .await?;
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(TrajectoryError::Status(status.as_u16()));
    }

    let samples = parse_response(&body)?;
    info!(
        "trajectory service returned {} samples for {}",
        samples.len(),
        config.object_id
    );
    Ok(samples)
}
