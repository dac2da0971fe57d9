use super::{DatasetError, LocationSample, ObjectKind};
use crate::locate::GeoPoint;
use crate::trajectory::TrajectorySample;

/// Merge the object's trajectory with the caller's fixed position into one
/// animation table.
///
/// The user series clones the trajectory's time sequence so both series carry
/// the same frame keys in the same order, one user row per trajectory sample.
/// Trajectory rows come first, then user rows, 2N rows total.
pub fn merge(
    trajectory: &[TrajectorySample],
    user: GeoPoint,
) -> Result<Vec<LocationSample>, DatasetError> {
    if trajectory.is_empty() {
        return Err(DatasetError::Empty);
    }

    let mut rows = Vec::with_capacity(trajectory.len() * 2);
    for sample in trajectory {
        rows.push(LocationSample::new(
            ObjectKind::Iss,
            sample.latitude_deg,
            sample.longitude_deg,
            sample.time.clone(),
        ));
    }
    for sample in trajectory {
        rows.push(LocationSample::new(
            ObjectKind::User,
            user.latitude_deg,
            user.longitude_deg,
            sample.time.clone(),
        ));
    }
    Ok(rows)
}
