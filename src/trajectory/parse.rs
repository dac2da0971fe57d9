use serde_json::Value;

use super::{TrajectoryError, TrajectorySample};

/// Parse an SSC locations response into position samples.
///
/// The service wraps every list as a two-element `[java-class-tag, payload]`
/// array; [`payload`] unwraps one such level. Each navigation step is guarded
/// and reports the offending path, so a schema change surfaces as a named
/// error instead of a panic.
pub(crate) fn parse_response(body: &str) -> Result<Vec<TrajectorySample>, TrajectoryError> {
    let document: Value = serde_json::from_str(body)?;

    let result = field(&document, "", "Result")?;
    let data = payload(field(result, "Result", "Data")?, "Result.Data")?;
    // Zero entries means the service had nothing for this object and window.
    let entry = array(data, "Result.Data[1]")?
        .first()
        .ok_or(TrajectoryError::NoSamples)?;

    let coordinates = payload(
        field(entry, "Result.Data[1][0]", "Coordinates")?,
        "Result.Data[1][0].Coordinates",
    )?;
    let coordinate = array(coordinates, "Result.Data[1][0].Coordinates[1]")?
        .first()
        .ok_or_else(|| TrajectoryError::schema("Result.Data[1][0].Coordinates[1][0]"))?;
    let base = "Result.Data[1][0].Coordinates[1][0]";

    let latitudes = floats(
        payload(field(coordinate, base, "Latitude")?, &format!("{base}.Latitude"))?,
        &format!("{base}.Latitude[1]"),
    )?;
    let longitudes = floats(
        payload(field(coordinate, base, "Longitude")?, &format!("{base}.Longitude"))?,
        &format!("{base}.Longitude[1]"),
    )?;

    let time_entries = array(
        payload(
            field(entry, "Result.Data[1][0]", "Time")?,
            "Result.Data[1][0].Time",
        )?,
        "Result.Data[1][0].Time[1]",
    )?;
    let mut times = Vec::with_capacity(time_entries.len());
    for (index, pair) in time_entries.iter().enumerate() {
        let timestamp = pair.get(1).and_then(Value::as_str).ok_or_else(|| {
            TrajectoryError::schema(format!("Result.Data[1][0].Time[1][{index}]"))
        })?;
        times.push(frame_key(timestamp)?);
    }

    if latitudes.len() != longitudes.len() || latitudes.len() != times.len() {
        return Err(TrajectoryError::LengthMismatch {
            latitudes: latitudes.len(),
            longitudes: longitudes.len(),
            times: times.len(),
        });
    }
    if times.is_empty() {
        return Err(TrajectoryError::NoSamples);
    }

    Ok(latitudes
        .into_iter()
        .zip(longitudes)
        .zip(times)
        .map(|((latitude_deg, longitude_deg), time)| TrajectorySample {
            latitude_deg,
            longitude_deg,
            time,
        })
        .collect())
}

/// Truncate an ISO-like timestamp to its `HH:MM` animation-frame key.
fn frame_key(timestamp: &str) -> Result<String, TrajectoryError> {
    timestamp
        .get(11..16)
        .map(str::to_string)
        .ok_or_else(|| TrajectoryError::Timestamp(timestamp.to_string()))
}

fn field<'a>(value: &'a Value, parent: &str, key: &str) -> Result<&'a Value, TrajectoryError> {
    value.get(key).ok_or_else(|| {
        if parent.is_empty() {
            TrajectoryError::schema(key)
        } else {
            TrajectoryError::schema(format!("{parent}.{key}"))
        }
    })
}

fn payload<'a>(value: &'a Value, path: &str) -> Result<&'a Value, TrajectoryError> {
    value
        .get(1)
        .ok_or_else(|| TrajectoryError::schema(format!("{path}[1]")))
}

fn array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>, TrajectoryError> {
    value
        .as_array()
        .ok_or_else(|| TrajectoryError::schema(path.to_string()))
}

fn floats(value: &Value, path: &str) -> Result<Vec<f64>, TrajectoryError> {
    array(value, path)?
        .iter()
        .enumerate()
        .map(|(index, v)| {
            v.as_f64()
                .ok_or_else(|| TrajectoryError::schema(format!("{path}[{index}]")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ssc_body(latitudes: &[f64], longitudes: &[f64], times: &[&str]) -> String {
        let time_pairs: Vec<Value> = times.iter().map(|t| json!(["Date", t])).collect();
        json!({
            "Result": {
                "StatusCode": ["int", 200],
                "Data": ["java.util.ArrayList", [{
                    "Id": "iss",
                    "Coordinates": ["java.util.ArrayList", [{
                        "CoordinateSystem": ["CoordinateSystem", "GSE"],
                        "Latitude": ["array", latitudes],
                        "Longitude": ["array", longitudes],
                    }]],
                    "Time": ["java.util.ArrayList", time_pairs],
                }]],
            }
        })
        .to_string()
    }

    #[test]
    fn parses_samples_with_minute_frame_keys() {
        let body = ssc_body(
            &[51.2, 48.7, 44.1],
            &[-0.1, 5.4, 11.0],
            &[
                "2024-05-04T12:00:00.000Z",
                "2024-05-04T12:15:00.000Z",
                "2024-05-04T12:30:00.000Z",
            ],
        );
        let samples = parse_response(&body).unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].latitude_deg, 51.2);
        assert_eq!(samples[0].longitude_deg, -0.1);
        assert_eq!(samples[0].time, "12:00");
        assert_eq!(samples[2].time, "12:30");
    }

    #[test]
    fn empty_data_list_is_a_data_availability_error() {
        let body = json!({
            "Result": { "Data": ["java.util.ArrayList", []] }
        })
        .to_string();
        assert!(matches!(
            parse_response(&body),
            Err(TrajectoryError::NoSamples)
        ));
    }

    #[test]
    fn zero_length_arrays_are_a_data_availability_error() {
        let body = ssc_body(&[], &[], &[]);
        assert!(matches!(
            parse_response(&body),
            Err(TrajectoryError::NoSamples)
        ));
    }

    #[test]
    fn missing_coordinates_is_a_schema_error() {
        let body = ssc_body(&[51.2], &[-0.1], &["2024-05-04T12:00:00.000Z"]);
        let mut document: Value = serde_json::from_str(&body).unwrap();
        document["Result"]["Data"][1][0]
            .as_object_mut()
            .unwrap()
            .remove("Coordinates");
        let err = parse_response(&document.to_string()).unwrap_err();
        assert!(
            matches!(err, TrajectoryError::Schema { ref path } if path.contains("Coordinates"))
        );
    }

    #[test]
    fn mismatched_array_lengths_fail_outright() {
        let body = ssc_body(
            &[51.2, 48.7, 44.1],
            &[-0.1, 5.4],
            &[
                "2024-05-04T12:00:00.000Z",
                "2024-05-04T12:15:00.000Z",
                "2024-05-04T12:30:00.000Z",
            ],
        );
        assert!(matches!(
            parse_response(&body),
            Err(TrajectoryError::LengthMismatch {
                latitudes: 3,
                longitudes: 2,
                times: 3,
            })
        ));
    }

    #[test]
    fn short_timestamp_is_rejected() {
        let body = ssc_body(&[51.2], &[-0.1], &["12:00"]);
        assert!(matches!(
            parse_response(&body),
            Err(TrajectoryError::Timestamp(_))
        ));
    }

    #[test]
    fn non_json_body_is_a_parse_error() {
        assert!(matches!(
            parse_response("<html>service outage</html>"),
            Err(TrajectoryError::Json(_))
        ));
    }
}
