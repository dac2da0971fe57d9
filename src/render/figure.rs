use serde::Serialize;
use serde_json::{json, Value};

use crate::dataset::{LocationSample, ObjectKind};

// Plotly area sizing: sizeref = 2 * max(size) / max_px^2, so the largest
// marker (size 200) lands at 20px.
const MARKER_SIZEREF: f64 = 1.0;
const MARKER_MIN_PX: u32 = 4;
const FRAME_DURATION_MS: u32 = 300;

/// A Plotly figure document: base traces, layout, and one animation frame per
/// distinct frame key, grouped by object label.
#[derive(Debug, Serialize)]
pub struct Figure {
    data: Vec<Trace>,
    layout: Value,
    frames: Vec<Frame>,
}

#[derive(Debug, Clone, Serialize)]
struct Trace {
    #[serde(rename = "type")]
    kind: &'static str,
    name: &'static str,
    lat: Vec<f64>,
    lon: Vec<f64>,
    text: Vec<String>,
    hoverinfo: &'static str,
    mode: &'static str,
    marker: Marker,
}

#[derive(Debug, Clone, Serialize)]
struct Marker {
    size: Vec<u32>,
    sizemode: &'static str,
    sizeref: f64,
    sizemin: u32,
}

#[derive(Debug, Serialize)]
struct Frame {
    name: String,
    data: Vec<Trace>,
}

impl Figure {
    pub fn build(samples: &[LocationSample], title: &str) -> Self {
        let times = frame_times(samples);
        let frames: Vec<Frame> = times
            .iter()
            .map(|time| Frame {
                name: time.clone(),
                data: traces_at(samples, Some(time)),
            })
            .collect();
        // The initial view shows the first frame, as the animation will.
        let data = match frames.first() {
            Some(first) => first.data.clone(),
            None => traces_at(samples, None),
        };
        Figure {
            data,
            layout: layout(title, &times),
            frames,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Distinct frame keys in first-seen order, taken from the trajectory series.
fn frame_times(samples: &[LocationSample]) -> Vec<String> {
    let mut times: Vec<String> = Vec::new();
    for sample in samples.iter().filter(|s| s.object == ObjectKind::Iss) {
        if !times.contains(&sample.time) {
            times.push(sample.time.clone());
        }
    }
    times
}

fn traces_at(samples: &[LocationSample], time: Option<&str>) -> Vec<Trace> {
    [ObjectKind::Iss, ObjectKind::User]
        .into_iter()
        .map(|kind| {
            let rows: Vec<&LocationSample> = samples
                .iter()
                .filter(|s| s.object == kind && time.map_or(true, |t| s.time == t))
                .collect();
            trace(kind, &rows)
        })
        .collect()
}

fn trace(kind: ObjectKind, rows: &[&LocationSample]) -> Trace {
    Trace {
        kind: "scattergeo",
        name: kind.label(),
        lat: rows.iter().map(|s| s.latitude_deg).collect(),
        lon: rows.iter().map(|s| s.longitude_deg).collect(),
        text: rows
            .iter()
            .map(|s| format!("{} ({:.2}°, {:.2}°)", s.time, s.latitude_deg, s.longitude_deg))
            .collect(),
        hoverinfo: "text+name",
        mode: "markers",
        marker: Marker {
            size: rows.iter().map(|s| s.size).collect(),
            sizemode: "area",
            sizeref: MARKER_SIZEREF,
            sizemin: MARKER_MIN_PX,
        },
    }
}

fn layout(title: &str, times: &[String]) -> Value {
    let steps: Vec<Value> = times
        .iter()
        .map(|time| {
            json!({
                "label": time,
                "method": "animate",
                "args": [[time], {"frame": {"duration": 0, "redraw": true}, "mode": "immediate"}],
            })
        })
        .collect();
    json!({
        "title": {"text": title},
        "geo": {
            "projection": {"type": "orthographic"},
            "showland": true,
            "showcoastlines": true,
            "showcountries": true,
        },
        "updatemenus": [{
            "type": "buttons",
            "showactive": false,
            "x": 0.1,
            "y": 0.05,
            "buttons": [
                {
                    "label": "Play",
                    "method": "animate",
                    "args": [Value::Null, {
                        "frame": {"duration": FRAME_DURATION_MS, "redraw": true},
                        "fromcurrent": true,
                        "transition": {"duration": 0},
                    }],
                },
                {
                    "label": "Pause",
                    "method": "animate",
                    "args": [[Value::Null], {
                        "frame": {"duration": 0, "redraw": true},
                        "mode": "immediate",
                    }],
                },
            ],
        }],
        "sliders": [{
            "active": 0,
            "x": 0.2,
            "y": 0.02,
            "len": 0.7,
            "currentvalue": {"prefix": "Time "},
            "steps": steps,
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::merge;
    use crate::locate::GeoPoint;
    use crate::trajectory::TrajectorySample;

    fn merged_fixture() -> Vec<LocationSample> {
        let trajectory: Vec<TrajectorySample> = [
            ("12:00", 10.0, 20.0),
            ("12:15", 11.5, 24.0),
            ("12:30", 13.0, 28.5),
        ]
        .into_iter()
        .map(|(time, latitude_deg, longitude_deg)| TrajectorySample {
            latitude_deg,
            longitude_deg,
            time: time.to_string(),
        })
        .collect();
        let user = GeoPoint {
            latitude_deg: 40.0,
            longitude_deg: -75.0,
        };
        merge(&trajectory, user).unwrap()
    }

    #[test]
    fn one_frame_per_distinct_time() {
        let figure = Figure::build(&merged_fixture(), "test");
        assert_eq!(figure.frame_count(), 3);
        assert_eq!(figure.frames[0].name, "12:00");
        assert_eq!(figure.frames[2].name, "12:30");
    }

    #[test]
    fn frames_pair_the_object_with_the_user() {
        let figure = Figure::build(&merged_fixture(), "test");
        for frame in &figure.frames {
            assert_eq!(frame.data.len(), 2);
            assert_eq!(frame.data[0].name, "ISS");
            assert_eq!(frame.data[1].name, "User!");
            assert_eq!(frame.data[1].lat, [40.0]);
            assert_eq!(frame.data[1].lon, [-75.0]);
        }
        assert_eq!(figure.frames[1].data[0].lat, [11.5]);
    }

    #[test]
    fn marker_sizes_come_from_the_samples() {
        let figure = Figure::build(&merged_fixture(), "test");
        assert_eq!(figure.data[0].marker.size, [200]);
        assert_eq!(figure.data[1].marker.size, [20]);
    }

    #[test]
    fn layout_uses_an_orthographic_projection_and_a_slider() {
        let figure = Figure::build(&merged_fixture(), "a title");
        let value = serde_json::to_value(&figure).unwrap();
        assert_eq!(
            value["layout"]["geo"]["projection"]["type"],
            "orthographic"
        );
        assert_eq!(value["layout"]["title"]["text"], "a title");
        assert_eq!(
            value["layout"]["sliders"][0]["steps"]
                .as_array()
                .unwrap()
                .len(),
            3
        );
        assert_eq!(
            value["layout"]["sliders"][0]["steps"][1]["label"],
            "12:15"
        );
    }
}
