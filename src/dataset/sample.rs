/// The two plotted series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Iss,
    User,
}

impl ObjectKind {
    /// Label used for grouping, coloring and the legend.
    pub fn label(&self) -> &'static str {
        match self {
            ObjectKind::Iss => "ISS",
            ObjectKind::User => "User!",
        }
    }

    /// Relative display weight of the plotted marker.
    pub fn marker_size(&self) -> u32 {
        match self {
            ObjectKind::Iss => 200,
            ObjectKind::User => 20,
        }
    }
}

/// One row of the merged animation table.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationSample {
    pub object: ObjectKind,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub size: u32,
    /// Minute-resolution `HH:MM` animation-frame key.
    pub time: String,
}

impl LocationSample {
    pub fn new(object: ObjectKind, latitude_deg: f64, longitude_deg: f64, time: String) -> Self {
        Self {
            object,
            latitude_deg,
            longitude_deg,
            size: object.marker_size(),
            time,
        }
    }
}
