use gf_geo::Coordinate;
use serde::{Deserialize, Serialize};

/// One location fix from the upstream source. Ephemeral: callers keep
/// at most the latest sample, never a history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationSample {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy_m: Option<f64>,
}

impl LocationSample {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy_m: None,
        }
    }

    pub fn with_accuracy(latitude: f64, longitude: f64, accuracy_m: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy_m: Some(accuracy_m),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}
