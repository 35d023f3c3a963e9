use crate::error::{GeofenceError, GeofenceResult};
use gf_geo::{haversine_distance_m, Coordinate};
use serde::{Deserialize, Serialize};

/// A circular region: center coordinate plus radius in meters.
/// At most one fence exists per session; it is session-owned and not
/// persisted anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geofence {
    pub center: Coordinate,
    pub radius_m: f64,
}

impl Geofence {
    /// Any strictly positive, finite radius is accepted.
    pub fn new(center: Coordinate, radius_m: f64) -> GeofenceResult<Self> {
        if !radius_m.is_finite() || radius_m <= 0.0 {
            return Err(GeofenceError::invalid_input(format!(
                "fence radius must be a positive number of meters, got {}",
                radius_m
            )));
        }
        Ok(Self { center, radius_m })
    }

    pub fn distance_to_m(&self, point: Coordinate) -> f64 {
        haversine_distance_m(point, self.center)
    }

    /// Boundary inclusive: a point exactly at the radius counts as inside.
    pub fn contains(&self, point: Coordinate) -> bool {
        self.distance_to_m(point) <= self.radius_m
    }
}
