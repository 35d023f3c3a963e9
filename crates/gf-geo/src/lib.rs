use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters. Spherical model; flattening is ignored.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A point on the globe in decimal degrees.
///
/// Latitude is expected in [-90, 90] and longitude in [-180, 180].
/// Out-of-range values are not rejected; they yield a numerically
/// meaningless but finite distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Great-circle distance in meters between two coordinates, computed
/// with the Haversine formula.
pub fn haversine_distance_m(a: Coordinate, b: Coordinate) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let delta_phi = (b.latitude - a.latitude).to_radians();
    let delta_lambda = (b.longitude - a.longitude).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}
