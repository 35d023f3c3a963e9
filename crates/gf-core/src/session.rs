use crate::error::GeofenceResult;
use crate::evaluate::{evaluate, Evaluation};
use crate::fence::Geofence;
use crate::sample::LocationSample;
use gf_geo::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FenceStatus {
    NotSet,
    Inside,
    Outside,
}

impl fmt::Display for FenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::NotSet => "not set",
            Self::Inside => "inside",
            Self::Outside => "outside",
        };
        write!(f, "{}", value)
    }
}

/// Caller-owned tracking state: the active fence, the membership flag
/// carried between evaluations, and the latest sample.
///
/// Constructed once at session start and passed to whoever drives the
/// location loop. Evaluations are strictly sequential, one per
/// delivered sample, so the session needs no synchronization.
#[derive(Debug, Clone, Default)]
pub struct GeofenceSession {
    fence: Option<Geofence>,
    was_inside: bool,
    last_sample: Option<LocationSample>,
}

impl GeofenceSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a fence at the given center. Membership resets to
    /// outside; the next sample decides it fresh.
    pub fn set_fence(&mut self, latitude: f64, longitude: f64, radius_m: f64) -> GeofenceResult<()> {
        let fence = Geofence::new(Coordinate::new(latitude, longitude), radius_m)?;
        self.fence = Some(fence);
        self.was_inside = false;
        Ok(())
    }

    /// Remove the active fence. Membership resets to outside and no
    /// exit event fires, even if the last sample was inside.
    pub fn clear_fence(&mut self) {
        self.fence = None;
        self.was_inside = false;
    }

    /// Evaluate one sample against the active fence, retaining the new
    /// membership and the sample for later rendering.
    pub fn observe(&mut self, sample: LocationSample) -> Evaluation {
        let evaluation = evaluate(&sample, self.fence.as_ref(), self.was_inside);
        self.was_inside = evaluation.now_inside;
        self.last_sample = Some(sample);
        evaluation
    }

    pub fn fence(&self) -> Option<&Geofence> {
        self.fence.as_ref()
    }

    pub fn last_sample(&self) -> Option<&LocationSample> {
        self.last_sample.as_ref()
    }

    pub fn is_inside(&self) -> bool {
        self.was_inside
    }

    pub fn distance_to_center_m(&self) -> Option<f64> {
        let fence = self.fence.as_ref()?;
        let sample = self.last_sample.as_ref()?;
        Some(fence.distance_to_m(sample.coordinate()))
    }

    pub fn status(&self) -> FenceStatus {
        match (&self.fence, self.was_inside) {
            (None, _) => FenceStatus::NotSet,
            (Some(_), true) => FenceStatus::Inside,
            (Some(_), false) => FenceStatus::Outside,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::Transition;

    const CENTER_LAT: f64 = 37.7749;
    const CENTER_LON: f64 = -122.4194;

    fn session_with_fence(radius_m: f64) -> GeofenceSession {
        let mut session = GeofenceSession::new();
        session.set_fence(CENTER_LAT, CENTER_LON, radius_m).unwrap();
        session
    }

    #[test]
    fn fresh_session_has_no_fence_and_is_outside() {
        let session = GeofenceSession::new();
        assert_eq!(session.status(), FenceStatus::NotSet);
        assert!(!session.is_inside());
        assert_eq!(session.distance_to_center_m(), None);
    }

    #[test]
    fn set_fence_rejects_bad_radius() {
        let mut session = GeofenceSession::new();
        assert!(session.set_fence(CENTER_LAT, CENTER_LON, 0.0).is_err());
        assert!(session.fence().is_none());
    }

    #[test]
    fn enter_then_repeat_sample_transitions_once() {
        let mut session = session_with_fence(100.0);
        let sample = LocationSample::new(CENTER_LAT, CENTER_LON);

        let first = session.observe(sample);
        assert_eq!(first.transition, Transition::Entered);
        assert_eq!(session.status(), FenceStatus::Inside);

        let second = session.observe(sample);
        assert_eq!(second.transition, Transition::None);
        assert!(session.is_inside());
    }

    #[test]
    fn enter_then_leave_round_trip() {
        let mut session = session_with_fence(100.0);

        let inside = session.observe(LocationSample::new(CENTER_LAT, CENTER_LON));
        assert_eq!(inside.transition, Transition::Entered);

        let outside = session.observe(LocationSample::new(37.8000, CENTER_LON));
        assert_eq!(outside.transition, Transition::Exited);
        assert_eq!(session.status(), FenceStatus::Outside);
    }

    #[test]
    fn clearing_while_inside_fires_no_exit() {
        let mut session = session_with_fence(100.0);
        session.observe(LocationSample::new(CENTER_LAT, CENTER_LON));
        assert!(session.is_inside());

        session.clear_fence();
        assert_eq!(session.status(), FenceStatus::NotSet);
        assert!(!session.is_inside());

        // The next sample evaluates against no fence: still no event.
        let evaluation = session.observe(LocationSample::new(CENTER_LAT, CENTER_LON));
        assert_eq!(evaluation.transition, Transition::None);
        assert!(!evaluation.now_inside);
    }

    #[test]
    fn replacing_the_fence_resets_membership() {
        let mut session = session_with_fence(100.0);
        session.observe(LocationSample::new(CENTER_LAT, CENTER_LON));
        assert!(session.is_inside());

        session.set_fence(37.8000, CENTER_LON, 50.0).unwrap();
        assert_eq!(session.status(), FenceStatus::Outside);
    }

    #[test]
    fn distance_to_center_tracks_the_latest_sample() {
        let mut session = session_with_fence(100.0);
        session.observe(LocationSample::new(CENTER_LAT, CENTER_LON));
        let at_center = session.distance_to_center_m().unwrap();
        assert!(at_center < 0.01);

        session.observe(LocationSample::new(37.7750, CENTER_LON));
        let nearby = session.distance_to_center_m().unwrap();
        assert!(nearby > at_center);
    }
}
