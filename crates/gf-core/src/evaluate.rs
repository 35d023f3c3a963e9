use crate::fence::Geofence;
use crate::sample::LocationSample;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    Entered,
    Exited,
    None,
}

/// Outcome of evaluating one sample against the active fence.
/// `distance_m` is present whenever a fence was set, so callers can
/// render distance-to-center without recomputing it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub now_inside: bool,
    pub transition: Transition,
    pub distance_m: Option<f64>,
}

impl Evaluation {
    pub fn transitioned(&self) -> bool {
        self.transition != Transition::None
    }
}

/// Decide membership for one sample and detect a transition relative
/// to the previous evaluation.
///
/// With no fence set, membership is always outside and no transition
/// fires, regardless of `was_inside`. Clearing a fence therefore
/// resets membership without an exit event.
///
/// Pure and total: there is no failure mode. Each sample produces at
/// most one transition; an identical consecutive sample produces none.
pub fn evaluate(
    sample: &LocationSample,
    fence: Option<&Geofence>,
    was_inside: bool,
) -> Evaluation {
    let Some(fence) = fence else {
        return Evaluation {
            now_inside: false,
            transition: Transition::None,
            distance_m: None,
        };
    };

    let distance_m = fence.distance_to_m(sample.coordinate());
    let now_inside = distance_m <= fence.radius_m;
    let transition = match (was_inside, now_inside) {
        (false, true) => Transition::Entered,
        (true, false) => Transition::Exited,
        _ => Transition::None,
    };

    Evaluation {
        now_inside,
        transition,
        distance_m: Some(distance_m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gf_geo::Coordinate;

    fn fence_at_sf(radius_m: f64) -> Geofence {
        Geofence::new(Coordinate::new(37.7749, -122.4194), radius_m).unwrap()
    }

    #[test]
    fn sample_at_center_is_inside() {
        let fence = fence_at_sf(100.0);
        let sample = LocationSample::new(37.7749, -122.4194);
        let evaluation = evaluate(&sample, Some(&fence), false);
        assert!(evaluation.now_inside);
        assert_eq!(evaluation.transition, Transition::Entered);
        assert!(evaluation.distance_m.unwrap() < 0.01);
    }

    #[test]
    fn entering_then_holding_fires_once() {
        let fence = fence_at_sf(100.0);
        let sample = LocationSample::new(37.7750, -122.4194);

        let first = evaluate(&sample, Some(&fence), false);
        assert_eq!(first.transition, Transition::Entered);

        let second = evaluate(&sample, Some(&fence), first.now_inside);
        assert!(second.now_inside);
        assert_eq!(second.transition, Transition::None);
    }

    #[test]
    fn leaving_fires_an_exit() {
        let fence = fence_at_sf(100.0);
        let far = LocationSample::new(37.8000, -122.4194);
        let evaluation = evaluate(&far, Some(&fence), true);
        assert!(!evaluation.now_inside);
        assert_eq!(evaluation.transition, Transition::Exited);
    }

    #[test]
    fn staying_outside_fires_nothing() {
        let fence = fence_at_sf(100.0);
        let far = LocationSample::new(37.8000, -122.4194);
        let evaluation = evaluate(&far, Some(&fence), false);
        assert!(!evaluation.now_inside);
        assert_eq!(evaluation.transition, Transition::None);
    }

    #[test]
    fn point_eleven_meters_out_of_a_ten_meter_fence() {
        let fence = fence_at_sf(10.0);
        let sample = LocationSample::new(37.7750, -122.4194);
        let evaluation = evaluate(&sample, Some(&fence), false);
        assert!(!evaluation.now_inside);
    }

    #[test]
    fn no_fence_means_outside_without_an_exit_event() {
        let sample = LocationSample::new(37.7749, -122.4194);
        let evaluation = evaluate(&sample, None, true);
        assert!(!evaluation.now_inside);
        assert_eq!(evaluation.transition, Transition::None);
        assert_eq!(evaluation.distance_m, None);
    }

    #[test]
    fn no_fence_and_previously_outside_is_a_no_op() {
        let sample = LocationSample::new(37.7749, -122.4194);
        let evaluation = evaluate(&sample, None, false);
        assert!(!evaluation.now_inside);
        assert!(!evaluation.transitioned());
    }
}
