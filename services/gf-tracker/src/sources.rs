use gf_core::{LocationSample, LocationSource};
use gf_geo::{haversine_distance_m, Coordinate};
use std::collections::VecDeque;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

#[derive(Debug)]
pub enum SourceError {
    Io(io::Error),
    Serde(serde_json::Error),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {}", err),
            Self::Serde(err) => write!(f, "sample parse error: {}", err),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<io::Error> for SourceError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// Replays recorded samples from a JSON-lines file, one object per
/// line. Drains front to back; `None` once exhausted.
pub struct ReplayLocationSource {
    samples: VecDeque<LocationSample>,
}

impl ReplayLocationSource {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader(reader: impl BufRead) -> Result<Self, SourceError> {
        let mut samples = VecDeque::new();
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            samples.push_back(serde_json::from_str::<LocationSample>(trimmed)?);
        }
        Ok(Self { samples })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl LocationSource for ReplayLocationSource {
    fn next(&mut self) -> Option<LocationSample> {
        self.samples.pop_front()
    }
}

/// Deterministic synthetic walk used when no replay file is
/// configured: heads north from the start point for one leg, then
/// turns back, ping-ponging forever. With the default fence presets
/// this crosses the boundary a few ticks into each leg.
pub struct WalkLocationSource {
    latitude: f64,
    longitude: f64,
    step_deg: f64,
    leg_ticks: u64,
    tick: u64,
}

impl WalkLocationSource {
    // 0.0001 degrees of latitude is roughly 11 meters per tick.
    const STEP_DEG: f64 = 0.0001;
    const LEG_TICKS: u64 = 20;

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            step_deg: Self::STEP_DEG,
            leg_ticks: Self::LEG_TICKS,
            tick: 0,
        }
    }

    fn heading(&self) -> f64 {
        if (self.tick / self.leg_ticks) % 2 == 0 {
            1.0
        } else {
            -1.0
        }
    }
}

impl LocationSource for WalkLocationSource {
    fn current(&mut self) -> Option<LocationSample> {
        Some(LocationSample::new(self.latitude, self.longitude))
    }

    fn next(&mut self) -> Option<LocationSample> {
        self.latitude += self.heading() * self.step_deg;
        self.tick += 1;
        Some(LocationSample::new(self.latitude, self.longitude))
    }
}

/// Minimum-displacement filter applied by the tracker loop: a fix
/// that moved less than the configured threshold since the last
/// delivered fix is not evaluated at all, mirroring the sampling
/// contract of a distance-gated position watcher.
pub struct DisplacementGate {
    min_distance_m: f64,
    last: Option<Coordinate>,
}

impl DisplacementGate {
    pub fn new(min_distance_m: f64) -> Self {
        Self {
            min_distance_m,
            last: None,
        }
    }

    pub fn admit(&mut self, sample: &LocationSample) -> bool {
        let position = sample.coordinate();
        if let Some(previous) = self.last {
            if haversine_distance_m(previous, position) < self.min_distance_m {
                return false;
            }
        }
        self.last = Some(position);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn replay_parses_json_lines() {
        let data = concat!(
            "{\"latitude\":37.7749,\"longitude\":-122.4194}\n",
            "\n",
            "{\"latitude\":37.7750,\"longitude\":-122.4194,\"accuracy_m\":5.0}\n",
        );
        let mut source = ReplayLocationSource::from_reader(Cursor::new(data)).unwrap();
        assert_eq!(source.len(), 2);

        let first = source.next().unwrap();
        assert_eq!(first.latitude, 37.7749);
        assert_eq!(first.accuracy_m, None);

        let second = source.next().unwrap();
        assert_eq!(second.accuracy_m, Some(5.0));
        assert_eq!(source.next(), None);
    }

    #[test]
    fn replay_rejects_malformed_lines() {
        let data = "{\"latitude\":37.7749}\n";
        assert!(ReplayLocationSource::from_reader(Cursor::new(data)).is_err());
    }

    #[test]
    fn walk_turns_back_after_one_leg() {
        let mut walk = WalkLocationSource::new(37.7749, -122.4194);
        let start = walk.current().unwrap();

        let mut northmost = start.latitude;
        for _ in 0..WalkLocationSource::LEG_TICKS {
            northmost = walk.next().unwrap().latitude;
        }
        assert!(northmost > start.latitude);

        let mut returned = northmost;
        for _ in 0..WalkLocationSource::LEG_TICKS {
            returned = walk.next().unwrap().latitude;
        }
        assert!((returned - start.latitude).abs() < 1e-9);
    }

    #[test]
    fn gate_admits_first_and_distant_samples_only() {
        let mut gate = DisplacementGate::new(10.0);
        let origin = LocationSample::new(37.7749, -122.4194);
        assert!(gate.admit(&origin));

        // Roughly one meter north: below the threshold.
        let nearby = LocationSample::new(37.77491, -122.4194);
        assert!(!gate.admit(&nearby));

        // Roughly 110 meters north: admitted, and becomes the new anchor.
        let far = LocationSample::new(37.7759, -122.4194);
        assert!(gate.admit(&far));
        assert!(!gate.admit(&far));
    }
}
