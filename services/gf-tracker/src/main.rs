mod notify;
mod radius;
mod sources;

use gf_config::TrackerConfig;
use gf_core::{GeofenceSession, LocationSample, LocationSource, Notifier, Transition};
use gf_observability::{init, log_startup, ObservabilityConfig};
use sources::{DisplacementGate, ReplayLocationSource, WalkLocationSource};
use std::io;
use std::time::Duration;

// Start point of the built-in demo walk when no fence center is
// configured.
const DEMO_LAT: f64 = 37.7749;
const DEMO_LON: f64 = -122.4194;

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = TrackerConfig::from_env("gf-tracker");
    let obs_config = ObservabilityConfig {
        service_name: config.service_name.clone(),
        environment: config.environment.to_string(),
        log_level: config.log_level.clone(),
        metrics_addr: config.metrics_addr.clone(),
    };
    let handle = init(&obs_config);
    log_startup(&handle, &obs_config.environment);

    let mut session = GeofenceSession::new();
    let (fence_lat, fence_lon) = config.fence_center.unwrap_or((DEMO_LAT, DEMO_LON));
    let selector = radius::from_config(&config);
    match selector.select_radius_m(&config.radius_presets_m) {
        Some(radius_m) => match session.set_fence(fence_lat, fence_lon, radius_m) {
            Ok(()) => tracing::info!(
                latitude = fence_lat,
                longitude = fence_lon,
                radius_m,
                "geofence set"
            ),
            Err(err) => tracing::warn!(error = %err, "could not set geofence"),
        },
        None => tracing::warn!("no radius selected; tracking without a geofence"),
    }

    let mut source: Box<dyn LocationSource> = match config.replay_path.as_deref() {
        Some(path) => {
            let replay = ReplayLocationSource::from_path(path).map_err(io::Error::other)?;
            if replay.is_empty() {
                tracing::warn!(path = %path, "replay file contains no samples");
            } else {
                tracing::info!(path = %path, samples = replay.len(), "replaying recorded samples");
            }
            Box::new(replay)
        }
        None => {
            tracing::info!("no replay file configured; using the demo walk");
            Box::new(WalkLocationSource::new(fence_lat, fence_lon))
        }
    };
    let notifier = notify::from_config(&config);
    let mut gate = DisplacementGate::new(config.distance_interval_m);

    // One immediate fix at startup, then the periodic cadence.
    if let Some(sample) = source.current() {
        if gate.admit(&sample) {
            handle_sample(&mut session, notifier.as_ref(), sample);
        }
    }

    let mut ticker = tokio::time::interval(Duration::from_millis(config.sample_interval_ms));
    ticker.tick().await;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                tracing::info!("shutdown requested; stopping location updates");
                break;
            }
            _ = ticker.tick() => {
                match source.next() {
                    Some(sample) => {
                        if gate.admit(&sample) {
                            handle_sample(&mut session, notifier.as_ref(), sample);
                        } else {
                            tracing::trace!("fix below displacement threshold, skipped");
                        }
                    }
                    None => {
                        tracing::info!("location source drained; stopping");
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}

fn handle_sample(session: &mut GeofenceSession, notifier: &dyn Notifier, sample: LocationSample) {
    gf_observability::record_sample();
    let evaluation = session.observe(sample);
    tracing::debug!(
        latitude = sample.latitude,
        longitude = sample.longitude,
        accuracy_m = sample.accuracy_m,
        status = %session.status(),
        distance_m = evaluation.distance_m,
        "location sample evaluated"
    );

    match evaluation.transition {
        Transition::Entered => {
            gf_observability::record_transition("entered");
            notifier.notify_entry("Entered Geofence", "You have entered the geofenced area!");
            notify::alert("You have entered the geofenced area!");
        }
        Transition::Exited => {
            gf_observability::record_transition("exited");
            notifier.notify_exit("Exited Geofence", "You have left the geofenced area!");
            notify::alert("You have left the geofenced area!");
        }
        Transition::None => {}
    }
}
