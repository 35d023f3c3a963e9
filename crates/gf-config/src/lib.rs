use serde::{Deserialize, Serialize};
use std::{env, fmt};

pub const DEFAULT_SAMPLE_INTERVAL_MS: u64 = 5_000;
pub const DEFAULT_DISTANCE_INTERVAL_M: f64 = 10.0;
pub const DEFAULT_RADIUS_PRESETS_M: [f64; 4] = [50.0, 100.0, 500.0, 1000.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Local,
    Dev,
    Prod,
}

impl Environment {
    pub fn from_env(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "dev" | "development" => Self::Dev,
            "prod" | "production" => Self::Prod,
            _ => Self::Local,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::Local => "local",
            Self::Dev => "dev",
            Self::Prod => "prod",
        };
        write!(f, "{}", value)
    }
}

/// Which radius-selection flavor the tracker uses: an inline preset
/// list or an interactive prompt dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusSelectMode {
    Inline,
    Prompt,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    pub service_name: String,
    pub environment: Environment,
    pub log_level: String,
    pub metrics_addr: Option<String>,
    /// Sampling cadence: a fixed interval between fixes and a minimum
    /// displacement below which a fix is not delivered. Both are
    /// configuration constants, never computed.
    pub sample_interval_ms: u64,
    pub distance_interval_m: f64,
    pub radius_presets_m: Vec<f64>,
    pub radius_select_mode: RadiusSelectMode,
    /// Index into `radius_presets_m` used by the inline selector.
    pub radius_preset_index: usize,
    /// Optional fence center installed at startup.
    pub fence_center: Option<(f64, f64)>,
    /// Optional JSON-lines file of samples to replay instead of the
    /// built-in synthetic walk.
    pub replay_path: Option<String>,
    pub desktop_notifications: bool,
}

impl TrackerConfig {
    pub fn from_env(default_service_name: &str) -> Self {
        let service_name = env_var("GF_SERVICE_NAME", default_service_name.to_string());
        let environment = Environment::from_env(&env_var("GF_ENV", "local".to_string()));
        let log_level = env_var("GF_LOG_LEVEL", "info".to_string());
        let metrics_addr = env::var("GF_METRICS_ADDR").ok();
        let sample_interval_ms =
            env_var_u64("GF_SAMPLE_INTERVAL_MS", DEFAULT_SAMPLE_INTERVAL_MS);
        let distance_interval_m =
            env_var_f64("GF_DISTANCE_INTERVAL_M", DEFAULT_DISTANCE_INTERVAL_M);
        let radius_presets_m = env::var("GF_RADIUS_PRESETS_M")
            .ok()
            .map(|value| parse_radius_presets(&value))
            .filter(|presets| !presets.is_empty())
            .unwrap_or_else(|| DEFAULT_RADIUS_PRESETS_M.to_vec());
        let radius_select_mode =
            parse_radius_select_mode(&env_var("GF_RADIUS_SELECT", "inline".to_string()));
        let radius_preset_index = env_var_u64("GF_RADIUS_INDEX", 1) as usize;
        let fence_center = parse_fence_center(
            env::var("GF_FENCE_LAT").ok().as_deref(),
            env::var("GF_FENCE_LON").ok().as_deref(),
        );
        let replay_path = env::var("GF_REPLAY_PATH").ok();
        let desktop_notifications = env_var_bool("GF_DESKTOP_NOTIFICATIONS", false);

        Self {
            service_name,
            environment,
            log_level,
            metrics_addr,
            sample_interval_ms,
            distance_interval_m,
            radius_presets_m,
            radius_select_mode,
            radius_preset_index,
            fence_center,
            replay_path,
            desktop_notifications,
        }
    }
}

pub fn parse_radius_presets(value: &str) -> Vec<f64> {
    value
        .split(',')
        .filter_map(|item| item.trim().parse::<f64>().ok())
        .filter(|radius| radius.is_finite() && *radius > 0.0)
        .collect()
}

pub fn parse_radius_select_mode(value: &str) -> RadiusSelectMode {
    match value.to_ascii_lowercase().as_str() {
        "prompt" | "dialog" => RadiusSelectMode::Prompt,
        _ => RadiusSelectMode::Inline,
    }
}

pub fn parse_fence_center(lat: Option<&str>, lon: Option<&str>) -> Option<(f64, f64)> {
    let lat = lat?.trim().parse::<f64>().ok()?;
    let lon = lon?.trim().parse::<f64>().ok()?;
    if lat.is_finite() && lon.is_finite() {
        Some((lat, lon))
    } else {
        None
    }
}

fn env_var(name: &str, default: String) -> String {
    env::var(name).unwrap_or(default)
}

fn env_var_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

fn env_var_f64(name: &str, default: f64) -> f64 {
    env::var(name)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

fn env_var_bool(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(value) => matches!(
            value.to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        Err(_) => default,
    }
}
