pub mod error;
pub mod evaluate;
pub mod fence;
pub mod ports;
pub mod sample;
pub mod session;

pub use error::{ErrorCode, GeofenceError, GeofenceResult};
pub use evaluate::{evaluate, Evaluation, Transition};
pub use fence::Geofence;
pub use ports::{LocationSource, Notifier, RadiusSelector};
pub use sample::LocationSample;
pub use session::{FenceStatus, GeofenceSession};
