use crate::sample::LocationSample;

/// Upstream provider of location fixes.
///
/// Implementations must only ever deliver resolvable samples; a
/// missing permission or lost GPS fix is handled by the source itself
/// (degrade to `None`), never surfaced to the evaluator.
pub trait LocationSource {
    /// One immediate fix, used once at session start.
    fn current(&mut self) -> Option<LocationSample> {
        self.next()
    }

    /// The next periodic fix, or `None` when the source has nothing
    /// new to deliver.
    fn next(&mut self) -> Option<LocationSample>;
}

/// Downstream alert sink. Fire-and-forget: delivery failures are the
/// implementation's problem and are never reported back.
///
/// The session driver dispatches exactly one notification per
/// transition, entry or exit, followed by one user-facing alert.
pub trait Notifier {
    fn notify_entry(&self, title: &str, body: &str);
    fn notify_exit(&self, title: &str, body: &str);
}

/// How a radius is chosen from the configured presets. One interface
/// with an inline-list flavor and a prompt-dialog flavor, so nothing
/// downstream branches on the host platform.
pub trait RadiusSelector {
    fn select_radius_m(&self, presets_m: &[f64]) -> Option<f64>;
}
