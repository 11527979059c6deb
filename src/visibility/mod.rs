//! Visibility scoping demonstrations.
//!
//! [`Gauge`] carries fields and methods at four scopes, each strictly
//! narrower than the last: `pub`, `pub(crate)`, `pub(super)` (this module
//! tree only), and private. Access from outside a member's scope is rejected
//! at compile time, never at runtime.
//!
//! A `pub(super)` field is unreachable from outside the module tree:
//!
//! ```compile_fail
//! let gauge = scope_tour::visibility::Gauge::default();
//! let _ = gauge.calibration;
//! ```
//!
//! So is a private field:
//!
//! ```compile_fail
//! let gauge = scope_tour::visibility::Gauge::default();
//! let _ = gauge.enabled;
//! ```
//!
//! The same holds for methods:
//!
//! ```compile_fail
//! let gauge = scope_tour::visibility::Gauge::default();
//! gauge.calibration_factor();
//! ```
//!
//! And a `pub(crate)` type never crosses the crate boundary:
//!
//! ```compile_fail
//! use scope_tour::visibility::Relay;
//! ```

mod gauge;

pub use gauge::{AlarmedGauge, Announce, Beacon, Gauge};
pub(crate) use gauge::Relay;

/// Runs the visibility walkthrough and returns its output lines.
///
/// This function sits in the `visibility` module tree, so it may read the
/// `pub(super)` members that the rest of the crate cannot.
pub fn demonstrate() -> Vec<String> {
    let mut gauge = Gauge::default();
    let mut lines = Vec::new();

    lines.push(format!("public reading: {}", gauge.reading));
    lines.push(format!("crate-visible unit: {}", gauge.unit));
    lines.push(format!("module-visible calibration: {}", gauge.calibration));
    lines.push(gauge.describe());
    lines.push(gauge.summary());

    gauge.reading = 7;
    lines.push(format!("public reading after write: {}", gauge.reading));

    let alarmed = AlarmedGauge { gauge };
    lines.extend(alarmed.announce());

    let beacon = Beacon { signal: 42 };
    lines.push(beacon.emit());
    lines.push(format!("public beacon signal: {}", beacon.signal));

    let relay = Relay {
        channel: "aux".to_string(),
    };
    lines.push(relay.forward());

    lines
}
