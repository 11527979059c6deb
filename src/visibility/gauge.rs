/// A meter with members at four distinct visibility levels. Scope tags are
/// fixed at definition time; each narrower level is readable and writable
/// from strictly fewer places than the one before it.
#[derive(Debug, Clone)]
pub struct Gauge {
    /// Visible to any crate that depends on this one.
    pub reading: i64,
    /// Visible anywhere inside this crate.
    pub(crate) unit: String,
    /// Visible only inside the `visibility` module tree.
    pub(super) calibration: f64,
    /// Visible only to this module.
    enabled: bool,
}

impl Default for Gauge {
    fn default() -> Self {
        Self {
            reading: 0,
            unit: "celsius".to_string(),
            calibration: 3.14,
            enabled: true,
        }
    }
}

impl Gauge {
    pub fn describe(&self) -> String {
        format!("gauge reading {}", self.reading)
    }

    pub(crate) fn unit_label(&self) -> &str {
        &self.unit
    }

    pub(super) fn calibration_factor(&self) -> f64 {
        self.calibration
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Public path to state no outside caller can reach directly.
    pub fn summary(&self) -> String {
        format!(
            "gauge reading {} ({}), calibration {}, enabled: {}",
            self.reading,
            self.unit_label(),
            self.calibration_factor(),
            self.is_enabled()
        )
    }
}

/// A capability with a base implementation that variants may extend.
pub trait Announce {
    /// Output lines announcing this device, in print order.
    fn announce(&self) -> Vec<String>;
}

impl Announce for Gauge {
    fn announce(&self) -> Vec<String> {
        vec![format!("gauge online at reading {}", self.reading)]
    }
}

/// A [`Gauge`] with an alarm layered on top. Its announcement invokes the
/// base gauge's announcement first, then appends its own line, so the base
/// output always precedes the alarm's.
#[derive(Debug, Clone, Default)]
pub struct AlarmedGauge {
    pub gauge: Gauge,
}

impl Announce for AlarmedGauge {
    fn announce(&self) -> Vec<String> {
        let mut lines = self.gauge.announce();
        lines.push("alarm armed over base gauge".to_string());
        lines
    }
}

/// Fully public contrast type: the type, its field, and its method all cross
/// the crate boundary.
#[derive(Debug, Clone, Default)]
pub struct Beacon {
    pub signal: i64,
}

impl Beacon {
    pub fn emit(&self) -> String {
        format!("beacon emitting signal {}", self.signal)
    }
}

/// Crate-internal contrast type: nothing here leaves the crate.
#[derive(Debug, Clone)]
pub(crate) struct Relay {
    pub(crate) channel: String,
}

impl Relay {
    pub(crate) fn forward(&self) -> String {
        format!("relay forwarding on channel {}", self.channel)
    }
}
