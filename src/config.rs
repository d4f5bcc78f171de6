//! Acquisition loop configuration

use crate::gate::DEFAULT_GATE_THRESHOLD;
use crate::sample::AccelSource;

/// Configuration for an [`Acquisition`](crate::Acquisition) context
///
/// The default is a 2000-unit gate,
/// unbounded spinning on the ring lock, and placeholder accelerometer values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollerConfig {
    /// Minimum elapsed timestamp units (exclusive) between acquisitions
    pub gate_threshold: u32,
    /// Maximum lock attempts per ring write, or `None` to spin until free
    ///
    /// When the limit is hit the sample is dropped and
    /// [`Error::LockContended`](crate::Error::LockContended) is returned.
    pub spin_limit: Option<u32>,
    /// Where accelerometer values come from
    pub accel_source: AccelSource,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            gate_threshold: DEFAULT_GATE_THRESHOLD,
            spin_limit: None,
            accel_source: AccelSource::Placeholder,
        }
    }
}

impl PollerConfig {
    /// Set the gate threshold
    #[must_use]
    pub const fn with_gate_threshold(mut self, threshold: u32) -> Self {
        self.gate_threshold = threshold;
        self
    }

    /// Bound ring-lock spinning to `attempts` tries per write
    #[must_use]
    pub const fn with_spin_limit(mut self, attempts: u32) -> Self {
        self.spin_limit = Some(attempts);
        self
    }

    /// Select the accelerometer source
    #[must_use]
    pub const fn with_accel_source(mut self, source: AccelSource) -> Self {
        self.accel_source = source;
        self
    }
}
