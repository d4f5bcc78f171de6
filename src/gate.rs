//! Sample-rate gating over a free-running, wrapping timestamp
//!
//! The caller ticks the poller far more often than the sensor should be
//! read. [`RateGate`] lets a tick through only once more than `threshold`
//! counter units have elapsed since the last tick it let through.

/// Default gate threshold in timestamp units
///
/// With a microsecond timestamp this fires at most every 2 ms, keeping the
/// acquisition cadence above the 400 Hz the report consumer needs.
pub const DEFAULT_GATE_THRESHOLD: u32 = 2000;

/// Decides whether a tick should trigger an acquisition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RateGate {
    last: u32,
    threshold: u32,
}

impl Default for RateGate {
    fn default() -> Self {
        Self::new(DEFAULT_GATE_THRESHOLD)
    }
}

impl RateGate {
    /// Create a gate that fires once more than `threshold` units have elapsed
    pub const fn new(threshold: u32) -> Self {
        Self { last: 0, threshold }
    }

    /// Configured threshold
    pub const fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Timestamp of the last tick that was let through
    pub const fn last_timestamp(&self) -> u32 {
        self.last
    }

    /// Forward distance from the last gate-pass to `timestamp`
    ///
    /// Returns `None` when `timestamp` equals the stored value, which is
    /// treated as "no new tick" rather than a full counter revolution.
    #[must_use]
    pub const fn elapsed(&self, timestamp: u32) -> Option<u32> {
        if timestamp < self.last {
            // Counter wrapped since the last gate-pass
            Some((u32::MAX - self.last) + timestamp)
        } else if timestamp > self.last {
            Some(timestamp - self.last)
        } else {
            None
        }
    }

    /// Decide whether `timestamp` starts a new acquisition cycle
    ///
    /// Fires only when the elapsed distance is strictly greater than the
    /// threshold. The stored timestamp moves only when this returns `true`.
    pub fn should_acquire(&mut self, timestamp: u32) -> bool {
        match self.elapsed(timestamp) {
            Some(diff) if diff > self.threshold => {
                self.last = timestamp;
                true
            }
            _ => false,
        }
    }
}
