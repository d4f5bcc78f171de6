//! Raw sensor samples
//!
//! Values stay in raw 16-bit sensor counts. Nothing here scales, filters or
//! calibrates; the report consumer expects the bytes exactly as the sensor
//! produced them.

use crate::registers::OUTPUT_BURST_LEN;

/// Accelerometer data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelData {
    /// X-axis acceleration (raw)
    pub x: i16,
    /// Y-axis acceleration (raw)
    pub y: i16,
    /// Z-axis acceleration (raw)
    pub z: i16,
}

/// Gyroscope data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroData {
    /// X-axis rotation (raw)
    pub x: i16,
    /// Y-axis rotation (raw)
    pub y: i16,
    /// Z-axis rotation (raw)
    pub z: i16,
}

/// Fixed accelerometer values reported in place of hardware readings
///
/// Byte pairs (low, high): X = {188, 254}, Y = {186, 0}, Z = {25, 16}.
pub const PLACEHOLDER_ACCEL: AccelData = AccelData {
    x: i16::from_le_bytes([188, 254]),
    y: i16::from_le_bytes([186, 0]),
    z: i16::from_le_bytes([25, 16]),
};

/// Where accelerometer values come from on each acquisition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelSource {
    /// Report [`PLACEHOLDER_ACCEL`] every cycle; the accelerometer half of the
    /// burst is discarded
    #[default]
    Placeholder,
    /// Decode the accelerometer half of the output burst
    Hardware,
}

/// One 6-axis acquisition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ImuSample {
    /// Gyroscope X/Y/Z
    pub gyro: GyroData,
    /// Accelerometer X/Y/Z
    pub accel: AccelData,
}

impl ImuSample {
    /// Decode a 12-byte output burst starting at `OUTX_L_G`
    ///
    /// Layout is gyro X/Y/Z then accel X/Y/Z, each low byte first.
    #[must_use]
    pub fn from_burst(burst: &[u8; OUTPUT_BURST_LEN], accel_source: AccelSource) -> Self {
        let word = |i: usize| i16::from_le_bytes([burst[i], burst[i + 1]]);

        let gyro = GyroData {
            x: word(0),
            y: word(2),
            z: word(4),
        };

        let accel = match accel_source {
            AccelSource::Placeholder => PLACEHOLDER_ACCEL,
            AccelSource::Hardware => AccelData {
                x: word(6),
                y: word(8),
                z: word(10),
            },
        };

        Self { gyro, accel }
    }
}
