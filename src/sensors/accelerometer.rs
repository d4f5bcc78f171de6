//! Accelerometer configuration types

use super::OutputDataRate;

/// Accelerometer full-scale range
///
/// Discriminants are the `CTRL1_XL.FS_XL` field encoding, which is not
/// monotonic in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelFullScale {
    /// ±2g range
    G2 = 0b00,
    /// ±16g range
    G16 = 0b01,
    /// ±4g range
    G4 = 0b10,
    /// ±8g range
    G8 = 0b11,
}

impl AccelFullScale {
    /// Get the maximum value in g
    #[must_use]
    pub const fn max_value(self) -> u8 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }
}

/// Accelerometer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelConfig {
    /// Output data rate
    pub odr: OutputDataRate,
    /// Full-scale range
    pub full_scale: AccelFullScale,
    /// Output from the second low-pass filter stage
    pub lpf2_enable: bool,
    /// Enable the slope / high-pass filter path (`CTRL8_XL.HP_SLOPE_XL_EN`)
    pub hp_slope_enable: bool,
}

impl Default for AccelConfig {
    fn default() -> Self {
        Self {
            odr: OutputDataRate::Hz1660,
            full_scale: AccelFullScale::G8,
            lpf2_enable: true,
            hp_slope_enable: true,
        }
    }
}
