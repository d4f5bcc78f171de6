//! Gyroscope configuration types

use super::OutputDataRate;

/// Gyroscope full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroFullScale {
    /// ±125°/s range (`FS_125`)
    Dps125,
    /// ±250°/s range
    Dps250,
    /// ±500°/s range
    Dps500,
    /// ±1000°/s range
    Dps1000,
    /// ±2000°/s range
    Dps2000,
    /// ±4000°/s range (`FS_4000`)
    Dps4000,
}

impl GyroFullScale {
    /// `CTRL2_G.FS_G` field value
    ///
    /// The ±125 and ±4000 ranges are selected by their own override bits and
    /// leave `FS_G` at zero.
    #[must_use]
    pub const fn fs_bits(self) -> u8 {
        match self {
            Self::Dps125 | Self::Dps250 | Self::Dps4000 => 0b00,
            Self::Dps500 => 0b01,
            Self::Dps1000 => 0b10,
            Self::Dps2000 => 0b11,
        }
    }

    /// Get the maximum value in °/s
    #[must_use]
    pub const fn max_value(self) -> u16 {
        match self {
            Self::Dps125 => 125,
            Self::Dps250 => 250,
            Self::Dps500 => 500,
            Self::Dps1000 => 1000,
            Self::Dps2000 => 2000,
            Self::Dps4000 => 4000,
        }
    }
}

/// Gyroscope LPF1 bandwidth (`CTRL6_C.FTYPE`)
///
/// Actual cutoff depends on the configured ODR; `Narrowest` is the
/// strongest filtering the part offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroLpf1Bandwidth {
    /// FTYPE = 000
    Ftype0 = 0,
    /// FTYPE = 001
    Ftype1 = 1,
    /// FTYPE = 010
    Ftype2 = 2,
    /// FTYPE = 011
    Ftype3 = 3,
    /// FTYPE = 100
    Ftype4 = 4,
    /// FTYPE = 101
    Ftype5 = 5,
    /// FTYPE = 110
    Ftype6 = 6,
    /// FTYPE = 111
    Narrowest = 7,
}

/// Gyroscope configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroConfig {
    /// Output data rate
    pub odr: OutputDataRate,
    /// Full-scale range
    pub full_scale: GyroFullScale,
    /// LPF1 bandwidth selection
    pub lpf1_bandwidth: GyroLpf1Bandwidth,
    /// Route the output through LPF1 (`CTRL4_C.LPF1_SEL_G`)
    pub lpf1_enable: bool,
}

impl Default for GyroConfig {
    fn default() -> Self {
        Self {
            odr: OutputDataRate::Hz1660,
            full_scale: GyroFullScale::Dps2000,
            lpf1_bandwidth: GyroLpf1Bandwidth::Narrowest,
            lpf1_enable: false,
        }
    }
}
