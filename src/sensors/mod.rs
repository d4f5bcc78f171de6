//! Sensor configuration for the LSM6DSR
//!
//! This module provides the types used to configure the two sensors in the
//! LSM6DSR during the one-time initialization sequence:
//! - Accelerometer (3-axis)
//! - Gyroscope (3-axis)
//!
//! The configuration is applied by [`Lsm6dsrDriver::init`](crate::Lsm6dsrDriver::init).

pub mod accelerometer;
pub mod gyroscope;

// Re-export main types
pub use accelerometer::{AccelConfig, AccelFullScale};
pub use gyroscope::{GyroConfig, GyroFullScale, GyroLpf1Bandwidth};

/// Output data rate shared by the accelerometer and gyroscope
///
/// The encoding is the 4-bit `ODR_XL` / `ODR_G` field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputDataRate {
    /// Sensor powered down
    PowerDown = 0,
    /// 12.5 Hz
    Hz12_5 = 1,
    /// 26 Hz
    Hz26 = 2,
    /// 52 Hz
    Hz52 = 3,
    /// 104 Hz
    Hz104 = 4,
    /// 208 Hz
    Hz208 = 5,
    /// 416 Hz
    Hz416 = 6,
    /// 833 Hz
    Hz833 = 7,
    /// 1.66 kHz
    Hz1660 = 8,
    /// 3.33 kHz
    Hz3330 = 9,
    /// 6.66 kHz
    Hz6660 = 10,
}

impl OutputDataRate {
    /// Nominal rate in Hz (0.0 when powered down)
    #[must_use]
    pub const fn hz(self) -> f32 {
        match self {
            Self::PowerDown => 0.0,
            Self::Hz12_5 => 12.5,
            Self::Hz26 => 26.0,
            Self::Hz52 => 52.0,
            Self::Hz104 => 104.0,
            Self::Hz208 => 208.0,
            Self::Hz416 => 416.0,
            Self::Hz833 => 833.0,
            Self::Hz1660 => 1660.0,
            Self::Hz3330 => 3330.0,
            Self::Hz6660 => 6660.0,
        }
    }
}

/// Complete one-time sensor configuration
///
/// The default reproduces the controller firmware's init sequence:
/// both sensors at 1.66 kHz, accelerometer at ±8 g with LPF2, gyroscope at
/// ±2000 dps with LPF1 at its narrowest bandwidth, block data update and
/// address auto-increment on, I2C disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// Accelerometer settings (`CTRL1_XL`, `CTRL8_XL`)
    pub accel: AccelConfig,
    /// Gyroscope settings (`CTRL2_G`, `CTRL4_C`, `CTRL6_C`)
    pub gyro: GyroConfig,
    /// Block data update: output registers hold until both bytes are read
    pub block_data_update: bool,
    /// Register address auto-increment for burst reads
    pub auto_increment: bool,
    /// Disable the I2C interface so the part only answers on SPI
    pub i2c_disable: bool,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            accel: AccelConfig::default(),
            gyro: GyroConfig::default(),
            block_data_update: true,
            auto_increment: true,
            i2c_disable: true,
        }
    }
}
