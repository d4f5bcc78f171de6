#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod device;
pub mod gate;
pub mod interface;
pub mod lock;
pub mod packet;
pub mod poller;
pub mod registers;
pub mod ring;
pub mod sample;
pub mod sensors;

// Re-export main types
pub use config::PollerConfig;
pub use device::Lsm6dsrDriver;
pub use gate::{DEFAULT_GATE_THRESHOLD, RateGate};
pub use interface::SpiInterface;
pub use lock::{AtomicTryLock, RawMutex, SpinGuard, SpinMutex, WouldSpin};
pub use packet::{GENERATION_LEN, PACKET_LEN};
pub use poller::{Acquisition, ImuShared};
pub use ring::{Axis, AxisSampleBuffer, GENERATIONS, RingSnapshot, SampleRing};
pub use sample::{AccelData, AccelSource, GyroData, ImuSample, PLACEHOLDER_ACCEL};
pub use sensors::{
    AccelConfig, AccelFullScale, GyroConfig, GyroFullScale, GyroLpf1Bandwidth, OutputDataRate,
    SensorConfig,
};

/// Expected value of `WHO_AM_I` register
pub const WHO_AM_I_VALUE: u8 = 0x6B;

/// Driver errors
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Invalid `WHO_AM_I` register value (contains the actual value read)
    InvalidDevice(u8),
    /// The sample ring stayed locked for the whole configured spin limit
    LockContended,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
