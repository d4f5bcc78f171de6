//! Acquisition and read-out contexts
//!
//! State is split by owner:
//!
//! - [`ImuShared`] holds what both execution contexts touch: the enable flag
//!   and the [`SampleRing`]. It is `Sync` and is normally placed in a
//!   `static` or behind an `Arc`.
//! - [`Acquisition`] holds what only the polling context touches: the sensor
//!   driver (and therefore the bus) and the [`RateGate`].
//!
//! # Example
//!
//! ```ignore
//! static IMU: ImuShared = ImuShared::new();
//!
//! // Polling context
//! let driver = Lsm6dsrDriver::new(SpiInterface::new(spi_device));
//! let mut acquisition = Acquisition::new(driver, &IMU, PollerConfig::default());
//! loop {
//!     acquisition.on_tick(timer.now_micros())?;
//! }
//!
//! // Report context
//! let mut imu_block = [0u8; PACKET_LEN];
//! IMU.read_output_packet(&mut imu_block);
//! ```

use portable_atomic::{AtomicBool, Ordering};

use crate::config::PollerConfig;
use crate::device::Lsm6dsrDriver;
use crate::gate::RateGate;
use crate::lock::{AtomicTryLock, RawMutex, WouldSpin};
use crate::packet::PACKET_LEN;
use crate::ring::SampleRing;
use crate::sample::ImuSample;
use crate::Error;

/// State shared between the acquisition and report contexts
pub struct ImuShared<R = AtomicTryLock> {
    enabled: AtomicBool,
    ring: SampleRing<R>,
}

impl ImuShared<AtomicTryLock> {
    /// Disabled, with a zeroed ring
    pub const fn new() -> Self {
        Self::with_lock(AtomicTryLock::new())
    }
}

impl Default for ImuShared<AtomicTryLock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> ImuShared<R> {
    /// Turn acquisition on or off
    ///
    /// While disabled, ticks perform no bus I/O and leave the ring alone.
    pub fn set_enabled(&self, enabled: bool) {
        let previous = self.enabled.swap(enabled, Ordering::AcqRel);
        if previous != enabled {
            #[cfg(feature = "defmt")]
            defmt::debug!("IMU acquisition enabled: {=bool}", enabled);
        }
    }

    /// Whether acquisition is on
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// The underlying ring
    pub fn ring(&self) -> &SampleRing<R> {
        &self.ring
    }
}

impl<R: RawMutex> ImuShared<R> {
    /// Disabled, with a zeroed ring guarded by a caller-supplied raw lock
    pub const fn with_lock(raw: R) -> Self {
        Self {
            enabled: AtomicBool::new(false),
            ring: SampleRing::with_lock(raw),
        }
    }

    /// Copy the last three generations into `out` in report order
    ///
    /// Spins until the ring is free.
    pub fn read_output_packet(&self, out: &mut [u8; PACKET_LEN]) {
        self.ring.read(out);
    }

    /// Like [`read_output_packet`](Self::read_output_packet) but gives up
    /// after `attempts` lock attempts
    ///
    /// # Errors
    ///
    /// Returns [`WouldSpin`] and leaves `out` untouched if the ring stayed
    /// locked.
    pub fn try_read_output_packet(
        &self,
        out: &mut [u8; PACKET_LEN],
        attempts: u32,
    ) -> Result<(), WouldSpin> {
        self.ring.try_read(out, attempts).inspect_err(|_spun| {
            #[cfg(feature = "defmt")]
            defmt::warn!("IMU ring busy after {=u32} attempts, read-out skipped", _spun.attempts);
        })
    }

    /// Restart generation indexing at 0, e.g. on a new host connection
    ///
    /// Existing data is kept and is overwritten by subsequent acquisitions.
    pub fn reset_cursor(&self) {
        self.ring.reset_cursor();

        #[cfg(feature = "defmt")]
        defmt::debug!("IMU ring cursor reset");
    }
}

/// Polling-context state: the sensor driver and the rate gate
pub struct Acquisition<'a, I, R = AtomicTryLock> {
    driver: Lsm6dsrDriver<I>,
    gate: RateGate,
    shared: &'a ImuShared<R>,
    config: PollerConfig,
}

impl<'a, I, R> Acquisition<'a, I, R> {
    /// Create the polling context
    ///
    /// The driver should already be configured with
    /// [`Lsm6dsrDriver::init`].
    pub fn new(driver: Lsm6dsrDriver<I>, shared: &'a ImuShared<R>, config: PollerConfig) -> Self {
        Self {
            driver,
            gate: RateGate::new(config.gate_threshold),
            shared,
            config,
        }
    }

    /// Rate gate state
    pub fn gate(&self) -> &RateGate {
        &self.gate
    }

    /// Shared state this context writes into
    pub fn shared(&self) -> &'a ImuShared<R> {
        self.shared
    }

    /// Mutable access to the driver, e.g. for reconfiguration
    pub fn driver_mut(&mut self) -> &mut Lsm6dsrDriver<I> {
        &mut self.driver
    }

    /// Consume the context and return the driver
    pub fn release(self) -> Lsm6dsrDriver<I> {
        self.driver
    }

    /// Whether this tick should read the sensor
    ///
    /// The gate is only consulted while enabled, so ticks seen while disabled
    /// do not move its reference timestamp.
    fn tick_due(&mut self, timestamp: u32) -> bool {
        if !self.shared.is_enabled() {
            return false;
        }
        let due = self.gate.should_acquire(timestamp);

        #[cfg(feature = "defmt")]
        if due {
            defmt::trace!("IMU gate pass at {=u32}", timestamp);
        }

        due
    }

    fn store<E>(&self, burst: &[u8; crate::registers::OUTPUT_BURST_LEN]) -> Result<(), Error<E>>
    where
        R: RawMutex,
    {
        let sample = ImuSample::from_burst(burst, self.config.accel_source);
        let ring = self.shared.ring();
        match self.config.spin_limit {
            None => {
                ring.write(&sample);
                Ok(())
            }
            Some(attempts) => ring.try_write(&sample, attempts).map_err(|_spun| {
                #[cfg(feature = "defmt")]
                defmt::warn!("IMU ring busy after {=u32} attempts, sample dropped", _spun.attempts);
                Error::LockContended
            }),
        }
    }
}

impl<I, R> Acquisition<'_, I, R>
where
    I: device_driver::RegisterInterface<AddressType = u8>,
    R: RawMutex,
{
    /// Drive one polling decision
    ///
    /// Returns `Ok(true)` if a sample was acquired and stored, `Ok(false)` if
    /// acquisition is disabled or the gate held the tick back.
    ///
    /// # Errors
    ///
    /// Returns a bus error if the output burst read fails (the ring is left
    /// untouched for this cycle), or [`Error::LockContended`] if a spin limit
    /// is configured and the ring stayed locked.
    pub fn on_tick(&mut self, timestamp: u32) -> Result<bool, Error<I::Error>> {
        if !self.tick_due(timestamp) {
            return Ok(false);
        }
        let burst = self.driver.read_output_burst()?;
        self.store(&burst)?;
        Ok(true)
    }
}

#[cfg(feature = "async")]
impl<I, R> Acquisition<'_, I, R>
where
    I: device_driver::AsyncRegisterInterface<AddressType = u8>,
    R: RawMutex,
{
    /// Drive one polling decision (async bus)
    ///
    /// Same contract as [`on_tick`](Self::on_tick).
    ///
    /// # Errors
    ///
    /// Returns a bus error or [`Error::LockContended`].
    pub async fn on_tick_async(&mut self, timestamp: u32) -> Result<bool, Error<I::Error>> {
        if !self.tick_due(timestamp) {
            return Ok(false);
        }
        let burst = self.driver.read_output_burst_async().await?;
        self.store(&burst)?;
        Ok(true)
    }
}
