//! Three-generation sample accumulator
//!
//! [`SampleRing`] keeps the last three acquisitions for each of the six axes
//! behind a single [`SpinMutex`]. The acquisition path writes into it, the
//! report path reads it out as a 36-byte packet, and neither ever sees a
//! half-written generation.
//!
//! The write cursor saturates: writes fill generations 0, 1 and 2 in order,
//! after which every further write refreshes generation 2 only. Generations 0
//! and 1 stay frozen until [`SampleRing::reset_cursor`] is called.

use crate::lock::{self, AtomicTryLock, RawMutex, SpinMutex, WouldSpin};
use crate::packet::{self, PACKET_LEN};
use crate::sample::ImuSample;

/// Number of generations retained per axis
pub const GENERATIONS: usize = 3;

/// Number of logical axes
pub const AXIS_COUNT: usize = 6;

/// Highest cursor position; the cursor never wraps past it
const LAST_GENERATION: u8 = (GENERATIONS - 1) as u8;

/// Logical sensor channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// Gyroscope X
    GyroX = 0,
    /// Gyroscope Y
    GyroY = 1,
    /// Gyroscope Z
    GyroZ = 2,
    /// Accelerometer X
    AccelX = 3,
    /// Accelerometer Y
    AccelY = 4,
    /// Accelerometer Z
    AccelZ = 5,
}

impl Axis {
    /// All axes in storage order
    pub const ALL: [Self; AXIS_COUNT] = [
        Self::GyroX,
        Self::GyroY,
        Self::GyroZ,
        Self::AccelX,
        Self::AccelY,
        Self::AccelZ,
    ];

    /// Storage index of this axis
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Pick this axis out of a sample
    #[must_use]
    pub const fn value(self, sample: &ImuSample) -> i16 {
        match self {
            Self::GyroX => sample.gyro.x,
            Self::GyroY => sample.gyro.y,
            Self::GyroZ => sample.gyro.z,
            Self::AccelX => sample.accel.x,
            Self::AccelY => sample.accel.y,
            Self::AccelZ => sample.accel.z,
        }
    }
}

/// Three generations of one axis, each stored low byte first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisSampleBuffer {
    generations: [[u8; 2]; GENERATIONS],
}

impl AxisSampleBuffer {
    /// All-zero buffer
    pub const fn new() -> Self {
        Self {
            generations: [[0; 2]; GENERATIONS],
        }
    }

    /// Raw bytes of one generation (`[low, high]`)
    ///
    /// Out-of-range generations read as zero.
    #[must_use]
    pub fn bytes(&self, generation: usize) -> [u8; 2] {
        self.generations.get(generation).copied().unwrap_or_default()
    }

    /// Signed value of one generation
    #[must_use]
    pub fn value(&self, generation: usize) -> i16 {
        i16::from_le_bytes(self.bytes(generation))
    }

    fn store(&mut self, generation: usize, value: i16) {
        if let Some(slot) = self.generations.get_mut(generation) {
            *slot = value.to_le_bytes();
        }
    }
}

/// Consistent copy of the ring: six axis buffers plus the write cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RingSnapshot {
    axes: [AxisSampleBuffer; AXIS_COUNT],
    cursor: u8,
}

impl Default for RingSnapshot {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl RingSnapshot {
    /// All-zero contents, cursor at generation 0
    pub const fn zeroed() -> Self {
        Self {
            axes: [AxisSampleBuffer::new(); AXIS_COUNT],
            cursor: 0,
        }
    }

    /// Buffer for one axis
    #[must_use]
    pub const fn axis(&self, axis: Axis) -> &AxisSampleBuffer {
        &self.axes[axis.index()]
    }

    /// Generation the next write lands in (0..=2)
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor as usize
    }

    fn push(&mut self, sample: &ImuSample) {
        let generation = self.cursor();
        for axis in Axis::ALL {
            self.axes[axis.index()].store(generation, axis.value(sample));
        }
        if self.cursor < LAST_GENERATION {
            self.cursor += 1;
        }
    }
}

/// Lock-protected three-generation accumulator for all six axes
pub struct SampleRing<R = AtomicTryLock> {
    state: SpinMutex<R, RingSnapshot>,
}

impl SampleRing<AtomicTryLock> {
    /// Create a zeroed ring guarded by [`AtomicTryLock`]
    ///
    /// `const` so the ring can live in a `static`.
    pub const fn new() -> Self {
        Self::with_lock(AtomicTryLock::new())
    }
}

impl Default for SampleRing<AtomicTryLock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RawMutex> SampleRing<R> {
    /// Create a zeroed ring guarded by a caller-supplied raw lock
    pub const fn with_lock(raw: R) -> Self {
        Self {
            state: SpinMutex::const_new(raw, RingSnapshot::zeroed()),
        }
    }

    /// Store one acquisition at the cursor and advance it (saturating at 2)
    ///
    /// Spins until the lock is free.
    pub fn write(&self, sample: &ImuSample) {
        self.state.lock().push(sample);
    }

    /// Like [`write`](Self::write) but gives up after `attempts` tries
    ///
    /// # Errors
    ///
    /// Returns [`WouldSpin`] without touching the ring if the lock stayed held.
    pub fn try_write(&self, sample: &ImuSample, attempts: u32) -> Result<(), WouldSpin> {
        lock::try_lock_for(&self.state, attempts)?.push(sample);
        Ok(())
    }

    /// Serialize all three generations into `out` in report order
    ///
    /// The lock is held for the whole copy.
    pub fn read(&self, out: &mut [u8; PACKET_LEN]) {
        let state = self.state.lock();
        packet::format(&state, out);
    }

    /// Like [`read`](Self::read) but gives up after `attempts` tries
    ///
    /// # Errors
    ///
    /// Returns [`WouldSpin`] and leaves `out` untouched if the lock stayed held.
    pub fn try_read(&self, out: &mut [u8; PACKET_LEN], attempts: u32) -> Result<(), WouldSpin> {
        let state = lock::try_lock_for(&self.state, attempts)?;
        packet::format(&state, out);
        Ok(())
    }

    /// Move the cursor back to generation 0 without clearing any data
    pub fn reset_cursor(&self) {
        self.state.lock().cursor = 0;
    }

    /// Current cursor position
    pub fn cursor(&self) -> usize {
        self.state.lock().cursor()
    }

    /// Copy out the full ring state
    pub fn snapshot(&self) -> RingSnapshot {
        *self.state.lock()
    }
}
