//! Try-acquire spin lock shared by the acquisition and read-out paths
//!
//! The acquisition path runs in a latency-sensitive polling context and must
//! never park on a scheduler primitive, so exclusion is built from a single
//! non-blocking acquire attempt repeated in a spin loop. Critical sections
//! guarded by [`SpinMutex`] are a handful of byte copies.
//!
//! [`SpinMutex`] is a [`lock_api::Mutex`] over any [`RawMutex`]. Two
//! acquisition styles are offered:
//! - [`SpinMutex::lock`] spins until the lock is taken
//! - [`try_lock_for`] gives up after a fixed number of attempts
//!
//! The raw lock is a type parameter so tests can inject one that fails a
//! chosen number of times.
//!
//! # Example
//!
//! ```
//! use imu_poller::lock::{AtomicTryLock, SpinMutex};
//!
//! let counter: SpinMutex<AtomicTryLock, u32> = SpinMutex::new(0);
//! *counter.lock() += 1;
//! assert_eq!(*counter.lock(), 1);
//! ```

pub use lock_api::{GuardSend, RawMutex};

use portable_atomic::{AtomicBool, Ordering};

/// Mutual-exclusion cell acquired by spinning on a raw lock
pub type SpinMutex<R, T> = lock_api::Mutex<R, T>;

/// Scoped ownership of a [`SpinMutex`]; the lock is released on drop
pub type SpinGuard<'a, R, T> = lock_api::MutexGuard<'a, R, T>;

/// Lock-free flag backed by a compare-and-swap on an atomic boolean
#[derive(Debug, Default)]
pub struct AtomicTryLock {
    locked: AtomicBool,
}

impl AtomicTryLock {
    /// Create an unlocked flag
    pub const fn new() -> Self {
        Self {
            locked: AtomicBool::new(false),
        }
    }
}

// SAFETY: `try_lock` only succeeds on a false -> true transition of `locked`
// (Acquire), and `unlock` is the only way back to false (Release), so at most
// one owner exists at a time.
unsafe impl RawMutex for AtomicTryLock {
    #[allow(clippy::declare_interior_mutable_const)]
    const INIT: Self = Self::new();

    type GuardMarker = GuardSend;

    fn lock(&self) {
        while !self.try_lock() {
            core::hint::spin_loop();
        }
    }

    fn try_lock(&self) -> bool {
        self.locked
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    unsafe fn unlock(&self) {
        self.locked.store(false, Ordering::Release);
    }

    fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }
}

/// Bounded acquisition ran out of attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WouldSpin {
    /// Number of acquire attempts made before giving up
    pub attempts: u32,
}

/// Spin for at most `attempts` acquire attempts on `mutex`
///
/// At least one attempt is always made, so `attempts == 0` behaves like
/// [`SpinMutex::try_lock`].
///
/// # Errors
///
/// Returns [`WouldSpin`] if every attempt found the lock held.
pub fn try_lock_for<R: RawMutex, T>(
    mutex: &SpinMutex<R, T>,
    attempts: u32,
) -> Result<SpinGuard<'_, R, T>, WouldSpin> {
    let attempts = attempts.max(1);
    for _ in 0..attempts {
        if let Some(guard) = mutex.try_lock() {
            return Ok(guard);
        }
        core::hint::spin_loop();
    }
    Err(WouldSpin { attempts })
}
