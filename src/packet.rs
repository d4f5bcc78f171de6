//! Fixed-layout serialization of the ring into the report packet
//!
//! The report consumer expects 36 bytes: three generations of 12 bytes each,
//! oldest first. Within a generation the axes appear in the order given by
//! [`SLOT_ORDER`], which is neither the sensor register order nor the storage
//! order and must not be changed:
//!
//! | Offset | Axis    |
//! |--------|---------|
//! | 0..2   | accel Y |
//! | 2..4   | accel X |
//! | 4..6   | accel Z |
//! | 6..8   | gyro Y  |
//! | 8..10  | gyro X  |
//! | 10..12 | gyro Z  |
//!
//! Each pair is low byte then high byte.

use crate::ring::{Axis, GENERATIONS, RingSnapshot};

/// Bytes per generation
pub const GENERATION_LEN: usize = 12;

/// Total packet length
pub const PACKET_LEN: usize = GENERATION_LEN * GENERATIONS;

/// Bytes per axis value
const SLOT_LEN: usize = 2;

/// Axis order within one generation
pub const SLOT_ORDER: [Axis; GENERATION_LEN / SLOT_LEN] = [
    Axis::AccelY,
    Axis::AccelX,
    Axis::AccelZ,
    Axis::GyroY,
    Axis::GyroX,
    Axis::GyroZ,
];

/// Byte offset of `axis` in `generation`, low byte first
///
/// Returns `None` for a generation outside the packet.
#[must_use]
pub const fn offset_of(generation: usize, axis: Axis) -> Option<usize> {
    if generation >= GENERATIONS {
        return None;
    }
    let mut slot = 0;
    while slot < SLOT_ORDER.len() {
        if SLOT_ORDER[slot] as usize == axis as usize {
            return Some(generation * GENERATION_LEN + slot * SLOT_LEN);
        }
        slot += 1;
    }
    None
}

/// Serialize a ring snapshot into the report layout
pub fn format(snapshot: &RingSnapshot, out: &mut [u8; PACKET_LEN]) {
    for (generation, chunk) in out.chunks_exact_mut(GENERATION_LEN).enumerate() {
        for (slot, axis) in chunk.chunks_exact_mut(SLOT_LEN).zip(SLOT_ORDER) {
            slot.copy_from_slice(&snapshot.axis(axis).bytes(generation));
        }
    }
}
