//! Mock register interface for testing the LSM6DSR driver

use device_driver::RegisterInterface;
use imu_poller::WHO_AM_I_VALUE;
use imu_poller::registers::{OUTX_L_A, OUTX_L_G};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Records operations performed on the mock interface
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Burst or single register read
    ReadRegister {
        /// First register address
        address: u8,
        /// Number of bytes read
        len: usize,
    },
    /// Single byte written to a register
    WriteRegister {
        /// Register address
        address: u8,
        /// Value that was written
        value: u8,
    },
}

/// Shared state for mock interface (uses interior mutability)
#[derive(Debug)]
struct MockState {
    /// Simulated register values
    registers: HashMap<u8, u8>,

    /// Operations log for verification
    operations: Vec<Operation>,

    /// Failure injection flags
    fail_next_read: bool,
    fail_next_write: bool,

    /// Raw gyro bursts (x_l, x_h, y_l, y_h, z_l, z_h) served one per output read
    gyro_sequence: Vec<[u8; 6]>,
    gyro_sequence_idx: usize,
}

impl MockState {
    fn new() -> Self {
        let mut state = Self {
            registers: HashMap::new(),
            operations: Vec::new(),
            fail_next_read: false,
            fail_next_write: false,
            gyro_sequence: Vec::new(),
            gyro_sequence_idx: 0,
        };

        state.registers.insert(0x0F, WHO_AM_I_VALUE);

        state
    }

    fn set_block(&mut self, start: u8, bytes: &[u8]) {
        for (i, &byte) in bytes.iter().enumerate() {
            self.registers.insert(start.wrapping_add(i as u8), byte);
        }
    }

    /// Advance gyroscope sequence and update registers
    fn advance_gyro_sequence(&mut self) {
        if self.gyro_sequence_idx < self.gyro_sequence.len() {
            let raw = self.gyro_sequence[self.gyro_sequence_idx];
            self.set_block(OUTX_L_G, &raw);
            self.gyro_sequence_idx += 1;
        }
    }
}

/// Mock interface for testing
#[derive(Clone)]
pub struct MockInterface {
    state: Rc<RefCell<MockState>>,
}

impl MockInterface {
    /// Create a new mock interface with default register values
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState::new())),
        }
    }

    /// Set a register value
    pub fn set_register(&self, address: u8, value: u8) {
        self.state.borrow_mut().registers.insert(address, value);
    }

    /// Get a register value
    pub fn get_register(&self, address: u8) -> u8 {
        self.state
            .borrow()
            .registers
            .get(&address)
            .copied()
            .unwrap_or(0)
    }

    /// Set raw gyro output bytes (low byte first per axis)
    pub fn set_gyro_raw(&self, raw: [u8; 6]) {
        self.state.borrow_mut().set_block(OUTX_L_G, &raw);
    }

    /// Set gyroscope data (will be returned on next read)
    pub fn set_gyro_data(&self, x: i16, y: i16, z: i16) {
        let [x_l, x_h] = x.to_le_bytes();
        let [y_l, y_h] = y.to_le_bytes();
        let [z_l, z_h] = z.to_le_bytes();
        self.set_gyro_raw([x_l, x_h, y_l, y_h, z_l, z_h]);
    }

    /// Set accelerometer data (will be returned on next read)
    pub fn set_accel_data(&self, x: i16, y: i16, z: i16) {
        let [x_l, x_h] = x.to_le_bytes();
        let [y_l, y_h] = y.to_le_bytes();
        let [z_l, z_h] = z.to_le_bytes();
        self.state
            .borrow_mut()
            .set_block(OUTX_L_A, &[x_l, x_h, y_l, y_h, z_l, z_h]);
    }

    /// Queue raw gyro bursts, one consumed per output read
    pub fn set_gyro_sequence(&self, sequence: Vec<[u8; 6]>) {
        let mut state = self.state.borrow_mut();
        state.gyro_sequence = sequence;
        state.gyro_sequence_idx = 0;
    }

    /// Inject a read failure on the next read operation
    pub fn fail_next_read(&self) {
        self.state.borrow_mut().fail_next_read = true;
    }

    /// Inject a write failure on the next write operation
    pub fn fail_next_write(&self) {
        self.state.borrow_mut().fail_next_write = true;
    }

    /// Get the operations log
    pub fn operations(&self) -> Vec<Operation> {
        self.state.borrow().operations.clone()
    }

    /// Clear the operations log
    pub fn clear_operations(&self) {
        self.state.borrow_mut().operations.clear();
    }

    /// Writes in the order they happened, as (address, value)
    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.operations()
            .into_iter()
            .filter_map(|op| match op {
                Operation::WriteRegister { address, value } => Some((address, value)),
                Operation::ReadRegister { .. } => None,
            })
            .collect()
    }

    /// Count burst reads of the output block
    pub fn output_read_count(&self) -> usize {
        self.state
            .borrow()
            .operations
            .iter()
            .filter(|op| matches!(op, Operation::ReadRegister { address, .. } if *address == OUTX_L_G))
            .count()
    }
}

/// Mock error type
#[derive(Debug, Clone, PartialEq)]
pub enum MockError {
    /// Simulated communication error
    Communication,
}

impl RegisterInterface for MockInterface {
    type Error = MockError;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_read {
            state.fail_next_read = false;
            return Err(MockError::Communication);
        }

        if address == OUTX_L_G {
            state.advance_gyro_sequence();
        }

        // Auto-increment through consecutive registers
        for (i, byte) in read_data.iter_mut().enumerate() {
            let reg_addr = address.wrapping_add(i as u8);
            *byte = state.registers.get(&reg_addr).copied().unwrap_or(0);
        }

        state.operations.push(Operation::ReadRegister {
            address,
            len: read_data.len(),
        });

        Ok(())
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_write {
            state.fail_next_write = false;
            return Err(MockError::Communication);
        }

        for (i, &byte) in write_data.iter().enumerate() {
            let reg_addr = address.wrapping_add(i as u8);
            state.registers.insert(reg_addr, byte);
            state.operations.push(Operation::WriteRegister {
                address: reg_addr,
                value: byte,
            });
        }

        Ok(())
    }
}

impl Default for MockInterface {
    fn default() -> Self {
        Self::new()
    }
}
