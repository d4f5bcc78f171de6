//! Unit tests for the SPI register interface

use device_driver::RegisterInterface;
use embedded_hal::spi::{ErrorKind, Operation as SpiOperation};
use embedded_hal_bus::spi::{DeviceError, ExclusiveDevice, NoDelay};
use imu_poller::SpiInterface;
use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

/// Bus-level events in the order they happened
#[derive(Debug, Clone, PartialEq)]
enum Event {
    Select,
    Deselect,
    Write(Vec<u8>),
    Read(usize),
    Flush,
}

type EventLog = Rc<RefCell<Vec<Event>>>;

#[derive(Debug, Clone, Copy, PartialEq)]
struct MockSpiError;

impl embedded_hal::spi::Error for MockSpiError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Raw SPI bus that answers reads with an incrementing pattern
struct MockBus {
    log: EventLog,
    fail_reads: bool,
}

impl embedded_hal::spi::ErrorType for MockBus {
    type Error = MockSpiError;
}

impl embedded_hal::spi::SpiBus for MockBus {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        if self.fail_reads {
            return Err(MockSpiError);
        }
        for (i, word) in words.iter_mut().enumerate() {
            *word = i as u8 + 1;
        }
        self.log.borrow_mut().push(Event::Read(words.len()));
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Write(words.to_vec()));
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        embedded_hal::spi::SpiBus::write(self, write)?;
        embedded_hal::spi::SpiBus::read(self, read)
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        embedded_hal::spi::SpiBus::read(self, words)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Flush);
        Ok(())
    }
}

/// Chip-select pin (active low)
struct MockPin {
    log: EventLog,
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Select);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Deselect);
        Ok(())
    }
}

/// SPI device that records each transaction's operations
struct MockDevice {
    log: EventLog,
}

impl embedded_hal::spi::ErrorType for MockDevice {
    type Error = MockSpiError;
}

impl embedded_hal::spi::SpiDevice for MockDevice {
    fn transaction(&mut self, operations: &mut [SpiOperation<'_, u8>]) -> Result<(), Self::Error> {
        let mut log = self.log.borrow_mut();
        log.push(Event::Select);
        for operation in operations.iter_mut() {
            match operation {
                SpiOperation::Write(words) => log.push(Event::Write(words.to_vec())),
                SpiOperation::Read(words) => {
                    words.fill(0x5A);
                    log.push(Event::Read(words.len()));
                }
                _ => return Err(MockSpiError),
            }
        }
        log.push(Event::Deselect);
        Ok(())
    }
}

type GpioSelectedInterface = SpiInterface<ExclusiveDevice<MockBus, MockPin, NoDelay>>;

/// Interface over a raw bus with a GPIO chip select
///
/// The log is cleared after construction, which drives the pin high once.
fn bus_interface(fail_reads: bool) -> (GpioSelectedInterface, EventLog) {
    let log = EventLog::default();
    let bus = MockBus {
        log: log.clone(),
        fail_reads,
    };
    let pin = MockPin { log: log.clone() };
    let device = ExclusiveDevice::new_no_delay(bus, pin).unwrap();
    assert_eq!(*log.borrow(), vec![Event::Deselect]);
    log.borrow_mut().clear();
    (SpiInterface::new(device), log)
}

#[test]
fn test_bus_read_is_framed_by_select() {
    let (mut interface, log) = bus_interface(false);
    let mut data = [0u8; 12];

    interface.read_register(0x22, 96, &mut data).unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            Event::Select,
            Event::Write(vec![0xA2]),
            Event::Read(12),
            Event::Flush,
            Event::Deselect,
        ]
    );
    assert_eq!(data, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
}

#[test]
fn test_bus_write_clears_read_bit() {
    let (mut interface, log) = bus_interface(false);

    interface.write_register(0x90, 8, &[0x8E]).unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            Event::Select,
            Event::Write(vec![0x10]),
            Event::Write(vec![0x8E]),
            Event::Flush,
            Event::Deselect,
        ]
    );
}

#[test]
fn test_bus_failure_still_deselects() {
    let (mut interface, log) = bus_interface(true);
    let mut data = [0u8; 2];

    let result = interface.read_register(0x22, 16, &mut data);

    assert!(matches!(result, Err(DeviceError::Spi(MockSpiError))));
    assert_eq!(log.borrow().first(), Some(&Event::Select));
    assert_eq!(log.borrow().last(), Some(&Event::Deselect));
}

#[test]
fn test_device_read_sets_read_bit() {
    let log = EventLog::default();
    let mut interface = SpiInterface::new(MockDevice { log: log.clone() });
    let mut data = [0u8; 1];

    interface.read_register(0x0F, 8, &mut data).unwrap();

    assert_eq!(data, [0x5A]);
    assert_eq!(
        *log.borrow(),
        vec![
            Event::Select,
            Event::Write(vec![0x8F]),
            Event::Read(1),
            Event::Deselect,
        ]
    );
}

#[test]
fn test_device_write_is_single_frame() {
    let log = EventLog::default();
    let mut interface = SpiInterface::new(MockDevice { log: log.clone() });

    interface.write_register(0x92, 8, &[0x44]).unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            Event::Select,
            Event::Write(vec![0x12]),
            Event::Write(vec![0x44]),
            Event::Deselect,
        ]
    );
}

#[test]
fn test_device_write_sends_long_payload_whole() {
    let log = EventLog::default();
    let mut interface = SpiInterface::new(MockDevice { log: log.clone() });
    let payload: Vec<u8> = (0..40).collect();

    interface.write_register(0x10, 320, &payload).unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            Event::Select,
            Event::Write(vec![0x10]),
            Event::Write(payload.clone()),
            Event::Deselect,
        ]
    );
}
