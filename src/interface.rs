//! Bus interface implementations for the LSM6DSR
//!
//! This module provides implementations of the `device-driver` register
//! interface traits over an SPI device. Reads set the address MSB (0x80);
//! writes clear it.

use device_driver::RegisterInterface;

/// SPI read flag, OR'd into the register address
const SPI_READ_BIT: u8 = 0x80;

/// SPI interface for the LSM6DSR over an `SpiDevice`
///
/// # Note on Chip Select
///
/// The `SpiDevice` trait from `embedded-hal` manages chip select: it is
/// asserted for the whole `transaction`, so an address write and the data
/// read that follows share one select frame.
///
/// To drive chip select from a GPIO around a raw `SpiBus`, wrap the bus in an
/// `embedded-hal-bus` device. Select is asserted low for each register
/// transfer and released afterwards, even when the transfer fails:
/// ```ignore
/// let spi_device = embedded_hal_bus::spi::ExclusiveDevice::new(spi_bus, cs_pin, delay)?;
/// let interface = SpiInterface::new(spi_device);
/// ```
///
/// Register writes are sent as the address byte followed by the payload in
/// the same select frame, so payloads of any length go out unmodified.
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Create a new SPI interface with the given SPI device
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Consume the interface and return the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI, E> RegisterInterface for SpiInterface<SPI>
where
    SPI: embedded_hal::spi::SpiDevice<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let command = [address | SPI_READ_BIT];
        let mut operations = [
            embedded_hal::spi::Operation::Write(&command),
            embedded_hal::spi::Operation::Read(read_data),
        ];

        self.spi.transaction(&mut operations)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let command = [address & !SPI_READ_BIT];
        let mut operations = [
            embedded_hal::spi::Operation::Write(&command),
            embedded_hal::spi::Operation::Write(write_data),
        ];

        self.spi.transaction(&mut operations)
    }
}

#[cfg(feature = "async")]
impl<SPI, E> device_driver::AsyncRegisterInterface for SpiInterface<SPI>
where
    SPI: embedded_hal_async::spi::SpiDevice<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    async fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let command = [address | SPI_READ_BIT];
        let mut operations = [
            embedded_hal_async::spi::Operation::Write(&command),
            embedded_hal_async::spi::Operation::Read(read_data),
        ];

        self.spi.transaction(&mut operations).await
    }

    async fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let command = [address & !SPI_READ_BIT];
        let mut operations = [
            embedded_hal_async::spi::Operation::Write(&command),
            embedded_hal_async::spi::Operation::Write(write_data),
        ];

        self.spi.transaction(&mut operations).await
    }
}
