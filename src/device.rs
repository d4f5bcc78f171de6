//! Low-level driver for the LSM6DSR
//!
//! This module wraps the register interface: one-time configuration, device
//! identification, and the 12-byte output burst read on every acquisition.

use crate::registers::{Lsm6dsr as RegisterDevice, OUTPUT_BURST_LEN, OUTX_L_G};
use crate::sensors::{GyroFullScale, SensorConfig};
use crate::{Error, WHO_AM_I_VALUE};

use device_driver::RegisterInterface;

/// Delay after each configuration register write
const CONFIG_WRITE_DELAY_MS: u32 = 2;

/// Size of the output burst in bits, as passed to the register interface
const OUTPUT_BURST_BITS: u32 = (OUTPUT_BURST_LEN * 8) as u32;

/// Driver for the LSM6DSR
pub struct Lsm6dsrDriver<I> {
    device: RegisterDevice<I>,
}

impl<I> Lsm6dsrDriver<I> {
    /// Create a driver over a register interface
    ///
    /// Construction does not touch the bus. Call [`verify`](Self::verify) to
    /// check the device identity and [`init`](Self::init) to configure it.
    pub fn new(interface: I) -> Self {
        Self {
            device: RegisterDevice::new(interface),
        }
    }

    /// Consume the driver and return the register interface
    pub fn release(self) -> I {
        self.device.interface
    }
}

impl<I> Lsm6dsrDriver<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Read the `WHO_AM_I` register
    ///
    /// Should return 0x6B for a valid LSM6DSR.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_who_am_i(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.who_am_i().read()?;
        Ok(reg.who_am_i())
    }

    /// Check that the device on the bus is an LSM6DSR
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDevice`] with the value read if `WHO_AM_I`
    /// does not match, or a bus error.
    pub fn verify(&mut self) -> Result<(), Error<I::Error>> {
        let who_am_i = self.read_who_am_i()?;
        if who_am_i != WHO_AM_I_VALUE {
            return Err(Error::InvalidDevice(who_am_i));
        }
        Ok(())
    }

    /// Apply the one-time sensor configuration
    ///
    /// Writes `CTRL1_XL`, `CTRL2_G`, `CTRL3_C`, `CTRL4_C`, `CTRL6_C` and
    /// `CTRL8_XL` in that order, waiting 2 ms after each write.
    ///
    /// # Arguments
    ///
    /// * `config` - Register settings to apply
    /// * `delay` - Delay provider implementing `embedded_hal::delay::DelayNs`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails. Registers
    /// written before the failure keep their new values.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut imu = Lsm6dsrDriver::new(SpiInterface::new(spi_device));
    /// imu.init(&SensorConfig::default(), &mut delay)?;
    /// ```
    pub fn init<D>(&mut self, config: &SensorConfig, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        let accel = config.accel;
        let gyro = config.gyro;

        self.device.ctrl_1_xl().write(|w| {
            w.set_odr_xl(accel.odr as u8);
            w.set_fs_xl(accel.full_scale as u8);
            w.set_lpf_2_xl_en(accel.lpf2_enable);
        })?;
        delay.delay_ms(CONFIG_WRITE_DELAY_MS);

        self.device.ctrl_2_g().write(|w| {
            w.set_odr_g(gyro.odr as u8);
            w.set_fs_g(gyro.full_scale.fs_bits());
            w.set_fs_125(gyro.full_scale == GyroFullScale::Dps125);
            w.set_fs_4000(gyro.full_scale == GyroFullScale::Dps4000);
        })?;
        delay.delay_ms(CONFIG_WRITE_DELAY_MS);

        self.device.ctrl_3_c().write(|w| {
            w.set_bdu(config.block_data_update);
            w.set_if_inc(config.auto_increment);
        })?;
        delay.delay_ms(CONFIG_WRITE_DELAY_MS);

        self.device.ctrl_4_c().write(|w| {
            w.set_i_2_c_disable(config.i2c_disable);
            w.set_lpf_1_sel_g(gyro.lpf1_enable);
        })?;
        delay.delay_ms(CONFIG_WRITE_DELAY_MS);

        self.device.ctrl_6_c().write(|w| {
            w.set_ftype(gyro.lpf1_bandwidth as u8);
        })?;
        delay.delay_ms(CONFIG_WRITE_DELAY_MS);

        self.device.ctrl_8_xl().write(|w| {
            w.set_hp_slope_xl_en(accel.hp_slope_enable);
        })?;
        delay.delay_ms(CONFIG_WRITE_DELAY_MS);

        #[cfg(feature = "defmt")]
        defmt::info!(
            "LSM6DSR configured: accel ODR={=u8} FS={=u8}, gyro ODR={=u8} FS={=u16}dps",
            accel.odr as u8,
            accel.full_scale.max_value(),
            gyro.odr as u8,
            gyro.full_scale.max_value()
        );

        Ok(())
    }

    /// Read the 12-byte gyro + accelerometer output block in one transfer
    ///
    /// Bytes are gyro X/Y/Z then accel X/Y/Z, each low byte first. A single
    /// burst keeps all axes from the same conversion.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_output_burst(&mut self) -> Result<[u8; OUTPUT_BURST_LEN], Error<I::Error>> {
        let mut buffer = [0u8; OUTPUT_BURST_LEN];
        RegisterInterface::read_register(
            &mut self.device.interface,
            OUTX_L_G,
            OUTPUT_BURST_BITS,
            &mut buffer,
        )?;
        Ok(buffer)
    }
}

#[cfg(feature = "async")]
impl<I> Lsm6dsrDriver<I>
where
    I: device_driver::AsyncRegisterInterface<AddressType = u8>,
{
    /// Read the `WHO_AM_I` register (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_who_am_i_async(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.who_am_i().read_async().await?;
        Ok(reg.who_am_i())
    }

    /// Check that the device on the bus is an LSM6DSR (async)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDevice`] on an identity mismatch, or a bus error.
    pub async fn verify_async(&mut self) -> Result<(), Error<I::Error>> {
        let who_am_i = self.read_who_am_i_async().await?;
        if who_am_i != WHO_AM_I_VALUE {
            return Err(Error::InvalidDevice(who_am_i));
        }
        Ok(())
    }

    /// Apply the one-time sensor configuration (async)
    ///
    /// Same register sequence as [`init`](Self::init).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn init_async<D>(
        &mut self,
        config: &SensorConfig,
        delay: &mut D,
    ) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        let accel = config.accel;
        let gyro = config.gyro;

        self.device
            .ctrl_1_xl()
            .write_async(|w| {
                w.set_odr_xl(accel.odr as u8);
                w.set_fs_xl(accel.full_scale as u8);
                w.set_lpf_2_xl_en(accel.lpf2_enable);
            })
            .await?;
        delay.delay_ms(CONFIG_WRITE_DELAY_MS).await;

        self.device
            .ctrl_2_g()
            .write_async(|w| {
                w.set_odr_g(gyro.odr as u8);
                w.set_fs_g(gyro.full_scale.fs_bits());
                w.set_fs_125(gyro.full_scale == GyroFullScale::Dps125);
                w.set_fs_4000(gyro.full_scale == GyroFullScale::Dps4000);
            })
            .await?;
        delay.delay_ms(CONFIG_WRITE_DELAY_MS).await;

        self.device
            .ctrl_3_c()
            .write_async(|w| {
                w.set_bdu(config.block_data_update);
                w.set_if_inc(config.auto_increment);
            })
            .await?;
        delay.delay_ms(CONFIG_WRITE_DELAY_MS).await;

        self.device
            .ctrl_4_c()
            .write_async(|w| {
                w.set_i_2_c_disable(config.i2c_disable);
                w.set_lpf_1_sel_g(gyro.lpf1_enable);
            })
            .await?;
        delay.delay_ms(CONFIG_WRITE_DELAY_MS).await;

        self.device
            .ctrl_6_c()
            .write_async(|w| {
                w.set_ftype(gyro.lpf1_bandwidth as u8);
            })
            .await?;
        delay.delay_ms(CONFIG_WRITE_DELAY_MS).await;

        self.device
            .ctrl_8_xl()
            .write_async(|w| {
                w.set_hp_slope_xl_en(accel.hp_slope_enable);
            })
            .await?;
        delay.delay_ms(CONFIG_WRITE_DELAY_MS).await;

        #[cfg(feature = "defmt")]
        defmt::info!("LSM6DSR configured (async)");

        Ok(())
    }

    /// Read the 12-byte output block in one transfer (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_output_burst_async(
        &mut self,
    ) -> Result<[u8; OUTPUT_BURST_LEN], Error<I::Error>> {
        let mut buffer = [0u8; OUTPUT_BURST_LEN];
        device_driver::AsyncRegisterInterface::read_register(
            &mut self.device.interface,
            OUTX_L_G,
            OUTPUT_BURST_BITS,
            &mut buffer,
        )
        .await?;
        Ok(buffer)
    }
}
