//! Register definitions for the LSM6DSR
//!
//! Only the registers this driver touches are declared: device identification,
//! the control block written during configuration, and the start of the
//! output data block that is burst-read on every acquisition.
//!
//! The output registers are not declared as typed registers. They are read as
//! one 12-byte burst starting at [`OUTX_L_G`] with address auto-increment
//! (`CTRL3_C.IF_INC`), which keeps the six gyro bytes from a single
//! conversion together.

/// First gyroscope output register (X-axis low byte)
///
/// Gyro X/Y/Z occupy 0x22..=0x27, accelerometer X/Y/Z follow at 0x28..=0x2D.
pub const OUTX_L_G: u8 = 0x22;

/// First accelerometer output register (X-axis low byte)
pub const OUTX_L_A: u8 = 0x28;

/// Number of bytes in one gyro + accelerometer output burst
pub const OUTPUT_BURST_LEN: usize = 12;

device_driver::create_device!(
    device_name: Lsm6dsr,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = LE;
        }

        /// WHO_AM_I - Device identification (0x0F)
        /// Expected value: 0x6B
        register WhoAmI {
            const ADDRESS = 0x0F;
            const SIZE_BITS = 8;

            /// Device ID (should read 0x6B)
            who_am_i: uint = 0..8,
        },

        /// CTRL1_XL - Accelerometer control 1 (0x10)
        register Ctrl1Xl {
            const ADDRESS = 0x10;
            const SIZE_BITS = 8;

            reserved_0: uint = 0..1,
            /// Route the accelerometer through the second low-pass stage
            lpf2_xl_en: bool = 1,
            /// Accelerometer full-scale selection
            fs_xl: uint = 2..4,
            /// Accelerometer output data rate
            odr_xl: uint = 4..8,
        },

        /// CTRL2_G - Gyroscope control 2 (0x11)
        register Ctrl2G {
            const ADDRESS = 0x11;
            const SIZE_BITS = 8;

            /// Select the ±4000 dps range (overrides `fs_g`)
            fs_4000: bool = 0,
            /// Select the ±125 dps range (overrides `fs_g`)
            fs_125: bool = 1,
            /// Gyroscope full-scale selection
            fs_g: uint = 2..4,
            /// Gyroscope output data rate
            odr_g: uint = 4..8,
        },

        /// CTRL3_C - Control 3 (0x12)
        register Ctrl3C {
            const ADDRESS = 0x12;
            const SIZE_BITS = 8;

            /// Software reset
            sw_reset: bool = 0,
            reserved_1: uint = 1..2,
            /// Register address auto-increment on multi-byte access
            if_inc: bool = 2,
            /// SPI 3-wire mode
            sim: bool = 3,
            /// Interrupt pads push-pull (0) or open-drain (1)
            pp_od: bool = 4,
            /// Interrupt pads active low
            h_lactive: bool = 5,
            /// Block data update: output registers not refreshed until both bytes are read
            bdu: bool = 6,
            /// Reboot memory content
            boot: bool = 7,
        },

        /// CTRL4_C - Control 4 (0x13)
        register Ctrl4C {
            const ADDRESS = 0x13;
            const SIZE_BITS = 8;

            reserved_0: uint = 0..1,
            /// Enable the gyroscope digital LPF1
            lpf1_sel_g: bool = 1,
            /// Disable the I2C interface (SPI only)
            i2c_disable: bool = 2,
            /// Mask data-ready until filter settling completes
            drdy_mask: bool = 3,
            reserved_4: uint = 4..5,
            /// Route all INT2 signals to INT1
            int2_on_int1: bool = 5,
            /// Gyroscope sleep mode
            sleep_g: bool = 6,
            reserved_7: uint = 7..8,
        },

        /// CTRL6_C - Control 6 (0x15)
        register Ctrl6C {
            const ADDRESS = 0x15;
            const SIZE_BITS = 8;

            /// Gyroscope LPF1 bandwidth selection
            ftype: uint = 0..3,
            /// Weight of the accelerometer user offset bits
            usr_off_w: bool = 3,
            /// Disable accelerometer high-performance mode
            xl_hm_mode: bool = 4,
            /// Trigger mode selection
            trig_mode: uint = 5..8,
        },

        /// CTRL8_XL - Accelerometer control 8 (0x17)
        register Ctrl8Xl {
            const ADDRESS = 0x17;
            const SIZE_BITS = 8;

            /// LPF2 on 6D function selection
            low_pass_on_6d: bool = 0,
            reserved_1: uint = 1..2,
            /// Accelerometer slope filter / high-pass filter selection
            hp_slope_xl_en: bool = 2,
            /// Fast-settling mode
            fastsettl_mode_xl: bool = 3,
            /// High-pass filter reference mode
            hp_ref_mode_xl: bool = 4,
            /// Accelerometer LPF2 and HP filter cutoff
            hpcf_xl: uint = 5..8,
        },
    }
);
