//! This module defines the generic traits that may
//! need to imported to use radio implementations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```
//! use xn297::radio::prelude::*;
//! ```

use crate::types::{CrcLength, DataRate, StatusFlags};

use super::RadioConfig;

/// A trait to represent raw access to the transceiver's registers.
///
/// None of these functions validate their input. A register offset outside
/// the range [0, 0x1F] or a bit index outside the range [0, 7] silently
/// targets the wrong register or bit.
pub trait RadioRegisters {
    type RegistersErrorType;

    /// Read one byte from the register at offset `register`.
    fn read_register(&mut self, register: u8) -> Result<u8, Self::RegistersErrorType>;

    /// Read `buf.len()` bytes from the register at offset `register` into `buf`.
    fn read_register_buf(
        &mut self,
        register: u8,
        buf: &mut [u8],
    ) -> Result<(), Self::RegistersErrorType>;

    /// Write one byte to the register at offset `register`.
    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::RegistersErrorType>;

    /// Write all bytes in `buf` to the register at offset `register`.
    fn write_register_buf(
        &mut self,
        register: u8,
        buf: &[u8],
    ) -> Result<(), Self::RegistersErrorType>;

    /// Send a raw `command` byte followed by `data` in one chip-select frame.
    ///
    /// The command byte is sent as is (no register command bits are added).
    fn write_command(&mut self, command: u8, data: &[u8]) -> Result<(), Self::RegistersErrorType>;

    /// Set the bit at index `bit` of a register.
    ///
    /// This is a read-modify-write of two transactions, so a bit the radio
    /// changes in between is overwritten.
    fn set_bit(&mut self, register: u8, bit: u8) -> Result<(), Self::RegistersErrorType>;

    /// Clear the bit at index `bit` of a register.
    ///
    /// Like [`RadioRegisters::set_bit()`], this is a read-modify-write.
    fn clear_bit(&mut self, register: u8, bit: u8) -> Result<(), Self::RegistersErrorType>;

    /// Read the bit at index `bit` of a register. Returns `0` or `1`.
    fn read_bit(&mut self, register: u8, bit: u8) -> Result<u8, Self::RegistersErrorType>;
}

/// A trait to represent manipulation of a channel (aka frequency)
/// for the transceiver.
pub trait RadioChannel {
    type ChannelErrorType;

    /// Set the radio's currently selected channel.
    ///
    /// These channels translate to the RF frequency as an offset of MHz from 2400 MHz.
    /// The value is written as is (no range check).
    /// The default channel is 49 (2400 + 49 = 2.449 GHz).
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType>;

    /// Get the radio's currently selected channel.
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType>;
}

/// A trait to represent manipulation of the data rate for the transceiver.
pub trait RadioDataRate {
    type DataRateErrorType;

    /// Set the radio's data rate.
    ///
    /// See [`DataRate`] for supported values.
    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType>;

    /// Get the radio's data rate.
    ///
    /// The reserved bit combination is reported as [`DataRate::Mbps2`].
    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType>;
}

/// A trait to represent manipulation of Cyclical Redundancy Checksums
/// for the transceiver.
pub trait RadioCrcLength {
    type CrcLengthErrorType;

    /// Set the radio's CRC length.
    ///
    /// The hardware only offers a 16 bit checksum, so [`CrcLength::Bit8`]
    /// leaves the radio untouched.
    fn set_crc_length(&mut self, crc_length: CrcLength) -> Result<(), Self::CrcLengthErrorType>;

    /// Get the radio's CRC length.
    ///
    /// This never returns [`CrcLength::Bit8`].
    fn get_crc_length(&mut self) -> Result<CrcLength, Self::CrcLengthErrorType>;
}

/// A trait to represent manipulation of the dynamic acknowledgement feature.
pub trait RadioDynAck {
    type DynAckErrorType;

    /// Allow transmissions that ask for no acknowledgement.
    fn enable_dyn_ack(&mut self) -> Result<(), Self::DynAckErrorType>;

    /// Disallow transmissions that ask for no acknowledgement.
    fn disable_dyn_ack(&mut self) -> Result<(), Self::DynAckErrorType>;
}

/// A trait to represent manipulation of the power state for the transceiver.
pub trait RadioPower {
    type PowerErrorType;

    /// Power up the radio (set the power bit of the CONFIG register).
    fn power_up(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Power down the radio (clear the power bit of the CONFIG register).
    ///
    /// Nothing calls this automatically.
    fn shut_down(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Is the radio powered up?
    fn is_powered(&mut self) -> Result<bool, Self::PowerErrorType>;
}

/// A trait to represent payload lengths and the RX FIFO.
pub trait RadioPayload {
    type PayloadErrorType;

    /// Set the static payload length expected on a receiving `pipe`.
    ///
    /// The `pipe` number wraps around modulo 6, so `8` targets pipe `2`.
    fn set_rx_payload_width(&mut self, pipe: u8, width: u8) -> Result<(), Self::PayloadErrorType>;

    /// Get the length of the payload at the top of the RX FIFO.
    fn read_rx_payload_width(&mut self) -> Result<u8, Self::PayloadErrorType>;

    /// Read `buf.len()` bytes of the payload at the top of the RX FIFO.
    ///
    /// Use [`RadioPayload::read_rx_payload_width()`] to size `buf`.
    fn read_rx_payload(&mut self, buf: &mut [u8]) -> Result<(), Self::PayloadErrorType>;

    /// Is the RX FIFO empty?
    fn is_rx_fifo_empty(&mut self) -> Result<bool, Self::PayloadErrorType>;
}

/// A trait to represent manipulation of [`StatusFlags`] for the transceiver.
pub trait RadioStatus {
    type StatusErrorType;

    /// Read the STATUS register.
    fn get_status_flags(&mut self) -> Result<StatusFlags, Self::StatusErrorType>;

    /// Clear the radio's IRQ status flags.
    ///
    /// Set any flag of [`StatusFlags`] to `true` to clear the corresponding
    /// event. Flags set to `false` are left untouched (the radio clears a flag
    /// when a 1 is written to it).
    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType>;
}

/// A trait to represent receiving with the transceiver.
pub trait RadioReceive {
    type ReceiveErrorType;

    /// Put the radio into RX mode.
    ///
    /// CE is driven LOW before the PRIM_RX bit is set, then driven HIGH.
    fn set_mode_rx(&mut self) -> Result<(), Self::ReceiveErrorType>;

    /// Is the radio configured as a primary receiver?
    fn is_rx(&mut self) -> Result<bool, Self::ReceiveErrorType>;

    /// Service the "RX Data Ready" event once.
    ///
    /// If the event is flagged, the receive handler is called and then the
    /// flag is cleared. Only one event is serviced per call, even if more
    /// payloads are waiting in the RX FIFO.
    ///
    /// Returns `true` if the event was flagged.
    /// If the receive handler fails, its error is returned and the flag is left
    /// set, so the next call tries again.
    #[doc(alias = "tick")]
    fn poll(&mut self) -> Result<bool, Self::ReceiveErrorType>;
}

/// A trait to represent the initialization of the transceiver.
pub trait RadioInit {
    type InitErrorType;

    /// Initialize the radio with its fixed configuration recipe.
    ///
    /// This powers up the radio, writes its calibration blocks, binds the
    /// default addresses and payload lengths, and leaves the radio listening
    /// on the default channel.
    fn begin(&mut self) -> Result<(), Self::InitErrorType>;

    /// Apply a [`RadioConfig`] on top of the state left by [`RadioInit::begin()`].
    ///
    /// The radio is left in RX mode.
    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::InitErrorType>;
}

/// A trait to represent debug output for the transceiver.
pub trait RadioDetails {
    type DetailsErrorType;

    /// Print details about the radio's current configuration
    /// through the installed diagnostic sink.
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType>;
}
