use crate::radio::constants::{
    DEFAULT_CHANNEL, DEFAULT_PAYLOAD_WIDTH, PIPE0_ADDRESS, PIPE1_ADDRESS,
};
use crate::{CrcLength, DataRate};

/// An object to configure the radio.
///
/// This struct follows a builder pattern. Since all fields are private, users should
/// start with the [`RadioConfig::default`] constructor, then mutate the object accordingly.
/// ```
/// use xn297::radio::RadioConfig;
///
/// let mut config = RadioConfig::default();
/// config = config.with_channel(42);
/// assert_eq!(config.channel(), 42);
/// ```
/// Apply it with
/// [`RadioInit::with_config()`](fn@crate::radio::prelude::RadioInit::with_config).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadioConfig {
    channel: u8,
    data_rate: DataRate,
    crc_length: CrcLength,
    dyn_ack: bool,
    payload_widths: [u8; 6],
    pipe0: [u8; 5],
    pipe1: [u8; 5],
}

impl Default for RadioConfig {
    /// Instantiate a [`RadioConfig`] object with the values written by
    /// [`RadioInit::begin()`](fn@crate::radio::prelude::RadioInit::begin).
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`RadioConfig::channel()`] | `49` |
    /// | [`RadioConfig::data_rate()`] | [`DataRate::Mbps1`] |
    /// | [`RadioConfig::crc_length()`] | [`CrcLength::Bit16`] |
    /// | [`RadioConfig::dyn_ack()`] | `false` |
    /// | [`RadioConfig::rx_payload_width()`] | `2` (all pipes) |
    /// | [`RadioConfig::rx_address()`] | `A7 93 B4 55 AA` (pipe 0), `81 C6 B2 AA 55` (pipe 1) |
    fn default() -> Self {
        Self {
            channel: DEFAULT_CHANNEL,
            data_rate: DataRate::Mbps1,
            crc_length: CrcLength::Bit16,
            dyn_ack: false,
            payload_widths: [DEFAULT_PAYLOAD_WIDTH; 6],
            pipe0: PIPE0_ADDRESS,
            pipe1: PIPE1_ADDRESS,
        }
    }
}

impl RadioConfig {
    /// Returns the value set by [`RadioConfig::with_channel()`].
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// The channel (aka frequency offset from 2400 MHz).
    ///
    /// See [`RadioChannel::set_channel()`](fn@crate::radio::prelude::RadioChannel::set_channel).
    pub fn with_channel(self, channel: u8) -> Self {
        Self { channel, ..self }
    }

    /// Returns the value set by [`RadioConfig::with_data_rate()`].
    pub const fn data_rate(&self) -> DataRate {
        self.data_rate
    }

    /// The Data Rate (over the air).
    ///
    /// See [`RadioDataRate::set_data_rate()`](fn@crate::radio::prelude::RadioDataRate::set_data_rate).
    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self { data_rate, ..self }
    }

    /// Returns the value set by [`RadioConfig::with_crc_length()`].
    pub const fn crc_length(&self) -> CrcLength {
        self.crc_length
    }

    /// The Cyclical Redundancy Checksum (CRC) length.
    ///
    /// See [`RadioCrcLength::set_crc_length()`](fn@crate::radio::prelude::RadioCrcLength::set_crc_length).
    pub fn with_crc_length(self, crc_length: CrcLength) -> Self {
        Self { crc_length, ..self }
    }

    /// Returns the value set by [`RadioConfig::with_dyn_ack()`].
    pub const fn dyn_ack(&self) -> bool {
        self.dyn_ack
    }

    /// Allow transmissions that ask for no acknowledgement.
    pub fn with_dyn_ack(self, enable: bool) -> Self {
        Self {
            dyn_ack: enable,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_rx_payload_width()`].
    ///
    /// The `pipe` number wraps around modulo 6.
    pub const fn rx_payload_width(&self, pipe: u8) -> u8 {
        self.payload_widths[(pipe % 6) as usize]
    }

    /// The static payload length expected on a receiving `pipe`.
    ///
    /// The `pipe` number wraps around modulo 6 (like
    /// [`RadioPayload::set_rx_payload_width()`](fn@crate::radio::prelude::RadioPayload::set_rx_payload_width)).
    pub fn with_rx_payload_width(self, pipe: u8, width: u8) -> Self {
        let mut payload_widths = self.payload_widths;
        payload_widths[(pipe % 6) as usize] = width;
        Self {
            payload_widths,
            ..self
        }
    }

    /// Get the address for a specified `pipe` set by [`RadioConfig::with_rx_address()`].
    ///
    /// This does nothing if the given `pipe` is not `0` or `1`.
    pub fn rx_address(&self, pipe: u8, address: &mut [u8]) {
        let len = address.len().min(5);
        match pipe {
            0 => address[..len].copy_from_slice(&self.pipe0[..len]),
            1 => address[..len].copy_from_slice(&self.pipe1[..len]),
            _ => (),
        }
    }

    /// Set the address of a specified RX `pipe`.
    ///
    /// Only pipes 0 and 1 are supported; other pipes are ignored.
    /// At most 5 bytes of `address` are used.
    pub fn with_rx_address(self, pipe: u8, address: &[u8]) -> Self {
        let len = address.len().min(5);
        let mut new_config = self;
        match pipe {
            0 => new_config.pipe0[..len].copy_from_slice(&address[..len]),
            1 => new_config.pipe1[..len].copy_from_slice(&address[..len]),
            _ => (),
        }
        new_config
    }
}
