use bitfield_struct::bitfield;

use crate::CrcLength;

/// The CONFIG register.
#[bitfield(u8, order = Msb)]
pub(crate) struct Config {
    #[bits(4)]
    _reserved: u8,

    /// Is the (16 bit) CRC enabled?
    pub crc_enabled: bool,

    #[bits(1)]
    _crc_scheme: u8,

    pub power: bool,

    /// Primary receiver (`true`) or primary transmitter (`false`).
    pub is_rx: bool,
}

impl Config {
    pub const fn crc_length(&self) -> CrcLength {
        if self.crc_enabled() {
            CrcLength::Bit16
        } else {
            CrcLength::Disabled
        }
    }
}
