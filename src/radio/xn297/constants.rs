/// A module encapsulating register offsets for the XN297L.
pub mod registers {
    pub const CONFIG: u8 = 0x00;
    pub const EN_AA: u8 = 0x01;
    pub const EN_RXADDR: u8 = 0x02;
    pub const SETUP_AW: u8 = 0x03;
    pub const SETUP_RETR: u8 = 0x04;
    pub const RF_CH: u8 = 0x05;
    pub const RF_SETUP: u8 = 0x06;
    pub const STATUS: u8 = 0x07;
    pub const RX_ADDR_P0: u8 = 0x0A;
    pub const RX_ADDR_P1: u8 = 0x0B;
    pub const RX_PW_P0: u8 = 0x11;
    pub const FIFO_STATUS: u8 = 0x17;
    pub const DEMOD_CAL: u8 = 0x19;
    pub const RF_CAL2: u8 = 0x1A;
    pub const DEM_CAL2: u8 = 0x1B;
    pub const DYNPD: u8 = 0x1C;
    pub const FEATURE: u8 = 0x1D;
    pub const RF_CAL: u8 = 0x1E;
    pub const BB_CAL: u8 = 0x1F;
}

/// A module encapsulating SPI commands for the XN297L.
pub mod commands {
    /// OR-ed with a register offset to read it (the offset passes unchanged).
    pub const R_REGISTER: u8 = 0x00;
    /// OR-ed with a register offset to write it.
    pub const W_REGISTER: u8 = 0x20;
    pub const R_RX_PL_WID: u8 = 0x60;
    pub const R_RX_PAYLOAD: u8 = 0x61;
    pub const NOP: u8 = 0xFF;
}

/// A module to encapsulate bit positions within registers.
pub mod mnemonics {
    /// CONFIG: primary RX (1) or TX (0)
    pub const PRIM_RX: u8 = 0;
    /// CONFIG: power up
    pub const PWR_UP: u8 = 1;
    /// CONFIG: enable the 16 bit CRC
    pub const EN_CRC: u8 = 3;
    /// RF_SETUP: low bit of the data rate field
    pub const RF_DR_LOW: u8 = 6;
    /// RF_SETUP: high bit of the data rate field
    pub const RF_DR_HIGH: u8 = 7;
    /// STATUS: RX data ready (write 1 to clear)
    pub const RX_DR: u8 = 6;
    /// FIFO_STATUS: RX FIFO empty
    pub const RX_EMPTY: u8 = 0;
    /// FEATURE: allow payloads that ask for no acknowledgement
    pub const EN_DYN_ACK: u8 = 0;
}

/// Fixed calibration blocks written during [`begin()`](fn@crate::radio::prelude::RadioInit::begin).
pub mod calibration {
    pub const BB_CAL: [u8; 5] = [0x0A, 0x6D, 0x67, 0x9C, 0x46];
    pub const RF_CAL: [u8; 3] = [0xF6, 0x37, 0x5D];
    pub const DEMOD_CAL: [u8; 1] = [0x01];
    pub const RF_CAL2: [u8; 6] = [0x45, 0x21, 0xEF, 0x2C, 0x5A, 0x40];
    pub const DEM_CAL2: [u8; 3] = [0x0B, 0xDF, 0x02];
}

/// The address bound to pipe 0 by [`begin()`](fn@crate::radio::prelude::RadioInit::begin).
pub const PIPE0_ADDRESS: [u8; 5] = [0xA7, 0x93, 0xB4, 0x55, 0xAA];
/// The address bound to pipe 1 by [`begin()`](fn@crate::radio::prelude::RadioInit::begin).
pub const PIPE1_ADDRESS: [u8; 5] = [0x81, 0xC6, 0xB2, 0xAA, 0x55];
/// Channel 49 (2.449 GHz).
pub const DEFAULT_CHANNEL: u8 = 0x31;
/// The static payload length of pipes 0 and 1.
pub const DEFAULT_PAYLOAD_WIDTH: u8 = 2;

/// CONFIG value written first: power up, 16 bit CRC, PTX.
pub const CONFIG_POWER_ON: u8 = 0x8E;
/// CONFIG value written last: power up, 16 bit CRC, PRX.
pub const CONFIG_RX_ON: u8 = 0x8F;

/// One framed register write of the initialization recipe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegisterWrite {
    pub register: u8,
    pub value: &'static [u8],
}

impl RegisterWrite {
    const fn new(register: u8, value: &'static [u8]) -> Self {
        Self { register, value }
    }
}

/// The ordered register writes of the one-shot initialization.
///
/// CE must be LOW while these are written, and raised afterwards.
pub const INIT_SEQUENCE: [RegisterWrite; 20] = [
    RegisterWrite::new(registers::CONFIG, &[CONFIG_POWER_ON]),
    // clear RX_DR, TX_DS and MAX_RT
    RegisterWrite::new(registers::STATUS, &[0x70]),
    // CE controlled by pin, dynamic ack off
    RegisterWrite::new(registers::FEATURE, &[0x00]),
    RegisterWrite::new(registers::BB_CAL, &calibration::BB_CAL),
    RegisterWrite::new(registers::RF_CAL, &calibration::RF_CAL),
    RegisterWrite::new(registers::DEMOD_CAL, &calibration::DEMOD_CAL),
    RegisterWrite::new(registers::RF_CAL2, &calibration::RF_CAL2),
    RegisterWrite::new(registers::DEM_CAL2, &calibration::DEM_CAL2),
    // auto-ack on pipes 0 and 1
    RegisterWrite::new(registers::EN_AA, &[0x03]),
    RegisterWrite::new(registers::EN_RXADDR, &[0x03]),
    // 5 byte addresses
    RegisterWrite::new(registers::SETUP_AW, &[0x03]),
    RegisterWrite::new(registers::SETUP_RETR, &[0x02]),
    // 1 Mbps
    RegisterWrite::new(registers::RF_SETUP, &[0x3F]),
    RegisterWrite::new(registers::RX_PW_P0, &[DEFAULT_PAYLOAD_WIDTH]),
    RegisterWrite::new(registers::RX_PW_P0 + 1, &[DEFAULT_PAYLOAD_WIDTH]),
    // dynamic payload length off
    RegisterWrite::new(registers::DYNPD, &[0x00]),
    RegisterWrite::new(registers::RX_ADDR_P0, &PIPE0_ADDRESS),
    RegisterWrite::new(registers::RX_ADDR_P1, &PIPE1_ADDRESS),
    RegisterWrite::new(registers::RF_CH, &[DEFAULT_CHANNEL]),
    RegisterWrite::new(registers::CONFIG, &[CONFIG_RX_ON]),
];
