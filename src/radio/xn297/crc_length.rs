use embedded_hal::{
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use super::{
    bit_fields::Config,
    constants::{mnemonics, registers},
    Xn297, Xn297Error,
};
use crate::{
    radio::{
        handlers::{OnDebug, OnReceive},
        prelude::{RadioCrcLength, RadioRegisters},
    },
    CrcLength,
};

impl<SPI, DO, DI, RX, DBG> RadioCrcLength for Xn297<SPI, DO, DI, RX, DBG>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DI: InputPin,
    RX: OnReceive<SPI>,
    DBG: OnDebug,
{
    type CrcLengthErrorType = Xn297Error<SPI::Error, DO::Error, DI::Error>;

    fn set_crc_length(&mut self, crc_length: CrcLength) -> Result<(), Self::CrcLengthErrorType> {
        match crc_length {
            CrcLength::Disabled => self.clear_bit(registers::CONFIG, mnemonics::EN_CRC),
            // no 8 bit CRC on this chip
            CrcLength::Bit8 => Ok(()),
            CrcLength::Bit16 => self.set_bit(registers::CONFIG, mnemonics::EN_CRC),
        }
    }

    fn get_crc_length(&mut self) -> Result<CrcLength, Self::CrcLengthErrorType> {
        Ok(Config::from_bits(self.read_register(registers::CONFIG)?).crc_length())
    }
}
