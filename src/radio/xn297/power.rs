use embedded_hal::{
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use super::{
    bit_fields::Config,
    constants::{mnemonics, registers},
    Xn297, Xn297Error,
};
use crate::radio::{
    handlers::{OnDebug, OnReceive},
    prelude::{RadioPower, RadioRegisters},
};

impl<SPI, DO, DI, RX, DBG> RadioPower for Xn297<SPI, DO, DI, RX, DBG>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DI: InputPin,
    RX: OnReceive<SPI>,
    DBG: OnDebug,
{
    type PowerErrorType = Xn297Error<SPI::Error, DO::Error, DI::Error>;

    fn power_up(&mut self) -> Result<(), Self::PowerErrorType> {
        self.set_bit(registers::CONFIG, mnemonics::PWR_UP)
    }

    /// The CE pin is left as is.
    fn shut_down(&mut self) -> Result<(), Self::PowerErrorType> {
        self.clear_bit(registers::CONFIG, mnemonics::PWR_UP)
    }

    fn is_powered(&mut self) -> Result<bool, Self::PowerErrorType> {
        Ok(Config::from_bits(self.read_register(registers::CONFIG)?).power())
    }
}
