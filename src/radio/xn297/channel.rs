use super::{constants::registers, Xn297, Xn297Error};
use crate::radio::{
    handlers::{OnDebug, OnReceive},
    prelude::{RadioChannel, RadioRegisters},
};
use embedded_hal::{
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

impl<SPI, DO, DI, RX, DBG> RadioChannel for Xn297<SPI, DO, DI, RX, DBG>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DI: InputPin,
    RX: OnReceive<SPI>,
    DBG: OnDebug,
{
    type ChannelErrorType = Xn297Error<SPI::Error, DO::Error, DI::Error>;

    /// The given `channel` is written to the RF_CH register unchanged.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType> {
        self.write_register(registers::RF_CH, channel)
    }

    /// See also [`Xn297::set_channel()`](fn@crate::radio::prelude::RadioChannel::set_channel).
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType> {
        self.read_register(registers::RF_CH)
    }
}
