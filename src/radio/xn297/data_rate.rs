use embedded_hal::{
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use super::{
    constants::{mnemonics, registers},
    Xn297, Xn297Error,
};
use crate::{
    radio::{
        handlers::{OnDebug, OnReceive},
        prelude::{RadioDataRate, RadioRegisters},
    },
    DataRate,
};

impl<SPI, DO, DI, RX, DBG> RadioDataRate for Xn297<SPI, DO, DI, RX, DBG>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DI: InputPin,
    RX: OnReceive<SPI>,
    DBG: OnDebug,
{
    type DataRateErrorType = Xn297Error<SPI::Error, DO::Error, DI::Error>;

    /// Each bit of the data rate field is changed with its own read-modify-write.
    /// The reserved combination (high bit set, low bit clear) is never written
    /// as a final state.
    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType> {
        match data_rate {
            DataRate::Mbps2 => {
                self.set_bit(registers::RF_SETUP, mnemonics::RF_DR_LOW)?;
                self.clear_bit(registers::RF_SETUP, mnemonics::RF_DR_HIGH)
            }
            DataRate::Mbps1 => {
                self.clear_bit(registers::RF_SETUP, mnemonics::RF_DR_HIGH)?;
                self.clear_bit(registers::RF_SETUP, mnemonics::RF_DR_LOW)
            }
            DataRate::Kbps250 => {
                self.set_bit(registers::RF_SETUP, mnemonics::RF_DR_HIGH)?;
                self.set_bit(registers::RF_SETUP, mnemonics::RF_DR_LOW)
            }
        }
    }

    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType> {
        Ok(DataRate::from_bits(
            self.read_register(registers::RF_SETUP)?,
        ))
    }
}
