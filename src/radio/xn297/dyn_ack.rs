use embedded_hal::{
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use super::{
    constants::{mnemonics, registers},
    Xn297, Xn297Error,
};
use crate::radio::{
    handlers::{OnDebug, OnReceive},
    prelude::{RadioDynAck, RadioRegisters},
};

impl<SPI, DO, DI, RX, DBG> RadioDynAck for Xn297<SPI, DO, DI, RX, DBG>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DI: InputPin,
    RX: OnReceive<SPI>,
    DBG: OnDebug,
{
    type DynAckErrorType = Xn297Error<SPI::Error, DO::Error, DI::Error>;

    fn enable_dyn_ack(&mut self) -> Result<(), Self::DynAckErrorType> {
        self.set_bit(registers::FEATURE, mnemonics::EN_DYN_ACK)
    }

    fn disable_dyn_ack(&mut self) -> Result<(), Self::DynAckErrorType> {
        self.clear_bit(registers::FEATURE, mnemonics::EN_DYN_ACK)
    }
}
