use embedded_hal::{
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use super::{constants::registers, Xn297, Xn297Error};
use crate::{
    radio::{
        handlers::{OnDebug, OnReceive},
        prelude::{RadioRegisters, RadioStatus},
    },
    StatusFlags,
};

impl<SPI, DO, DI, RX, DBG> RadioStatus for Xn297<SPI, DO, DI, RX, DBG>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DI: InputPin,
    RX: OnReceive<SPI>,
    DBG: OnDebug,
{
    type StatusErrorType = Xn297Error<SPI::Error, DO::Error, DI::Error>;

    fn get_status_flags(&mut self) -> Result<StatusFlags, Self::StatusErrorType> {
        Ok(StatusFlags::from_bits(
            self.read_register(registers::STATUS)?,
        ))
    }

    /// This is a single write (not a read-modify-write), so flags raised
    /// by the radio in the meantime are never cleared by accident.
    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType> {
        self.write_register(
            registers::STATUS,
            flags.into_bits() & StatusFlags::IRQ_MASK,
        )
    }
}
