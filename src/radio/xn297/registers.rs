use embedded_hal::{
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use super::{constants::commands, Xn297, Xn297Error};
use crate::radio::{
    handlers::{OnDebug, OnReceive, RegisterValue},
    prelude::RadioRegisters,
};

impl<SPI, DO, DI, RX, DBG> RadioRegisters for Xn297<SPI, DO, DI, RX, DBG>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DI: InputPin,
    RX: OnReceive<SPI>,
    DBG: OnDebug,
{
    type RegistersErrorType = Xn297Error<SPI::Error, DO::Error, DI::Error>;

    fn read_register(&mut self, register: u8) -> Result<u8, Self::RegistersErrorType> {
        let mut value = [0u8];
        self.read_register_buf(register, &mut value)?;
        Ok(value[0])
    }

    fn read_register_buf(
        &mut self,
        register: u8,
        buf: &mut [u8],
    ) -> Result<(), Self::RegistersErrorType> {
        self.spi_read(register | commands::R_REGISTER, buf)?;
        self._on_debug
            .on_debug(format_args!("{:02X} -> {}", register, RegisterValue(buf)));
        Ok(())
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::RegistersErrorType> {
        self.write_register_buf(register, &[value])
    }

    fn write_register_buf(
        &mut self,
        register: u8,
        buf: &[u8],
    ) -> Result<(), Self::RegistersErrorType> {
        self._on_debug
            .on_debug(format_args!("{:02X} <- {}", register, RegisterValue(buf)));
        self.spi_write(register | commands::W_REGISTER, buf)
    }

    fn write_command(&mut self, command: u8, data: &[u8]) -> Result<(), Self::RegistersErrorType> {
        self.spi_write(command, data)
    }

    fn set_bit(&mut self, register: u8, bit: u8) -> Result<(), Self::RegistersErrorType> {
        let value = self.read_register(register)?;
        self.write_register(register, value | (1 << bit))
    }

    fn clear_bit(&mut self, register: u8, bit: u8) -> Result<(), Self::RegistersErrorType> {
        let value = self.read_register(register)?;
        self.write_register(register, value & !(1 << bit))
    }

    fn read_bit(&mut self, register: u8, bit: u8) -> Result<u8, Self::RegistersErrorType> {
        Ok((self.read_register(register)? >> bit) & 1)
    }
}
