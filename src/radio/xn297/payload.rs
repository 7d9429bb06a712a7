use embedded_hal::{
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use super::{
    constants::{mnemonics, registers},
    Xn297, Xn297Error,
};
use crate::radio::{
    handlers::{OnDebug, OnReceive, RxFifo},
    prelude::{RadioPayload, RadioRegisters},
};

impl<SPI, DO, DI, RX, DBG> RadioPayload for Xn297<SPI, DO, DI, RX, DBG>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DI: InputPin,
    RX: OnReceive<SPI>,
    DBG: OnDebug,
{
    type PayloadErrorType = Xn297Error<SPI::Error, DO::Error, DI::Error>;

    fn set_rx_payload_width(&mut self, pipe: u8, width: u8) -> Result<(), Self::PayloadErrorType> {
        self.write_register(registers::RX_PW_P0 + pipe % 6, width)
    }

    fn read_rx_payload_width(&mut self) -> Result<u8, Self::PayloadErrorType> {
        RxFifo::new(&mut self._spi)
            .payload_width()
            .map_err(Xn297Error::Spi)
    }

    fn read_rx_payload(&mut self, buf: &mut [u8]) -> Result<(), Self::PayloadErrorType> {
        RxFifo::new(&mut self._spi)
            .read_payload(buf)
            .map_err(Xn297Error::Spi)
    }

    fn is_rx_fifo_empty(&mut self) -> Result<bool, Self::PayloadErrorType> {
        Ok(self.read_bit(registers::FIFO_STATUS, mnemonics::RX_EMPTY)? == 1)
    }
}
