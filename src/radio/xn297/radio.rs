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
        handlers::{OnDebug, OnReceive, RxFifo},
        prelude::{RadioReceive, RadioRegisters, RadioStatus},
    },
    StatusFlags,
};

impl<SPI, DO, DI, RX, DBG> RadioReceive for Xn297<SPI, DO, DI, RX, DBG>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DI: InputPin,
    RX: OnReceive<SPI>,
    DBG: OnDebug,
{
    type ReceiveErrorType = Xn297Error<SPI::Error, DO::Error, DI::Error>;

    fn set_mode_rx(&mut self) -> Result<(), Self::ReceiveErrorType> {
        self.ce_low()?;
        self.set_bit(registers::CONFIG, mnemonics::PRIM_RX)?;
        self.ce_high()
    }

    fn is_rx(&mut self) -> Result<bool, Self::ReceiveErrorType> {
        Ok(Config::from_bits(self.read_register(registers::CONFIG)?).is_rx())
    }

    fn poll(&mut self) -> Result<bool, Self::ReceiveErrorType> {
        if self.read_bit(registers::STATUS, mnemonics::RX_DR)? == 0 {
            return Ok(false);
        }
        let mut rx = RxFifo::new(&mut self._spi);
        self._on_receive
            .on_receive(&mut rx)
            .map_err(Xn297Error::Spi)?;
        self.clear_status_flags(StatusFlags::default().with_rx_dr(true))?;
        Ok(true)
    }
}
