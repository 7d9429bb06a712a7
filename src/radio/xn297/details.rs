use super::{
    bit_fields::Config,
    constants::{mnemonics, registers},
    Xn297, Xn297Error,
};
use crate::radio::{
    handlers::{OnDebug, OnReceive},
    prelude::{RadioChannel, RadioDataRate, RadioDetails, RadioRegisters},
};
use embedded_hal::{
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

impl<SPI, DO, DI, RX, DBG> RadioDetails for Xn297<SPI, DO, DI, RX, DBG>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DI: InputPin,
    RX: OnReceive<SPI>,
    DBG: OnDebug,
{
    type DetailsErrorType = Xn297Error<SPI::Error, DO::Error, DI::Error>;

    /// Every register read made here is also traced, so the sink sees the raw
    /// register values next to their decoded meaning.
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        self._on_debug
            .on_debug(format_args!("---------- settings ----------"));

        let irq_active = self.is_irq_active()?;
        self._on_debug
            .on_debug(format_args!("IRQ pin active____________{irq_active}"));

        let channel = self.get_channel()?;
        self._on_debug.on_debug(format_args!(
            "Channel___________________{} ~ {} MHz",
            channel,
            channel as u16 + 2400
        ));

        let data_rate = self.get_data_rate()?;
        self._on_debug
            .on_debug(format_args!("RF Data Rate______________{data_rate}"));

        let config = Config::from_bits(self.read_register(registers::CONFIG)?);
        self._on_debug.on_debug(format_args!(
            "CRC Length________________{}",
            config.crc_length()
        ));
        self._on_debug
            .on_debug(format_args!("Powered___________________{}", config.power()));
        self._on_debug.on_debug(format_args!(
            "Primary mode______________{}",
            if config.is_rx() { "RX" } else { "TX" }
        ));

        let dyn_ack = self.read_bit(registers::FEATURE, mnemonics::EN_DYN_ACK)? == 1;
        self._on_debug
            .on_debug(format_args!("Dynamic ack_______________{dyn_ack}"));

        let mut buf = [0u8; 5];
        self.read_register_buf(registers::CONFIG, &mut buf[..1])?;
        self.read_register_buf(registers::DEMOD_CAL, &mut buf[..1])?;
        self.read_register_buf(registers::RF_CAL, &mut buf[..3])?;
        self.read_register_buf(registers::BB_CAL, &mut buf)?;
        self.read_register_buf(registers::RX_ADDR_P0, &mut buf)?;
        self.read_register_buf(registers::RX_ADDR_P1, &mut buf)?;

        self._on_debug
            .on_debug(format_args!("---------- end ----------"));
        Ok(())
    }
}
