use super::{constants::INIT_SEQUENCE, Xn297, Xn297Error};
use crate::radio::{
    handlers::{OnDebug, OnReceive},
    prelude::{
        RadioChannel, RadioCrcLength, RadioDataRate, RadioDynAck, RadioInit, RadioPayload,
        RadioReceive, RadioRegisters,
    },
    RadioConfig,
};
use embedded_hal::{
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use super::constants::registers;

impl<SPI, DO, DI, RX, DBG> RadioInit for Xn297<SPI, DO, DI, RX, DBG>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DI: InputPin,
    RX: OnReceive<SPI>,
    DBG: OnDebug,
{
    type InitErrorType = Xn297Error<SPI::Error, DO::Error, DI::Error>;

    /// Write [`INIT_SEQUENCE`](crate::radio::constants::INIT_SEQUENCE) while CE is LOW,
    /// then drive CE HIGH.
    fn begin(&mut self) -> Result<(), Self::InitErrorType> {
        self.ce_low()?;
        for write in INIT_SEQUENCE.iter() {
            self.write_register_buf(write.register, write.value)?;
        }
        self.ce_high()
    }

    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::InitErrorType> {
        self.ce_low()?;
        self.set_channel(config.channel())?;
        self.set_data_rate(config.data_rate())?;
        self.set_crc_length(config.crc_length())?;
        if config.dyn_ack() {
            self.enable_dyn_ack()?;
        } else {
            self.disable_dyn_ack()?;
        }
        for pipe in 0..6 {
            self.set_rx_payload_width(pipe, config.rx_payload_width(pipe))?;
        }
        let mut address = [0u8; 5];
        config.rx_address(0, &mut address);
        self.write_register_buf(registers::RX_ADDR_P0, &address)?;
        config.rx_address(1, &mut address);
        self.write_register_buf(registers::RX_ADDR_P1, &address)?;
        self.set_mode_rx()
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    use super::{registers, RadioInit};
    use crate::radio::prelude::{
        RadioChannel, RadioCrcLength, RadioDataRate, RadioPower, RadioReceive,
    };
    use crate::radio::RadioConfig;
    use crate::sim::{sim_radio, Frame};
    use crate::{spi_test_expects, test::mk_radio, CrcLength, DataRate};
    use embedded_hal_mock::eh1::{
        digital::{State as PinState, Transaction as PinTransaction},
        spi::Transaction as SpiTransaction,
    };
    use std::{vec, vec::Vec};

    fn recipe() -> Vec<Frame> {
        vec![
            Frame::new(0x20, &[0x8E]),
            Frame::new(0x27, &[0x70]),
            Frame::new(0x3D, &[0x00]),
            Frame::new(0x3F, &[0x0A, 0x6D, 0x67, 0x9C, 0x46]),
            Frame::new(0x3E, &[0xF6, 0x37, 0x5D]),
            Frame::new(0x39, &[0x01]),
            Frame::new(0x3A, &[0x45, 0x21, 0xEF, 0x2C, 0x5A, 0x40]),
            Frame::new(0x3B, &[0x0B, 0xDF, 0x02]),
            Frame::new(0x21, &[0x03]),
            Frame::new(0x22, &[0x03]),
            Frame::new(0x23, &[0x03]),
            Frame::new(0x24, &[0x02]),
            Frame::new(0x26, &[0x3F]),
            Frame::new(0x31, &[0x02]),
            Frame::new(0x32, &[0x02]),
            Frame::new(0x3C, &[0x00]),
            Frame::new(0x2A, &[0xA7, 0x93, 0xB4, 0x55, 0xAA]),
            Frame::new(0x2B, &[0x81, 0xC6, 0xB2, 0xAA, 0x55]),
            Frame::new(0x25, &[0x31]),
            Frame::new(0x20, &[0x8F]),
        ]
    }

    #[test]
    fn begin_bus_sequence() {
        let ce_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let spi_expectations: Vec<SpiTransaction<u8>> = recipe()
            .into_iter()
            .flat_map(|frame| spi_test_expects![write(frame.command, frame.data)])
            .collect();
        let mut mocks = mk_radio(&ce_expectations, &spi_expectations);
        mocks.0.begin().unwrap();
        mocks.done();
    }

    #[test]
    fn begin_against_register_file() {
        let (mut radio, chip, ce_pin) = sim_radio();
        // pending flags are cleared by the recipe
        chip.set_register(registers::STATUS, 0x70);
        radio.begin().unwrap();

        assert_eq!(chip.frames(), recipe());
        assert_eq!(ce_pin.levels(), vec![false, true]);

        assert_eq!(chip.register(registers::STATUS), 0);
        assert_eq!(chip.register(registers::CONFIG), 0x8F);
        assert_eq!(
            chip.register_buf(registers::RX_ADDR_P0)[..5],
            [0xA7, 0x93, 0xB4, 0x55, 0xAA]
        );
        assert_eq!(
            chip.register_buf(registers::RX_ADDR_P1)[..5],
            [0x81, 0xC6, 0xB2, 0xAA, 0x55]
        );
        assert!(radio.is_powered().unwrap());
        assert!(radio.is_rx().unwrap());
        assert_eq!(radio.get_channel().unwrap(), 0x31);
        assert_eq!(radio.get_data_rate().unwrap(), DataRate::Mbps1);
        assert_eq!(radio.get_crc_length().unwrap(), CrcLength::Bit16);
    }

    #[test]
    fn default_config_matches_begin() {
        let (mut radio, chip, _ce) = sim_radio();
        radio.begin().unwrap();
        let mut after_begin = [[0u8; 6]; 0x20];
        for (register, value) in after_begin.iter_mut().enumerate() {
            *value = chip.register_buf(register as u8);
        }
        radio.with_config(&RadioConfig::default()).unwrap();
        for (register, value) in after_begin.iter().enumerate() {
            // pipes 2 - 5 get a payload width that begin() leaves alone
            if (0x13..=0x16).contains(&register) {
                continue;
            }
            assert_eq!(chip.register_buf(register as u8), *value);
        }
    }

    #[test]
    fn apply_config() {
        let (mut radio, chip, ce_pin) = sim_radio();
        radio.begin().unwrap();
        let config = RadioConfig::default()
            .with_channel(42)
            .with_data_rate(DataRate::Kbps250)
            .with_crc_length(CrcLength::Disabled)
            .with_dyn_ack(true)
            .with_rx_payload_width(9, 16)
            .with_rx_address(1, &[1, 2, 3, 4, 5]);
        radio.with_config(&config).unwrap();

        assert_eq!(radio.get_channel().unwrap(), 42);
        assert_eq!(radio.get_data_rate().unwrap(), DataRate::Kbps250);
        assert_eq!(radio.get_crc_length().unwrap(), CrcLength::Disabled);
        assert_eq!(chip.register(registers::FEATURE) & 1, 1);
        assert_eq!(chip.register(registers::RX_PW_P0 + 3), 16);
        assert_eq!(chip.register(registers::RX_PW_P0), 2);
        assert_eq!(
            chip.register_buf(registers::RX_ADDR_P1)[..5],
            [1, 2, 3, 4, 5]
        );
        assert!(radio.is_rx().unwrap());
        // begin() then with_config(): CE is low while configuring, high at the end
        assert_eq!(ce_pin.levels(), vec![false, true, false, false, true]);
    }
}
