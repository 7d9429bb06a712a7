use embedded_hal::{
    digital::{InputPin, OutputPin},
    spi::{Operation, SpiDevice},
};
pub(crate) mod bit_fields;
mod channel;
pub mod constants;
mod crc_length;
mod data_rate;
mod details;
mod dyn_ack;
mod init;
mod payload;
mod power;
mod radio;
mod registers;
mod status;

use super::handlers::{NoDebug, NoReceive, OnDebug, OnReceive};

/// An collection of error types to describe hardware malfunctions.
///
/// The driver adds no failure modes of its own; every variant wraps
/// an error reported by the HAL.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Xn297Error<SPI, DO, DI> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a DigitalOutput error (the CE pin).
    Gpo(DO),
    /// Represents a DigitalInput error (the IRQ pin).
    Gpi(DI),
}

/// This struct implements the [`Radio*` traits](mod@crate::radio::prelude)
/// for the XN297L transceiver.
///
/// The radio holds no copy of the chip's state. Every query reads the chip.
pub struct Xn297<SPI, DO, DI, RX = NoReceive, DBG = NoDebug> {
    _spi: SPI,
    /// The CE pin for the radio.
    ///
    /// It is recommended to use [`Xn297::ce_high()`] and [`Xn297::ce_low()`],
    /// or to let [`Xn297::set_mode_rx()`](fn@crate::radio::prelude::RadioReceive::set_mode_rx)
    /// drive it.
    pub ce_pin: DO,
    _irq_pin: DI,
    _on_receive: RX,
    _on_debug: DBG,
}

impl<SPI, DO, DI> Xn297<SPI, DO, DI>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DI: InputPin,
{
    /// Instantiate an [`Xn297`] object for use on the specified
    /// `spi` bus with the given `ce_pin` and `irq_pin`.
    ///
    /// The radio's CSN pin (aka Chip Select pin) shall be defined
    /// when instantiating the [`SpiDevice`](trait@embedded_hal::spi::SpiDevice)
    /// object (passed to the `spi` parameter).
    /// To drive the radio over plain GPIO pins, use
    /// [`Xn297Pins::bind()`](fn@crate::pins::Xn297Pins::bind) instead.
    ///
    /// No pin is touched and nothing is sent to the radio.
    pub fn new(spi: SPI, ce_pin: DO, irq_pin: DI) -> Xn297<SPI, DO, DI> {
        Xn297 {
            _spi: spi,
            ce_pin,
            _irq_pin: irq_pin,
            _on_receive: NoReceive,
            _on_debug: NoDebug,
        }
    }
}

impl<SPI, DO, DI, RX, DBG> Xn297<SPI, DO, DI, RX, DBG>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DI: InputPin,
    RX: OnReceive<SPI>,
    DBG: OnDebug,
{
    /// Replace the handler called by
    /// [`poll()`](fn@crate::radio::prelude::RadioReceive::poll)
    /// when the radio flags received data.
    ///
    /// ```ignore
    /// let mut radio = radio.with_on_receive(|rx: &mut RxFifo<'_, _>| {
    ///     let mut buf = [0u8; 32];
    ///     let len = (rx.payload_width()? as usize).min(buf.len());
    ///     rx.read_payload(&mut buf[..len])
    /// });
    /// ```
    pub fn with_on_receive<H: OnReceive<SPI>>(self, handler: H) -> Xn297<SPI, DO, DI, H, DBG> {
        Xn297 {
            _spi: self._spi,
            ce_pin: self.ce_pin,
            _irq_pin: self._irq_pin,
            _on_receive: handler,
            _on_debug: self._on_debug,
        }
    }

    /// Replace the sink that receives diagnostic lines.
    ///
    /// Every register read and write is traced through this sink, as is the
    /// output of [`print_details()`](fn@crate::radio::prelude::RadioDetails::print_details).
    pub fn with_on_debug<D: OnDebug>(self, sink: D) -> Xn297<SPI, DO, DI, RX, D> {
        Xn297 {
            _spi: self._spi,
            ce_pin: self.ce_pin,
            _irq_pin: self._irq_pin,
            _on_receive: self._on_receive,
            _on_debug: sink,
        }
    }

    /// Release the SPI bus and pins. The handlers are dropped.
    ///
    /// Returns `(spi, ce_pin, irq_pin)`.
    pub fn release(self) -> (SPI, DO, DI) {
        (self._spi, self.ce_pin, self._irq_pin)
    }

    /// Drive the CE pin HIGH.
    pub fn ce_high(&mut self) -> Result<(), Xn297Error<SPI::Error, DO::Error, DI::Error>> {
        self.ce_pin.set_high().map_err(Xn297Error::Gpo)
    }

    /// Drive the CE pin LOW.
    pub fn ce_low(&mut self) -> Result<(), Xn297Error<SPI::Error, DO::Error, DI::Error>> {
        self.ce_pin.set_low().map_err(Xn297Error::Gpo)
    }

    /// Is the radio asserting its IRQ pin?
    ///
    /// The IRQ pin is active LOW.
    pub fn is_irq_active(&mut self) -> Result<bool, Xn297Error<SPI::Error, DO::Error, DI::Error>> {
        self._irq_pin.is_low().map_err(Xn297Error::Gpi)
    }

    /// Send `command`, then read `buf.len()` bytes into `buf`, in one transaction.
    fn spi_read(
        &mut self,
        command: u8,
        buf: &mut [u8],
    ) -> Result<(), Xn297Error<SPI::Error, DO::Error, DI::Error>> {
        self._spi
            .transaction(&mut [Operation::Write(&[command]), Operation::Read(buf)])
            .map_err(Xn297Error::Spi)
    }

    /// Send `command`, then all of `buf`, in one transaction.
    fn spi_write(
        &mut self,
        command: u8,
        buf: &[u8],
    ) -> Result<(), Xn297Error<SPI::Error, DO::Error, DI::Error>> {
        self._spi
            .transaction(&mut [Operation::Write(&[command]), Operation::Write(buf)])
            .map_err(Xn297Error::Spi)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    use super::Xn297Error;
    use crate::sim::{sim_radio, SimPin};
    use crate::test::{mk_radio, mk_radio_with_irq};
    use embedded_hal::digital::{InputPin, OutputPin};
    use embedded_hal_mock::eh1::{
        digital::{State as PinState, Transaction as PinTransaction},
        spi::Transaction as SpiTransaction,
        MockError,
    };
    use std::io::ErrorKind;

    #[test]
    fn ce_pin() {
        let ce_expectations = [
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ];
        let mut mocks = mk_radio(&ce_expectations, &[]);
        mocks.0.ce_high().unwrap();
        mocks.0.ce_low().unwrap();
        mocks.done();
    }

    #[test]
    fn ce_pin_error() {
        let ce_expectations = [PinTransaction::set(PinState::High)
            .with_error(MockError::Io(ErrorKind::NotConnected))];
        let mut mocks = mk_radio(&ce_expectations, &[]);
        assert!(matches!(mocks.0.ce_high(), Err(Xn297Error::Gpo(_))));
        mocks.done();
    }

    #[test]
    fn irq_is_active_low() {
        let irq_expectations = [
            PinTransaction::get(PinState::Low),
            PinTransaction::get(PinState::High),
        ];
        let mut mocks = mk_radio_with_irq(&[], &irq_expectations, &[]);
        assert!(mocks.0.is_irq_active().unwrap());
        assert!(!mocks.0.is_irq_active().unwrap());
        mocks.done();
    }

    #[test]
    fn new_touches_nothing() {
        let mut mocks = mk_radio(&[], &[] as &[SpiTransaction<u8>]);
        mocks.done();
    }

    #[test]
    fn release_returns_bus_and_pins() {
        let (radio, chip, ce_pin) = sim_radio();
        let (_spi, mut ce, mut irq): (_, SimPin, SimPin) = radio.release();
        ce.set_high().unwrap();
        assert_eq!(ce_pin.levels(), std::vec![true]);
        assert!(irq.is_high().unwrap());
        assert!(chip.frames().is_empty());
    }
}
