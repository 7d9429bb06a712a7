//! A software (bit-banged) SPI transport for the XN297L.
//!
//! The radio samples its data line on the rising clock edge and expects the
//! most significant bit first. [`BitBangSpi`] drives three output pins
//! (clock, data-out and chip-select) and samples one input pin (data-in)
//! with fixed microsecond delays, and exposes the result as an
//! [`SpiDevice`] so the radio driver does not care how bytes reach the chip.
use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin, PinState},
    spi::{self, ErrorKind, Operation, SpiDevice},
};

/// The time (in microseconds) held after every edge of a transfer.
pub const SETTLE_DELAY_US: u32 = 1;

/// Reverse the order of bits in a byte.
///
/// This is an involution: `bit_reverse(bit_reverse(b)) == b`.
pub const fn bit_reverse(byte: u8) -> u8 {
    byte.reverse_bits()
}

/// An collection of error types to describe pin failures during a transfer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitBangError<DO, DI> {
    /// Represents a DigitalOutput error (clock, data-out or chip-select).
    Gpo(DO),
    /// Represents a DigitalInput error (data-in).
    Gpi(DI),
}

impl<DO, DI> spi::Error for BitBangError<DO, DI>
where
    DO: core::fmt::Debug,
    DI: core::fmt::Debug,
{
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// A bit-banged SPI bus with its own chip-select line.
///
/// The clock idles low (SPI mode 0). Data-out is driven before the rising edge
/// and held through the high phase; data-in is sampled right after the clock rises.
pub struct BitBangSpi<DO, DI, DELAY> {
    sck: DO,
    mosi: DO,
    csn: DO,
    miso: DI,
    delay: DELAY,
}

impl<DO, DI, DELAY> BitBangSpi<DO, DI, DELAY>
where
    DO: OutputPin,
    DI: InputPin,
    DELAY: DelayNs,
{
    /// Instantiate a [`BitBangSpi`] object from the given pins.
    ///
    /// No pin is touched until [`BitBangSpi::init()`] is called.
    pub fn new(sck: DO, mosi: DO, miso: DI, csn: DO, delay: DELAY) -> Self {
        Self {
            sck,
            mosi,
            csn,
            miso,
            delay,
        }
    }

    /// Drive the idle levels: chip-select released (HIGH), clock LOW and data-out LOW.
    pub fn init(&mut self) -> Result<(), BitBangError<DO::Error, DI::Error>> {
        self.csn.set_high().map_err(BitBangError::Gpo)?;
        self.sck.set_low().map_err(BitBangError::Gpo)?;
        self.mosi.set_low().map_err(BitBangError::Gpo)
    }

    /// Clock one byte out on data-out while clocking one byte in from data-in.
    ///
    /// The caller is responsible for holding chip-select LOW.
    /// The outgoing byte is bit-reversed first, so shifting it right one bit at a
    /// time puts its most significant bit on the wire first.
    /// The returned byte is assembled MSB first from the 8 samples.
    pub fn transfer_byte(&mut self, byte: u8) -> Result<u8, BitBangError<DO::Error, DI::Error>> {
        let mut out = bit_reverse(byte);
        let mut received = 0u8;
        for _ in 0..8 {
            self.mosi
                .set_state(PinState::from(out & 1 == 1))
                .map_err(BitBangError::Gpo)?;
            out >>= 1;
            self.delay.delay_us(SETTLE_DELAY_US);

            self.sck.set_high().map_err(BitBangError::Gpo)?;
            let bit = self.miso.is_high().map_err(BitBangError::Gpi)?;
            received = (received << 1) | bit as u8;
            self.delay.delay_us(SETTLE_DELAY_US);

            self.sck.set_low().map_err(BitBangError::Gpo)?;
            self.delay.delay_us(SETTLE_DELAY_US);
        }
        Ok(received)
    }

    /// Release the pins and delay implementation.
    ///
    /// Returns `(sck, mosi, miso, csn, delay)`.
    pub fn release(self) -> (DO, DO, DI, DO, DELAY) {
        (self.sck, self.mosi, self.miso, self.csn, self.delay)
    }

    fn run(
        &mut self,
        operations: &mut [Operation<'_, u8>],
    ) -> Result<(), BitBangError<DO::Error, DI::Error>> {
        for operation in operations.iter_mut() {
            match operation {
                Operation::Read(words) => {
                    for word in words.iter_mut() {
                        *word = self.transfer_byte(0)?;
                    }
                }
                Operation::Write(words) => {
                    for word in words.iter() {
                        self.transfer_byte(*word)?;
                    }
                }
                Operation::Transfer(read, write) => {
                    for i in 0..read.len().max(write.len()) {
                        let word = self.transfer_byte(write.get(i).copied().unwrap_or(0))?;
                        if let Some(slot) = read.get_mut(i) {
                            *slot = word;
                        }
                    }
                }
                Operation::TransferInPlace(words) => {
                    for word in words.iter_mut() {
                        *word = self.transfer_byte(*word)?;
                    }
                }
                Operation::DelayNs(ns) => self.delay.delay_ns(*ns),
            }
        }
        Ok(())
    }
}

impl<DO, DI, DELAY> spi::ErrorType for BitBangSpi<DO, DI, DELAY>
where
    DO: OutputPin,
    DI: InputPin,
{
    type Error = BitBangError<DO::Error, DI::Error>;
}

impl<DO, DI, DELAY> SpiDevice for BitBangSpi<DO, DI, DELAY>
where
    DO: OutputPin,
    DI: InputPin,
    DELAY: DelayNs,
{
    /// Frame all `operations` with one chip-select assertion.
    ///
    /// Chip-select is released even if a pin fails mid-transaction.
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        self.csn.set_low().map_err(BitBangError::Gpo)?;
        let result = self.run(operations);
        let released = self.csn.set_high().map_err(BitBangError::Gpo);
        result?;
        released
    }
}
