//! Binding plain GPIO pins to the radio.
//!
//! ```ignore
//! use xn297::{pins::Xn297Pins, radio::prelude::*};
//!
//! let pins = Xn297Pins { sck, mosi, miso, csn, ce, irq };
//! let mut radio = pins.bind(delay)?;
//! radio.begin()?;
//! loop {
//!     radio.poll()?;
//! }
//! ```
use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};

use crate::{
    bitbang::{BitBangError, BitBangSpi},
    radio::{Xn297, Xn297Error},
};

/// A radio driven over a [`BitBangSpi`] bus.
pub type BitBangXn297<DO, DI, DELAY> = Xn297<BitBangSpi<DO, DI, DELAY>, DO, DI>;

/// The six pins wired to the radio.
///
/// All output pins share one type (`DO`) and both input pins share another
/// (`DI`). HAL crates usually offer a type-erased pin for this.
pub struct Xn297Pins<DO, DI> {
    /// The SPI clock (output).
    pub sck: DO,
    /// Data from the host to the radio (output).
    pub mosi: DO,
    /// Data from the radio to the host (input).
    pub miso: DI,
    /// The SPI chip-select (output, active LOW).
    pub csn: DO,
    /// The radio's chip-enable (output).
    pub ce: DO,
    /// The radio's interrupt line (input, active LOW).
    pub irq: DI,
}

impl<DO, DI> Xn297Pins<DO, DI>
where
    DO: OutputPin,
    DI: InputPin,
{
    /// Drive every output to its idle level and build the radio.
    ///
    /// The levels are driven in this order: CE LOW, CSN HIGH, SCK LOW, MOSI LOW.
    /// Nothing is sent to the radio; call
    /// [`begin()`](fn@crate::radio::prelude::RadioInit::begin) next.
    pub fn bind<DELAY: DelayNs>(
        self,
        delay: DELAY,
    ) -> Result<
        BitBangXn297<DO, DI, DELAY>,
        Xn297Error<BitBangError<DO::Error, DI::Error>, DO::Error, DI::Error>,
    > {
        let mut ce = self.ce;
        ce.set_low().map_err(Xn297Error::Gpo)?;
        let mut spi = BitBangSpi::new(self.sck, self.mosi, self.miso, self.csn, delay);
        spi.init().map_err(Xn297Error::Spi)?;
        Ok(Xn297::new(spi, ce, self.irq))
    }
}
