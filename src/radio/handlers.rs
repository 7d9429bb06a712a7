//! Handlers a [`Xn297`](crate::radio::Xn297) invokes synchronously.
//!
//! Both kinds of handler are owned by the radio and can be replaced with
//! [`Xn297::with_on_receive()`](fn@crate::radio::Xn297::with_on_receive) and
//! [`Xn297::with_on_debug()`](fn@crate::radio::Xn297::with_on_debug).
//! By default, both do nothing.
use core::fmt::{self, Display, Formatter};

use embedded_hal::spi::{Operation, SpiDevice};

use super::constants::commands;

/// Access to the radio's RX FIFO while a receive handler runs.
pub struct RxFifo<'a, SPI> {
    spi: &'a mut SPI,
}

impl<'a, SPI: SpiDevice> RxFifo<'a, SPI> {
    pub(crate) fn new(spi: &'a mut SPI) -> Self {
        Self { spi }
    }

    /// Get the length of the payload at the top of the RX FIFO.
    pub fn payload_width(&mut self) -> Result<u8, SPI::Error> {
        let mut width = [0u8];
        self.spi.transaction(&mut [
            Operation::Write(&[commands::R_RX_PL_WID]),
            Operation::Read(&mut width),
        ])?;
        Ok(width[0])
    }

    /// Read `dest.len()` bytes of the payload at the top of the RX FIFO.
    pub fn read_payload(&mut self, dest: &mut [u8]) -> Result<(), SPI::Error> {
        self.spi.transaction(&mut [
            Operation::Write(&[commands::R_RX_PAYLOAD]),
            Operation::Read(dest),
        ])
    }
}

/// A handler called by [`poll()`](fn@crate::radio::prelude::RadioReceive::poll)
/// when the radio flagged received data.
///
/// The handler is expected to read the pending payload with the given [`RxFifo`].
/// Closures of the form `FnMut(&mut RxFifo<'_, SPI>) -> Result<(), SPI::Error>`
/// are handlers.
pub trait OnReceive<SPI: SpiDevice> {
    fn on_receive(&mut self, rx: &mut RxFifo<'_, SPI>) -> Result<(), SPI::Error>;
}

impl<SPI, F> OnReceive<SPI> for F
where
    SPI: SpiDevice,
    F: FnMut(&mut RxFifo<'_, SPI>) -> Result<(), SPI::Error>,
{
    fn on_receive(&mut self, rx: &mut RxFifo<'_, SPI>) -> Result<(), SPI::Error> {
        self(rx)
    }
}

/// The default receive handler. It leaves the payload in the RX FIFO.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoReceive;

impl<SPI: SpiDevice> OnReceive<SPI> for NoReceive {
    fn on_receive(&mut self, _rx: &mut RxFifo<'_, SPI>) -> Result<(), SPI::Error> {
        Ok(())
    }
}

/// A sink for the radio's diagnostic lines (one call per line).
///
/// Closures of the form `FnMut(fmt::Arguments<'_>)` are sinks.
pub trait OnDebug {
    fn on_debug(&mut self, line: fmt::Arguments<'_>);
}

impl<F> OnDebug for F
where
    F: FnMut(fmt::Arguments<'_>),
{
    fn on_debug(&mut self, line: fmt::Arguments<'_>) {
        self(line)
    }
}

/// The default diagnostic sink. It discards every line.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDebug;

impl OnDebug for NoDebug {
    fn on_debug(&mut self, _line: fmt::Arguments<'_>) {}
}

/// A diagnostic sink that prints every line to stdout.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default)]
pub struct PrintDebug;

#[cfg(feature = "std")]
impl OnDebug for PrintDebug {
    fn on_debug(&mut self, line: fmt::Arguments<'_>) {
        std::println!("{line}");
    }
}

/// A diagnostic sink that logs every line with `defmt` at debug level.
#[cfg(feature = "defmt")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DefmtDebug;

#[cfg(feature = "defmt")]
impl OnDebug for DefmtDebug {
    fn on_debug(&mut self, line: fmt::Arguments<'_>) {
        defmt::debug!("{}", defmt::Display2Format(&line));
    }
}

/// Formats a register value for a trace line.
///
/// A single byte shows as binary, longer values as space separated hex.
pub(crate) struct RegisterValue<'a>(pub &'a [u8]);

impl Display for RegisterValue<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let [byte] = self.0 {
            return write!(f, "{byte:08b}");
        }
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}
