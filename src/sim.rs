//! Simulated hardware used by unit tests.
//!
//! - [`Wire`] hands out pins and a delay that log every edge, sample and delay
//!   in order. Its data-in line loops back whatever data-out last drove.
//! - [`SimChip`] is an [`SpiDevice`] backed by a register file that behaves like
//!   the radio: STATUS is write-one-to-clear and the RX payload commands are served.
//! - [`SimPin`] is a level-holding pin for CE and IRQ.
use core::{cell::RefCell, convert::Infallible};
use embedded_hal::{
    delay::DelayNs,
    digital::{self, InputPin, OutputPin},
    spi::{self, Operation, SpiDevice},
};
use std::{rc::Rc, vec::Vec};

use crate::{
    bitbang::BitBangSpi,
    radio::{
        constants::{commands, registers},
        Xn297,
    },
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WireEvent {
    Sck(bool),
    Mosi(bool),
    Csn(bool),
    Ce(bool),
    Sample(bool),
    DelayUs(u32),
    DelayNs(u32),
}

#[derive(Clone, Copy)]
enum Role {
    Sck,
    Mosi,
    Csn,
    Miso,
    Ce,
    Irq,
}

#[derive(Default)]
struct WireState {
    events: Vec<WireEvent>,
    mosi: bool,
}

/// A shared log of everything done to the bit-banged bus.
#[derive(Clone, Default)]
pub struct Wire(Rc<RefCell<WireState>>);

impl Wire {
    /// A bus whose data-in echoes data-out.
    pub fn loopback() -> Self {
        Self::default()
    }

    pub fn bit_bang_spi(&self) -> BitBangSpi<WirePin, WirePin, WireDelay> {
        BitBangSpi::new(
            self.pin(Role::Sck),
            self.pin(Role::Mosi),
            self.pin(Role::Miso),
            self.pin(Role::Csn),
            WireDelay(self.clone()),
        )
    }

    /// A chip-enable pin whose levels are logged.
    pub fn ce_pin(&self) -> WirePin {
        self.pin(Role::Ce)
    }

    /// An interrupt pin that always reads HIGH (inactive).
    pub fn irq_pin(&self) -> WirePin {
        self.pin(Role::Irq)
    }

    pub fn events(&self) -> Vec<WireEvent> {
        self.0.borrow().events.clone()
    }

    fn pin(&self, role: Role) -> WirePin {
        WirePin {
            wire: self.clone(),
            role,
        }
    }

    fn log(&self, event: WireEvent) {
        self.0.borrow_mut().events.push(event);
    }
}

pub struct WirePin {
    wire: Wire,
    role: Role,
}

impl digital::ErrorType for WirePin {
    type Error = Infallible;
}

impl OutputPin for WirePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true);
        Ok(())
    }
}

impl WirePin {
    fn drive(&mut self, high: bool) {
        let event = match self.role {
            Role::Sck => WireEvent::Sck(high),
            Role::Mosi => {
                self.wire.0.borrow_mut().mosi = high;
                WireEvent::Mosi(high)
            }
            Role::Csn => WireEvent::Csn(high),
            Role::Ce => WireEvent::Ce(high),
            Role::Miso | Role::Irq => panic!("not an output"),
        };
        self.wire.log(event);
    }
}

impl InputPin for WirePin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        if let Role::Irq = self.role {
            return Ok(true);
        }
        let level = self.wire.0.borrow().mosi;
        self.wire.log(WireEvent::Sample(level));
        Ok(level)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|level| !level)
    }
}

pub struct WireDelay(Wire);

impl DelayNs for WireDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.log(WireEvent::DelayNs(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.0.log(WireEvent::DelayUs(us));
    }
}

/// One chip-select frame as seen by the simulated radio.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub command: u8,
    /// Bytes written to the radio, or bytes the radio answered with.
    pub data: Vec<u8>,
}

impl Frame {
    pub fn new(command: u8, data: &[u8]) -> Self {
        Self {
            command,
            data: data.to_vec(),
        }
    }

    pub fn is_write(&self) -> bool {
        self.command & 0xE0 == commands::W_REGISTER
    }
}

pub struct ChipState {
    pub registers: [[u8; 6]; 32],
    pub rx_payload: Vec<u8>,
    pub frames: Vec<Frame>,
}

impl ChipState {
    fn answer(&self, command: u8, offset: usize) -> u8 {
        match command {
            commands::R_RX_PL_WID => self.rx_payload.len() as u8,
            commands::R_RX_PAYLOAD => self.rx_payload.get(offset).copied().unwrap_or(0),
            reg if reg < commands::W_REGISTER => self.registers[reg as usize]
                .get(offset)
                .copied()
                .unwrap_or(0),
            _ => 0,
        }
    }

    fn commit(&mut self, command: u8, data: &[u8]) {
        if command & 0xE0 != commands::W_REGISTER || data.is_empty() {
            return;
        }
        let register = (command & 0x1F) as usize;
        if register == registers::STATUS as usize {
            self.registers[register][0] &= !data[0];
            return;
        }
        let len = data.len().min(6);
        self.registers[register][..len].copy_from_slice(&data[..len]);
    }
}

/// A register-file model of the radio.
#[derive(Clone)]
pub struct SimChip(Rc<RefCell<ChipState>>);

impl SimChip {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(ChipState {
            registers: [[0u8; 6]; 32],
            rx_payload: Vec::new(),
            frames: Vec::new(),
        })))
    }

    pub fn register(&self, register: u8) -> u8 {
        self.0.borrow().registers[register as usize][0]
    }

    pub fn set_register(&self, register: u8, value: u8) {
        self.0.borrow_mut().registers[register as usize][0] = value;
    }

    pub fn register_buf(&self, register: u8) -> [u8; 6] {
        self.0.borrow().registers[register as usize]
    }

    pub fn set_rx_payload(&self, payload: &[u8]) {
        self.0.borrow_mut().rx_payload = payload.to_vec();
    }

    pub fn frames(&self) -> Vec<Frame> {
        self.0.borrow().frames.clone()
    }

    pub fn clear_frames(&self) {
        self.0.borrow_mut().frames.clear();
    }

    pub fn writes(&self) -> Vec<Frame> {
        self.frames().into_iter().filter(Frame::is_write).collect()
    }
}

impl spi::ErrorType for SimChip {
    // never returned by the chip itself, but lets receive handlers fail
    type Error = spi::ErrorKind;
}

impl SpiDevice for SimChip {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        let mut state = self.0.borrow_mut();
        let mut command = None;
        let mut data = Vec::new();
        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(words) => {
                    for word in words.iter() {
                        match command {
                            None => command = Some(*word),
                            Some(_) => data.push(*word),
                        }
                    }
                }
                Operation::Read(words) => {
                    let cmd = command.unwrap_or(commands::NOP);
                    for word in words.iter_mut() {
                        *word = state.answer(cmd, data.len());
                        data.push(*word);
                    }
                }
                _ => panic!("the driver only issues Write and Read operations"),
            }
        }
        if let Some(cmd) = command {
            state.commit(cmd, &data);
            state.frames.push(Frame { command: cmd, data });
        }
        Ok(())
    }
}

/// A pin that remembers the levels it was driven to.
#[derive(Clone, Default)]
pub struct SimPin(Rc<RefCell<Vec<bool>>>);

impl SimPin {
    /// An input pin reading back `high`.
    pub fn with_level(high: bool) -> Self {
        let pin = Self::default();
        pin.0.borrow_mut().push(high);
        pin
    }

    pub fn levels(&self) -> Vec<bool> {
        self.0.borrow().clone()
    }
}

impl digital::ErrorType for SimPin {
    type Error = Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().push(true);
        Ok(())
    }
}

impl InputPin for SimPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.borrow().last().copied().unwrap_or(false))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|level| !level)
    }
}

pub type SimRadio = Xn297<SimChip, SimPin, SimPin>;

/// Build a radio on top of a fresh [`SimChip`].
///
/// Returns the radio, the chip and the CE pin.
pub fn sim_radio() -> (SimRadio, SimChip, SimPin) {
    let chip = SimChip::new();
    let ce_pin = SimPin::default();
    let radio = Xn297::new(chip.clone(), ce_pin.clone(), SimPin::with_level(true));
    (radio, chip, ce_pin)
}
