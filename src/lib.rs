#![doc = include_str!("../README.md")]
//!
//! ## Basic API
//!
//! - [`Xn297Pins::bind()`](fn@crate::pins::Xn297Pins::bind)
//! - [`Xn297::begin()`](radio/struct.Xn297.html#method.begin)
//! - [`Xn297::poll()`](radio/struct.Xn297.html#method.poll)
//! - [`Xn297::with_on_receive()`](fn@crate::radio::Xn297::with_on_receive)
//! - [`Xn297::read_rx_payload_width()`](radio/struct.Xn297.html#method.read_rx_payload_width)
//! - [`Xn297::read_rx_payload()`](radio/struct.Xn297.html#method.read_rx_payload)
//! - [`Xn297::set_mode_rx()`](radio/struct.Xn297.html#method.set_mode_rx)
//! - [`Xn297::set_channel()`](radio/struct.Xn297.html#method.set_channel)
//! - [`Xn297::get_channel()`](radio/struct.Xn297.html#method.get_channel)
//!
//! ## Register API
//!
//! - [`Xn297::read_register()`](radio/struct.Xn297.html#method.read_register)
//! - [`Xn297::read_register_buf()`](radio/struct.Xn297.html#method.read_register_buf)
//! - [`Xn297::write_register()`](radio/struct.Xn297.html#method.write_register)
//! - [`Xn297::write_register_buf()`](radio/struct.Xn297.html#method.write_register_buf)
//! - [`Xn297::write_command()`](radio/struct.Xn297.html#method.write_command)
//! - [`Xn297::set_bit()`](radio/struct.Xn297.html#method.set_bit)
//! - [`Xn297::clear_bit()`](radio/struct.Xn297.html#method.clear_bit)
//! - [`Xn297::read_bit()`](radio/struct.Xn297.html#method.read_bit)
//!
//! ## Configuration API
//!
//! - [`Xn297::with_config()`](radio/struct.Xn297.html#method.with_config)
//! - [`Xn297::power_up()`](radio/struct.Xn297.html#method.power_up)
//! - [`Xn297::shut_down()`](radio/struct.Xn297.html#method.shut_down)
//! - [`Xn297::set_data_rate()`](radio/struct.Xn297.html#method.set_data_rate)
//! - [`Xn297::get_data_rate()`](radio/struct.Xn297.html#method.get_data_rate)
//! - [`Xn297::set_crc_length()`](radio/struct.Xn297.html#method.set_crc_length)
//! - [`Xn297::get_crc_length()`](radio/struct.Xn297.html#method.get_crc_length)
//! - [`Xn297::enable_dyn_ack()`](radio/struct.Xn297.html#method.enable_dyn_ack)
//! - [`Xn297::disable_dyn_ack()`](radio/struct.Xn297.html#method.disable_dyn_ack)
//! - [`Xn297::set_rx_payload_width()`](radio/struct.Xn297.html#method.set_rx_payload_width)
//! - [`Xn297::with_on_debug()`](fn@crate::radio::Xn297::with_on_debug)
//! - [`Xn297::print_details()`](radio/struct.Xn297.html#method.print_details)
//!
#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod types;
pub use types::{CrcLength, DataRate, StatusFlags};
pub mod bitbang;
pub mod pins;
pub mod radio;

#[cfg(test)]
pub(crate) mod sim;
