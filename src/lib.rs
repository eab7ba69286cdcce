#![doc = include_str!("../README.md")]
//!
//! ## Basic API
//!
//! - [`Nrf24l::new()`](fn@crate::radio::Nrf24l::new)
//! - [`Nrf24l::init()`](radio/struct.Nrf24l.html#method.init)
//! - [`Nrf24l::with_config()`](radio/struct.Nrf24l.html#method.with_config)
//! - [`Nrf24l::set_rx_address()`](radio/struct.Nrf24l.html#method.set_rx_address)
//! - [`Nrf24l::set_tx_address()`](radio/struct.Nrf24l.html#method.set_tx_address)
//! - [`Nrf24l::send()`](radio/struct.Nrf24l.html#method.send)
//! - [`Nrf24l::is_sending()`](radio/struct.Nrf24l.html#method.is_sending)
//! - [`Nrf24l::data_ready()`](radio/struct.Nrf24l.html#method.data_ready)
//! - [`Nrf24l::get_data()`](radio/struct.Nrf24l.html#method.get_data)
//! - [`Nrf24l::start_listening()`](radio/struct.Nrf24l.html#method.start_listening)
//! - [`Nrf24l::stop_listening()`](radio/struct.Nrf24l.html#method.stop_listening)
//!
//! ## Advanced API
//!
//! - [`Nrf24l::read_register()`](fn@crate::radio::Nrf24l::read_register)
//! - [`Nrf24l::write_register()`](fn@crate::radio::Nrf24l::write_register)
//! - [`Nrf24l::config_register()`](fn@crate::radio::Nrf24l::config_register)
//! - [`Nrf24l::test_carrier()`](fn@crate::radio::Nrf24l::test_carrier)
//! - [`Nrf24l::rx_fifo_empty()`](radio/struct.Nrf24l.html#method.rx_fifo_empty)
//! - [`Nrf24l::flush_rx()`](radio/struct.Nrf24l.html#method.flush_rx)
//! - [`Nrf24l::flush_tx()`](radio/struct.Nrf24l.html#method.flush_tx)
//! - [`Nrf24l::update()`](radio/struct.Nrf24l.html#method.update)
//! - [`Nrf24l::get_status_flags()`](radio/struct.Nrf24l.html#method.get_status_flags)
//! - [`Nrf24l::clear_status_flags()`](radio/struct.Nrf24l.html#method.clear_status_flags)
//! - [`Nrf24l::get_last_arc()`](radio/struct.Nrf24l.html#method.get_last_arc)
//!
//! ## Configuration API
//!
//! - [`Nrf24l::apply_configuration()`](radio/struct.Nrf24l.html#method.apply_configuration)
//! - [`Nrf24l::set_channel()`](radio/struct.Nrf24l.html#method.set_channel)
//! - [`Nrf24l::get_channel()`](radio/struct.Nrf24l.html#method.get_channel)
//! - [`Nrf24l::set_fixed_payload()`](radio/struct.Nrf24l.html#method.set_fixed_payload)
//! - [`Nrf24l::set_dynamic_payload()`](radio/struct.Nrf24l.html#method.set_dynamic_payload)
//! - [`Nrf24l::get_payload_length()`](radio/struct.Nrf24l.html#method.get_payload_length)
//! - [`Nrf24l::set_data_rate()`](radio/struct.Nrf24l.html#method.set_data_rate)
//! - [`Nrf24l::get_data_rate()`](radio/struct.Nrf24l.html#method.get_data_rate)
//! - [`Nrf24l::set_pa_level()`](radio/struct.Nrf24l.html#method.set_pa_level)
//! - [`Nrf24l::get_pa_level()`](radio/struct.Nrf24l.html#method.get_pa_level)
//! - [`Nrf24l::power_up_rx()`](radio/struct.Nrf24l.html#method.power_up_rx)
//! - [`Nrf24l::power_up_tx()`](radio/struct.Nrf24l.html#method.power_up_tx)
//! - [`Nrf24l::power_down()`](radio/struct.Nrf24l.html#method.power_down)
//! - [`Nrf24l::power_state()`](radio/struct.Nrf24l.html#method.power_state)
//!
#![no_std]

mod types;
pub use types::{DataRate, DeviceState, PaLevel, PowerState, StatusFlags, TxOutcome};
pub mod radio;
