//! This module defines the generic traits that may
//! need to imported to use radio implementations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```ignore
//! use nrf24l::radio::prelude::*;
//! ```

use crate::types::{DataRate, PaLevel, PowerState, StatusFlags, TxOutcome};

use super::RadioConfig;

/// A trait to represent the addresses used by an ESB capable transceiver.
///
/// Only two address slots are managed: pipe 1 for receiving and pipe 0,
/// which must mirror the TX address for auto-acknowledgment to work.
pub trait EsbPipe {
    type PipeErrorType;

    /// Set the address that this radio listens on (RX pipe 1).
    ///
    /// The CE pin is pulled LOW while the address is written, then set HIGH again.
    /// This interrupts any reception in progress and leaves the radio listening
    /// (if it was configured for RX). A receiver in [`PowerState::Standby`]
    /// is therefore tracked as [`PowerState::RxActive`] afterward.
    fn set_rx_address(&mut self, address: &[u8; 5]) -> Result<(), Self::PipeErrorType>;

    /// Set the address that this radio transmits to.
    ///
    /// The same address is written to RX pipe 0, so that the auto-ACK packet
    /// sent back by the receiving radio is accepted.
    fn set_tx_address(&mut self, address: &[u8; 5]) -> Result<(), Self::PipeErrorType>;
}

/// A trait to represent manipulation of a channel (aka frequency)
/// for an ESB capable transceiver.
pub trait EsbChannel {
    type ChannelErrorType;

    /// Set the radio's currently selected channel.
    ///
    /// These channels translate to the RF frequency as an offset of MHz from 2400 MHz.
    /// Legal values are in range [0, 125] (or [0, 83] in some regions).
    /// The value is not checked; that is the caller's responsibility.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType>;

    /// Get the channel last given to [`EsbChannel::set_channel()`]
    /// (or applied with [`EsbInit::with_config()`]).
    fn get_channel(&self) -> u8;
}

/// A trait to represent manipulation of [`StatusFlags`]
/// for an ESB capable transceiver.
pub trait EsbStatus {
    type StatusErrorType;

    /// Get the [`StatusFlags`] state that was cached from the latest SPI transaction.
    fn get_status_flags(&self, flags: &mut StatusFlags);

    /// Clear the radio's IRQ status flags.
    ///
    /// Set any member of [`StatusFlags`] to `true` to clear the corresponding
    /// event. Members set to `false` leave the corresponding flag untouched.
    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType>;

    /// Refresh the internal cache of status byte
    /// (which is also saved from every SPI transaction).
    ///
    /// Use [`EsbStatus::get_status_flags()`] to get the updated status flags.
    fn update(&mut self) -> Result<(), Self::StatusErrorType>;
}

/// A trait to represent manipulation of RX and TX FIFOs
/// for an ESB capable transceiver.
pub trait EsbFifo {
    type FifoErrorType;

    /// Discard all 3 levels of the radio's RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Discard all 3 levels of the radio's TX FIFO.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Is the RX FIFO empty?
    ///
    /// Use this after [`EsbRadio::get_data()`] to find out if more
    /// payloads are waiting. [`EsbRadio::data_ready()`] alone will
    /// not report a second payload that arrived before the first was read.
    fn rx_fifo_empty(&mut self) -> Result<bool, Self::FifoErrorType>;
}

/// A trait to represent manipulation of payload lengths (static or dynamic)
/// for an ESB capable transceiver.
pub trait EsbPayloadLength {
    type PayloadLengthErrorType;

    /// Use a static payload length for all transmissions.
    ///
    /// This disables auto-ACK and dynamic payloads on all pipes.
    /// The `width` is clamped to range [1, 32].
    ///
    /// <div class="warning">
    ///
    /// This only changes what the driver sends and reads. The radio's RX payload
    /// widths are written by [`EsbInit::apply_configuration()`], which must be
    /// called before exchanging payloads of the new width.
    ///
    /// </div>
    fn set_fixed_payload(&mut self, width: u8) -> Result<(), Self::PayloadLengthErrorType>;

    /// Get the static payload length used by the driver.
    fn get_payload_length(&self) -> u8;

    /// Enable auto-ACK and dynamic payloads for the given `pipe`.
    ///
    /// Other pipes keep their current setting.
    /// If `pipe` is not in range [0, 5], then this function does nothing.
    fn set_dynamic_payload(&mut self, pipe: u8) -> Result<(), Self::PayloadLengthErrorType>;
}

/// A trait to represent manipulation of data rate
/// for an ESB capable transceiver.
pub trait EsbDataRate {
    type DataRateErrorType;

    /// Set the radio's data rate.
    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType>;

    /// Get the radio's data rate.
    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType>;
}

/// A trait to represent manipulation of a power amplifier
/// for an ESB capable transceiver.
pub trait EsbPaLevel {
    type PaLevelErrorType;

    /// Set the radio's Power Amplifier level.
    fn set_pa_level(&mut self, level: PaLevel) -> Result<(), Self::PaLevelErrorType>;

    /// Get the radio's Power Amplifier level.
    fn get_pa_level(&mut self) -> Result<PaLevel, Self::PaLevelErrorType>;
}

/// A trait to represent the power and mode transitions
/// of an ESB capable transceiver.
pub trait EsbPower {
    type PowerErrorType;

    /// Power up as a primary receiver and activate the CE pin.
    ///
    /// The CONFIG register is overwritten (keeping the 8 bit CRC),
    /// and the TX_DS and MAX_RT events are cleared.
    /// Blocks for 5 milliseconds while the radio leaves power down mode.
    fn power_up_rx(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Power up as a primary transmitter.
    ///
    /// The CE pin is not touched; the transmission itself is started by
    /// [`EsbRadio::send()`].
    /// Blocks for 5 milliseconds while the radio leaves power down mode.
    fn power_up_tx(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Enter RX mode, keeping any CONFIG bits this driver does not manage.
    ///
    /// Clears all status events and flushes both FIFOs before
    /// activating the CE pin, then blocks for 130 milliseconds.
    fn start_listening(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Deactivate the CE pin and flush both FIFOs.
    ///
    /// The radio stays powered (if it was).
    fn stop_listening(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Power down the radio.
    ///
    /// In power down mode the radio consumes about 900nA and keeps its
    /// register values.
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Is the radio powered up?
    fn is_powered(&self) -> bool;

    /// The power state last commanded by the driver.
    fn power_state(&self) -> PowerState;
}

/// A trait to represent sending and receiving payloads
/// with an ESB capable transceiver.
pub trait EsbRadio {
    type RadioErrorType;

    /// Send a payload to the address set with [`EsbPipe::set_tx_address()`].
    ///
    /// Exactly [`EsbPayloadLength::get_payload_length()`] bytes are uploaded;
    /// a shorter `buf` is padded with zeros, a longer one is truncated.
    ///
    /// If a previous payload may still be in flight, this first waits up to
    /// 500 milliseconds for it to finish. The returned [`TxOutcome`] describes
    /// what became of that previous payload. The given `buf` is sent regardless.
    ///
    /// This function blocks for at least 15 milliseconds (the CE pulse that
    /// covers the transmission and the hardware's automatic retries).
    /// It does not report whether `buf` was received; use
    /// [`EsbRadio::is_sending()`] for that.
    fn send(&mut self, buf: &[u8]) -> Result<TxOutcome, Self::RadioErrorType>;

    /// Is the radio still busy sending?
    ///
    /// When the transmission has finished (successfully or not), the radio
    /// is returned to RX mode via [`EsbPower::power_up_rx()`] and `false` is returned.
    /// Use [`EsbStatus::get_status_flags()`] right after to tell a delivered
    /// payload (`tx_ds`) from a failed one (`max_rt`).
    fn is_sending(&mut self) -> Result<bool, Self::RadioErrorType>;

    /// Has a payload been received?
    ///
    /// If so, the RX_DR event (and a TX_DS event left by an ACK payload)
    /// is cleared.
    fn data_ready(&mut self) -> Result<bool, Self::RadioErrorType>;

    /// Read the payload at the top of the RX FIFO into `buf`.
    ///
    /// The whole static payload length is clocked out of the radio,
    /// but only as many bytes as fit in `buf` are kept.
    /// Returns the number of bytes stored in `buf`.
    ///
    /// The data is meaningless unless [`EsbRadio::data_ready()`]
    /// returned `true` (or [`EsbFifo::rx_fifo_empty()`] returned `false`).
    fn get_data(&mut self, buf: &mut [u8]) -> Result<u8, Self::RadioErrorType>;

    /// Get the Auto-Retry Count (ARC) about the previous transmission.
    ///
    /// This data is reset with every new payload transmitted.
    fn get_last_arc(&mut self) -> Result<u8, Self::RadioErrorType>;
}

/// A trait to represent debug output
/// for an ESB capable transceiver.
pub trait EsbDetails {
    type DetailsErrorType;

    /// Print details about radio's current configuration.
    ///
    /// This should only be used for debugging development.
    /// Using this in production should be limited due to a significant increase in
    /// compile size.
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType>;
}

pub trait EsbInit {
    type ConfigErrorType;

    /// Put the CE and CSN pins in their idle states and let the radio settle.
    ///
    /// This function should only be called once after instantiating the radio object,
    /// before any other function.
    fn init(&mut self) -> Result<(), Self::ConfigErrorType>;

    /// Write the channel and payload length held by the driver to the radio,
    /// set the data rate and PA level, then start listening with empty FIFOs.
    fn apply_configuration(&mut self) -> Result<(), Self::ConfigErrorType>;

    /// Adopt the settings in `config`, then call [`EsbInit::apply_configuration()`].
    ///
    /// Any addresses in `config` are written afterward.
    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType>;
}
