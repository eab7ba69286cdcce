//! This module defines types used by various traits.
//! These types are meant to be agnostic of the trait implementation.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

use bitfield_struct::bitfield;

/// Power Amplifier level. The units dBm (decibel-milliwatts or dB<sub>mW</sub>)
/// represents a logarithmic signal loss.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaLevel {
    /// -18 dBm
    Min,
    /// -12 dBm
    Low,
    /// -6 dBm
    High,
    /// 0 dBm
    Max,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for PaLevel {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PaLevel::Min => defmt::write!(fmt, "Min"),
            PaLevel::Low => defmt::write!(fmt, "Low"),
            PaLevel::High => defmt::write!(fmt, "High"),
            PaLevel::Max => defmt::write!(fmt, "Max"),
        }
    }
}

impl PaLevel {
    pub(crate) const MASK: u8 = 6;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            PaLevel::Min => 0,
            PaLevel::Low => 2,
            PaLevel::High => 4,
            PaLevel::Max => 6,
        }
    }
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0 => PaLevel::Min,
            2 => PaLevel::Low,
            4 => PaLevel::High,
            _ => PaLevel::Max,
        }
    }
}

impl Display for PaLevel {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PaLevel::Min => write!(f, "Min"),
            PaLevel::Low => write!(f, "Low"),
            PaLevel::High => write!(f, "High"),
            PaLevel::Max => write!(f, "Max"),
        }
    }
}

/// How fast data moves through the air. Units are in bits per second (bps).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DataRate {
    /// represents 1 Mbps
    Mbps1,
    /// represents 2 Mbps
    Mbps2,
    /// represents 250 Kbps
    Kbps250,
}

impl DataRate {
    /// The `RF_DR_LOW` and `RF_DR_HIGH` bits of the RF_SETUP register.
    pub(crate) const MASK: u8 = 0x28;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            DataRate::Mbps1 => 0,
            DataRate::Mbps2 => 0x8,
            DataRate::Kbps250 => 0x20,
        }
    }
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0x8 => DataRate::Mbps2,
            0x20 => DataRate::Kbps250,
            _ => DataRate::Mbps1,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for DataRate {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DataRate::Mbps1 => defmt::write!(fmt, "1 Mbps"),
            DataRate::Mbps2 => defmt::write!(fmt, "2 Mbps"),
            DataRate::Kbps250 => defmt::write!(fmt, "250 Kbps"),
        }
    }
}

impl Display for DataRate {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            DataRate::Mbps1 => write!(f, "1 Mbps"),
            DataRate::Mbps2 => write!(f, "2 Mbps"),
            DataRate::Kbps250 => write!(f, "250 Kbps"),
        }
    }
}

/// The power states that the driver steers the radio through.
///
/// | state | PWR_UP | PRIM_RX | CE |
/// |-------|:------:|:-------:|:--:|
/// | [`PowerState::PowerDown`] | 0 | - | 0 |
/// | [`PowerState::Standby`] | 1 | - | 0 |
/// | [`PowerState::RxActive`] | 1 | 1 | 1 |
/// | [`PowerState::TxActive`] | 1 | 0 | pulsed per payload |
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PowerState {
    /// Registers are retained, but the radio can neither send nor receive.
    PowerDown,
    /// Powered up with the CE pin inactive.
    Standby,
    /// Listening for payloads.
    RxActive,
    /// Configured as a primary transmitter.
    TxActive,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for PowerState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PowerState::PowerDown => defmt::write!(fmt, "PowerDown"),
            PowerState::Standby => defmt::write!(fmt, "Standby"),
            PowerState::RxActive => defmt::write!(fmt, "RxActive"),
            PowerState::TxActive => defmt::write!(fmt, "TxActive"),
        }
    }
}

impl Display for PowerState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            PowerState::PowerDown => write!(f, "PowerDown"),
            PowerState::Standby => write!(f, "Standby"),
            PowerState::RxActive => write!(f, "RxActive"),
            PowerState::TxActive => write!(f, "TxActive"),
        }
    }
}

/// What became of the payload that was in flight when a new one was sent.
///
/// See [`EsbRadio::send()`](fn@crate::radio::prelude::EsbRadio::send).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TxOutcome {
    /// No payload was in flight.
    Idle,
    /// The previous payload was acknowledged (TX_DS).
    Delivered,
    /// The previous payload exhausted its automatic retries (MAX_RT).
    Failed,
    /// Neither TX_DS nor MAX_RT was observed in time.
    /// The previous payload was discarded with the TX FIFO.
    TimedOut,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for TxOutcome {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            TxOutcome::Idle => defmt::write!(fmt, "Idle"),
            TxOutcome::Delivered => defmt::write!(fmt, "Delivered"),
            TxOutcome::Failed => defmt::write!(fmt, "Failed"),
            TxOutcome::TimedOut => defmt::write!(fmt, "TimedOut"),
        }
    }
}

impl Display for TxOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            TxOutcome::Idle => write!(f, "Idle"),
            TxOutcome::Delivered => write!(f, "Delivered"),
            TxOutcome::Failed => write!(f, "Failed"),
            TxOutcome::TimedOut => write!(f, "TimedOut"),
        }
    }
}

/// The software-side state of one radio.
///
/// Only the driver mutates this; users can inspect it via
/// [`Nrf24l::state()`](fn@crate::radio::Nrf24l::state).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceState {
    pub(crate) channel: u8,
    pub(crate) payload_length: u8,
    pub(crate) transmitting: bool,
    pub(crate) power: PowerState,
}

impl DeviceState {
    pub(crate) const fn new(channel: u8, payload_length: u8) -> Self {
        Self {
            channel,
            payload_length,
            transmitting: false,
            power: PowerState::PowerDown,
        }
    }

    /// The RF channel last given to the driver.
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// The static payload length (in bytes) used for every send and receive.
    pub const fn payload_length(&self) -> u8 {
        self.payload_length
    }

    /// Is a payload possibly still in flight?
    pub const fn is_transmitting(&self) -> bool {
        self.transmitting
    }

    /// The power state last commanded by the driver.
    pub const fn power(&self) -> PowerState {
        self.power
    }
}

/// A struct used to describe the different interrupt events.
///
/// To instantiate an object with flags that have different values:
/// ```ignore
/// let flags = StatusFlags::default() // all flags are false
///     .with_rx_dr(true); // assert only `rx_dr` flags
/// ```
/// Use [`StatusFlags::default`] to instantiate all flags set to false.
/// Use [`StatusFlags::new`] to instantiate all flags set to true.
#[bitfield(u8, new = false, order = Msb)]
pub struct StatusFlags {
    #[bits(1)]
    _padding: u8,

    /// A flag to describe if RX Data Ready to read.
    #[bits(1, access = RO)]
    pub rx_dr: bool,

    /// A flag to describe if TX Data Sent.
    #[bits(1, access = RO)]
    pub tx_ds: bool,

    /// A flag to describe if the maximum number of retransmits was reached.
    #[bits(1, access = RO)]
    pub max_rt: bool,

    /// The pipe number of the payload at the top of the RX FIFO.
    #[bits(3, access = RO)]
    pub rx_pipe: u8,

    /// A flag to describe if the TX FIFO is full.
    #[bits(1, access = RO)]
    pub tx_full: bool,
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt()
        )
    }
}

impl StatusFlags {
    /// A mask to isolate only the IRQ flags. Writing a 1 to any of these
    /// bits in the STATUS register clears the corresponding event.
    pub(crate) const IRQ_MASK: u8 = 0x70;

    /// A convenience constructor similar to [`StatusFlags::default`] except
    /// all event flags are set to `true`.
    pub fn new() -> Self {
        Self::from_bits(Self::IRQ_MASK)
    }

    /// A flag to describe if RX Data Ready to read.
    pub fn with_rx_dr(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::RX_DR_OFFSET);
        Self::from_bits(new_val | ((flag as u8) << Self::RX_DR_OFFSET))
    }

    /// A flag to describe if TX Data Sent.
    pub fn with_tx_ds(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::TX_DS_OFFSET);
        Self::from_bits(new_val | ((flag as u8) << Self::TX_DS_OFFSET))
    }

    /// A flag to describe if the maximum number of retransmits was reached.
    pub fn with_max_rt(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::MAX_RT_OFFSET);
        Self::from_bits(new_val | ((flag as u8) << Self::MAX_RT_OFFSET))
    }

    /// Did the last transmission finish, either way?
    pub const fn tx_finished(&self) -> bool {
        self.tx_ds() || self.max_rt()
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt()
        )
    }
}

#[cfg(test)]
mod test {
    use super::{DataRate, DeviceState, PaLevel, PowerState, StatusFlags, TxOutcome};
    extern crate std;
    use std::{format, string::String};

    fn display_data_rate(param: DataRate, expected: String) -> bool {
        format!("{param}") == expected
    }

    #[test]
    fn data_rate_1mbps() {
        assert!(display_data_rate(DataRate::Mbps1, String::from("1 Mbps")));
    }

    #[test]
    fn data_rate_2mbps() {
        assert!(display_data_rate(DataRate::Mbps2, String::from("2 Mbps")));
    }

    #[test]
    fn data_rate_250kbps() {
        assert!(display_data_rate(
            DataRate::Kbps250,
            String::from("250 Kbps")
        ));
    }

    #[test]
    fn data_rate_bits() {
        for rate in [DataRate::Mbps1, DataRate::Mbps2, DataRate::Kbps250] {
            // unrelated RF_SETUP bits must be ignored
            assert_eq!(DataRate::from_bits(rate.into_bits() | 0x07), rate);
        }
    }

    #[test]
    fn pa_level_display() {
        assert_eq!(format!("{}", PaLevel::Min), String::from("Min"));
        assert_eq!(format!("{}", PaLevel::Low), String::from("Low"));
        assert_eq!(format!("{}", PaLevel::High), String::from("High"));
        assert_eq!(format!("{}", PaLevel::Max), String::from("Max"));
    }

    #[test]
    fn pa_level_bits() {
        for level in [PaLevel::Min, PaLevel::Low, PaLevel::High, PaLevel::Max] {
            assert_eq!(PaLevel::from_bits(level.into_bits() | 0x28), level);
        }
    }

    #[test]
    fn power_state_display() {
        assert_eq!(format!("{}", PowerState::PowerDown), "PowerDown");
        assert_eq!(format!("{}", PowerState::RxActive), "RxActive");
    }

    #[test]
    fn tx_outcome_display() {
        assert_eq!(format!("{}", TxOutcome::Delivered), "Delivered");
        assert_eq!(format!("{}", TxOutcome::TimedOut), "TimedOut");
    }

    #[test]
    fn device_state() {
        let state = DeviceState::new(75, 4);
        assert_eq!(state.channel(), 75);
        assert_eq!(state.payload_length(), 4);
        assert!(!state.is_transmitting());
        assert_eq!(state.power(), PowerState::PowerDown);
    }

    #[test]
    fn display_flags() {
        assert_eq!(
            format!("{}", StatusFlags::default()),
            String::from("StatusFlags rx_dr: false, tx_ds: false, max_rt: false")
        );
    }

    fn set_flags(rx_dr: bool, tx_ds: bool, max_rt: bool) {
        let flags = StatusFlags::default()
            .with_rx_dr(rx_dr)
            .with_tx_ds(tx_ds)
            .with_max_rt(max_rt);
        assert_eq!(flags.rx_dr(), rx_dr);
        assert_eq!(flags.tx_ds(), tx_ds);
        assert_eq!(flags.max_rt(), max_rt);
        assert_eq!(flags.tx_finished(), tx_ds || max_rt);
    }

    #[test]
    fn flags_0x50() {
        set_flags(true, false, true);
    }

    #[test]
    fn flags_0x20() {
        set_flags(false, true, false);
    }

    #[test]
    fn flags_from_status_byte() {
        // RX_DR with a payload on pipe 1, TX FIFO full
        let flags = StatusFlags::from_bits(0x43);
        assert!(flags.rx_dr());
        assert!(!flags.tx_finished());
        assert_eq!(flags.rx_pipe(), 1);
        assert!(flags.tx_full());
        assert_eq!(StatusFlags::new().into_bits(), 0x70);
    }
}
