use bitfield_struct::bitfield;

use crate::{DataRate, PaLevel};

/// The CONFIG register.
///
/// The default value enables all IRQ events and an 8 bit CRC,
/// with the radio powered down as a primary transmitter.
#[bitfield(u8, order = Msb)]
pub(crate) struct Config {
    #[bits(1)]
    _padding: u8,

    /// Hide the "RX Data Ready" event from the IRQ pin.
    pub mask_rx_dr: bool,

    /// Hide the "TX Data Sent" event from the IRQ pin.
    pub mask_tx_ds: bool,

    /// Hide the "max retransmits" event from the IRQ pin.
    pub mask_max_rt: bool,

    #[bits(1, default = true)]
    pub en_crc: bool,

    /// 16 bit CRC when set, 8 bit otherwise.
    pub crco: bool,

    pub power: bool,

    pub is_rx: bool,
}

impl Config {
    pub fn as_rx(self) -> Self {
        self.with_power(true).with_is_rx(true)
    }

    pub fn as_tx(self) -> Self {
        self.with_power(true).with_is_rx(false)
    }
}

/// The RF_SETUP register.
///
/// The default value selects 1 Mbps at maximum PA level.
#[bitfield(u8, order = Msb)]
pub(crate) struct SetupRf {
    pub cont_wave: bool,

    #[bits(1)]
    _padding: u8,

    #[bits(3, access = None)]
    data_rate: u8,

    #[bits(2, access = None, default = 3)]
    pa_level: u8,

    /// Only meaningful on the older non-plus variants.
    pub lna_enable: bool,
}

impl SetupRf {
    pub const fn data_rate(&self) -> DataRate {
        DataRate::from_bits(self.into_bits())
    }

    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        let new_val = self.into_bits() & !DataRate::MASK;
        Self::from_bits(new_val | data_rate.into_bits())
    }

    pub const fn pa_level(&self) -> PaLevel {
        PaLevel::from_bits(self.into_bits())
    }

    pub fn with_pa_level(self, level: PaLevel) -> Self {
        let new_val = self.into_bits() & !PaLevel::MASK;
        Self::from_bits(new_val | level.into_bits())
    }
}
