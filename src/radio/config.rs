use crate::radio::rf24::bit_fields::SetupRf;
use crate::{DataRate, PaLevel};

/// The channel used by [`RadioConfig::default()`].
pub(crate) const DEFAULT_CHANNEL: u8 = 75;
/// The payload length used by [`RadioConfig::default()`].
pub(crate) const DEFAULT_PAYLOAD_LENGTH: u8 = 4;

/// An object to configure the radio.
///
/// This struct follows a builder pattern. Since all fields are private, users should
/// start with the [`RadioConfig::default`] constructor, then mutate the object accordingly.
/// ```ignore
/// let config = RadioConfig::default().with_channel(42);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RadioConfig {
    pub(crate) setup_rf: SetupRf,
    channel: u8,
    payload_length: u8,
    rx_address: Option<[u8; 5]>,
    tx_address: Option<[u8; 5]>,
}

impl Default for RadioConfig {
    /// Instantiate a [`RadioConfig`] object with library defaults.
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`RadioConfig::channel()`] | `75` |
    /// | [`RadioConfig::payload_length()`] | `4` |
    /// | [`RadioConfig::data_rate()`] | [`DataRate::Mbps1`] |
    /// | [`RadioConfig::pa_level()`] | [`PaLevel::Max`] |
    /// | [`RadioConfig::rx_address()`] | `None` (left as is) |
    /// | [`RadioConfig::tx_address()`] | `None` (left as is) |
    fn default() -> Self {
        Self {
            /*
                - 1 Mbps data rate
                - Max PA level
            */
            setup_rf: SetupRf::default(),
            channel: DEFAULT_CHANNEL,
            payload_length: DEFAULT_PAYLOAD_LENGTH,
            rx_address: None,
            tx_address: None,
        }
    }
}

impl RadioConfig {
    /// Returns the value set by [`RadioConfig::with_data_rate()`].
    pub const fn data_rate(&self) -> DataRate {
        self.setup_rf.data_rate()
    }

    /// Set the over-the-air data rate.
    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self {
            setup_rf: self.setup_rf.with_data_rate(data_rate),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_pa_level()`].
    pub const fn pa_level(&self) -> PaLevel {
        self.setup_rf.pa_level()
    }

    /// Set the Power Amplifier level.
    pub fn with_pa_level(self, level: PaLevel) -> Self {
        Self {
            setup_rf: self.setup_rf.with_pa_level(level),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_channel()`].
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// Set the RF channel.
    ///
    /// See [`EsbChannel::set_channel()`](fn@crate::radio::prelude::EsbChannel::set_channel).
    pub fn with_channel(self, value: u8) -> Self {
        Self {
            channel: value,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_payload_length()`].
    pub const fn payload_length(&self) -> u8 {
        self.payload_length
    }

    /// Set the static payload length.
    ///
    /// The `value` is clamped to range [1, 32].
    pub fn with_payload_length(self, value: u8) -> Self {
        Self {
            payload_length: value.clamp(1, 32),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_rx_address()`].
    pub const fn rx_address(&self) -> Option<[u8; 5]> {
        self.rx_address
    }

    /// Set the address to listen on.
    ///
    /// See [`EsbPipe::set_rx_address()`](fn@crate::radio::prelude::EsbPipe::set_rx_address).
    pub fn with_rx_address(self, address: &[u8; 5]) -> Self {
        Self {
            rx_address: Some(*address),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_tx_address()`].
    pub const fn tx_address(&self) -> Option<[u8; 5]> {
        self.tx_address
    }

    /// Set the address to transmit to.
    ///
    /// See [`EsbPipe::set_tx_address()`](fn@crate::radio::prelude::EsbPipe::set_tx_address).
    pub fn with_tx_address(self, address: &[u8; 5]) -> Self {
        Self {
            tx_address: Some(*address),
            ..self
        }
    }
}

#[cfg(test)]
mod test {
    use super::RadioConfig;
    use crate::{DataRate, PaLevel};

    #[test]
    fn defaults() {
        let config = RadioConfig::default();
        assert_eq!(config.channel(), 75);
        assert_eq!(config.payload_length(), 4);
        assert_eq!(config.data_rate(), DataRate::Mbps1);
        assert_eq!(config.pa_level(), PaLevel::Max);
        assert_eq!(config.setup_rf.into_bits(), 0x06);
        assert!(config.rx_address().is_none());
        assert!(config.tx_address().is_none());
    }

    #[test]
    fn payload_length() {
        let config = RadioConfig::default().with_payload_length(255);
        assert_eq!(config.payload_length(), 32);
        let config = config.with_payload_length(0);
        assert_eq!(config.payload_length(), 1);
    }

    #[test]
    fn channel() {
        // not clamped
        let config = RadioConfig::default().with_channel(200);
        assert_eq!(config.channel(), 200);
    }

    #[test]
    fn rf_setup() {
        let config = RadioConfig::default()
            .with_data_rate(DataRate::Mbps2)
            .with_pa_level(PaLevel::Min);
        assert_eq!(config.data_rate(), DataRate::Mbps2);
        assert_eq!(config.pa_level(), PaLevel::Min);
        assert_eq!(config.setup_rf.into_bits(), 0x08);
    }

    #[test]
    fn addresses() {
        let config = RadioConfig::default()
            .with_rx_address(b"1Node")
            .with_tx_address(b"2Node");
        assert_eq!(config.rx_address(), Some(*b"1Node"));
        assert_eq!(config.tx_address(), Some(*b"2Node"));
    }
}
