use super::registers;
use crate::radio::{prelude::EsbChannel, Nrf24Error, Nrf24l};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

impl<SPI, DO, DELAY> EsbChannel for Nrf24l<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type ChannelErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// The nRF24L01 supports 126 channels. The specified `channel` is
    /// written as is; values above 127 lose their MSB in the radio.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType> {
        self._state.channel = channel;
        self.spi_write_byte(registers::RF_CH, channel)
    }

    /// See also [`Nrf24l::set_channel()`].
    fn get_channel(&self) -> u8 {
        self._state.channel
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{registers, EsbChannel};
    use crate::{radio::rf24::commands, spi_test_expects, test::mk_radio};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn set_channel() {
        let spi_expectations = spi_test_expects![
            (
                vec![registers::RF_CH | commands::W_REGISTER, 76u8],
                vec![0xEu8, 0u8],
            ),
            // out of range values are passed through
            (
                vec![registers::RF_CH | commands::W_REGISTER, 200u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mut mocks = mk_radio(&[], &spi_expectations);
        mocks.radio.set_channel(76).unwrap();
        assert_eq!(mocks.radio.get_channel(), 76u8);
        mocks.radio.set_channel(200).unwrap();
        assert_eq!(mocks.radio.state().channel(), 200u8);
        mocks.done();
    }

    #[test]
    pub fn get_channel() {
        let mut mocks = mk_radio(&[], &[]);
        // cached, no SPI traffic
        assert_eq!(mocks.radio.get_channel(), 75u8);
        mocks.done();
    }
}
