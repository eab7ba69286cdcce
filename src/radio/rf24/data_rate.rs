use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use super::{bit_fields::SetupRf, registers};
use crate::radio::{prelude::EsbDataRate, Nrf24Error, Nrf24l};
use crate::DataRate;

impl<SPI, DO, DELAY> EsbDataRate for Nrf24l<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type DataRateErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType> {
        self.spi_read(1, registers::RF_SETUP)?;
        let da_bin = self._buf[1] & DataRate::MASK;
        if da_bin == DataRate::MASK {
            return Err(Nrf24Error::BinaryCorruption);
        }
        self._setup_rf = SetupRf::from_bits(self._buf[1]);
        Ok(self._setup_rf.data_rate())
    }

    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType> {
        self.spi_read(1, registers::RF_SETUP)?;
        self._setup_rf = SetupRf::from_bits(self._buf[1]).with_data_rate(data_rate);
        self.spi_write_byte(registers::RF_SETUP, self._setup_rf.into_bits())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{registers, EsbDataRate};
    use crate::radio::rf24::commands;
    use crate::radio::Nrf24Error;
    use crate::{spi_test_expects, test::mk_radio, DataRate};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn get_data_rate() {
        let spi_expectations = spi_test_expects![
            (vec![registers::RF_SETUP, 0xFFu8], vec![0xEu8, 0x06u8]),
            (vec![registers::RF_SETUP, 0xFFu8], vec![0xEu8, 0x0Eu8]),
            (vec![registers::RF_SETUP, 0xFFu8], vec![0xEu8, 0x26u8]),
            // both RF_DR bits set is not a valid data rate
            (vec![registers::RF_SETUP, 0xFFu8], vec![0xEu8, 0x2Eu8]),
        ];
        let mut mocks = mk_radio(&[], &spi_expectations);
        assert_eq!(mocks.radio.get_data_rate(), Ok(DataRate::Mbps1));
        assert_eq!(mocks.radio.get_data_rate(), Ok(DataRate::Mbps2));
        assert_eq!(mocks.radio.get_data_rate(), Ok(DataRate::Kbps250));
        assert_eq!(
            mocks.radio.get_data_rate(),
            Err(Nrf24Error::BinaryCorruption)
        );
        mocks.done();
    }

    #[test]
    pub fn set_data_rate() {
        let spi_expectations = spi_test_expects![
            // keep the PA level while changing the data rate
            (vec![registers::RF_SETUP, 0xFFu8], vec![0xEu8, 0x06u8]),
            (
                vec![registers::RF_SETUP | commands::W_REGISTER, 0x26u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mut mocks = mk_radio(&[], &spi_expectations);
        mocks.radio.set_data_rate(DataRate::Kbps250).unwrap();
        mocks.done();
    }
}
