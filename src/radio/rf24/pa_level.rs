use super::{bit_fields::SetupRf, registers};
use crate::radio::{prelude::EsbPaLevel, Nrf24Error, Nrf24l};
use crate::PaLevel;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

impl<SPI, DO, DELAY> EsbPaLevel for Nrf24l<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PaLevelErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn get_pa_level(&mut self) -> Result<PaLevel, Self::PaLevelErrorType> {
        self.spi_read(1, registers::RF_SETUP)?;
        self._setup_rf = SetupRf::from_bits(self._buf[1]);
        Ok(self._setup_rf.pa_level())
    }

    fn set_pa_level(&mut self, level: PaLevel) -> Result<(), Self::PaLevelErrorType> {
        self.spi_read(1, registers::RF_SETUP)?;
        self._setup_rf = SetupRf::from_bits(self._buf[1]).with_pa_level(level);
        self.spi_write_byte(registers::RF_SETUP, self._setup_rf.into_bits())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{registers, EsbPaLevel};
    use crate::radio::rf24::commands;
    use crate::{spi_test_expects, test::mk_radio, PaLevel};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    fn get_pa_level_parametrized(raw: u8, expected: PaLevel) {
        let spi_expectations = spi_test_expects![
            (vec![registers::RF_SETUP, 0xFFu8], vec![0xEu8, raw]),
        ];
        let mut mocks = mk_radio(&[], &spi_expectations);
        assert_eq!(mocks.radio.get_pa_level().unwrap(), expected);
        mocks.done();
    }

    #[test]
    fn get_pa_level_min() {
        get_pa_level_parametrized(0x00, PaLevel::Min);
    }

    #[test]
    fn get_pa_level_low() {
        get_pa_level_parametrized(0x02, PaLevel::Low);
    }

    #[test]
    fn get_pa_level_high() {
        get_pa_level_parametrized(0x24, PaLevel::High);
    }

    #[test]
    fn get_pa_level_max() {
        get_pa_level_parametrized(0x0F, PaLevel::Max);
    }

    #[test]
    fn set_pa_level() {
        let spi_expectations = spi_test_expects![
            // keep the data rate while changing the PA level
            (vec![registers::RF_SETUP, 0xFFu8], vec![0xEu8, 0x26u8]),
            (
                vec![registers::RF_SETUP | commands::W_REGISTER, 0x22u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mut mocks = mk_radio(&[], &spi_expectations);
        mocks.radio.set_pa_level(PaLevel::Low).unwrap();
        mocks.done();
    }
}
