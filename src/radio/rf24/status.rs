use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use crate::{
    radio::{prelude::EsbStatus, Nrf24Error, Nrf24l},
    types::StatusFlags,
};

use super::{commands, registers};

impl<SPI, DO, DELAY> EsbStatus for Nrf24l<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type StatusErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType> {
        self.spi_write_byte(registers::STATUS, flags.into_bits() & StatusFlags::IRQ_MASK)
    }

    fn update(&mut self) -> Result<(), Self::StatusErrorType> {
        self.spi_read(0, commands::NOP)
    }

    fn get_status_flags(&self, flags: &mut StatusFlags) {
        *flags = self._status;
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, registers, EsbStatus, StatusFlags};
    use crate::{spi_test_expects, test::mk_radio};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn what_happened() {
        let spi_expectations = spi_test_expects![
            // get the STATUS register value from a NOP command
            (vec![commands::NOP], vec![0x70u8]),
        ];
        let mut mocks = mk_radio(&[], &spi_expectations);
        mocks.radio.update().unwrap();
        let mut flags = StatusFlags::default();
        mocks.radio.get_status_flags(&mut flags);
        assert!(flags.rx_dr());
        assert!(flags.tx_ds());
        assert!(flags.max_rt());
        mocks.done();
    }

    #[test]
    pub fn clear_status_flags() {
        let spi_expectations = spi_test_expects![
            (
                vec![registers::STATUS | commands::W_REGISTER, 0x70u8],
                vec![0xEu8, 0u8],
            ),
            // non-IRQ bits are never written
            (
                vec![registers::STATUS | commands::W_REGISTER, 0x40u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mut mocks = mk_radio(&[], &spi_expectations);
        mocks.radio.clear_status_flags(StatusFlags::new()).unwrap();
        mocks
            .radio
            .clear_status_flags(StatusFlags::from_bits(0xCF))
            .unwrap();
        mocks.done();
    }
}
