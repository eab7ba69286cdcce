use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use crate::{
    radio::{prelude::EsbPipe, Nrf24Error, Nrf24l},
    PowerState,
};

use super::registers;

impl<SPI, DO, DELAY> EsbPipe for Nrf24l<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PipeErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn set_rx_address(&mut self, address: &[u8; 5]) -> Result<(), Self::PipeErrorType> {
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        self.spi_write_buf(registers::RX_ADDR_P1, address)?;
        self.ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        // CE high resumes listening if the radio was last configured for RX
        if self._state.power == PowerState::Standby && !self._state.transmitting {
            self.enter(PowerState::RxActive);
        }
        Ok(())
    }

    fn set_tx_address(&mut self, address: &[u8; 5]) -> Result<(), Self::PipeErrorType> {
        // pipe 0 receives the auto-ACK packets
        self.spi_write_buf(registers::RX_ADDR_P0, address)?;
        self.spi_write_buf(registers::TX_ADDR, address)
    }
}
