use crate::radio::{prelude::EsbPayloadLength, Nrf24Error, Nrf24l};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use super::registers;

impl<SPI, DO, DELAY> EsbPayloadLength for Nrf24l<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PayloadLengthErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn set_fixed_payload(&mut self, width: u8) -> Result<(), Self::PayloadLengthErrorType> {
        // disable auto-ack and dynamic payloads on all pipes
        self.spi_write_byte(registers::EN_AA, 0)?;
        self.spi_write_byte(registers::DYNPD, 0)?;
        self._state.payload_length = width.clamp(1, 32);
        Ok(())
    }

    fn get_payload_length(&self) -> u8 {
        self._state.payload_length
    }

    fn set_dynamic_payload(&mut self, pipe: u8) -> Result<(), Self::PayloadLengthErrorType> {
        if pipe > 5 {
            return Ok(());
        }
        let mask = 1 << pipe;
        self.spi_read(1, registers::EN_AA)?;
        self.spi_write_byte(registers::EN_AA, self._buf[1] | mask)?;
        // DYNPD also requires ENAA_Px
        self.spi_read(1, registers::DYNPD)?;
        self.spi_write_byte(registers::DYNPD, self._buf[1] | mask)
    }
}
