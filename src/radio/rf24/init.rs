use super::{registers, Nrf24Error, Nrf24l};
use crate::radio::{
    prelude::{EsbFifo, EsbInit, EsbPipe, EsbPower},
    RadioConfig,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

impl<SPI, DO, DELAY> EsbInit for Nrf24l<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type ConfigErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// Put the [`OutputPin`]s given to [`Nrf24l::new()`] in their idle states.
    fn init(&mut self) -> Result<(), Self::ConfigErrorType> {
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        self.csn_pin.set_high().map_err(Nrf24Error::Gpo)?;
        // Tpd2stby worst case is 4.5ms
        self._delay_impl.delay_ms(5);
        Ok(())
    }

    fn apply_configuration(&mut self) -> Result<(), Self::ConfigErrorType> {
        let payload_length = self._state.payload_length;
        self.spi_write_byte(registers::RF_CH, self._state.channel)?;
        self.spi_write_byte(registers::RX_PW_P0, payload_length)?;
        self.spi_write_byte(registers::RX_PW_P1, payload_length)?;
        self.spi_write_byte(registers::RF_SETUP, self._setup_rf.into_bits())?;

        self.power_up_rx()?;
        self.flush_rx()?;
        self.flush_tx()?;

        #[cfg(feature = "defmt")]
        #[cfg(target_os = "none")]
        defmt::debug!(
            "configured channel {=u8} with {=u8} byte payloads",
            self._state.channel,
            payload_length
        );
        Ok(())
    }

    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType> {
        self._state.channel = config.channel();
        self._state.payload_length = config.payload_length();
        self._setup_rf = config.setup_rf;
        self.apply_configuration()?;

        if let Some(address) = config.rx_address() {
            self.set_rx_address(&address)?;
        }
        if let Some(address) = config.tx_address() {
            self.set_tx_address(&address)?;
        }
        Ok(())
    }
}
