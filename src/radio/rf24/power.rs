use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use crate::{
    radio::{
        prelude::{EsbFifo, EsbPower, EsbStatus},
        Nrf24Error, Nrf24l,
    },
    PowerState, StatusFlags,
};

use super::{bit_fields::Config, registers};

/// Tpd2stby: power down to standby, with margin.
const POWER_UP_DELAY_MS: u32 = 5;
/// Settling time after entering RX mode (130 microseconds would do).
const LISTEN_DELAY_MS: u32 = 130;

impl<SPI, DO, DELAY> Nrf24l<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    pub(super) fn enter(&mut self, state: PowerState) {
        #[cfg(feature = "defmt")]
        #[cfg(target_os = "none")]
        defmt::trace!("power state {} -> {}", self._state.power, state);
        self._state.power = state;
    }
}

impl<SPI, DO, DELAY> EsbPower for Nrf24l<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PowerErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn power_up_rx(&mut self) -> Result<(), Self::PowerErrorType> {
        self._state.transmitting = false;
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        self.spi_write_byte(registers::CONFIG, Config::default().as_rx().into_bits())?;
        self.ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        self.clear_status_flags(StatusFlags::default().with_tx_ds(true).with_max_rt(true))?;
        self._delay_impl.delay_ms(POWER_UP_DELAY_MS);
        self.enter(PowerState::RxActive);
        Ok(())
    }

    fn power_up_tx(&mut self) -> Result<(), Self::PowerErrorType> {
        self._state.transmitting = true;
        self.spi_write_byte(registers::CONFIG, Config::default().as_tx().into_bits())?;
        self._delay_impl.delay_ms(POWER_UP_DELAY_MS);
        self.enter(PowerState::TxActive);
        Ok(())
    }

    fn start_listening(&mut self) -> Result<(), Self::PowerErrorType> {
        self._state.transmitting = false;
        self.spi_read(1, registers::CONFIG)?;
        let config = Config::from_bits(self._buf[1]).as_rx();
        self.spi_write_byte(registers::CONFIG, config.into_bits())?;
        self.clear_status_flags(StatusFlags::new())?;

        self.flush_tx()?;
        self.flush_rx()?;
        self.ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        self._delay_impl.delay_ms(LISTEN_DELAY_MS);
        self.enter(PowerState::RxActive);
        Ok(())
    }

    fn stop_listening(&mut self) -> Result<(), Self::PowerErrorType> {
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        self.flush_rx()?;
        self.flush_tx()?;
        if self.is_powered() {
            self.enter(PowerState::Standby);
        }
        Ok(())
    }

    /// In standby mode (when not receiving nor transmitting), a non-PA/LNA radio
    /// will consume about 26uA (.026mA).
    /// In full power down mode (a sleep state), the radio will consume approximately
    /// 900nA (.0009mA).
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType> {
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?; // Guarantee CE is low on powerDown
        self.spi_read(1, registers::CONFIG)?;
        let config = Config::from_bits(self._buf[1]).with_power(false);
        self.spi_write_byte(registers::CONFIG, config.into_bits())?;
        self.enter(PowerState::PowerDown);
        Ok(())
    }

    fn is_powered(&self) -> bool {
        self._state.power != PowerState::PowerDown
    }

    fn power_state(&self) -> PowerState {
        self._state.power
    }
}
