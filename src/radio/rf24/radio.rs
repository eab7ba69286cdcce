use super::{commands, registers, Nrf24Error, Nrf24l};
use crate::{
    radio::prelude::{EsbFifo, EsbPower, EsbRadio, EsbStatus},
    StatusFlags, TxOutcome,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

/// How many times OBSERVE_TX is polled (1 ms apart) for a payload still in flight.
const TX_POLL_LIMIT: u16 = 500;
/// How long CE is held active for each payload.
const TX_PULSE_MS: u32 = 15;

impl<SPI, DO, DELAY> Nrf24l<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Wait for the payload in flight to be acknowledged or to exhaust its retries.
    fn wait_for_tx(&mut self) -> Result<TxOutcome, Nrf24Error<SPI::Error, DO::Error>> {
        for _ in 0..TX_POLL_LIMIT {
            // the status byte comes along with OBSERVE_TX
            self.spi_read(1, registers::OBSERVE_TX)?;
            if self._status.tx_ds() {
                self._state.transmitting = false;
                return Ok(TxOutcome::Delivered);
            }
            if self._status.max_rt() {
                self._state.transmitting = false;
                return Ok(TxOutcome::Failed);
            }
            self._delay_impl.delay_ms(1);
        }
        #[cfg(feature = "defmt")]
        #[cfg(target_os = "none")]
        defmt::warn!("previous payload never finished; discarding it");
        Ok(TxOutcome::TimedOut)
    }
}

impl<SPI, DO, DELAY> EsbRadio for Nrf24l<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type RadioErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// See [`EsbRadio::send()`] for implementation-agnostic detail.
    ///
    /// This function calls [`Nrf24l::flush_tx()`] before uploading `buf`,
    /// and it leaves the CE pin inactive upon exit.
    fn send(&mut self, buf: &[u8]) -> Result<TxOutcome, Self::RadioErrorType> {
        let outcome = if self._state.transmitting {
            self.wait_for_tx()?
        } else {
            TxOutcome::Idle
        };

        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        self.power_up_tx()?;
        self.flush_tx()?;
        // a stale event would end the next is_sending() early
        self.clear_status_flags(StatusFlags::default().with_tx_ds(true).with_max_rt(true))?;

        let len = self._state.payload_length as usize;
        let copied = buf.len().min(len);
        self._buf[0] = commands::W_TX_PAYLOAD;
        self._buf[1..(copied + 1)].copy_from_slice(&buf[..copied]);
        self._buf[(copied + 1)..(len + 1)].fill(0);
        self.spi_transfer(len as u8 + 1)?;

        self.ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        self._delay_impl.delay_ms(TX_PULSE_MS);
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?;

        #[cfg(feature = "defmt")]
        #[cfg(target_os = "none")]
        defmt::debug!("sent {} byte payload; previous payload: {}", len, outcome);
        Ok(outcome)
    }

    fn is_sending(&mut self) -> Result<bool, Self::RadioErrorType> {
        if !self._state.transmitting {
            return Ok(false);
        }
        self.update()?;
        if self._status.tx_finished() {
            self.power_up_rx()?;
            return Ok(false);
        }
        Ok(true)
    }

    fn data_ready(&mut self) -> Result<bool, Self::RadioErrorType> {
        self.update()?;
        let status = self._status;
        if !status.rx_dr() {
            return Ok(false);
        }
        self.clear_status_flags(StatusFlags::default().with_rx_dr(true))?;
        if status.tx_ds() {
            // left behind by an ACK payload
            self.clear_status_flags(StatusFlags::default().with_tx_ds(true))?;
        }
        Ok(true)
    }

    fn get_data(&mut self, buf: &mut [u8]) -> Result<u8, Self::RadioErrorType> {
        let len = self._state.payload_length;
        self.spi_read(len, commands::R_RX_PAYLOAD)?;
        let copied = buf.len().min(len as usize);
        buf[..copied].copy_from_slice(&self._buf[1..(copied + 1)]);
        self.clear_status_flags(StatusFlags::default().with_rx_dr(true))?;
        Ok(copied as u8)
    }

    fn get_last_arc(&mut self) -> Result<u8, Self::RadioErrorType> {
        self.spi_read(1, registers::OBSERVE_TX)?;
        Ok(self._buf[1] & 0xF)
    }
}
