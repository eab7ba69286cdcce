use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};
pub(crate) mod bit_fields;
mod channel;
mod init;
use bit_fields::SetupRf;
mod constants;
mod data_rate;
mod fifo;
mod pa_level;
mod payload_length;
mod pipe;
mod power;
mod radio;
pub use constants::{commands, mnemonics, registers};
mod details;
mod status;
use super::config::{DEFAULT_CHANNEL, DEFAULT_PAYLOAD_LENGTH};
use crate::{types::DeviceState, StatusFlags};

/// An collection of error types to describe hardware malfunctions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nrf24Error<SPI, DO> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a DigitalOutput error (on either the CE or CSN pin).
    Gpo(DO),
    /// Represents a corruption of binary data (as it was transferred over the SPI bus' MISO)
    BinaryCorruption,
}

#[cfg(feature = "defmt")]
impl<SPI, DO> defmt::Format for Nrf24Error<SPI, DO> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Nrf24Error::Spi(_) => defmt::write!(fmt, "SPI bus error"),
            Nrf24Error::Gpo(_) => defmt::write!(fmt, "output pin error"),
            Nrf24Error::BinaryCorruption => defmt::write!(fmt, "binary corruption"),
        }
    }
}

/// This struct implements the [`Esb*` traits](mod@crate::radio::prelude)
/// for the nRF24L01 transceiver.
///
/// The radio's CSN pin is driven by this struct around every command,
/// so `spi` must be a bare [`SpiBus`] (not a [`SpiDevice`](trait@embedded_hal::spi::SpiDevice)).
/// Both control pins share one type `DO`; most HALs offer a type-erased output pin for this.
pub struct Nrf24l<SPI, DO, DELAY> {
    _spi: SPI,
    /// The CE pin for the radio.
    ///
    /// This really only exposed for advanced manipulation of active TX/RX mode.
    /// It is strongly recommended to change modes using the
    /// [`EsbPower`](trait@crate::radio::prelude::EsbPower) functions because
    /// they guarantee proper radio usage.
    pub ce_pin: DO,
    csn_pin: DO,
    _delay_impl: DELAY,
    _buf: [u8; 33],
    _status: StatusFlags,
    _setup_rf: SetupRf,
    _state: DeviceState,
}

impl<SPI, DO, DELAY> Nrf24l<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Instantiate an [`Nrf24l`] object for use on the specified
    /// `spi` bus with the given `ce_pin` and `csn_pin`.
    ///
    /// Nothing is sent to the radio until
    /// [`init()`](fn@crate::radio::prelude::EsbInit::init) is called.
    pub fn new(ce_pin: DO, csn_pin: DO, spi: SPI, delay_impl: DELAY) -> Nrf24l<SPI, DO, DELAY> {
        Nrf24l {
            ce_pin,
            csn_pin,
            _spi: spi,
            _delay_impl: delay_impl,
            _status: StatusFlags::from_bits(0),
            _buf: [0u8; 33],
            // 1 Mbps, max PA level
            _setup_rf: SetupRf::default(),
            _state: DeviceState::new(DEFAULT_CHANNEL, DEFAULT_PAYLOAD_LENGTH),
        }
    }

    /// Exchange the first `len` bytes of the internal buffer with the radio.
    ///
    /// The CSN pin is released even if the bus reports an error.
    fn spi_transfer(&mut self, len: u8) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.csn_pin.set_low().map_err(Nrf24Error::Gpo)?;
        let result = self
            ._spi
            .transfer_in_place(&mut self._buf[..len as usize])
            .and_then(|_| self._spi.flush());
        self.csn_pin.set_high().map_err(Nrf24Error::Gpo)?;
        result.map_err(Nrf24Error::Spi)?;
        self._status = StatusFlags::from_bits(self._buf[0]);
        Ok(())
    }

    /// This is also used to write SPI commands that consist of 1 byte:
    /// ```ignore
    /// self.spi_read(0, commands::NOP)?;
    /// // STATUS register is now stored in self._status
    /// ```
    fn spi_read(&mut self, len: u8, command: u8) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self._buf[0] = command;
        self._buf[1..(len as usize + 1)].fill(commands::NOP);
        self.spi_transfer(len + 1)
    }

    fn spi_write_byte(
        &mut self,
        register: u8,
        byte: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self._buf[0] = commands::W_REGISTER | (register & mnemonics::REGISTER_MASK);
        self._buf[1] = byte;
        self.spi_transfer(2)
    }

    fn spi_write_buf(
        &mut self,
        register: u8,
        buf: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self._buf[0] = commands::W_REGISTER | (register & mnemonics::REGISTER_MASK);
        let buf_len = buf.len().min(32);
        self._buf[1..(buf_len + 1)].copy_from_slice(&buf[..buf_len]);
        self.spi_transfer(buf_len as u8 + 1)
    }

    /// Read `buf.len()` bytes (up to 32) from the register at `address`.
    ///
    /// The `address` is not validated; only its 5 LSBs are used.
    /// Pass one of the [`registers`](mod@crate::radio::registers) constants.
    ///
    /// ```
    /// use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};
    /// use nrf24l::radio::{registers, Nrf24Error, Nrf24l};
    ///
    /// /// Turn on the LNA gain bit, keeping the rest of RF_SETUP.
    /// fn enable_lna<SPI: SpiBus, DO: OutputPin, DELAY: DelayNs>(
    ///     radio: &mut Nrf24l<SPI, DO, DELAY>,
    /// ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
    ///     let mut setup = [0u8];
    ///     radio.read_register(registers::RF_SETUP, &mut setup)?;
    ///     radio.config_register(registers::RF_SETUP, setup[0] | 1)
    /// }
    /// ```
    pub fn read_register(
        &mut self,
        address: u8,
        buf: &mut [u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let len = buf.len().min(32);
        self.spi_read(
            len as u8,
            commands::R_REGISTER | (address & mnemonics::REGISTER_MASK),
        )?;
        buf[..len].copy_from_slice(&self._buf[1..(len + 1)]);
        Ok(())
    }

    /// Write `buf` (up to 32 bytes) to the register at `address`.
    ///
    /// The `address` is not validated; only its 5 LSBs are used.
    pub fn write_register(
        &mut self,
        address: u8,
        buf: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_write_buf(address, buf)
    }

    /// Write a single byte to the register at `address`.
    pub fn config_register(
        &mut self,
        address: u8,
        value: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_write_byte(address, value)
    }

    /// Was there a carrier on the channel during the last listening period?
    ///
    /// Useful to check for interference on the current channel.
    pub fn test_carrier(&mut self) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_read(1, registers::CD)?;
        Ok(self._buf[1] & 1 == 1)
    }

    /// The driver's view of the radio.
    pub fn state(&self) -> &DeviceState {
        &self._state
    }
}
