use super::{Nrf24Error, Nrf24l};
use crate::radio::prelude::EsbDetails;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

#[cfg(any(all(feature = "defmt", target_os = "none"), feature = "std"))]
use super::{bit_fields::Config, mnemonics, registers};
#[cfg(any(all(feature = "defmt", target_os = "none"), feature = "std"))]
use crate::radio::prelude::{EsbChannel, EsbDataRate, EsbPaLevel, EsbPayloadLength, EsbPower};

#[cfg(feature = "std")]
extern crate std;

impl<SPI, DO, DELAY> EsbDetails for Nrf24l<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type DetailsErrorType = Nrf24Error<SPI::Error, DO::Error>;

    #[cfg(feature = "defmt")]
    #[cfg(target_os = "none")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        let channel = self.get_channel();
        defmt::println!(
            "Channel___________________{=u8} ~ {=u16} MHz",
            channel,
            channel as u16 + 2400u16
        );

        defmt::println!("RF Data Rate______________{}", self.get_data_rate()?);
        defmt::println!("RF Power Amplifier________{}", self.get_pa_level()?);
        defmt::println!("RF LNA enabled____________{=bool}", self._setup_rf.lna_enable());
        defmt::println!(
            "Payload length____________{=u8} bytes",
            self.get_payload_length()
        );

        self.spi_read(1, registers::OBSERVE_TX)?;
        let observer = self._buf[1];
        defmt::println!(
            "Packets lost\n    on current channel____{=u8}",
            observer >> 4
        );
        defmt::println!(
            "Retry attempts made\n    for last transmission_{=u8}",
            observer & 0xF
        );

        self.spi_read(1, registers::CONFIG)?;
        let config = Config::from_bits(self._buf[1]);
        defmt::println!("CRC Length________________{=u8} bits", if config.crco() { 16 } else { 8 });
        defmt::println!("IRQ on Data Ready_________{=bool}", !config.mask_rx_dr());
        defmt::println!("    Data Ready triggered__{=bool}", self._status.rx_dr());
        defmt::println!("IRQ on Data Sent__________{=bool}", !config.mask_tx_ds());
        defmt::println!("    Data Sent triggered___{=bool}", self._status.tx_ds());
        defmt::println!("IRQ on Data Fail__________{=bool}", !config.mask_max_rt());
        defmt::println!("    Data Fail triggered___{=bool}", self._status.max_rt());

        self.spi_read(1, registers::FIFO_STATUS)?;
        defmt::println!(
            "RX FIFO empty_____________{=bool}",
            self._buf[1] & mnemonics::RX_EMPTY > 0
        );

        self.spi_read(1, registers::DYNPD)?;
        defmt::println!("Dynamic Payloads__________0b{=0..8}", self._buf[1]);

        self.spi_read(1, registers::EN_AA)?;
        defmt::println!("Auto Acknowledgment_______0b{=0..8}", self._buf[1]);
        let rx = defmt::intern!("R");
        let tx = defmt::intern!("T");
        defmt::println!(
            "Primary Mode______________{=istr}X",
            if config.is_rx() { rx } else { tx }
        );
        defmt::println!("Powered Up________________{=bool}", config.power());
        defmt::println!("Driver power state________{}", self.power_state());

        self.spi_read(5, registers::TX_ADDR)?;
        defmt::println!("TX address________________{=[u8]:02X}", &self._buf[1..6]);
        self.spi_read(5, registers::RX_ADDR_P0)?;
        defmt::println!("Pipe 0 bound to___________{=[u8]:02X}", &self._buf[1..6]);
        self.spi_read(5, registers::RX_ADDR_P1)?;
        defmt::println!("Pipe 1 bound to___________{=[u8]:02X}", &self._buf[1..6]);
        Ok(())
    }

    #[cfg(not(any(all(feature = "defmt", target_os = "none"), feature = "std")))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        Ok(())
    }

    #[cfg(feature = "std")]
    #[cfg(not(all(feature = "defmt", target_os = "none")))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        let channel = self.get_channel();
        std::println!(
            "Channel___________________{channel} ~ {} MHz",
            channel as u16 + 2400u16
        );

        std::println!("RF Data Rate______________{}", self.get_data_rate()?);
        std::println!("RF Power Amplifier________{}", self.get_pa_level()?);
        std::println!("RF LNA enabled____________{}", self._setup_rf.lna_enable());
        std::println!(
            "Payload length____________{} bytes",
            self.get_payload_length()
        );

        self.spi_read(1, registers::OBSERVE_TX)?;
        let observer = self._buf[1];
        std::println!(
            "Packets lost\n    on current channel____{}",
            observer >> 4
        );
        std::println!(
            "Retry attempts made\n    for last transmission_{}",
            observer & 0xF
        );

        self.spi_read(1, registers::CONFIG)?;
        let config = Config::from_bits(self._buf[1]);
        std::println!(
            "CRC Length________________{} bits",
            if config.crco() { 16 } else { 8 }
        );
        std::println!("IRQ on Data Ready_________{}", !config.mask_rx_dr());
        std::println!("    Data Ready triggered__{}", self._status.rx_dr());
        std::println!("IRQ on Data Sent__________{}", !config.mask_tx_ds());
        std::println!("    Data Sent triggered___{}", self._status.tx_ds());
        std::println!("IRQ on Data Fail__________{}", !config.mask_max_rt());
        std::println!("    Data Fail triggered___{}", self._status.max_rt());

        self.spi_read(1, registers::FIFO_STATUS)?;
        std::println!(
            "RX FIFO empty_____________{}",
            self._buf[1] & mnemonics::RX_EMPTY > 0
        );

        self.spi_read(1, registers::DYNPD)?;
        std::println!("Dynamic Payloads__________{:#010b}", self._buf[1]);

        self.spi_read(1, registers::EN_AA)?;
        std::println!("Auto Acknowledgment_______{:#010b}", self._buf[1]);
        std::println!(
            "Primary Mode______________{}X",
            if config.is_rx() { "R" } else { "T" }
        );
        std::println!("Powered Up________________{}", config.power());
        std::println!("Driver power state________{}", self.power_state());

        self.spi_read(5, registers::TX_ADDR)?;
        std::println!("TX address________________{:02X?}", &self._buf[1..6]);
        self.spi_read(5, registers::RX_ADDR_P0)?;
        std::println!("Pipe 0 bound to___________{:02X?}", &self._buf[1..6]);
        self.spi_read(5, registers::RX_ADDR_P1)?;
        std::println!("Pipe 1 bound to___________{:02X?}", &self._buf[1..6]);
        Ok(())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    use super::EsbDetails;
    use crate::test::mk_radio;

    #[cfg(not(feature = "std"))]
    #[test]
    fn print_nothing() {
        let mut mocks = mk_radio(&[], &[]);
        mocks.radio.print_details().unwrap();
        mocks.done();
    }

    #[cfg(feature = "std")]
    #[test]
    fn print_details() {
        extern crate std;
        use crate::{radio::rf24::registers, spi_test_expects};
        use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
        use std::vec;

        let spi_expectations = spi_test_expects![
            // get_data_rate()
            (vec![registers::RF_SETUP, 0xFFu8], vec![0xEu8, 0x06u8]),
            // get_pa_level()
            (vec![registers::RF_SETUP, 0xFFu8], vec![0xEu8, 0x06u8]),
            (vec![registers::OBSERVE_TX, 0xFFu8], vec![0xEu8, 0x23u8]),
            (vec![registers::CONFIG, 0xFFu8], vec![0xEu8, 0x0Bu8]),
            (vec![registers::FIFO_STATUS, 0xFFu8], vec![0xEu8, 0x11u8]),
            (vec![registers::DYNPD, 0xFFu8], vec![0xEu8, 0u8]),
            (vec![registers::EN_AA, 0xFFu8], vec![0xEu8, 0u8]),
            (
                vec![registers::TX_ADDR, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
                vec![0xEu8, 1, 2, 3, 4, 5],
            ),
            (
                vec![registers::RX_ADDR_P0, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
                vec![0xEu8, 1, 2, 3, 4, 5],
            ),
            (
                vec![registers::RX_ADDR_P1, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
                vec![0xEu8, 5, 4, 3, 2, 1],
            ),
        ];
        let mut mocks = mk_radio(&[], &spi_expectations);
        mocks.radio.print_details().unwrap();
        mocks.done();
    }
}
