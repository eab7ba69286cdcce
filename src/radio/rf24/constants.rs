/// Register offsets for the nRF24L01.
///
/// Use these with [`Nrf24l::read_register()`](fn@crate::radio::Nrf24l::read_register)
/// and friends.
pub mod registers {
    pub const CONFIG: u8 = 0x00;
    pub const EN_AA: u8 = 0x01;
    pub const RF_CH: u8 = 0x05;
    pub const RF_SETUP: u8 = 0x06;
    pub const STATUS: u8 = 0x07;
    pub const OBSERVE_TX: u8 = 0x08;
    /// Carrier Detect (named RPD on the nRF24L01+).
    pub const CD: u8 = 0x09;
    pub const RX_ADDR_P0: u8 = 0x0A;
    pub const RX_ADDR_P1: u8 = 0x0B;
    pub const TX_ADDR: u8 = 0x10;
    pub const RX_PW_P0: u8 = 0x11;
    pub const RX_PW_P1: u8 = 0x12;
    pub const FIFO_STATUS: u8 = 0x17;
    pub const DYNPD: u8 = 0x1C;
}

/// SPI command bytes for the nRF24L01.
pub mod commands {
    pub const R_REGISTER: u8 = 0x00;
    pub const W_REGISTER: u8 = 0x20;
    pub const R_RX_PAYLOAD: u8 = 0x61;
    pub const W_TX_PAYLOAD: u8 = 0xA0;
    pub const FLUSH_TX: u8 = 0xE1;
    pub const FLUSH_RX: u8 = 0xE2;
    pub const NOP: u8 = 0xFF;
}

/// Bit masks used with the register values.
pub mod mnemonics {
    /// Register addresses occupy the 5 LSBs of R_REGISTER/W_REGISTER.
    pub const REGISTER_MASK: u8 = 0x1F;
    pub const RX_EMPTY: u8 = 1;
}
