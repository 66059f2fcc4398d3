//! Byte-layout constants for N64 save data
//!
//! This module centralizes the declared sizes of every supported save format
//! and the interior offsets of the RetroArch `.srm` bundle. These values are
//! authoritative; the conversion table is built from them.

/// Declared on-disk sizes in bytes
pub mod size {
    /// 4 kbit (512 B) and 16 kbit EEPROMs are both stored as 2 KiB files
    pub const EEPROM: usize = 2048;

    /// Battery-backed SRAM
    pub const SRAM: usize = 32_768;

    /// FlashRAM
    pub const FLASH_RAM: usize = 131_072;

    /// Controller Pak (all four pak slots concatenated)
    pub const CONTROLLER_PAK: usize = 131_072;

    /// RetroArch `.srm` bundle holding every region at a fixed position
    pub const SRM: usize = 296_960;
}

/// Region start positions inside a RetroArch `.srm` bundle
pub mod srm {
    use super::size;

    /// Controller Pak region follows the EEPROM region
    pub const CONTROLLER_PAK_OFFSET: usize = 2048;

    /// SRAM region
    pub const SRAM_OFFSET: usize = 133_120;

    /// FlashRAM region fills the bundle to its end
    pub const FLASH_RAM_OFFSET: usize = size::SRM - size::FLASH_RAM;
}
