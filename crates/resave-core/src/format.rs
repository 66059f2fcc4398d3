use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::layout::size;

/// A supported save-memory format.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
pub enum SaveFormat {
    #[strum(serialize = "EEPROM")]
    Eeprom,
    #[strum(serialize = "SRAM")]
    Sram,
    #[strum(serialize = "FlashRAM")]
    FlashRam,
    #[strum(serialize = "Controller Pak")]
    ControllerPak,
    #[strum(serialize = "RetroArch SRM")]
    RetroArchSrm,
}

impl SaveFormat {
    /// Every format, in catalog order.
    pub const ALL: [SaveFormat; 5] = [
        Self::Eeprom,
        Self::Sram,
        Self::FlashRam,
        Self::ControllerPak,
        Self::RetroArchSrm,
    ];

    /// Canonical file extension, including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Eeprom => ".eep",
            Self::Sram => ".sra",
            Self::FlashRam => ".fla",
            Self::ControllerPak => ".mpk",
            Self::RetroArchSrm => ".srm",
        }
    }

    /// Declared on-disk size in bytes.
    pub fn declared_size(&self) -> usize {
        match self {
            Self::Eeprom => size::EEPROM,
            Self::Sram => size::SRAM,
            Self::FlashRam => size::FLASH_RAM,
            Self::ControllerPak => size::CONTROLLER_PAK,
            Self::RetroArchSrm => size::SRM,
        }
    }

    /// Detect a format from a file extension, with or without the leading dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        match ext.to_ascii_lowercase().as_str() {
            "eep" => Some(Self::Eeprom),
            "sra" => Some(Self::Sram),
            "fla" => Some(Self::FlashRam),
            "mpk" => Some(Self::ControllerPak),
            "srm" => Some(Self::RetroArchSrm),
            _ => None,
        }
    }

    /// Whether byte order matters for this format. EEPROM data is stored the
    /// same way everywhere; the wider formats differ between hardware dumps
    /// and emulator saves.
    pub fn is_swappable(&self) -> bool {
        !matches!(self, Self::Eeprom)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

/// Where a save file comes from or is destined for.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
pub enum System {
    /// A dump exactly as read from original hardware.
    #[strum(serialize = "Native/Cart Dump")]
    Native,
    #[strum(serialize = "Project64/Mupen64")]
    Project64,
    #[strum(serialize = "RetroArch")]
    RetroArch,
    /// Wii/Wii U Virtual Console and EverDrive-64 dumps.
    #[strum(serialize = "Wii/WiiU/EverDrive64")]
    Everdrive,
}

impl System {
    /// Every system, in catalog order.
    pub const ALL: [System; 4] = [
        Self::Native,
        Self::Project64,
        Self::RetroArch,
        Self::Everdrive,
    ];

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}
