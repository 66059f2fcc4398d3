//! The builtin conversion entries.
//!
//! Offsets follow the `.srm` interior layout: embedding into the bundle uses
//! the region's start position, extracting uses its negation. Swap
//! recommendations apply only to directions that cross between hardware
//! byte order and emulator byte order; Project64 and the mupen64plus core
//! share byte order, so emulator-to-emulator moves copy bytes as-is.

use std::collections::HashMap;

use super::{ConversionKey, ConversionRule, ConversionTable};
use crate::format::SaveFormat::{ControllerPak, Eeprom, FlashRam, RetroArchSrm, Sram};
use crate::format::System::{Everdrive, Native, Project64, RetroArch};
use crate::format::{SaveFormat, System};
use crate::layout::srm;

const SRA_OFFSET: i64 = srm::SRAM_OFFSET as i64;
const FLA_OFFSET: i64 = srm::FLASH_RAM_OFFSET as i64;
const MPK_OFFSET: i64 = srm::CONTROLLER_PAK_OFFSET as i64;

#[derive(Default)]
struct Builder {
    rules: HashMap<ConversionKey, ConversionRule>,
}

impl Builder {
    fn add(&mut self, source: (System, SaveFormat), target: (System, SaveFormat), offset: i64, swap: bool) {
        let key = ConversionKey::new(source.0, source.1, target.0, target.1);
        let rule = ConversionRule {
            source_size: source.1.declared_size(),
            target_size: target.1.declared_size(),
            offset,
            swap,
            extension: target.1.extension(),
        };
        let previous = self.rules.insert(key, rule);
        debug_assert!(previous.is_none(), "duplicate conversion rule for {key}");
    }
}

pub(super) fn build() -> ConversionTable {
    let mut t = Builder::default();

    // Wii/WiiU/EverDrive64 dumps
    t.add((Everdrive, Eeprom), (RetroArch, RetroArchSrm), 0, false);
    t.add((Everdrive, Eeprom), (Native, Eeprom), 0, false);
    t.add((Everdrive, Sram), (Project64, Sram), 0, true);
    t.add((Everdrive, Sram), (RetroArch, RetroArchSrm), SRA_OFFSET, true);
    t.add((Everdrive, Sram), (Native, Sram), 0, false);
    t.add((Everdrive, FlashRam), (Project64, FlashRam), 0, true);
    t.add((Everdrive, FlashRam), (RetroArch, RetroArchSrm), FLA_OFFSET, true);
    t.add((Everdrive, FlashRam), (Native, FlashRam), 0, false);
    t.add((Everdrive, ControllerPak), (RetroArch, RetroArchSrm), MPK_OFFSET, false);
    t.add((Everdrive, ControllerPak), (Native, ControllerPak), 0, false);

    // Project64/Mupen64 saves
    t.add((Project64, Eeprom), (RetroArch, RetroArchSrm), 0, false);
    t.add((Project64, Eeprom), (Native, Eeprom), 0, false);
    t.add((Project64, Sram), (Everdrive, Sram), 0, true);
    t.add((Project64, Sram), (RetroArch, RetroArchSrm), SRA_OFFSET, false);
    t.add((Project64, Sram), (Native, Sram), 0, false);
    t.add((Project64, FlashRam), (Everdrive, FlashRam), 0, true);
    t.add((Project64, FlashRam), (RetroArch, RetroArchSrm), FLA_OFFSET, false);
    t.add((Project64, FlashRam), (Native, FlashRam), 0, false);
    t.add((Project64, ControllerPak), (RetroArch, RetroArchSrm), MPK_OFFSET, false);
    t.add((Project64, ControllerPak), (Native, ControllerPak), 0, false);

    // RetroArch bundles
    t.add((RetroArch, RetroArchSrm), (Everdrive, Eeprom), 0, false);
    t.add((RetroArch, RetroArchSrm), (Everdrive, Sram), -SRA_OFFSET, true);
    t.add((RetroArch, RetroArchSrm), (Everdrive, FlashRam), -FLA_OFFSET, true);
    t.add((RetroArch, RetroArchSrm), (Everdrive, ControllerPak), -MPK_OFFSET, false);
    t.add((RetroArch, RetroArchSrm), (Project64, Eeprom), 0, false);
    t.add((RetroArch, RetroArchSrm), (Project64, Sram), -SRA_OFFSET, false);
    t.add((RetroArch, RetroArchSrm), (Project64, FlashRam), -FLA_OFFSET, false);
    t.add((RetroArch, RetroArchSrm), (Project64, ControllerPak), -MPK_OFFSET, false);
    t.add((RetroArch, RetroArchSrm), (Native, Sram), -SRA_OFFSET, false);

    // Cart dumps going out
    t.add((Native, Eeprom), (RetroArch, RetroArchSrm), 0, false);
    t.add((Native, Sram), (RetroArch, RetroArchSrm), SRA_OFFSET, true);
    t.add((Native, FlashRam), (RetroArch, RetroArchSrm), FLA_OFFSET, true);
    t.add((Native, ControllerPak), (RetroArch, RetroArchSrm), MPK_OFFSET, false);
    t.add((Native, Eeprom), (Project64, Eeprom), 0, false);
    t.add((Native, Sram), (Project64, Sram), 0, true);
    t.add((Native, FlashRam), (Project64, FlashRam), 0, true);
    t.add((Native, ControllerPak), (Project64, ControllerPak), 0, false);

    ConversionTable { rules: t.rules }
}
