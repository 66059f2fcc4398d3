//! The conversion pipeline.
//!
//! [`Converter::convert`] is total: every `(bytes, request)` pair produces an
//! output buffer, an output extension, and a diagnostic [`AppliedRule`]. A
//! rule-table miss degrades to a raw copy, a native target forces a verbatim
//! copy, and neither is an error. All file I/O happens in the caller.

use serde::Serialize;
use strum::{Display, IntoStaticStr};
use tracing::{info, warn};

use crate::format::{SaveFormat, System};
use crate::swap::SwapOverride;
use crate::table::{ConversionKey, ConversionTable};
use crate::transform::{byteswap, resize_bytes};

/// Everything needed to convert one save file.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionRequest {
    pub source_system: System,
    pub source_format: SaveFormat,
    pub target_system: System,
    pub target_format: SaveFormat,
    pub swap_override: SwapOverride,
    /// Extension of the input file, including the leading dot. A raw-copy
    /// fallback keeps it as the output extension.
    pub source_extension: String,
}

impl ConversionRequest {
    pub fn key(&self) -> ConversionKey {
        ConversionKey::new(
            self.source_system,
            self.source_format,
            self.target_system,
            self.target_format,
        )
    }
}

/// How the applied parameters were chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, IntoStaticStr)]
pub enum RuleProvenance {
    /// A conversion table entry matched the request.
    #[strum(serialize = "table")]
    Table,
    /// The target system is native, forcing a verbatim copy.
    #[strum(serialize = "native")]
    NativeTarget,
    /// No table entry matched; the input was copied as-is.
    #[strum(serialize = "fallback")]
    Fallback,
}

/// Diagnostic record of the parameters a conversion actually used.
#[derive(Debug, Clone, Serialize)]
pub struct AppliedRule {
    pub key: ConversionKey,
    pub provenance: RuleProvenance,
    pub input_size: usize,
    pub target_size: usize,
    pub offset: i64,
    pub swap_recommended: bool,
    pub swap_size: usize,
    pub extension: String,
}

/// Output of one conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub data: Vec<u8>,
    pub extension: String,
    pub rule: AppliedRule,
}

/// Runs conversions against an immutable rule table.
#[derive(Debug, Clone)]
pub struct Converter {
    table: ConversionTable,
}

impl Converter {
    /// A converter over the builtin table.
    pub fn new() -> Self {
        Self {
            table: ConversionTable::builtin(),
        }
    }

    pub fn with_table(table: ConversionTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ConversionTable {
        &self.table
    }

    /// Convert `input` according to `request`.
    pub fn convert(&self, input: &[u8], request: &ConversionRequest) -> Conversion {
        let key = request.key();

        let (mut target_size, mut offset, mut swap, mut extension, mut provenance) =
            match self.table.lookup(&key) {
                Some(rule) => {
                    info!("using conversion table entry: {key}");
                    (
                        rule.target_size,
                        rule.offset,
                        rule.swap,
                        rule.extension.to_string(),
                        RuleProvenance::Table,
                    )
                }
                None => {
                    warn!("no matching conversion for {key}; defaulting to raw copy");
                    (
                        input.len(),
                        0,
                        false,
                        request.source_extension.clone(),
                        RuleProvenance::Fallback,
                    )
                }
            };

        // A native dump is a verbatim copy of whatever came in, never
        // resized or reordered, whatever the table says.
        if request.target_system == System::Native {
            info!("target is native; using direct copy settings");
            target_size = input.len();
            offset = 0;
            swap = false;
            extension = request.target_format.extension().to_string();
            provenance = RuleProvenance::NativeTarget;
        }

        info!(
            "resizing data to {} bytes (offset {})",
            target_size, offset
        );
        let data = resize_bytes(input, target_size, offset);

        let swap_size = request.swap_override.swap_size(swap);
        let data = if swap_size > 1 {
            info!("applying {swap_size}-byte swap");
            byteswap(&data, swap_size)
        } else {
            info!("no byte swap applied");
            data
        };

        let rule = AppliedRule {
            key,
            provenance,
            input_size: input.len(),
            target_size,
            offset,
            swap_recommended: swap,
            swap_size,
            extension: extension.clone(),
        };

        Conversion {
            data,
            extension,
            rule,
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{size, srm};

    fn request(
        source_system: System,
        source_format: SaveFormat,
        target_system: System,
        target_format: SaveFormat,
    ) -> ConversionRequest {
        ConversionRequest {
            source_system,
            source_format,
            target_system,
            target_format,
            swap_override: SwapOverride::Default,
            source_extension: source_format.extension().to_string(),
        }
    }

    fn pattern(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 251) as u8).collect()
    }

    #[test]
    fn test_output_length_matches_rule_for_every_key() {
        let converter = Converter::new();
        for (key, rule) in converter.table().iter() {
            let input = pattern(rule.source_size);
            let mut req = request(
                key.source_system,
                key.source_format,
                key.target_system,
                key.target_format,
            );
            req.source_extension = ".bin".to_string();
            let conversion = converter.convert(&input, &req);

            if key.target_system == System::Native {
                assert_eq!(conversion.data.len(), input.len(), "{key}");
            } else {
                assert_eq!(conversion.data.len(), rule.target_size, "{key}");
            }
        }
    }

    #[test]
    fn test_sram_embeds_into_bundle() {
        let converter = Converter::new();
        let input = pattern(size::SRAM);
        let conversion = converter.convert(
            &input,
            &request(
                System::Everdrive,
                SaveFormat::Sram,
                System::RetroArch,
                SaveFormat::RetroArchSrm,
            ),
        );

        assert_eq!(conversion.data.len(), size::SRM);
        assert_eq!(conversion.extension, ".srm");

        let region = &conversion.data[srm::SRAM_OFFSET..srm::SRAM_OFFSET + size::SRAM];
        assert_eq!(region, byteswap(&input, 2).as_slice());
        assert!(conversion.data[..srm::SRAM_OFFSET].iter().all(|&b| b == 0));
        assert!(
            conversion.data[srm::SRAM_OFFSET + size::SRAM..]
                .iter()
                .all(|&b| b == 0)
        );
    }

    #[test]
    fn test_bundle_extracts_flash_ram() {
        let converter = Converter::new();
        let mut input = vec![0u8; size::SRM];
        input[srm::FLASH_RAM_OFFSET..srm::FLASH_RAM_OFFSET + 4]
            .copy_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);

        let conversion = converter.convert(
            &input,
            &request(
                System::RetroArch,
                SaveFormat::RetroArchSrm,
                System::Everdrive,
                SaveFormat::FlashRam,
            ),
        );

        assert_eq!(conversion.data.len(), size::FLASH_RAM);
        assert_eq!(conversion.extension, ".fla");
        assert_eq!(&conversion.data[..4], &[0xAD, 0xDE, 0xEF, 0xBE]);
        assert!(conversion.data[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_unknown_pair_falls_back_to_raw_copy() {
        let converter = Converter::new();
        let input = pattern(1000);
        let mut req = request(
            System::Project64,
            SaveFormat::Eeprom,
            System::Everdrive,
            SaveFormat::Eeprom,
        );
        req.source_extension = ".sav".to_string();

        let conversion = converter.convert(&input, &req);
        assert_eq!(conversion.data, input);
        assert_eq!(conversion.extension, ".sav");
        assert_eq!(conversion.rule.provenance, RuleProvenance::Fallback);
        assert_eq!(conversion.rule.swap_size, 1);
    }

    #[test]
    fn test_native_target_forces_verbatim_copy() {
        // The table entry for this key extracts and resizes; a native target
        // must win over it and copy the bundle untouched.
        let converter = Converter::new();
        let input = pattern(size::SRM);
        let conversion = converter.convert(
            &input,
            &request(
                System::RetroArch,
                SaveFormat::RetroArchSrm,
                System::Native,
                SaveFormat::Sram,
            ),
        );

        assert_eq!(conversion.data, input);
        assert_eq!(conversion.extension, ".sra");
        assert_eq!(conversion.rule.provenance, RuleProvenance::NativeTarget);
        assert_eq!(conversion.rule.offset, 0);
        assert!(!conversion.rule.swap_recommended);
    }

    #[test]
    fn test_native_target_with_odd_input_length() {
        let converter = Converter::new();
        let input = pattern(12_345);
        let conversion = converter.convert(
            &input,
            &request(
                System::Everdrive,
                SaveFormat::Sram,
                System::Native,
                SaveFormat::Sram,
            ),
        );
        assert_eq!(conversion.data, input);
    }

    #[test]
    fn test_forced_swap_overrides_rule() {
        let converter = Converter::new();
        let input = pattern(size::CONTROLLER_PAK);
        let mut req = request(
            System::Project64,
            SaveFormat::ControllerPak,
            System::RetroArch,
            SaveFormat::RetroArchSrm,
        );
        req.swap_override = SwapOverride::Four;

        let conversion = converter.convert(&input, &req);
        assert_eq!(conversion.rule.swap_size, 4);
        assert!(!conversion.rule.swap_recommended);

        let region = &conversion.data
            [srm::CONTROLLER_PAK_OFFSET..srm::CONTROLLER_PAK_OFFSET + size::CONTROLLER_PAK];
        assert_eq!(region, byteswap(&input, 4).as_slice());
    }

    #[test]
    fn test_short_input_is_zero_padded() {
        // An undersized dump is normalized to the declared target size.
        let converter = Converter::new();
        let input = pattern(1024);
        let conversion = converter.convert(
            &input,
            &request(
                System::Everdrive,
                SaveFormat::Eeprom,
                System::RetroArch,
                SaveFormat::RetroArchSrm,
            ),
        );
        assert_eq!(conversion.data.len(), size::SRM);
        assert_eq!(&conversion.data[..1024], input.as_slice());
        assert!(conversion.data[1024..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_record_reflects_applied_parameters() {
        let converter = Converter::new();
        let input = pattern(size::SRAM);
        let conversion = converter.convert(
            &input,
            &request(
                System::Native,
                SaveFormat::Sram,
                System::RetroArch,
                SaveFormat::RetroArchSrm,
            ),
        );

        let rule = &conversion.rule;
        assert_eq!(rule.provenance, RuleProvenance::Table);
        assert_eq!(rule.input_size, size::SRAM);
        assert_eq!(rule.target_size, size::SRM);
        assert_eq!(rule.offset, srm::SRAM_OFFSET as i64);
        assert!(rule.swap_recommended);
        assert_eq!(rule.swap_size, 2);
        assert_eq!(rule.extension, ".srm");
    }
}
