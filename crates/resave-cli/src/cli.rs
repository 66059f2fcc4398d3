//! Command-line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use resave_core::{SaveFormat, SwapOverride, System};

#[derive(Parser)]
#[command(name = "resave")]
#[command(version, about = "N64 save file converter")]
#[command(after_help = "EXAMPLES:
    resave convert Game.sra --from everdrive --to retroarch
    resave convert Game.srm --from retroarch --to project64 --format sram
    resave convert Game.fla --from project64 --to native --dry-run
    resave list --from retroarch
    resave info Game.srm")]
pub struct Cli {
    /// Path to a resave.toml config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a save file between systems
    Convert(ConvertArgs),
    /// Show what a save file looks like on disk
    Info(InfoArgs),
    /// List the supported conversions
    List(ListArgs),
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Input save file (.eep, .sra, .fla, .mpk, .srm)
    pub input: PathBuf,

    /// System the save comes from
    #[arg(long, value_enum)]
    pub from: SystemArg,

    /// System the save is for
    #[arg(long, value_enum)]
    pub to: SystemArg,

    /// Source format, when the extension is missing or wrong
    #[arg(long = "as", value_enum, value_name = "FORMAT")]
    pub source_format: Option<FormatArg>,

    /// Target format; required when more than one is possible
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Output path; a generated name next to the input by default
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Byte-swap override for nonstandard dumps
    #[arg(long, value_enum, default_value_t = SwapArg::Default)]
    pub swap: SwapArg,

    /// Report what would be written without writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Print the applied rule as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct InfoArgs {
    /// Save file to inspect
    pub input: PathBuf,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only conversions from this system
    #[arg(long, value_enum)]
    pub from: Option<SystemArg>,

    /// Only conversions of this source format
    #[arg(long = "type", value_enum, value_name = "FORMAT")]
    pub format: Option<FormatArg>,

    /// Only conversions to this system
    #[arg(long, value_enum)]
    pub to: Option<SystemArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SystemArg {
    /// Unmodified cart dump
    Native,
    /// Project64 / Mupen64
    Project64,
    /// RetroArch (.srm bundle)
    Retroarch,
    /// Wii/Wii U Virtual Console and EverDrive-64
    Everdrive,
}

impl From<SystemArg> for System {
    fn from(arg: SystemArg) -> Self {
        match arg {
            SystemArg::Native => System::Native,
            SystemArg::Project64 => System::Project64,
            SystemArg::Retroarch => System::RetroArch,
            SystemArg::Everdrive => System::Everdrive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Eeprom,
    Sram,
    Flashram,
    Mpk,
    Srm,
}

impl From<FormatArg> for SaveFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Eeprom => SaveFormat::Eeprom,
            FormatArg::Sram => SaveFormat::Sram,
            FormatArg::Flashram => SaveFormat::FlashRam,
            FormatArg::Mpk => SaveFormat::ControllerPak,
            FormatArg::Srm => SaveFormat::RetroArchSrm,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SwapArg {
    /// Follow the conversion table
    Default,
    /// Force a 2-byte swap
    Two,
    /// Force a 4-byte swap
    Four,
}

impl From<SwapArg> for SwapOverride {
    fn from(arg: SwapArg) -> Self {
        match arg {
            SwapArg::Default => SwapOverride::Default,
            SwapArg::Two => SwapOverride::Two,
            SwapArg::Four => SwapOverride::Four,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_arg_enums_map_onto_core_types() {
        assert_eq!(System::from(SystemArg::Everdrive), System::Everdrive);
        assert_eq!(SaveFormat::from(FormatArg::Mpk), SaveFormat::ControllerPak);
        assert_eq!(SwapOverride::from(SwapArg::Four), SwapOverride::Four);
    }
}
