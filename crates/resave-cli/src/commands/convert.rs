//! Convert command implementation.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use resave_core::{
    ConversionRequest, ConversionTable, Converter, SaveFormat, System, storage,
};

use crate::cli::ConvertArgs;
use crate::config::Config;

/// Run the convert command
pub fn run(args: &ConvertArgs, config: &Config) -> Result<()> {
    let data = storage::read_save(&args.input)?;

    let source_format: SaveFormat = match args.source_format {
        Some(format) => format.into(),
        None => storage::require_format(&args.input)?,
    };
    let from: System = args.from.into();
    let to: System = args.to.into();

    let converter = Converter::new();
    let target_format = match args.format {
        Some(format) => format.into(),
        None => pick_target(converter.table(), from, source_format, to)?,
    };

    let request = ConversionRequest {
        source_system: from,
        source_format,
        target_system: to,
        target_format,
        swap_override: args.swap.into(),
        source_extension: storage::file_extension(&args.input),
    };

    eprintln!(
        "{} {} ({} bytes) as {} from {}",
        "converting".cyan(),
        args.input.display(),
        data.len(),
        source_format,
        from
    );

    let conversion = converter.convert(&data, &request);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&conversion.rule)?);
    }

    let out_path = resolve_output(args, config, &conversion.extension);

    if args.dry_run {
        println!(
            "{} would write {} bytes to {}",
            "dry-run:".yellow(),
            conversion.data.len(),
            out_path.display()
        );
        return Ok(());
    }

    storage::write_save(&out_path, &conversion.data)?;
    println!(
        "{} {} ({} bytes, rule: {}, swap size: {})",
        "written:".green(),
        out_path.display(),
        conversion.data.len(),
        conversion.rule.provenance,
        conversion.rule.swap_size
    );

    Ok(())
}

/// Pick the target format when the operator did not name one. Mirrors the
/// table: unambiguous sources are auto-selected, a bundle source (four
/// possible targets) must be chosen explicitly.
fn pick_target(
    table: &ConversionTable,
    from: System,
    source_format: SaveFormat,
    to: System,
) -> Result<SaveFormat> {
    let candidates = table.valid_targets(from, source_format, to);
    match candidates.as_slice() {
        [only] => Ok(*only),
        [] => bail!(
            "no builtin conversion from {source_format} on {from} to {to}; \
             pass --format to force a raw copy"
        ),
        _ => {
            let names: Vec<String> = candidates.iter().map(ToString::to_string).collect();
            bail!("ambiguous target format, pass --format (one of: {})", names.join(", "))
        }
    }
}

fn resolve_output(args: &ConvertArgs, config: &Config, extension: &str) -> PathBuf {
    if let Some(path) = &args.output {
        return path.clone();
    }
    let name = storage::output_filename(&args.input, extension, &config.prefix, config.timestamp);
    let dir = config
        .output_dir
        .clone()
        .or_else(|| args.input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(name)
}
