//! Info command implementation.

use anyhow::Result;
use owo_colors::OwoColorize;
use resave_core::storage;

use crate::cli::InfoArgs;

/// Run the info command
pub fn run(args: &InfoArgs) -> Result<()> {
    let data = storage::read_save(&args.input)?;

    println!("file:          {}", args.input.display());
    println!("size:          {} bytes", data.len());

    match storage::detect_format(&args.input) {
        Some(format) => {
            println!("format:        {} ({})", format, format.extension());
            let declared = format.declared_size();
            if data.len() == declared {
                println!("declared size: {declared} bytes ({})", "match".green());
            } else {
                println!("declared size: {declared} bytes ({})", "mismatch".yellow());
            }
            println!(
                "byte order:    {}",
                if format.is_swappable() {
                    "differs between hardware and emulators"
                } else {
                    "identical everywhere"
                }
            );
        }
        None => println!("format:        {}", "unrecognized extension".yellow()),
    }

    Ok(())
}
