//! List command implementation.

use anyhow::Result;
use resave_core::{ConversionTable, SaveFormat, System};

use crate::cli::ListArgs;

/// Run the list command
pub fn run(args: &ListArgs) -> Result<()> {
    let table = ConversionTable::builtin();
    let from: Option<System> = args.from.map(Into::into);
    let format: Option<SaveFormat> = args.format.map(Into::into);
    let to: Option<System> = args.to.map(Into::into);

    let mut rows: Vec<_> = table
        .iter()
        .filter(|(key, _)| from.is_none_or(|s| key.source_system == s))
        .filter(|(key, _)| format.is_none_or(|f| key.source_format == f))
        .filter(|(key, _)| to.is_none_or(|s| key.target_system == s))
        .collect();
    rows.sort_by_key(|(key, _)| key.to_string());

    for (key, rule) in &rows {
        println!(
            "{:<58} {:>7} -> {:>7} bytes, offset {:>7}, swap {}  {}",
            key.to_string(),
            rule.source_size,
            rule.target_size,
            rule.offset,
            if rule.swap { "yes" } else { "no " },
            rule.extension
        );
    }
    println!();
    println!("{} of {} conversions", rows.len(), table.len());

    Ok(())
}
