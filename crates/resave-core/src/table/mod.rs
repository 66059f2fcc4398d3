//! The conversion rule table.
//!
//! Every legal (source system, source format, target system, target format)
//! combination maps to one [`ConversionRule`]: the declared source and
//! target sizes, the placement offset inside or out of the RetroArch `.srm`
//! bundle, whether a 2-byte swap is recommended, and the output extension.
//! The table is built once and read-only afterwards; a lookup miss is not an
//! error, the pipeline resolves it to a raw copy.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::format::{SaveFormat, System};

mod builtin;

/// Lookup key for one conversion direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ConversionKey {
    pub source_system: System,
    pub source_format: SaveFormat,
    pub target_system: System,
    pub target_format: SaveFormat,
}

impl ConversionKey {
    pub fn new(
        source_system: System,
        source_format: SaveFormat,
        target_system: System,
        target_format: SaveFormat,
    ) -> Self {
        Self {
            source_system,
            source_format,
            target_system,
            target_format,
        }
    }
}

impl fmt::Display for ConversionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.source_system, self.source_format, self.target_system, self.target_format
        )
    }
}

/// Conversion parameters for one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConversionRule {
    /// Declared size of the source format in bytes.
    pub source_size: usize,
    /// Exact size of the output buffer in bytes.
    pub target_size: usize,
    /// Placement offset: positive embeds into a larger container, negative
    /// extracts a region that starts at `|offset|` in the source.
    pub offset: i64,
    /// Whether a 2-byte swap is recommended for this direction.
    pub swap: bool,
    /// Output file extension, including the leading dot.
    pub extension: &'static str,
}

/// Immutable map from [`ConversionKey`] to [`ConversionRule`].
#[derive(Debug, Clone)]
pub struct ConversionTable {
    rules: HashMap<ConversionKey, ConversionRule>,
}

impl ConversionTable {
    /// The builtin table covering every supported N64 conversion.
    pub fn builtin() -> Self {
        builtin::build()
    }

    pub fn lookup(&self, key: &ConversionKey) -> Option<&ConversionRule> {
        self.rules.get(key)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ConversionKey, &ConversionRule)> {
        self.rules.iter()
    }

    /// Target formats the table supports for a source format moving to a
    /// target system, in catalog order.
    pub fn valid_targets(
        &self,
        source_system: System,
        source_format: SaveFormat,
        target_system: System,
    ) -> Vec<SaveFormat> {
        SaveFormat::ALL
            .into_iter()
            .filter(|target_format| {
                self.rules.contains_key(&ConversionKey::new(
                    source_system,
                    source_format,
                    target_system,
                    *target_format,
                ))
            })
            .collect()
    }
}
