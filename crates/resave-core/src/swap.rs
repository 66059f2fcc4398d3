use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Operator override for the byte-swap chunk size.
///
/// A forced size is never silently skipped, even when the conversion rule
/// says no swap is needed; this is the escape hatch for nonstandard dumps
/// the rule table does not anticipate.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
pub enum SwapOverride {
    /// Follow the conversion rule's recommendation.
    #[default]
    #[strum(serialize = "Default")]
    Default,
    /// Always swap in 2-byte chunks.
    #[strum(serialize = "2 bytes")]
    Two,
    /// Always swap in 4-byte chunks.
    #[strum(serialize = "4 bytes")]
    Four,
}

impl SwapOverride {
    /// Resolve the effective swap chunk size. A chunk size of 1 means no
    /// swap is applied.
    pub fn swap_size(self, rule_recommends_swap: bool) -> usize {
        match self {
            Self::Two => 2,
            Self::Four => 4,
            Self::Default => {
                if rule_recommends_swap {
                    2
                } else {
                    1
                }
            }
        }
    }
}
