//! Pre-analysis chain filtering.
//!
//! Raw chains carry hundreds of near-dead contracts; screening out
//! low-volume noise before running the analytics passes keeps the
//! quantile thresholds meaningful.

use serde::{Deserialize, Serialize};

use crate::types::{OptionContract, OptionType};

/// Default minimum volume when screening a raw chain.
pub const DEFAULT_MIN_VOLUME: i64 = 10;

/// Screening criteria applied to a contract table before analysis.
///
/// All criteria are conjunctive. The default filter keeps everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContractFilter {
    /// Keep rows with `volume >= min_volume`.
    pub min_volume: i64,
    /// Keep rows with `open_interest >= min_open_interest`.
    pub min_open_interest: i64,
    /// Keep only this side of the chain, if set.
    pub option_type: Option<OptionType>,
}

impl ContractFilter {
    /// Filter with the default volume floor and no other criteria.
    pub fn with_default_volume() -> Self {
        Self {
            min_volume: DEFAULT_MIN_VOLUME,
            ..Self::default()
        }
    }

    fn matches(&self, c: &OptionContract) -> bool {
        c.volume >= self.min_volume
            && c.open_interest >= self.min_open_interest
            && self.option_type.is_none_or(|t| c.option_type == t)
    }

    /// Apply the filter, producing a new table. Input rows are untouched.
    pub fn apply(&self, contracts: &[OptionContract]) -> Vec<OptionContract> {
        contracts.iter().filter(|c| self.matches(c)).cloned().collect()
    }
}
