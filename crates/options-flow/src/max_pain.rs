//! Max-pain strike from open-interest concentration.

use std::collections::BTreeMap;

use flow_core::OptionContract;
use serde::{Deserialize, Serialize};

/// Total open interest and volume at one strike, both sides combined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrikeOpenInterest {
    pub strike: f64,
    pub open_interest: i64,
    pub volume: i64,
}

/// Max-pain estimate plus the per-strike open-interest table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaxPainResult {
    /// Strike with the largest summed open interest. 0.0 for an empty
    /// table (sentinel, not a real strike).
    pub max_pain_strike: f64,
    /// Per-strike totals sorted descending by open interest.
    pub by_strike: Vec<StrikeOpenInterest>,
}

fn strike_key(strike: f64) -> i64 {
    (strike * 100.0).round() as i64
}

/// Find the strike where open interest is concentrated.
///
/// This uses raw OI concentration as the pain proxy; it is not the
/// intrinsic-value-weighted seller-loss curve from max-pain theory. Ties
/// on open interest resolve to the lowest tied strike (first in the
/// grouped iteration order) — an arbitrary but deterministic choice.
pub fn max_pain(contracts: &[OptionContract]) -> MaxPainResult {
    if contracts.is_empty() {
        return MaxPainResult {
            max_pain_strike: 0.0,
            by_strike: Vec::new(),
        };
    }

    let mut groups: BTreeMap<i64, (f64, i64, i64)> = BTreeMap::new();
    for c in contracts {
        let entry = groups.entry(strike_key(c.strike)).or_insert((c.strike, 0, 0));
        entry.1 += c.open_interest;
        entry.2 += c.volume;
    }

    let mut max_pain_strike = 0.0;
    let mut max_oi = i64::MIN;
    let mut by_strike: Vec<StrikeOpenInterest> = Vec::with_capacity(groups.len());
    for (_, (strike, open_interest, volume)) in groups {
        if open_interest > max_oi {
            max_oi = open_interest;
            max_pain_strike = strike;
        }
        by_strike.push(StrikeOpenInterest {
            strike,
            open_interest,
            volume,
        });
    }

    by_strike.sort_by(|a, b| b.open_interest.cmp(&a.open_interest));

    MaxPainResult {
        max_pain_strike,
        by_strike,
    }
}
