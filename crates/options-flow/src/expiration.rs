//! Flow distribution across expiration dates.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use flow_core::{OptionContract, OptionType};
use serde::{Deserialize, Serialize};

/// Total activity for one expiration date, both sides combined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpirationFlow {
    pub expiration: NaiveDate,
    pub volume: i64,
    pub dollar_flow: f64,
}

/// Per-(expiration, side) slice of the breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpirationTypeFlow {
    pub expiration: NaiveDate,
    pub option_type: OptionType,
    pub volume: i64,
    pub open_interest: i64,
    pub dollar_flow: f64,
}

/// Expiration-level flow analysis.
///
/// `totals` is the primary artifact: one row per expiration, sorted
/// descending by dollar flow. `breakdown` carries the call/put split per
/// expiration in date order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpirationAnalysis {
    pub totals: Vec<ExpirationFlow>,
    pub breakdown: Vec<ExpirationTypeFlow>,
}

/// Group a chain by expiration and rank dates by dollar flow.
pub fn expiration_flow(contracts: &[OptionContract]) -> ExpirationAnalysis {
    let mut totals_map: BTreeMap<NaiveDate, (i64, f64)> = BTreeMap::new();
    let mut breakdown_map: BTreeMap<(NaiveDate, OptionType), (i64, i64, f64)> = BTreeMap::new();

    for c in contracts {
        let flow = c.dollar_flow();

        let total = totals_map.entry(c.expiration).or_insert((0, 0.0));
        total.0 += c.volume;
        total.1 += flow;

        let slice = breakdown_map
            .entry((c.expiration, c.option_type))
            .or_insert((0, 0, 0.0));
        slice.0 += c.volume;
        slice.1 += c.open_interest;
        slice.2 += flow;
    }

    let mut totals: Vec<ExpirationFlow> = totals_map
        .into_iter()
        .map(|(expiration, (volume, dollar_flow))| ExpirationFlow {
            expiration,
            volume,
            dollar_flow,
        })
        .collect();
    totals.sort_by(|a, b| {
        b.dollar_flow
            .partial_cmp(&a.dollar_flow)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let breakdown = breakdown_map
        .into_iter()
        .map(
            |((expiration, option_type), (volume, open_interest, dollar_flow))| {
                ExpirationTypeFlow {
                    expiration,
                    option_type,
                    volume,
                    open_interest,
                    dollar_flow,
                }
            },
        )
        .collect();

    ExpirationAnalysis { totals, breakdown }
}
