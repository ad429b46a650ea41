//! Unusual-activity scan: volume far out of line with open interest.

use chrono::NaiveDate;
use flow_core::{OptionContract, OptionType};
use serde::{Deserialize, Serialize};

/// Default volume-to-open-interest ratio above which a contract counts
/// as unusual.
pub const DEFAULT_VOLUME_THRESHOLD: f64 = 2.0;

/// Fixed projection of a contract flagged as unusual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnusualContract {
    pub strike: f64,
    pub option_type: OptionType,
    pub expiration: NaiveDate,
    pub volume: i64,
    pub open_interest: i64,
    /// `volume / (open_interest + 1)`.
    pub volume_oi_ratio: f64,
    pub dollar_flow: f64,
    pub last_price: f64,
}

/// Keep contracts whose volume/OI ratio meets `volume_threshold`.
///
/// The ratio uses the `+1`-smoothed denominator, so freshly listed
/// contracts with zero open interest are rankable rather than infinite.
/// Output is sorted descending by `(volume, dollar_flow)`.
pub fn unusual_activity(
    contracts: &[OptionContract],
    volume_threshold: f64,
) -> Vec<UnusualContract> {
    let mut unusual: Vec<UnusualContract> = contracts
        .iter()
        .filter(|c| c.volume_oi_ratio() >= volume_threshold)
        .map(|c| UnusualContract {
            strike: c.strike,
            option_type: c.option_type,
            expiration: c.expiration,
            volume: c.volume,
            open_interest: c.open_interest,
            volume_oi_ratio: c.volume_oi_ratio(),
            dollar_flow: c.dollar_flow(),
            last_price: c.last_price,
        })
        .collect();

    unusual.sort_by(|a, b| {
        b.volume.cmp(&a.volume).then_with(|| {
            b.dollar_flow
                .partial_cmp(&a.dollar_flow)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    });

    unusual
}
