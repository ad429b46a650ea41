//! Volume and flow distribution across strike prices.

use std::collections::BTreeMap;

use flow_core::{FlowResult, Moneyness, OptionContract, OptionType, validate_price};
use serde::{Deserialize, Serialize};

/// Aggregated activity at one `(strike, option_type)` level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrikeLevel {
    pub strike: f64,
    pub option_type: OptionType,
    pub volume: i64,
    pub open_interest: i64,
    pub dollar_flow: f64,
    /// Mean of last prices over the rows in the group.
    pub avg_last_price: f64,
    /// `strike - current_price`.
    pub distance_from_price: f64,
    /// Distance as a percentage of the current price.
    pub distance_pct: f64,
    pub moneyness: Moneyness,
}

// Strikes come from exchange-listed chains, so scaling to integer cents
// gives an exact, hashable group key.
fn strike_key(strike: f64) -> i64 {
    (strike * 100.0).round() as i64
}

/// Group a chain by `(strike, option_type)` and relate each level to the
/// current underlying price.
///
/// Result is sorted descending by summed volume; ties keep ascending
/// `(strike, side)` order, which is stable across runs. A non-positive
/// `current_price` is a caller error, surfaced here rather than producing
/// meaningless distances.
pub fn strike_distribution(
    contracts: &[OptionContract],
    current_price: f64,
) -> FlowResult<Vec<StrikeLevel>> {
    validate_price(current_price)?;
    if contracts.is_empty() {
        return Ok(Vec::new());
    }

    struct Acc {
        strike: f64,
        volume: i64,
        open_interest: i64,
        dollar_flow: f64,
        price_sum: f64,
        rows: usize,
    }

    let mut groups: BTreeMap<(i64, OptionType), Acc> = BTreeMap::new();
    for c in contracts {
        let acc = groups.entry((strike_key(c.strike), c.option_type)).or_insert(Acc {
            strike: c.strike,
            volume: 0,
            open_interest: 0,
            dollar_flow: 0.0,
            price_sum: 0.0,
            rows: 0,
        });
        acc.volume += c.volume;
        acc.open_interest += c.open_interest;
        acc.dollar_flow += c.dollar_flow();
        acc.price_sum += c.last_price;
        acc.rows += 1;
    }

    let mut levels: Vec<StrikeLevel> = groups
        .into_iter()
        .map(|((_, option_type), acc)| {
            let distance_from_price = acc.strike - current_price;
            StrikeLevel {
                strike: acc.strike,
                option_type,
                volume: acc.volume,
                open_interest: acc.open_interest,
                dollar_flow: acc.dollar_flow,
                avg_last_price: acc.price_sum / acc.rows as f64,
                distance_from_price,
                distance_pct: distance_from_price / current_price * 100.0,
                moneyness: Moneyness::classify(option_type, acc.strike, current_price),
            }
        })
        .collect();

    levels.sort_by(|a, b| b.volume.cmp(&a.volume));
    Ok(levels)
}
