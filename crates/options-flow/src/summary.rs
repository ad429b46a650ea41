//! Aggregate call/put flow summary.

use flow_core::{OptionContract, OptionType};
use serde::{Deserialize, Serialize};

/// Aggregate directional picture of one chain's daily flow.
///
/// Derived entirely from the input table; recomputed on demand, never
/// cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowSummary {
    pub total_call_volume: i64,
    pub total_put_volume: i64,
    pub total_call_flow: f64,
    pub total_put_flow: f64,
    /// Call volume minus put volume.
    pub net_volume: i64,
    /// Call dollar flow minus put dollar flow.
    pub net_dollar_flow: f64,
    /// Put volume over call volume; 0.0 when there is no call volume.
    pub put_call_ratio: f64,
    pub total_contracts: usize,
    /// True when net dollar flow is positive.
    pub bullish_sentiment: bool,
}

/// Summarize call/put volume and dollar flow for a chain.
///
/// Returns `None` on an empty table: "no data" is a valid outcome, not
/// a failure.
pub fn flow_summary(contracts: &[OptionContract]) -> Option<FlowSummary> {
    if contracts.is_empty() {
        return None;
    }

    let mut total_call_volume = 0i64;
    let mut total_put_volume = 0i64;
    let mut total_call_flow = 0.0;
    let mut total_put_flow = 0.0;

    for c in contracts {
        match c.option_type {
            OptionType::Call => {
                total_call_volume += c.volume;
                total_call_flow += c.dollar_flow();
            }
            OptionType::Put => {
                total_put_volume += c.volume;
                total_put_flow += c.dollar_flow();
            }
        }
    }

    let net_volume = total_call_volume - total_put_volume;
    let net_dollar_flow = total_call_flow - total_put_flow;
    let put_call_ratio = if total_call_volume > 0 {
        total_put_volume as f64 / total_call_volume as f64
    } else {
        0.0
    };

    Some(FlowSummary {
        total_call_volume,
        total_put_volume,
        total_call_flow,
        total_put_flow,
        net_volume,
        net_dollar_flow,
        put_call_ratio,
        total_contracts: contracts.len(),
        bullish_sentiment: net_dollar_flow > 0.0,
    })
}
