//! Sweep detection: quantile-based classification of large trades.
//!
//! A sweep is a large order executed rapidly, often split across
//! exchanges and often institutional. Without per-print exchange data
//! the engine infers sweeps from the shape of the daily row: volume in
//! the table's upper tail combined with either a high volume/OI ratio
//! or upper-tail dollar flow.

use flow_core::stats::quantile;
use flow_core::{OptionContract, TradeType};
use serde::{Deserialize, Serialize};

/// Default sweep threshold. Reserved knob: accepted by [`detect_sweeps`]
/// but not consulted by the classification rule (see there).
pub const DEFAULT_SWEEP_THRESHOLD: f64 = 0.5;

/// Volume/OI ratio at or above which a large-volume row counts as a sweep.
const SWEEP_VOL_OI_RATIO: f64 = 2.0;

/// Distribution thresholds precomputed once per table.
///
/// Quantiles are recomputed on every call over the entire input — there
/// is no running or streaming quantile state, so classification is a
/// pure function of the table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowQuantiles {
    /// 75th percentile of volume (block floor).
    pub p75_volume: f64,
    /// 95th percentile of volume (sweep floor).
    pub p95_volume: f64,
    /// 90th percentile of dollar flow.
    pub p90_flow: f64,
    /// 95th percentile of dollar flow (confidence scale).
    pub p95_flow: f64,
}

impl FlowQuantiles {
    /// Compute the thresholds for one table. All zeros on an empty table.
    pub fn from_table(contracts: &[OptionContract]) -> Self {
        let volumes: Vec<f64> = contracts.iter().map(|c| c.volume as f64).collect();
        let flows: Vec<f64> = contracts.iter().map(|c| c.dollar_flow()).collect();
        Self {
            p75_volume: quantile(&volumes, 0.75),
            p95_volume: quantile(&volumes, 0.95),
            p90_flow: quantile(&flows, 0.90),
            p95_flow: quantile(&flows, 0.95),
        }
    }
}

/// A contract annotated with its trade classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedContract {
    pub contract: OptionContract,
    pub trade_type: TradeType,
    /// In `[0, 1]`; 0.0 for anything not classified as a sweep.
    pub sweep_confidence: f64,
}

/// Classify one row against precomputed table quantiles.
///
/// First match wins: sweep, then block, then retail.
pub fn classify_trade(contract: &OptionContract, quantiles: &FlowQuantiles) -> TradeType {
    let volume = contract.volume as f64;
    let is_large_volume = volume >= quantiles.p95_volume;
    let is_high_vol_oi = contract.volume_oi_ratio() >= SWEEP_VOL_OI_RATIO;
    let is_large_dollar_flow = contract.dollar_flow() >= quantiles.p90_flow;

    if is_large_volume && (is_high_vol_oi || is_large_dollar_flow) {
        TradeType::Sweep
    } else if volume >= quantiles.p75_volume {
        TradeType::Block
    } else {
        TradeType::Retail
    }
}

// Ratio of value to a distribution scale, clamped to [0, cap] and
// normalized to [0, 1]. A zero scale scores 0 rather than dividing.
fn capped_score(value: f64, scale: f64, cap: f64) -> f64 {
    if scale <= 0.0 {
        return 0.0;
    }
    (value / scale).min(cap) / cap
}

/// Confidence that a row really is a sweep.
///
/// 0.0 for non-sweeps. For sweeps, the mean of three components, each
/// clamped to `[0, 1]`: volume vs. its 95th percentile (capped at 3x),
/// the smoothed volume/OI ratio (capped at 5), and dollar flow vs. its
/// 95th percentile (capped at 2x). Always in `[0, 1]`.
pub fn sweep_confidence(
    contract: &OptionContract,
    quantiles: &FlowQuantiles,
    trade_type: TradeType,
) -> f64 {
    if trade_type != TradeType::Sweep {
        return 0.0;
    }

    let volume_score = capped_score(contract.volume as f64, quantiles.p95_volume, 3.0);
    let vol_oi_score = (contract.volume_oi_ratio().min(5.0)) / 5.0;
    let dollar_score = capped_score(contract.dollar_flow(), quantiles.p95_flow, 2.0);

    (volume_score + vol_oi_score + dollar_score) / 3.0
}

/// Classify every row of a table.
///
/// `sweep_threshold` is a reserved parameter: it is accepted for API
/// stability but deliberately not consulted by the decision rule. Wiring
/// it into the rule would change observable classifications, so any
/// future use must be an explicit behavior change.
pub fn detect_sweeps(
    contracts: &[OptionContract],
    sweep_threshold: f64,
) -> Vec<ClassifiedContract> {
    let _ = sweep_threshold;
    if contracts.is_empty() {
        return Vec::new();
    }

    let quantiles = FlowQuantiles::from_table(contracts);
    tracing::debug!(
        p75_volume = quantiles.p75_volume,
        p95_volume = quantiles.p95_volume,
        p90_flow = quantiles.p90_flow,
        "classifying {} contracts",
        contracts.len()
    );

    contracts
        .iter()
        .map(|c| {
            let trade_type = classify_trade(c, &quantiles);
            ClassifiedContract {
                contract: c.clone(),
                trade_type,
                sweep_confidence: sweep_confidence(c, &quantiles, trade_type),
            }
        })
        .collect()
}
