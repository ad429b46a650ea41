//! How much of the directional picture is driven by sweeps.

use flow_core::{OptionContract, TradeType};
use serde::{Deserialize, Serialize};

use crate::summary::{FlowSummary, flow_summary};
use crate::sweep::ClassifiedContract;

/// Shift in the headline metrics when sweeps are removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactDelta {
    /// `net_volume(without sweeps) - net_volume(all trades)`.
    pub volume_change: i64,
    /// `net_dollar_flow(without sweeps) - net_dollar_flow(all trades)`.
    pub dollar_flow_change: f64,
    /// True when removing sweeps flips the bullish flag.
    pub sentiment_change: bool,
}

/// Flow summaries of the full table and its sweep / non-sweep partitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepImpact {
    pub all_trades: Option<FlowSummary>,
    pub without_sweeps: Option<FlowSummary>,
    pub sweeps_only: Option<FlowSummary>,
    /// Populated only when both the all-trades and without-sweeps
    /// summaries exist.
    pub impact: Option<ImpactDelta>,
    pub sweep_count: usize,
    pub total_count: usize,
    /// `sweep_count / total_count * 100`; 0.0 for an empty input.
    pub sweep_percentage: f64,
}

fn partition_table(classified: &[ClassifiedContract]) -> (Vec<OptionContract>, Vec<OptionContract>) {
    let mut sweeps = Vec::new();
    let mut rest = Vec::new();
    for row in classified {
        if row.trade_type == TradeType::Sweep {
            sweeps.push(row.contract.clone());
        } else {
            rest.push(row.contract.clone());
        }
    }
    (sweeps, rest)
}

/// Compare flow sentiment with and without the detected sweeps.
///
/// Sweeps often hedge rather than express direction, so the without-sweeps
/// summary can read cleaner than the headline numbers.
pub fn sweep_impact(classified: &[ClassifiedContract]) -> SweepImpact {
    let (sweeps, rest) = partition_table(classified);

    let all: Vec<OptionContract> = classified.iter().map(|r| r.contract.clone()).collect();
    let all_trades = flow_summary(&all);
    let without_sweeps = flow_summary(&rest);
    let sweeps_only = flow_summary(&sweeps);

    let impact = match (&all_trades, &without_sweeps) {
        (Some(all), Some(without)) => Some(ImpactDelta {
            volume_change: without.net_volume - all.net_volume,
            dollar_flow_change: without.net_dollar_flow - all.net_dollar_flow,
            sentiment_change: without.bullish_sentiment != all.bullish_sentiment,
        }),
        _ => None,
    };

    let total_count = classified.len();
    let sweep_count = sweeps.len();
    let sweep_percentage = if total_count > 0 {
        sweep_count as f64 / total_count as f64 * 100.0
    } else {
        0.0
    };

    SweepImpact {
        all_trades,
        without_sweeps,
        sweeps_only,
        impact,
        sweep_count,
        total_count,
        sweep_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flow_core::OptionType;
    use chrono::NaiveDate;

    fn classified(
        option_type: OptionType,
        volume: i64,
        last_price: f64,
        trade_type: TradeType,
    ) -> ClassifiedContract {
        ClassifiedContract {
            contract: OptionContract {
                strike: 100.0,
                expiration: NaiveDate::from_ymd_opt(2026, 9, 18).unwrap(),
                option_type,
                volume,
                open_interest: 100,
                last_price,
            },
            trade_type,
            sweep_confidence: if trade_type == TradeType::Sweep { 0.8 } else { 0.0 },
        }
    }

    #[test]
    fn test_empty_input() {
        let impact = sweep_impact(&[]);
        assert!(impact.all_trades.is_none());
        assert!(impact.impact.is_none());
        assert_eq!(impact.total_count, 0);
        assert_eq!(impact.sweep_percentage, 0.0);
    }

    #[test]
    fn test_partition_counts_add_up() {
        let rows = vec![
            classified(OptionType::Call, 5_000, 3.0, TradeType::Sweep),
            classified(OptionType::Call, 200, 1.0, TradeType::Block),
            classified(OptionType::Put, 100, 1.0, TradeType::Retail),
        ];
        let impact = sweep_impact(&rows);
        assert_eq!(impact.sweep_count, 1);
        assert_eq!(impact.total_count, 3);
        let without = impact.without_sweeps.as_ref().unwrap();
        assert_eq!(impact.sweep_count + without.total_contracts, impact.total_count);
        assert!((impact.sweep_percentage - 100.0 / 3.0).abs() < 1e-9);
        assert!((0.0..=100.0).contains(&impact.sweep_percentage));
    }

    #[test]
    fn test_sentiment_flip_detected() {
        // One giant bullish call sweep masks net bearish put flow.
        let rows = vec![
            classified(OptionType::Call, 10_000, 5.0, TradeType::Sweep),
            classified(OptionType::Put, 500, 2.0, TradeType::Retail),
            classified(OptionType::Call, 100, 1.0, TradeType::Retail),
        ];
        let impact = sweep_impact(&rows);
        let delta = impact.impact.as_ref().unwrap();
        assert!(impact.all_trades.as_ref().unwrap().bullish_sentiment);
        assert!(!impact.without_sweeps.as_ref().unwrap().bullish_sentiment);
        assert!(delta.sentiment_change);
        assert_eq!(delta.volume_change, -10_000);
    }

    #[test]
    fn test_all_sweeps_leaves_no_without_summary() {
        let rows = vec![classified(OptionType::Call, 5_000, 3.0, TradeType::Sweep)];
        let impact = sweep_impact(&rows);
        assert!(impact.without_sweeps.is_none());
        // Impact needs both sides to be comparable.
        assert!(impact.impact.is_none());
        assert_eq!(impact.sweep_percentage, 100.0);
    }
}
