//! End-to-end checks across all analytics passes.

use chrono::NaiveDate;
use flow_core::{ContractFilter, OptionContract, OptionType, TradeType};
use options_flow::{DEFAULT_SWEEP_THRESHOLD, DEFAULT_VOLUME_THRESHOLD, OptionsFlowEngine};

fn contract(
    strike: f64,
    option_type: OptionType,
    volume: i64,
    oi: i64,
    last_price: f64,
) -> OptionContract {
    OptionContract {
        strike,
        expiration: NaiveDate::from_ymd_opt(2026, 9, 18).unwrap(),
        option_type,
        volume,
        open_interest: oi,
        last_price,
    }
}

#[test]
fn worked_two_row_example() {
    let engine = OptionsFlowEngine::new();
    let table = vec![
        contract(100.0, OptionType::Call, 500, 200, 2.0),
        contract(100.0, OptionType::Put, 100, 800, 1.0),
    ];
    engine.validate(&table).unwrap();

    let summary = engine.flow_summary(&table).unwrap();
    assert_eq!(summary.total_call_volume, 500);
    assert_eq!(summary.total_put_volume, 100);
    assert_eq!(summary.net_volume, 400);
    assert!((summary.total_call_flow - 100_000.0).abs() < 1e-9);
    assert!((summary.total_put_flow - 10_000.0).abs() < 1e-9);
    assert!((summary.net_dollar_flow - 90_000.0).abs() < 1e-9);
    assert!((summary.put_call_ratio - 0.2).abs() < 1e-9);
    assert!(summary.bullish_sentiment);
}

#[test]
fn empty_table_is_a_valid_outcome_everywhere() {
    let engine = OptionsFlowEngine::new();
    let empty: Vec<OptionContract> = Vec::new();

    engine.validate(&empty).unwrap();
    assert!(engine.flow_summary(&empty).is_none());
    assert!(engine.strike_distribution(&empty, 100.0).unwrap().is_empty());
    assert_eq!(engine.max_pain(&empty).max_pain_strike, 0.0);
    assert!(engine.expiration_flow(&empty).totals.is_empty());
    assert!(engine.unusual_activity(&empty, DEFAULT_VOLUME_THRESHOLD).is_empty());
    assert!(engine.gamma_exposure(&empty, 100.0).unwrap().is_empty());
    assert!(engine.detect_sweeps(&empty, DEFAULT_SWEEP_THRESHOLD).is_empty());

    let impact = engine.sweep_impact(&[]);
    assert_eq!(impact.total_count, 0);
    assert_eq!(impact.sweep_percentage, 0.0);
}

#[test]
fn sweep_pipeline_end_to_end() {
    let engine = OptionsFlowEngine::new();

    // Mostly quiet chain with one institutional-sized call print.
    let mut table: Vec<OptionContract> = (0..19)
        .map(|i| {
            let side = if i % 2 == 0 { OptionType::Call } else { OptionType::Put };
            contract(95.0 + i as f64, side, 20 + i, 500, 1.0)
        })
        .collect();
    table.push(contract(105.0, OptionType::Call, 8_000, 300, 4.0));

    let classified = engine.detect_sweeps(&table, DEFAULT_SWEEP_THRESHOLD);
    assert_eq!(classified.len(), table.len());

    let sweep_rows: Vec<_> = classified
        .iter()
        .filter(|r| r.trade_type == TradeType::Sweep)
        .collect();
    assert!(!sweep_rows.is_empty());
    assert!(sweep_rows.iter().all(|r| (0.0..=1.0).contains(&r.sweep_confidence)));

    let impact = engine.sweep_impact(&classified);
    assert_eq!(impact.total_count, table.len());
    let without = impact.without_sweeps.as_ref().unwrap();
    assert_eq!(impact.sweep_count + without.total_contracts, impact.total_count);
    assert!((0.0..=100.0).contains(&impact.sweep_percentage));
    assert!(impact.impact.is_some());
}

#[test]
fn filtered_chain_feeds_the_passes() {
    let engine = OptionsFlowEngine::new();
    let table = vec![
        contract(100.0, OptionType::Call, 5, 10, 0.5), // screened out
        contract(100.0, OptionType::Call, 400, 100, 2.0),
        contract(105.0, OptionType::Put, 250, 50, 1.5),
    ];

    let screened = ContractFilter::with_default_volume().apply(&table);
    assert_eq!(screened.len(), 2);

    let summary = engine.flow_summary(&screened).unwrap();
    assert_eq!(summary.total_contracts, 2);

    let levels = engine.strike_distribution(&screened, 102.0).unwrap();
    let grouped: i64 = levels.iter().map(|l| l.volume).sum();
    assert_eq!(grouped, 650);
}

#[test]
fn max_pain_and_unusual_agree_with_raw_table() {
    let engine = OptionsFlowEngine::new();
    let table = vec![
        contract(95.0, OptionType::Put, 900, 50, 1.0),
        contract(100.0, OptionType::Call, 300, 4_000, 2.0),
        contract(105.0, OptionType::Call, 80, 900, 0.8),
    ];

    let pain = engine.max_pain(&table);
    assert!(table.iter().any(|c| c.strike == pain.max_pain_strike));
    assert_eq!(pain.max_pain_strike, 100.0);

    let unusual = engine.unusual_activity(&table, DEFAULT_VOLUME_THRESHOLD);
    assert_eq!(unusual.len(), 1);
    assert_eq!(unusual[0].strike, 95.0);
    assert!(unusual[0].volume_oi_ratio >= DEFAULT_VOLUME_THRESHOLD);
}
