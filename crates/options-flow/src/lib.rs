//! Options Flow Analytics Engine
//!
//! Turns one underlying's options-chain rows into trading-flow metrics:
//! directional sentiment, strike/expiration concentration, max pain,
//! unusual-volume detection, a coarse gamma-exposure estimate, and a
//! sweep-vs-block-vs-retail classification with confidence scores.
//!
//! Every pass is a pure, synchronous function of the input table (plus,
//! where stated, the current underlying price). Nothing is cached and no
//! state survives a call, so independent passes can run in parallel at
//! the caller's discretion. Fetching quotes, CLI parsing, rendering, and
//! persistence all live outside this crate.

pub mod expiration;
pub mod gamma;
pub mod impact;
pub mod max_pain;
pub mod strikes;
pub mod summary;
pub mod sweep;
pub mod unusual;

pub use expiration::{ExpirationAnalysis, ExpirationFlow, ExpirationTypeFlow, expiration_flow};
pub use gamma::{GammaLevel, gamma_exposure};
pub use impact::{ImpactDelta, SweepImpact, sweep_impact};
pub use max_pain::{MaxPainResult, StrikeOpenInterest, max_pain};
pub use strikes::{StrikeLevel, strike_distribution};
pub use summary::{FlowSummary, flow_summary};
pub use sweep::{
    ClassifiedContract, DEFAULT_SWEEP_THRESHOLD, FlowQuantiles, classify_trade, detect_sweeps,
    sweep_confidence,
};
pub use unusual::{DEFAULT_VOLUME_THRESHOLD, UnusualContract, unusual_activity};

use flow_core::{FlowResult, OptionContract, validate_table};

/// Stateless facade over the analytics passes.
///
/// Convenience for callers that want one handle instead of importing the
/// pass functions individually; every method delegates to the matching
/// free function.
pub struct OptionsFlowEngine;

impl OptionsFlowEngine {
    pub fn new() -> Self {
        Self
    }

    /// Shape-check a table once before running passes over it.
    pub fn validate(&self, contracts: &[OptionContract]) -> FlowResult<()> {
        validate_table(contracts)
    }

    pub fn flow_summary(&self, contracts: &[OptionContract]) -> Option<FlowSummary> {
        tracing::debug!(rows = contracts.len(), "flow summary");
        flow_summary(contracts)
    }

    pub fn strike_distribution(
        &self,
        contracts: &[OptionContract],
        current_price: f64,
    ) -> FlowResult<Vec<StrikeLevel>> {
        tracing::debug!(rows = contracts.len(), current_price, "strike distribution");
        strike_distribution(contracts, current_price)
    }

    pub fn max_pain(&self, contracts: &[OptionContract]) -> MaxPainResult {
        max_pain(contracts)
    }

    pub fn expiration_flow(&self, contracts: &[OptionContract]) -> ExpirationAnalysis {
        expiration_flow(contracts)
    }

    pub fn unusual_activity(
        &self,
        contracts: &[OptionContract],
        volume_threshold: f64,
    ) -> Vec<UnusualContract> {
        unusual_activity(contracts, volume_threshold)
    }

    pub fn gamma_exposure(
        &self,
        contracts: &[OptionContract],
        current_price: f64,
    ) -> FlowResult<Vec<GammaLevel>> {
        gamma_exposure(contracts, current_price)
    }

    pub fn detect_sweeps(
        &self,
        contracts: &[OptionContract],
        sweep_threshold: f64,
    ) -> Vec<ClassifiedContract> {
        detect_sweeps(contracts, sweep_threshold)
    }

    pub fn sweep_impact(&self, classified: &[ClassifiedContract]) -> SweepImpact {
        sweep_impact(classified)
    }
}

impl Default for OptionsFlowEngine {
    fn default() -> Self {
        Self::new()
    }
}
