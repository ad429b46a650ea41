//! Coarse gamma-exposure estimate across a price grid.
//!
//! This is NOT Black-Scholes gamma. Each contract within ±10% moneyness
//! of a price level contributes `open_interest * (1 - |strike/price - 1| * 5)`,
//! a triangular weight peaking at the money; calls add, puts subtract.
//! The formula itself would only reach zero at ±20% moneyness, but the
//! band check cuts contributions off at ±10%, where the weight is still
//! 0.5. That discontinuity at the band edge is a known artifact of the
//! approximation, kept deliberately rather than smoothed.

use flow_core::{FlowResult, OptionContract, OptionType, validate_price};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Half-width of the price grid, in 1% steps around the current price.
const GRID_STEPS: i32 = 10;

/// Moneyness band inside which a contract contributes at all.
const BAND_LO: f64 = 0.9;
const BAND_HI: f64 = 1.1;

/// Signed exposure score at one hypothetical underlying price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GammaLevel {
    pub price: f64,
    pub exposure: f64,
}

/// Estimate net dealer gamma at 21 price levels (±10% in 1% steps),
/// ascending by price.
///
/// Each level is independent, so the grid is evaluated in parallel; this
/// is the only pass whose cost is rows × levels rather than linear.
pub fn gamma_exposure(
    contracts: &[OptionContract],
    current_price: f64,
) -> FlowResult<Vec<GammaLevel>> {
    validate_price(current_price)?;
    if contracts.is_empty() {
        return Ok(Vec::new());
    }

    let levels: Vec<GammaLevel> = (-GRID_STEPS..=GRID_STEPS)
        .into_par_iter()
        .map(|k| {
            let price = current_price * (1.0 + k as f64 * 0.01);
            let mut exposure = 0.0;
            for c in contracts {
                let moneyness = c.strike / price;
                if (BAND_LO..=BAND_HI).contains(&moneyness) {
                    let contribution =
                        c.open_interest as f64 * (1.0 - (moneyness - 1.0).abs() * 5.0);
                    match c.option_type {
                        OptionType::Call => exposure += contribution,
                        OptionType::Put => exposure -= contribution,
                    }
                }
            }
            GammaLevel { price, exposure }
        })
        .collect();

    Ok(levels)
}
