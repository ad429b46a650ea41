//! Table-boundary validation.
//!
//! Malformed rows are reported once, here, rather than surfacing as NaN
//! deep inside an aggregation pass. An empty table is valid everywhere:
//! "no data" is a well-defined outcome, not an error.

use crate::error::{FlowError, FlowResult};
use crate::types::OptionContract;

/// Check every row of a contract table for shape violations.
///
/// Returns the first offending row. Passes an empty table.
pub fn validate_table(contracts: &[OptionContract]) -> FlowResult<()> {
    for (index, c) in contracts.iter().enumerate() {
        if !c.strike.is_finite() || c.strike <= 0.0 {
            return Err(FlowError::InvalidContract {
                index,
                reason: format!("strike must be finite and > 0, got {}", c.strike),
            });
        }
        if c.volume < 0 {
            return Err(FlowError::InvalidContract {
                index,
                reason: format!("volume must be >= 0, got {}", c.volume),
            });
        }
        if c.open_interest < 0 {
            return Err(FlowError::InvalidContract {
                index,
                reason: format!("open interest must be >= 0, got {}", c.open_interest),
            });
        }
        if !c.last_price.is_finite() || c.last_price < 0.0 {
            return Err(FlowError::InvalidContract {
                index,
                reason: format!("last price must be finite and >= 0, got {}", c.last_price),
            });
        }
    }
    Ok(())
}

/// Guard for passes that relate strikes to the underlying price.
///
/// A non-positive price makes distance percentages and moneyness
/// mathematically meaningless; catching it here makes the misuse
/// detectable instead of silently propagating garbage.
pub fn validate_price(current_price: f64) -> FlowResult<()> {
    if !current_price.is_finite() || current_price <= 0.0 {
        return Err(FlowError::InvalidPrice(current_price));
    }
    Ok(())
}
