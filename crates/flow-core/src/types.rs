use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Contract multiplier for US equity options (shares per contract).
pub const CONTRACT_MULTIPLIER: f64 = 100.0;

/// Call or put side of an option contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Human-readable label
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

/// One row of an options chain: a single contract's quote for the day.
///
/// Immutable value type. The analytics passes never mutate input rows;
/// derived attributes are produced as new records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    pub strike: f64,
    pub expiration: NaiveDate,
    pub option_type: OptionType,
    pub volume: i64,
    pub open_interest: i64,
    pub last_price: f64,
}

impl OptionContract {
    /// Estimated notional traded value: `volume * last_price * 100`.
    pub fn dollar_flow(&self) -> f64 {
        self.volume as f64 * self.last_price * CONTRACT_MULTIPLIER
    }

    /// Strike relative to the underlying price (`strike / price`).
    pub fn moneyness(&self, underlying_price: f64) -> f64 {
        self.strike / underlying_price
    }

    /// Volume relative to open interest, smoothed with `+1` so a contract
    /// with zero open interest never divides by zero.
    pub fn volume_oi_ratio(&self) -> f64 {
        self.volume as f64 / (self.open_interest as f64 + 1.0)
    }
}

/// Heuristic classification of a contract's daily activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeType {
    /// Large, likely institutional order split across exchanges.
    Sweep,
    /// Large single-print order.
    Block,
    /// Ordinary flow.
    Retail,
}

impl TradeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeType::Sweep => "sweep",
            TradeType::Block => "block",
            TradeType::Retail => "retail",
        }
    }
}

/// In-the-money / out-of-the-money classification under strict inequality.
///
/// A strike exactly at the underlying price classifies as OTM for both
/// calls and puts. Downstream consumers rely on this boundary behavior,
/// so it is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Moneyness {
    Itm,
    Otm,
}

impl Moneyness {
    /// Classify a strike against the current underlying price.
    pub fn classify(option_type: OptionType, strike: f64, current_price: f64) -> Self {
        let itm = match option_type {
            OptionType::Call => strike < current_price,
            OptionType::Put => strike > current_price,
        };
        if itm {
            Moneyness::Itm
        } else {
            Moneyness::Otm
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Moneyness::Itm => "ITM",
            Moneyness::Otm => "OTM",
        }
    }
}
