//! Quote result types for the Hub MM swap paths.
//!
//! Buy and sell results share a common shape so presentation and execution
//! layers can consume either without special-casing. Amount fields are `u128`
//! to stay exact at any reserve scale; narrowing to `u64` transfer amounts is
//! the caller's concern.

use serde::{Deserialize, Serialize};

/// Exact base-per-token price as an integer ratio.
///
/// Kept as numerator/denominator so quoting never rounds through floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRatio {
    /// Base units.
    pub numerator: u128,
    /// Token units.
    pub denominator: u128,
}

impl PriceRatio {
    pub fn new(numerator: u128, denominator: u128) -> Self {
        Self { numerator, denominator }
    }

    /// Lossy float view for display layers only; quoting math never uses it.
    pub fn as_f64(&self) -> f64 {
        if self.denominator == 0 {
            return 0.0;
        }
        self.numerator as f64 / self.denominator as f64
    }
}

/// Result of quoting a buy (base in, token out).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyQuote {
    /// Tokens the trader receives.
    pub token_out: u128,
    /// Total fee taken from the base input.
    pub total_fee: u128,
    /// Portion of `total_fee` routed to the protocol fee account.
    pub protocol_fee: u128,
    /// Base deposited into the pool treasury: the gross input minus only the
    /// protocol cut. The non-protocol share of the fee stays in the treasury
    /// as retained balance.
    pub to_treasury: u128,
    /// Proposed virtual base reserve after the trade.
    pub v_base_new: u128,
    /// Proposed virtual token reserve after the trade.
    pub v_token_new: u128,
    /// Spot price before the trade.
    pub spot_price_before: PriceRatio,
    /// Gross base paid per token received.
    pub execution_price: PriceRatio,
    /// Price impact vs spot in basis points, saturating at `u64::MAX`.
    pub price_impact_bps: u64,
}

/// Result of quoting a sell (token in, base out).
///
/// The curve runs on the gross token input and the fee comes off the gross
/// base output afterwards, matching the swap program's sell path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellQuote {
    /// Base the trader actually receives, net of fee.
    pub base_out: u128,
    /// Curve output before the fee was taken.
    pub gross_base_out: u128,
    /// Total fee taken from the gross base output.
    pub total_fee: u128,
    /// Portion of `total_fee` routed to the protocol fee account.
    pub protocol_fee: u128,
    /// Base leaving the pool treasury: `base_out + protocol_fee`. The rest of
    /// the fee stays in the treasury.
    pub from_treasury: u128,
    /// Proposed virtual base reserve after the trade.
    pub v_base_new: u128,
    /// Proposed virtual token reserve after the trade.
    pub v_token_new: u128,
    /// Spot price before the trade.
    pub spot_price_before: PriceRatio,
    /// Gross base received per token sold.
    pub execution_price: PriceRatio,
    /// Price impact vs spot in basis points, saturating at `u64::MAX`.
    pub price_impact_bps: u64,
}
