//! Constant-product quoting for Hub MM markets.
//!
//! All arithmetic is integer-exact: `u128` for reserve state, [`U256`] for
//! reserve products, [`U512`] only where the price-impact cross-multiplication
//! needs headroom. Division always floors, matching the on-chain swap path,
//! so a quote computed here from a given snapshot is bit-identical to what
//! the program computes when it executes against the same reserves.

pub mod big_num;

use crate::common::types::Market;
use crate::constants::BPS_DENOMINATOR;
use crate::error::QuoteError;
use crate::utils::quote::{BuyQuote, PriceRatio, SellQuote};

use big_num::{U256, U512, widen};

/// Quote a buy: base in, token out. The fee is taken from the base input
/// before the curve update.
///
/// The treasury receives everything except the protocol's cut of the fee:
/// `to_treasury = base_in - protocol_fee`, not `base_in - total_fee`. The
/// non-protocol fee share stays in the treasury as retained balance, which is
/// exactly how the swap program routes its transfers.
pub fn quote_buy(market: &Market, base_in: u64) -> Result<BuyQuote, QuoteError> {
    market.validate()?;
    if base_in == 0 {
        return Err(QuoteError::InvalidInputAmount);
    }

    let base_in = base_in as u128;

    // Fee on input.
    let total_fee = apply_bps(base_in, market.fee_bps);
    let protocol_fee = apply_bps(total_fee, market.protocol_fee_share_bps);
    let to_treasury = base_in - protocol_fee;
    let base_effective = base_in - total_fee;

    // Curve update with the effective input.
    let k = U256::from(market.v_base) * U256::from(market.v_token);
    let v_base_new =
        market.v_base.checked_add(base_effective).ok_or(QuoteError::MathOverflow)?;
    let v_token_new = u256_to_u128(k / U256::from(v_base_new))?;

    let token_out = market.v_token - v_token_new;
    if token_out == 0 {
        return Err(QuoteError::DegenerateResult { what: "token_out" });
    }

    let spot_price_before = PriceRatio::new(market.v_base, market.v_token);
    // Gross base paid per token received.
    let execution_price = PriceRatio::new(base_in, token_out);

    Ok(BuyQuote {
        token_out,
        total_fee,
        protocol_fee,
        to_treasury,
        v_base_new,
        v_token_new,
        spot_price_before,
        execution_price,
        price_impact_bps: price_impact_bps(&spot_price_before, &execution_price),
    })
}

/// Quote a sell: token in, base out. The curve runs on the gross token input
/// and the fee is taken from the gross base output afterwards, matching the
/// swap program's sell path.
///
/// `base_out` is what the trader receives; `gross_base_out` is the curve's
/// raw output and is the figure the execution price is derived from, since
/// that is the curve's actual exchange rate before fee extraction.
pub fn quote_sell(market: &Market, token_in: u64) -> Result<SellQuote, QuoteError> {
    market.validate()?;
    if token_in == 0 {
        return Err(QuoteError::InvalidInputAmount);
    }

    let token_in = token_in as u128;

    // Curve update with the gross input, no fee yet.
    let k = U256::from(market.v_base) * U256::from(market.v_token);
    let v_token_new = market.v_token.checked_add(token_in).ok_or(QuoteError::MathOverflow)?;
    let v_base_new = u256_to_u128(k / U256::from(v_token_new))?;

    let gross_base_out = market.v_base - v_base_new;
    if gross_base_out == 0 {
        return Err(QuoteError::DegenerateResult { what: "gross_base_out" });
    }

    // Fee on output.
    let total_fee = apply_bps(gross_base_out, market.fee_bps);
    let protocol_fee = apply_bps(total_fee, market.protocol_fee_share_bps);
    let base_out = gross_base_out - total_fee;
    if base_out == 0 {
        return Err(QuoteError::DegenerateResult { what: "base_out" });
    }
    // The treasury pays the user plus the protocol's cut; the remainder of
    // the fee stays behind in the treasury.
    let from_treasury = base_out + protocol_fee;

    let spot_price_before = PriceRatio::new(market.v_base, market.v_token);
    let execution_price = PriceRatio::new(gross_base_out, token_in);

    Ok(SellQuote {
        base_out,
        gross_base_out,
        total_fee,
        protocol_fee,
        from_treasury,
        v_base_new,
        v_token_new,
        spot_price_before,
        execution_price,
        price_impact_bps: price_impact_bps(&spot_price_before, &execution_price),
    })
}

/// Current base-per-token spot price as an exact ratio.
pub fn spot_price(market: &Market) -> Result<PriceRatio, QuoteError> {
    market.validate()?;
    Ok(PriceRatio::new(market.v_base, market.v_token))
}

/// Slippage-adjusted minimum output:
/// `quoted_out - floor(quoted_out * slippage_bps / 10_000)`, floored at zero.
///
/// Advisory arithmetic only. The executing program is the one that aborts
/// the trade when the realized output lands below this bound.
pub fn min_out_from_slippage(quoted_out: u128, slippage_bps: u64) -> u128 {
    let cut = U256::from(quoted_out) * U256::from(slippage_bps) / U256::from(BPS_DENOMINATOR);
    if cut >= U256::from(quoted_out) {
        0
    } else {
        quoted_out - cut.low_u128()
    }
}

/// Price impact in basis points between the pre-trade spot price and the
/// realized execution price, via cross-multiplication:
/// `|exec_n*spot_d - spot_n*exec_d| * 10_000 / (spot_n*exec_d)`.
///
/// Saturates at `u64::MAX` instead of overflowing.
pub fn price_impact_bps(spot: &PriceRatio, exec: &PriceRatio) -> u64 {
    let lhs = U256::from(exec.numerator) * U256::from(spot.denominator);
    let rhs = U256::from(spot.numerator) * U256::from(exec.denominator);
    if rhs.is_zero() {
        return 0;
    }
    let diff = if lhs >= rhs { lhs - rhs } else { rhs - lhs };

    // diff * 10_000 can exceed 256 bits when both prices sit near the u128
    // ceiling, so the final step runs in 512 bits.
    let bps = widen(diff) * U512::from(BPS_DENOMINATOR) / widen(rhs);
    if bps > U512::from(u64::MAX) { u64::MAX } else { bps.low_u64() }
}

/// `floor(amount * bps / 10_000)`, exact for any `amount`. With
/// `bps <= 10_000` the result never exceeds `amount`, so the narrowing back
/// to `u128` is lossless.
fn apply_bps(amount: u128, bps: u16) -> u128 {
    (U256::from(amount) * U256::from(bps) / U256::from(BPS_DENOMINATOR)).low_u128()
}

fn u256_to_u128(value: U256) -> Result<u128, QuoteError> {
    if value > U256::from(u128::MAX) {
        return Err(QuoteError::MathOverflow);
    }
    Ok(value.low_u128())
}
