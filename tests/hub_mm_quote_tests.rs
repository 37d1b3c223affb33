//! End-to-end quoting flows through the public API: snapshot in, quote out,
//! slippage bound, JSON for the presentation layer.

use hub_mm_sdk::{
    Market, MarketDefaults, QuoteError, market_decode, min_out_from_slippage, quote_buy,
    quote_sell, spot_price,
};
use solana_sdk::pubkey::Pubkey;

fn demo_market() -> Market {
    Market::new(1_000_000_000, 1_000_000_000, 100, 5_000)
}

#[test]
fn test_buy_flow_with_slippage_guard() {
    let market = demo_market();
    let quote = quote_buy(&market, 1_000_000_000).unwrap();

    assert_eq!(quote.token_out, 497_487_438);
    assert_eq!(quote.total_fee, 10_000_000);
    assert_eq!(quote.protocol_fee, 5_000_000);

    // The bound a caller would hand to the executing program.
    let min_out = min_out_from_slippage(quote.token_out, 50);
    assert_eq!(min_out, 495_000_001);
    assert!(min_out <= quote.token_out);
}

#[test]
fn test_sell_flow_with_slippage_guard() {
    let market = demo_market();
    let quote = quote_sell(&market, 500_000_000).unwrap();

    assert_eq!(quote.gross_base_out, 333_333_334);
    assert_eq!(quote.base_out, 330_000_001);

    let min_out = min_out_from_slippage(quote.base_out, 100);
    assert_eq!(min_out, 330_000_001 - 3_300_000);
}

#[test]
fn test_quote_against_decoded_account() {
    let mut data = vec![0u8; 8];
    for _ in 0..5 {
        data.extend_from_slice(Pubkey::new_unique().as_ref());
    }
    data.extend_from_slice(&1_000_000_000u128.to_le_bytes());
    data.extend_from_slice(&1_000_000_000u128.to_le_bytes());
    data.extend_from_slice(&100u16.to_le_bytes());
    data.extend_from_slice(&5_000u16.to_le_bytes());
    data.push(0);
    data.push(255);
    data.push(255);

    let account = market_decode(&data).unwrap();
    let quote = account.quote_buy(1_000_000_000).unwrap();
    assert_eq!(quote.token_out, 497_487_438);
    assert_eq!(account.spot_price().unwrap().as_f64(), 1.0);
}

#[test]
fn test_quote_serializes_for_presentation() {
    let quote = quote_buy(&demo_market(), 1_000_000_000).unwrap();

    let json = serde_json::to_string(&quote).unwrap();
    let round_tripped: hub_mm_sdk::BuyQuote = serde_json::from_str(&json).unwrap();
    assert_eq!(round_tripped, quote);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["token_out"], 497_487_438);
    assert_eq!(value["price_impact_bps"], 10_101);
}

#[test]
fn test_defaults_produce_quotable_market() {
    let defaults = MarketDefaults::default();
    let market = defaults.market();

    let quote = quote_buy(&market, 1_000_000).unwrap();
    assert!(quote.token_out > 0);
    // 2.5% default fee.
    assert_eq!(quote.total_fee, 25_000);
    assert_eq!(defaults.fee_fraction(), 0.025);
}

#[test]
fn test_error_reporting_distinguishes_input_from_state() {
    // User-input problem.
    assert_eq!(quote_buy(&demo_market(), 0), Err(QuoteError::InvalidInputAmount));

    // State problem: uninitialized market.
    let uninitialized = Market::new(0, 0, 100, 5_000);
    let err = quote_sell(&uninitialized, 1).unwrap_err();
    assert_eq!(err, QuoteError::InvalidReserves { v_base: 0, v_token: 0 });
    assert_eq!(err.to_string(), "invalid reserves: v_base=0 v_token=0");

    assert!(spot_price(&uninitialized).is_err());
}
