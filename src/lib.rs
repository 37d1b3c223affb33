pub mod common;
pub mod constants;
pub mod error;
pub mod utils;

pub use crate::common::market_state::{
    MarketAccount, get_market_pda, get_treasury_authority_pda, market_decode,
};
pub use crate::common::types::{Market, MarketDefaults};
pub use crate::error::QuoteError;
pub use crate::utils::calc::{
    min_out_from_slippage, price_impact_bps, quote_buy, quote_sell, spot_price,
};
pub use crate::utils::quote::{BuyQuote, PriceRatio, SellQuote};
