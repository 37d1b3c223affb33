pub mod market_state;
pub mod types;

pub use market_state::{MarketAccount, market_decode};
pub use types::{Market, MarketDefaults};
