//! Quoting errors.
//!
//! Every variant is a precondition or postcondition violation reported
//! synchronously to the caller; nothing here is retryable inside the engine.
//! Retry, if any, is a caller policy (re-fetch a fresher snapshot, re-quote).

/// Errors produced by the quote engine and its snapshot helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    /// A virtual reserve in the snapshot is zero. This is a state problem
    /// (uninitialized or corrupt market), not a user-input problem.
    #[error("invalid reserves: v_base={v_base} v_token={v_token}")]
    InvalidReserves { v_base: u128, v_token: u128 },

    /// The trade input amount is zero.
    #[error("input amount must be greater than zero")]
    InvalidInputAmount,

    /// A basis-point parameter exceeds 10_000.
    #[error("{field}={value} exceeds the 10000 bps maximum")]
    InvalidFeeBps { field: &'static str, value: u16 },

    /// A computed output or reserve rounded down to zero. The trade is too
    /// small to produce any output at the current reserves.
    #[error("degenerate result: {what} is zero")]
    DegenerateResult { what: &'static str },

    /// A checked reserve update or narrowing failed.
    #[error("math overflow while updating reserves")]
    MathOverflow,

    /// The market snapshot is paused; the swap program would refuse the trade.
    #[error("market is paused")]
    MarketPaused,

    /// Raw account bytes did not decode as a market account.
    #[error("invalid market account data: {0}")]
    InvalidAccountData(String),

    /// An environment override for the fallback market parameters did not
    /// parse.
    #[error("invalid config value for {name}: {value}")]
    InvalidConfig { name: &'static str, value: String },
}
