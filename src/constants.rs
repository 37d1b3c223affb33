//! Fee scale and fallback market parameters.

/// Basis-point denominator (10_000 bps == 100%).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Largest valid basis-point parameter.
pub const MAX_BPS: u16 = 10_000;

/// Environment overrides for the fallback market parameters used when no
/// on-chain snapshot is available.
pub const ENV_V_BASE: &str = "HUB_V_BASE";
pub const ENV_V_TOKEN: &str = "HUB_V_TOKEN";
pub const ENV_FEE_BPS: &str = "HUB_FEE_BPS";
pub const ENV_PROTOCOL_FEE_SHARE_BPS: &str = "HUB_PROTOCOL_FEE_BPS";

/// Fallback virtual base reserve (1 USDC in base units).
pub const DEFAULT_V_BASE: u128 = 1_000_000_000_000;
/// Fallback virtual token reserve (1B token units).
pub const DEFAULT_V_TOKEN: u128 = 1_000_000_000_000;
/// Fallback total fee: 2.5%.
pub const DEFAULT_FEE_BPS: u16 = 250;
/// Fallback protocol share of the fee: 50%.
pub const DEFAULT_PROTOCOL_FEE_SHARE_BPS: u16 = 5_000;
