use serde::{Deserialize, Serialize};

use crate::constants::{
    BPS_DENOMINATOR, DEFAULT_FEE_BPS, DEFAULT_PROTOCOL_FEE_SHARE_BPS, DEFAULT_V_BASE,
    DEFAULT_V_TOKEN, ENV_FEE_BPS, ENV_PROTOCOL_FEE_SHARE_BPS, ENV_V_BASE, ENV_V_TOKEN, MAX_BPS,
};
use crate::error::QuoteError;

/// Pricing inputs for one quote: virtual reserves plus fee config.
///
/// A `Market` is a read-only snapshot of externally-owned ledger state at
/// call time. Quoting never mutates it; the `v_*_new` fields of a quote are
/// proposed state for the executing program to persist, not something the
/// engine stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    /// Virtual base-asset reserve. Must be nonzero.
    pub v_base: u128,
    /// Virtual token reserve. Must be nonzero.
    pub v_token: u128,
    /// Total fee rate in basis points, at most 10_000.
    pub fee_bps: u16,
    /// Share of the total fee routed to the protocol fee account rather than
    /// the pool treasury, in basis points.
    pub protocol_fee_share_bps: u16,
}

impl Market {
    pub fn new(v_base: u128, v_token: u128, fee_bps: u16, protocol_fee_share_bps: u16) -> Self {
        Self { v_base, v_token, fee_bps, protocol_fee_share_bps }
    }

    /// Check the snapshot invariants the swap program enforces at init time:
    /// nonzero reserves, bps parameters within range.
    pub fn validate(&self) -> Result<(), QuoteError> {
        if self.v_base == 0 || self.v_token == 0 {
            return Err(QuoteError::InvalidReserves {
                v_base: self.v_base,
                v_token: self.v_token,
            });
        }
        if self.fee_bps > MAX_BPS {
            return Err(QuoteError::InvalidFeeBps { field: "fee_bps", value: self.fee_bps });
        }
        if self.protocol_fee_share_bps > MAX_BPS {
            return Err(QuoteError::InvalidFeeBps {
                field: "protocol_fee_share_bps",
                value: self.protocol_fee_share_bps,
            });
        }
        Ok(())
    }
}

/// Fallback market parameters for when no on-chain snapshot is available.
///
/// An explicit value the caller constructs once and passes around, rather
/// than ambient process-environment reads at every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketDefaults {
    pub v_base: u128,
    pub v_token: u128,
    pub fee_bps: u16,
    pub protocol_fee_share_bps: u16,
}

impl Default for MarketDefaults {
    fn default() -> Self {
        Self {
            v_base: DEFAULT_V_BASE,
            v_token: DEFAULT_V_TOKEN,
            fee_bps: DEFAULT_FEE_BPS,
            protocol_fee_share_bps: DEFAULT_PROTOCOL_FEE_SHARE_BPS,
        }
    }
}

impl MarketDefaults {
    /// Built-in defaults overridden by `HUB_V_BASE`, `HUB_V_TOKEN`,
    /// `HUB_FEE_BPS` and `HUB_PROTOCOL_FEE_BPS` where set. Unparseable or
    /// out-of-range overrides are rejected rather than silently ignored.
    pub fn from_env() -> Result<Self, QuoteError> {
        let mut defaults = Self::default();
        defaults.v_base = env_u128(ENV_V_BASE, defaults.v_base)?;
        defaults.v_token = env_u128(ENV_V_TOKEN, defaults.v_token)?;
        defaults.fee_bps = env_u16(ENV_FEE_BPS, defaults.fee_bps)?;
        defaults.protocol_fee_share_bps =
            env_u16(ENV_PROTOCOL_FEE_SHARE_BPS, defaults.protocol_fee_share_bps)?;
        defaults.market().validate()?;
        log::debug!(
            "market defaults: v_base={} v_token={} fee_bps={} protocol_fee_share_bps={}",
            defaults.v_base,
            defaults.v_token,
            defaults.fee_bps,
            defaults.protocol_fee_share_bps
        );
        Ok(defaults)
    }

    /// The fallback market these defaults describe.
    pub fn market(&self) -> Market {
        Market::new(self.v_base, self.v_token, self.fee_bps, self.protocol_fee_share_bps)
    }

    /// Fallback fee as a fraction of [`BPS_DENOMINATOR`], for display layers.
    pub fn fee_fraction(&self) -> f64 {
        self.fee_bps as f64 / BPS_DENOMINATOR as f64
    }
}

fn env_u128(name: &'static str, fallback: u128) -> Result<u128, QuoteError> {
    match std::env::var(name) {
        Ok(raw) => {
            raw.trim().parse().map_err(|_| QuoteError::InvalidConfig { name, value: raw })
        }
        Err(_) => Ok(fallback),
    }
}

fn env_u16(name: &'static str, fallback: u16) -> Result<u16, QuoteError> {
    match std::env::var(name) {
        Ok(raw) => {
            raw.trim().parse().map_err(|_| QuoteError::InvalidConfig { name, value: raw })
        }
        Err(_) => Ok(fallback),
    }
}
