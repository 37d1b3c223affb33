//! Market account for the Hub MM swap program.
//!
//! This is the on-chain snapshot the quote engine prices against: virtual
//! reserves, fee config, the fee/treasury routing accounts, and the pause
//! flag. The SDK never fetches it; callers hand in the raw account bytes
//! from whatever transport they use and decode with [`market_decode`].

use borsh::BorshDeserialize;
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::common::types::Market;
use crate::error::QuoteError;
use crate::utils::calc;
use crate::utils::quote::{BuyQuote, PriceRatio, SellQuote};

/// Constants used as seeds for deriving the program's PDAs
pub mod seeds {
    /// Seed for market PDAs
    pub const MARKET_SEED: &[u8] = b"market";

    /// Seed for treasury authority PDAs
    pub const TREASURY_AUTHORITY_SEED: &[u8] = b"treasury_authority";
}

/// Constants related to program accounts
pub mod accounts {
    use solana_sdk::{pubkey, pubkey::Pubkey};

    /// The Hub MM swap program
    pub const HUB_MM_PROGRAM: Pubkey = pubkey!("BkG5yURdmMvDdHYJSZ7EYCgVnHVAs3hK8ppakVVqvwZL");
}

/// On-chain market account state, as written by the swap program.
#[derive(Debug, Clone, Serialize, Deserialize, Default, BorshDeserialize)]
pub struct MarketAccount {
    /// Account address
    #[borsh(skip)]
    pub account: Pubkey,
    /// Market admin
    pub admin: Pubkey,
    /// Mint of the token this market trades
    pub mint: Pubkey,
    /// Mint of the base (quote currency) asset
    pub base_mint: Pubkey,
    /// Treasury ATA holding the pool's base balance
    pub treasury_base_ata: Pubkey,
    /// ATA receiving the protocol's fee cut
    pub admin_fee_ata: Pubkey,
    /// Virtual base reserve used for price calculations
    pub v_base: u128,
    /// Virtual token reserve used for price calculations
    pub v_token: u128,
    /// Total fee in basis points
    pub fee_bps: u16,
    /// Protocol share of the fee in basis points
    pub protocol_fee_share_bps: u16,
    /// Whether trading is halted
    pub is_paused: bool,
    /// Market PDA bump
    pub bump: u8,
    /// Treasury authority PDA bump
    pub treasury_bump: u8,
}

impl MarketAccount {
    /// Serialized size of the account body, excluding the 8-byte
    /// discriminator.
    pub const SPACE: usize = 32 * 5 + 16 * 2 + 2 * 2 + 1 + 1 + 1;

    /// Pricing inputs for the quote engine.
    pub fn market(&self) -> Market {
        Market::new(self.v_base, self.v_token, self.fee_bps, self.protocol_fee_share_bps)
    }

    /// Quote a buy against this snapshot. Refuses paused markets the same
    /// way the swap program refuses the trade.
    pub fn quote_buy(&self, base_in: u64) -> Result<BuyQuote, QuoteError> {
        if self.is_paused {
            return Err(QuoteError::MarketPaused);
        }
        calc::quote_buy(&self.market(), base_in)
    }

    /// Quote a sell against this snapshot. Refuses paused markets.
    pub fn quote_sell(&self, token_in: u64) -> Result<SellQuote, QuoteError> {
        if self.is_paused {
            return Err(QuoteError::MarketPaused);
        }
        calc::quote_sell(&self.market(), token_in)
    }

    /// Current spot price. Works for paused markets too; only trading is
    /// halted, not pricing.
    pub fn spot_price(&self) -> Result<PriceRatio, QuoteError> {
        calc::spot_price(&self.market())
    }
}

/// Decode a raw market account: 8-byte discriminator followed by the borsh
/// body. The `account` field is left at its default; callers that know the
/// address fill it in.
pub fn market_decode(data: &[u8]) -> Result<MarketAccount, QuoteError> {
    if data.len() < 8 + MarketAccount::SPACE {
        return Err(QuoteError::InvalidAccountData(format!(
            "expected at least {} bytes, got {}",
            8 + MarketAccount::SPACE,
            data.len()
        )));
    }
    let mut body = &data[8..];
    let market = <MarketAccount as BorshDeserialize>::deserialize(&mut body)
        .map_err(|e| QuoteError::InvalidAccountData(e.to_string()))?;
    log::debug!(
        "decoded market: mint={} v_base={} v_token={} fee_bps={} paused={}",
        market.mint,
        market.v_base,
        market.v_token,
        market.fee_bps,
        market.is_paused
    );
    Ok(market)
}

/// Derive the market PDA for a mint.
pub fn get_market_pda(mint: &Pubkey) -> Option<Pubkey> {
    Pubkey::try_find_program_address(
        &[seeds::MARKET_SEED, mint.as_ref()],
        &accounts::HUB_MM_PROGRAM,
    )
    .map(|(pda, _)| pda)
}

/// Derive the treasury authority PDA for a market.
pub fn get_treasury_authority_pda(market: &Pubkey) -> Option<Pubkey> {
    Pubkey::try_find_program_address(
        &[seeds::TREASURY_AUTHORITY_SEED, market.as_ref()],
        &accounts::HUB_MM_PROGRAM,
    )
    .map(|(pda, _)| pda)
}
