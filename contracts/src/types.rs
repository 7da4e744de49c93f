//! Common types used across the DSC engine.

use odra::prelude::*;
use odra::casper_types::U256;

/// Approved collateral asset, fixed at engine construction
#[odra::odra_type]
#[derive(Copy)]
pub struct CollateralAsset {
    /// CEP-18 token contract address
    pub token: Address,
    /// Price feed contract address (USD per whole token)
    pub price_feed: Address,
    /// Decimals of the token's native unit
    pub decimals: u8,
}

/// Round data returned by an aggregator-style price feed
#[odra::odra_type]
pub struct RoundData {
    /// Round identifier
    pub round_id: u64,
    /// Price answer, scaled by the feed's decimals
    pub answer: U256,
    /// Timestamp the round started
    pub started_at: u64,
    /// Timestamp of the last update
    pub updated_at: u64,
    /// Round in which the answer was computed
    pub answered_in_round: u64,
}

/// Point-in-time price read from a feed
#[odra::odra_type]
#[derive(Copy)]
pub struct PriceQuote {
    /// Integer price value
    pub price: U256,
    /// Decimal places for price
    pub decimals: u8,
}

/// Account totals used for solvency decisions
#[odra::odra_type]
#[derive(Copy, Default)]
pub struct AccountInformation {
    /// DSC minted by the account
    pub total_dsc_minted: U256,
    /// Collateral value in common units (18 decimals)
    pub collateral_value_in_usd: U256,
}

/// Derived solvency view of an account
#[odra::odra_type]
#[derive(Copy)]
pub struct HealthStatus {
    /// Collateral value in common units (18 decimals)
    pub collateral_value_in_usd: U256,
    /// DSC minted by the account
    pub total_dsc_minted: U256,
    /// Health factor (1e18 = 1.0, U256::MAX when debt is zero)
    pub health_factor: U256,
    /// Whether health_factor >= MIN_HEALTH_FACTOR
    pub is_healthy: bool,
}
