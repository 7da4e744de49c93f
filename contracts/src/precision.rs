//! Fixed-point scale constants.
//!
//! Every scale factor the engine uses lives here, so a change in the oracle
//! decimal convention or the collateralization requirement is a one-place
//! edit.
//!
//! ## Units
//! - Common unit (USD value, DSC): 18 decimals, 1.0 = 1e18
//! - Price feeds: typically 8 decimals, normalized to 18 before use
//! - Collateral: the token's own decimals

use odra::casper_types::U256;

/// Decimals of the common value unit (and of DSC)
pub const COMMON_DECIMALS: u8 = 18;

/// Common fixed-point scale (1e18)
pub const PRECISION: u128 = 1_000_000_000_000_000_000;

/// Decimals reported by standard USD price feeds
pub const STANDARD_FEED_DECIMALS: u8 = 8;

/// Price-scale adjustment for an 8-decimal feed: 10^(18 - 8)
pub const ADDITIONAL_FEED_PRECISION: u128 = 10_000_000_000;

/// Share of collateral value counted toward solvency (50 = 200% overcollateralized)
pub const LIQUIDATION_THRESHOLD: u64 = 50;

/// Percentage base for LIQUIDATION_THRESHOLD
pub const LIQUIDATION_PRECISION: u64 = 100;

/// Health factor at or above which an account is solvent (1.0)
pub const MIN_HEALTH_FACTOR: u128 = PRECISION;

/// Largest exponent for which 10^exp fits in a U256
pub const MAX_ASSET_DECIMALS: u8 = 77;

/// 10^exp as U256. Callers keep `exp` within 0..=MAX_ASSET_DECIMALS.
pub fn pow10(exp: u8) -> U256 {
    U256::from(10u64).pow(U256::from(exp))
}

/// 10^asset_decimals, or None when it does not fit in a U256
pub fn asset_scale(asset_decimals: u8) -> Option<U256> {
    if asset_decimals > MAX_ASSET_DECIMALS {
        return None;
    }
    Some(pow10(asset_decimals))
}

/// Multiplier bringing a feed price with `feed_decimals` to 18 decimals.
/// Returns None when the feed is more precise than the common unit.
pub fn feed_adjustment(feed_decimals: u8) -> Option<U256> {
    COMMON_DECIMALS.checked_sub(feed_decimals).map(pow10)
}
