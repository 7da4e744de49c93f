//! Collateral valuation in common units.
//!
//! `price` is always the normalized 18-decimal USD price of one whole token
//! (see `oracle_adapter::normalize`), and `asset_decimals` the token's native
//! decimals:
//!
//! value  = amount * price / 10^asset_decimals
//! amount = value * 10^asset_decimals / price
//!
//! Both truncate toward zero, so `amount_for(value_of(x))` may come back
//! short of `x` by the rounding loss.

use odra::casper_types::U256;
use crate::errors::DscError;
use crate::precision::asset_scale;

/// Common-unit value of `amount` native units of an asset
pub fn value_of(amount: U256, price: U256, asset_decimals: u8) -> Result<U256, DscError> {
    let unit = asset_scale(asset_decimals).ok_or(DscError::UnsupportedAssetDecimals)?;
    let scaled = amount.checked_mul(price).ok_or(DscError::MathOverflow)?;
    Ok(scaled / unit)
}

/// Native units of an asset worth `usd_value` common units
pub fn amount_for(usd_value: U256, price: U256, asset_decimals: u8) -> Result<U256, DscError> {
    if price.is_zero() {
        return Err(DscError::InvalidPrice);
    }
    let unit = asset_scale(asset_decimals).ok_or(DscError::UnsupportedAssetDecimals)?;
    let scaled = usd_value.checked_mul(unit).ok_or(DscError::MathOverflow)?;
    Ok(scaled / price)
}
