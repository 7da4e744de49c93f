//! Price Oracle Adapter
//!
//! Reads the latest answer from an aggregator-style USD price feed and
//! normalizes it into the 18-decimal common scale:
//!
//! P(common) = answer * 10^(18 - feed_decimals)
//!
//! No staleness window is enforced here; a quote is only as fresh as the
//! feed reports it.

use odra::prelude::*;
use odra::casper_types::{RuntimeArgs, U256};
use odra::CallDef;
use crate::errors::DscError;
use crate::precision::feed_adjustment;
use crate::types::{PriceQuote, RoundData};

/// Helper for price feed queries
pub struct OracleAdapter;

impl OracleAdapter {
    /// Fetch the current (price, decimals) pair from a feed
    pub fn latest_quote(env: &odra::ContractEnv, price_feed: Address) -> PriceQuote {
        let round_call = CallDef::new("latest_round_data", false, RuntimeArgs::new());
        let round: RoundData = env.call_contract(price_feed, round_call);

        let decimals_call = CallDef::new("decimals", false, RuntimeArgs::new());
        let decimals: u8 = env.call_contract(price_feed, decimals_call);

        PriceQuote {
            price: round.answer,
            decimals,
        }
    }

    /// Fetch and normalize the price of one whole token, 18 decimals
    pub fn normalized_price(env: &odra::ContractEnv, price_feed: Address) -> Result<U256, DscError> {
        normalize(&Self::latest_quote(env, price_feed))
    }
}

/// Scale a quote to 18 decimals.
///
/// Fails with `InvalidPrice` on a zero answer and `UnsupportedFeedDecimals`
/// when the feed is more precise than the common unit.
pub fn normalize(quote: &PriceQuote) -> Result<U256, DscError> {
    if quote.price.is_zero() {
        return Err(DscError::InvalidPrice);
    }
    let adjustment = feed_adjustment(quote.decimals).ok_or(DscError::UnsupportedFeedDecimals)?;
    quote.price.checked_mul(adjustment).ok_or(DscError::MathOverflow)
}
