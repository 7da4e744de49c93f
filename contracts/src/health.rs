//! Health factor model.
//!
//! health_factor = (collateral_value * LIQUIDATION_THRESHOLD / LIQUIDATION_PRECISION)
//!                 * PRECISION / total_dsc_minted
//!
//! An account with no debt has an unbounded health factor, represented as
//! `U256::MAX` rather than a division by zero.

use odra::casper_types::U256;
use crate::errors::DscError;
use crate::precision::{LIQUIDATION_PRECISION, LIQUIDATION_THRESHOLD, MIN_HEALTH_FACTOR, PRECISION};
use crate::types::{AccountInformation, HealthStatus};

/// Health factor reported for accounts without debt
pub const UNBOUNDED_HEALTH_FACTOR: U256 = U256::MAX;

/// Failed solvency check
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HealthCheckError {
    /// Health factor below MIN_HEALTH_FACTOR, carrying the offending value
    BreaksHealthFactor(U256),
    /// Health factor could not be computed
    Math(DscError),
}

impl From<DscError> for HealthCheckError {
    fn from(error: DscError) -> Self {
        HealthCheckError::Math(error)
    }
}

impl From<HealthCheckError> for DscError {
    fn from(error: HealthCheckError) -> Self {
        match error {
            HealthCheckError::BreaksHealthFactor(_) => DscError::BreaksHealthFactor,
            HealthCheckError::Math(inner) => inner,
        }
    }
}

/// Collateral value counted toward solvency
pub fn adjusted_collateral(collateral_value_in_usd: U256) -> Result<U256, DscError> {
    let weighted = collateral_value_in_usd
        .checked_mul(U256::from(LIQUIDATION_THRESHOLD))
        .ok_or(DscError::MathOverflow)?;
    Ok(weighted / U256::from(LIQUIDATION_PRECISION))
}

/// Compute the health factor for (debt, collateral value)
pub fn calculate_health_factor(
    total_dsc_minted: U256,
    collateral_value_in_usd: U256,
) -> Result<U256, DscError> {
    if total_dsc_minted.is_zero() {
        return Ok(UNBOUNDED_HEALTH_FACTOR);
    }
    let adjusted = adjusted_collateral(collateral_value_in_usd)?;
    let scaled = adjusted
        .checked_mul(U256::from(PRECISION))
        .ok_or(DscError::MathOverflow)?;
    Ok(scaled / total_dsc_minted)
}

pub fn is_healthy(health_factor: U256) -> bool {
    health_factor >= U256::from(MIN_HEALTH_FACTOR)
}

/// Build the derived solvency view of an account
pub fn health_status(info: &AccountInformation) -> Result<HealthStatus, DscError> {
    let health_factor = calculate_health_factor(info.total_dsc_minted, info.collateral_value_in_usd)?;
    Ok(HealthStatus {
        collateral_value_in_usd: info.collateral_value_in_usd,
        total_dsc_minted: info.total_dsc_minted,
        health_factor,
        is_healthy: is_healthy(health_factor),
    })
}

/// Gate used by every operation that can reduce solvency.
///
/// Returns the passing health factor.
pub fn assert_healthy(info: &AccountInformation) -> Result<U256, HealthCheckError> {
    let status = health_status(info)?;
    if !status.is_healthy {
        return Err(HealthCheckError::BreaksHealthFactor(status.health_factor));
    }
    Ok(status.health_factor)
}
