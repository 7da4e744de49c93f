//! DSC Contracts
//!
//! Overcollateralized, USD-pegged stablecoin (DSC) on Casper.
//!
//! ## Architecture
//!
//! - **DscEngine**: Deposit/redeem collateral, mint/burn DSC, solvency gate
//! - **Ledger**: Per-account collateral and debt balances (engine submodule)
//! - **OracleAdapter**: Price feed reads normalized to 18 decimals
//! - **Valuation / Health**: Fixed-point collateral value and health factor
//! - **DecentralizedStableCoin**: CEP-18 debt token, owner-only mint/burn
//! - **Mocks**: Price feed and collateral token for local use
//!
//! ## Solvency
//!
//! Collateral counts at 50% of its USD value; an account with debt must keep
//! that discounted value at or above its DSC minted (health factor >= 1.0).

#![cfg_attr(target_arch = "wasm32", no_std)]

#[cfg(target_arch = "wasm32")]
extern crate alloc;

// Re-export odra for downstream usage
pub use odra;

// Core module declarations
pub mod types;
pub mod errors;
pub mod precision;
pub mod interfaces;
pub mod oracle_adapter;
pub mod valuation;
pub mod health;

// Contract modules
pub mod cep18;
pub mod ledger;
pub mod engine;
pub mod stablecoin;
pub mod mocks;
