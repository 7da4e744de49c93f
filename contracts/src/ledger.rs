//! Per-account collateral and debt ledger.
//!
//! Plain state holder owned by the DscEngine. Amounts are unsigned, so a
//! decrease past zero cannot wrap: it reverts with the matching
//! insufficient-balance error. Unseen accounts read as zero.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::DscError;

/// Collateral and minted-debt balances keyed by account
#[odra::module]
pub struct Ledger {
    /// (user, collateral token) -> deposited amount, token-native units
    collateral_deposited: Mapping<(Address, Address), U256>,
    /// user -> DSC minted
    dsc_minted: Mapping<Address, U256>,
}

#[odra::module]
impl Ledger {
    pub fn collateral_of(&self, user: Address, token: Address) -> U256 {
        self.collateral_deposited.get(&(user, token)).unwrap_or(U256::zero())
    }

    pub fn dsc_minted_by(&self, user: Address) -> U256 {
        self.dsc_minted.get(&user).unwrap_or(U256::zero())
    }

    /// Returns the new balance
    pub fn increase_collateral(&mut self, user: Address, token: Address, amount: U256) -> U256 {
        self.require_more_than_zero(amount);
        let new_balance = match self.collateral_of(user, token).checked_add(amount) {
            Some(balance) => balance,
            None => self.env().revert(DscError::MathOverflow),
        };
        self.collateral_deposited.set(&(user, token), new_balance);
        new_balance
    }

    /// Returns the new balance
    pub fn decrease_collateral(&mut self, user: Address, token: Address, amount: U256) -> U256 {
        self.require_more_than_zero(amount);
        let new_balance = match self.collateral_of(user, token).checked_sub(amount) {
            Some(balance) => balance,
            None => self.env().revert(DscError::InsufficientCollateral),
        };
        self.collateral_deposited.set(&(user, token), new_balance);
        new_balance
    }

    /// Returns the new debt
    pub fn increase_debt(&mut self, user: Address, amount: U256) -> U256 {
        self.require_more_than_zero(amount);
        let new_debt = match self.dsc_minted_by(user).checked_add(amount) {
            Some(debt) => debt,
            None => self.env().revert(DscError::MathOverflow),
        };
        self.dsc_minted.set(&user, new_debt);
        new_debt
    }

    /// Returns the new debt
    pub fn decrease_debt(&mut self, user: Address, amount: U256) -> U256 {
        self.require_more_than_zero(amount);
        let new_debt = match self.dsc_minted_by(user).checked_sub(amount) {
            Some(debt) => debt,
            None => self.env().revert(DscError::InsufficientDebt),
        };
        self.dsc_minted.set(&user, new_debt);
        new_debt
    }

    fn require_more_than_zero(&self, amount: U256) {
        if amount.is_zero() {
            self.env().revert(DscError::NeedsMoreThanZero);
        }
    }
}
