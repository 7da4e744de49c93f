//! CEP-18 token bookkeeping.
//!
//! Shared by the DSC debt token and the collateral test token. Every write
//! goes through one of the `write_*` helpers, which update the Odra storage
//! and the standard CEP-18 named keys/dictionaries together so wallets and
//! indexers see the same numbers the contract does.

use odra::prelude::*;
use odra::casper_types::bytesrepr::ToBytes;
use odra::casper_types::{Key, U256};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use crate::errors::DscError;

/// Named keys and dictionaries defined by the CEP-18 standard
mod standard_keys {
    pub const NAME: &str = "name";
    pub const SYMBOL: &str = "symbol";
    pub const DECIMALS: &str = "decimals";
    pub const TOTAL_SUPPLY: &str = "total_supply";
    pub const BALANCES: &str = "balances";
    pub const ALLOWANCES: &str = "allowances";
}

/// CEP-18 storage and transfer rules
#[odra::module]
pub struct Cep18Core {
    name: Var<String>,
    symbol: Var<String>,
    decimals: Var<u8>,
    total_supply: Var<U256>,
    balances: Mapping<Address, U256>,
    /// (owner, spender) -> remaining allowance
    allowances: Mapping<(Address, Address), U256>,
}

#[odra::module]
impl Cep18Core {
    /// Store metadata and create the standard named keys
    pub fn init_metadata(&mut self, name: String, symbol: String, decimals: u8) {
        let env = self.env();
        env.init_dictionary(standard_keys::BALANCES);
        env.init_dictionary(standard_keys::ALLOWANCES);
        env.set_named_value(standard_keys::NAME, name.clone());
        env.set_named_value(standard_keys::SYMBOL, symbol.clone());
        env.set_named_value(standard_keys::DECIMALS, decimals);

        self.name.set(name);
        self.symbol.set(symbol);
        self.decimals.set(decimals);
        self.write_supply(U256::zero());
    }

    pub fn name(&self) -> String {
        self.name.get_or_default()
    }

    pub fn symbol(&self) -> String {
        self.symbol.get_or_default()
    }

    pub fn decimals(&self) -> u8 {
        self.decimals.get_or_default()
    }

    pub fn total_supply(&self) -> U256 {
        self.total_supply.get_or_default()
    }

    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get_or_default(&account)
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get_or_default(&(owner, spender))
    }

    /// Move `amount` from `from` to `to`
    pub fn move_tokens(&mut self, from: Address, to: Address, amount: U256) {
        self.debit(from, amount, DscError::InsufficientTokenBalance);
        self.credit(to, amount);
    }

    pub fn set_allowance(&mut self, owner: Address, spender: Address, amount: U256) {
        self.write_allowance(owner, spender, amount);
    }

    /// Consume `amount` of the allowance `owner` granted to `spender`
    pub fn spend_allowance(&mut self, owner: Address, spender: Address, amount: U256) {
        let remaining = match self.allowance(owner, spender).checked_sub(amount) {
            Some(remaining) => remaining,
            None => self.env().revert(DscError::InsufficientAllowance),
        };
        self.write_allowance(owner, spender, remaining);
    }

    /// Create `amount` new tokens for `to`
    pub fn mint_tokens(&mut self, to: Address, amount: U256) {
        let supply = match self.total_supply().checked_add(amount) {
            Some(supply) => supply,
            None => self.env().revert(DscError::MathOverflow),
        };
        self.write_supply(supply);
        self.credit(to, amount);
    }

    /// Destroy `amount` tokens held by `from`
    pub fn burn_tokens(&mut self, from: Address, amount: U256) {
        self.debit(from, amount, DscError::BurnAmountExceedsBalance);
        // A balance never exceeds the supply
        let supply = self.total_supply().saturating_sub(amount);
        self.write_supply(supply);
    }

    // ========== Internal Functions ==========

    fn credit(&mut self, account: Address, amount: U256) {
        let balance = match self.balance_of(account).checked_add(amount) {
            Some(balance) => balance,
            None => self.env().revert(DscError::MathOverflow),
        };
        self.write_balance(account, balance);
    }

    fn debit(&mut self, account: Address, amount: U256, shortfall: DscError) {
        let balance = match self.balance_of(account).checked_sub(amount) {
            Some(balance) => balance,
            None => self.env().revert(shortfall),
        };
        self.write_balance(account, balance);
    }

    fn write_balance(&mut self, account: Address, amount: U256) {
        self.balances.set(&account, amount);
        let key = dictionary_key(&[account]);
        self.env()
            .set_dictionary_value(standard_keys::BALANCES, key.as_bytes(), amount);
    }

    fn write_allowance(&mut self, owner: Address, spender: Address, amount: U256) {
        self.allowances.set(&(owner, spender), amount);
        let key = dictionary_key(&[owner, spender]);
        self.env()
            .set_dictionary_value(standard_keys::ALLOWANCES, key.as_bytes(), amount);
    }

    fn write_supply(&mut self, amount: U256) {
        self.total_supply.set(amount);
        self.env().set_named_value(standard_keys::TOTAL_SUPPLY, amount);
    }
}

/// Base64 of the concatenated serialized `Key`s, as CEP-18 dictionaries expect
fn dictionary_key(accounts: &[Address]) -> String {
    let mut bytes = Vec::new();
    for account in accounts {
        bytes.extend(Key::from(*account).to_bytes().unwrap_or_default());
    }
    BASE64.encode(bytes)
}
