//! External contract interfaces consumed by the DSC engine.

use odra::prelude::*;
use odra::casper_types::U256;

/// CEP-18 interface for collateral tokens
#[odra::external_contract]
pub trait Cep18Token {
    fn transfer(&mut self, recipient: Address, amount: U256) -> bool;
    fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool;
    fn approve(&mut self, spender: Address, amount: U256) -> bool;
    fn allowance(&self, owner: Address, spender: Address) -> U256;
    fn balance_of(&self, account: Address) -> U256;
    fn decimals(&self) -> u8;
}

/// DSC supply surface; callable only by the token owner (the engine)
#[odra::external_contract]
pub trait DebtToken {
    fn mint(&mut self, to: Address, amount: U256) -> bool;
    fn burn(&mut self, amount: U256);
    fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool;
}
