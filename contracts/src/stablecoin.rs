//! DSC Stablecoin Contract
//!
//! CEP-18 compatible, USD-pegged debt token. Minting and burning are
//! restricted to the owner; at deployment ownership is handed to the
//! DscEngine so that no other party can change the supply.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::cep18::Cep18Core;
use crate::errors::DscError;

const DSC_NAME: &str = "DecentralizedStableCoin";
const DSC_SYMBOL: &str = "DSC";
const DSC_DECIMALS: u8 = 18;

pub mod events {
    use odra::prelude::*;

    #[odra::event]
    pub struct OwnershipTransferred {
        pub previous_owner: Address,
        pub new_owner: Address,
    }
}

/// DSC Stablecoin Contract
#[odra::module(events = [events::OwnershipTransferred])]
pub struct DecentralizedStableCoin {
    /// Token bookkeeping
    token: SubModule<Cep18Core>,
    /// Sole address allowed to mint and burn
    owner: Var<Address>,
}

#[odra::module]
impl DecentralizedStableCoin {
    /// Initialize the stablecoin; the deployer becomes the owner
    pub fn init(&mut self) {
        self.token
            .init_metadata(String::from(DSC_NAME), String::from(DSC_SYMBOL), DSC_DECIMALS);
        self.owner.set(self.env().caller());
    }

    // ========== CEP-18 Standard Functions ==========

    pub fn name(&self) -> String {
        self.token.name()
    }

    pub fn symbol(&self) -> String {
        self.token.symbol()
    }

    pub fn decimals(&self) -> u8 {
        self.token.decimals()
    }

    pub fn total_supply(&self) -> U256 {
        self.token.total_supply()
    }

    pub fn balance_of(&self, account: Address) -> U256 {
        self.token.balance_of(account)
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.token.allowance(owner, spender)
    }

    /// Transfer tokens to recipient
    pub fn transfer(&mut self, recipient: Address, amount: U256) -> bool {
        let sender = self.env().caller();
        self.token.move_tokens(sender, recipient, amount);
        true
    }

    /// Approve spender to spend tokens
    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let owner = self.env().caller();
        self.token.set_allowance(owner, spender, amount);
        true
    }

    /// Transfer tokens from owner to recipient (requires allowance)
    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool {
        let spender = self.env().caller();
        self.token.spend_allowance(owner, spender, amount);
        self.token.move_tokens(owner, recipient, amount);
        true
    }

    // ========== Supply Functions (Owner Only) ==========

    /// Mint new tokens to `to`
    pub fn mint(&mut self, to: Address, amount: U256) -> bool {
        self.require_owner();
        if amount.is_zero() {
            self.env().revert(DscError::NeedsMoreThanZero);
        }
        self.token.mint_tokens(to, amount);
        true
    }

    /// Burn tokens held by the owner
    pub fn burn(&mut self, amount: U256) {
        self.require_owner();
        if amount.is_zero() {
            self.env().revert(DscError::NeedsMoreThanZero);
        }
        let caller = self.env().caller();
        self.token.burn_tokens(caller, amount);
    }

    // ========== Ownership ==========

    /// Hand mint/burn rights to a new owner
    pub fn transfer_ownership(&mut self, new_owner: Address) {
        self.require_owner();
        let previous_owner = self.env().caller();
        self.owner.set(new_owner);
        self.env().emit_event(events::OwnershipTransferred {
            previous_owner,
            new_owner,
        });
    }

    pub fn get_owner(&self) -> Option<Address> {
        self.owner.get()
    }

    // ========== Internal Functions ==========

    fn require_owner(&self) {
        let caller = self.env().caller();
        if self.owner.get() != Some(caller) {
            self.env().revert(DscError::NotOwner);
        }
    }
}
