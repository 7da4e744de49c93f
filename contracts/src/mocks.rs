//! Test doubles for local deployments and host tests.
//!
//! - `MockPriceFeed`: aggregator-style USD feed with a settable answer
//! - `MockCollateralToken`: CEP-18 token with open minting and a switch that
//!   makes transfers report failure
//! - `ReentrantCollateralToken`: CEP-18 token whose `transfer_from` calls back
//!   into the engine's `deposit_collateral`

use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;
use crate::cep18::Cep18Core;
use crate::engine::DscEngineContractRef;
use crate::types::RoundData;

/// Aggregator-style price feed
#[odra::module]
pub struct MockPriceFeed {
    decimals: Var<u8>,
    latest_answer: Var<U256>,
    latest_round: Var<u64>,
    latest_timestamp: Var<u64>,
}

#[odra::module]
impl MockPriceFeed {
    pub fn init(&mut self, decimals: u8, initial_answer: U256) {
        self.decimals.set(decimals);
        self.latest_round.set(0);
        self.update_answer(initial_answer);
    }

    /// Publish a new answer as the next round
    pub fn update_answer(&mut self, answer: U256) {
        let round = self.latest_round.get_or_default() + 1;
        self.latest_answer.set(answer);
        self.latest_round.set(round);
        self.latest_timestamp.set(self.env().get_block_time());
    }

    pub fn latest_round_data(&self) -> RoundData {
        let round = self.latest_round.get_or_default();
        let timestamp = self.latest_timestamp.get_or_default();
        RoundData {
            round_id: round,
            answer: self.latest_answer.get().unwrap_or(U256::zero()),
            started_at: timestamp,
            updated_at: timestamp,
            answered_in_round: round,
        }
    }

    pub fn decimals(&self) -> u8 {
        self.decimals.get_or_default()
    }
}

/// CEP-18 collateral token with open minting
#[odra::module]
pub struct MockCollateralToken {
    token: SubModule<Cep18Core>,
    fail_transfers: Var<bool>,
}

#[odra::module]
impl MockCollateralToken {
    pub fn init(
        &mut self,
        name: String,
        symbol: String,
        decimals: u8,
        initial_holder: Address,
        initial_balance: U256,
    ) {
        self.token.init_metadata(name, symbol, decimals);
        if !initial_balance.is_zero() {
            self.token.mint_tokens(initial_holder, initial_balance);
        }
        self.fail_transfers.set(false);
    }

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

    pub fn transfer(&mut self, recipient: Address, amount: U256) -> bool {
        if self.fail_transfers.get_or_default() {
            return false;
        }
        let sender = self.env().caller();
        self.token.move_tokens(sender, recipient, amount);
        true
    }

    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let owner = self.env().caller();
        self.token.set_allowance(owner, spender, amount);
        true
    }

    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool {
        if self.fail_transfers.get_or_default() {
            return false;
        }
        let spender = self.env().caller();
        self.token.spend_allowance(owner, spender, amount);
        self.token.move_tokens(owner, recipient, amount);
        true
    }

    /// Anyone can mint; test use only
    pub fn mint(&mut self, to: Address, amount: U256) {
        self.token.mint_tokens(to, amount);
    }

    /// Make `transfer` and `transfer_from` report failure without moving tokens
    pub fn set_fail_transfers(&mut self, fail: bool) {
        self.fail_transfers.set(fail);
    }
}

/// CEP-18 collateral token that re-enters the engine during `transfer_from`
#[odra::module]
pub struct ReentrantCollateralToken {
    token: SubModule<Cep18Core>,
    engine: Var<Address>,
}

#[odra::module]
impl ReentrantCollateralToken {
    pub fn init(&mut self, initial_holder: Address, initial_balance: U256) {
        self.token
            .init_metadata(String::from("Reentrant Token"), String::from("REN"), 18);
        self.token.mint_tokens(initial_holder, initial_balance);
    }

    /// Engine to call back into on the next `transfer_from`
    pub fn set_engine(&mut self, engine: Address) {
        self.engine.set(engine);
    }

    pub fn decimals(&self) -> u8 {
        self.token.decimals()
    }

    pub fn balance_of(&self, account: Address) -> U256 {
        self.token.balance_of(account)
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.token.allowance(owner, spender)
    }

    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let owner = self.env().caller();
        self.token.set_allowance(owner, spender, amount);
        true
    }

    pub fn transfer(&mut self, recipient: Address, amount: U256) -> bool {
        let sender = self.env().caller();
        self.token.move_tokens(sender, recipient, amount);
        true
    }

    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool {
        if let Some(engine) = self.engine.get() {
            let token = self.env().self_address();
            DscEngineContractRef::new(self.env(), engine).deposit_collateral(token, amount);
        }
        let spender = self.env().caller();
        self.token.spend_allowance(owner, spender, amount);
        self.token.move_tokens(owner, recipient, amount);
        true
    }
}
