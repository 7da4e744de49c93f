//! DSC Engine Contract
//!
//! Sole mutator of the collateral/debt ledger. Users deposit approved
//! collateral, mint DSC against it, burn DSC and redeem collateral, while
//! every account must keep a health factor of at least 1.0:
//!
//! (collateral_value * 50 / 100) * 1e18 / dsc_minted >= 1e18
//!
//! i.e. collateral must be worth at least twice the DSC minted against it.
//!
//! ## Execution order
//! - The ledger is written first, then solvency is checked, then tokens move
//! - Compositions check solvency once, on the final state
//! - Any failure reverts the whole call, nested token calls included
//! - A reentrancy lock rejects nested entry into mutating operations
//!
//! Liquidation is not executed here; `is_liquidatable` reports eligibility.

use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;
use crate::errors::DscError;
use crate::health;
use crate::interfaces::{Cep18TokenContractRef, DebtTokenContractRef};
use crate::ledger::Ledger;
use crate::oracle_adapter::OracleAdapter;
use crate::precision::{
    asset_scale, ADDITIONAL_FEED_PRECISION, LIQUIDATION_PRECISION, LIQUIDATION_THRESHOLD, MIN_HEALTH_FACTOR,
    PRECISION,
};
use crate::types::{AccountInformation, CollateralAsset, HealthStatus};
use crate::valuation;

pub mod events {
    use odra::prelude::*;
    use odra::casper_types::U256;

    #[odra::event]
    pub struct CollateralDeposited {
        pub user: Address,
        pub token: Address,
        pub amount: U256,
    }

    #[odra::event]
    pub struct CollateralRedeemed {
        pub redeemed_from: Address,
        pub redeemed_to: Address,
        pub token: Address,
        pub amount: U256,
    }

    #[odra::event]
    pub struct DscMinted {
        pub user: Address,
        pub amount: U256,
    }

    #[odra::event]
    pub struct DscBurned {
        pub on_behalf_of: Address,
        pub dsc_from: Address,
        pub amount: U256,
    }
}

/// DSC Engine Contract
#[odra::module(events = [
    events::CollateralDeposited,
    events::CollateralRedeemed,
    events::DscMinted,
    events::DscBurned
])]
pub struct DscEngine {
    /// Approved collateral by token address, fixed at init
    collateral_assets: Mapping<Address, CollateralAsset>,
    /// Approved collateral tokens in configuration order
    collateral_tokens: Var<Vec<Address>>,
    /// DSC token contract address
    dsc: Var<Address>,
    /// Per-account balances
    ledger: SubModule<Ledger>,
    /// Reentrancy lock
    locked: Var<bool>,
}

#[odra::module]
impl DscEngine {
    /// Initialize the engine with (token, price feed) pairs and the DSC token.
    ///
    /// The DSC token's ownership must be transferred to this contract
    /// afterwards; until then mint and burn revert.
    pub fn init(
        &mut self,
        token_addresses: Vec<Address>,
        price_feed_addresses: Vec<Address>,
        dsc_address: Address,
    ) {
        if token_addresses.len() != price_feed_addresses.len() {
            self.env()
                .revert(DscError::TokenAddressesAndPriceFeedAddressesMustBeSameLength);
        }
        if token_addresses.is_empty() {
            self.env().revert(DscError::NoCollateralConfigured);
        }

        for (token, price_feed) in token_addresses.iter().zip(price_feed_addresses.iter()) {
            if self.collateral_assets.get(token).is_some() {
                self.env().revert(DscError::DuplicateCollateralToken);
            }
            let decimals = Cep18TokenContractRef::new(self.env(), *token).decimals();
            if asset_scale(decimals).is_none() {
                self.env().revert(DscError::UnsupportedAssetDecimals);
            }
            self.collateral_assets.set(
                token,
                CollateralAsset {
                    token: *token,
                    price_feed: *price_feed,
                    decimals,
                },
            );
        }

        self.collateral_tokens.set(token_addresses);
        self.dsc.set(dsc_address);
        self.locked.set(false);
    }

    // ========== Mutating Operations ==========

    /// Lock `amount_collateral` of an approved token.
    /// Requires a prior `approve` of the engine on the token.
    pub fn deposit_collateral(&mut self, token_collateral_address: Address, amount_collateral: U256) {
        self.lock();
        let user = self.env().caller();
        self.deposit_collateral_from(user, token_collateral_address, amount_collateral);
        self.unlock();
    }

    /// Mint `amount_dsc_to_mint` DSC to the caller against deposited collateral
    pub fn mint_dsc(&mut self, amount_dsc_to_mint: U256) {
        self.lock();
        let user = self.env().caller();
        self.record_mint(user, amount_dsc_to_mint);
        self.revert_if_health_factor_is_broken(user);
        self.issue_dsc(user, amount_dsc_to_mint);
        self.unlock();
    }

    /// Withdraw collateral; the remaining position must stay healthy
    pub fn redeem_collateral(&mut self, token_collateral_address: Address, amount_collateral: U256) {
        self.lock();
        let user = self.env().caller();
        self.record_redeem(user, user, token_collateral_address, amount_collateral);
        self.revert_if_health_factor_is_broken(user);
        self.send_collateral(user, token_collateral_address, amount_collateral);
        self.unlock();
    }

    /// Burn DSC to reduce the caller's debt.
    /// Requires a prior `approve` of the engine on the DSC token.
    pub fn burn_dsc(&mut self, amount: U256) {
        self.lock();
        let user = self.env().caller();
        self.burn_dsc_for(user, user, amount);
        self.unlock();
    }

    /// Deposit collateral and mint DSC in one step; solvency is checked on
    /// the combined result only
    pub fn deposit_collateral_and_mint_dsc(
        &mut self,
        token_collateral_address: Address,
        amount_collateral: U256,
        amount_dsc_to_mint: U256,
    ) {
        self.lock();
        let user = self.env().caller();
        self.deposit_collateral_from(user, token_collateral_address, amount_collateral);
        self.record_mint(user, amount_dsc_to_mint);
        self.revert_if_health_factor_is_broken(user);
        self.issue_dsc(user, amount_dsc_to_mint);
        self.unlock();
    }

    /// Burn DSC and redeem collateral in one step; solvency is checked on
    /// the combined result only
    pub fn redeem_collateral_for_dsc(
        &mut self,
        token_collateral_address: Address,
        amount_collateral: U256,
        amount_dsc_to_burn: U256,
    ) {
        self.lock();
        let user = self.env().caller();
        self.burn_dsc_for(user, user, amount_dsc_to_burn);
        self.record_redeem(user, user, token_collateral_address, amount_collateral);
        self.revert_if_health_factor_is_broken(user);
        self.send_collateral(user, token_collateral_address, amount_collateral);
        self.unlock();
    }

    // ========== Account Queries ==========

    /// (is_healthy, health_factor) without mutating anything
    pub fn is_user_healthy(&self, user: Address) -> (bool, U256) {
        let status = self.get_health_status(user);
        (status.is_healthy, status.health_factor)
    }

    pub fn get_health_factor(&self, user: Address) -> U256 {
        self.get_health_status(user).health_factor
    }

    pub fn get_health_status(&self, user: Address) -> HealthStatus {
        let info = self.account_information(user);
        or_revert(&self.env(), health::health_status(&info))
    }

    /// Health factor below 1.0; eligibility only, no seizure is performed
    pub fn is_liquidatable(&self, user: Address) -> bool {
        !self.get_health_status(user).is_healthy
    }

    /// (total_dsc_minted, collateral_value_in_usd)
    pub fn get_account_information(&self, user: Address) -> (U256, U256) {
        let info = self.account_information(user);
        (info.total_dsc_minted, info.collateral_value_in_usd)
    }

    /// Sum of the USD value of every collateral the user holds
    pub fn get_account_collateral_value(&self, user: Address) -> U256 {
        let tokens = self.collateral_tokens.get_or_default();
        let mut total = U256::zero();
        for token in tokens {
            let amount = self.ledger.collateral_of(user, token);
            if amount.is_zero() {
                continue;
            }
            let value = self.get_usd_value(token, amount);
            total = match total.checked_add(value) {
                Some(sum) => sum,
                None => self.env().revert(DscError::MathOverflow),
            };
        }
        total
    }

    pub fn get_collateral_balance_of_user(&self, user: Address, token: Address) -> U256 {
        self.ledger.collateral_of(user, token)
    }

    pub fn get_dsc_minted(&self, user: Address) -> U256 {
        self.ledger.dsc_minted_by(user)
    }

    // ========== Valuation Queries ==========

    /// USD value (18 decimals) of `amount` native units of `token`
    pub fn get_usd_value(&self, token: Address, amount: U256) -> U256 {
        let asset = self.require_allowed_token(token);
        let price = or_revert(&self.env(), OracleAdapter::normalized_price(&self.env(), asset.price_feed));
        or_revert(&self.env(), valuation::value_of(amount, price, asset.decimals))
    }

    /// Native units of `token` worth `usd_amount` (18 decimals), rounded down
    pub fn get_token_amount_from_usd(&self, token: Address, usd_amount: U256) -> U256 {
        let asset = self.require_allowed_token(token);
        let price = or_revert(&self.env(), OracleAdapter::normalized_price(&self.env(), asset.price_feed));
        or_revert(&self.env(), valuation::amount_for(usd_amount, price, asset.decimals))
    }

    pub fn calculate_health_factor(&self, total_dsc_minted: U256, collateral_value_in_usd: U256) -> U256 {
        or_revert(
            &self.env(),
            health::calculate_health_factor(total_dsc_minted, collateral_value_in_usd),
        )
    }

    // ========== Configuration Queries ==========

    pub fn get_collateral_tokens(&self) -> Vec<Address> {
        self.collateral_tokens.get_or_default()
    }

    pub fn get_collateral_token_price_feed(&self, token: Address) -> Option<Address> {
        self.collateral_assets.get(&token).map(|asset| asset.price_feed)
    }

    pub fn get_collateral_asset(&self, token: Address) -> Option<CollateralAsset> {
        self.collateral_assets.get(&token)
    }

    pub fn get_dsc(&self) -> Option<Address> {
        self.dsc.get()
    }

    pub fn get_precision(&self) -> U256 {
        U256::from(PRECISION)
    }

    pub fn get_additional_feed_precision(&self) -> U256 {
        U256::from(ADDITIONAL_FEED_PRECISION)
    }

    pub fn get_liquidation_threshold(&self) -> U256 {
        U256::from(LIQUIDATION_THRESHOLD)
    }

    pub fn get_liquidation_precision(&self) -> U256 {
        U256::from(LIQUIDATION_PRECISION)
    }

    pub fn get_min_health_factor(&self) -> U256 {
        U256::from(MIN_HEALTH_FACTOR)
    }

    // ========== Internal Functions ==========

    fn deposit_collateral_from(&mut self, user: Address, token: Address, amount: U256) {
        self.require_more_than_zero(amount);
        self.require_allowed_token(token);

        self.ledger.increase_collateral(user, token, amount);
        self.env().emit_event(events::CollateralDeposited {
            user,
            token,
            amount,
        });

        let engine = self.env().self_address();
        let success = Cep18TokenContractRef::new(self.env(), token).transfer_from(user, engine, amount);
        if !success {
            self.env().revert(DscError::TransferFailed);
        }
    }

    fn record_mint(&mut self, user: Address, amount: U256) {
        self.require_more_than_zero(amount);
        self.ledger.increase_debt(user, amount);
        self.env().emit_event(events::DscMinted { user, amount });
    }

    fn issue_dsc(&mut self, user: Address, amount: U256) {
        let minted = DebtTokenContractRef::new(self.env(), self.dsc_address()).mint(user, amount);
        if !minted {
            self.env().revert(DscError::MintFailed);
        }
    }

    fn record_redeem(&mut self, from: Address, to: Address, token: Address, amount: U256) {
        self.require_more_than_zero(amount);
        self.require_allowed_token(token);
        self.ledger.decrease_collateral(from, token, amount);
        self.env().emit_event(events::CollateralRedeemed {
            redeemed_from: from,
            redeemed_to: to,
            token,
            amount,
        });
    }

    fn send_collateral(&mut self, to: Address, token: Address, amount: U256) {
        let success = Cep18TokenContractRef::new(self.env(), token).transfer(to, amount);
        if !success {
            self.env().revert(DscError::TransferFailed);
        }
    }

    /// Retire `amount` of `on_behalf_of`'s debt using DSC pulled from `dsc_from`
    fn burn_dsc_for(&mut self, on_behalf_of: Address, dsc_from: Address, amount: U256) {
        self.require_more_than_zero(amount);
        self.ledger.decrease_debt(on_behalf_of, amount);
        self.env().emit_event(events::DscBurned {
            on_behalf_of,
            dsc_from,
            amount,
        });

        let engine = self.env().self_address();
        let mut dsc = DebtTokenContractRef::new(self.env(), self.dsc_address());
        if !dsc.transfer_from(dsc_from, engine, amount) {
            self.env().revert(DscError::TransferFailed);
        }
        dsc.burn(amount);
    }

    fn account_information(&self, user: Address) -> AccountInformation {
        AccountInformation {
            total_dsc_minted: self.ledger.dsc_minted_by(user),
            collateral_value_in_usd: self.get_account_collateral_value(user),
        }
    }

    fn revert_if_health_factor_is_broken(&self, user: Address) {
        let info = self.account_information(user);
        // The failing factor stays readable through get_health_factor; the
        // revert itself only carries the error code
        if let Err(error) = health::assert_healthy(&info) {
            self.env().revert(DscError::from(error));
        }
    }

    fn require_allowed_token(&self, token: Address) -> CollateralAsset {
        match self.collateral_assets.get(&token) {
            Some(asset) => asset,
            None => self.env().revert(DscError::TokenNotAllowed),
        }
    }

    fn require_more_than_zero(&self, amount: U256) {
        if amount.is_zero() {
            self.env().revert(DscError::NeedsMoreThanZero);
        }
    }

    fn dsc_address(&self) -> Address {
        self.dsc.get_or_revert_with(DscError::DscNotConfigured)
    }

    fn lock(&mut self) {
        if self.locked.get_or_default() {
            self.env().revert(DscError::Reentrancy);
        }
        self.locked.set(true);
    }

    fn unlock(&mut self) {
        self.locked.set(false);
    }
}

/// Unwrap a pure-helper result at the contract boundary
fn or_revert<T>(env: &odra::ContractEnv, result: Result<T, DscError>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => env.revert(error),
    }
}
