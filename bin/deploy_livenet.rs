//! Deploy the DSC system to Casper livenet/testnet using Odra livenet environment.
//!
//! Usage:
//!   cargo run --bin deploy_livenet --release
//!
//! Requires .env file with:
//!   ODRA_CASPER_LIVENET_SECRET_KEY_PATH=/path/to/secret_key.pem
//!   ODRA_CASPER_LIVENET_NODE_ADDRESS=https://node.testnet.casper.network
//!   ODRA_CASPER_LIVENET_CHAIN_NAME=casper-test
//!   ODRA_CASPER_LIVENET_PAYMENT_AMOUNT=200000000000
//!
//! Optional:
//!   DSC_COLLATERAL_TOKENS=hash-...,hash-...   existing CEP-18 collateral
//!   DSC_PRICE_FEEDS=hash-...,hash-...         matching USD price feeds
//!   DSC_DEPLOYMENTS_FILE=deployments.json     address book output
//!
//! Without DSC_COLLATERAL_TOKENS, mock WETH ($2000) and WBTC ($1000) tokens
//! with 8-decimal feeds are deployed first.

use std::str::FromStr;

use odra::casper_types::{Key, U256};
use odra::host::{Deployer, HostEnv, HostRef, NoArgs};
use odra::prelude::*;
use serde::Serialize;

use dsc_engine_contracts::engine::{DscEngine, DscEngineInitArgs};
use dsc_engine_contracts::mocks::{
    MockCollateralToken, MockCollateralTokenInitArgs, MockPriceFeed, MockPriceFeedInitArgs,
};
use dsc_engine_contracts::stablecoin::DecentralizedStableCoin;

const FEED_DECIMALS: u8 = 8;
const WETH_USD_PRICE: u64 = 2_000;
const WBTC_USD_PRICE: u64 = 1_000;
const MOCK_INITIAL_BALANCE: u64 = 1_000;

#[derive(Serialize)]
struct AddressBook {
    deployer: String,
    dsc: String,
    dsc_engine: String,
    collateral: Vec<CollateralEntry>,
}

#[derive(Serialize)]
struct CollateralEntry {
    token: String,
    price_feed: String,
}

fn main() {
    // Load environment from .env file
    dotenv::dotenv().ok();

    println!("=== DSC Livenet Deployment ===");
    println!();

    // Initialize Odra livenet environment
    let env = odra_casper_livenet_env::env();

    // Configure payment amount for deployments/calls (required for Casper 2.0 txs)
    let payment_amount: u64 = std::env::var("ODRA_CASPER_LIVENET_PAYMENT_AMOUNT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(200_000_000_000);
    env.set_gas(payment_amount);

    let deployer = env.caller();
    println!("Deployer: {:?}", deployer);
    println!();

    // ==================== Phase 1: Collateral ====================
    println!("=== Phase 1: Collateral Configuration ===");
    println!();

    let (token_addresses, price_feed_addresses) = match configured_collateral() {
        Some(pairs) => {
            println!("Using {} configured collateral pair(s).", pairs.0.len());
            pairs
        }
        None => {
            println!("DSC_COLLATERAL_TOKENS not set, deploying mocks...");
            deploy_mock_collateral(&env, deployer)
        }
    };
    for (token, feed) in token_addresses.iter().zip(price_feed_addresses.iter()) {
        println!("  token {:?} -> feed {:?}", token, feed);
    }
    println!();

    // ==================== Phase 2: Stablecoin and Engine ====================
    println!("=== Phase 2: Deploying DSC and Engine ===");
    println!();

    println!("Deploying DecentralizedStableCoin...");
    let mut dsc = DecentralizedStableCoin::deploy(&env, NoArgs);
    let dsc_addr = dsc.address().clone();
    println!("DecentralizedStableCoin deployed at: {:?}", dsc_addr);

    println!("Deploying DscEngine...");
    let engine = DscEngine::deploy(
        &env,
        DscEngineInitArgs {
            token_addresses: token_addresses.clone(),
            price_feed_addresses: price_feed_addresses.clone(),
            dsc_address: dsc_addr,
        },
    );
    let engine_addr = engine.address().clone();
    println!("DscEngine deployed at: {:?}", engine_addr);
    println!();

    // ==================== Phase 3: Ownership ====================
    println!("=== Phase 3: Handing DSC Ownership to Engine ===");
    println!();

    println!("Transferring DecentralizedStableCoin ownership...");
    dsc.transfer_ownership(engine_addr);
    println!("Done.");
    println!();

    // ==================== Address Book ====================
    let book = AddressBook {
        deployer: formatted(deployer),
        dsc: formatted(dsc_addr),
        dsc_engine: formatted(engine_addr),
        collateral: token_addresses
            .iter()
            .zip(price_feed_addresses.iter())
            .map(|(token, feed)| CollateralEntry {
                token: formatted(*token),
                price_feed: formatted(*feed),
            })
            .collect(),
    };
    let path = std::env::var("DSC_DEPLOYMENTS_FILE").unwrap_or_else(|_| "deployments.json".to_string());
    let json = serde_json::to_string_pretty(&book).expect("address book serializes");
    std::fs::write(&path, json).expect("failed to write address book");

    println!("=== Deployment Complete ===");
    println!();
    println!("Contract Addresses:");
    println!("  DecentralizedStableCoin: {:?}", dsc_addr);
    println!("  DscEngine:               {:?}", engine_addr);
    println!("Address book written to {}", path);
}

/// Token and feed lists from the environment, if configured
fn configured_collateral() -> Option<(Vec<Address>, Vec<Address>)> {
    let tokens = std::env::var("DSC_COLLATERAL_TOKENS").ok()?;
    let feeds = std::env::var("DSC_PRICE_FEEDS").expect("DSC_PRICE_FEEDS must accompany DSC_COLLATERAL_TOKENS");
    let tokens = parse_addresses(&tokens);
    let feeds = parse_addresses(&feeds);
    if tokens.len() != feeds.len() {
        panic!(
            "DSC_COLLATERAL_TOKENS has {} entries but DSC_PRICE_FEEDS has {}",
            tokens.len(),
            feeds.len()
        );
    }
    Some((tokens, feeds))
}

fn parse_addresses(list: &str) -> Vec<Address> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| Address::from_str(s).unwrap_or_else(|e| panic!("invalid address {}: {:?}", s, e)))
        .collect()
}

/// Deploy WETH/WBTC mock tokens with 8-decimal USD feeds
fn deploy_mock_collateral(env: &HostEnv, deployer: Address) -> (Vec<Address>, Vec<Address>) {
    let mocks = [("Wrapped Ether", "WETH", WETH_USD_PRICE), ("Wrapped Bitcoin", "WBTC", WBTC_USD_PRICE)];
    let mut tokens = Vec::new();
    let mut feeds = Vec::new();

    for (name, symbol, usd_price) in mocks {
        println!("Deploying {} price feed (${})...", symbol, usd_price);
        let feed = MockPriceFeed::deploy(
            env,
            MockPriceFeedInitArgs {
                decimals: FEED_DECIMALS,
                initial_answer: U256::from(usd_price) * U256::from(10u64).pow(U256::from(FEED_DECIMALS)),
            },
        );
        println!("{} feed deployed at: {:?}", symbol, feed.address().clone());

        println!("Deploying {} token...", symbol);
        let token = MockCollateralToken::deploy(
            env,
            MockCollateralTokenInitArgs {
                name: name.to_string(),
                symbol: symbol.to_string(),
                decimals: 18,
                initial_holder: deployer,
                initial_balance: U256::from(MOCK_INITIAL_BALANCE) * U256::from(10u64).pow(U256::from(18u64)),
            },
        );
        println!("{} token deployed at: {:?}", symbol, token.address().clone());

        tokens.push(token.address().clone());
        feeds.push(feed.address().clone());
    }

    (tokens, feeds)
}

fn formatted(address: Address) -> String {
    Key::from(address).to_formatted_string()
}
