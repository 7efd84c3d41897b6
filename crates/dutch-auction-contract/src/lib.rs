/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

//! Dutch auction contract: one instance sells one asset (or nothing but the
//! right to pay, for a basic auction) to the first bidder meeting a price
//! that decreases linearly every ledger down to the reserve price.

#![no_std]

mod asset; // Asset contract interface.
mod auctions; // Auction behaviors and mechanisms.
mod errors; // Contract errors.
mod types; // Contract types.

pub use asset::{AssetClient, AssetInterface};
pub use errors::AuctionError;
pub use types::{
    AssetRef, AuctionConfig, AuctionSettings, AuctionState, LateBidPolicy, PaymentMode, Permit,
    SettlementMode, WinningBid,
};

use soroban_kit::storage;
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, symbol_short, vec, Address, BytesN, Env, Vec,
};

use crate::auctions::{
    behavior::{extend_instance_ttl, BaseAuction, Dispatcher, AUCTION},
    pricing,
};
use types::{load_asset, load_config, load_state, save_state, DataKey};

contractmeta!(
    key = "desc",
    val = "Dutch auction smart contract with linear price decay"
);

pub trait DutchAuctionTrait {
    // Configure the auction and open it at the current ledger.
    // Seller authorization required.
    fn initialize(env: Env, settings: AuctionSettings) -> Result<(), AuctionError>;

    // Bind the auctioned asset and move it into the contract's custody.
    // Allowed once, while the auction is open.
    // Seller authorization required.
    fn set_asset(env: Env, asset: Address, token_id: u64) -> Result<(), AuctionError>;

    // Place a bid. The first bid meeting the current price wins, and only the
    // current price is charged (any excess is refunded).
    // - `permit` establishes the allowance before collection (allowance payment only).
    // Bidder authorization required.
    fn bid(
        env: Env,
        bidder: Address,
        amount: i128,
        permit: Option<Permit>,
    ) -> Result<i128, AuctionError>;

    // Close the auction once won or once its duration has elapsed.
    // No authorization required.
    fn end_auction(env: Env) -> Result<(), AuctionError>;

    // Current asking price.
    fn current_price(env: Env) -> Result<i128, AuctionError>;

    // Winner of the auction, `None` if it closed without one.
    // Instant settlement exposes the winner as soon as the auction is won,
    // deferred settlement only after `end_auction`.
    fn get_winner(env: Env) -> Result<Option<Address>, AuctionError>;

    fn get_seller(env: Env) -> Result<Address, AuctionError>;

    fn get_config(env: Env) -> Result<AuctionConfig, AuctionError>;

    fn get_state(env: Env) -> Result<AuctionState, AuctionError>;

    fn get_asset(env: Env) -> Option<AssetRef>;

    // Upgrade this contract.
    // Seller authorization required.
    fn upgrade(env: Env, wasm_hash: BytesN<32>) -> Result<(), AuctionError>;

    // Retrieve the contract version.
    fn version(env: Env) -> Vec<u32>;
}

#[contract]
pub struct DutchAuctionContract;

#[contractimpl]
impl DutchAuctionTrait for DutchAuctionContract {
    fn initialize(env: Env, settings: AuctionSettings) -> Result<(), AuctionError> {
        if storage::has::<DataKey, AuctionConfig>(&env, &DataKey::Config) {
            return Err(AuctionError::AlreadyInitialized);
        }

        settings.seller.require_auth();

        let starting_price = pricing::starting_price(
            settings.reserve_price,
            settings.price_decrement,
            settings.num_units_open,
        )
        .ok_or(AuctionError::ConfigInvalid)?;

        let config = AuctionConfig::new(settings, starting_price, env.ledger().sequence());
        storage::set::<DataKey, AuctionConfig>(&env, &DataKey::Config, &config);
        save_state(&env, &AuctionState::Open);
        extend_instance_ttl(&env, &config);

        log!(&env, "auction started at {}", starting_price);
        env.events().publish(
            (AUCTION, symbol_short!("started")),
            (config.settings.seller, starting_price),
        );
        Ok(())
    }

    fn set_asset(env: Env, asset: Address, token_id: u64) -> Result<(), AuctionError> {
        let config = load_config(&env).ok_or(AuctionError::NotInitialized)?;
        config.settings.seller.require_auth();

        if load_asset(&env).is_some() {
            return Err(AuctionError::AssetAlreadySet);
        }

        let state = load_state(&env).ok_or(AuctionError::NotInitialized)?;
        if state != AuctionState::Open || config.has_elapsed(env.ledger().sequence()) {
            return Err(AuctionError::AuctionClosed);
        }

        let asset_ref = AssetRef {
            contract: asset,
            token_id,
        };
        storage::set::<DataKey, AssetRef>(&env, &DataKey::Asset, &asset_ref);
        AssetClient::new(&env, &asset_ref.contract).transfer(
            &config.settings.seller,
            &env.current_contract_address(),
            &token_id,
        );

        env.events().publish(
            (AUCTION, symbol_short!("asset")),
            (asset_ref.contract, token_id),
        );
        Ok(())
    }

    fn bid(
        env: Env,
        bidder: Address,
        amount: i128,
        permit: Option<Permit>,
    ) -> Result<i128, AuctionError> {
        bidder.require_auth();

        let config = load_config(&env).ok_or(AuctionError::NotInitialized)?;
        dispatcher!(config.settings.settlement).place_bid(&env, &bidder, amount, &permit)
    }

    fn end_auction(env: Env) -> Result<(), AuctionError> {
        let config = load_config(&env).ok_or(AuctionError::NotInitialized)?;
        dispatcher!(config.settings.settlement).end_auction(&env)
    }

    fn current_price(env: Env) -> Result<i128, AuctionError> {
        let config = load_config(&env).ok_or(AuctionError::NotInitialized)?;
        Ok(pricing::price_at(&config, env.ledger().sequence()))
    }

    fn get_winner(env: Env) -> Result<Option<Address>, AuctionError> {
        let config = load_config(&env).ok_or(AuctionError::NotInitialized)?;
        let state = load_state(&env).ok_or(AuctionError::NotInitialized)?;
        dispatcher!(config.settings.settlement).winner(&state)
    }

    fn get_seller(env: Env) -> Result<Address, AuctionError> {
        load_config(&env)
            .map(|config| config.settings.seller)
            .ok_or(AuctionError::NotInitialized)
    }

    fn get_config(env: Env) -> Result<AuctionConfig, AuctionError> {
        load_config(&env).ok_or(AuctionError::NotInitialized)
    }

    fn get_state(env: Env) -> Result<AuctionState, AuctionError> {
        load_state(&env).ok_or(AuctionError::NotInitialized)
    }

    fn get_asset(env: Env) -> Option<AssetRef> {
        load_asset(&env)
    }

    fn upgrade(env: Env, wasm_hash: BytesN<32>) -> Result<(), AuctionError> {
        load_config(&env)
            .ok_or(AuctionError::NotInitialized)?
            .settings
            .seller
            .require_auth();
        env.deployer().update_current_contract_wasm(wasm_hash);
        Ok(())
    }

    fn version(env: Env) -> Vec<u32> {
        vec![&env, 0, 1, 0] // "0.1.0"
    }
}
