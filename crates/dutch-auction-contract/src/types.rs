/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

use soroban_kit::{key_constraint, soroban_tools, storage};
use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
#[key_constraint(DataKeyConstraint)]
pub enum DataKey {
    Config,
    State,
    Asset,
}

// How the offered amount is collected from the bidder.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PaymentMode {
    // Bidder pays with the bid itself (native currency style).
    Direct,
    // Contract pulls the bid through a prior allowance or an attached permit.
    Allowance,
}

// When funds and asset are released to the parties.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SettlementMode {
    Instant,
    Deferred,
}

// Rejection reason for bids placed after the duration elapsed.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LateBidPolicy {
    Closed,
    DurationElapsed,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionSettings {
    pub seller: Address,
    pub market: Address,
    pub reserve_price: i128,
    pub price_decrement: i128,
    pub num_units_open: u32,
    pub payment: PaymentMode,
    pub settlement: SettlementMode,
    pub late_bid_policy: LateBidPolicy,
}

/// Immutable auction parameters, written once by `initialize`.
#[contracttype]
#[storage(Instance, DataKeyConstraint)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionConfig {
    pub settings: AuctionSettings,
    pub starting_price: i128,
    pub start_time: u32,
}

impl AuctionConfig {
    pub fn new(settings: AuctionSettings, starting_price: i128, start_time: u32) -> Self {
        AuctionConfig {
            settings,
            starting_price,
            start_time,
        }
    }

    /// Last ledger at which a bid is still accepted.
    pub fn end_time(&self) -> u32 {
        self.start_time.saturating_add(self.settings.num_units_open)
    }

    pub fn has_elapsed(&self, now: u32) -> bool {
        now > self.end_time()
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WinningBid {
    pub bidder: Address,
    pub amount: i128,
}

/// Auction lifecycle. Transitions only move forward:
/// `Open -> Won -> Closed` or `Open -> Expired` when no bid qualified.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AuctionState {
    Open,
    Won(WinningBid),
    Closed(WinningBid),
    Expired,
}

impl AuctionState {
    pub fn winning_bid(&self) -> Option<&WinningBid> {
        match self {
            AuctionState::Open | AuctionState::Expired => None,
            AuctionState::Won(bid) | AuctionState::Closed(bid) => Some(bid),
        }
    }
}

/// Non-fungible asset held in custody for the duration of the auction.
#[contracttype]
#[storage(Instance, DataKeyConstraint)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetRef {
    pub contract: Address,
    pub token_id: u64,
}

/// Approval supplied alongside a bid instead of a separate `approve` call.
/// Signature and expiration are checked by the market token contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Permit {
    pub amount: i128,
    pub expiration_ledger: u32,
}

pub(crate) fn load_config(env: &Env) -> Option<AuctionConfig> {
    storage::get::<DataKey, AuctionConfig>(env, &DataKey::Config)
}

// The state is a tagged enum, kept in instance storage directly.
pub(crate) fn load_state(env: &Env) -> Option<AuctionState> {
    env.storage()
        .instance()
        .get::<DataKey, AuctionState>(&DataKey::State)
}

pub(crate) fn save_state(env: &Env, state: &AuctionState) {
    env.storage()
        .instance()
        .set::<DataKey, AuctionState>(&DataKey::State, state);
}

pub(crate) fn load_asset(env: &Env) -> Option<AssetRef> {
    storage::get::<DataKey, AssetRef>(env, &DataKey::Asset)
}
