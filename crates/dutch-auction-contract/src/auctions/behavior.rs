/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

use soroban_sdk::{log, symbol_short, token, Address, Env, Symbol};

use super::behavior_deferred_settlement::*;
use super::behavior_instant_settlement::*;
use super::pricing;
use crate::asset::AssetClient;
use crate::errors::AuctionError;
use crate::types::{
    load_asset, load_config, load_state, save_state, AuctionConfig, AuctionSettings, AuctionState,
    LateBidPolicy, PaymentMode, Permit, WinningBid,
};

// Event topics.
pub const AUCTION: Symbol = symbol_short!("AUCTION");

pub mod ledger_times {
    // Assuming 6 seconds average time per ledger.
    pub const LEDGERS_PER_MINUTE: u32 = 10;
    pub const LEDGERS_PER_HOUR: u32 = LEDGERS_PER_MINUTE * 60;
    pub const LEDGERS_PER_DAY: u32 = LEDGERS_PER_HOUR * 24;
    // Longest auction accepted, so that the instance TTL stays
    // below the network maximum entry TTL.
    pub const MAX_UNITS_OPEN: u32 = LEDGERS_PER_DAY * 180;
}

pub trait BaseAuction {
    fn place_bid(
        &self,
        env: &Env,
        bidder: &Address,
        amount: i128,
        permit: &Option<Permit>,
    ) -> Result<i128, AuctionError> {
        let config = load_config(env).ok_or(AuctionError::NotInitialized)?;
        let state = load_state(env).ok_or(AuctionError::NotInitialized)?;
        let settings = &config.settings;

        if *bidder == settings.seller {
            return Err(AuctionError::SellerNotAllowed);
        }

        match state {
            AuctionState::Open => {}
            AuctionState::Won(_) => return Err(AuctionError::AlreadyWon),
            AuctionState::Closed(_) | AuctionState::Expired => {
                return Err(AuctionError::AuctionClosed)
            }
        }

        let now = env.ledger().sequence();
        if config.has_elapsed(now) {
            return Err(match settings.late_bid_policy {
                LateBidPolicy::Closed => AuctionError::AuctionClosed,
                LateBidPolicy::DurationElapsed => AuctionError::DurationElapsed,
            });
        }

        let price = pricing::price_at(&config, now);
        if amount < price {
            return Err(AuctionError::InsufficientBid);
        }

        if permit.is_some() && settings.payment == PaymentMode::Direct {
            return Err(AuctionError::PermitNotSupported);
        }

        // Commit the winner before any cross-contract call.
        let bid = WinningBid {
            bidder: bidder.clone(),
            amount: price,
        };
        save_state(env, &AuctionState::Won(bid.clone()));
        extend_instance_ttl(env, &config);

        // Collect the full offer then refund what exceeds the current price.
        collect_bid(env, settings, bidder, amount, permit);
        if amount > price {
            token::Client::new(env, &settings.market).transfer(
                &env.current_contract_address(),
                bidder,
                &(amount - price),
            );
        }
        self.settle_on_bid(env, &config, &bid);

        log!(env, "auction won by {} at {}", bidder.clone(), price);
        env.events()
            .publish((AUCTION, symbol_short!("won")), (bidder.clone(), price));
        Ok(price)
    }

    fn end_auction(&self, env: &Env) -> Result<(), AuctionError> {
        let config = load_config(env).ok_or(AuctionError::NotInitialized)?;
        let state = load_state(env).ok_or(AuctionError::NotInitialized)?;

        match state {
            AuctionState::Closed(_) | AuctionState::Expired => Err(AuctionError::AlreadyClosed),
            AuctionState::Open => {
                if !config.has_elapsed(env.ledger().sequence()) {
                    return Err(AuctionError::AuctionStillOpen);
                }

                // Expired without a qualifying bid, the asset goes back to the seller.
                save_state(env, &AuctionState::Expired);
                release_asset(env, &config.settings.seller);

                log!(env, "auction ended without winner");
                env.events()
                    .publish((AUCTION, symbol_short!("ended")), config.settings.seller);
                Ok(())
            }
            AuctionState::Won(bid) => {
                save_state(env, &AuctionState::Closed(bid.clone()));
                self.settle_on_close(env, &config, &bid);

                log!(env, "auction closed for {}", bid.bidder.clone());
                env.events().publish(
                    (AUCTION, symbol_short!("closed")),
                    (bid.bidder, bid.amount),
                );
                Ok(())
            }
        }
    }

    // Transfers due once the winning bid has been collected.
    fn settle_on_bid(&self, env: &Env, config: &AuctionConfig, bid: &WinningBid);

    // Transfers due when a won auction is closed.
    fn settle_on_close(&self, env: &Env, config: &AuctionConfig, bid: &WinningBid);

    fn winner(&self, state: &AuctionState) -> Result<Option<Address>, AuctionError>;
}

// Pays the seller out of the escrowed bid and hands the asset to the winner.
pub fn settle(env: &Env, config: &AuctionConfig, bid: &WinningBid) {
    token::Client::new(env, &config.settings.market).transfer(
        &env.current_contract_address(),
        &config.settings.seller,
        &bid.amount,
    );
    release_asset(env, &bid.bidder);
}

pub fn collect_bid(
    env: &Env,
    settings: &AuctionSettings,
    bidder: &Address,
    amount: i128,
    permit: &Option<Permit>,
) {
    let market = token::Client::new(env, &settings.market);
    let contract = env.current_contract_address();
    match settings.payment {
        PaymentMode::Direct => market.transfer(bidder, &contract, &amount),
        PaymentMode::Allowance => {
            if let Some(permit) = permit {
                market.approve(bidder, &contract, &permit.amount, &permit.expiration_ledger);
            }
            market.transfer_from(&contract, bidder, &contract, &amount);
        }
    }
}

pub fn release_asset(env: &Env, to: &Address) {
    if let Some(asset) = load_asset(env) {
        AssetClient::new(env, &asset.contract).transfer(
            &env.current_contract_address(),
            to,
            &asset.token_id,
        );
    }
}

// Keep the instance alive for the rest of the auction,
// adding a day to leave room for a deferred settlement.
pub fn extend_instance_ttl(env: &Env, config: &AuctionConfig) {
    let remaining = config.end_time().saturating_sub(env.ledger().sequence());
    let ttl = remaining.saturating_add(ledger_times::LEDGERS_PER_DAY);
    env.storage().instance().extend_ttl(ttl, ttl);
}

// Using enum/match since no_std prevents the use of dynamic dispatch.
pub enum Dispatcher {
    InstantSettlementAuction,
    DeferredSettlementAuction,
}

impl BaseAuction for Dispatcher {
    fn settle_on_bid(&self, env: &Env, config: &AuctionConfig, bid: &WinningBid) {
        match self {
            Dispatcher::InstantSettlementAuction => {
                InstantSettlementAuction.settle_on_bid(env, config, bid)
            }
            Dispatcher::DeferredSettlementAuction => {
                DeferredSettlementAuction.settle_on_bid(env, config, bid)
            }
        }
    }

    fn settle_on_close(&self, env: &Env, config: &AuctionConfig, bid: &WinningBid) {
        match self {
            Dispatcher::InstantSettlementAuction => {
                InstantSettlementAuction.settle_on_close(env, config, bid)
            }
            Dispatcher::DeferredSettlementAuction => {
                DeferredSettlementAuction.settle_on_close(env, config, bid)
            }
        }
    }

    fn winner(&self, state: &AuctionState) -> Result<Option<Address>, AuctionError> {
        match self {
            Dispatcher::InstantSettlementAuction => InstantSettlementAuction.winner(state),
            Dispatcher::DeferredSettlementAuction => DeferredSettlementAuction.winner(state),
        }
    }
}

#[macro_export]
macro_rules! dispatcher {
    ($settlement:expr) => {
        match $settlement {
            SettlementMode::Instant => Dispatcher::InstantSettlementAuction,
            SettlementMode::Deferred => Dispatcher::DeferredSettlementAuction,
        }
    };
}
