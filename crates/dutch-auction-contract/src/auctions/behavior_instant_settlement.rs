/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

use soroban_sdk::{Address, Env};

use crate::errors::AuctionError;
use crate::types::{AuctionConfig, AuctionState, WinningBid};

pub struct InstantSettlementAuction;

// InstantSettlementAuction (the winning bid pays out immediately).
impl super::behavior::BaseAuction for InstantSettlementAuction {
    fn settle_on_bid(&self, env: &Env, config: &AuctionConfig, bid: &WinningBid) {
        super::behavior::settle(env, config, bid);
    }

    fn settle_on_close(&self, _env: &Env, _config: &AuctionConfig, _bid: &WinningBid) {
        // Already settled when the bid was placed.
    }

    fn winner(&self, state: &AuctionState) -> Result<Option<Address>, AuctionError> {
        match state {
            AuctionState::Open => Err(AuctionError::AuctionNotClosed),
            _ => Ok(state.winning_bid().map(|bid| bid.bidder.clone())),
        }
    }
}
