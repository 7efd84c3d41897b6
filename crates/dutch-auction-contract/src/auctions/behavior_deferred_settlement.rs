/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

use soroban_sdk::{Address, Env};

use crate::errors::AuctionError;
use crate::types::{AuctionConfig, AuctionState, WinningBid};

pub struct DeferredSettlementAuction;

// DeferredSettlementAuction (funds and asset stay in custody until `end_auction`).
impl super::behavior::BaseAuction for DeferredSettlementAuction {
    fn settle_on_bid(&self, _env: &Env, _config: &AuctionConfig, _bid: &WinningBid) {}

    fn settle_on_close(&self, env: &Env, config: &AuctionConfig, bid: &WinningBid) {
        super::behavior::settle(env, config, bid);
    }

    fn winner(&self, state: &AuctionState) -> Result<Option<Address>, AuctionError> {
        match state {
            AuctionState::Closed(bid) => Ok(Some(bid.bidder.clone())),
            AuctionState::Expired => Ok(None),
            AuctionState::Open | AuctionState::Won(_) => Err(AuctionError::AuctionNotClosed),
        }
    }
}
