/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AuctionError {
    // Administration.
    NotInitialized = 1,
    AlreadyInitialized = 2,
    ConfigInvalid = 3,
    AssetAlreadySet = 4,

    // Bidding.
    SellerNotAllowed = 10,
    AuctionClosed = 11,
    DurationElapsed = 12,
    InsufficientBid = 13,
    AlreadyWon = 14,
    PermitNotSupported = 15,

    // Settlement.
    AuctionNotClosed = 20,
    AuctionStillOpen = 21,
    AlreadyClosed = 22,
}
