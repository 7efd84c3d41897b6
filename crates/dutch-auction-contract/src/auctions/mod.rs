/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

//! The `auctions` module implements a descending price (Dutch) auction using trait-based
//! polymorphism and enum-based dispatch (strategy design pattern) over the settlement step.
//!
//! Implemented features:
//!
//! - Linear price decay per ledger from a starting price down to the reserve price
//!   (see: pricing.rs).
//! - First bid meeting the current price wins; the excess is refunded.
//! - Instant settlement (see: behavior_instant_settlement.rs), paying the seller and
//!   releasing the asset within the winning bid.
//! - Deferred settlement (see: behavior_deferred_settlement.rs), holding funds and asset
//!   in custody until `end_auction`.
//! - Direct or allowance-based payment, with an optional permit.

pub mod behavior;
pub mod behavior_deferred_settlement;
pub mod behavior_instant_settlement;
pub mod pricing;
