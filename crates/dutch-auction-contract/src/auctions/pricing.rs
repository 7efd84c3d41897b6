/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

use super::behavior::ledger_times::MAX_UNITS_OPEN;
use crate::types::AuctionConfig;

/// Price at which the auction opens, so that linear decay lands exactly on
/// the reserve when the duration elapses.
/// Returns `None` for negative inputs, a duration outside `1..=MAX_UNITS_OPEN`,
/// overflow, or a zero starting price.
pub fn starting_price(reserve_price: i128, price_decrement: i128, num_units_open: u32) -> Option<i128> {
    if reserve_price < 0 || price_decrement < 0 {
        return None;
    }
    if num_units_open == 0 || num_units_open > MAX_UNITS_OPEN {
        return None;
    }
    price_decrement
        .checked_mul(num_units_open as i128)
        .and_then(|drop| drop.checked_add(reserve_price))
        .filter(|price| *price > 0)
}

/// Linear descending price at ledger `now`, never below the reserve.
pub fn price_at(config: &AuctionConfig, now: u32) -> i128 {
    let elapsed = now
        .saturating_sub(config.start_time)
        .min(config.settings.num_units_open);

    // Cannot overflow, bounded by `starting_price` checks at initialization.
    (config.starting_price - config.settings.price_decrement * elapsed as i128)
        .max(config.settings.reserve_price)
}
