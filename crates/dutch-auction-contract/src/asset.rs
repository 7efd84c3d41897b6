/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

use soroban_sdk::{contractclient, Address, Env};

// Minimal non-fungible interface the auction needs from the asset contract.
#[contractclient(name = "AssetClient")]
pub trait AssetInterface {
    fn transfer(env: Env, from: Address, to: Address, token_id: u64);

    fn owner_of(env: Env, token_id: u64) -> Address;
}
