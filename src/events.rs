//! Event emission helpers for the settlement contract.

use soroban_sdk::{Address, Env, String, Symbol};

use crate::action::ActionKind;
use crate::prices::PriceTuple;

/// Emit the interaction record for a settled action.
///
/// Topics: `("interaction", caller)`.
/// Data: `(action ordinal, payload, price, burned)`.
pub fn emit_interaction(
    env: &Env,
    caller: &Address,
    kind: ActionKind,
    payload: &String,
    price: i128,
    burned: i128,
) {
    let topics = (Symbol::new(env, "interaction"), caller.clone());
    env.events()
        .publish(topics, (kind.ordinal(), payload.clone(), price, burned));
}

/// Emit an event when a single action price changes.
pub fn emit_price_set(env: &Env, kind: ActionKind, amount: i128) {
    let topics = (Symbol::new(env, "price_set"),);
    env.events().publish(topics, (kind.ordinal(), amount));
}

/// Emit an event when all action prices are replaced.
pub fn emit_prices_set(env: &Env, prices: PriceTuple) {
    let topics = (Symbol::new(env, "prices_set"),);
    env.events().publish(topics, prices);
}

pub fn emit_burn_percentage_set(env: &Env, percent: u32) {
    let topics = (Symbol::new(env, "burn_pct_set"),);
    env.events().publish(topics, percent);
}

pub fn emit_payment_token_set(env: &Env, old: &Address, new: &Address) {
    let topics = (Symbol::new(env, "token_set"),);
    env.events().publish(topics, (old.clone(), new.clone()));
}

pub fn emit_funds_withdrawn(env: &Env, destination: &Address, amount: i128) {
    let topics = (Symbol::new(env, "withdrawn"),);
    env.events().publish(topics, (destination.clone(), amount));
}

/// Emit an event when ownership moves to a new address.
pub fn emit_ownership_transferred(env: &Env, old: &Address, new: &Address) {
    let topics = (Symbol::new(env, "owner_set"),);
    env.events().publish(topics, (old.clone(), new.clone()));
}

pub fn emit_max_ticker_length_set(env: &Env, length: u32) {
    let topics = (Symbol::new(env, "ticker_len_set"),);
    env.events().publish(topics, length);
}
