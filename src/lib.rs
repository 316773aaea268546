//! # Action Settlement
//!
//! Pay-per-action settlement ledger for the Soroban blockchain.
//!
//! Callers pay a configured price in a SEP-41 token to perform one of a fixed
//! set of actions (like, reply, repost, token analysis, ...). Each payment is
//! split by an owner-controlled percentage:
//!
//! - the burned share is forwarded to a fixed, unrecoverable sink address
//! - the remainder stays in the contract until the owner withdraws it
//!
//! Every settled action emits an `interaction` event carrying the caller,
//! action and payload. Nothing about the interaction itself is stored.
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Owner configures prices and burn share
//! client.set_action_price_all(&10, &20, &30, &40, &50, &100, &owner);
//! client.set_burn_percentage(&25, &owner);
//!
//! // Caller approves the contract on the payment token, then pays
//! token.approve(&user, &contract_id, &40, &expiration_ledger);
//! client.interact(&user, &(ActionKind::Repost as u32), &post_uri);
//!
//! // Owner collects the retained balance
//! client.withdraw_funds(&treasury, &owner);
//! ```

#![no_std]

mod access;
mod action;
mod events;
mod payment;
mod percentage;
mod prices;
mod storage;
mod validation;

pub use access::{NULL_ACCOUNT, NULL_CONTRACT};
pub use action::{ActionKind, ACTION_KIND_COUNT};
pub use payment::BURN_SINK;
pub use percentage::{split, MAX_PERCENTAGE};
pub use prices::{ActionPrices, PriceTuple, Quote};
pub use storage::SettlementKey;
pub use validation::{validate_payload, DEFAULT_MAX_TICKER_LENGTH};

use soroban_sdk::{
    contract, contracterror, contractimpl, log, panic_with_error, Address, BytesN, Env, String,
};

use crate::events::*;
use crate::payment::PaymentToken;

/// Burn percentage applied until the owner configures another one.
pub const DEFAULT_BURN_PERCENTAGE: u32 = 50;

/// Error codes for the settlement contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SettlementError {
    /// Contract state is missing.
    NotInitialized = 1,
    /// Caller is not the owner.
    Unauthorized = 2,
    /// Action ordinal is outside the known set.
    InvalidActionKind = 3,
    /// Burn percentage is above 100.
    InvalidPercentage = 4,
    /// Payload is empty.
    EmptyPayload = 5,
    /// Ticker is longer than the configured maximum.
    InvalidTicker = 6,
    /// A null address was given where a real one is required.
    ZeroAddress = 7,
    /// Payer does not hold enough of the payment token.
    InsufficientBalance = 8,
    /// Payer has not approved enough of the payment token for this contract.
    InsufficientAllowance = 9,
    /// Price is negative.
    InvalidPrice = 10,
    /// Ticker length bound is zero.
    InvalidTickerLength = 11,
}

#[contract]
pub struct SettlementContract;

#[contractimpl]
impl SettlementContract {
    // ========== Construction ==========

    /// Create the contract with its owner and initial payment token.
    ///
    /// Prices start at zero and must be configured before actions are
    /// opened to users, otherwise actions settle for free.
    ///
    /// # Panics
    /// - If `owner` or `payment_token` is a null address
    pub fn __constructor(env: Env, owner: Address, payment_token: Address) {
        if access::is_null_address(&env, &owner) || access::is_null_address(&env, &payment_token) {
            panic_with_error!(&env, SettlementError::ZeroAddress);
        }

        access::write_owner(&env, &owner);
        payment::write_payment_token(&env, &payment_token);

        env.storage()
            .instance()
            .set(&SettlementKey::Prices, &ActionPrices::default());
        env.storage()
            .instance()
            .set(&SettlementKey::BurnPercentage, &DEFAULT_BURN_PERCENTAGE);
        env.storage()
            .instance()
            .set(&SettlementKey::MaxTickerLength, &DEFAULT_MAX_TICKER_LENGTH);

        storage::bump_instance(&env);
    }

    // ========== Ownership ==========

    /// Get the owner address.
    pub fn owner(env: Env) -> Address {
        access::read_owner(&env)
    }

    /// Hand configuration rights to `new_owner` (owner only).
    pub fn transfer_ownership(
        env: Env,
        new_owner: Address,
        caller: Address,
    ) -> Result<(), SettlementError> {
        let old_owner = access::require_owner(&env, &caller)?;
        access::require_non_null(&env, &new_owner)?;

        access::write_owner(&env, &new_owner);
        storage::bump_instance(&env);

        log!(&env, "ownership transferred", old_owner, new_owner);
        emit_ownership_transferred(&env, &old_owner, &new_owner);
        Ok(())
    }

    // ========== Prices ==========

    /// Get the price of one action.
    pub fn action_price(env: Env, action: u32) -> Result<i128, SettlementError> {
        let kind = ActionKind::from_ordinal(action)?;
        Ok(Self::read_prices(&env).get(kind))
    }

    /// Get all prices in ordinal order:
    /// Like, Reply, ReplyToThread, Repost, RepostWithComment, TokenAnalysis.
    pub fn action_price_all(env: Env) -> (i128, i128, i128, i128, i128, i128) {
        Self::read_prices(&env).to_tuple()
    }

    /// Set the price of one action (owner only).
    pub fn set_action_price(
        env: Env,
        action: u32,
        amount: i128,
        caller: Address,
    ) -> Result<(), SettlementError> {
        access::require_owner(&env, &caller)?;
        let kind = ActionKind::from_ordinal(action)?;
        if amount < 0 {
            return Err(SettlementError::InvalidPrice);
        }

        let mut prices = Self::read_prices(&env);
        prices.set(kind, amount);
        env.storage().instance().set(&SettlementKey::Prices, &prices);
        storage::bump_instance(&env);

        log!(&env, "action price set", action, amount);
        emit_price_set(&env, kind, amount);
        Ok(())
    }

    /// Replace every action price at once (owner only).
    ///
    /// Either all six prices change or none do.
    #[allow(clippy::too_many_arguments)]
    pub fn set_action_price_all(
        env: Env,
        like: i128,
        reply: i128,
        reply_to_thread: i128,
        repost: i128,
        repost_with_comment: i128,
        token_analysis: i128,
        caller: Address,
    ) -> Result<(), SettlementError> {
        access::require_owner(&env, &caller)?;

        let prices = ActionPrices::from_tuple((
            like,
            reply,
            reply_to_thread,
            repost,
            repost_with_comment,
            token_analysis,
        ));
        if !prices.all_non_negative() {
            return Err(SettlementError::InvalidPrice);
        }

        env.storage().instance().set(&SettlementKey::Prices, &prices);
        storage::bump_instance(&env);

        log!(&env, "all action prices set");
        emit_prices_set(&env, prices.to_tuple());
        Ok(())
    }

    // ========== Burn Percentage ==========

    /// Get the share of each payment that is burned, in percent.
    pub fn burn_percentage(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&SettlementKey::BurnPercentage)
            .unwrap_or(DEFAULT_BURN_PERCENTAGE)
    }

    /// Set the burn percentage (owner only). Must be in `[0, 100]`.
    pub fn set_burn_percentage(
        env: Env,
        percent: u32,
        caller: Address,
    ) -> Result<(), SettlementError> {
        access::require_owner(&env, &caller)?;
        if !percentage::is_valid_percentage(percent) {
            return Err(SettlementError::InvalidPercentage);
        }

        env.storage()
            .instance()
            .set(&SettlementKey::BurnPercentage, &percent);
        storage::bump_instance(&env);

        log!(&env, "burn percentage set", percent);
        emit_burn_percentage_set(&env, percent);
        Ok(())
    }

    // ========== Payment Token ==========

    /// Get the token accepted for payment.
    pub fn payment_token(env: Env) -> Address {
        payment::read_payment_token(&env)
    }

    /// Switch the payment token (owner only).
    ///
    /// Balances already held in the previous token are not migrated;
    /// withdraw them first.
    pub fn set_payment_token(
        env: Env,
        token: Address,
        caller: Address,
    ) -> Result<(), SettlementError> {
        access::require_owner(&env, &caller)?;
        access::require_non_null(&env, &token)?;

        let old = payment::read_payment_token(&env);
        payment::write_payment_token(&env, &token);
        storage::bump_instance(&env);

        log!(&env, "payment token set", token);
        emit_payment_token_set(&env, &old, &token);
        Ok(())
    }

    /// Get the contract's retained balance of the current payment token.
    pub fn balance(env: Env) -> i128 {
        PaymentToken::current(&env).own_balance()
    }

    /// Get the address burned tokens are sent to.
    pub fn burn_sink(env: Env) -> Address {
        payment::burn_sink(&env)
    }

    // ========== Ticker Validation ==========

    /// Get the longest ticker accepted for `TokenAnalysis`.
    pub fn max_ticker_length(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&SettlementKey::MaxTickerLength)
            .unwrap_or(DEFAULT_MAX_TICKER_LENGTH)
    }

    /// Set the longest ticker accepted for `TokenAnalysis` (owner only).
    pub fn set_max_ticker_length(
        env: Env,
        length: u32,
        caller: Address,
    ) -> Result<(), SettlementError> {
        access::require_owner(&env, &caller)?;
        if !validation::is_valid_ticker_bound(length) {
            return Err(SettlementError::InvalidTickerLength);
        }

        env.storage()
            .instance()
            .set(&SettlementKey::MaxTickerLength, &length);
        storage::bump_instance(&env);

        log!(&env, "max ticker length set", length);
        emit_max_ticker_length_set(&env, length);
        Ok(())
    }

    // ========== Settlement ==========

    /// Preview the split an `interact` call for `action` would perform.
    pub fn quote(env: Env, action: u32) -> Result<Quote, SettlementError> {
        let kind = ActionKind::from_ordinal(action)?;
        Ok(Self::quote_kind(&env, kind))
    }

    /// Pay for and record an action.
    ///
    /// `caller` must have approved this contract for at least the action's
    /// price on the payment token. The full price is pulled into the
    /// contract, then the burned share is forwarded to the burn sink.
    ///
    /// # Arguments
    /// * `caller` - Address paying for the action
    /// * `action` - `ActionKind` ordinal
    /// * `payload` - Post URI, or a ticker symbol for `TokenAnalysis`
    ///
    /// # Errors
    /// - `InvalidActionKind` if `action` is out of range
    /// - `EmptyPayload` / `InvalidTicker` if the payload is rejected
    /// - `InsufficientBalance` / `InsufficientAllowance` if payment cannot be pulled
    pub fn interact(
        env: Env,
        caller: Address,
        action: u32,
        payload: String,
    ) -> Result<(), SettlementError> {
        caller.require_auth();

        let kind = ActionKind::from_ordinal(action)?;
        validation::validate_payload(kind, &payload, Self::max_ticker_length(env.clone()))?;

        let quote = Self::quote_kind(&env, kind);
        let token = PaymentToken::current(&env);

        token.pull(&caller, quote.price)?;
        token.send(&payment::burn_sink(&env), quote.burned)?;
        storage::bump_instance(&env);

        log!(&env, "interaction settled", caller, action, quote.price, quote.burned);
        emit_interaction(&env, &caller, kind, &payload, quote.price, quote.burned);
        Ok(())
    }

    // ========== Funds ==========

    /// Send the contract's whole payment-token balance to `destination`
    /// (owner only).
    ///
    /// # Returns
    /// The amount withdrawn. Zero when there was nothing to move.
    pub fn withdraw_funds(
        env: Env,
        destination: Address,
        caller: Address,
    ) -> Result<i128, SettlementError> {
        access::require_owner(&env, &caller)?;
        access::require_non_null(&env, &destination)?;

        let token = PaymentToken::current(&env);
        let amount = token.own_balance();
        token.send(&destination, amount)?;
        storage::bump_instance(&env);

        log!(&env, "funds withdrawn", destination, amount);
        emit_funds_withdrawn(&env, &destination, amount);
        Ok(amount)
    }

    // ========== Admin Functions ==========

    /// Upgrade the contract WASM (owner only).
    pub fn upgrade(
        env: Env,
        new_wasm_hash: BytesN<32>,
        caller: Address,
    ) -> Result<(), SettlementError> {
        access::require_owner(&env, &caller)?;

        log!(&env, "contract upgraded", new_wasm_hash);
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }

    // ========== Internal Helpers ==========

    fn read_prices(env: &Env) -> ActionPrices {
        env.storage()
            .instance()
            .get(&SettlementKey::Prices)
            .unwrap_or_default()
    }

    fn quote_kind(env: &Env, kind: ActionKind) -> Quote {
        let price = Self::read_prices(env).get(kind);
        let (retained, burned) = percentage::split(price, Self::burn_percentage(env.clone()));
        Quote {
            price,
            retained,
            burned,
        }
    }
}
