//! Binding to the external payment token and the burn sink.
//!
//! The engine only relies on the SEP-41 token interface (`balance`,
//! `allowance`, `transfer`, `transfer_from`), so any compliant token
//! contract can be swapped in by the owner.

use soroban_sdk::{panic_with_error, token::TokenClient, Address, Env, String};

use crate::storage::SettlementKey;
use crate::SettlementError;

/// Contract id `0x00..00dead`. No code is deployed there, so nothing can
/// ever move tokens back out.
pub const BURN_SINK: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAADPK3JYO";

pub fn burn_sink(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, BURN_SINK))
}

pub fn read_payment_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&SettlementKey::PaymentToken)
        .unwrap_or_else(|| panic_with_error!(env, SettlementError::NotInitialized))
}

pub fn write_payment_token(env: &Env, token: &Address) {
    env.storage()
        .instance()
        .set(&SettlementKey::PaymentToken, token);
}

/// Token operations performed on behalf of this contract.
pub struct PaymentToken<'a> {
    env: &'a Env,
    client: TokenClient<'a>,
}

impl<'a> PaymentToken<'a> {
    /// Bind to the currently configured payment token.
    pub fn current(env: &'a Env) -> Self {
        let address = read_payment_token(env);
        Self {
            env,
            client: TokenClient::new(env, &address),
        }
    }

    /// Balance held by this contract.
    pub fn own_balance(&self) -> i128 {
        self.client.balance(&self.env.current_contract_address())
    }

    /// Move `amount` from `from` into this contract using its allowance.
    ///
    /// Balance is checked before allowance so an empty account reports
    /// `InsufficientBalance` even when it also has no allowance left.
    pub fn pull(&self, from: &Address, amount: i128) -> Result<(), SettlementError> {
        if amount == 0 {
            return Ok(());
        }

        let this = self.env.current_contract_address();

        if self.client.balance(from) < amount {
            return Err(SettlementError::InsufficientBalance);
        }
        if self.client.allowance(from, &this) < amount {
            return Err(SettlementError::InsufficientAllowance);
        }

        self.client.transfer_from(&this, from, &this, &amount);
        Ok(())
    }

    /// Send `amount` of this contract's own balance to `to`.
    pub fn send(&self, to: &Address, amount: i128) -> Result<(), SettlementError> {
        if amount == 0 {
            return Ok(());
        }

        let this = self.env.current_contract_address();

        if self.client.balance(&this) < amount {
            return Err(SettlementError::InsufficientBalance);
        }

        self.client.transfer(&this, to, &amount);
        Ok(())
    }
}
