//! Storage key definitions for the settlement contract.

use soroban_sdk::{contracttype, Env};

/// Storage keys for the settlement contract.
///
/// All entries live in instance storage and share the contract's lifetime.
#[contracttype]
#[derive(Clone, Debug)]
pub enum SettlementKey {
    /// Address allowed to change configuration.
    Owner,

    /// `ActionPrices` table.
    Prices,

    /// Burn percentage in `[0, 100]`.
    BurnPercentage,

    /// Token contract accepted for payment.
    PaymentToken,

    /// Longest ticker accepted for `TokenAnalysis`.
    MaxTickerLength,
}

/// Time-to-live for the contract instance in ledger entries.
pub const INSTANCE_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const INSTANCE_TTL_EXTEND: u32 = 2592000; // ~150 days

/// Keep the instance (and with it all configuration) alive.
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}
