//! Single-owner access control.

use soroban_sdk::{panic_with_error, Address, Env, String};

use crate::storage::SettlementKey;
use crate::SettlementError;

/// All-zero ed25519 account key.
pub const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// All-zero contract id.
pub const NULL_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

/// Whether `address` is one of the null identities.
pub fn is_null_address(env: &Env, address: &Address) -> bool {
    [NULL_ACCOUNT, NULL_CONTRACT]
        .iter()
        .any(|strkey| *address == Address::from_string(&String::from_str(env, strkey)))
}

/// Fail with `ZeroAddress` if `address` is a null identity.
pub fn require_non_null(env: &Env, address: &Address) -> Result<(), SettlementError> {
    if is_null_address(env, address) {
        return Err(SettlementError::ZeroAddress);
    }
    Ok(())
}

pub fn read_owner(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&SettlementKey::Owner)
        .unwrap_or_else(|| panic_with_error!(env, SettlementError::NotInitialized))
}

pub fn write_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&SettlementKey::Owner, owner);
}

/// Check that `caller` is the current owner and has signed the invocation.
///
/// Returns the owner so callers that emit events don't have to read it again.
pub fn require_owner(env: &Env, caller: &Address) -> Result<Address, SettlementError> {
    let owner = read_owner(env);

    if *caller != owner {
        return Err(SettlementError::Unauthorized);
    }

    caller.require_auth();
    Ok(owner)
}
