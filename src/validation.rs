//! Payload validation for paid actions.
//!
//! Every action carries a non-empty payload:
//! - `TokenAnalysis`: a ticker symbol, at most `max_ticker_length` UTF-8 bytes
//! - every other kind: an opaque post URI or reference
//!
//! Examples: `https://x.com/SpaceX/status/1928107204931940365`, `GIANTAI`

use soroban_sdk::String;

use crate::action::ActionKind;
use crate::SettlementError;

/// Ticker length bound used until the owner configures another one.
///
/// Lengths are measured in UTF-8 bytes, so a non-ASCII ticker uses up the
/// bound faster than its character count suggests.
pub const DEFAULT_MAX_TICKER_LENGTH: u32 = 10;

/// Validate `payload` for an action of `kind`.
///
/// # Errors
/// - `EmptyPayload` if the payload is empty, for any kind
/// - `InvalidTicker` if a `TokenAnalysis` ticker exceeds `max_ticker_length`
pub fn validate_payload(
    kind: ActionKind,
    payload: &String,
    max_ticker_length: u32,
) -> Result<(), SettlementError> {
    let len = payload.len();

    if len == 0 {
        return Err(SettlementError::EmptyPayload);
    }

    if kind.takes_ticker() && len > max_ticker_length {
        return Err(SettlementError::InvalidTicker);
    }

    Ok(())
}

/// A ticker bound of zero would reject every `TokenAnalysis` request.
#[inline]
pub fn is_valid_ticker_bound(max_ticker_length: u32) -> bool {
    max_ticker_length > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    const POST_URI: &str = "https://x.com/SpaceX/status/1928107204931940365";

    #[test]
    fn test_valid_payloads() {
        let env = Env::default();
        let max = DEFAULT_MAX_TICKER_LENGTH;

        assert_eq!(
            validate_payload(ActionKind::TokenAnalysis, &String::from_str(&env, "GIANTAI"), max),
            Ok(())
        );
        assert_eq!(
            validate_payload(ActionKind::TokenAnalysis, &String::from_str(&env, "ABCDEFGHIJ"), max),
            Ok(())
        ); // exactly at the bound

        for kind in ActionKind::ALL {
            if kind.takes_ticker() {
                continue;
            }
            assert_eq!(
                validate_payload(kind, &String::from_str(&env, POST_URI), max),
                Ok(())
            );
        }
    }

    #[test]
    fn test_empty_payload_rejected() {
        let env = Env::default();
        let empty = String::from_str(&env, "");

        for kind in ActionKind::ALL {
            assert_eq!(
                validate_payload(kind, &empty, DEFAULT_MAX_TICKER_LENGTH),
                Err(SettlementError::EmptyPayload)
            );
        }
    }

    #[test]
    fn test_long_ticker_rejected() {
        let env = Env::default();

        assert_eq!(
            validate_payload(
                ActionKind::TokenAnalysis,
                &String::from_str(&env, "SUPER_LONG_AND_INVALID_TICKER_NAME"),
                DEFAULT_MAX_TICKER_LENGTH,
            ),
            Err(SettlementError::InvalidTicker)
        );
        assert_eq!(
            validate_payload(
                ActionKind::TokenAnalysis,
                &String::from_str(&env, "ABCDEFGHIJK"),
                DEFAULT_MAX_TICKER_LENGTH,
            ),
            Err(SettlementError::InvalidTicker)
        ); // one past the bound

        // Same length is fine as a URI.
        assert_eq!(
            validate_payload(
                ActionKind::Reply,
                &String::from_str(&env, "SUPER_LONG_AND_INVALID_TICKER_NAME"),
                DEFAULT_MAX_TICKER_LENGTH,
            ),
            Ok(())
        );
    }

    #[test]
    fn test_ticker_bound_counts_bytes() {
        let env = Env::default();
        // Six characters, twelve bytes.
        let ticker = String::from_str(&env, "ÅÅÅÅÅÅ");

        assert_eq!(ticker.len(), 12);
        assert_eq!(
            validate_payload(ActionKind::TokenAnalysis, &ticker, DEFAULT_MAX_TICKER_LENGTH),
            Err(SettlementError::InvalidTicker)
        );
        assert_eq!(validate_payload(ActionKind::TokenAnalysis, &ticker, 12), Ok(()));
    }

    #[test]
    fn test_configured_bound_applies() {
        let env = Env::default();
        let ticker = String::from_str(&env, "GIANTAI");

        assert_eq!(
            validate_payload(ActionKind::TokenAnalysis, &ticker, 3),
            Err(SettlementError::InvalidTicker)
        );
        assert_eq!(validate_payload(ActionKind::TokenAnalysis, &ticker, 7), Ok(()));
        assert!(!is_valid_ticker_bound(0));
        assert!(is_valid_ticker_bound(1));
    }
}
