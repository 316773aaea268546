//! Action kinds a caller can pay for.

use soroban_sdk::contracttype;

use crate::SettlementError;

/// Number of defined action kinds.
pub const ACTION_KIND_COUNT: u32 = 6;

/// Paid actions, keyed by a stable ordinal.
///
/// Ordinals are part of the public interface. New kinds must be appended.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ActionKind {
    Like = 0,
    Reply = 1,
    ReplyToThread = 2,
    Repost = 3,
    RepostWithComment = 4,
    /// Payload is a ticker symbol rather than a post URI.
    TokenAnalysis = 5,
}

impl ActionKind {
    /// All kinds in ordinal order.
    pub const ALL: [ActionKind; ACTION_KIND_COUNT as usize] = [
        ActionKind::Like,
        ActionKind::Reply,
        ActionKind::ReplyToThread,
        ActionKind::Repost,
        ActionKind::RepostWithComment,
        ActionKind::TokenAnalysis,
    ];

    /// Convert a raw ordinal received at the contract boundary.
    pub fn from_ordinal(ordinal: u32) -> Result<Self, SettlementError> {
        Self::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or(SettlementError::InvalidActionKind)
    }

    pub fn ordinal(self) -> u32 {
        self as u32
    }

    /// Whether the payload for this kind is a ticker symbol.
    pub fn takes_ticker(self) -> bool {
        matches!(self, ActionKind::TokenAnalysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_are_stable() {
        for (i, kind) in ActionKind::ALL.iter().enumerate() {
            assert_eq!(kind.ordinal(), i as u32);
            assert_eq!(ActionKind::from_ordinal(i as u32), Ok(*kind));
        }
        assert_eq!(ActionKind::TokenAnalysis.ordinal(), 5);
    }

    #[test]
    fn test_out_of_range_ordinal() {
        assert_eq!(
            ActionKind::from_ordinal(ACTION_KIND_COUNT),
            Err(SettlementError::InvalidActionKind)
        );
        assert_eq!(
            ActionKind::from_ordinal(100),
            Err(SettlementError::InvalidActionKind)
        );
        assert_eq!(
            ActionKind::from_ordinal(u32::MAX),
            Err(SettlementError::InvalidActionKind)
        );
    }

    #[test]
    fn test_only_token_analysis_takes_ticker() {
        for kind in ActionKind::ALL {
            assert_eq!(kind.takes_ticker(), kind == ActionKind::TokenAnalysis);
        }
    }
}
