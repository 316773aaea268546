//! Per-action price table.

use soroban_sdk::contracttype;

use crate::action::ActionKind;

/// Price of every action kind, in payment-token base units.
///
/// Stored as a single entry so a bulk update replaces all six prices
/// in one write.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ActionPrices {
    pub like: i128,
    pub reply: i128,
    pub reply_to_thread: i128,
    pub repost: i128,
    pub repost_with_comment: i128,
    pub token_analysis: i128,
}

/// Preview of how a single action's price would be settled.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Quote {
    /// Amount pulled from the caller.
    pub price: i128,

    /// Part kept in the contract's balance.
    pub retained: i128,

    /// Part forwarded to the burn sink.
    pub burned: i128,
}

/// The six prices in ordinal order:
/// Like, Reply, ReplyToThread, Repost, RepostWithComment, TokenAnalysis.
pub type PriceTuple = (i128, i128, i128, i128, i128, i128);

impl ActionPrices {
    pub fn from_tuple(prices: PriceTuple) -> Self {
        let (like, reply, reply_to_thread, repost, repost_with_comment, token_analysis) = prices;
        Self {
            like,
            reply,
            reply_to_thread,
            repost,
            repost_with_comment,
            token_analysis,
        }
    }

    pub fn to_tuple(&self) -> PriceTuple {
        (
            self.like,
            self.reply,
            self.reply_to_thread,
            self.repost,
            self.repost_with_comment,
            self.token_analysis,
        )
    }

    /// Price for a single kind.
    pub fn get(&self, kind: ActionKind) -> i128 {
        match kind {
            ActionKind::Like => self.like,
            ActionKind::Reply => self.reply,
            ActionKind::ReplyToThread => self.reply_to_thread,
            ActionKind::Repost => self.repost,
            ActionKind::RepostWithComment => self.repost_with_comment,
            ActionKind::TokenAnalysis => self.token_analysis,
        }
    }

    /// Overwrite the price for a single kind.
    pub fn set(&mut self, kind: ActionKind, amount: i128) {
        let slot = match kind {
            ActionKind::Like => &mut self.like,
            ActionKind::Reply => &mut self.reply,
            ActionKind::ReplyToThread => &mut self.reply_to_thread,
            ActionKind::Repost => &mut self.repost,
            ActionKind::RepostWithComment => &mut self.repost_with_comment,
            ActionKind::TokenAnalysis => &mut self.token_analysis,
        };
        *slot = amount;
    }

    /// True if no price is negative.
    pub fn all_non_negative(&self) -> bool {
        ActionKind::ALL.iter().all(|kind| self.get(*kind) >= 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_zero() {
        let prices = ActionPrices::default();
        for kind in ActionKind::ALL {
            assert_eq!(prices.get(kind), 0);
        }
    }

    #[test]
    fn test_set_overwrites_one_entry() {
        let mut prices = ActionPrices::from_tuple((1, 2, 3, 4, 5, 6));
        prices.set(ActionKind::Repost, 40);

        assert_eq!(prices.to_tuple(), (1, 2, 3, 40, 5, 6));
    }

    #[test]
    fn test_tuple_order_matches_ordinals() {
        let prices = ActionPrices::from_tuple((10, 20, 30, 40, 50, 100));
        let expected = [10, 20, 30, 40, 50, 100];
        for kind in ActionKind::ALL {
            assert_eq!(prices.get(kind), expected[kind.ordinal() as usize]);
        }
    }

    #[test]
    fn test_negative_price_detected() {
        assert!(ActionPrices::from_tuple((0, 0, 0, 0, 0, 0)).all_non_negative());
        assert!(!ActionPrices::from_tuple((0, 0, -1, 0, 0, 0)).all_non_negative());
    }
}
