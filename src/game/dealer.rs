#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::hand::{Hand, HandInfo};
use crate::result::Prizes;
use crate::value::{BLACKJACK, calculate, is_blackjack};

use super::{Action, Engine};

/// One wager movement of the round (initial bet, double-up, split stake...).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistoryEntry {
    /// The action that moved the wager.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub action: Action,
    /// Amount wagered by the action.
    pub value: f64,
}

impl HistoryEntry {
    /// Creates a new history entry.
    #[must_use]
    pub const fn new(action: Action, value: f64) -> Self {
        Self { action, value }
    }
}

impl<P> Engine<P> {
    /// Computes the payout of a single hand at showdown, stake included.
    ///
    /// Checks run in order: an open hand pays 0, a bust pays 0, a surrender
    /// returns the refund fraction, a natural against a dealer without one
    /// pays the blackjack ratio, a dealer bust pays even money, and otherwise
    /// the higher valid totals are compared. A natural against a dealer
    /// natural reaches the comparison and pushes.
    #[must_use]
    pub fn prize(&self, hand: &Hand, dealer_cards: &[Card]) -> f64 {
        let (reason, prize) = self.settle(hand, dealer_cards);
        log::debug!("{reason}: bet {} pays {prize}", hand.bet);
        prize
    }

    fn settle(&self, hand: &Hand, dealer_cards: &[Card]) -> (&'static str, f64) {
        let bet = hand.bet;

        if !hand.close {
            return ("hand still open", 0.0);
        }
        if hand.player_has_busted {
            return ("player busted", 0.0);
        }
        if hand.player_has_surrendered {
            return ("surrendered", bet * self.options.surrender_refund);
        }
        if hand.player_has_blackjack && !is_blackjack(dealer_cards) {
            return ("natural", bet + bet * self.options.blackjack_pays);
        }

        let dealer_value = calculate(dealer_cards).map_or(0, |value| value.higher_valid());
        if dealer_value > BLACKJACK {
            return ("dealer busted", bet * 2.0);
        }

        match hand.count().cmp(&dealer_value) {
            core::cmp::Ordering::Greater => ("player higher", bet * 2.0),
            core::cmp::Ordering::Equal => ("push", bet),
            core::cmp::Ordering::Less => ("dealer higher", 0.0),
        }
    }

    /// Computes the round's total wager and the payout of each hand.
    #[must_use]
    pub fn prizes(
        &self,
        history: &[HistoryEntry],
        hands: &HandInfo,
        dealer_cards: &[Card],
    ) -> Prizes {
        let won_on = |hand: Option<&Hand>| hand.map_or(0.0, |hand| self.prize(hand, dealer_cards));

        Prizes {
            final_bet: history.iter().map(|entry| entry.value).sum(),
            won_on_right: won_on(hands.right.as_ref()),
            won_on_left: won_on(hands.left.as_ref()),
        }
    }
}

/// Single-hand payout with the default rules.
///
/// # Example
///
/// ```
/// use bjcore::{Card, Suit, hand_after_deal, prize};
///
/// let player = [Card::new(Suit::Hearts, 1), Card::new(Suit::Hearts, 10)];
/// let dealer = [Card::new(Suit::Spades, 9), Card::new(Suit::Clubs, 8)];
/// let hand = hand_after_deal(&player, &dealer[..1], 10.0).unwrap();
/// assert_eq!(prize(&hand, &dealer), 25.0);
/// ```
#[must_use]
pub fn prize(hand: &Hand, dealer_cards: &[Card]) -> f64 {
    super::standard().prize(hand, dealer_cards)
}

/// Round payouts with the default rules.
#[must_use]
pub fn prizes(history: &[HistoryEntry], hands: &HandInfo, dealer_cards: &[Card]) -> Prizes {
    super::standard().prizes(history, hands, dealer_cards)
}
