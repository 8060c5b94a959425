use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::paytable::LuckyLuckyPaytable;
use crate::result::SideBetsInfo;
use crate::value::{calculate, is_pair, is_suited};

use super::Engine;

/// Side-bet wagers placed for the round.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SideBets {
    /// Lucky Lucky wager.
    pub lucky_lucky: f64,
    /// Perfect Pairs wager.
    pub perfect_pairs: f64,
}

/// Side bets offered at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AvailableBets {
    /// Whether Lucky Lucky is offered.
    pub lucky_lucky: bool,
    /// Whether Perfect Pairs is offered.
    pub perfect_pairs: bool,
}

impl AvailableBets {
    /// Every side bet offered.
    pub const ALL: Self = Self {
        lucky_lucky: true,
        perfect_pairs: true,
    };
}

impl<P: LuckyLuckyPaytable> Engine<P> {
    /// Returns whether any hi/lo pairing of the player total and the dealer
    /// total lands in the Lucky Lucky range.
    ///
    /// Without a dealer card (or without player cards) the bet never qualifies.
    #[must_use]
    pub fn is_lucky_lucky(&self, player_cards: &[Card], dealer_cards: &[Card]) -> bool {
        let (Some(player), Some(dealer)) = (calculate(player_cards), calculate(dealer_cards)) else {
            return false;
        };

        [
            (player.hi, dealer.hi),
            (player.lo, dealer.lo),
            (player.hi, dealer.lo),
            (player.lo, dealer.hi),
        ]
        .into_iter()
        .any(|(p, d)| self.options.is_lucky_lucky_total(u16::from(p) + u16::from(d)))
    }

    /// Looks up the Lucky Lucky multiplier for the combined hand.
    #[must_use]
    pub fn lucky_lucky_multiplier(&self, player_cards: &[Card], dealer_cards: &[Card]) -> f64 {
        let cards: Vec<Card> = player_cards.iter().chain(dealer_cards).copied().collect();
        let Some(total) = calculate(&cards) else {
            return 0.0;
        };
        let pattern: String = cards.iter().map(|card| card.value.to_string()).collect();
        self.paytable.multiplier(&pattern, is_suited(&cards), total)
    }

    /// Computes side-bet winnings.
    ///
    /// A side bet pays only when it is offered, a wager was placed and the
    /// hand qualifies; otherwise it pays 0.
    #[must_use]
    pub fn side_bets_info(
        &self,
        available: AvailableBets,
        bets: SideBets,
        player_cards: &[Card],
        dealer_cards: &[Card],
    ) -> SideBetsInfo {
        let mut info = SideBetsInfo::default();

        if available.lucky_lucky
            && bets.lucky_lucky > 0.0
            && self.is_lucky_lucky(player_cards, dealer_cards)
        {
            info.lucky_lucky =
                bets.lucky_lucky * self.lucky_lucky_multiplier(player_cards, dealer_cards);
        }

        // Colored and mixed pairs are not distinguished; any pair pays flat.
        if available.perfect_pairs && bets.perfect_pairs > 0.0 && is_perfect_pairs(player_cards) {
            info.perfect_pairs = bets.perfect_pairs * self.options.perfect_pairs_pays;
        }

        log::trace!("side bets {bets:?} on {available:?} -> {info:?}");
        info
    }
}

/// Returns whether the player's first two cards share a value.
#[must_use]
pub fn is_perfect_pairs(player_cards: &[Card]) -> bool {
    is_pair(player_cards)
}

/// Lucky Lucky check with the default range.
///
/// An empty dealer hand never qualifies.
#[must_use]
pub fn is_lucky_lucky(player_cards: &[Card], dealer_cards: &[Card]) -> bool {
    super::standard().is_lucky_lucky(player_cards, dealer_cards)
}

/// Lucky Lucky multiplier from the standard paytable.
#[must_use]
pub fn lucky_lucky_multiplier(player_cards: &[Card], dealer_cards: &[Card]) -> f64 {
    super::standard().lucky_lucky_multiplier(player_cards, dealer_cards)
}

/// Side-bet winnings with the default rules and paytable.
///
/// # Example
///
/// ```
/// use bjcore::{AvailableBets, Card, SideBets, Suit, side_bets_info};
///
/// let player = [Card::new(Suit::Hearts, 9), Card::new(Suit::Clubs, 9)];
/// let dealer = [Card::new(Suit::Spades, 2)];
/// let bets = SideBets { lucky_lucky: 0.0, perfect_pairs: 10.0 };
/// let info = side_bets_info(AvailableBets::ALL, bets, &player, &dealer);
/// assert_eq!(info.perfect_pairs, 50.0);
/// ```
#[must_use]
pub fn side_bets_info(
    available: AvailableBets,
    bets: SideBets,
    player_cards: &[Card],
    dealer_cards: &[Card],
) -> SideBetsInfo {
    super::standard().side_bets_info(available, bets, player_cards, dealer_cards)
}
