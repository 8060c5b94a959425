//! Card counting bias.

use crate::card::Card;

/// Hi-Lo weights indexed by `value - 1`.
const HI_LO: [i8; 13] = [-1, 1, 1, 1, 1, 1, 0, 0, 0, -1, -1, -1, -1];

/// A running-count point system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum CountingSystem {
    /// Hi-Lo: 2..=6 count +1, 7..=9 count 0, aces and tens count -1.
    #[default]
    HiLo,
}

impl CountingSystem {
    /// Returns the per-value weights, indexed by `value - 1`.
    #[must_use]
    pub const fn weights(&self) -> &'static [i8; 13] {
        match self {
            Self::HiLo => &HI_LO,
        }
    }

    /// Returns the weight of a single card. Values outside 1..=13 weigh 0.
    #[must_use]
    pub fn weight(&self, card: &Card) -> i8 {
        usize::from(card.value)
            .checked_sub(1)
            .and_then(|index| self.weights().get(index))
            .copied()
            .unwrap_or(0)
    }
}

/// Sums the Hi-Lo contribution of every card.
#[must_use]
pub fn count_cards(cards: &[Card]) -> i32 {
    count_cards_with(CountingSystem::HiLo, cards)
}

/// Sums the contribution of every card under the given system.
#[must_use]
pub fn count_cards_with(system: CountingSystem, cards: &[Card]) -> i32 {
    cards.iter().map(|card| i32::from(system.weight(card))).sum()
}
