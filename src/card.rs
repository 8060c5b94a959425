//! Card types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];
}

/// A dealt playing card.
///
/// `value` is the point value the rules core sums: 1 is an ace, 2..=10 are
/// pip cards and 11..=13 are face cards. Face cards are *not* clamped to 10
/// here; a shoe that wants standard totals must normalize them before the
/// cards reach this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Card {
    /// Point value (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub value: u8,
    /// The suit of the card.
    #[cfg_attr(feature = "serde", serde(rename = "suite"))]
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the value. Values outside 1..=13
    /// are accepted but yield unspecified results when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, value: u8) -> Self {
        Self { value, suit }
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.value == 1
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
