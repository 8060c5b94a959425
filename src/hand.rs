//! Derived hand records.

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::value::HandValue;

/// Actions a hand may legally take next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AvailableActions {
    /// Double down.
    pub double: bool,
    /// Split a pair.
    pub split: bool,
    /// Insure against a dealer ace.
    pub insurance: bool,
    /// Draw a card.
    pub hit: bool,
    /// Keep the current hand.
    pub stand: bool,
    /// Give up half the wager.
    pub surrender: bool,
}

impl AvailableActions {
    /// No action available.
    pub const NONE: Self = Self {
        double: false,
        split: false,
        insurance: false,
        hit: false,
        stand: false,
        surrender: false,
    };

    /// Returns whether any action is available.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.double || self.split || self.insurance || self.hit || self.stand || self.surrender
    }
}

/// A player's hand as of one transition.
///
/// Records are never updated in place: every transition builds a new one
/// from the current cards and context (see [`crate::Transition`]).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Hand {
    /// Cards in the hand.
    pub cards: Vec<Card>,
    /// Value of the cards.
    pub player_value: HandValue,
    /// Whether the hand is a natural.
    pub player_has_blackjack: bool,
    /// Whether the hand has busted.
    pub player_has_busted: bool,
    /// Whether the player surrendered.
    pub player_has_surrendered: bool,
    /// Whether the hand is finished.
    pub close: bool,
    /// Actions available next.
    pub available_actions: AvailableActions,
    /// Wager on this hand.
    pub bet: f64,
}

impl Hand {
    /// Returns the single total used for comparison at showdown.
    #[must_use]
    pub const fn count(&self) -> u8 {
        self.player_value.higher_valid()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The player's hands. `left` only exists after a split.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HandInfo {
    /// Hand created by the split.
    pub left: Option<Hand>,
    /// The first (pre-split) hand.
    pub right: Option<Hand>,
}

impl HandInfo {
    /// Creates hand info for an unsplit game.
    #[must_use]
    pub const fn single(right: Hand) -> Self {
        Self {
            left: None,
            right: Some(right),
        }
    }

    /// Creates hand info after a split.
    #[must_use]
    pub const fn split(left: Hand, right: Hand) -> Self {
        Self {
            left: Some(left),
            right: Some(right),
        }
    }

    /// Returns whether the player has split.
    #[must_use]
    pub const fn has_split(&self) -> bool {
        self.left.is_some()
    }
}
