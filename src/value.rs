//! Hand value calculation and hand classification.
//!
//! A hand is valued as a pair of totals: `lo` counts every ace as 1, `hi`
//! promotes aces to 11 for as long as that does not bust.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::Card;

/// The highest total that does not bust.
pub const BLACKJACK: u8 = 21;

/// Dual hand totals. `lo <= hi` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HandValue {
    /// Total with aces promoted to 11 where possible.
    pub hi: u8,
    /// Total with every ace counted as 1.
    pub lo: u8,
}

impl HandValue {
    /// Returns `hi` when it is a valid total, otherwise `lo`.
    #[must_use]
    pub const fn higher_valid(&self) -> u8 {
        if self.hi <= BLACKJACK { self.hi } else { self.lo }
    }

    /// Returns whether no valid alternate total remains.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        self.hi > BLACKJACK && self.lo == self.hi
    }
}

/// Calculates the value of a sequence of cards.
///
/// Non-ace values are summed first, then aces are folded one at a time in
/// the order they were dealt: an ace counts 11 on `hi` when that keeps `hi`
/// at or under 21, otherwise 1. After each ace, a busted `hi` collapses onto
/// a still valid `lo`.
///
/// Returns `None` when there are no cards, i.e. the slot has not been dealt
/// yet and no hand can be derived.
///
/// # Example
///
/// ```
/// use bjcore::{Card, Suit, calculate};
///
/// let value = calculate(&[Card::new(Suit::Spades, 1), Card::new(Suit::Spades, 10)]);
/// assert_eq!(value.map(|v| (v.hi, v.lo)), Some((21, 11)));
/// ```
#[must_use]
pub fn calculate(cards: &[Card]) -> Option<HandValue> {
    if cards.is_empty() {
        return None;
    }

    let mut aces: usize = 0;
    let base = cards.iter().fold(0u8, |total, card| {
        if card.is_ace() {
            aces += 1;
            total
        } else {
            total.saturating_add(card.value)
        }
    });

    let value = (0..aces).fold(HandValue { hi: base, lo: base }, |mut value, _| {
        if value.hi.saturating_add(11) <= BLACKJACK {
            value.hi += 11;
        } else {
            value.hi = value.hi.saturating_add(1);
        }
        value.lo = value.lo.saturating_add(1);
        if value.hi > BLACKJACK && value.lo <= BLACKJACK {
            value.hi = value.lo;
        }
        value
    });

    Some(value)
}

/// Returns the count used everywhere a single total is needed.
#[must_use]
pub const fn higher_valid_value(value: &HandValue) -> u8 {
    value.higher_valid()
}

/// Returns whether the value is busted.
#[must_use]
pub const fn check_for_busted(value: &HandValue) -> bool {
    value.is_busted()
}

/// Returns whether the cards are a natural: exactly two cards with a `hi` of 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && calculate(cards).is_some_and(|value| value.hi == BLACKJACK)
}

/// Returns whether the hand is the soft-17 shape.
///
/// This is deliberately narrow: the hand must hold an ace, and summing with
/// an ace worth 11 only while the running total is under 11 must land on
/// exactly 17. Soft totals other than 17 are not reported.
#[must_use]
pub fn is_soft_hand(cards: &[Card]) -> bool {
    cards.iter().any(Card::is_ace)
        && cards.iter().fold(0u16, |total, card| {
            if card.is_ace() && total < 11 {
                total + 11
            } else {
                total + u16::from(card.value)
            }
        }) == 17
}

/// Returns whether every card shares one suit. An empty hand is not suited.
#[must_use]
pub fn is_suited(cards: &[Card]) -> bool {
    match cards.split_first() {
        Some((first, rest)) => rest.iter().all(|card| card.suit == first.suit),
        None => false,
    }
}

/// Returns whether the first two cards form a value pair.
#[must_use]
pub fn is_pair(cards: &[Card]) -> bool {
    matches!(cards, [first, second, ..] if first.value == second.value)
}
