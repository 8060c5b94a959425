use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::{AvailableActions, Hand};
use crate::value::{BLACKJACK, calculate, is_blackjack, is_pair};

/// A card-driven transition a hand record is rebuilt for.
///
/// Each variant starts from [`hand_info`] and applies its own overrides;
/// the base record is never reused after an override.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Initial two cards were dealt.
    Deal {
        /// Initial wager.
        bet: f64,
    },
    /// The hand was created or reduced by a split.
    Split {
        /// Wager carried by the split hand.
        bet: f64,
    },
    /// A card was drawn.
    Hit {
        /// Wager on the hand.
        bet: f64,
        /// Whether the hand belongs to a split.
        has_split: bool,
    },
    /// The wager was doubled and one card drawn.
    Double {
        /// Wager before doubling.
        bet: f64,
        /// Whether the hand belongs to a split.
        has_split: bool,
    },
    /// Insurance was taken or declined.
    Insurance {
        /// Wager on the hand.
        bet: f64,
    },
}

impl Transition {
    /// Builds the hand record for this transition.
    ///
    /// Returns `None` when no hand can be derived from `player_cards`.
    #[must_use]
    pub fn apply(self, player_cards: &[Card], dealer_cards: &[Card]) -> Option<Hand> {
        let hand = match self {
            Self::Deal { bet } => after_deal(player_cards, dealer_cards, bet),
            Self::Split { bet } => after_split(player_cards, dealer_cards, bet),
            Self::Hit { bet, has_split } => after_hit(player_cards, dealer_cards, bet, has_split),
            Self::Double { bet, has_split } => {
                after_double(player_cards, dealer_cards, bet, has_split)
            }
            Self::Insurance { bet } => {
                super::insurance::after_insurance(player_cards, dealer_cards, bet)
            }
        }?;
        log::trace!("{self:?} -> {hand:?}");
        Some(hand)
    }
}

/// Derives the hand record for the given cards, without transition overrides.
///
/// A split hand never counts as a natural. The hand closes once it busts,
/// is a natural or reaches 21. Returns `None` when the player has no cards.
///
/// # Example
///
/// ```
/// use bjcore::{Card, Suit, hand_info};
///
/// let player = [Card::new(Suit::Hearts, 8), Card::new(Suit::Clubs, 8)];
/// let dealer = [Card::new(Suit::Spades, 1)];
/// let hand = hand_info(&player, &dealer, false).unwrap();
/// assert!(hand.available_actions.split);
/// assert!(hand.available_actions.insurance);
/// ```
#[must_use]
pub fn hand_info(player_cards: &[Card], dealer_cards: &[Card], has_split: bool) -> Option<Hand> {
    let value = calculate(player_cards)?;
    let has_blackjack = is_blackjack(player_cards) && !has_split;
    let has_busted = value.is_busted();
    let is_closed = has_busted || has_blackjack || value.hi == BLACKJACK;

    let dealer_shows_ace = dealer_cards.first().is_some_and(Card::is_ace);

    Some(Hand {
        cards: Vec::from(player_cards),
        player_value: value,
        player_has_blackjack: has_blackjack,
        player_has_busted: has_busted,
        player_has_surrendered: false,
        close: is_closed,
        available_actions: AvailableActions {
            double: !is_closed,
            split: is_pair(player_cards) && !is_closed,
            insurance: dealer_shows_ace && !is_closed,
            hit: !is_closed,
            stand: !is_closed,
            surrender: !is_closed,
        },
        bet: 0.0,
    })
}

fn after_deal(player_cards: &[Card], dealer_cards: &[Card], bet: f64) -> Option<Hand> {
    let hand = hand_info(player_cards, dealer_cards, false)?;
    // Only a dealt natural closes the hand here.
    Some(Hand {
        available_actions: AvailableActions {
            stand: true,
            hit: true,
            surrender: true,
            ..hand.available_actions
        },
        close: hand.player_has_blackjack,
        bet,
        ..hand
    })
}

fn after_split(player_cards: &[Card], dealer_cards: &[Card], bet: f64) -> Option<Hand> {
    let hand = hand_info(player_cards, dealer_cards, true)?;
    Some(Hand {
        available_actions: AvailableActions {
            split: false,
            double: !hand.close && hand.len() == 2,
            insurance: false,
            surrender: false,
            ..hand.available_actions
        },
        bet,
        ..hand
    })
}

fn after_hit(
    player_cards: &[Card],
    dealer_cards: &[Card],
    bet: f64,
    has_split: bool,
) -> Option<Hand> {
    let hand = hand_info(player_cards, dealer_cards, has_split)?;
    Some(Hand {
        available_actions: AvailableActions {
            double: hand.len() == 2,
            split: false,
            insurance: false,
            surrender: false,
            ..hand.available_actions
        },
        bet,
        ..hand
    })
}

fn after_double(
    player_cards: &[Card],
    dealer_cards: &[Card],
    bet: f64,
    has_split: bool,
) -> Option<Hand> {
    let hand = after_hit(player_cards, dealer_cards, bet, has_split)?;
    Some(Hand {
        available_actions: AvailableActions {
            hit: false,
            stand: false,
            ..hand.available_actions
        },
        bet: bet * 2.0,
        close: true,
        ..hand
    })
}

impl Hand {
    /// Returns the record after the player stands: closed, nothing available.
    #[must_use]
    pub fn stand(&self) -> Self {
        Self {
            close: true,
            available_actions: AvailableActions::NONE,
            ..self.clone()
        }
    }

    /// Returns the record after the player surrenders.
    #[must_use]
    pub fn surrender(&self) -> Self {
        Self {
            player_has_surrendered: true,
            close: true,
            ..self.stand()
        }
    }
}

/// Hand record right after the initial deal.
///
/// Stand, hit and surrender are always offered; only a natural closes the hand.
#[must_use]
pub fn hand_after_deal(player_cards: &[Card], dealer_cards: &[Card], bet: f64) -> Option<Hand> {
    Transition::Deal { bet }.apply(player_cards, dealer_cards)
}

/// Hand record for one of the hands produced by a split.
#[must_use]
pub fn hand_after_split(player_cards: &[Card], dealer_cards: &[Card], bet: f64) -> Option<Hand> {
    Transition::Split { bet }.apply(player_cards, dealer_cards)
}

/// Hand record after a hit.
#[must_use]
pub fn hand_after_hit(
    player_cards: &[Card],
    dealer_cards: &[Card],
    bet: f64,
    has_split: bool,
) -> Option<Hand> {
    Transition::Hit { bet, has_split }.apply(player_cards, dealer_cards)
}

/// Hand record after doubling down. The wager doubles and the hand closes.
#[must_use]
pub fn hand_after_double(
    player_cards: &[Card],
    dealer_cards: &[Card],
    bet: f64,
    has_split: bool,
) -> Option<Hand> {
    Transition::Double { bet, has_split }.apply(player_cards, dealer_cards)
}

/// Hand record after standing.
#[must_use]
pub fn hand_after_stand(hand: &Hand) -> Hand {
    hand.stand()
}

/// Hand record after surrendering.
#[must_use]
pub fn hand_after_surrender(hand: &Hand) -> Hand {
    hand.surrender()
}
