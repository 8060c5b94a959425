use crate::card::Card;
use crate::hand::{AvailableActions, Hand};

use super::actions::{Transition, hand_info};

/// Insurance is settled; the hand plays on unless it is a natural.
pub(super) fn after_insurance(
    player_cards: &[Card],
    dealer_cards: &[Card],
    bet: f64,
) -> Option<Hand> {
    let hand = hand_info(player_cards, dealer_cards, false)?;
    Some(Hand {
        available_actions: AvailableActions {
            stand: true,
            hit: true,
            surrender: true,
            insurance: false,
            ..hand.available_actions
        },
        close: hand.player_has_blackjack,
        bet,
        ..hand
    })
}

/// Hand record after the insurance decision.
#[must_use]
pub fn hand_after_insurance(player_cards: &[Card], dealer_cards: &[Card], bet: f64) -> Option<Hand> {
    Transition::Insurance { bet }.apply(player_cards, dealer_cards)
}
