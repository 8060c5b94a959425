//! Payout result types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Side-bet winnings for one round.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SideBetsInfo {
    /// Lucky Lucky payout (0 if not won).
    pub lucky_lucky: f64,
    /// Perfect Pairs payout (0 if not won).
    pub perfect_pairs: f64,
}

/// Showdown payouts for the player's hands.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Prizes {
    /// Total wagered over the round.
    pub final_bet: f64,
    /// Payout on the first hand.
    pub won_on_right: f64,
    /// Payout on the split hand.
    pub won_on_left: f64,
}

impl Prizes {
    /// Net result (positive = profit, negative = loss).
    #[must_use]
    pub fn net(&self) -> f64 {
        self.won_on_right + self.won_on_left - self.final_bet
    }
}
