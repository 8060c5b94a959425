//! Lucky Lucky paytables.

use crate::value::{BLACKJACK, HandValue};

/// Looks up the Lucky Lucky multiplier for a combined player + dealer hand.
///
/// `cards` is every card value of the combined hand concatenated in deal
/// order (player cards first), `suited` whether all of them share a suit,
/// and `total` the value of the combined hand.
pub trait LuckyLuckyPaytable {
    /// Returns the multiplier applied to the wager; 0 loses it.
    fn multiplier(&self, cards: &str, suited: bool, total: HandValue) -> f64;
}

impl<F> LuckyLuckyPaytable for F
where
    F: Fn(&str, bool, HandValue) -> f64,
{
    fn multiplier(&self, cards: &str, suited: bool, total: HandValue) -> f64 {
        self(cards, suited, total)
    }
}

/// The common Lucky Lucky paytable.
///
/// | Hand              | Pays |
/// |-------------------|------|
/// | suited 7-7-7      | 200  |
/// | suited 6-7-8      | 100  |
/// | 7-7-7             | 50   |
/// | 6-7-8             | 30   |
/// | suited 21         | 15   |
/// | 21                | 3    |
/// | 19 or 20          | 2    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StandardPaytable;

const SIX_SEVEN_EIGHT: [&str; 6] = ["678", "687", "768", "786", "867", "876"];

impl LuckyLuckyPaytable for StandardPaytable {
    fn multiplier(&self, cards: &str, suited: bool, total: HandValue) -> f64 {
        let triple_seven = cards == "777";
        let six_seven_eight = SIX_SEVEN_EIGHT.contains(&cards);

        match total.higher_valid() {
            _ if triple_seven && suited => 200.0,
            _ if six_seven_eight && suited => 100.0,
            _ if triple_seven => 50.0,
            _ if six_seven_eight => 30.0,
            BLACKJACK if suited => 15.0,
            BLACKJACK => 3.0,
            19 | 20 => 2.0,
            _ => 0.0,
        }
    }
}
