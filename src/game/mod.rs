//! Rules operations: transitions, legality, side bets and payouts.

use crate::options::RuleOptions;
use crate::paytable::StandardPaytable;

mod actions;
mod bet;
mod dealer;
mod insurance;
pub mod state;

pub use actions::{
    Transition, hand_after_deal, hand_after_double, hand_after_hit, hand_after_split,
    hand_after_stand, hand_after_surrender, hand_info,
};
pub use bet::{
    AvailableBets, SideBets, is_lucky_lucky, is_perfect_pairs, lucky_lucky_multiplier,
    side_bets_info,
};
pub use dealer::{HistoryEntry, prize, prizes};
pub use insurance::hand_after_insurance;
pub use state::{Action, Stage, is_action_allowed, is_action_allowed_by_name};

/// Payout rules bundled with a Lucky Lucky paytable.
///
/// The engine holds no game state; every method is a pure function of its
/// arguments and the configuration, so one engine can serve any number of
/// tables concurrently.
///
/// # Example
///
/// ```
/// use bjcore::{Engine, RuleOptions};
///
/// let engine = Engine::new(RuleOptions::default().with_blackjack_pays(1.2));
/// let _ = engine;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Engine<P = StandardPaytable> {
    /// Payout rules.
    pub options: RuleOptions,
    /// Lucky Lucky paytable.
    pub paytable: P,
}

impl Engine {
    /// Creates an engine using the standard Lucky Lucky paytable.
    #[must_use]
    pub const fn new(options: RuleOptions) -> Self {
        Self {
            options,
            paytable: StandardPaytable,
        }
    }
}

impl<P> Engine<P> {
    /// Creates an engine with a custom Lucky Lucky paytable.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{Engine, HandValue, RuleOptions};
    ///
    /// let engine = Engine::with_paytable(RuleOptions::default(), |_: &str, _: bool, _: HandValue| 1.0);
    /// let _ = engine;
    /// ```
    #[must_use]
    pub const fn with_paytable(options: RuleOptions, paytable: P) -> Self {
        Self { options, paytable }
    }
}

impl Default for Engine {
    fn default() -> Self {
        standard()
    }
}

fn standard() -> Engine {
    Engine::new(RuleOptions::default())
}
