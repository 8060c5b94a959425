//! A blackjack rules core with optional `no_std` support.
//!
//! The crate values hands, derives the hand record and legal actions after
//! every game transition, judges which actions a stage allows, and computes
//! main and side-bet payouts. It never draws cards or holds game state: the
//! caller owns the shoe, the stage and the hands, and every function here is
//! a pure computation over the data it is given.
//!
//! # Example
//!
//! ```
//! use bjcore::{Card, Suit, hand_after_deal, hand_after_hit, prize};
//!
//! let dealer = [Card::new(Suit::Spades, 10), Card::new(Suit::Clubs, 7)];
//! let mut cards = vec![Card::new(Suit::Hearts, 5), Card::new(Suit::Clubs, 6)];
//!
//! let dealt = hand_after_deal(&cards, &dealer[..1], 10.0).unwrap();
//! assert!(dealt.available_actions.double);
//!
//! cards.push(Card::new(Suit::Diamonds, 9));
//! let hit = hand_after_hit(&cards, &dealer[..1], dealt.bet, false).unwrap();
//! let stood = hit.stand();
//! assert_eq!(prize(&stood, &dealer), 20.0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod count;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod paytable;
pub mod result;
pub mod value;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use count::{CountingSystem, count_cards, count_cards_with};
pub use error::{ParseActionError, ParseStageError};
pub use game::{
    Action, AvailableBets, Engine, HistoryEntry, SideBets, Stage, Transition, hand_after_deal,
    hand_after_double, hand_after_hit, hand_after_insurance, hand_after_split, hand_after_stand,
    hand_after_surrender, hand_info, is_action_allowed, is_action_allowed_by_name,
    is_lucky_lucky, is_perfect_pairs, lucky_lucky_multiplier, prize, prizes, side_bets_info,
};
pub use hand::{AvailableActions, Hand, HandInfo};
pub use options::RuleOptions;
pub use paytable::{LuckyLuckyPaytable, StandardPaytable};
pub use result::{Prizes, SideBetsInfo};
pub use value::{
    BLACKJACK, HandValue, calculate, check_for_busted, higher_valid_value, is_blackjack, is_pair,
    is_soft_hand, is_suited,
};
