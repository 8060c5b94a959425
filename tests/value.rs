//! Hand value and classification tests.

use bjcore::{
    Card, CountingSystem, DECK_SIZE, HandValue, Suit, calculate, check_for_busted, count_cards,
    count_cards_with, higher_valid_value, is_blackjack, is_pair, is_soft_hand, is_suited,
};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, value: u8) -> Card {
    Card::new(suit, value)
}

fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for value in 1..=13 {
            cards.push(card(suit, value));
        }
    }
    cards
}

fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cards = full_deck();
    cards.shuffle(&mut rng);
    cards
}

fn value(cards: &[Card]) -> (u8, u8) {
    let value = calculate(cards).unwrap();
    (value.hi, value.lo)
}

#[test]
fn empty_hand_has_no_value() {
    assert_eq!(calculate(&[]), None);
}

#[test]
fn single_card_values() {
    assert_eq!(value(&[card(Suit::Hearts, 1)]), (11, 1));
    assert_eq!(value(&[card(Suit::Hearts, 7)]), (7, 7));
    assert_eq!(value(&[card(Suit::Hearts, 12)]), (12, 12));
}

#[test]
fn ace_and_ten_is_a_natural() {
    let cards = [card(Suit::Spades, 1), card(Suit::Spades, 10)];
    assert_eq!(value(&cards), (21, 11));
    assert!(is_blackjack(&cards));
}

#[test]
fn two_aces_fold_one_as_eleven() {
    let cards = [
        card(Suit::Spades, 1),
        card(Suit::Hearts, 1),
        card(Suit::Clubs, 9),
    ];
    assert_eq!(value(&cards), (21, 11));
}

#[test]
fn ace_collapses_when_eleven_would_bust() {
    let cards = [
        card(Suit::Spades, 10),
        card(Suit::Hearts, 5),
        card(Suit::Clubs, 1),
    ];
    assert_eq!(value(&cards), (16, 16));

    let soft = [card(Suit::Spades, 1), card(Suit::Hearts, 5)];
    assert_eq!(value(&soft), (16, 6));
}

#[test]
fn aces_are_folded_after_other_cards() {
    let ace_first = [
        card(Suit::Spades, 1),
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 10),
    ];
    assert_eq!(value(&ace_first), (21, 21));
    assert!(!check_for_busted(&calculate(&ace_first).unwrap()));
}

#[test]
fn face_cards_keep_their_literal_value() {
    let cards = [card(Suit::Spades, 1), card(Suit::Spades, 13)];
    assert_eq!(value(&cards), (14, 14));
    assert!(!is_blackjack(&cards));
}

#[test]
fn lo_never_exceeds_hi() {
    for seed in 0..16 {
        let deck = shuffled_deck(seed);
        for size in 1..=6 {
            for window in deck.windows(size) {
                let value = calculate(window).unwrap();
                assert!(value.lo <= value.hi, "{window:?} -> {value:?}");
            }
        }
    }
}

#[test]
fn hands_without_aces_have_one_total() {
    let deck: Vec<Card> = shuffled_deck(7)
        .into_iter()
        .filter(|card| !card.is_ace())
        .collect();
    for window in deck.windows(3) {
        let value = calculate(window).unwrap();
        assert_eq!(value.hi, value.lo);
    }
}

#[test]
fn busted_and_higher_valid_value() {
    let bust = calculate(&[
        card(Suit::Spades, 10),
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 5),
    ])
    .unwrap();
    assert!(check_for_busted(&bust));
    assert_eq!(higher_valid_value(&bust), 25);

    let soft = HandValue { hi: 17, lo: 7 };
    assert!(!check_for_busted(&soft));
    assert_eq!(higher_valid_value(&soft), 17);

    let split_totals = HandValue { hi: 25, lo: 15 };
    assert!(!check_for_busted(&split_totals));
    assert_eq!(higher_valid_value(&split_totals), 15);
}

#[test]
fn blackjack_needs_exactly_two_cards() {
    let sevens = [
        card(Suit::Spades, 7),
        card(Suit::Hearts, 7),
        card(Suit::Clubs, 7),
    ];
    assert_eq!(value(&sevens), (21, 21));
    assert!(!is_blackjack(&sevens));
    assert!(!is_blackjack(&[card(Suit::Spades, 10), card(Suit::Hearts, 10)]));
    assert!(!is_blackjack(&[]));
}

#[test]
fn soft_hand_only_detects_soft_seventeen() {
    assert!(is_soft_hand(&[card(Suit::Spades, 1), card(Suit::Hearts, 6)]));
    assert!(is_soft_hand(&[card(Suit::Spades, 6), card(Suit::Hearts, 1)]));
    assert!(is_soft_hand(&[
        card(Suit::Spades, 5),
        card(Suit::Hearts, 1),
        card(Suit::Clubs, 1),
    ]));

    // Soft 18 and hard 17 are not reported.
    assert!(!is_soft_hand(&[card(Suit::Spades, 1), card(Suit::Hearts, 7)]));
    assert!(!is_soft_hand(&[card(Suit::Spades, 10), card(Suit::Hearts, 7)]));
    assert!(!is_soft_hand(&[
        card(Suit::Spades, 1),
        card(Suit::Hearts, 6),
        card(Suit::Clubs, 10),
    ]));
}

#[test]
fn suited_hands() {
    assert!(!is_suited(&[]));
    assert!(is_suited(&[card(Suit::Clubs, 4)]));
    assert!(is_suited(&[
        card(Suit::Clubs, 4),
        card(Suit::Clubs, 9),
        card(Suit::Clubs, 1),
    ]));
    assert!(!is_suited(&[card(Suit::Clubs, 4), card(Suit::Hearts, 4)]));
}

#[test]
fn pairs_compare_first_two_values() {
    assert!(is_pair(&[card(Suit::Clubs, 8), card(Suit::Hearts, 8)]));
    assert!(!is_pair(&[card(Suit::Clubs, 8), card(Suit::Clubs, 9)]));
    assert!(!is_pair(&[card(Suit::Clubs, 8)]));
}

#[test]
fn hi_lo_weights() {
    let low: Vec<Card> = (2..=6).map(|value| card(Suit::Hearts, value)).collect();
    let neutral: Vec<Card> = (7..=9).map(|value| card(Suit::Hearts, value)).collect();
    let high: Vec<Card> = [1, 10, 11, 12, 13]
        .into_iter()
        .map(|value| card(Suit::Hearts, value))
        .collect();

    assert_eq!(count_cards(&low), 5);
    assert_eq!(count_cards(&neutral), 0);
    assert_eq!(count_cards(&high), -5);
    assert_eq!(count_cards(&[card(Suit::Hearts, 0)]), 0);
    assert_eq!(
        count_cards_with(CountingSystem::default(), &low),
        count_cards(&low)
    );
}

#[test]
fn hi_lo_is_balanced_over_a_deck() {
    assert_eq!(count_cards(&full_deck()), 0);

    let shoe: Vec<Card> = (0..6).flat_map(shuffled_deck).collect();
    assert_eq!(count_cards(&shoe), 0);
}
