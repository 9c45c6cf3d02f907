// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Seven cards hand and its evaluation.
use ahash::AHashMap;
use log::debug;
use serde::Serialize;
use std::{cmp::Ordering, fmt, str::FromStr, sync::OnceLock};

use crate::{
    Card, Error, Rank, Result, Suit,
    detect::{Category, high_card},
    showdown,
};

/// A value that can be turned into a card, a [Card] or a card token.
pub trait IntoCard {
    /// Converts this value into a card.
    fn into_card(self) -> Result<Card>;
}

impl IntoCard for Card {
    fn into_card(self) -> Result<Card> {
        Ok(self)
    }
}

impl IntoCard for &Card {
    fn into_card(self) -> Result<Card> {
        Ok(*self)
    }
}

impl IntoCard for &str {
    fn into_card(self) -> Result<Card> {
        Ok(self.parse()?)
    }
}

impl IntoCard for &&str {
    fn into_card(self) -> Result<Card> {
        (*self).into_card()
    }
}

impl IntoCard for String {
    fn into_card(self) -> Result<Card> {
        self.as_str().into_card()
    }
}

impl IntoCard for &String {
    fn into_card(self) -> Result<Card> {
        self.as_str().into_card()
    }
}

/// A card or a card token, used to build a hand from mixed inputs.
#[derive(Debug, Clone, Copy)]
pub enum CardInput<'a> {
    /// A card.
    Card(Card),
    /// A card token like `"Tc"`.
    Token(&'a str),
}

impl From<Card> for CardInput<'_> {
    fn from(card: Card) -> Self {
        CardInput::Card(card)
    }
}

impl<'a> From<&'a str> for CardInput<'a> {
    fn from(token: &'a str) -> Self {
        CardInput::Token(token)
    }
}

impl IntoCard for CardInput<'_> {
    fn into_card(self) -> Result<Card> {
        match self {
            CardInput::Card(card) => Ok(card),
            CardInput::Token(token) => token.into_card(),
        }
    }
}

/// The evaluation of a hand: its category and best five cards.
///
/// The best cards are ordered from the least significant to the most
/// significant, see the [detect](crate::detect) module. Evaluations are
/// ordered by category and then by the best cards ranks, suits never break a
/// tie so two evaluations with the same ranks are equal.
///
/// Evaluations are only built by evaluating a hand:
///
/// ```compile_fail
/// # use showdown_eval::*;
/// let hand = "Kc,Kd,Ah,5s,6d,2s,7d".parse::<Hand>().unwrap();
/// let eval = Evaluation::new(Category::StraightFlush, *hand.best_hand());
/// ```
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Evaluation {
    category: Category,
    best_hand: [Card; 5],
}

impl Evaluation {
    /// Creates an evaluation from a category and its best cards ordered from
    /// the least significant card.
    pub(crate) fn new(category: Category, best_hand: [Card; 5]) -> Self {
        Self {
            category,
            best_hand,
        }
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The category name.
    pub fn name(&self) -> &'static str {
        self.category.name()
    }

    /// The category strength.
    pub fn strength(&self) -> u8 {
        self.category.strength()
    }

    /// The best five cards.
    pub fn best_hand(&self) -> &[Card; 5] {
        &self.best_hand
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Evaluation {}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        showdown::compare(self, other)
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.best_hand)
    }
}

/// A seven cards hand.
///
/// The cards are sorted by ascending rank, cards with the same rank keep
/// their input order. The hand is evaluated on first use and the evaluation
/// is cached.
#[derive(Debug, Clone)]
pub struct Hand {
    all_cards: [Card; 7],
    suits: AHashMap<Suit, Vec<Card>>,
    values: AHashMap<Rank, Vec<Card>>,
    evaluation: OnceLock<Evaluation>,
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 7;

    /// Creates a hand from 7 cards or card tokens.
    pub fn new<I>(cards: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: IntoCard,
    {
        let cards = cards
            .into_iter()
            .map(IntoCard::into_card)
            .collect::<Result<Vec<_>>>()?;

        let mut all_cards: [Card; 7] = cards
            .try_into()
            .map_err(|cards: Vec<Card>| Error::InvalidHandSize(cards.len()))?;
        all_cards.sort_by_key(Card::ordinal);

        let mut suits = AHashMap::<Suit, Vec<Card>>::with_capacity(4);
        let mut values = AHashMap::<Rank, Vec<Card>>::with_capacity(Self::SIZE);
        for card in all_cards {
            suits.entry(card.suit()).or_default().push(card);
            values.entry(card.rank()).or_default().push(card);
        }

        Ok(Self {
            all_cards,
            suits,
            values,
            evaluation: OnceLock::new(),
        })
    }

    /// All the cards sorted by ascending rank.
    pub fn all_cards(&self) -> &[Card; 7] {
        &self.all_cards
    }

    /// The cards grouped by suit, in ascending rank order.
    pub fn suits(&self) -> &AHashMap<Suit, Vec<Card>> {
        &self.suits
    }

    /// The cards grouped by rank.
    pub fn values(&self) -> &AHashMap<Rank, Vec<Card>> {
        &self.values
    }

    /// Evaluates this hand.
    ///
    /// Categories are tried from the strongest to the weakest, the first one
    /// found in the hand gives the evaluation. The result is computed once.
    pub fn evaluate(&self) -> &Evaluation {
        self.evaluation.get_or_init(|| {
            let evaluation = Category::categories()
                .find_map(|category| {
                    category
                        .best_hand(self)
                        .map(|best| Evaluation::new(category, best))
                })
                .unwrap_or_else(|| Evaluation::new(Category::HighCard, high_card(self)));

            debug!("Hand {} is {} [{}]", self, evaluation.category, evaluation);
            evaluation
        })
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.evaluate().category()
    }

    /// The hand category name.
    pub fn name(&self) -> &'static str {
        self.evaluate().name()
    }

    /// The hand category strength.
    pub fn strength(&self) -> u8 {
        self.evaluate().strength()
    }

    /// The best five cards of this hand.
    pub fn best_hand(&self) -> &[Card; 5] {
        self.evaluate().best_hand()
    }

    /// Compares this hand with another hand.
    pub fn compare(&self, other: &Hand) -> Ordering {
        showdown::compare(self.evaluate(), other.evaluate())
    }

    /// Checks if this hand beats the other hand.
    pub fn beats(&self, other: &Hand) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// Checks if this hand loses to the other hand.
    pub fn loses_to(&self, other: &Hand) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// Checks if this hand ties with the other hand.
    pub fn ties(&self, other: &Hand) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl FromStr for Hand {
    type Err = Error;

    /// Parses 7 cards tokens separated by commas or whitespaces.
    fn from_str(s: &str) -> Result<Self> {
        Hand::new(
            s.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty()),
        )
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.all_cards)
    }
}

fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    for (idx, card) in cards.iter().enumerate() {
        if idx > 0 {
            f.write_str(",")?;
        }
        write!(f, "{card}")?;
    }

    Ok(())
}

/// Evaluates 7 cards or card tokens.
///
/// ```
/// # use showdown_eval::*;
/// let eval = evaluate(["3c", "4d", "5s", "6h", "7s", "Ac", "Ad"]).unwrap();
/// assert_eq!(eval.category(), Category::Straight);
/// assert_eq!(eval.to_string(), "3c,4d,5s,6h,7s");
/// ```
pub fn evaluate<I>(cards: I) -> Result<Evaluation>
where
    I: IntoIterator,
    I::Item: IntoCard,
{
    Hand::new(cards).map(|hand| *hand.evaluate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::Detector;
    use ahash::HashSet;

    fn hand(cards: &str) -> Hand {
        cards.parse().unwrap()
    }

    #[test]
    fn hand_sorted() {
        let hand = Hand::new(["5c", "4c", "2d", "7s", "6s", "8h", "6d"]).unwrap();
        assert_eq!(hand.to_string(), "2d,4c,5c,6s,6d,7s,8h");

        let first = hand.all_cards()[0];
        assert_eq!(first.rank(), Rank::Deuce);
        assert_eq!(first.suit(), Suit::Diamonds);
        assert_eq!(first.ordinal(), 0);
    }

    #[test]
    fn hand_groups() {
        let hand = hand("5c 4c 5d 5s 6s 8h 6d");

        assert_eq!(hand.suits().len(), 4);
        assert_eq!(hand.suits()[&Suit::Diamonds].len(), 2);
        assert_eq!(hand.suits()[&Suit::Clubs].len(), 2);
        assert_eq!(hand.suits()[&Suit::Spades].len(), 2);
        assert_eq!(hand.suits()[&Suit::Hearts].len(), 1);

        // Suits groups are in ascending rank order.
        let spades = &hand.suits()[&Suit::Spades];
        assert_eq!(spades[0].rank(), Rank::Five);
        assert_eq!(spades[1].rank(), Rank::Six);

        assert!(!hand.values().contains_key(&Rank::Deuce));
        assert!(!hand.values().contains_key(&Rank::Trey));
        assert_eq!(hand.values()[&Rank::Four].len(), 1);
        assert_eq!(hand.values()[&Rank::Five].len(), 3);
        assert_eq!(hand.values()[&Rank::Six].len(), 2);
        assert_eq!(hand.values()[&Rank::Eight].len(), 1);

        // Same rank cards keep the input order.
        let fives = hand.values()[&Rank::Five]
            .iter()
            .map(|c| c.suit())
            .collect::<Vec<_>>();
        assert_eq!(fives, vec![Suit::Clubs, Suit::Diamonds, Suit::Spades]);
    }

    #[test]
    fn hand_invalid_size() {
        assert_eq!(
            Hand::new(["5c", "4c", "2d"]).unwrap_err(),
            Error::InvalidHandSize(3)
        );
        assert_eq!(
            "5c,4c,2d,7s,6s,8h,6d,Ah".parse::<Hand>().unwrap_err(),
            Error::InvalidHandSize(8)
        );
        assert_eq!(
            Hand::new(Vec::<Card>::new()).unwrap_err(),
            Error::InvalidHandSize(0)
        );
    }

    #[test]
    fn hand_invalid_card() {
        let err = Hand::new(["5c", "4c", "2d", "7s", "6s", "8h", "10d"]).unwrap_err();
        assert!(matches!(err, Error::InvalidCard(e) if e.token() == "10d"));
    }

    #[test]
    fn hand_mixed_input() {
        let ace = Card::new(Rank::Ace, Suit::Spades);
        let cards: Vec<CardInput<'_>> = vec![
            ace.into(),
            "Kc".into(),
            "Qd".into(),
            Card::new(Rank::Jack, Suit::Hearts).into(),
            "Ts".into(),
            "2c".into(),
            "3c".into(),
        ];

        let hand = Hand::new(cards).unwrap();
        assert_eq!(hand.category(), Category::Straight);
        assert_eq!(hand.best_hand()[4], ace);

        let tokens = "As Kc Qd Jh Ts 2c 3c"
            .split(' ')
            .map(String::from)
            .collect::<Vec<_>>();
        let from_refs = Hand::new(&tokens).unwrap();
        let from_owned = Hand::new(tokens).unwrap();
        assert!(from_refs.ties(&hand));
        assert_eq!(from_owned.all_cards(), hand.all_cards());

        let err = Hand::new(vec![String::from("1c"); 7]).unwrap_err();
        assert!(matches!(err, Error::InvalidCard(e) if e.token() == "1c"));
    }

    #[test]
    fn evaluate_categories() {
        let cases = [
            ("9h,Th,Jh,Qh,Kh,Ah,2c", Category::StraightFlush, "Th,Jh,Qh,Kh,Ah"),
            ("7c,7d,7h,7s,Kh,Kc,2c", Category::FourOfAKind, "Kc,7c,7d,7h,7s"),
            ("7c,7d,7h,Ks,Kh,2c,3d", Category::FullHouse, "Ks,Kh,7c,7d,7h"),
            ("2h,5h,9h,Jh,Kh,Ks,Kc", Category::Flush, "2h,5h,9h,Jh,Kh"),
            ("Kc,2d,3s,4h,5s,Ac,5d", Category::Straight, "Ac,2d,3s,4h,5d"),
            ("7c,7d,7h,Ks,2h,9c,3d", Category::ThreeOfAKind, "9c,Ks,7c,7d,7h"),
            ("7c,7d,2h,Ks,Kh,9c,3d", Category::TwoPair, "9c,7c,7d,Ks,Kh"),
            ("Kc,Kd,Ah,5s,6d,2s,7d", Category::OnePair, "6d,7d,Ah,Kc,Kd"),
            ("Kc,Qd,Ah,5s,6d,2s,7d", Category::HighCard, "6d,7d,Qd,Kc,Ah"),
        ];

        for (cards, category, best) in cases {
            let eval = evaluate(cards.split(',')).unwrap();
            assert_eq!(eval.category(), category, "{cards}");
            assert_eq!(eval.name(), category.name());
            assert_eq!(eval.strength(), category.strength());
            assert_eq!(eval.to_string(), best, "{cards}");
        }
    }

    #[test]
    fn evaluate_best_hand_over_literal_patterns() {
        // The highest straight is not suited but a lower suited run is.
        let hand = hand("5h,6h,7h,8h,9h,Ts,2c");
        let straight = Detector::new(Category::Straight, hand.clone());
        assert_eq!(straight.best_hand()[4].rank(), Rank::Ten);
        assert_eq!(hand.category(), Category::StraightFlush);
        assert_eq!(hand.evaluate().to_string(), "5h,6h,7h,8h,9h");

        // Two trips, the lower one gives the pair.
        let eval = evaluate("5c,5d,5h,Jc,Jd,Jh,2s".split(',')).unwrap();
        assert_eq!(eval.category(), Category::FullHouse);
        assert_eq!(eval.to_string(), "5d,5h,Jc,Jd,Jh");

        // Three pairs, the third pair gives the kicker.
        let eval = evaluate("4s,4h,9c,9d,Jc,Jd,2s".split(',')).unwrap();
        assert_eq!(eval.category(), Category::TwoPair);
        assert_eq!(eval.to_string(), "4h,9c,9d,Jc,Jd");
    }

    #[test]
    fn evaluate_best_cards_from_hand() {
        let mut deck = showdown_cards::Deck::new_and_shuffled(&mut rand::rng());
        while deck.count() >= Hand::SIZE {
            let cards = (0..Hand::SIZE).filter_map(|_| deck.deal()).collect::<Vec<_>>();
            let hand = Hand::new(&cards).unwrap();
            let best = hand.best_hand();

            let unique = best.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), 5);
            assert!(best.iter().all(|c| cards.contains(c)));
        }
    }

    #[test]
    fn evaluate_is_cached() {
        let hand = hand("Kc,Kd,Ah,5s,6d,2s,7d");
        let first = hand.evaluate() as *const Evaluation;
        let best = *hand.best_hand();
        assert_eq!(hand.evaluate() as *const Evaluation, first);
        assert_eq!(hand.best_hand(), &best);
        assert_eq!(hand.name(), "One Pair");
        assert_eq!(hand.strength(), 1);
    }

    #[test]
    fn evaluation_equality_ignores_suits() {
        let e1 = evaluate(["Kc", "Kd", "Ah", "5s", "6d", "2s", "7d"]).unwrap();
        let e2 = evaluate(["Kh", "Ks", "Ac", "5d", "6c", "2h", "7c"]).unwrap();
        assert_eq!(e1, e2);
        assert_ne!(e1.to_string(), e2.to_string());
    }
}
