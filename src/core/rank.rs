use std::cmp::Ordering;
use std::fmt;

use super::card::Card;
use super::detect;
use super::hand::{SevenCards, write_cards};

/// Signature every category detector shares.
pub type Detector = fn(&[Card; 7]) -> Option<[Card; 5]>;

/// All the different possible hand categories, weakest first.
/// The derived ordering is the strength order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Category {
    /// The lowest category.
    /// No matches
    HighCard = 0,
    /// One card matches another.
    Pair = 1,
    /// Two different pairs of matching cards.
    TwoPair = 2,
    /// Three of the same value.
    ThreeOfAKind = 3,
    /// Five cards in a sequence
    Straight = 4,
    /// Five cards of the same suit
    Flush = 5,
    /// Three of one value and two of another value
    FullHouse = 6,
    /// Four of the same value.
    FourOfAKind = 7,
    /// Five cards in a sequence all of the same suit.
    StraightFlush = 8,
    /// Ace high straight flush.
    RoyalFlush = 9,
}

impl Category {
    /// Every category in strength order, weakest first.
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    /// Stable numeric strength, 0 for `HighCard` up to 9 for `RoyalFlush`.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// The detector for this category.
    pub fn detector(self) -> Detector {
        match self {
            Category::HighCard => detect::high_card,
            Category::Pair => detect::pair,
            Category::TwoPair => detect::two_pair,
            Category::ThreeOfAKind => detect::three_of_a_kind,
            Category::Straight => detect::straight,
            Category::Flush => detect::flush,
            Category::FullHouse => detect::full_house,
            Category::FourOfAKind => detect::four_of_a_kind,
            Category::StraightFlush => detect::straight_flush,
            Category::RoyalFlush => detect::royal_flush,
        }
    }

    /// The five cards making this category, if the hand qualifies.
    pub fn five_best(self, cards: &SevenCards) -> Option<[Card; 5]> {
        (self.detector())(cards.cards())
    }

    /// Like `five_best` but falls back to the five highest cards when
    /// the hand doesn't qualify. For diagnostics.
    pub fn five_best_or_high_card(self, cards: &SevenCards) -> [Card; 5] {
        self.five_best(cards)
            .unwrap_or_else(|| detect::top_five(cards.cards()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// How two hands of the same category are split.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum KickerRule {
    /// Sum of the internal ranks of the five best cards. This is the
    /// classic rule of this evaluator. It has a known gap: the wheel
    /// (sum 18) beats a six high straight (sum 10).
    #[default]
    RankSum,
    /// Compare the five best cards one position at a time.
    Lexicographic,
}

/// The totally ordered key of an evaluated hand under `KickerRule::RankSum`.
/// Category first, kicker sum second.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct HandStrength {
    pub category: Category,
    pub kicker_sum: u32,
}

/// The best hand found in seven cards.
///
/// Two evaluated hands with the same strength that aren't the same
/// hand are unordered, neither is `<`, `<=`, `>` or `>=` the other.
/// Such hands tie: compare [`EvaluatedHand::strength`] or use
/// [`EvaluatedHand::cmp_by`] for the total order a showdown uses.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EvaluatedHand {
    category: Category,
    cards: SevenCards,
    five_best: [Card; 5],
}

impl EvaluatedHand {
    pub fn category(&self) -> Category {
        self.category
    }

    /// The five cards that make the category. Made cards first.
    pub fn five_best(&self) -> &[Card; 5] {
        &self.five_best
    }

    /// All seven cards, highest first.
    pub fn cards(&self) -> &SevenCards {
        &self.cards
    }

    pub fn kicker_sum(&self) -> u32 {
        self.five_best
            .iter()
            .map(|c| u32::from(c.internal_rank()))
            .sum()
    }

    pub fn strength(&self) -> HandStrength {
        HandStrength {
            category: self.category,
            kicker_sum: self.kicker_sum(),
        }
    }

    /// Compare two hands with the given tie break rule.
    pub fn cmp_by(&self, other: &Self, rule: KickerRule) -> Ordering {
        match rule {
            KickerRule::RankSum => self.strength().cmp(&other.strength()),
            KickerRule::Lexicographic => self
                .category
                .cmp(&other.category)
                .then_with(|| self.ranks().cmp(&other.ranks())),
        }
    }

    fn ranks(&self) -> [u8; 5] {
        self.five_best.map(|c| c.internal_rank())
    }
}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.strength().cmp(&other.strength()) {
            Ordering::Equal if self != other => None,
            ord => Some(ord),
        }
    }
}

impl fmt::Display for EvaluatedHand {
    /// `Pair([AS, AD, 9H, 7D, 6D])`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.category)?;
        write_cards(f, &self.five_best)?;
        f.write_str(")")
    }
}

/// Can this be evaluated into a poker hand?
pub trait Rankable {
    /// Every category the cards qualify for, weakest first, with the
    /// five cards making each one. Never empty.
    fn qualifying(&self) -> Vec<(Category, [Card; 5])>;

    /// The best hand. Pure, calling it again gives the same answer.
    fn evaluate(&self) -> EvaluatedHand;
}

impl Rankable for SevenCards {
    fn qualifying(&self) -> Vec<(Category, [Card; 5])> {
        Category::ALL
            .iter()
            .filter_map(|c| c.five_best(self).map(|five| (*c, five)))
            .collect()
    }

    fn evaluate(&self) -> EvaluatedHand {
        // High card always qualifies so the fallback is never used.
        let (category, five_best) = self
            .qualifying()
            .into_iter()
            .max_by_key(|(c, _)| *c)
            .unwrap_or_else(|| (Category::HighCard, detect::top_five(self.cards())));
        tracing::event!(
            tracing::Level::TRACE,
            category = %category,
            cards = %self,
            five_best = ?five_best,
            "evaluated hand"
        );
        EvaluatedHand {
            category,
            cards: *self,
            five_best,
        }
    }
}

impl SevenCards {
    /// Evaluate without importing `Rankable`.
    ///
    /// ```
    /// use rs_showdown::core::{Category, SevenCards};
    ///
    /// let hand: SevenCards = "AD AS 3H 9H 6D 2D 7D".parse().unwrap();
    /// let best = hand.evaluate();
    /// assert_eq!(Category::Pair, best.category());
    /// assert_eq!("Pair([AS, AD, 9H, 7D, 6D])", best.to_string());
    /// ```
    pub fn evaluate(&self) -> EvaluatedHand {
        Rankable::evaluate(self)
    }
}
