//! This is the core module. It exports the cards, the deck and the
//! seven card evaluator. Nothing in here knows about seats or tables.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// All the errors of the library.
mod error;
/// Export the error type.
pub use self::error::EvalError;

/// Code related to the seven cards in a hand.
mod hand;
/// Export the hand.
pub use self::hand::SevenCards;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// One detector per hand category.
pub mod detect;

/// Seven card hand ranking code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{Category, Detector, EvaluatedHand, HandStrength, KickerRule, Rankable};
