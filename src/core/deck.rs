use crate::core::card::{Card, Suit, Value};
use crate::core::EvalError;
use std::slice::Iter;
use std::vec::IntoIter;

use rand::Rng;
use rand::seq::SliceRandom;

/// `Deck` is the normal 52 card deck.
///
/// Cards are dealt from the top, which is the end of the
/// underlying vector. There's no shuffling unless asked for.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Card storage.
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Create the ordered 52 card deck
    ///
    /// ```
    /// use rs_showdown::core::Deck;
    ///
    /// assert_eq!(52, Deck::new().len());
    /// ```
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(Self::SIZE);
        for v in Value::values() {
            for s in Suit::suits() {
                cards.push(Card::new(v, s));
            }
        }
        Self { cards }
    }

    /// Create a full deck and shuffle it with the given rng.
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Randomly shuffle the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng)
    }

    /// Deal a card if there is one there to deal.
    /// None if the deck is empty
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Take a specific card out of the deck wherever it is.
    ///
    /// ```
    /// use rs_showdown::core::{Card, Deck, Suit, Value};
    ///
    /// let mut deck = Deck::new();
    /// let five = Card::new(Value::Five, Suit::Spade);
    ///
    /// assert_eq!(Ok(five), deck.take(five));
    /// assert_eq!(51, deck.len());
    /// assert!(deck.take(five).is_err());
    /// ```
    pub fn take(&mut self, card: Card) -> Result<Card, EvalError> {
        let idx = self.position_of(card)?;
        Ok(self.cards.remove(idx))
    }

    /// Move a card so that it's the `position`-th card dealt from now on,
    /// 0 being the next card. Used to rig a deck for a known outcome.
    ///
    /// ```
    /// use rs_showdown::core::{Card, Deck, Suit, Value};
    ///
    /// let mut deck = Deck::new();
    /// let ace = Card::new(Value::Ace, Suit::Heart);
    /// let deuce = Card::new(Value::Two, Suit::Club);
    ///
    /// deck.place(0, ace).unwrap();
    /// deck.place(1, deuce).unwrap();
    ///
    /// assert_eq!(Some(ace), deck.deal());
    /// assert_eq!(Some(deuce), deck.deal());
    /// ```
    pub fn place(&mut self, position: usize, card: Card) -> Result<(), EvalError> {
        let idx = self.position_of(card)?;
        let len = self.cards.len();
        if position >= len {
            return Err(EvalError::InvalidDeckPosition { position, len });
        }
        let card = self.cards.remove(idx);
        // Inserting at len - 1 puts the card back on top.
        self.cards.insert(len - 1 - position, card);
        Ok(())
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate the cards, bottom of the deck first.
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }

    fn position_of(&self, card: Card) -> Result<usize, EvalError> {
        self.cards
            .iter()
            .position(|c| *c == card)
            .ok_or(EvalError::CardNotInDeck(card))
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Card>> for Deck {
    /// The last card of the vector is dealt first.
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = IntoIter<Card>;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> IntoIter<Card> {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    #[test]
    fn test_full_deck_is_unique() {
        let d = Deck::new();
        let unique: HashSet<Card> = d.iter().copied().collect();
        assert_eq!(Deck::SIZE, unique.len());
    }

    #[test]
    fn test_contains_in() {
        let d = Deck::new();
        assert!(d.contains(&Card::new(Value::Eight, Suit::Heart)));
    }

    #[test]
    fn test_take() {
        let mut d = Deck::new();
        let c = Card::new(Value::Ace, Suit::Heart);
        assert!(d.contains(&c));
        assert_eq!(Ok(c), d.take(c));
        assert!(!d.contains(&c));
        assert_eq!(Err(EvalError::CardNotInDeck(c)), d.take(c));
        assert_eq!(51, d.len());
    }

    #[test]
    fn test_deal_all() {
        let mut d = Deck::new();
        let mut seen = HashSet::new();
        while let Some(c) = d.deal() {
            assert!(seen.insert(c));
        }
        assert!(d.is_empty());
        assert_eq!(Deck::SIZE, seen.len());
        assert_eq!(None, d.deal());
    }

    #[test]
    fn test_shuffle_rng() {
        let mut rng_one = StdRng::seed_from_u64(420);
        let mut rng_two = StdRng::seed_from_u64(420);

        let d_one = Deck::shuffled(&mut rng_one);
        let d_two = Deck::shuffled(&mut rng_two);

        assert_eq!(d_one, d_two);
        assert_ne!(Deck::new(), d_one);
        assert_eq!(Deck::SIZE, d_one.len());
    }

    #[test]
    fn test_place_top_and_bottom() {
        let mut d = Deck::new();
        let top = Card::new(Value::Two, Suit::Heart);
        let bottom = Card::new(Value::Ace, Suit::Spade);

        d.place(0, top).unwrap();
        d.place(51, bottom).unwrap();

        assert_eq!(Deck::SIZE, d.len());
        assert_eq!(Some(&bottom), d.iter().next());
        assert_eq!(Some(top), d.deal());
    }

    #[test]
    fn test_place_errors() {
        let mut d = Deck::new();
        let c = Card::new(Value::Nine, Suit::Club);
        assert_eq!(
            Err(EvalError::InvalidDeckPosition {
                position: 52,
                len: 52
            }),
            d.place(52, c)
        );
        assert_eq!(
            "Position 52 is past the end of a deck holding 52 cards",
            d.place(52, c).unwrap_err().to_string()
        );
        // A failed place leaves the card where it was.
        assert!(d.contains(&c));

        d.take(c).unwrap();
        assert_eq!(Err(EvalError::CardNotInDeck(c)), d.place(0, c));
    }

    #[test]
    fn test_from_vec() {
        let c = Card::new(Value::Nine, Suit::Heart);
        let mut d: Deck = vec![c].into();

        assert_eq!(1, d.len());
        assert_eq!(Some(c), d.deal());
        assert!(d.is_empty());
    }
}
