use std::fmt;
use std::iter::Peekable;
use std::slice::Iter;
use std::str::{Chars, FromStr};

use super::{Card, EvalError, Suit, Value};

/// The seven cards a player holds at showdown: two hole cards plus
/// the five community cards.
///
/// The cards are kept sorted strongest first. Cards of the same value
/// end up in the reverse of the order they were given in.
///
/// Duplicates are not checked here, drawing from a single `Deck` is what
/// guarantees there are none. Only the string parser checks for them.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SevenCards {
    cards: [Card; 7],
}

impl SevenCards {
    /// The one hand size the evaluator accepts.
    pub const SIZE: usize = 7;

    /// Create the set from exactly seven cards.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_showdown::core::{Card, EvalError, SevenCards, Suit, Value};
    ///
    /// let cards = vec![Card::new(Value::Ace, Suit::Club); 6];
    /// assert_eq!(Err(EvalError::InvalidHandSize(6)), SevenCards::new(cards));
    /// ```
    pub fn new<I: IntoIterator<Item = Card>>(cards: I) -> Result<Self, EvalError> {
        let cards: Vec<Card> = cards.into_iter().collect();
        let cards: [Card; 7] = cards
            .try_into()
            .map_err(|v: Vec<Card>| EvalError::InvalidHandSize(v.len()))?;
        Ok(cards.into())
    }

    /// Join a player's hole cards with the board.
    pub fn from_hole_and_board(hole: [Card; 2], board: &[Card]) -> Result<Self, EvalError> {
        Self::new(hole.into_iter().chain(board.iter().copied()))
    }

    /// The cards, highest value first.
    pub fn cards(&self) -> &[Card; 7] {
        &self.cards
    }

    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}

/// Sort strongest first. Stable ascending then reversed so that ties come
/// out in reverse input order.
fn sort_descending(cards: &mut [Card]) {
    cards.sort_by_key(|c| c.value);
    cards.reverse();
}

impl FromStr for SevenCards {
    type Err = EvalError;

    /// Parse seven cards. They can be run together (`ADAS3H9H6D2D7D`) or
    /// separated with spaces or commas (`AD, AS, 3H, 9H, 6D, 2D, 7D`).
    /// Brackets are skipped so the `Display` form parses too.
    fn from_str(hand_string: &str) -> Result<Self, Self::Err> {
        let mut chars = hand_string.chars().peekable();
        let mut cards: Vec<Card> = Vec::with_capacity(Self::SIZE);

        while let Some(c) = next_card(&mut chars)? {
            if cards.contains(&c) {
                return Err(EvalError::DuplicateCard(c));
            }
            cards.push(c);
        }

        Self::new(cards)
    }
}

/// Pull the next card out of the char stream, skipping separators.
fn next_card(chars: &mut Peekable<Chars<'_>>) -> Result<Option<Card>, EvalError> {
    while chars
        .next_if(|c| c.is_whitespace() || matches!(*c, ',' | '[' | ']'))
        .is_some()
    {}

    let Some(vc) = chars.next() else {
        return Ok(None);
    };
    let value = if vc == '1' {
        // The only two character value.
        match chars.next() {
            Some('0') => Value::Ten,
            Some(other) => return Err(EvalError::UnexpectedValue(format!("1{other}"))),
            None => return Err(EvalError::TooFewChars),
        }
    } else {
        Value::from_char(vc).ok_or_else(|| EvalError::UnexpectedValue(vc.to_string()))?
    };

    let sc = chars.next().ok_or(EvalError::TooFewChars)?;
    let suit = Suit::from_char(sc).ok_or_else(|| EvalError::UnexpectedSuit(sc.to_string()))?;

    Ok(Some(Card::new(value, suit)))
}

impl From<[Card; 7]> for SevenCards {
    fn from(mut cards: [Card; 7]) -> Self {
        sort_descending(&mut cards);
        Self { cards }
    }
}

impl TryFrom<Vec<Card>> for SevenCards {
    type Error = EvalError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::new(cards)
    }
}

impl TryFrom<&[Card]> for SevenCards {
    type Error = EvalError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Self::new(cards.iter().copied())
    }
}

impl<'a> IntoIterator for &'a SevenCards {
    type Item = &'a Card;
    type IntoIter = Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Write cards as `[AS, AD, 9H]`.
pub(crate) fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    f.write_str("[")?;
    for (i, c) in cards.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str("]")
}

impl fmt::Display for SevenCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.cards)
    }
}
