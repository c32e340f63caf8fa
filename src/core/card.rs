use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::EvalError;

/// Card rank or value.
/// The discriminant is the internal rank: the face value - 2,
/// so the deuce is 0 and the ace is 12.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// 10
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values, weakest first.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck.
    pub const fn values() -> [Value; 13] {
        VALUES
    }

    /// The position of this value in the strength order.
    ///
    /// ```
    /// use rs_showdown::core::Value;
    ///
    /// assert_eq!(0, Value::Two.internal_rank());
    /// assert_eq!(12, Value::Ace.internal_rank());
    /// ```
    pub const fn internal_rank(self) -> u8 {
        self as u8
    }

    /// Take an internal rank and convert it to a value.
    /// Returns `None` for anything past the ace.
    pub fn from_internal_rank(rank: u8) -> Option<Value> {
        VALUES.get(usize::from(rank)).copied()
    }

    /// Parse the single character form of a value.
    /// Ten is written as `T` here since it's the only two character value.
    pub fn from_char(c: char) -> Option<Value> {
        match c.to_ascii_uppercase() {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }
}

impl FromStr for Value {
    type Err = EvalError;

    /// Accepts `2` through `10`, `J`, `Q`, `K`, `A` and `T`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "10" {
            return Ok(Value::Ten);
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Value::from_char(c).ok_or_else(|| EvalError::UnexpectedValue(s.to_string()))
            }
            _ => Err(EvalError::UnexpectedValue(s.to_string())),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Value::Two => "2",
            Value::Three => "3",
            Value::Four => "4",
            Value::Five => "5",
            Value::Six => "6",
            Value::Seven => "7",
            Value::Eight => "8",
            Value::Nine => "9",
            Value::Ten => "10",
            Value::Jack => "J",
            Value::Queen => "Q",
            Value::King => "K",
            Value::Ace => "A",
        };
        f.write_str(s)
    }
}

/// Enum for the four different suits.
/// Suits never take part in ranking so there's no ordering on them.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Suit {
    /// Hearts
    Heart = 0,
    /// Diamonds
    Diamond = 1,
    /// Clubs
    Club = 2,
    /// Spades
    Spade = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Parse a suit letter, `h`, `d`, `c` or `s` in either case.
    pub fn from_char(s: char) -> Option<Suit> {
        match s.to_ascii_lowercase() {
            'h' => Some(Suit::Heart),
            'd' => Some(Suit::Diamond),
            'c' => Some(Suit::Club),
            's' => Some(Suit::Spade),
            _ => None,
        }
    }

    /// Upper case letter used when rendering a card.
    pub fn to_char(self) -> char {
        match self {
            Suit::Heart => 'H',
            Suit::Diamond => 'D',
            Suit::Club => 'C',
            Suit::Spade => 'S',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// Equality needs both the value and the suit to match, ordering only
/// looks at the value. Two cards of the same value and different suits
/// are neither less nor greater than each other:
///
/// ```
/// use rs_showdown::core::{Card, Suit, Value};
///
/// let ah = Card::new(Value::Ace, Suit::Heart);
/// let ad = Card::new(Value::Ace, Suit::Diamond);
/// let kd = Card::new(Value::King, Suit::Diamond);
///
/// assert!(ah > kd);
/// assert!(ah != ad);
/// assert!(!(ah < ad) && !(ah > ad));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Shortcut for `self.value.internal_rank()`.
    pub const fn internal_rank(&self) -> u8 {
        self.value.internal_rank()
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.value.cmp(&other.value) {
            // Same value in another suit is not comparable. Keeps `==`
            // and `partial_cmp` agreeing.
            Ordering::Equal if self.suit != other.suit => None,
            ord => Some(ord),
        }
    }
}

impl FromStr for Card {
    type Err = EvalError;

    /// Parse strings like `AH`, `10c` or `Td`. The suit is always the
    /// last character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_char = s.chars().last().ok_or(EvalError::TooFewChars)?;
        let value_str = &s[..s.len() - suit_char.len_utf8()];
        if value_str.is_empty() {
            return Err(EvalError::TooFewChars);
        }
        let value = value_str.parse::<Value>()?;
        let suit =
            Suit::from_char(suit_char).ok_or_else(|| EvalError::UnexpectedSuit(suit_char.to_string()))?;
        Ok(Card { value, suit })
    }
}

impl fmt::Display for Card {
    /// Renders as value then suit, `AH`, `9D`, `10C`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}
