use thiserror::Error;

use super::Card;

/// This is the core error type for the
/// rs_showdown library. It uses `thiserror` to provide
/// readable error messages
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EvalError {
    #[error("Unable to parse value {0:?}, expected 2-10, J, Q, K or A")]
    UnexpectedValue(String),
    #[error("Unable to parse suit {0:?}, expected one of H, D, C or S")]
    UnexpectedSuit(String),
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Should be 7 cards but got {0}")]
    InvalidHandSize(usize),
    #[error("Card {0} is used more than once")]
    DuplicateCard(Card),
    #[error("Card {0} is not in the deck")]
    CardNotInDeck(Card),
    #[error("Position {position} is past the end of a deck holding {len} cards")]
    InvalidDeckPosition { position: usize, len: usize },
    #[error("There must be 5 community cards for a showdown, got {0}")]
    InvalidBoardSize(usize),
    #[error("A showdown needs at least one hand")]
    NoHands,
    #[error("A 52 card deck can't deal {0} hands")]
    TooManyPlayers(usize),
}
