//! rs_showdown is a seven card poker hand evaluator.
//!
//! Given a player's two hole cards and the five community cards it finds
//! the best five card hand in one of ten categories and orders it against
//! the other players' hands.
//!
//! ```
//! use rs_showdown::core::{Category, SevenCards};
//!
//! let royal: SevenCards = "AD KD QD JD 10D 2S 7S".parse().unwrap();
//! let pair: SevenCards = "AD AS 3H 9H 6D 2D 7D".parse().unwrap();
//!
//! assert_eq!(Category::RoyalFlush, royal.evaluate().category());
//! assert!(royal.evaluate() > pair.evaluate());
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to poker style.
pub mod core;
/// Holdem specific code, the showdown between seats.
pub mod holdem;
/// Small helpers shared by the rest of the crate.
pub mod utils;
