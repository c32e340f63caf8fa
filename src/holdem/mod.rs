/// Module for `Showdown`, the end of a holdem hand.
mod showdown;
/// Export `Showdown` and its result.
pub use self::showdown::{Showdown, ShowdownResult};
