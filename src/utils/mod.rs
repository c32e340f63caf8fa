/// Seats at a showdown as a bit set.
mod player_bit_set;
/// Export `PlayerBitSet`
pub use self::player_bit_set::{ActivePlayerBitSetIter, PlayerBitSet};
