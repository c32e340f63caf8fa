use std::fmt;

/// A set of seats at a showdown, one bit per seat.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerBitSet {
    set: u32,
}

impl PlayerBitSet {
    pub fn count(&self) -> usize {
        self.set.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.set == 0
    }
    pub fn enable(&mut self, idx: usize) {
        self.set |= 1 << idx;
    }
    /// Iterate the enabled seats, lowest first.
    pub fn ones(self) -> ActivePlayerBitSetIter {
        ActivePlayerBitSetIter { set: self.set }
    }
}

impl fmt::Display for PlayerBitSet {
    /// Seats as a list, `{0, 3}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.ones()).finish()
    }
}

pub struct ActivePlayerBitSetIter {
    set: u32,
}

impl Iterator for ActivePlayerBitSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.set == 0 {
            None
        } else {
            let idx = self.set.trailing_zeros() as usize;
            // Clear the lowest set bit.
            self.set &= self.set - 1;
            Some(idx)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let s = PlayerBitSet::default();
        assert_eq!(0, s.count());
        assert!(s.is_empty());
        assert_eq!(None, s.ones().next());
    }

    #[test]
    fn test_enable_count() {
        let mut s = PlayerBitSet::default();
        s.enable(0);
        s.enable(0);
        assert_eq!(1, s.count());
        s.enable(22);
        assert_eq!(2, s.count());
        assert!(!s.is_empty());
    }

    #[test]
    fn test_ones_in_order() {
        let mut s = PlayerBitSet::default();
        for idx in [5, 1, 17] {
            s.enable(idx);
        }
        assert_eq!(vec![1, 5, 17], s.ones().collect::<Vec<_>>());
    }

    #[test]
    fn test_display() {
        let mut s = PlayerBitSet::default();
        s.enable(3);
        s.enable(0);
        assert_eq!("{0, 3}", s.to_string());
    }
}
