//! A set of squares packed into a 64-bit mask.
//!
//! Bit 0 = a1, bit 1 = b1, ..., bit 63 = h8 (little-endian rank-file mapping).
//! Used as the result type of move generation; the board itself is a plain
//! 8x8 array (see [`Board`](crate::Board)).

use chess_core::Square;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(u64);

impl SquareSet {
    /// No squares.
    pub const EMPTY: SquareSet = SquareSet(0);

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of squares in the set.
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & sq.mask()) != 0
    }

    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= sq.mask();
    }

    /// Removes and returns the lowest square.
    #[inline]
    pub fn pop_first(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Square::from_index(idx)
    }

    #[inline]
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self)
    }

    /// Keeps only the squares for which `f` returns true.
    pub fn filter<F>(self, mut f: F) -> SquareSet
    where
        F: FnMut(Square) -> bool,
    {
        self.iter().filter(|&sq| f(sq)).collect()
    }
}

impl BitOr for SquareSet {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|sq| sq.to_algebraic())).finish()
    }
}

/// Iterator over the squares of a [`SquareSet`], a1 first.
pub struct SquareSetIter(SquareSet);

impl Iterator for SquareSetIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_first()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.len();
        (count, Some(count))
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        SquareSetIter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn insert_and_contains() {
        let mut set = SquareSet::EMPTY;
        assert!(set.is_empty());
        set.insert(sq("e4"));
        set.insert(sq("a1"));
        assert!(set.contains(sq("e4")));
        assert!(!set.contains(sq("e5")));
        assert_eq!(set.len(), 2);
        set.insert(sq("a1"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn iterates_in_index_order() {
        let set: SquareSet = [sq("h8"), sq("a1"), sq("c3")].into_iter().collect();
        let squares: Vec<Square> = set.iter().collect();
        assert_eq!(squares, vec![sq("a1"), sq("c3"), sq("h8")]);
    }

    #[test]
    fn filter_and_ops() {
        let set: SquareSet = [sq("e3"), sq("e4"), sq("d4")].into_iter().collect();
        let on_e = set.filter(|s| s.file_index() == 4);
        assert_eq!(on_e.len(), 2);
        assert!(on_e.contains(sq("e3")) && !on_e.contains(sq("d4")));
        assert_eq!((on_e | set).len(), 3);
    }

    #[test]
    fn debug_lists_coordinates() {
        let set: SquareSet = [sq("a3"), sq("c3")].into_iter().collect();
        assert_eq!(format!("{:?}", set), "{\"a3\", \"c3\"}");
    }
}
