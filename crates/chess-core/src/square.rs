//! Board square representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when parsing coordinate text such as `"e4"`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SquareError {
    #[error("invalid square '{0}': expected two characters like \"e4\"")]
    InvalidLength(String),

    #[error("invalid file '{0}': expected 'a'-'h'")]
    InvalidFile(char),

    #[error("invalid rank '{0}': expected '1'-'8'")]
    InvalidRank(char),
}

/// A file (column) on the chess board, from A to H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// All files in order.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Creates a file from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Creates a file from a character ('a'-'h' or 'A'-'H').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        let c = c.to_ascii_lowercase();
        if c >= 'a' && c <= 'h' {
            Self::from_index(c as u8 - b'a')
        } else {
            None
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A rank (row) on the chess board, from 1 to 8.
///
/// Rank 1 is White's back row, rank 8 is Black's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    /// All ranks in order.
    pub const ALL: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    /// Creates a rank from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Creates a rank from a character ('1'-'8').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        if c >= '1' && c <= '8' {
            Self::from_index(c as u8 - b'1')
        } else {
            None
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A square on the chess board, indexed 0-63.
///
/// Squares are indexed in little-endian rank-file mapping:
/// - a1 = 0, b1 = 1, ..., h1 = 7
/// - a2 = 8, ..., h8 = 63
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square(u8);

impl Square {
    /// Creates a square from file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Square(rank.index() * 8 + file.index())
    }

    /// Creates a square from raw (rank, file) coordinates.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside 0..=7. Out-of-range coordinates
    /// are a caller bug, not a recoverable condition.
    #[inline]
    pub const fn from_coords(rank: u8, file: u8) -> Self {
        assert!(rank < 8 && file < 8, "square coordinates out of range");
        Square(rank * 8 + file)
    }

    /// Creates a square from signed coordinates, or `None` if off the board.
    #[inline]
    pub const fn try_from_coords(rank: i8, file: i8) -> Option<Self> {
        if rank >= 0 && rank < 8 && file >= 0 && file < 8 {
            Some(Square(rank as u8 * 8 + file as u8))
        } else {
            None
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = match File::from_char(bytes[0] as char) {
            Some(f) => f,
            None => return None,
        };
        let rank = match Rank::from_char(bytes[1] as char) {
            Some(r) => r,
            None => return None,
        };
        Some(Square::new(file, rank))
    }

    /// Iterates over all 64 squares, a1 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the rank index (0-7).
    #[inline]
    pub const fn rank_index(self) -> u8 {
        self.0 / 8
    }

    /// Returns the file index (0-7).
    #[inline]
    pub const fn file_index(self) -> u8 {
        self.0 % 8
    }

    /// Returns the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 % 8) as usize]
    }

    /// Returns the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 / 8) as usize]
    }

    /// Returns the square `dr` ranks and `df` files away, if it is on the board.
    #[inline]
    pub const fn offset(self, dr: i8, df: i8) -> Option<Square> {
        Self::try_from_coords(self.rank_index() as i8 + dr, self.file_index() as i8 + df)
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file(), self.rank())
    }

    /// Returns a 64-bit mask with only this square set.
    #[inline]
    pub const fn mask(self) -> u64 {
        1u64 << self.0
    }

    // Common squares
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SquareError::InvalidLength(s.to_string()));
        };
        let file = File::from_char(f).ok_or(SquareError::InvalidFile(f))?;
        let rank = Rank::from_char(r).ok_or(SquareError::InvalidRank(r))?;
        Ok(Square::new(file, rank))
    }
}

impl TryFrom<String> for Square {
    type Error = SquareError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> Self {
        sq.to_algebraic()
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn square_new() {
        let e4 = Square::new(File::E, Rank::R4);
        assert_eq!(e4.file(), File::E);
        assert_eq!(e4.rank(), Rank::R4);
        assert_eq!(e4.index(), 28);
        assert_eq!(Square::from_coords(3, 4), e4);
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("a1"), Some(Square::A1));
        assert_eq!(
            Square::from_algebraic("e4"),
            Some(Square::new(File::E, Rank::R4))
        );
        assert_eq!(Square::from_algebraic("h8"), Some(Square::H8));
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic(""), None);
    }

    #[test]
    fn square_from_str_errors() {
        assert_eq!("e2".parse::<Square>(), Ok(Square::new(File::E, Rank::R2)));
        assert_eq!(
            "e".parse::<Square>(),
            Err(SquareError::InvalidLength("e".to_string()))
        );
        assert_eq!("z2".parse::<Square>(), Err(SquareError::InvalidFile('z')));
        assert_eq!("e0".parse::<Square>(), Err(SquareError::InvalidRank('0')));
    }

    #[test]
    fn square_to_algebraic() {
        assert_eq!(Square::A1.to_algebraic(), "a1");
        assert_eq!(Square::H8.to_algebraic(), "h8");
        assert_eq!(Square::new(File::E, Rank::R4).to_algebraic(), "e4");
    }

    #[test]
    fn square_offset() {
        assert_eq!(Square::A1.offset(1, 1), Square::from_algebraic("b2"));
        assert_eq!(Square::A1.offset(-1, 0), None);
        assert_eq!(Square::H8.offset(0, 1), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn from_coords_out_of_range_panics() {
        let _ = Square::from_coords(8, 0);
    }

    #[test]
    fn all_squares() {
        assert_eq!(Square::all().count(), 64);
        assert_eq!(Square::all().next(), Some(Square::A1));
    }

    #[test]
    fn serde_as_text() {
        let json = serde_json::to_string(&Square::E1).unwrap();
        assert_eq!(json, "\"e1\"");
        let back: Square = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Square::E1);
        assert!(serde_json::from_str::<Square>("\"k9\"").is_err());
    }

    proptest! {
        #[test]
        fn text_form_parses_back(index in 0u8..64) {
            let sq = Square::from_index(index).unwrap();
            prop_assert_eq!(sq.to_algebraic().parse::<Square>(), Ok(sq));
        }
    }
}
