use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::BoardError;

static ALGEBRAIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-hA-H])([1-8])$").expect("ALGEBRAIC_RE regex should be valid")
});

/// A (rank, file) coordinate. Both components are signed so that stepping off
/// the edge of the board yields a representable square that simply answers
/// `false` to `in_bounds`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Square {
    rank: i8,
    file: i8,
}

impl Square {
    pub const fn new(rank: i8, file: i8) -> Self {
        Self { rank, file }
    }

    pub fn rank(&self) -> i8 {
        self.rank
    }

    pub fn file(&self) -> i8 {
        self.file
    }

    pub fn in_bounds(&self) -> bool {
        (0..8).contains(&self.rank) && (0..8).contains(&self.file)
    }

    pub fn offset(&self, rank_delta: i8, file_delta: i8) -> Self {
        Self::new(self.rank + rank_delta, self.file + file_delta)
    }

    /// Grid indices for an in-bounds square.
    pub(crate) fn index(&self) -> Option<(usize, usize)> {
        if self.in_bounds() {
            Some((self.rank as usize, self.file as usize))
        } else {
            None
        }
    }

    pub fn from_algebraic(algebraic_coord: &str) -> Result<Self, BoardError> {
        let caps = ALGEBRAIC_RE
            .captures(algebraic_coord)
            .ok_or_else(|| BoardError::InvalidAlgebraicSquare {
                input: algebraic_coord.to_string(),
            })?;

        let file = caps[1].to_ascii_lowercase().as_bytes()[0] - b'a';
        let rank = caps[2].as_bytes()[0] - b'1';

        Ok(Self::new(rank as i8, file as i8))
    }

    pub fn to_algebraic(&self) -> String {
        if !self.in_bounds() {
            return format!("({},{})", self.rank, self.file);
        }
        format!(
            "{}{}",
            (b'a' + self.file as u8) as char,
            (b'1' + self.rank as u8) as char
        )
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl FromStr for Square {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s)
    }
}

/// Every square on the board, rank by rank starting from a1.
pub fn all() -> impl Iterator<Item = Square> {
    (0..8).flat_map(|rank| (0..8).map(move |file| Square::new(rank, file)))
}

pub const A1: Square = Square::new(0, 0);
pub const B1: Square = Square::new(0, 1);
pub const C1: Square = Square::new(0, 2);
pub const D1: Square = Square::new(0, 3);
pub const E1: Square = Square::new(0, 4);
pub const F1: Square = Square::new(0, 5);
pub const G1: Square = Square::new(0, 6);
pub const H1: Square = Square::new(0, 7);
pub const A2: Square = Square::new(1, 0);
pub const B2: Square = Square::new(1, 1);
pub const C2: Square = Square::new(1, 2);
pub const D2: Square = Square::new(1, 3);
pub const E2: Square = Square::new(1, 4);
pub const F2: Square = Square::new(1, 5);
pub const G2: Square = Square::new(1, 6);
pub const H2: Square = Square::new(1, 7);
pub const A3: Square = Square::new(2, 0);
pub const B3: Square = Square::new(2, 1);
pub const C3: Square = Square::new(2, 2);
pub const D3: Square = Square::new(2, 3);
pub const E3: Square = Square::new(2, 4);
pub const F3: Square = Square::new(2, 5);
pub const G3: Square = Square::new(2, 6);
pub const H3: Square = Square::new(2, 7);
pub const A4: Square = Square::new(3, 0);
pub const B4: Square = Square::new(3, 1);
pub const C4: Square = Square::new(3, 2);
pub const D4: Square = Square::new(3, 3);
pub const E4: Square = Square::new(3, 4);
pub const F4: Square = Square::new(3, 5);
pub const G4: Square = Square::new(3, 6);
pub const H4: Square = Square::new(3, 7);
pub const A5: Square = Square::new(4, 0);
pub const B5: Square = Square::new(4, 1);
pub const C5: Square = Square::new(4, 2);
pub const D5: Square = Square::new(4, 3);
pub const E5: Square = Square::new(4, 4);
pub const F5: Square = Square::new(4, 5);
pub const G5: Square = Square::new(4, 6);
pub const H5: Square = Square::new(4, 7);
pub const A6: Square = Square::new(5, 0);
pub const B6: Square = Square::new(5, 1);
pub const C6: Square = Square::new(5, 2);
pub const D6: Square = Square::new(5, 3);
pub const E6: Square = Square::new(5, 4);
pub const F6: Square = Square::new(5, 5);
pub const G6: Square = Square::new(5, 6);
pub const H6: Square = Square::new(5, 7);
pub const A7: Square = Square::new(6, 0);
pub const B7: Square = Square::new(6, 1);
pub const C7: Square = Square::new(6, 2);
pub const D7: Square = Square::new(6, 3);
pub const E7: Square = Square::new(6, 4);
pub const F7: Square = Square::new(6, 5);
pub const G7: Square = Square::new(6, 6);
pub const H7: Square = Square::new(6, 7);
pub const A8: Square = Square::new(7, 0);
pub const B8: Square = Square::new(7, 1);
pub const C8: Square = Square::new(7, 2);
pub const D8: Square = Square::new(7, 3);
pub const E8: Square = Square::new(7, 4);
pub const F8: Square = Square::new(7, 5);
pub const G8: Square = Square::new(7, 6);
pub const H8: Square = Square::new(7, 7);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_squares() {
        assert_eq!(A1, Square::new(0, 0));
        assert_eq!(B2, Square::new(1, 1));
        assert_eq!(E4, Square::new(3, 4));
        assert_eq!(H8, Square::new(7, 7));
    }

    #[test]
    fn test_from_algebraic() {
        assert_eq!(A1, Square::from_algebraic("a1").unwrap());
        assert_eq!(A1, Square::from_algebraic("A1").unwrap());
        assert_eq!(E5, Square::from_algebraic("e5").unwrap());
        assert!(Square::from_algebraic("i9").is_err());
        assert!(Square::from_algebraic("e").is_err());
    }

    #[test]
    fn test_to_algebraic() {
        assert_eq!("a1", A1.to_algebraic());
        assert_eq!("e4", E4.to_algebraic());
        assert_eq!("h8", H8.to_algebraic());
    }

    #[test]
    fn test_offset_can_leave_the_board() {
        let off_board = A1.offset(-1, 0);
        assert!(!off_board.in_bounds());
        assert_eq!(off_board.index(), None);
        assert!(H8.offset(0, 1).index().is_none());
        assert_eq!(E2.offset(2, 0), E4);
    }

    #[test]
    fn test_all_visits_each_square_once() {
        let squares: Vec<Square> = all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], A1);
        assert_eq!(squares[8], A2);
        assert_eq!(squares[63], H8);
    }
}
