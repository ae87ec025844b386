use std::fmt;
use std::str::FromStr;

use crate::errors::{ChessError, ChessResult};
use crate::utils::algebraic::{algebraic_to_coordinate, coordinate_to_algebraic};

/// A board square addressed by rank and file, both in `1..=8` when valid.
///
/// Construction never fails; out-of-range values are representable so that
/// callers can hand arbitrary input to the rule queries, which fail closed on
/// anything for which `is_valid` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    rank: i8,
    file: i8,
}

impl Coordinate {
    #[inline]
    pub const fn new(rank: i8, file: i8) -> Self {
        Self { rank, file }
    }

    /// Like `new`, but rejects squares off the board.
    pub fn try_new(rank: i8, file: i8) -> ChessResult<Self> {
        let coordinate = Self::new(rank, file);
        if coordinate.is_valid() {
            Ok(coordinate)
        } else {
            Err(ChessError::InvalidFileOrRank { rank, file })
        }
    }

    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.rank >= 1 && self.rank <= 8 && self.file >= 1 && self.file <= 8
    }

    /// Square displaced by `(d_rank, d_file)`, or `None` when it leaves the
    /// board. An off-board origin has no neighbours.
    #[inline]
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Self> {
        if !self.is_valid() {
            return None;
        }
        let moved = Self::new(self.rank.checked_add(d_rank)?, self.file.checked_add(d_file)?);
        moved.is_valid().then_some(moved)
    }

    /// Zero-based `(row, column)` into the grid. Only meaningful when valid.
    #[inline]
    pub(crate) const fn grid_index(self) -> (usize, usize) {
        ((self.rank - 1) as usize, (self.file - 1) as usize)
    }

    /// Light squares are those where rank + file is odd (h1 is light).
    /// Off-board coordinates are never light.
    #[inline]
    pub const fn is_light_square(self) -> bool {
        self.is_valid() && (self.rank + self.file) % 2 == 1
    }

    /// Every valid square, rank 1 first, files a..h within each rank.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (1..=8).flat_map(|rank| (1..=8).map(move |file| Coordinate::new(rank, file)))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match coordinate_to_algebraic(*self) {
            Ok(name) => f.write_str(&name),
            Err(_) => write!(f, "({},{})", self.rank, self.file),
        }
    }
}

impl FromStr for Coordinate {
    type Err = ChessError;

    fn from_str(square: &str) -> Result<Self, Self::Err> {
        algebraic_to_coordinate(square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_covers_exactly_the_eight_by_eight_domain() {
        assert!(Coordinate::new(1, 1).is_valid());
        assert!(Coordinate::new(8, 8).is_valid());
        assert!(!Coordinate::new(0, 4).is_valid());
        assert!(!Coordinate::new(4, 9).is_valid());
        assert!(!Coordinate::new(-1, -1).is_valid());
        assert_eq!(Coordinate::all().count(), 64);
        assert!(Coordinate::try_new(9, 1).is_err());
    }

    #[test]
    fn offset_stops_at_the_edge() {
        let a1 = Coordinate::new(1, 1);
        assert_eq!(a1.offset(1, 2), Some(Coordinate::new(2, 3)));
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
    }

    #[test]
    fn extreme_coordinates_fail_closed() {
        assert_eq!(Coordinate::new(i8::MAX, 1).offset(1, 0), None);
        assert_eq!(Coordinate::new(1, i8::MIN).offset(0, -1), None);
        assert_eq!(Coordinate::new(i8::MAX, 1).offset(-120, 0), None);
        assert!(!Coordinate::new(i8::MAX, i8::MAX).is_light_square());
        assert!(!Coordinate::new(0, 1).is_light_square());
    }

    #[test]
    fn algebraic_text_conversions() {
        let e4: Coordinate = "e4".parse().expect("e4 should parse");
        assert_eq!(e4, Coordinate::new(4, 5));
        assert_eq!(e4.to_string(), "e4");
        assert_eq!("h8".parse::<Coordinate>().expect("h8 should parse"), Coordinate::new(8, 8));
        assert!("i1".parse::<Coordinate>().is_err());
        assert!("a0".parse::<Coordinate>().is_err());
        assert!("a10".parse::<Coordinate>().is_err());
    }

    #[test]
    fn square_colours_alternate() {
        assert!(!Coordinate::new(1, 1).is_light_square());
        assert!(Coordinate::new(1, 8).is_light_square());
    }
}
