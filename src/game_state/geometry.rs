//! Board coordinates.
//!
//! Squares are addressed by column (`a`..`h`, 0..=7) and row (`1`..`8`,
//! 0..=7), so `index == row * 8 + column` and `0 == a1`, `63 == h8`.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Column(u8);

impl Column {
    #[inline]
    pub const fn new(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Self(index))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'a'..='h' => Some(Self(ch as u8 - b'a')),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        char::from(b'a' + self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Row(u8);

impl Row {
    #[inline]
    pub const fn new(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Self(index))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '1'..='8' => Some(Self(ch as u8 - b'1')),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        char::from(b'1' + self.0)
    }
}

/// One of the 64 cells. Immutable value, equal by coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    column: Column,
    row: Row,
}

impl Square {
    #[inline]
    pub const fn new(column: Column, row: Row) -> Self {
        Self { column, row }
    }

    /// `None` when either index is outside `0..8`.
    #[inline]
    pub const fn from_indices(column: u8, row: u8) -> Option<Self> {
        match (Column::new(column), Row::new(row)) {
            (Some(column), Some(row)) => Some(Self { column, row }),
            _ => None,
        }
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        if index < 64 {
            Self::from_indices((index % 8) as u8, (index / 8) as u8)
        } else {
            None
        }
    }

    #[inline]
    pub const fn column(self) -> Column {
        self.column
    }

    #[inline]
    pub const fn row(self) -> Row {
        self.row
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.row.0 as usize * 8 + self.column.0 as usize
    }

    /// Offsets this square, returning `None` when the target falls off the
    /// 8x8 grid.
    pub fn add_direction(self, direction: Direction) -> Option<Square> {
        let column = self.column.0 as i8 + direction.d_column;
        let row = self.row.0 as i8 + direction.d_row;
        if !(0..8).contains(&column) || !(0..8).contains(&row) {
            return None;
        }
        Self::from_indices(column as u8, row as u8)
    }

    /// All squares from a1 to h8, row by row.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column.to_char(), self.row.to_char())
    }
}

impl FromStr for Square {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(c), Some(r), None) => match (Column::from_char(c), Row::from_char(r)) {
                (Some(column), Some(row)) => Ok(Square::new(column, row)),
                _ => Err(InputError::InvalidSquare(s.to_owned())),
            },
            _ => Err(InputError::InvalidSquare(s.to_owned())),
        }
    }
}

/// Column/row offset applied additively to a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub d_column: i8,
    pub d_row: i8,
}

impl Direction {
    #[inline]
    pub const fn new(d_column: i8, d_row: i8) -> Self {
        Self { d_column, d_row }
    }
}

pub const ORTHOGONAL_DIRECTIONS: [Direction; 4] = [
    Direction::new(0, 1),
    Direction::new(0, -1),
    Direction::new(1, 0),
    Direction::new(-1, 0),
];

pub const DIAGONAL_DIRECTIONS: [Direction; 4] = [
    Direction::new(1, 1),
    Direction::new(1, -1),
    Direction::new(-1, 1),
    Direction::new(-1, -1),
];

pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::new(0, 1),
    Direction::new(0, -1),
    Direction::new(1, 0),
    Direction::new(-1, 0),
    Direction::new(1, 1),
    Direction::new(1, -1),
    Direction::new(-1, 1),
    Direction::new(-1, -1),
];

pub const KNIGHT_JUMPS: [Direction; 8] = [
    Direction::new(1, 2),
    Direction::new(2, 1),
    Direction::new(2, -1),
    Direction::new(1, -2),
    Direction::new(-1, -2),
    Direction::new(-2, -1),
    Direction::new(-2, 1),
    Direction::new(-1, 2),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_parse_and_print() {
        let e4: Square = "e4".parse().expect("e4 should parse");
        assert_eq!(e4.column().index(), 4);
        assert_eq!(e4.row().index(), 3);
        assert_eq!(e4.index(), 28);
        assert_eq!(e4.to_string(), "e4");

        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
        assert!("a1b".parse::<Square>().is_err());
    }

    #[test]
    fn add_direction_rejects_off_board_targets() {
        let h8: Square = "h8".parse().expect("h8 should parse");
        assert_eq!(h8.add_direction(Direction::new(1, 0)), None);
        assert_eq!(h8.add_direction(Direction::new(0, 1)), None);
        assert_eq!(
            h8.add_direction(Direction::new(-1, -2)),
            Some("g6".parse().expect("g6 should parse"))
        );
    }

    #[test]
    fn knight_on_d4_has_eight_targets_and_corner_has_two() {
        let d4: Square = "d4".parse().expect("d4 should parse");
        let a1: Square = "a1".parse().expect("a1 should parse");
        let count = |sq: Square| KNIGHT_JUMPS.iter().filter_map(|d| sq.add_direction(*d)).count();
        assert_eq!(count(d4), 8);
        assert_eq!(count(a1), 2);
    }

    #[test]
    fn all_squares_are_ordered_by_index() {
        let all: Vec<Square> = Square::all().collect();
        assert_eq!(all.len(), 64);
        assert!(all.iter().enumerate().all(|(i, sq)| sq.index() == i));
    }
}
