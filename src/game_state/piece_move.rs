use std::fmt;

use crate::game_state::geometry::Square;

/// Minimal structural move used for legality computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceMove {
    pub start: Square,
    pub end: Square,
}

impl PieceMove {
    #[inline]
    pub const fn new(start: Square, end: Square) -> Self {
        Self { start, end }
    }

    /// Signed column distance from start to end.
    #[inline]
    pub fn column_delta(self) -> i8 {
        self.end.column().index() as i8 - self.start.column().index() as i8
    }

    /// Signed row distance from start to end.
    #[inline]
    pub fn row_delta(self) -> i8 {
        self.end.row().index() as i8 - self.start.row().index() as i8
    }
}

impl fmt::Display for PieceMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)
    }
}
