//! Board coordinates and the step tables pieces move by.

use std::fmt;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// A (row, col) coordinate on the board, both in `0..8`.
///
/// Row 0 is the top row as the presentation layer draws it; which color
/// sits there depends on the board orientation. Out-of-range coordinates
/// cannot be represented, so indexing a board by `Pos` never goes out of
/// bounds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    row: u8,
    col: u8,
}

impl Pos {
    /// Creates a position, or `None` if either coordinate is off the board.
    #[inline]
    pub const fn new(row: i8, col: i8) -> Option<Self> {
        if in_bounds(row, col) {
            Some(Pos {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Creates a position from literal coordinates.
    ///
    /// # Panics
    /// Panics if either coordinate is 8 or more.
    #[inline]
    pub const fn at(row: u8, col: u8) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE, "position off the board");
        Pos { row, col }
    }

    /// Creates a position from a row-major index (0-63).
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 64 {
            Some(Pos {
                row: (index / 8) as u8,
                col: (index % 8) as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major index (0-63).
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Returns the square reached by stepping `offset` from here, if it is
    /// on the board.
    #[inline]
    pub const fn offset(self, offset: Offset) -> Option<Self> {
        Pos::new(self.row as i8 + offset.row, self.col as i8 + offset.col)
    }

    /// Iterates the squares along `step`, starting one step away and ending
    /// at the board edge.
    #[inline]
    pub fn ray(self, step: Offset) -> Ray {
        Ray {
            next: self.offset(step),
            step,
        }
    }

    /// Unit step from `self` toward `other` when both lie on one row,
    /// column or diagonal, or `None` otherwise (including `self == other`).
    pub fn direction_to(self, other: Pos) -> Option<Offset> {
        let dr = other.row as i8 - self.row as i8;
        let dc = other.col as i8 - self.col as i8;
        if (dr, dc) == (0, 0) {
            return None;
        }
        if dr == 0 || dc == 0 || dr.abs() == dc.abs() {
            Some(Offset::new(dr.signum(), dc.signum()))
        } else {
            None
        }
    }

    /// All 64 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..64).filter_map(Pos::from_index)
    }
}

/// Returns true if the signed coordinates fall on the board.
#[inline]
pub const fn in_bounds(row: i8, col: i8) -> bool {
    row >= 0 && row < BOARD_SIZE as i8 && col >= 0 && col < BOARD_SIZE as i8
}

impl fmt::Debug for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pos({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A (row-delta, col-delta) step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub row: i8,
    pub col: i8,
}

impl Offset {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Offset { row, col }
    }

    /// True for steps along a row or column.
    #[inline]
    pub const fn is_straight(self) -> bool {
        (self.row == 0) != (self.col == 0)
    }

    /// True for steps along a diagonal.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.row != 0 && self.col != 0 && self.row.abs() == self.col.abs()
    }
}

/// Rook rays: up, left, down, right.
pub const STRAIGHT_RAYS: [Offset; 4] = [
    Offset::new(-1, 0),
    Offset::new(0, -1),
    Offset::new(1, 0),
    Offset::new(0, 1),
];

/// Bishop rays: up-right, up-left, down-right, down-left.
pub const DIAGONAL_RAYS: [Offset; 4] = [
    Offset::new(-1, 1),
    Offset::new(-1, -1),
    Offset::new(1, 1),
    Offset::new(1, -1),
];

/// The eight unit rays a king's attackers can come from, in scan order.
pub const KING_RAYS: [Offset; 8] = [
    Offset::new(-1, 0),
    Offset::new(0, 1),
    Offset::new(1, 0),
    Offset::new(0, -1),
    Offset::new(-1, -1),
    Offset::new(-1, 1),
    Offset::new(1, 1),
    Offset::new(1, -1),
];

pub const KNIGHT_OFFSETS: [Offset; 8] = [
    Offset::new(2, -1),
    Offset::new(2, 1),
    Offset::new(1, -2),
    Offset::new(1, 2),
    Offset::new(-1, -2),
    Offset::new(-1, 2),
    Offset::new(-2, -1),
    Offset::new(-2, 1),
];

pub const KING_OFFSETS: [Offset; 8] = [
    Offset::new(1, -1),
    Offset::new(1, 0),
    Offset::new(1, 1),
    Offset::new(-1, -1),
    Offset::new(-1, 0),
    Offset::new(-1, 1),
    Offset::new(0, -1),
    Offset::new(0, 1),
];

/// Iterator over the squares along one ray. See [`Pos::ray`].
#[derive(Debug, Clone)]
pub struct Ray {
    next: Option<Pos>,
    step: Offset,
}

impl Iterator for Ray {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        let current = self.next?;
        self.next = current.offset(self.step);
        Some(current)
    }
}
