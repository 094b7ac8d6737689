//! The board model: squares, attack flags and the standard setup.

use std::fmt;
use std::ops::Index;

use chess_core::{Color, PieceKind, Pos};
use serde::{Deserialize, Serialize};

use crate::Piece;

/// Which color's home rows are drawn at the top of the board (row 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// White's back rank is row 0; its pawns advance toward row 7.
    #[default]
    WhiteTop,
    /// White's back rank is row 7; its pawns advance toward row 0.
    WhiteBottom,
}

impl Orientation {
    /// Row holding `color`'s back rank.
    #[inline]
    pub const fn back_row(self, color: Color) -> u8 {
        match (self, color) {
            (Orientation::WhiteTop, Color::White) | (Orientation::WhiteBottom, Color::Black) => 0,
            _ => 7,
        }
    }

    /// Row `color`'s pawns start on.
    #[inline]
    pub const fn pawn_row(self, color: Color) -> u8 {
        if self.back_row(color) == 0 {
            1
        } else {
            6
        }
    }

    /// Row delta of a single pawn push for `color`.
    #[inline]
    pub const fn pawn_direction(self, color: Color) -> i8 {
        if self.back_row(color) == 0 {
            1
        } else {
            -1
        }
    }
}

/// One cell of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    piece: Piece,
    shade: Color,
    attacked: [bool; 2],
}

impl Square {
    fn new(pos: Pos) -> Self {
        let shade = if (pos.row() + pos.col()) % 2 == 0 {
            Color::White
        } else {
            Color::Black
        };
        Square {
            piece: Piece::empty(pos),
            shade,
            attacked: [false; 2],
        }
    }

    #[inline]
    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    #[inline]
    pub(crate) fn piece_mut(&mut self) -> &mut Piece {
        &mut self.piece
    }

    /// Background color of the square; fixed for the life of the board.
    #[inline]
    pub fn shade(&self) -> Color {
        self.shade
    }

    /// True if a piece of `color` could move onto this (empty) square.
    /// Only meaningful right after a full recomputation.
    #[inline]
    pub fn is_attacked_by(&self, color: Color) -> bool {
        self.attacked[color.index()]
    }

    #[inline]
    pub(crate) fn mark_attacked(&mut self, color: Color) {
        self.attacked[color.index()] = true;
    }

    fn clear_flags(&mut self) {
        self.attacked = [false; 2];
        self.piece.set_protected(false);
    }
}

/// The 8x8 grid of squares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Square; 8]; 8],
    orientation: Orientation,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Builds the standard starting position for `orientation`.
pub fn init_board(orientation: Orientation) -> Board {
    let mut board = Board::empty(orientation);
    for color in Color::ALL {
        let back = orientation.back_row(color);
        let pawns = orientation.pawn_row(color);
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            board.place(Pos::at(back, col as u8), kind, color);
            board.place(Pos::at(pawns, col as u8), PieceKind::Pawn, color);
        }
    }
    board
}

impl Board {
    /// A board with every square vacant.
    pub fn empty(orientation: Orientation) -> Self {
        Board {
            squares: std::array::from_fn(|row| {
                std::array::from_fn(|col| Square::new(Pos::at(row as u8, col as u8)))
            }),
            orientation,
        }
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Puts a fresh, unmoved piece on `pos`, replacing whatever stood there.
    pub fn place(&mut self, pos: Pos, kind: PieceKind, color: Color) -> &mut Piece {
        let piece = self.piece_mut(pos);
        *piece = Piece::new(kind, color, pos);
        piece
    }

    /// Vacates `pos`.
    pub fn clear(&mut self, pos: Pos) {
        self.piece_mut(pos).vacate();
    }

    #[inline]
    pub fn piece(&self, pos: Pos) -> &Piece {
        self[pos].piece()
    }

    #[inline]
    pub(crate) fn piece_mut(&mut self, pos: Pos) -> &mut Piece {
        self.square_mut(pos).piece_mut()
    }

    #[inline]
    pub(crate) fn square_mut(&mut self, pos: Pos) -> &mut Square {
        &mut self.squares[pos.row() as usize][pos.col() as usize]
    }

    /// Position of the first `color` piece of `kind`, scanning row-major.
    pub fn find_piece(&self, kind: PieceKind, color: Color) -> Option<Pos> {
        Pos::all().find(|&pos| self.piece(pos).is(kind, color))
    }

    /// True if (row, col) is on the board and vacant.
    pub fn is_empty(&self, row: i8, col: i8) -> bool {
        Pos::new(row, col).is_some_and(|pos| self.piece(pos).is_empty())
    }

    /// True if (row, col) is on the board and holds a piece `color` could
    /// capture. Says nothing about whether the capture is a legal move.
    pub fn can_capture(&self, color: Color, row: i8, col: i8) -> bool {
        Pos::new(row, col).is_some_and(|pos| self.piece(pos).is_enemy_of(color))
    }

    /// Iterates every square with its position, row-major.
    pub fn squares(&self) -> impl Iterator<Item = (Pos, &Square)> {
        Pos::all().map(move |pos| (pos, &self[pos]))
    }

    /// Resets attack flags on every square and protection on every piece.
    pub(crate) fn clear_flags(&mut self) {
        for row in self.squares.iter_mut() {
            for square in row.iter_mut() {
                square.clear_flags();
            }
        }
    }
}

impl Index<Pos> for Board {
    type Output = Square;

    #[inline]
    fn index(&self, pos: Pos) -> &Square {
        &self.squares[pos.row() as usize][pos.col() as usize]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.squares {
            for square in row {
                let piece = square.piece();
                write!(f, "{}", piece.kind.symbol(piece.color))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
