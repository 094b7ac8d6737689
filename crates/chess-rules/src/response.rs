//! Check-response filter.
//!
//! While a king stands in check from one piece, every other piece of its
//! color may only capture the checker or block the line between them. The
//! filter computes that set once per pass; the generators receive it as an
//! argument.

use chess_core::{PieceKind, Pos};
use tracing::trace;

use crate::{Board, MoveBuffer};

/// Squares a non-king piece may move to while its king is in check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restriction {
    squares: MoveBuffer,
}

impl Restriction {
    /// Computes the capture/block squares for the king at `king` checked by
    /// the piece at `attacker`.
    ///
    /// # Panics
    ///
    /// Panics if `attacker` is vacant, or if it is a sliding piece that does
    /// not share a row, column or diagonal with the king. Neither can happen
    /// for a check recorded by this engine.
    pub fn compute(board: &Board, king: Pos, attacker: Pos) -> Self {
        let mut squares = MoveBuffer::new();
        match board.piece(attacker).kind {
            PieceKind::Empty => panic!("checking piece at {attacker} is not a piece"),
            PieceKind::Knight | PieceKind::Pawn | PieceKind::King => squares.push(attacker),
            PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => {
                let step = king.direction_to(attacker).unwrap_or_else(|| {
                    panic!("checking piece at {attacker} is not aligned with king at {king}")
                });
                for pos in king.ray(step) {
                    squares.push(pos);
                    if pos == attacker {
                        break;
                    }
                }
            }
        }
        trace!(king = %king, attacker = %attacker, squares = ?squares, "restriction");
        Restriction { squares }
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.squares.contains(pos)
    }

    #[inline]
    pub fn squares(&self) -> &[Pos] {
        self.squares.as_slice()
    }
}
