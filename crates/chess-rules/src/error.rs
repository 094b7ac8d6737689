//! Recoverable errors reported to players and callers.

use chess_core::{Color, Pos};
use thiserror::Error;

/// Why a requested move was refused. The game state is unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// There is no piece on the origin square.
    #[error("No piece on {0}")]
    EmptySquare(Pos),
    /// Turn order is enforced and the piece belongs to the other side.
    #[error("{color} cannot move on {turn}'s turn")]
    NotYourTurn { color: Color, turn: Color },
    /// The destination is not among the piece's current moves.
    #[error("Piece on {from} cannot move to {to}")]
    IllegalTarget { from: Pos, to: Pos },
}

/// A custom board that cannot start a game.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// Each side needs exactly one king.
    #[error("Expected one {color} king, found {found}")]
    KingCount { color: Color, found: usize },
}
