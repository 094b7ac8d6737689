//! Game state, move execution and turn control.

use chess_core::{Color, Offset, PieceKind, Pos};
use tracing::{debug, trace};

use crate::board::init_board;
use crate::check::detect_check;
use crate::movegen;
use crate::{Board, CheckTable, GameConfig, MoveError, Restriction, SetupError};

/// Which rook a castling move used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Toward column 7.
    Kingside,
    /// Toward column 0.
    Queenside,
}

/// What an accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    Normal,
    /// An opposing piece of this kind was removed.
    Capture(PieceKind),
    /// The king moved two squares and the rook jumped over it.
    Castle(CastleSide),
}

/// Result of [`GameState::click`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Off the board, or nothing selectable there.
    Ignored,
    Selected(Pos),
    Deselected,
    Moved {
        from: Pos,
        to: Pos,
        outcome: MoveOutcome,
    },
    /// The selected piece cannot go there; the selection is kept.
    Rejected(MoveError),
}

/// A game in progress.
///
/// Owns the board and everything derived from it in the last full
/// recomputation: attack and protection flags, the check table and the
/// check-response restriction for each color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    selected: Option<Pos>,
    checks: CheckTable,
    restrictions: [Option<Restriction>; 2],
    turn: Color,
    enforce_turns: bool,
}

impl GameState {
    /// Starts a game from the standard setup.
    pub fn new(config: &GameConfig) -> Self {
        let mut state = Self::from_parts(init_board(config.orientation), config);
        state.calculate_moves();
        state
    }

    /// Starts a game from a custom position, White to move.
    ///
    /// The board keeps its own orientation; only turn enforcement is taken
    /// from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::KingCount`] unless each side has exactly one
    /// king.
    pub fn with_board(board: Board, config: &GameConfig) -> Result<Self, SetupError> {
        for color in Color::ALL {
            let found = board
                .squares()
                .filter(|(_, square)| square.piece().is(PieceKind::King, color))
                .count();
            if found != 1 {
                return Err(SetupError::KingCount { color, found });
            }
        }
        let mut state = Self::from_parts(board, config);
        state.calculate_moves();
        Ok(state)
    }

    fn from_parts(board: Board, config: &GameConfig) -> Self {
        GameState {
            board,
            selected: None,
            checks: CheckTable::default(),
            restrictions: [None, None],
            turn: Color::White,
            enforce_turns: config.enforce_turns,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn selected(&self) -> Option<Pos> {
        self.selected
    }

    /// Position of the piece checking `color`'s king, if any.
    #[inline]
    pub fn checked_by(&self, color: Color) -> Option<Pos> {
        self.checks.attacker(color)
    }

    /// The capture/block squares `color`'s non-king pieces were limited to
    /// in the last recomputation.
    #[inline]
    pub fn restriction(&self, color: Color) -> Option<&Restriction> {
        self.restrictions[color.index()].as_ref()
    }

    /// Current moves of the piece at `pos`; empty for a vacant square.
    #[inline]
    pub fn legal_moves(&self, pos: Pos) -> &[Pos] {
        self.board.piece(pos).moves()
    }

    fn king(&self, color: Color) -> Pos {
        self.board
            .find_piece(PieceKind::King, color)
            .unwrap_or_else(|| panic!("no {color} king on the board"))
    }

    /// Recomputes every piece's moves along with all attack, protection
    /// and check data.
    ///
    /// Kings are generated after every other piece so that the attack
    /// flags they read are complete. Both kings' neighbouring squares are
    /// marked first, so the order the kings are generated in does not
    /// matter.
    ///
    /// # Panics
    ///
    /// Panics if either king is missing from the board.
    pub fn calculate_moves(&mut self) {
        self.board.clear_flags();
        self.checks.clear();

        let kings = Color::ALL.map(|color| self.king(color));
        for king in kings {
            detect_check(&self.board, king, &mut self.checks);
            movegen::mark_king_zone(&mut self.board, king);
        }
        self.restrictions = Color::ALL.map(|color| {
            self.checks
                .attacker(color)
                .map(|attacker| Restriction::compute(&self.board, kings[color.index()], attacker))
        });

        let mut generated = 0;
        for pos in Pos::all() {
            let piece = self.board.piece(pos);
            if piece.is_empty() || piece.kind == PieceKind::King {
                continue;
            }
            let restriction = self.restrictions[piece.color.index()].as_ref();
            generated += movegen::generate(&mut self.board, &mut self.checks, restriction, pos);
        }

        let mut kings = kings;
        kings.sort();
        for king in kings {
            let color = self.board.piece(king).color;
            let restriction = self.restrictions[color.index()].as_ref();
            generated += movegen::generate(&mut self.board, &mut self.checks, restriction, king);
        }

        trace!(
            moves = generated,
            white_checked_by = ?self.checks.attacker(Color::White),
            black_checked_by = ?self.checks.attacker(Color::Black),
            "recomputed"
        );
    }

    /// Regenerates only the piece at `pos`, using the restriction stored for
    /// its color by the last full recomputation.
    ///
    /// Returns `None` for a vacant square.
    pub fn calculate_moves_for_piece(&mut self, pos: Pos) -> Option<&[Pos]> {
        let piece = self.board.piece(pos);
        if piece.is_empty() {
            return None;
        }
        let restriction = self.restrictions[piece.color.index()].as_ref();
        movegen::generate(&mut self.board, &mut self.checks, restriction, pos);
        Some(self.board.piece(pos).moves())
    }

    /// Moves the piece at `from` to `to` if that is one of its moves.
    ///
    /// Returns `false`, leaving the game untouched, otherwise.
    pub fn make_move(&mut self, from: Pos, to: Pos) -> bool {
        self.try_make_move(from, to).is_ok()
    }

    /// Moves the piece at `from` to `to`, recomputes the game and passes
    /// the turn.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the move is refused, in which case
    /// nothing has changed.
    pub fn try_make_move(&mut self, from: Pos, to: Pos) -> Result<MoveOutcome, MoveError> {
        if let Err(err) = self.validate(from, to) {
            debug!(%from, %to, %err, "move rejected");
            return Err(err);
        }

        let piece = self.board.piece(from);
        let (kind, color) = (piece.kind, piece.color);
        let captured = self.board.piece(to).kind;
        self.relocate(from, to);

        let outcome = if kind == PieceKind::King
            && from.row() == to.row()
            && from.col().abs_diff(to.col()) == 2
        {
            let dir = if to.col() > from.col() { 1 } else { -1 };
            self.move_castling_rook(to, dir, color);
            MoveOutcome::Castle(if dir > 0 {
                CastleSide::Kingside
            } else {
                CastleSide::Queenside
            })
        } else if captured.is_empty() {
            MoveOutcome::Normal
        } else {
            MoveOutcome::Capture(captured)
        };

        self.selected = None;
        self.calculate_moves();
        self.turn = self.turn.opposite();
        debug!(%color, %kind, %from, %to, ?outcome, turn = %self.turn, "move");
        Ok(outcome)
    }

    fn validate(&self, from: Pos, to: Pos) -> Result<(), MoveError> {
        let piece = self.board.piece(from);
        if piece.is_empty() {
            return Err(MoveError::EmptySquare(from));
        }
        if self.enforce_turns && piece.color != self.turn {
            return Err(MoveError::NotYourTurn {
                color: piece.color,
                turn: self.turn,
            });
        }
        if !piece.moves().contains(&to) {
            return Err(MoveError::IllegalTarget { from, to });
        }
        Ok(())
    }

    /// Carries the piece at `from` onto `to`, marking it moved and leaving
    /// `from` vacant.
    fn relocate(&mut self, from: Pos, to: Pos) {
        let piece = self.board.piece(from);
        let (kind, color, sprite) = (piece.kind, piece.color, piece.sprite);
        self.board.piece_mut(to).occupy(kind, color, sprite);
        self.board.clear(from);
    }

    /// Brings the rook beyond a castled king's destination over to the
    /// square the king passed.
    fn move_castling_rook(&mut self, king_to: Pos, dir: i8, color: Color) {
        let rook = king_to
            .ray(Offset::new(0, dir))
            .find(|&pos| !self.board.piece(pos).is_empty())
            .filter(|&pos| self.board.piece(pos).is(PieceKind::Rook, color));
        let (Some(rook), Some(rook_to)) = (rook, king_to.offset(Offset::new(0, -dir))) else {
            return;
        };
        self.relocate(rook, rook_to);
        debug!(%color, from = %rook, to = %rook_to, "castling rook");
    }

    fn can_select(&self, pos: Pos) -> bool {
        let piece = self.board.piece(pos);
        !piece.is_empty() && (!self.enforce_turns || piece.color == self.turn)
    }

    /// Handles a click on (row, col).
    ///
    /// With nothing selected, a click selects a piece. With a piece
    /// selected, clicking it again deselects it; clicking elsewhere tries
    /// to move there, and if that fails on a selectable piece, selects that
    /// piece instead.
    pub fn click(&mut self, row: i8, col: i8) -> ClickOutcome {
        let Some(pos) = Pos::new(row, col) else {
            return ClickOutcome::Ignored;
        };
        match self.selected {
            None if self.can_select(pos) => {
                self.selected = Some(pos);
                ClickOutcome::Selected(pos)
            }
            None => ClickOutcome::Ignored,
            Some(from) if from == pos => {
                self.selected = None;
                ClickOutcome::Deselected
            }
            Some(from) => match self.try_make_move(from, pos) {
                Ok(outcome) => ClickOutcome::Moved {
                    from,
                    to: pos,
                    outcome,
                },
                Err(_) if self.can_select(pos) => {
                    self.selected = Some(pos);
                    ClickOutcome::Selected(pos)
                }
                Err(err) => ClickOutcome::Rejected(err),
            },
        }
    }
}
