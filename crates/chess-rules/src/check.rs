//! Check detection.
//!
//! The detector casts rays outward from a king and looks for the sliding
//! piece or knight giving check. Pawns and kings are never examined here:
//! a check from either only shows up through the generators' landing side
//! effect (see [`crate::movegen`]), after the check-response filter has
//! already run for the pass.

use chess_core::{Color, PieceKind, Pos, KING_RAYS, KNIGHT_OFFSETS};
use tracing::debug;

use crate::Board;

/// Which piece, if any, is giving check to each king.
///
/// Indexed by the color of the *checked* king. Each slot holds a single
/// attacker; a later record replaces an earlier one, so double checks are
/// not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckTable([Option<Pos>; 2]);

impl CheckTable {
    /// Position of the piece checking `color`'s king.
    #[inline]
    pub fn attacker(&self, color: Color) -> Option<Pos> {
        self.0[color.index()]
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.attacker(color).is_some()
    }

    #[inline]
    pub(crate) fn record(&mut self, checked: Color, attacker: Pos) {
        self.0[checked.index()] = Some(attacker);
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.0 = [None; 2];
    }
}

/// Scans outward from the king at `king` and records the last attacker
/// found in `checks`.
///
/// Rays run N, E, S, W, NW, NE, SE, SW; only the first occupied square on
/// each ray matters. Knight jumps are tested afterwards.
pub fn detect_check(board: &Board, king: Pos, checks: &mut CheckTable) -> Option<Pos> {
    let color = board.piece(king).color;
    let mut found = None;

    for step in KING_RAYS {
        let Some(pos) = king.ray(step).find(|&p| !board.piece(p).is_empty()) else {
            continue;
        };
        let piece = board.piece(pos);
        let attacks = (step.is_straight() && piece.kind.slides_straight())
            || (step.is_diagonal() && piece.kind.slides_diagonally());
        if piece.is_enemy_of(color) && attacks {
            found = Some(pos);
        }
    }

    for offset in KNIGHT_OFFSETS {
        if let Some(pos) = king.offset(offset) {
            if board.piece(pos).is(PieceKind::Knight, color.opposite()) {
                found = Some(pos);
            }
        }
    }

    if let Some(attacker) = found {
        debug!(
            king = %king,
            attacker = %attacker,
            kind = %board.piece(attacker).kind,
            "{} king in check",
            color
        );
        checks.record(color, attacker);
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Orientation};

    fn board_with_kings() -> Board {
        let mut board = Board::empty(Orientation::WhiteTop);
        board.place(Pos::at(4, 0), PieceKind::King, Color::White);
        board.place(Pos::at(0, 7), PieceKind::King, Color::Black);
        board
    }

    #[test]
    fn rook_on_rank_gives_check() {
        let mut board = board_with_kings();
        board.place(Pos::at(4, 7), PieceKind::Rook, Color::Black);
        let mut checks = CheckTable::default();
        assert_eq!(detect_check(&board, Pos::at(4, 0), &mut checks), Some(Pos::at(4, 7)));
        assert_eq!(checks.attacker(Color::White), Some(Pos::at(4, 7)));
        assert!(!checks.is_in_check(Color::Black));
    }

    #[test]
    fn blocked_ray_is_not_check() {
        let mut board = board_with_kings();
        board.place(Pos::at(4, 7), PieceKind::Rook, Color::Black);
        board.place(Pos::at(4, 4), PieceKind::Rook, Color::White);
        let mut checks = CheckTable::default();
        assert_eq!(detect_check(&board, Pos::at(4, 0), &mut checks), None);
        assert_eq!(checks, CheckTable::default());
    }

    #[test]
    fn slider_must_match_ray_direction() {
        let mut board = board_with_kings();
        board.place(Pos::at(2, 2), PieceKind::Rook, Color::Black);
        board.place(Pos::at(4, 5), PieceKind::Bishop, Color::Black);
        let mut checks = CheckTable::default();
        assert_eq!(detect_check(&board, Pos::at(4, 0), &mut checks), None);

        board.place(Pos::at(2, 2), PieceKind::Queen, Color::Black);
        assert_eq!(detect_check(&board, Pos::at(4, 0), &mut checks), Some(Pos::at(2, 2)));
    }

    #[test]
    fn knight_gives_check() {
        let mut board = board_with_kings();
        board.place(Pos::at(2, 1), PieceKind::Knight, Color::Black);
        let mut checks = CheckTable::default();
        assert_eq!(detect_check(&board, Pos::at(4, 0), &mut checks), Some(Pos::at(2, 1)));
    }

    #[test]
    fn pawns_are_not_examined() {
        let mut board = board_with_kings();
        board.place(Pos::at(5, 1), PieceKind::Pawn, Color::Black);
        let mut checks = CheckTable::default();
        assert_eq!(detect_check(&board, Pos::at(4, 0), &mut checks), None);
    }

    #[test]
    fn knight_found_after_slider_wins() {
        let mut board = board_with_kings();
        board.place(Pos::at(4, 7), PieceKind::Rook, Color::Black);
        board.place(Pos::at(6, 1), PieceKind::Knight, Color::Black);
        let mut checks = CheckTable::default();
        detect_check(&board, Pos::at(4, 0), &mut checks);
        assert_eq!(checks.attacker(Color::White), Some(Pos::at(6, 1)));
    }
}
