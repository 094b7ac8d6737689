//! Pseudo-legal move generation.
//!
//! Each generator fills the mover's move buffer and, as a side effect,
//! updates the board's attack data:
//! - an empty landing square becomes attacked by the mover's color,
//! - an allied piece on a landing square becomes protected,
//! - an opposing king on a landing square is recorded as in check.
//!
//! Moves are filtered through the check-response [`Restriction`] for the
//! mover's color, except for kings, whose own legality comes from the
//! attack flags. Attack data is marked for every landing square, whether or
//! not the restriction keeps the move.

mod king;
mod knight;
mod pawn;
mod sliding;

use chess_core::{Color, PieceKind, Pos, DIAGONAL_RAYS, STRAIGHT_RAYS};

use crate::{Board, CheckTable, MoveBuffer, Restriction};

pub(crate) use king::mark_zone as mark_king_zone;

/// The piece being generated, copied out of its square.
#[derive(Debug, Clone, Copy)]
struct Mover {
    kind: PieceKind,
    color: Color,
    pos: Pos,
    has_moved: bool,
}

/// Working state for one piece's generation.
struct Generator<'a> {
    board: &'a mut Board,
    checks: &'a mut CheckTable,
    restriction: Option<&'a Restriction>,
    mover: Mover,
    moves: MoveBuffer,
}

impl Generator<'_> {
    /// Applies the landing side effects for `to`.
    fn land(&mut self, to: Pos) {
        let color = self.mover.color;
        let square = self.board.square_mut(to);
        let target = square.piece();
        if target.is_empty() {
            square.mark_attacked(color);
        } else if target.color == color {
            square.piece_mut().set_protected(true);
        } else if target.kind == PieceKind::King {
            let checked = target.color;
            self.checks.record(checked, self.mover.pos);
        }
    }

    /// Records `to` as a destination unless the restriction forbids it.
    /// An opposing king's square is never a destination.
    fn add(&mut self, to: Pos) {
        let target = self.board.piece(to);
        if target.is(PieceKind::King, self.mover.color.opposite()) {
            return;
        }
        if self.mover.kind != PieceKind::King {
            if let Some(restriction) = self.restriction {
                if !restriction.contains(to) {
                    return;
                }
            }
        }
        self.moves.push(to);
    }

    #[inline]
    fn opponent(&self) -> Color {
        self.mover.color.opposite()
    }
}

/// Regenerates the moves of the piece at `pos` and returns how many it has.
///
/// `restriction` is the check-response restriction for the piece's color,
/// if its king is in check. A vacant square yields zero moves.
pub(crate) fn generate(
    board: &mut Board,
    checks: &mut CheckTable,
    restriction: Option<&Restriction>,
    pos: Pos,
) -> usize {
    let piece = board.piece(pos);
    let mover = Mover {
        kind: piece.kind,
        color: piece.color,
        pos,
        has_moved: piece.has_moved,
    };

    let mut moves = board.piece_mut(pos).take_moves();
    moves.clear();

    let mut gen = Generator {
        board,
        checks,
        restriction,
        mover,
        moves,
    };

    match mover.kind {
        PieceKind::Empty => {}
        PieceKind::King => king::generate(&mut gen),
        PieceKind::Queen => {
            sliding::generate(&mut gen, &STRAIGHT_RAYS);
            sliding::generate(&mut gen, &DIAGONAL_RAYS);
        }
        PieceKind::Rook => sliding::generate(&mut gen, &STRAIGHT_RAYS),
        PieceKind::Bishop => sliding::generate(&mut gen, &DIAGONAL_RAYS),
        PieceKind::Knight => knight::generate(&mut gen),
        PieceKind::Pawn => pawn::generate(&mut gen),
    }

    let Generator { board, moves, .. } = gen;
    let count = moves.len();
    board.piece_mut(pos).put_moves(moves);
    count
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::Orientation;

    /// An empty board with kings tucked into opposite corners.
    pub(crate) fn board_with_kings() -> Board {
        let mut board = Board::empty(Orientation::WhiteTop);
        board.place(Pos::at(0, 0), PieceKind::King, Color::White);
        board.place(Pos::at(7, 7), PieceKind::King, Color::Black);
        board
    }

    /// Generates the piece at `pos` with no restriction and returns its
    /// sorted destinations.
    pub(crate) fn moves_of(board: &mut Board, pos: Pos) -> Vec<Pos> {
        let mut checks = CheckTable::default();
        generate(board, &mut checks, None, pos);
        let mut moves = board.piece(pos).moves().to_vec();
        moves.sort();
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn queen_appends_bishop_rays_after_rook_rays() {
        let mut board = board_with_kings();
        board.place(Pos::at(3, 3), PieceKind::Queen, Color::White);
        let mut checks = CheckTable::default();
        let count = generate(&mut board, &mut checks, None, Pos::at(3, 3));
        // 14 along the rank and file; the diagonals stop short of both kings.
        assert_eq!(count, 14 + 11);
        let moves = board.piece(Pos::at(3, 3)).moves();
        assert!(moves[..14].iter().all(|p| p.row() == 3 || p.col() == 3));
        assert!(moves[14..].iter().all(|p| p.row() != 3 && p.col() != 3));
    }

    #[test]
    fn restriction_drops_moves_but_not_attacks() {
        let mut board = board_with_kings();
        board.place(Pos::at(3, 3), PieceKind::Rook, Color::White);
        board.place(Pos::at(5, 0), PieceKind::Rook, Color::Black);
        let restriction = Restriction::compute(&board, Pos::at(0, 0), Pos::at(5, 0));
        let mut checks = CheckTable::default();
        generate(&mut board, &mut checks, Some(&restriction), Pos::at(3, 3));

        assert_eq!(board.piece(Pos::at(3, 3)).moves(), &[Pos::at(3, 0)]);
        assert!(board[Pos::at(3, 7)].is_attacked_by(Color::White));
        assert!(board[Pos::at(0, 3)].is_attacked_by(Color::White));
    }

    #[test]
    fn landing_on_enemy_king_records_check_without_a_move() {
        let mut board = board_with_kings();
        board.place(Pos::at(7, 3), PieceKind::Rook, Color::White);
        let mut checks = CheckTable::default();
        generate(&mut board, &mut checks, None, Pos::at(7, 3));
        assert_eq!(checks.attacker(Color::Black), Some(Pos::at(7, 3)));
        assert!(!board.piece(Pos::at(7, 3)).moves().contains(&Pos::at(7, 7)));
    }

    #[test]
    fn vacant_square_generates_nothing() {
        let mut board = board_with_kings();
        let mut checks = CheckTable::default();
        assert_eq!(generate(&mut board, &mut checks, None, Pos::at(4, 4)), 0);
    }
}
