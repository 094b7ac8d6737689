//! Pawn pushes and captures.
//!
//! En passant and promotion are not implemented.

use chess_core::Pos;

use super::Generator;

pub(super) fn generate(gen: &mut Generator<'_>) {
    let color = gen.mover.color;
    let from = gen.mover.pos;
    let orientation = gen.board.orientation();
    let dir = orientation.pawn_direction(color);
    let (row, col) = (from.row() as i8, from.col() as i8);

    if let Some(one) = Pos::new(row + dir, col).filter(|_| gen.board.is_empty(row + dir, col)) {
        gen.add(one);

        let on_start_row = from.row() == orientation.pawn_row(color);
        if !gen.mover.has_moved && on_start_row && gen.board.is_empty(row + 2 * dir, col) {
            if let Some(two) = Pos::new(row + 2 * dir, col) {
                gen.add(two);
            }
        }
    }

    // Both forward diagonals are covered whatever stands on them.
    for dc in [-1, 1] {
        let Some(to) = Pos::new(row + dir, col + dc) else {
            continue;
        };
        if gen.board.can_capture(color, row + dir, col + dc) {
            gen.add(to);
        }
        gen.land(to);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::generate;
    use crate::{Board, CheckTable, Orientation};
    use chess_core::{Color, PieceKind, Pos};

    #[test]
    fn unmoved_pawn_single_and_double_push() {
        let mut board = board_with_kings();
        board.place(Pos::at(1, 4), PieceKind::Pawn, Color::White);
        let moves = moves_of(&mut board, Pos::at(1, 4));
        assert_eq!(moves, vec![Pos::at(2, 4), Pos::at(3, 4)]);
    }

    #[test]
    fn moved_pawn_single_push_only() {
        let mut board = board_with_kings();
        board.place(Pos::at(1, 4), PieceKind::Pawn, Color::White).has_moved = true;
        let moves = moves_of(&mut board, Pos::at(1, 4));
        assert_eq!(moves, vec![Pos::at(2, 4)]);
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        let mut board = board_with_kings();
        board.place(Pos::at(6, 2), PieceKind::Pawn, Color::Black);
        board.place(Pos::at(4, 2), PieceKind::Knight, Color::White);
        assert_eq!(moves_of(&mut board, Pos::at(6, 2)), vec![Pos::at(5, 2)]);

        board.clear(Pos::at(4, 2));
        board.place(Pos::at(5, 2), PieceKind::Knight, Color::White);
        assert!(moves_of(&mut board, Pos::at(6, 2)).is_empty());
    }

    #[test]
    fn captures_only_enemies_but_covers_both_diagonals() {
        let mut board = board_with_kings();
        board.place(Pos::at(3, 3), PieceKind::Pawn, Color::White).has_moved = true;
        board.place(Pos::at(4, 2), PieceKind::Bishop, Color::Black);
        board.place(Pos::at(4, 4), PieceKind::Rook, Color::White);
        let moves = moves_of(&mut board, Pos::at(3, 3));
        assert_eq!(moves, vec![Pos::at(4, 2), Pos::at(4, 3)]);
        assert!(board.piece(Pos::at(4, 4)).is_protected());

        board.clear(Pos::at(4, 4));
        moves_of(&mut board, Pos::at(3, 3));
        assert!(board[Pos::at(4, 4)].is_attacked_by(Color::White));
    }

    #[test]
    fn pushes_do_not_attack() {
        let mut board = board_with_kings();
        board.place(Pos::at(1, 4), PieceKind::Pawn, Color::White);
        moves_of(&mut board, Pos::at(1, 4));
        assert!(!board[Pos::at(2, 4)].is_attacked_by(Color::White));
        assert!(board[Pos::at(2, 5)].is_attacked_by(Color::White));
    }

    #[test]
    fn pawn_diagonal_on_king_records_check() {
        let mut board = board_with_kings();
        board.place(Pos::at(6, 6), PieceKind::Pawn, Color::White).has_moved = true;
        board.clear(Pos::at(7, 7));
        board.place(Pos::at(7, 5), PieceKind::King, Color::Black);
        let mut checks = CheckTable::default();
        generate(&mut board, &mut checks, None, Pos::at(6, 6));
        assert_eq!(checks.attacker(Color::Black), Some(Pos::at(6, 6)));
        assert_eq!(board.piece(Pos::at(6, 6)).moves(), &[Pos::at(7, 6)]);
    }

    #[test]
    fn direction_follows_orientation() {
        let mut board = Board::empty(Orientation::WhiteBottom);
        board.place(Pos::at(7, 0), PieceKind::King, Color::White);
        board.place(Pos::at(0, 7), PieceKind::King, Color::Black);
        board.place(Pos::at(6, 3), PieceKind::Pawn, Color::White);
        board.place(Pos::at(1, 5), PieceKind::Pawn, Color::Black);
        assert_eq!(
            moves_of(&mut board, Pos::at(6, 3)),
            vec![Pos::at(4, 3), Pos::at(5, 3)]
        );
        assert_eq!(
            moves_of(&mut board, Pos::at(1, 5)),
            vec![Pos::at(2, 5), Pos::at(3, 5)]
        );
    }
}
