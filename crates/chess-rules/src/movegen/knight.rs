use chess_core::KNIGHT_OFFSETS;

use super::Generator;

pub(super) fn generate(gen: &mut Generator<'_>) {
    for offset in KNIGHT_OFFSETS {
        let Some(to) = gen.mover.pos.offset(offset) else {
            continue;
        };
        gen.land(to);
        if !gen.board.piece(to).is_ally_of(gen.mover.color) {
            gen.add(to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use chess_core::{Color, PieceKind, Pos};

    #[test]
    fn knight_in_the_corner() {
        let mut board = board_with_kings();
        board.place(Pos::at(0, 7), PieceKind::Knight, Color::Black);
        let moves = moves_of(&mut board, Pos::at(0, 7));
        assert_eq!(moves, vec![Pos::at(1, 5), Pos::at(2, 6)]);
    }

    #[test]
    fn knight_jumps_over_pieces_and_skips_own() {
        let mut board = board_with_kings();
        board.place(Pos::at(4, 4), PieceKind::Knight, Color::White);
        board.place(Pos::at(4, 5), PieceKind::Pawn, Color::White);
        board.place(Pos::at(6, 5), PieceKind::Pawn, Color::White);
        board.place(Pos::at(2, 3), PieceKind::Rook, Color::Black);
        let moves = moves_of(&mut board, Pos::at(4, 4));
        assert_eq!(moves.len(), 7);
        assert!(moves.contains(&Pos::at(2, 3)));
        assert!(!moves.contains(&Pos::at(6, 5)));
        assert!(board.piece(Pos::at(6, 5)).is_protected());
        assert!(!board.piece(Pos::at(4, 5)).is_protected());
        assert!(board[Pos::at(3, 2)].is_attacked_by(Color::White));
    }
}
