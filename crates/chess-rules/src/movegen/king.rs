//! King steps and castling.
//!
//! Kings are generated after every other piece in a pass, so the attack
//! flags and protection flags they consult are complete.

use chess_core::{Offset, PieceKind, Pos, KING_OFFSETS};

use super::Generator;
use crate::Board;

/// Marks the squares around the king at `king` as attacked by its color
/// and the allies on them as protected.
///
/// Runs for both kings before either is generated, so neither king can
/// step next to the other or take a piece the other king guards.
pub(crate) fn mark_zone(board: &mut Board, king: Pos) {
    let color = board.piece(king).color;
    for offset in KING_OFFSETS {
        let Some(to) = king.offset(offset) else {
            continue;
        };
        let square = board.square_mut(to);
        if square.piece().is_empty() {
            square.mark_attacked(color);
        } else if square.piece().is_ally_of(color) {
            square.piece_mut().set_protected(true);
        }
    }
}

pub(super) fn generate(gen: &mut Generator<'_>) {
    let color = gen.mover.color;
    let opponent = gen.opponent();

    for offset in KING_OFFSETS {
        let Some(to) = gen.mover.pos.offset(offset) else {
            continue;
        };
        let square = &gen.board[to];
        let target = square.piece();
        let legal = if target.is_empty() {
            !square.is_attacked_by(opponent)
        } else {
            target.is_enemy_of(color) && !target.is_protected()
        };
        gen.land(to);
        if legal {
            gen.add(to);
        }
    }

    if !gen.mover.has_moved {
        castle(gen, 1);
        castle(gen, -1);
    }
}

/// Adds the two-square castling move toward `dir` (+1 toward column 7,
/// -1 toward column 0) if the rook on that side allows it.
///
/// Walks outward from the king: any square within two steps attacked by
/// the opponent, or any non-rook piece before the rook, rules it out. The
/// rook must be an unmoved rook of the king's color standing beyond the
/// king's destination.
fn castle(gen: &mut Generator<'_>, dir: i8) {
    let king = gen.mover.pos;
    let color = gen.mover.color;
    let opponent = gen.opponent();

    for (steps, pos) in king.ray(Offset::new(0, dir)).enumerate() {
        let square = &gen.board[pos];
        if steps < 2 && square.is_attacked_by(opponent) {
            return;
        }
        let piece = square.piece();
        if piece.is_empty() {
            continue;
        }
        if piece.is(PieceKind::Rook, color) && !piece.has_moved && steps >= 2 {
            if let Some(to) = king.offset(Offset::new(0, 2 * dir)) {
                gen.add(to);
            }
        }
        return;
    }
}
