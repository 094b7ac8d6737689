//! Rook, bishop and queen rays.

use chess_core::{Offset, PieceKind};

use super::Generator;

/// Walks each ray in `rays` from the mover until the board edge or the
/// first occupied square.
///
/// Empty squares are destinations and the ray continues. An opposing piece
/// is a capture and ends the ray; an own piece ends it without a move.
/// When the ray ends on the opposing king, the empty squares behind the
/// king are still marked attacked so the king cannot step back along the
/// line it is checked on.
pub(super) fn generate(gen: &mut Generator<'_>, rays: &[Offset]) {
    let color = gen.mover.color;
    for &step in rays {
        let mut ray = gen.mover.pos.ray(step);
        while let Some(to) = ray.next() {
            gen.land(to);
            let target = gen.board.piece(to);
            if target.is_empty() {
                gen.add(to);
                continue;
            }
            if target.is_enemy_of(color) {
                let through_king = target.kind == PieceKind::King;
                gen.add(to);
                if through_king {
                    // The line stays attacked past the king so it cannot step back along it.
                    for behind in ray.by_ref() {
                        if !gen.board.piece(behind).is_empty() {
                            break;
                        }
                        gen.board.square_mut(behind).mark_attacked(color);
                    }
                }
            }
            break;
        }
    }
}
