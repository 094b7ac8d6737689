//! Text rendering of the game for the terminal.

use chess_core::{Color, Pos};
use chess_rules::{ClickOutcome, GameState, MoveOutcome};

/// The board with row and column numbers, followed by a status line.
pub fn board(game: &GameState) -> String {
    let mut out = String::from("  01234567\n");
    for (row, line) in game.board().to_string().lines().enumerate() {
        out.push_str(&format!("{row} {line}\n"));
    }
    out.push_str(&status(game));
    out.push('\n');
    out
}

fn status(game: &GameState) -> String {
    let mut status = format!("{} to move", game.turn());
    for color in Color::ALL {
        if let Some(attacker) = game.checked_by(color) {
            status.push_str(&format!("; {color} in check from {attacker}"));
        }
    }
    status
}

pub fn moves(pos: Pos, moves: &[Pos]) -> String {
    if moves.is_empty() {
        return format!("{pos}: no moves");
    }
    let list: Vec<String> = moves.iter().map(Pos::to_string).collect();
    format!("{pos}: {}", list.join(" "))
}

pub fn outcome(outcome: MoveOutcome) -> String {
    match outcome {
        MoveOutcome::Normal => "moved".to_string(),
        MoveOutcome::Capture(kind) => format!("captured {kind}"),
        MoveOutcome::Castle(side) => format!("castled {side:?}").to_lowercase(),
    }
}

pub fn click(click: ClickOutcome) -> String {
    match click {
        ClickOutcome::Ignored => "nothing to select".to_string(),
        ClickOutcome::Selected(pos) => format!("selected {pos}"),
        ClickOutcome::Deselected => "deselected".to_string(),
        ClickOutcome::Moved { from, to, outcome: o } => format!("{from} -> {to}: {}", outcome(o)),
        ClickOutcome::Rejected(err) => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_rules::{CastleSide, GameConfig};

    #[test]
    fn test_board_has_coordinates_and_status() {
        let game = GameState::new(&GameConfig::default());
        let text = board(&game);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  01234567");
        assert_eq!(lines[1], "0 RNBQKBNR");
        assert_eq!(lines[8], "7 rnbqkbnr");
        assert_eq!(lines[9], "White to move");
    }

    #[test]
    fn test_moves_list() {
        assert_eq!(moves(Pos::at(0, 0), &[]), "(0, 0): no moves");
        assert_eq!(
            moves(Pos::at(1, 4), &[Pos::at(2, 4), Pos::at(3, 4)]),
            "(1, 4): (2, 4) (3, 4)"
        );
    }

    #[test]
    fn test_outcome_text() {
        assert_eq!(outcome(MoveOutcome::Castle(CastleSide::Kingside)), "castled kingside");
        assert_eq!(
            click(ClickOutcome::Selected(Pos::at(1, 4))),
            "selected (1, 4)"
        );
    }
}
