//! Parsing of the line-based command language.

use anyhow::{anyhow, bail, Context};
use chess_core::Pos;

pub const HELP: &str = "\
commands:
  <r> <c> <r> <c>   move the piece on the first square to the second
  click <r> <c>     click a square (select, deselect or move)
  show <r> <c>      list the moves of a piece
  board             print the board
  help              print this help
  quit              leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move { from: Pos, to: Pos },
    Click { row: i8, col: i8 },
    Show(Pos),
    Board,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> anyhow::Result<Option<Command>> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let command = match words.as_slice() {
            [] => return Ok(None),
            ["quit" | "exit" | "q"] => Command::Quit,
            ["board"] => Command::Board,
            ["help" | "?"] => Command::Help,
            ["show", row, col] => Command::Show(square(row, col)?),
            ["click", row, col] => Command::Click {
                row: number(row)?,
                col: number(col)?,
            },
            [r1, c1, r2, c2] => Command::Move {
                from: square(r1, c1)?,
                to: square(r2, c2)?,
            },
            _ => bail!("unrecognised command: {}", line.trim()),
        };
        Ok(Some(command))
    }
}

fn number(word: &str) -> anyhow::Result<i8> {
    word.parse()
        .with_context(|| format!("not a coordinate: {word}"))
}

fn square(row: &str, col: &str) -> anyhow::Result<Pos> {
    let (row, col) = (number(row)?, number(col)?);
    Pos::new(row, col).ok_or_else(|| anyhow!("({row}, {col}) is off the board"))
}
