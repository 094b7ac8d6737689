//! chess-play - plays a game in the terminal.
//!
//! Reads commands from stdin, one per line, and prints the board after
//! every accepted move. Type `help` for the command list.

mod command;
mod render;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use chess_rules::{ClickOutcome, GameConfig, GameState, Orientation};
use clap::Parser;
use command::{Command, HELP};
use tracing::Level;

/// chess-play - plays a game of chess in the terminal.
#[derive(Parser)]
#[command(name = "chess-play")]
#[command(about = "Play chess in the terminal")]
struct Args {
    /// Path to the game configuration file
    #[arg(long, default_value = "chess.toml")]
    config: PathBuf,

    /// Refuse moves by the side not on turn
    #[arg(long)]
    two_player: bool,

    /// Put White's home rows at the bottom of the board
    #[arg(long)]
    white_bottom: bool,

    /// Log moves, checks and rejections
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn game_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = GameConfig::load(&self.config)
            .with_context(|| format!("Failed to load {}", self.config.display()))?;
        if self.two_player {
            config.enforce_turns = true;
        }
        if self.white_bottom {
            config.orientation = Orientation::WhiteBottom;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .init();

    let config = args.game_config()?;
    tracing::info!(
        "Starting game: orientation {:?}, turns enforced: {}",
        config.orientation,
        config.enforce_turns
    );

    let mut game = GameState::new(&config);
    let mut out = io::stdout().lock();
    write!(out, "{}", render::board(&game))?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{e:#}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Board => write!(out, "{}", render::board(&game))?,
            Command::Show(pos) => writeln!(out, "{}", render::moves(pos, game.legal_moves(pos)))?,
            Command::Move { from, to } => match game.try_make_move(from, to) {
                Ok(outcome) => {
                    writeln!(out, "{}", render::outcome(outcome))?;
                    write!(out, "{}", render::board(&game))?;
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            Command::Click { row, col } => {
                let click = game.click(row, col);
                writeln!(out, "{}", render::click(click))?;
                if matches!(click, ClickOutcome::Moved { .. }) {
                    write!(out, "{}", render::board(&game))?;
                }
            }
        }
        out.flush()?;
    }

    tracing::info!("Game over");
    Ok(())
}
