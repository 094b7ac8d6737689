//! Chess rules engine built on a square-indexed board.
//!
//! This crate provides:
//! - [`Board`] - the 8x8 grid of [`Square`]s with per-color attack flags
//! - [`GameState`] - a game in progress: move execution, turn control and
//!   click-driven piece selection
//! - [`detect_check`] and [`Restriction`] - check detection and the
//!   capture/block squares a checked side is limited to
//! - [`GameConfig`] - board orientation and turn enforcement, loaded from TOML
//!
//! # Architecture
//!
//! Every square owns one [`Piece`] record; a vacant square holds a
//! placeholder of kind [`PieceKind::Empty`](chess_core::PieceKind::Empty).
//! Each piece keeps its destinations in an inline [`MoveBuffer`] that is
//! refilled on every recomputation. A recomputation clears all flags, looks
//! for checks from both kings, computes the restriction for a checked side,
//! then generates every non-king piece followed by the kings. Generation
//! marks attacked squares and protected pieces as it goes, which is what
//! king moves are validated against.
//!
//! Moves are pseudo-legal: pins, en passant, promotion and mate detection
//! are not modelled.
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Pos};
//! use chess_rules::{GameConfig, GameState};
//!
//! let mut game = GameState::new(&GameConfig::default());
//! assert_eq!(game.legal_moves(Pos::at(1, 4)), &[Pos::at(2, 4), Pos::at(3, 4)]);
//!
//! assert!(game.make_move(Pos::at(1, 4), Pos::at(3, 4)));
//! assert_eq!(game.turn(), Color::Black);
//! println!("{}", game.board());
//! ```

mod board;
mod check;
mod config;
mod error;
mod game;
mod movegen;
mod piece;
mod response;

pub use board::{init_board, Board, Orientation, Square};
pub use check::{detect_check, CheckTable};
pub use config::{ConfigError, GameConfig};
pub use error::{MoveError, SetupError};
pub use game::{CastleSide, ClickOutcome, GameState, MoveOutcome};
pub use piece::{MoveBuffer, Piece};
pub use response::Restriction;
