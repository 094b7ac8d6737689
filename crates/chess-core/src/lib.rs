//! Core types for chess.
//!
//! This crate provides the fundamental types used by the rules engine:
//! - [`PieceKind`] and [`Color`] for piece representation
//! - [`Pos`] for board coordinates, with [`Offset`] step tables for
//!   sliding rays, knight jumps and king steps

mod color;
mod piece;
mod pos;

pub use color::Color;
pub use piece::PieceKind;
pub use pos::{
    in_bounds, Offset, Pos, Ray, BOARD_SIZE, DIAGONAL_RAYS, KING_OFFSETS, KING_RAYS,
    KNIGHT_OFFSETS, STRAIGHT_RAYS,
};
