//! Chess piece kinds.

use crate::Color;

/// The kind of piece standing on a square.
///
/// `Empty` is the placeholder kind of a vacant square. It is distinct from
/// "no square at all": every square always holds a piece record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum PieceKind {
    #[default]
    Empty = 0,
    King = 1,
    Queen = 2,
    Rook = 3,
    Bishop = 4,
    Knight = 5,
    Pawn = 6,
}

impl PieceKind {
    /// The six real piece kinds, `Empty` excluded.
    pub const PIECES: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// Returns true for the vacant-square placeholder.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, PieceKind::Empty)
    }

    /// Returns true if this piece is a sliding piece (bishop, rook, or queen).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    /// Returns true if this kind attacks along ranks and files.
    #[inline]
    pub const fn slides_straight(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Queen)
    }

    /// Returns true if this kind attacks along diagonals.
    #[inline]
    pub const fn slides_diagonally(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Queen)
    }

    /// Single-character symbol: uppercase for White, lowercase for Black,
    /// `.` for an empty square.
    pub const fn symbol(self, color: Color) -> char {
        let c = match self {
            PieceKind::Empty => return '.',
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Index into the two-row sprite sheet used by the presentation layer.
    ///
    /// White occupies 0-5 (king, queen, bishop, knight, rook, pawn) and
    /// Black the same columns on the second row, 6-11.
    pub const fn sprite_index(self, color: Color) -> u8 {
        let column = match self {
            PieceKind::Empty | PieceKind::King => 0,
            PieceKind::Queen => 1,
            PieceKind::Bishop => 2,
            PieceKind::Knight => 3,
            PieceKind::Rook => 4,
            PieceKind::Pawn => 5,
        };
        match color {
            Color::White => column,
            Color::Black => column + 6,
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Empty => "Empty",
            PieceKind::King => "King",
            PieceKind::Queen => "Queen",
            PieceKind::Rook => "Rook",
            PieceKind::Bishop => "Bishop",
            PieceKind::Knight => "Knight",
            PieceKind::Pawn => "Pawn",
        };
        write!(f, "{}", name)
    }
}
