//! Piece records and their move buffers.

use chess_core::{Color, PieceKind, Pos};

/// A fixed-capacity list of destination squares.
///
/// No piece can reach more than 27 squares, so the buffer lives inline in
/// its piece and is reset, never reallocated, between passes.
#[derive(Clone)]
pub struct MoveBuffer {
    squares: [Pos; Self::CAPACITY],
    len: usize,
}

impl MoveBuffer {
    pub const CAPACITY: usize = 64;

    /// Creates an empty buffer.
    #[inline]
    pub const fn new() -> Self {
        MoveBuffer {
            squares: [Pos::at(0, 0); Self::CAPACITY],
            len: 0,
        }
    }

    /// Appends a square.
    #[inline]
    pub fn push(&mut self, pos: Pos) {
        debug_assert!(self.len < Self::CAPACITY);
        self.squares[self.len] = pos;
        self.len += 1;
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Pos] {
        &self.squares[..self.len]
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.as_slice().contains(&pos)
    }

    /// Forgets the contents, keeping the storage.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for MoveBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for MoveBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveBuffer {}

impl<'a> IntoIterator for &'a MoveBuffer {
    type Item = &'a Pos;
    type IntoIter = std::slice::Iter<'a, Pos>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// The occupant of a square.
///
/// A vacant square holds a piece of kind [`PieceKind::Empty`]; its color is
/// meaningless. The position always equals the coordinates of the square
/// holding the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
    /// Sprite sheet index for the presentation layer; never read by the engine.
    pub sprite: u8,
    pos: Pos,
    protected: bool,
    moves: MoveBuffer,
}

impl Piece {
    /// An unmoved piece standing on `pos`.
    pub fn new(kind: PieceKind, color: Color, pos: Pos) -> Self {
        Piece {
            kind,
            color,
            has_moved: false,
            sprite: kind.sprite_index(color),
            pos,
            protected: false,
            moves: MoveBuffer::new(),
        }
    }

    /// The placeholder record of a vacant square.
    pub fn empty(pos: Pos) -> Self {
        Piece::new(PieceKind::Empty, Color::Black, pos)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kind.is_empty()
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// True if an allied piece could recapture on this square. Only
    /// meaningful right after a full recomputation.
    #[inline]
    pub fn is_protected(&self) -> bool {
        self.protected
    }

    /// Destinations from the last generation of this piece.
    #[inline]
    pub fn moves(&self) -> &[Pos] {
        self.moves.as_slice()
    }

    #[inline]
    pub fn num_moves(&self) -> usize {
        self.moves.len()
    }

    /// True if `kind` and `color` both match. Always false for empty squares.
    #[inline]
    pub fn is(&self, kind: PieceKind, color: Color) -> bool {
        !self.is_empty() && self.kind == kind && self.color == color
    }

    /// True if this square holds a piece of the other side.
    #[inline]
    pub fn is_enemy_of(&self, color: Color) -> bool {
        !self.is_empty() && self.color != color
    }

    /// True if this square holds a piece of `color`.
    #[inline]
    pub fn is_ally_of(&self, color: Color) -> bool {
        !self.is_empty() && self.color == color
    }

    pub(crate) fn set_protected(&mut self, protected: bool) {
        self.protected = protected;
    }

    pub(crate) fn take_moves(&mut self) -> MoveBuffer {
        std::mem::take(&mut self.moves)
    }

    pub(crate) fn put_moves(&mut self, moves: MoveBuffer) {
        self.moves = moves;
    }

    /// Takes on a moving piece's identity, marked as moved, keeping this
    /// square's own move buffer storage.
    pub(crate) fn occupy(&mut self, kind: PieceKind, color: Color, sprite: u8) {
        self.kind = kind;
        self.color = color;
        self.sprite = sprite;
        self.has_moved = true;
        self.protected = false;
        self.moves.clear();
    }

    /// Resets this record to the vacant placeholder, keeping its position
    /// and buffer storage.
    pub(crate) fn vacate(&mut self) {
        self.kind = PieceKind::Empty;
        self.color = Color::Black;
        self.sprite = PieceKind::Empty.sprite_index(Color::Black);
        self.has_moved = false;
        self.protected = false;
        self.moves.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_push_and_clear() {
        let mut buf = MoveBuffer::new();
        assert!(buf.is_empty());
        buf.push(Pos::at(2, 3));
        buf.push(Pos::at(3, 3));
        assert_eq!(buf.len(), 2);
        assert!(buf.contains(Pos::at(3, 3)));
        assert!(!buf.contains(Pos::at(4, 3)));
        buf.clear();
        assert!(buf.is_empty());
        assert!(buf.as_slice().is_empty());
    }

    #[test]
    fn new_piece_has_sprite_and_position() {
        let piece = Piece::new(PieceKind::Rook, Color::Black, Pos::at(7, 0));
        assert_eq!(piece.sprite, 10);
        assert_eq!(piece.pos(), Pos::at(7, 0));
        assert!(!piece.has_moved);
        assert!(piece.moves().is_empty());
    }

    #[test]
    fn occupy_and_vacate() {
        let mover = Piece::new(PieceKind::Knight, Color::White, Pos::at(0, 1));
        let mut target = Piece::new(PieceKind::Pawn, Color::Black, Pos::at(2, 2));
        let mut moves = target.take_moves();
        moves.push(Pos::at(1, 2));
        target.put_moves(moves);

        target.occupy(mover.kind, mover.color, mover.sprite);
        assert!(target.is(PieceKind::Knight, Color::White));
        assert!(target.has_moved);
        assert_eq!(target.pos(), Pos::at(2, 2));
        assert!(target.moves().is_empty());

        target.vacate();
        assert!(target.is_empty());
        assert_eq!(target.pos(), Pos::at(2, 2));
        assert!(!target.is_enemy_of(Color::White));
        assert!(!target.is_ally_of(Color::Black));
    }
}
