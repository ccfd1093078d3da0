//! Active piece - a catalog shape placed on the playfield.

use crate::catalog::{shape_of, PieceShape};
use crate::types::{PieceKind, Rotation, BLOCKS_PER_PIECE};

/// The falling piece: kind, rotation index and anchor position.
///
/// The anchor is the top-left corner of the piece's 4x4 box. Candidate
/// positions built while testing moves may lie partly outside the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
}

impl ActivePiece {
    /// A piece in its default rotation at the given anchor
    pub fn new(kind: PieceKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            rotation: Rotation::R0,
            x,
            y,
        }
    }

    /// Block offsets for the current rotation
    pub fn shape(&self) -> PieceShape {
        shape_of(self.kind, self.rotation)
    }

    /// Absolute cells covered by the piece
    pub fn blocks(&self) -> [(i32, i32); BLOCKS_PER_PIECE] {
        self.shape()
            .map(|(dx, dy)| (self.x + i32::from(dx), self.y + i32::from(dy)))
    }

    /// Copy moved by (dx, dy)
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy with a different rotation, same anchor
    pub fn with_rotation(&self, rotation: Rotation) -> Self {
        Self { rotation, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_are_offset_by_anchor() {
        let piece = ActivePiece::new(PieceKind::I, 3, 0);
        assert_eq!(piece.blocks(), [(3, 1), (4, 1), (5, 1), (6, 1)]);

        let moved = piece.shifted(-4, 2);
        assert_eq!(moved.blocks(), [(-1, 3), (0, 3), (1, 3), (2, 3)]);
    }

    #[test]
    fn with_rotation_keeps_anchor() {
        let piece = ActivePiece::new(PieceKind::T, 2, 5).with_rotation(Rotation::R3);
        assert_eq!((piece.x, piece.y), (2, 5));
        assert_eq!(piece.shape(), [(1, 0), (0, 1), (1, 1), (1, 2)]);
    }
}
