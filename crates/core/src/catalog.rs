//! Catalog module - the seven tetromino shapes
//!
//! Each kind stores four rotation states of exactly four block offsets,
//! measured from the top-left corner of a 4x4 box, plus an RGBA display color.
//! The table is static data; [`validate_catalog`] checks it once at startup.

use crate::error::CatalogError;
use crate::types::{PieceKind, Rotation, BLOCKS_PER_PIECE, PIECE_BOX};

/// Offset of a single block relative to the piece anchor
pub type BlockOffset = (u8, u8);

/// Shape of a piece in one rotation - 4 block offsets from the anchor
pub type PieceShape = [BlockOffset; BLOCKS_PER_PIECE];

/// One catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TetrominoShape {
    pub kind: PieceKind,
    pub rotations: [PieceShape; 4],
    /// RGBA, 8 bits per channel
    pub rgba: u32,
}

static CATALOG: [TetrominoShape; PieceKind::COUNT] = [
    TetrominoShape {
        kind: PieceKind::I,
        rotations: [
            [(0, 1), (1, 1), (2, 1), (3, 1)],
            [(2, 0), (2, 1), (2, 2), (2, 3)],
            [(0, 2), (1, 2), (2, 2), (3, 2)],
            [(1, 0), (1, 1), (1, 2), (1, 3)],
        ],
        rgba: 0x00ff_ffff,
    },
    TetrominoShape {
        kind: PieceKind::J,
        rotations: [
            [(0, 0), (0, 1), (1, 1), (2, 1)],
            [(1, 0), (2, 0), (1, 1), (1, 2)],
            [(0, 1), (1, 1), (2, 1), (2, 2)],
            [(1, 0), (1, 1), (0, 2), (1, 2)],
        ],
        rgba: 0x0000_ffff,
    },
    TetrominoShape {
        kind: PieceKind::L,
        rotations: [
            [(2, 0), (0, 1), (1, 1), (2, 1)],
            [(1, 0), (1, 1), (1, 2), (2, 2)],
            [(0, 1), (1, 1), (2, 1), (0, 2)],
            [(0, 0), (1, 0), (1, 1), (1, 2)],
        ],
        rgba: 0xffaa_00ff,
    },
    TetrominoShape {
        kind: PieceKind::O,
        rotations: [
            [(1, 0), (2, 0), (1, 1), (2, 1)],
            [(1, 0), (2, 0), (1, 1), (2, 1)],
            [(1, 0), (2, 0), (1, 1), (2, 1)],
            [(1, 0), (2, 0), (1, 1), (2, 1)],
        ],
        rgba: 0xffff_00ff,
    },
    TetrominoShape {
        kind: PieceKind::S,
        rotations: [
            [(1, 0), (2, 0), (0, 1), (1, 1)],
            [(1, 0), (1, 1), (2, 1), (2, 2)],
            [(1, 1), (2, 1), (0, 2), (1, 2)],
            [(0, 0), (0, 1), (1, 1), (1, 2)],
        ],
        rgba: 0x00ff_00ff,
    },
    TetrominoShape {
        kind: PieceKind::T,
        rotations: [
            [(1, 0), (0, 1), (1, 1), (2, 1)],
            [(1, 0), (1, 1), (2, 1), (1, 2)],
            [(0, 1), (1, 1), (2, 1), (1, 2)],
            [(1, 0), (0, 1), (1, 1), (1, 2)],
        ],
        rgba: 0x9900_ffff,
    },
    TetrominoShape {
        kind: PieceKind::Z,
        rotations: [
            [(0, 0), (1, 0), (1, 1), (2, 1)],
            [(2, 0), (1, 1), (2, 1), (1, 2)],
            [(0, 1), (1, 1), (1, 2), (2, 2)],
            [(1, 0), (0, 1), (1, 1), (0, 2)],
        ],
        rgba: 0xff00_00ff,
    },
];

/// Catalog entry for a kind
pub fn tetromino(kind: PieceKind) -> &'static TetrominoShape {
    &CATALOG[kind.index()]
}

/// Block offsets for a kind at a rotation
pub fn shape_of(kind: PieceKind, rotation: Rotation) -> PieceShape {
    CATALOG[kind.index()].rotations[rotation.index()]
}

/// Display color (RGBA) for a kind
pub fn color_of(kind: PieceKind) -> u32 {
    CATALOG[kind.index()].rgba
}

/// Check every (kind, rotation) entry: the entry sits at its kind's slot,
/// and each shape has four distinct, edge-connected blocks inside the 4x4 box.
pub fn validate_catalog() -> Result<(), CatalogError> {
    for (slot, entry) in CATALOG.iter().enumerate() {
        if entry.kind.index() != slot {
            return Err(CatalogError::Misplaced {
                kind: entry.kind,
                slot,
            });
        }
        for rotation in Rotation::ALL {
            validate_shape(entry.kind, rotation, &entry.rotations[rotation.index()])?;
        }
    }
    Ok(())
}

fn validate_shape(
    kind: PieceKind,
    rotation: Rotation,
    shape: &PieceShape,
) -> Result<(), CatalogError> {
    let malformed = |reason: &'static str| CatalogError::MalformedShape {
        kind,
        rotation,
        reason,
    };

    if shape.iter().any(|&(x, y)| x >= PIECE_BOX || y >= PIECE_BOX) {
        return Err(malformed("block outside the 4x4 box"));
    }
    for (i, a) in shape.iter().enumerate() {
        if shape[i + 1..].contains(a) {
            return Err(malformed("duplicate block"));
        }
    }

    // Flood fill from the first block over edge neighbours.
    let mut reached = [false; BLOCKS_PER_PIECE];
    reached[0] = true;
    let mut stack = vec![0usize];
    while let Some(i) = stack.pop() {
        let (ax, ay) = shape[i];
        for (j, &(bx, by)) in shape.iter().enumerate() {
            if !reached[j] && ax.abs_diff(bx) + ay.abs_diff(by) == 1 {
                reached[j] = true;
                stack.push(j);
            }
        }
    }
    if reached.iter().all(|&r| r) {
        Ok(())
    } else {
        Err(malformed("blocks are not connected"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_valid() {
        assert_eq!(validate_catalog(), Ok(()));
    }

    #[test]
    fn every_entry_has_four_blocks() {
        for kind in PieceKind::ALL {
            for rotation in Rotation::ALL {
                assert_eq!(shape_of(kind, rotation).len(), 4);
            }
        }
    }

    #[test]
    fn o_piece_is_rotation_invariant() {
        let r0 = shape_of(PieceKind::O, Rotation::R0);
        for rotation in Rotation::ALL {
            assert_eq!(shape_of(PieceKind::O, rotation), r0);
        }
    }

    #[test]
    fn disconnected_shape_is_rejected() {
        let shape = [(0, 0), (1, 0), (3, 0), (3, 1)];
        assert!(matches!(
            validate_shape(PieceKind::I, Rotation::R0, &shape),
            Err(CatalogError::MalformedShape { .. })
        ));
    }

    #[test]
    fn duplicate_block_is_rejected() {
        let shape = [(0, 0), (1, 0), (1, 0), (2, 0)];
        assert!(validate_shape(PieceKind::T, Rotation::R1, &shape).is_err());
    }

    #[test]
    fn colors_match_catalog() {
        assert_eq!(color_of(PieceKind::I), 0x00ff_ffff);
        assert_eq!(color_of(PieceKind::Z), 0xff00_00ff);
        assert_eq!(tetromino(PieceKind::T).kind, PieceKind::T);
    }
}
