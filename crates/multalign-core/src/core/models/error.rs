use thiserror::Error;

/// Failures indicating an inconsistent alignment model.
///
/// These always point at an invalid upstream model (or one rebuilt from
/// serialized data without re-validation) and are never tolerated silently:
/// no operation produces partial output once one of them is detected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Alignment must contain at least one structure")]
    NoStructures,

    #[error("Block must contain at least one row")]
    EmptyBlock,

    #[error("Row for structure {structure} has length {found}, expected {expected}")]
    RaggedBlock {
        structure: usize,
        expected: usize,
        found: usize,
    },

    #[error("Block {block}: holds {found} rows, expected one per structure ({expected})")]
    StructureCountMismatch {
        block: usize,
        expected: usize,
        found: usize,
    },

    #[error(
        "Block {block}: residue index {index} out of range for structure {structure} (holds {size} residues)"
    )]
    ResidueIndexOutOfRange {
        block: usize,
        structure: usize,
        index: usize,
        size: usize,
    },
}
