use super::error::ModelError;
use serde::{Deserialize, Serialize};

/// One contiguous unit of the alignment.
///
/// A block holds, for each of the N structures, an ordered row of length L
/// (the block's column count) of residue references. A reference is either
/// `Some(index)` into that structure's residue array in the ensemble, or
/// `None` where the structure contributes no residue (a gap). Column `i`
/// across all rows represents one alignment position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    rows: Vec<Vec<Option<usize>>>,
}

impl Block {
    /// Builds a block from per-structure rows, rejecting ragged input: every
    /// row must have the same length.
    pub fn new(rows: Vec<Vec<Option<usize>>>) -> Result<Self, ModelError> {
        let block = Self { rows };
        block.check_shape()?;
        Ok(block)
    }

    /// Column count L of this block.
    pub fn length(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Number of per-structure rows.
    pub fn num_structures(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Option<usize>>] {
        &self.rows
    }

    pub fn row(&self, structure: usize) -> Option<&[Option<usize>]> {
        self.rows.get(structure).map(|row| row.as_slice())
    }

    /// Residue reference of `structure` at `column`; `None` for a gap or an
    /// out-of-range lookup.
    pub fn aligned_residue(&self, structure: usize, column: usize) -> Option<usize> {
        self.rows.get(structure)?.get(column).copied().flatten()
    }

    pub(crate) fn check_shape(&self) -> Result<(), ModelError> {
        let first = self.rows.first().ok_or(ModelError::EmptyBlock)?;
        let expected = first.len();
        for (structure, row) in self.rows.iter().enumerate() {
            if row.len() != expected {
                return Err(ModelError::RaggedBlock {
                    structure,
                    expected,
                    found: row.len(),
                });
            }
        }
        Ok(())
    }
}
