use super::block::Block;
use super::ensemble::Ensemble;
use super::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A multiple structure alignment: an ordered sequence of [`Block`]s over a
/// shared [`Ensemble`].
///
/// Instances are produced by an upstream alignment-search component and are
/// immutable here. [`MultipleAlignment::new`] establishes the model
/// invariants (at least one structure, one row per structure in every block,
/// equal row lengths within a block, all residue indices in range); models
/// rebuilt through deserialization bypass the constructor, so consumers that
/// accept such input should call [`MultipleAlignment::validate`] first — the
/// derivation routines do so themselves before traversing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipleAlignment {
    ensemble: Ensemble,
    blocks: Vec<Block>,
}

impl MultipleAlignment {
    pub fn new(ensemble: Ensemble, blocks: Vec<Block>) -> Result<Self, ModelError> {
        let alignment = Self { ensemble, blocks };
        alignment.validate()?;
        Ok(alignment)
    }

    /// Number of structures participating in the alignment.
    pub fn size(&self) -> usize {
        self.ensemble.size()
    }

    pub fn ensemble(&self) -> &Ensemble {
        &self.ensemble
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Total aligned length: the sum of all block lengths.
    pub fn length(&self) -> usize {
        self.blocks.iter().map(Block::length).sum()
    }

    /// Re-checks every model invariant, failing on the first inconsistency.
    pub fn validate(&self) -> Result<(), ModelError> {
        let n = self.ensemble.size();
        if n == 0 {
            return Err(ModelError::NoStructures);
        }
        for (block_idx, block) in self.blocks.iter().enumerate() {
            if block.num_structures() != n {
                return Err(ModelError::StructureCountMismatch {
                    block: block_idx,
                    expected: n,
                    found: block.num_structures(),
                });
            }
            block.check_shape()?;
            for (structure, row) in block.rows().iter().enumerate() {
                let size = self.ensemble.structures()[structure].len();
                for index in row.iter().copied().flatten() {
                    if index >= size {
                        return Err(ModelError::ResidueIndexOutOfRange {
                            block: block_idx,
                            structure,
                            index,
                            size,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for MultipleAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Multiple Structure Alignment: {} structures, {} blocks, {} aligned columns",
            self.size(),
            self.blocks.len(),
            self.length()
        )
    }
}
