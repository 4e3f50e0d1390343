//! # Alignment Derivation Module
//!
//! Read-only traversal of a [`MultipleAlignment`](crate::core::models::alignment::MultipleAlignment):
//! per-structure gapped one-letter sequences spanning all blocks
//! ([`sequence`]) and the mapping from global aligned positions back to the
//! block they fall in ([`position`]).
//!
//! Everything here is pure integer and index arithmetic — for identical
//! inputs the outputs are byte-identical. Both entry points re-validate the
//! model before traversing, so an inconsistent model fails outright instead
//! of producing partial output.

pub mod position;
pub mod sequence;

/// Character emitted where a structure contributes no residue at a column.
pub const GAP_CHARACTER: char = '-';
