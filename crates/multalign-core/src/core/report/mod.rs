//! # Report Rendering Module
//!
//! Textual renderings of a [`MultipleAlignment`](crate::core::models::alignment::MultipleAlignment):
//!
//! - [`fasta`] - one `>`-headed gapped sequence per structure
//! - [`fatcat`] - summary line plus labeled sequences interleaved with
//!   block-number annotation lines
//! - [`residues`] - tab-delimited listing of the aligned residue groups,
//!   one line per alignment column
//!
//! The renderers consume the derivation outputs unchanged and propagate any
//! [`ModelError`](crate::core::models::error::ModelError) as-is.

pub mod fasta;
pub mod fatcat;
pub mod residues;
