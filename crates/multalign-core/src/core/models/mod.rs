//! # Alignment Model Module
//!
//! The immutable in-memory representation of a multiple structure alignment.
//!
//! ## Key Components
//!
//! - [`residue`] - Per-position residue metadata (number, chain, name) and
//!   the representative coordinate used for superposition
//! - [`ensemble`] - The shared collection of participating structures
//! - [`block`] - One contiguous run of alignment columns with per-structure
//!   residue/gap assignment
//! - [`alignment`] - The [`alignment::MultipleAlignment`] container tying an
//!   ensemble to an ordered list of blocks, with its validation rules
//! - [`error`] - Model-consistency failures
//!
//! Models are produced by an upstream alignment-search component and consumed
//! read-only here. Blocks never copy coordinates: they store plain indices
//! into the ensemble's index-stable residue arrays, so the ensemble remains
//! the single source of truth.

pub mod alignment;
pub mod block;
pub mod ensemble;
pub mod error;
pub mod residue;
