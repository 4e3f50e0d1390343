//! # Core Module
//!
//! The computational core of the library: the geometry primitives used for
//! rigid-body superposition and the data model plus traversal logic for
//! block-structured multiple structure alignments.
//!
//! ## Architecture
//!
//! - **Point-Cloud Geometry** ([`geometry`]) - Centroids, in-place rigid
//!   transforms, and the 4x4 quaternion key matrix for optimal rotation
//!   extraction
//! - **Alignment Representation** ([`models`]) - Ensembles, blocks, and the
//!   `MultipleAlignment` container with its validation rules
//! - **Alignment Derivation** ([`align`]) - Read-only traversal producing
//!   gapped per-structure sequences and position-to-block lookups
//! - **Report Rendering** ([`report`]) - FASTA, FatCat-style, and
//!   tab-delimited text outputs built from the derived sequences
//!
//! All operations are synchronous and side-effect-free apart from the
//! explicitly in-place geometry mutators. The model types are never mutated by
//! this crate once constructed, so sharing a [`models::alignment::MultipleAlignment`]
//! across threads for concurrent reads is safe.

pub mod align;
pub mod geometry;
pub mod models;
pub mod report;
