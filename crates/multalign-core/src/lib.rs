//! # Multalign Core Library
//!
//! A library for the geometric and representational core of multiple structure
//! alignment: quaternion-based rigid-body superposition of 3D point clouds, and
//! a block-structured in-memory model of a multiple alignment together with the
//! traversal logic that turns it into gapped sequences and textual reports.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers with a strict dependency direction:
//!
//! - **[`core`]: The Foundation.** Stateless building blocks — pure point-cloud
//!   geometry (`centroid`, `center`, the quaternion key matrix), the immutable
//!   alignment data model (`Ensemble`, `Block`, `MultipleAlignment`), read-only
//!   derivation of gapped sequences and block positions, and the report
//!   renderers built on top of them.
//!
//! - **[`workflows`]: The Public API.** The highest-level entry points that tie
//!   the core primitives together into complete procedures, such as the full
//!   [`superpose`](workflows::superpose::superpose) routine that fits one point
//!   cloud onto another and reports the resulting transform and RMSD.
//!
//! Alignment models are produced upstream (by an alignment-search component
//! outside this crate) and treated as immutable inputs here; structure-file
//! parsing and any CLI surface are likewise external collaborators.

pub mod core;
pub mod workflows;
