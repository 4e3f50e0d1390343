//! # Workflows Module
//!
//! The highest-level entry points of the library, tying the core primitives
//! together into complete procedures. Currently this is the rigid-body
//! superposition workflow ([`superpose`]), which fits one point cloud onto
//! another and reports the optimal transform and the resulting RMSD.

pub mod superpose;
