//! `Document` table module
//!
//! Portable PDB v1.0. The table holds the source documents of a Portable PDB.

mod raw;

pub use raw::*;
