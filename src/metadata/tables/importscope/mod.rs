//! `ImportScope` table module
//!
//! Portable PDB v1.0. The table holds the namespace import scopes.

mod raw;

pub use raw::*;
