//! `LocalConstant` table module
//!
//! Portable PDB v1.0. The table holds the local constants of scopes.

mod raw;

pub use raw::*;
