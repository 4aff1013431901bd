//! `LocalScope` table module
//!
//! Portable PDB v1.0. The table holds the lexical scopes of methods.

mod raw;

pub use raw::*;
