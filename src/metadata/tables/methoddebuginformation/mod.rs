//! `MethodDebugInformation` table module
//!
//! Portable PDB v1.0. The table holds the sequence points of methods. Rows are parallel to the `MethodDef` table.

mod raw;

pub use raw::*;
