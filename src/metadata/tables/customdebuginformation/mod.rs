//! `CustomDebugInformation` table module
//!
//! Portable PDB v1.0. The table holds custom debug records attached to metadata entities.

mod raw;

pub use raw::*;
