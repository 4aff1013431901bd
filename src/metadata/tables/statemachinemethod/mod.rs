//! `StateMachineMethod` table module
//!
//! Portable PDB v1.0. The table holds the mapping from async and iterator state machines to their kickoff methods.

mod raw;

pub use raw::*;
