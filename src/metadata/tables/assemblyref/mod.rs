//! `AssemblyRef` table module
//!
//! ECMA-335, Partition II, Section 22.5. The table holds the assemblies referenced by this module.

mod raw;

pub use raw::*;
