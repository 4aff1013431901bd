//! `AssemblyRefProcessor` table module
//!
//! ECMA-335, Partition II, Section 22.7. The table holds the processor of referenced assemblies. Should be empty.

mod raw;

pub use raw::*;
