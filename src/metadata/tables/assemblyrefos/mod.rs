//! `AssemblyRefOS` table module
//!
//! ECMA-335, Partition II, Section 22.6. The table holds the operating system of referenced assemblies. Should be empty.

mod raw;

pub use raw::*;
