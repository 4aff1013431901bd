//! `AssemblyProcessor` table module
//!
//! ECMA-335, Partition II, Section 22.4. The table holds the processor of the assembly. Should be empty.

mod raw;

pub use raw::*;
