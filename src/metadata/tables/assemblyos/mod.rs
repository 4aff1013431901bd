//! `AssemblyOS` table module
//!
//! ECMA-335, Partition II, Section 22.3. The table holds the operating system of the assembly. Should be empty.

mod raw;

pub use raw::*;
