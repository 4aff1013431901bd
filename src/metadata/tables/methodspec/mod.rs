//! `MethodSpec` table module
//!
//! ECMA-335, Partition II, Section 22.29. The table holds instantiations of generic methods.

mod raw;

pub use raw::*;
