//! `TypeSpec` table module
//!
//! ECMA-335, Partition II, Section 22.39. The table holds type specifications.

mod raw;

pub use raw::*;
