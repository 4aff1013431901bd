//! `ModuleRef` table module
//!
//! ECMA-335, Partition II, Section 22.31. The table holds references to other modules.

mod raw;

pub use raw::*;
