//! `ClassLayout` table module
//!
//! ECMA-335, Partition II, Section 22.8. The table holds explicit layout information of types.

mod raw;

pub use raw::*;
