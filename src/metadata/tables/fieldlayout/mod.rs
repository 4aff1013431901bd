//! `FieldLayout` table module
//!
//! ECMA-335, Partition II, Section 22.16. The table holds explicit offsets of fields.

mod raw;

pub use raw::*;
