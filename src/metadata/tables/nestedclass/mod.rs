//! `NestedClass` table module
//!
//! ECMA-335, Partition II, Section 22.32. The table holds the nesting relationships between types.
//!
//! One row per nested type, both columns are `TypeDef` indices. The table is sorted by
//! `NestedClass`, so the enclosing type of a type is found by binary search, while the
//! nested types of one enclosing type need a scan.

mod raw;

pub use raw::*;
