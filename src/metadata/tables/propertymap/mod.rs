//! `PropertyMap` table module
//!
//! ECMA-335, Partition II, Section 22.35. The table holds the mapping from types to the properties they own.
//!
//! Unlike fields and methods, properties are not owned by `TypeDef` rows directly. A type
//! with properties has one row here, and its properties run from `PropertyList` up to the
//! `PropertyList` of the next row.

mod raw;

pub use raw::*;
