//! `FieldRVA` table module
//!
//! ECMA-335, Partition II, Section 22.18. The table holds the initial data of fields.

mod raw;

pub use raw::*;
