//! `FieldMarshal` table module
//!
//! ECMA-335, Partition II, Section 22.17. The table holds marshalling descriptors of fields and parameters.

mod raw;

pub use raw::*;
