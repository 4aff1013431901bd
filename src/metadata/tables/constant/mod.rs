//! `Constant` table module
//!
//! ECMA-335, Partition II, Section 22.9. The table holds compile-time constant values of fields, parameters and properties.

mod raw;

pub use raw::*;
