//! `GenericParamConstraint` table module
//!
//! ECMA-335, Partition II, Section 22.21. The table holds the constraints of generic parameters.

mod raw;

pub use raw::*;
