//! `InterfaceImpl` table module
//!
//! ECMA-335, Partition II, Section 22.23. The table holds the interfaces each type implements.

mod raw;

pub use raw::*;
