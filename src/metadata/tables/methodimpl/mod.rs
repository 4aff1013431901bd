//! `MethodImpl` table module
//!
//! ECMA-335, Partition II, Section 22.27. The table holds explicit method overrides.

mod raw;

pub use raw::*;
