//! `EventMap` table module
//!
//! ECMA-335, Partition II, Section 22.12. The table holds the mapping from types to the events they own.

mod raw;

pub use raw::*;
