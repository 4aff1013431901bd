//! `StandAloneSig` table module
//!
//! ECMA-335, Partition II, Section 22.36. The table holds signatures that are not referenced by any other table.

mod raw;

pub use raw::*;
