//! `ExportedType` table module
//!
//! ECMA-335, Partition II, Section 22.14. The table holds types exported or forwarded by this assembly.

mod raw;

pub use raw::*;
