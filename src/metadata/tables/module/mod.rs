//! `Module` table module
//!
//! ECMA-335, Partition II, Section 22.30. The table holds the current module. It holds exactly one row.
//!
//! `Mvid` identifies this build of the module. `EncId` and `EncBaseId` are only set in
//! edit-and-continue deltas.

mod raw;

pub use raw::*;
