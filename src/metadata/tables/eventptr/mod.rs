//! `EventPtr` table module
//!
//! Not part of ECMA-335 proper. Present only in uncompressed (`#-`) streams, where row `n`
//! of this table names the `Event` row at logical position `n`. Ranges of owners are
//! resolved through it whenever it holds rows.

mod raw;

pub use raw::*;
