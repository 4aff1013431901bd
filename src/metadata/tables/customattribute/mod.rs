//! `CustomAttribute` table module
//!
//! ECMA-335, Partition II, Section 22.10. The table holds the custom attributes applied to metadata entities.
//!
//! Each row names the decorated entity through a `HasCustomAttribute` coded index, the
//! attribute constructor through a `CustomAttributeType` coded index (a `MethodDef` or a
//! `MemberRef`) and the serialized arguments in the `#Blob` heap. The table is sorted by
//! `Parent`, which makes the attributes of one entity a contiguous run.
//!
//! Tags 0, 1 and 4 of `CustomAttributeType` are unused. Such values are kept as read when
//! the table is written again.

mod raw;

pub use raw::*;
