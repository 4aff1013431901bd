//! `MemberRef` table module
//!
//! ECMA-335, Partition II, Section 22.25. The table holds references to fields and methods of other types.
//!
//! The first byte of the signature tells both apart: `0x06` for fields, a calling convention
//! for methods. Vararg call sites reference a `MethodDef` parent to describe the extra
//! arguments of one call.

mod raw;

pub use raw::*;
