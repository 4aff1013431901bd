//! `File` table module
//!
//! ECMA-335, Partition II, Section 22.19. The table holds the files of a multi-module assembly.

mod raw;

pub use raw::*;

#[allow(non_snake_case)]
/// All possible flags for `FileAttributes`
pub mod FileAttributes {
    /// This is not a resource file
    pub const CONTAINS_META_DATA: u32 = 0x0000;
    /// This is a resource file or other non-metadata-containing file
    pub const CONTAINS_NO_META_DATA: u32 = 0x0001;
}
