//! `Property` table module
//!
//! ECMA-335, Partition II, Section 22.34. The table holds the properties of all types of this module.

mod raw;

pub use raw::*;

#[allow(non_snake_case)]
/// All possible flags for `PropertyAttributes`
pub mod PropertyAttributes {
    /// Property is special
    pub const SPECIAL_NAME: u16 = 0x0200;
    /// Runtime (metadata internal APIs) should check name encoding
    pub const RT_SPECIAL_NAME: u16 = 0x0400;
    /// Property has a default value
    pub const HAS_DEFAULT: u16 = 0x1000;
}
