//! `Param` table module
//!
//! ECMA-335, Partition II, Section 22.33. The table holds the parameters of all methods of this module.

mod raw;

pub use raw::*;

#[allow(non_snake_case)]
/// All possible flags for `ParamAttributes`
pub mod ParamAttributes {
    /// Param is `[In]`
    pub const IN: u16 = 0x0001;
    /// Param is `[Out]`
    pub const OUT: u16 = 0x0002;
    /// Param is optional
    pub const OPTIONAL: u16 = 0x0010;
    /// Param has a default value
    pub const HAS_DEFAULT: u16 = 0x1000;
    /// Param has marshalling information
    pub const HAS_FIELD_MARSHAL: u16 = 0x2000;
    /// Reserved, shall be zero
    pub const UNUSED: u16 = 0xcfe0;
}
