//! `GenericParam` table module
//!
//! ECMA-335, Partition II, Section 22.20. The table holds the generic parameters of types and methods.

mod raw;

pub use raw::*;

#[allow(non_snake_case)]
/// All possible flags for `GenericParamAttributes`
pub mod GenericParamAttributes {
    /// Mask for the variance of the parameter
    pub const VARIANCE_MASK: u16 = 0x0003;
    /// The parameter is covariant
    pub const COVARIANT: u16 = 0x0001;
    /// The parameter is contravariant
    pub const CONTRAVARIANT: u16 = 0x0002;
    /// Mask for the special constraints
    pub const SPECIAL_CONSTRAINT_MASK: u16 = 0x001C;
    /// The parameter has the `class` constraint
    pub const REFERENCE_TYPE_CONSTRAINT: u16 = 0x0004;
    /// The parameter has the `valuetype` constraint
    pub const NOT_NULLABLE_VALUE_TYPE_CONSTRAINT: u16 = 0x0008;
    /// The parameter has the `.ctor` constraint
    pub const DEFAULT_CONSTRUCTOR_CONSTRAINT: u16 = 0x0010;
}
