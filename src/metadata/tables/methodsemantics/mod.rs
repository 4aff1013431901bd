//! `MethodSemantics` table module
//!
//! ECMA-335, Partition II, Section 22.28. The table holds the accessor methods of properties and events.

mod raw;

pub use raw::*;

#[allow(non_snake_case)]
/// All possible flags for `MethodSemanticsAttributes`
pub mod MethodSemanticsAttributes {
    /// Setter for a property
    pub const SETTER: u16 = 0x0001;
    /// Getter for a property
    pub const GETTER: u16 = 0x0002;
    /// Other method for a property or event
    pub const OTHER: u16 = 0x0004;
    /// `AddOn` method for an event
    pub const ADD_ON: u16 = 0x0008;
    /// `RemoveOn` method for an event
    pub const REMOVE_ON: u16 = 0x0010;
    /// Fire method for an event
    pub const FIRE: u16 = 0x0020;
}
