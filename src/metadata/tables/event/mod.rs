//! `Event` table module
//!
//! ECMA-335, Partition II, Section 22.13. The table holds the events of all types of this module.

mod raw;

pub use raw::*;

#[allow(non_snake_case)]
/// All possible flags for `EventAttributes`
pub mod EventAttributes {
    /// Event is special
    pub const SPECIAL_NAME: u16 = 0x0200;
    /// CLI provides special behavior, depending upon the name of the event
    pub const RTSPECIAL_NAME: u16 = 0x0400;
}
