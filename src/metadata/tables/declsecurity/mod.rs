//! `DeclSecurity` table module
//!
//! ECMA-335, Partition II, Section 22.11. The table holds declarative security permission sets.

mod raw;

pub use raw::*;

#[allow(non_snake_case)]
/// Values of the `Action` column, §II.22.11
pub mod SecurityAction {
    /// Demand the permission of all callers
    pub const DEMAND: u16 = 0x0002;
    /// Assert the permission for callers
    pub const ASSERT: u16 = 0x0003;
    /// Deny the permission
    pub const DENY: u16 = 0x0004;
    /// Permit only the given permission
    pub const PERMIT_ONLY: u16 = 0x0005;
    /// Demand the permission of the immediate caller
    pub const LINK_DEMAND: u16 = 0x0006;
    /// Demand the permission of derived classes
    pub const INHERITANCE_DEMAND: u16 = 0x0007;
    /// Minimum permissions required to run
    pub const REQUEST_MINIMUM: u16 = 0x0008;
    /// Optional permissions
    pub const REQUEST_OPTIONAL: u16 = 0x0009;
    /// Permissions that must not be granted
    pub const REQUEST_REFUSE: u16 = 0x000A;
}
