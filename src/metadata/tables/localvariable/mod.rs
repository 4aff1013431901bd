//! `LocalVariable` table module
//!
//! Portable PDB v1.0. The table holds the local variables of scopes.

mod raw;

pub use raw::*;

#[allow(non_snake_case)]
/// All possible flags for `LocalVariableAttributes`
pub mod LocalVariableAttributes {
    /// The variable is hidden from the debugger
    pub const DEBUGGER_HIDDEN: u16 = 0x0001;
}
