//! `ManifestResource` table module
//!
//! ECMA-335, Partition II, Section 22.24. The table holds the resources of the assembly.

use bitflags::bitflags;

mod raw;

pub use raw::*;

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    /// All possible flags for `ManifestResourceAttributes`
    pub struct ManifestResourceAttributes : u32 {
        /// The resource is exported from the assembly
        const PUBLIC = 0x0001;
        /// The resource is private to the assembly
        const PRIVATE = 0x0002;
    }
}
