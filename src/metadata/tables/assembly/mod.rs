//! `Assembly` table module
//!
//! ECMA-335, Partition II, Section 22.2. The table holds the assembly manifest. It holds zero or one row.

use bitflags::bitflags;

mod raw;

pub use raw::*;

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    /// All possible flags for `AssemblyFlags`, shared by the `Assembly` and `AssemblyRef` tables
    pub struct AssemblyFlags : u32 {
        /// The assembly reference holds the full (unhashed) public key
        const PUBLIC_KEY = 0x0001;
        /// The implementation of this assembly used at runtime is not expected to match the
        /// version seen at compile time
        const RETARGETABLE = 0x0100;
        /// Reserved
        const DISABLE_JIT_COMPILE_OPTIMIZER = 0x4000;
        /// Reserved
        const ENABLE_JIT_COMPILE_TRACKING = 0x8000;
    }
}

/// The hash algorithm of an assembly, §II.23.1.1
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssemblyHashAlgorithm {
    /// No hash algorithm
    None,
    /// MD5
    Md5,
    /// SHA-1
    Sha1,
    /// Any value not defined by ECMA-335
    Other(u32),
}

impl AssemblyHashAlgorithm {
    /// Value of `None`
    pub const NONE: u32 = 0x0000;
    /// Value of `Md5`
    pub const MD5: u32 = 0x8003;
    /// Value of `Sha1`
    pub const SHA1: u32 = 0x8004;

    /// The value stored in the `HashAlgId` column
    #[must_use]
    pub fn value(&self) -> u32 {
        match self {
            AssemblyHashAlgorithm::None => Self::NONE,
            AssemblyHashAlgorithm::Md5 => Self::MD5,
            AssemblyHashAlgorithm::Sha1 => Self::SHA1,
            AssemblyHashAlgorithm::Other(value) => *value,
        }
    }
}

impl From<u32> for AssemblyHashAlgorithm {
    fn from(value: u32) -> Self {
        match value {
            Self::NONE => AssemblyHashAlgorithm::None,
            Self::MD5 => AssemblyHashAlgorithm::Md5,
            Self::SHA1 => AssemblyHashAlgorithm::Sha1,
            other => AssemblyHashAlgorithm::Other(other),
        }
    }
}
