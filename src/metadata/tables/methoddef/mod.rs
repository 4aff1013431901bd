//! `MethodDef` table module
//!
//! ECMA-335, Partition II, Section 22.26. The table holds the methods of all types of this module.
//!
//! ## Table Structure
//!
//! - **RVA** (4 bytes): start of the method body, 0 for abstract, runtime and P/Invoke methods
//! - **ImplFlags** (2 bytes): [`MethodImplAttributes`]
//! - **Flags** (2 bytes): [`MethodAttributes`]
//! - **Name** (`#Strings` index)
//! - **Signature** (`#Blob` index)
//! - **ParamList** (`Param` index): the first parameter owned by the method
//!
//! The RVA is the only column that points outside of the metadata. It is kept as read and
//! translated by a [`crate::file::RvaResolver`] on request.
//!
//! **Table ID**: `0x06`

mod raw;

pub use raw::*;

#[allow(non_snake_case)]
/// All possible flags for `MethodAttributes`
pub mod MethodAttributes {
    /// These 3 bits contain one of the access values below
    pub const MEMBER_ACCESS_MASK: u16 = 0x0007;
    /// Member not referenceable
    pub const COMPILER_CONTROLLED: u16 = 0x0000;
    /// Accessible only by the parent type
    pub const PRIVATE: u16 = 0x0001;
    /// Accessible by sub-types only in this assembly
    pub const FAM_AND_ASSEM: u16 = 0x0002;
    /// Accessible by anyone in the assembly
    pub const ASSEMBLY: u16 = 0x0003;
    /// Accessible only by type and sub-types
    pub const FAMILY: u16 = 0x0004;
    /// Accessible by sub-types anywhere, plus anyone in the assembly
    pub const FAM_OR_ASSEM: u16 = 0x0005;
    /// Accessible by anyone who has visibility to this scope
    pub const PUBLIC: u16 = 0x0006;
    /// Defined on type, else per instance
    pub const STATIC: u16 = 0x0010;
    /// Method cannot be overridden
    pub const FINAL: u16 = 0x0020;
    /// Method is virtual
    pub const VIRTUAL: u16 = 0x0040;
    /// Method hides by name and signature, else just by name
    pub const HIDE_BY_SIG: u16 = 0x0080;
    /// Method always gets a new slot in the vtable
    pub const NEW_SLOT: u16 = 0x0100;
    /// Method can only be overridden if also accessible
    pub const STRICT: u16 = 0x0200;
    /// Method does not provide an implementation
    pub const ABSTRACT: u16 = 0x0400;
    /// Method is special
    pub const SPECIAL_NAME: u16 = 0x0800;
    /// Implementation is forwarded through `PInvoke`
    pub const PINVOKE_IMPL: u16 = 0x2000;
    /// CLI provides special behavior, depending upon the name of the method
    pub const RTSPECIAL_NAME: u16 = 0x1000;
    /// Method has security associated with it
    pub const HAS_SECURITY: u16 = 0x4000;
    /// Method calls another method containing security code
    pub const REQUIRE_SEC_OBJECT: u16 = 0x8000;
}

#[allow(non_snake_case)]
/// All possible flags for `MethodImplAttributes`
pub mod MethodImplAttributes {
    /// Flags about code type
    pub const CODE_TYPE_MASK: u16 = 0x0003;
    /// Method implementation is CIL
    pub const IL: u16 = 0x0000;
    /// Method implementation is native
    pub const NATIVE: u16 = 0x0001;
    /// Method implementation is provided by the runtime
    pub const RUNTIME: u16 = 0x0003;
    /// Method is not defined in this module
    pub const UNMANAGED: u16 = 0x0004;
    /// Method cannot be inlined
    pub const NO_INLINING: u16 = 0x0008;
    /// Method is defined, used for forward references
    pub const FORWARD_REF: u16 = 0x0010;
    /// Method is single threaded through the body
    pub const SYNCHRONIZED: u16 = 0x0020;
    /// Method will not be optimized when generating native code
    pub const NO_OPTIMIZATION: u16 = 0x0040;
    /// Method signature is exported exactly as declared
    pub const PRESERVE_SIG: u16 = 0x0080;
    /// Method should be inlined if possible
    pub const AGGRESSIVE_INLINING: u16 = 0x0100;
    /// Method is an internal call
    pub const INTERNAL_CALL: u16 = 0x1000;
}
