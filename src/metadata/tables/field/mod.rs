//! `Field` table module
//!
//! ECMA-335, Partition II, Section 22.15. The table holds the fields of all types of this module.
//!
//! ## Table Structure
//!
//! - **Flags** (2 bytes): [`FieldAttributes`], access and storage of the field
//! - **Name** (`#Strings` index)
//! - **Signature** (`#Blob` index): a field signature, starting with `0x06`
//!
//! Fields carry no back reference to their type. The owner is found through the
//! `TypeDef.FieldList` ranges, see
//! [`crate::metadata::streams::TablesStream::field_declaring_type`]. Optional data lives in
//! side tables keyed by the field: `Constant`, `FieldLayout`, `FieldMarshal` and `FieldRVA`.
//!
//! **Table ID**: `0x04`

mod raw;

pub use raw::*;

#[allow(non_snake_case)]
/// All possible flags for `FieldAttributes`
pub mod FieldAttributes {
    /// These 3 bits contain one of the access values below
    pub const FIELD_ACCESS_MASK: u16 = 0x0007;
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
    /// Field can only be initialized, not written to after init
    pub const INIT_ONLY: u16 = 0x0020;
    /// Value is compile time constant
    pub const LITERAL: u16 = 0x0040;
    /// Field should not be serialized when the type is remoted
    pub const NOT_SERIALIZED: u16 = 0x0080;
    /// Field has an RVA
    pub const HAS_FIELD_RVA: u16 = 0x0100;
    /// Field is special
    pub const SPECIAL_NAME: u16 = 0x0200;
    /// CLI provides special behavior, depending upon the name of the field
    pub const RTSPECIAL_NAME: u16 = 0x0400;
    /// Field has marshalling information
    pub const HAS_FIELD_MARSHAL: u16 = 0x1000;
    /// Implementation is forwarded through `PInvoke`
    pub const PINVOKE_IMPL: u16 = 0x2000;
    /// Field has a default value
    pub const HAS_DEFAULT: u16 = 0x8000;
}
