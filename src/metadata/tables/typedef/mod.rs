//! `TypeDef` table module
//!
//! ECMA-335, Partition II, Section 22.37. The table holds the types defined in this module:
//! classes, interfaces, value types, enums and delegates. Row 1 is the `<Module>` pseudo type
//! that owns global fields and methods.
//!
//! ## Table Structure
//!
//! - **Flags** (4 bytes): [`TypeAttributes`] for visibility, layout and semantics
//! - **TypeName** (`#Strings` index): the simple name of the type
//! - **TypeNamespace** (`#Strings` index): the namespace, empty for nested and global types
//! - **Extends** (`TypeDefOrRef` coded index): the base type, null for interfaces and `<Module>`
//! - **FieldList** (`Field` index): the first field owned by the type
//! - **MethodList** (`MethodDef` index): the first method owned by the type
//!
//! ## Member Organization
//!
//! A type owns the fields from its `FieldList` up to the `FieldList` of the next row, and the
//! last type owns everything up to the end of the `Field` table. Methods follow the same
//! scheme through `MethodList`:
//! ```text
//! TypeDef 2: FieldList = 1  ->  Field 1, 2
//! TypeDef 3: FieldList = 3  ->  Field 3, 4
//! ```
//! With a non-empty `FieldPtr` or `MethodPtr` table the list columns address the pointer table
//! instead, see [`crate::metadata::streams::TablesStream::field_range`].
//!
//! Nesting is not stored here. The `NestedClass` table links a nested type to its enclosing
//! type, and the visibility bits of the nested type use the `NESTED_*` values.
//!
//! **Table ID**: `0x02`

mod raw;

pub use raw::*;

#[allow(non_snake_case)]
/// Flag constants of the `TypeDef.Flags` column.
///
/// Visibility, layout and string format are small enumerations packed into bit fields. Select
/// them with the matching mask and compare the result, e.g.
/// `flags & VISIBILITY_MASK == NESTED_PUBLIC`. The remaining constants are single bits.
pub mod TypeAttributes {
    /// Use this mask to retrieve visibility information.
    ///
    /// Values above [`PUBLIC`] mark a nested type.
    pub const VISIBILITY_MASK: u32 = 0x0000_0007;
    /// Class has no public scope
    pub const NOT_PUBLIC: u32 = 0x0000_0000;
    /// Class has public scope
    pub const PUBLIC: u32 = 0x0000_0001;
    /// Class is nested with public visibility
    pub const NESTED_PUBLIC: u32 = 0x0000_0002;
    /// Class is nested with private visibility
    pub const NESTED_PRIVATE: u32 = 0x0000_0003;
    /// Class is nested with family visibility
    pub const NESTED_FAMILY: u32 = 0x0000_0004;
    /// Class is nested with assembly visibility
    pub const NESTED_ASSEMBLY: u32 = 0x0000_0005;
    /// Class is nested with family and assembly visibility
    pub const NESTED_FAM_AND_ASSEM: u32 = 0x0000_0006;
    /// Class is nested with family or assembly visibility
    pub const NESTED_FAM_OR_ASSEM: u32 = 0x0000_0007;
    /// Use this mask to retrieve class layout information.
    ///
    /// Explicit and sequential layouts may have a `ClassLayout` row with packing and size.
    pub const LAYOUT_MASK: u32 = 0x0000_0018;
    /// Class fields are auto-laid out
    pub const AUTO_LAYOUT: u32 = 0x0000_0000;
    /// Class fields are laid out sequentially
    pub const SEQUENTIAL_LAYOUT: u32 = 0x0000_0008;
    /// Layout is supplied explicitly, field offsets live in the `FieldLayout` table
    pub const EXPLICIT_LAYOUT: u32 = 0x0000_0010;
    /// Type is an interface. Interfaces have no base type and are always abstract.
    pub const INTERFACE: u32 = 0x0000_0020;
    /// Class is abstract
    pub const ABSTRACT: u32 = 0x0000_0080;
    /// Class cannot be extended
    pub const SEALED: u32 = 0x0000_0100;
    /// Class name is special
    pub const SPECIAL_NAME: u32 = 0x0000_0400;
    /// Class or interface is imported
    pub const IMPORT: u32 = 0x0000_1000;
    /// Class is serializable
    pub const SERIALIZABLE: u32 = 0x0000_2000;
    /// Use this mask to retrieve string information for native interop
    pub const STRING_FORMAT_MASK: u32 = 0x0003_0000;
    /// `LPTSTR` is interpreted as ANSI
    pub const ANSI_CLASS: u32 = 0x0000_0000;
    /// `LPTSTR` is interpreted as UNICODE
    pub const UNICODE_CLASS: u32 = 0x0001_0000;
    /// `LPTSTR` is interpreted automatically
    pub const AUTO_CLASS: u32 = 0x0002_0000;
    /// A non-standard encoding specified by `CUSTOM_FORMAT_MASK`
    pub const CUSTOM_FORMAT_CLASS: u32 = 0x0003_0000;
    /// Use this mask to retrieve the non-standard encoding for native interop
    pub const CUSTOM_FORMAT_MASK: u32 = 0x00C0_0000;
    /// Initialize the class before first static field access
    pub const BEFORE_FIELD_INIT: u32 = 0x0010_0000;
    /// CLI provides special behavior, depending upon the name of the type
    pub const RT_SPECIAL_NAME: u32 = 0x0000_0800;
    /// Type has security associated with it, a `DeclSecurity` row or a
    /// `SuppressUnmanagedCodeSecurityAttribute`
    pub const HAS_SECURITY: u32 = 0x0004_0000;
}
