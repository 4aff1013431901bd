//! `TypeRef` table module
//!
//! ECMA-335, Partition II, Section 22.38. The table holds references to types that are defined in other modules or assemblies.
//!
//! The `ResolutionScope` column says where to look for the type: an `AssemblyRef` for types
//! of other assemblies, a `ModuleRef` for other modules of this assembly, another `TypeRef`
//! for nested types and `Module` for types of this module. A null scope means the type is
//! found through the `ExportedType` table.

mod raw;

pub use raw::*;
