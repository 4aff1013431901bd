//! # dotmeta Prelude
//!
//! The types needed for most work with .NET metadata, for glob imports.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all dotmeta operations
pub use crate::Error;

/// The result type used throughout dotmeta
pub use crate::Result;

// ================================================================================================
// Entry Points
// ================================================================================================

/// PE container and RVA translation
pub use crate::file::{File, RvaResolver};

/// Metadata of one module
pub use crate::metadata::image::MetadataImage;

/// Metadata root
pub use crate::metadata::root::{Root, CIL_HEADER_MAGIC};

/// Metadata token type for referencing table entries
pub use crate::metadata::token::Token;

// ================================================================================================
// Entities
// ================================================================================================

/// Entities resolved from table rows
pub use crate::metadata::image::{
    AssemblyDefinition, AssemblyReference, CustomAttribute, EventDefinition, FieldDefinition,
    Member, MemberReference, MethodDefinition, ModuleDefinition, ModuleReference,
    ParameterDefinition, PropertyDefinition, TypeDefinition, TypeReference, TypeSpecification,
    Version,
};

// ================================================================================================
// Streams and Tables
// ================================================================================================

/// Heaps and the tables stream
pub use crate::metadata::streams::{
    Blob, Guid, SortedMaskPolicy, StreamHeader, Strings, TablesStream, TablesStreamFlags,
    TablesStreamOptions, UserStrings,
};

/// Table infrastructure
pub use crate::metadata::tables::{
    CodedIndex, CodedIndexType, IndexEncoder, MetadataRange, MetadataTable, TableData, TableId,
    TableInfo,
};

/// Flags and constants of the assembly tables
pub use crate::metadata::tables::{AssemblyFlags, AssemblyHashAlgorithm};
