use bitflags::bitflags;

/// Sorted mask emitted by the common .NET compilers.
///
/// Claims `InterfaceImpl`, `Constant`, `CustomAttribute`, `FieldMarshal`, `DeclSecurity`,
/// `ClassLayout`, `FieldLayout`, `MethodSemantics`, `MethodImpl`, `ImplMap`, `FieldRVA`,
/// `NestedClass`, `GenericParam` and `GenericParamConstraint` as sorted, whether present or not.
pub const COMPILER_SORTED_MASK: u64 = 0x0000_1600_3301_FA00;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    /// The `HeapSizes` byte of the tables stream header
    pub struct TablesStreamFlags: u8 {
        /// `#Strings` indices are 4 bytes
        const LARGE_STRINGS = 0x01;
        /// `#GUID` indices are 4 bytes
        const LARGE_GUID = 0x02;
        /// `#Blob` indices are 4 bytes
        const LARGE_BLOB = 0x04;
        /// Columns were created with an extra padding bit
        const PADDING_BIT = 0x08;
        /// The stream only holds deltas
        const DELTA_ONLY = 0x20;
        /// A 4 byte value follows the row counts
        const EXTRA_DATA = 0x40;
        /// Rows may be marked as deleted
        const HAS_DELETE = 0x80;
    }
}

/// How the sorted mask of a written tables stream is produced
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortedMaskPolicy {
    /// Set the bit of every table that has a sort key and whose rows are ordered by it
    #[default]
    Compute,
    /// Write the mask that was read, or 0 for a stream built from scratch
    Preserve,
    /// Write [`COMPILER_SORTED_MASK`]
    CompilerDefault,
}

/// Options of a [`crate::metadata::streams::TablesStream`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TablesStreamOptions {
    /// Every table, coded and heap index column is 4 bytes wide, for reading and writing
    pub force_large_columns: bool,
    /// Source of the sorted mask on write
    pub sorted_mask: SortedMaskPolicy,
    /// Copy tables that were neither modified nor resized from their original bytes
    pub copy_unmodified: bool,
}

impl Default for TablesStreamOptions {
    fn default() -> Self {
        TablesStreamOptions {
            force_large_columns: false,
            sorted_mask: SortedMaskPolicy::Compute,
            copy_unmodified: true,
        }
    }
}
