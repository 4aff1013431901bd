use strum::{EnumCount, EnumIter};

use crate::{Error, Result};

/// Identifiers of the metadata tables defined by ECMA-335 and the Portable PDB format.
///
/// The discriminant of every variant is the table number, which is at the same time the bit
/// position used in the `valid` and `sorted` masks of the tables stream and the top byte of a
/// [`crate::metadata::token::Token`]. Iterating with [`strum::IntoEnumIterator`] yields the
/// tables in ascending table number, which is the order their row counts and row data are
/// stored in.
///
/// ## Table Categories
///
/// ### Core Type System
/// - **`Module`**, **`TypeRef`**, **`TypeDef`**, **`Field`**, **`MethodDef`**, **`Param`**
///
/// ### Indirection (uncompressed `#-` streams)
/// - **`FieldPtr`**, **`MethodPtr`**, **`ParamPtr`**, **`EventPtr`**, **`PropertyPtr`**
///
/// ### Assembly Information
/// - **`Assembly`**, **`AssemblyRef`** and their `Processor`/`OS` companions
///
/// ### Portable PDB
/// - **`Document`** through **`CustomDebugInformation`** (0x30 - 0x37)
///
/// ## Reference
/// * [ECMA-335 Partition II, Section 22](https://ecma-international.org/wp-content/uploads/ECMA-335_6th_edition_june_2012.pdf) - Metadata Tables
#[derive(Clone, Copy, PartialEq, Debug, EnumIter, EnumCount, Eq, Hash, PartialOrd, Ord)]
pub enum TableId {
    /// `Module` table (0x00) - The single row describing the current module.
    Module = 0x00,
    /// `TypeRef` table (0x01) - References to types defined elsewhere.
    TypeRef = 0x01,
    /// `TypeDef` table (0x02) - Types defined in this module.
    ///
    /// Owns ranges of `Field` and `MethodDef` rows through its `field_list` and
    /// `method_list` columns.
    TypeDef = 0x02,
    /// `FieldPtr` table (0x03) - Indirection into the `Field` table.
    FieldPtr = 0x03,
    /// `Field` table (0x04) - Field definitions.
    Field = 0x04,
    /// `MethodPtr` table (0x05) - Indirection into the `MethodDef` table.
    MethodPtr = 0x05,
    /// `MethodDef` table (0x06) - Method definitions.
    MethodDef = 0x06,
    /// `ParamPtr` table (0x07) - Indirection into the `Param` table.
    ParamPtr = 0x07,
    /// `Param` table (0x08) - Parameter definitions.
    Param = 0x08,
    /// `InterfaceImpl` table (0x09) - Interfaces implemented by types.
    InterfaceImpl = 0x09,
    /// `MemberRef` table (0x0A) - References to fields and methods.
    MemberRef = 0x0A,
    /// `Constant` table (0x0B) - Compile-time constants of fields, params and properties.
    Constant = 0x0B,
    /// `CustomAttribute` table (0x0C) - Custom attribute applications.
    CustomAttribute = 0x0C,
    /// `FieldMarshal` table (0x0D) - Marshalling descriptors.
    FieldMarshal = 0x0D,
    /// `DeclSecurity` table (0x0E) - Declarative security permission sets.
    DeclSecurity = 0x0E,
    /// `ClassLayout` table (0x0F) - Explicit type layout.
    ClassLayout = 0x0F,
    /// `FieldLayout` table (0x10) - Explicit field offsets.
    FieldLayout = 0x10,
    /// `StandAloneSig` table (0x11) - Standalone signatures.
    StandAloneSig = 0x11,
    /// `EventMap` table (0x12) - Type to event list mapping.
    EventMap = 0x12,
    /// `EventPtr` table (0x13) - Indirection into the `Event` table.
    EventPtr = 0x13,
    /// `Event` table (0x14) - Event definitions.
    Event = 0x14,
    /// `PropertyMap` table (0x15) - Type to property list mapping.
    PropertyMap = 0x15,
    /// `PropertyPtr` table (0x16) - Indirection into the `Property` table.
    PropertyPtr = 0x16,
    /// `Property` table (0x17) - Property definitions.
    Property = 0x17,
    /// `MethodSemantics` table (0x18) - Accessor methods of properties and events.
    MethodSemantics = 0x18,
    /// `MethodImpl` table (0x19) - Explicit method overrides.
    MethodImpl = 0x19,
    /// `ModuleRef` table (0x1A) - References to other modules.
    ModuleRef = 0x1A,
    /// `TypeSpec` table (0x1B) - Type specifications.
    TypeSpec = 0x1B,
    /// `ImplMap` table (0x1C) - P/Invoke mappings.
    ImplMap = 0x1C,
    /// `FieldRVA` table (0x1D) - Initial data of fields.
    FieldRVA = 0x1D,
    /// `EncLog` table (0x1E) - Edit-and-continue log.
    EncLog = 0x1E,
    /// `EncMap` table (0x1F) - Edit-and-continue token map.
    EncMap = 0x1F,
    /// `Assembly` table (0x20) - The assembly manifest.
    Assembly = 0x20,
    /// `AssemblyProcessor` table (0x21) - Unused, should be empty.
    AssemblyProcessor = 0x21,
    /// `AssemblyOS` table (0x22) - Unused, should be empty.
    AssemblyOS = 0x22,
    /// `AssemblyRef` table (0x23) - Referenced assemblies.
    AssemblyRef = 0x23,
    /// `AssemblyRefProcessor` table (0x24) - Unused, should be empty.
    AssemblyRefProcessor = 0x24,
    /// `AssemblyRefOS` table (0x25) - Unused, should be empty.
    AssemblyRefOS = 0x25,
    /// `File` table (0x26) - Files of a multi-module assembly.
    File = 0x26,
    /// `ExportedType` table (0x27) - Types exported or forwarded by this assembly.
    ExportedType = 0x27,
    /// `ManifestResource` table (0x28) - Resources of the assembly.
    ManifestResource = 0x28,
    /// `NestedClass` table (0x29) - Nesting relationships between types.
    NestedClass = 0x29,
    /// `GenericParam` table (0x2A) - Generic parameters of types and methods.
    GenericParam = 0x2A,
    /// `MethodSpec` table (0x2B) - Generic method instantiations.
    MethodSpec = 0x2B,
    /// `GenericParamConstraint` table (0x2C) - Constraints of generic parameters.
    GenericParamConstraint = 0x2C,
    /// `Document` table (0x30) - Portable PDB source documents.
    Document = 0x30,
    /// `MethodDebugInformation` table (0x31) - Portable PDB sequence points.
    MethodDebugInformation = 0x31,
    /// `LocalScope` table (0x32) - Portable PDB lexical scopes.
    LocalScope = 0x32,
    /// `LocalVariable` table (0x33) - Portable PDB local variables.
    LocalVariable = 0x33,
    /// `LocalConstant` table (0x34) - Portable PDB local constants.
    LocalConstant = 0x34,
    /// `ImportScope` table (0x35) - Portable PDB namespace import scopes.
    ImportScope = 0x35,
    /// `StateMachineMethod` table (0x36) - Portable PDB async/iterator kickoff mapping.
    StateMachineMethod = 0x36,
    /// `CustomDebugInformation` table (0x37) - Portable PDB custom debug records.
    CustomDebugInformation = 0x37,
}

impl TableId {
    /// The value placed in the top byte of a token referencing this table.
    #[must_use]
    pub fn token_type(&self) -> u32 {
        *self as u32
    }

    /// The bit of this table in the `valid` and `sorted` masks
    #[must_use]
    pub fn mask_bit(&self) -> u64 {
        1_u64 << (*self as u64)
    }

    /// True for the Portable PDB tables (0x30 - 0x37)
    #[must_use]
    pub fn is_pdb(&self) -> bool {
        (*self as u8) >= 0x30
    }

    /// True for the five indirection tables of uncompressed streams
    #[must_use]
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            TableId::FieldPtr
                | TableId::MethodPtr
                | TableId::ParamPtr
                | TableId::EventPtr
                | TableId::PropertyPtr
        )
    }

    /// The columns a table has to be sorted by, primary key first.
    ///
    /// Returns `None` for tables without a designated sort order. The list follows
    /// ECMA-335 II.22 and the Portable PDB specification.
    #[must_use]
    pub fn sort_key(&self) -> Option<&'static [usize]> {
        match self {
            TableId::InterfaceImpl
            | TableId::MethodImpl
            | TableId::NestedClass
            | TableId::LocalScope
            | TableId::StateMachineMethod
            | TableId::GenericParamConstraint
            | TableId::CustomAttribute
            | TableId::FieldMarshal
            | TableId::CustomDebugInformation => Some(&[0]),
            TableId::FieldRVA
            | TableId::FieldLayout
            | TableId::ImplMap
            | TableId::DeclSecurity => Some(&[1]),
            TableId::Constant | TableId::ClassLayout => Some(&[2]),
            TableId::MethodSemantics => Some(&[2]),
            TableId::GenericParam => Some(&[2, 0]),
            _ => None,
        }
    }
}

impl TryFrom<u8> for TableId {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Ok(match value {
            0x00 => TableId::Module,
            0x01 => TableId::TypeRef,
            0x02 => TableId::TypeDef,
            0x03 => TableId::FieldPtr,
            0x04 => TableId::Field,
            0x05 => TableId::MethodPtr,
            0x06 => TableId::MethodDef,
            0x07 => TableId::ParamPtr,
            0x08 => TableId::Param,
            0x09 => TableId::InterfaceImpl,
            0x0A => TableId::MemberRef,
            0x0B => TableId::Constant,
            0x0C => TableId::CustomAttribute,
            0x0D => TableId::FieldMarshal,
            0x0E => TableId::DeclSecurity,
            0x0F => TableId::ClassLayout,
            0x10 => TableId::FieldLayout,
            0x11 => TableId::StandAloneSig,
            0x12 => TableId::EventMap,
            0x13 => TableId::EventPtr,
            0x14 => TableId::Event,
            0x15 => TableId::PropertyMap,
            0x16 => TableId::PropertyPtr,
            0x17 => TableId::Property,
            0x18 => TableId::MethodSemantics,
            0x19 => TableId::MethodImpl,
            0x1A => TableId::ModuleRef,
            0x1B => TableId::TypeSpec,
            0x1C => TableId::ImplMap,
            0x1D => TableId::FieldRVA,
            0x1E => TableId::EncLog,
            0x1F => TableId::EncMap,
            0x20 => TableId::Assembly,
            0x21 => TableId::AssemblyProcessor,
            0x22 => TableId::AssemblyOS,
            0x23 => TableId::AssemblyRef,
            0x24 => TableId::AssemblyRefProcessor,
            0x25 => TableId::AssemblyRefOS,
            0x26 => TableId::File,
            0x27 => TableId::ExportedType,
            0x28 => TableId::ManifestResource,
            0x29 => TableId::NestedClass,
            0x2A => TableId::GenericParam,
            0x2B => TableId::MethodSpec,
            0x2C => TableId::GenericParamConstraint,
            0x30 => TableId::Document,
            0x31 => TableId::MethodDebugInformation,
            0x32 => TableId::LocalScope,
            0x33 => TableId::LocalVariable,
            0x34 => TableId::LocalConstant,
            0x35 => TableId::ImportScope,
            0x36 => TableId::StateMachineMethod,
            0x37 => TableId::CustomDebugInformation,
            _ => return Err(malformed_error!("Unknown table ID: 0x{:02x}", value)),
        })
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn discriminants_roundtrip() {
        for table in TableId::iter() {
            assert_eq!(TableId::try_from(table as u8).unwrap(), table);
        }

        assert!(TableId::try_from(0x2D).is_err());
        assert!(TableId::try_from(0x2F).is_err());
        assert!(TableId::try_from(0x38).is_err());
    }

    #[test]
    fn iteration_order_is_ascending() {
        let ids: Vec<u8> = TableId::iter().map(|t| t as u8).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        assert_eq!(TableId::COUNT, 53);
    }

    #[test]
    fn mask_bits() {
        assert_eq!(TableId::Module.mask_bit(), 1);
        assert_eq!(TableId::Assembly.mask_bit(), 0x1_0000_0000);
        assert_eq!(TableId::CustomDebugInformation.mask_bit(), 1 << 0x37);
        assert!(TableId::Document.is_pdb());
        assert!(!TableId::GenericParamConstraint.is_pdb());
        assert!(TableId::PropertyPtr.is_pointer());
        assert!(!TableId::Property.is_pointer());
    }
}
