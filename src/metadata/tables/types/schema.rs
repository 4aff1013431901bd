//! Column schemas of all tables (ECMA-335 II.22, Portable PDB v1.0).

use crate::metadata::tables::{CodedIndexType as C, ColumnType, TableId};

use ColumnType::{Blob, Byte, Coded, Guid, String, Table, UInt16, UInt32};

/// A column name together with the kind of value it stores
pub type ColumnSchema = (&'static str, ColumnType);

impl TableId {
    /// The columns of this table in row order.
    ///
    /// Widths are resolved per stream, see [`crate::metadata::tables::TableLayout::resolve`].
    #[must_use]
    pub fn schema(&self) -> &'static [ColumnSchema] {
        match self {
            TableId::Module => &[
                ("Generation", UInt16),
                ("Name", String),
                ("Mvid", Guid),
                ("EncId", Guid),
                ("EncBaseId", Guid),
            ],
            TableId::TypeRef => &[
                ("ResolutionScope", Coded(C::ResolutionScope)),
                ("Name", String),
                ("Namespace", String),
            ],
            TableId::TypeDef => &[
                ("Flags", UInt32),
                ("Name", String),
                ("Namespace", String),
                ("Extends", Coded(C::TypeDefOrRef)),
                ("FieldList", Table(TableId::Field)),
                ("MethodList", Table(TableId::MethodDef)),
            ],
            TableId::FieldPtr => &[("Field", Table(TableId::Field))],
            TableId::Field => &[("Flags", UInt16), ("Name", String), ("Signature", Blob)],
            TableId::MethodPtr => &[("Method", Table(TableId::MethodDef))],
            TableId::MethodDef => &[
                ("RVA", UInt32),
                ("ImplFlags", UInt16),
                ("Flags", UInt16),
                ("Name", String),
                ("Signature", Blob),
                ("ParamList", Table(TableId::Param)),
            ],
            TableId::ParamPtr => &[("Param", Table(TableId::Param))],
            TableId::Param => &[("Flags", UInt16), ("Sequence", UInt16), ("Name", String)],
            TableId::InterfaceImpl => &[
                ("Class", Table(TableId::TypeDef)),
                ("Interface", Coded(C::TypeDefOrRef)),
            ],
            TableId::MemberRef => &[
                ("Parent", Coded(C::MemberRefParent)),
                ("Name", String),
                ("Signature", Blob),
            ],
            TableId::Constant => &[
                ("Type", Byte),
                ("Padding", Byte),
                ("Parent", Coded(C::HasConstant)),
                ("Value", Blob),
            ],
            TableId::CustomAttribute => &[
                ("Parent", Coded(C::HasCustomAttribute)),
                ("Type", Coded(C::CustomAttributeType)),
                ("Value", Blob),
            ],
            TableId::FieldMarshal => &[
                ("Parent", Coded(C::HasFieldMarshal)),
                ("NativeType", Blob),
            ],
            TableId::DeclSecurity => &[
                ("Action", UInt16),
                ("Parent", Coded(C::HasDeclSecurity)),
                ("PermissionSet", Blob),
            ],
            TableId::ClassLayout => &[
                ("PackingSize", UInt16),
                ("ClassSize", UInt32),
                ("Parent", Table(TableId::TypeDef)),
            ],
            TableId::FieldLayout => &[("Offset", UInt32), ("Field", Table(TableId::Field))],
            TableId::StandAloneSig => &[("Signature", Blob)],
            TableId::EventMap => &[
                ("Parent", Table(TableId::TypeDef)),
                ("EventList", Table(TableId::Event)),
            ],
            TableId::EventPtr => &[("Event", Table(TableId::Event))],
            TableId::Event => &[
                ("EventFlags", UInt16),
                ("Name", String),
                ("EventType", Coded(C::TypeDefOrRef)),
            ],
            TableId::PropertyMap => &[
                ("Parent", Table(TableId::TypeDef)),
                ("PropertyList", Table(TableId::Property)),
            ],
            TableId::PropertyPtr => &[("Property", Table(TableId::Property))],
            TableId::Property => &[("Flags", UInt16), ("Name", String), ("Type", Blob)],
            TableId::MethodSemantics => &[
                ("Semantics", UInt16),
                ("Method", Table(TableId::MethodDef)),
                ("Association", Coded(C::HasSemantics)),
            ],
            TableId::MethodImpl => &[
                ("Class", Table(TableId::TypeDef)),
                ("MethodBody", Coded(C::MethodDefOrRef)),
                ("MethodDeclaration", Coded(C::MethodDefOrRef)),
            ],
            TableId::ModuleRef => &[("Name", String)],
            TableId::TypeSpec => &[("Signature", Blob)],
            TableId::ImplMap => &[
                ("MappingFlags", UInt16),
                ("MemberForwarded", Coded(C::MemberForwarded)),
                ("ImportName", String),
                ("ImportScope", Table(TableId::ModuleRef)),
            ],
            TableId::FieldRVA => &[("RVA", UInt32), ("Field", Table(TableId::Field))],
            TableId::EncLog => &[("Token", UInt32), ("FuncCode", UInt32)],
            TableId::EncMap => &[("Token", UInt32)],
            TableId::Assembly => &[
                ("HashAlgId", UInt32),
                ("MajorVersion", UInt16),
                ("MinorVersion", UInt16),
                ("BuildNumber", UInt16),
                ("RevisionNumber", UInt16),
                ("Flags", UInt32),
                ("PublicKey", Blob),
                ("Name", String),
                ("Culture", String),
            ],
            TableId::AssemblyProcessor => &[("Processor", UInt32)],
            TableId::AssemblyOS => &[
                ("OSPlatformId", UInt32),
                ("OSMajorVersion", UInt32),
                ("OSMinorVersion", UInt32),
            ],
            TableId::AssemblyRef => &[
                ("MajorVersion", UInt16),
                ("MinorVersion", UInt16),
                ("BuildNumber", UInt16),
                ("RevisionNumber", UInt16),
                ("Flags", UInt32),
                ("PublicKeyOrToken", Blob),
                ("Name", String),
                ("Culture", String),
                ("HashValue", Blob),
            ],
            TableId::AssemblyRefProcessor => &[
                ("Processor", UInt32),
                ("AssemblyRef", Table(TableId::AssemblyRef)),
            ],
            TableId::AssemblyRefOS => &[
                ("OSPlatformId", UInt32),
                ("OSMajorVersion", UInt32),
                ("OSMinorVersion", UInt32),
                ("AssemblyRef", Table(TableId::AssemblyRef)),
            ],
            TableId::File => &[("Flags", UInt32), ("Name", String), ("HashValue", Blob)],
            TableId::ExportedType => &[
                ("Flags", UInt32),
                ("TypeDefId", UInt32),
                ("Name", String),
                ("Namespace", String),
                ("Implementation", Coded(C::Implementation)),
            ],
            TableId::ManifestResource => &[
                ("Offset", UInt32),
                ("Flags", UInt32),
                ("Name", String),
                ("Implementation", Coded(C::Implementation)),
            ],
            TableId::NestedClass => &[
                ("NestedClass", Table(TableId::TypeDef)),
                ("EnclosingClass", Table(TableId::TypeDef)),
            ],
            TableId::GenericParam => &[
                ("Number", UInt16),
                ("Flags", UInt16),
                ("Owner", Coded(C::TypeOrMethodDef)),
                ("Name", String),
            ],
            TableId::MethodSpec => &[
                ("Method", Coded(C::MethodDefOrRef)),
                ("Instantiation", Blob),
            ],
            TableId::GenericParamConstraint => &[
                ("Owner", Table(TableId::GenericParam)),
                ("Constraint", Coded(C::TypeDefOrRef)),
            ],
            TableId::Document => &[
                ("Name", Blob),
                ("HashAlgorithm", Guid),
                ("Hash", Blob),
                ("Language", Guid),
            ],
            TableId::MethodDebugInformation => &[
                ("Document", Table(TableId::Document)),
                ("SequencePoints", Blob),
            ],
            TableId::LocalScope => &[
                ("Method", Table(TableId::MethodDef)),
                ("ImportScope", Table(TableId::ImportScope)),
                ("VariableList", Table(TableId::LocalVariable)),
                ("ConstantList", Table(TableId::LocalConstant)),
                ("StartOffset", UInt32),
                ("Length", UInt32),
            ],
            TableId::LocalVariable => &[("Attributes", UInt16), ("Index", UInt16), ("Name", String)],
            TableId::LocalConstant => &[("Name", String), ("Signature", Blob)],
            TableId::ImportScope => &[
                ("Parent", Table(TableId::ImportScope)),
                ("Imports", Blob),
            ],
            TableId::StateMachineMethod => &[
                ("MoveNextMethod", Table(TableId::MethodDef)),
                ("KickoffMethod", Table(TableId::MethodDef)),
            ],
            TableId::CustomDebugInformation => &[
                ("Parent", Coded(C::HasCustomDebugInformation)),
                ("Kind", Guid),
                ("Value", Blob),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_table_has_columns() {
        for table in TableId::iter() {
            assert!(!table.schema().is_empty(), "{table:?}");
        }
    }

    #[test]
    fn sort_keys_point_at_reference_columns() {
        for table in TableId::iter() {
            if let Some(keys) = table.sort_key() {
                let schema = table.schema();
                let (_, column_type) = schema[keys[0]];
                assert!(column_type.is_index(), "{table:?}");
            }
        }
    }

    #[test]
    fn references_that_used_to_be_confused() {
        assert_eq!(TableId::TypeRef.schema()[2], ("Namespace", String));
        assert_eq!(
            TableId::FieldLayout.schema()[1],
            ("Field", Table(TableId::Field))
        );
        assert_eq!(
            TableId::PropertyMap.schema()[1],
            ("PropertyList", Table(TableId::Property))
        );
        assert_eq!(
            TableId::MethodSpec.schema()[0],
            ("Method", Coded(C::MethodDefOrRef))
        );
        assert_eq!(TableId::GenericParam.schema()[3], ("Name", String));
        assert_eq!(TableId::LocalVariable.schema()[2], ("Name", String));
        assert_eq!(TableId::AssemblyRefOS.schema().len(), 4);
    }
}
