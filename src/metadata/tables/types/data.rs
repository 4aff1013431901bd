use std::sync::Arc;

use crate::{
    metadata::tables::{
        AssemblyOsRaw, AssemblyProcessorRaw, AssemblyRaw, AssemblyRefOsRaw,
        AssemblyRefProcessorRaw, AssemblyRefRaw, ClassLayoutRaw, ConstantRaw, CustomAttributeRaw,
        CustomDebugInformationRaw, DeclSecurityRaw, DocumentRaw, EncLogRaw, EncMapRaw,
        EventMapRaw, EventPtrRaw, EventRaw, ExportedTypeRaw, FieldLayoutRaw, FieldMarshalRaw,
        FieldPtrRaw, FieldRaw, FieldRvaRaw, FileRaw, GenericParamConstraintRaw, GenericParamRaw,
        ImplMapRaw, ImportScopeRaw, InterfaceImplRaw, LocalConstantRaw, LocalScopeRaw,
        LocalVariableRaw, ManifestResourceRaw, MemberRefRaw, MetadataRow, MetadataTable,
        MethodDebugInformationRaw, MethodDefRaw, MethodImplRaw, MethodPtrRaw, MethodSemanticsRaw,
        MethodSpecRaw, ModuleRaw, ModuleRefRaw, NestedClassRaw, ParamPtrRaw, ParamRaw,
        PropertyMapRaw, PropertyPtrRaw, PropertyRaw, StandAloneSigRaw, StateMachineMethodRaw,
        TableId, TableLayout, TypeDefRaw, TypeRefRaw, TypeSpecRaw,
    },
    Result,
};

/// Typed access to the table of a row type inside a [`TableData`].
///
/// Implemented for every row type, which lets a stream hand out `MetadataTable<R>` for the `R`
/// a caller asks for.
pub trait TableAccess: MetadataRow {
    /// The table, if `data` holds the table of this row type
    fn table_of(data: &TableData) -> Option<&MetadataTable<Self>>;

    /// Mutable access to the table, if `data` holds the table of this row type
    fn table_of_mut(data: &mut TableData) -> Option<&mut MetadataTable<Self>>;
}

macro_rules! table_data {
    ($($id:ident => $raw:ident),+ $(,)?) => {
        /// One table of any kind.
        #[derive(Clone, Debug, PartialEq)]
        pub enum TableData {
            $(
                #[doc = concat!("The `", stringify!($id), "` table")]
                $id(MetadataTable<$raw>),
            )+
        }

        impl TableData {
            /// An empty table with the given layout
            #[must_use]
            pub fn new(layout: TableLayout) -> TableData {
                match layout.table_id() {
                    $(TableId::$id => TableData::$id(MetadataTable::new(layout)),)+
                }
            }

            /// A table over `rows` serialized rows at `offset` of `data`, decoded on first
            /// access
            #[must_use]
            pub fn serialized(
                data: Arc<[u8]>,
                offset: usize,
                rows: u32,
                layout: TableLayout,
            ) -> TableData {
                match layout.table_id() {
                    $(TableId::$id => {
                        TableData::$id(MetadataTable::serialized(data, offset, rows, layout))
                    })+
                }
            }

            /// The table this is
            #[must_use]
            pub fn table_id(&self) -> TableId {
                match self {
                    $(TableData::$id(_) => TableId::$id,)+
                }
            }

            /// Number of rows
            #[must_use]
            pub fn len(&self) -> u32 {
                match self {
                    $(TableData::$id(table) => table.len(),)+
                }
            }

            /// True if the table has no rows
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }

            /// The current layout
            #[must_use]
            pub fn layout(&self) -> &TableLayout {
                match self {
                    $(TableData::$id(table) => table.layout(),)+
                }
            }

            /// Size of the table in bytes with the current layout
            #[must_use]
            pub fn size(&self) -> u64 {
                match self {
                    $(TableData::$id(table) => table.size(),)+
                }
            }

            /// Switch to a layout with different column widths
            ///
            /// # Panics
            /// See [`MetadataTable::update_layout`].
            pub fn update_layout(&mut self, layout: TableLayout) {
                match self {
                    $(TableData::$id(table) => table.update_layout(layout),)+
                }
            }

            /// Value of column `column` of row `rid`
            ///
            /// # Errors
            /// Returns an error if the table fails to decode.
            pub fn column(&self, rid: u32, column: usize) -> Result<Option<u32>> {
                match self {
                    $(TableData::$id(table) => table.column(rid, column),)+
                }
            }

            /// Force decoding of all rows
            ///
            /// # Errors
            /// Returns an error if the table fails to decode.
            pub fn materialize(&self) -> Result<()> {
                match self {
                    $(TableData::$id(table) => table.materialize_rows(),)+
                }
            }

            /// True once the rows have been decoded
            #[must_use]
            pub fn is_materialized(&self) -> bool {
                match self {
                    $(TableData::$id(table) => table.is_materialized(),)+
                }
            }

            /// True if rows were changed since the table was read
            #[must_use]
            pub fn is_modified(&self) -> bool {
                match self {
                    $(TableData::$id(table) => table.is_modified(),)+
                }
            }

            /// True if the rows are ordered by the sort key of the table
            ///
            /// # Errors
            /// Returns an error if the table fails to decode.
            pub fn is_sorted_by_key(&self) -> Result<bool> {
                match self {
                    $(TableData::$id(table) => table.is_sorted_by_key(),)+
                }
            }

            /// Write all rows, see [`MetadataTable::write`]
            ///
            /// # Errors
            /// Returns an error if a row fails to decode or encode.
            pub fn write(&self, data: &mut [u8], offset: &mut usize, reuse_source: bool) -> Result<()> {
                match self {
                    $(TableData::$id(table) => table.write(data, offset, reuse_source),)+
                }
            }
        }

        $(
            impl TableAccess for $raw {
                fn table_of(data: &TableData) -> Option<&MetadataTable<Self>> {
                    match data {
                        TableData::$id(table) => Some(table),
                        _ => None,
                    }
                }

                fn table_of_mut(data: &mut TableData) -> Option<&mut MetadataTable<Self>> {
                    match data {
                        TableData::$id(table) => Some(table),
                        _ => None,
                    }
                }
            }
        )+
    };
}

table_data! {
    Module => ModuleRaw,
    TypeRef => TypeRefRaw,
    TypeDef => TypeDefRaw,
    FieldPtr => FieldPtrRaw,
    Field => FieldRaw,
    MethodPtr => MethodPtrRaw,
    MethodDef => MethodDefRaw,
    ParamPtr => ParamPtrRaw,
    Param => ParamRaw,
    InterfaceImpl => InterfaceImplRaw,
    MemberRef => MemberRefRaw,
    Constant => ConstantRaw,
    CustomAttribute => CustomAttributeRaw,
    FieldMarshal => FieldMarshalRaw,
    DeclSecurity => DeclSecurityRaw,
    ClassLayout => ClassLayoutRaw,
    FieldLayout => FieldLayoutRaw,
    StandAloneSig => StandAloneSigRaw,
    EventMap => EventMapRaw,
    EventPtr => EventPtrRaw,
    Event => EventRaw,
    PropertyMap => PropertyMapRaw,
    PropertyPtr => PropertyPtrRaw,
    Property => PropertyRaw,
    MethodSemantics => MethodSemanticsRaw,
    MethodImpl => MethodImplRaw,
    ModuleRef => ModuleRefRaw,
    TypeSpec => TypeSpecRaw,
    ImplMap => ImplMapRaw,
    FieldRVA => FieldRvaRaw,
    EncLog => EncLogRaw,
    EncMap => EncMapRaw,
    Assembly => AssemblyRaw,
    AssemblyProcessor => AssemblyProcessorRaw,
    AssemblyOS => AssemblyOsRaw,
    AssemblyRef => AssemblyRefRaw,
    AssemblyRefProcessor => AssemblyRefProcessorRaw,
    AssemblyRefOS => AssemblyRefOsRaw,
    File => FileRaw,
    ExportedType => ExportedTypeRaw,
    ManifestResource => ManifestResourceRaw,
    NestedClass => NestedClassRaw,
    GenericParam => GenericParamRaw,
    MethodSpec => MethodSpecRaw,
    GenericParamConstraint => GenericParamConstraintRaw,
    Document => DocumentRaw,
    MethodDebugInformation => MethodDebugInformationRaw,
    LocalScope => LocalScopeRaw,
    LocalVariable => LocalVariableRaw,
    LocalConstant => LocalConstantRaw,
    ImportScope => ImportScopeRaw,
    StateMachineMethod => StateMachineMethodRaw,
    CustomDebugInformation => CustomDebugInformationRaw,
}
