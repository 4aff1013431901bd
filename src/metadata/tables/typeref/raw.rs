use crate::{
    metadata::tables::{CodedIndex, CodedIndexType, MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `TypeRef` table holds references to types that are defined in other modules or assemblies. `TableId` = 0x01
pub struct TypeRefRaw {
    /// a `ResolutionScope` coded index, where the type is defined
    pub resolution_scope: CodedIndex,
    /// an index into the String heap
    pub type_name: u32,
    /// an index into the String heap
    pub type_namespace: u32,
}

impl MetadataRow for TypeRefRaw {
    const TABLE_ID: TableId = TableId::TypeRef;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => self.resolution_scope.value().ok(),
            1 => Some(self.type_name),
            2 => Some(self.type_namespace),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(TypeRefRaw {
            resolution_scope: reader.read_coded(CodedIndexType::ResolutionScope)?,
            type_name: reader.read_index()?,
            type_namespace: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_coded(&self.resolution_scope)?;
        writer.write_index(self.type_name)?;
        writer.write_index(self.type_namespace)?;
        Ok(())
    }
}
