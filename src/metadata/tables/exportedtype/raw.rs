use crate::{
    metadata::tables::{CodedIndex, CodedIndexType, MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `ExportedType` table holds types exported or forwarded by this assembly. `TableId` = 0x27
pub struct ExportedTypeRaw {
    /// a 4-byte bitmask of type `TypeAttributes`, §II.23.1.15
    pub flags: u32,
    /// a 4-byte hint into the `TypeDef` table of the other module
    pub type_def_id: u32,
    /// an index into the String heap
    pub name: u32,
    /// an index into the String heap
    pub namespace: u32,
    /// an `Implementation` coded index
    pub implementation: CodedIndex,
}

impl MetadataRow for ExportedTypeRaw {
    const TABLE_ID: TableId = TableId::ExportedType;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.flags),
            1 => Some(self.type_def_id),
            2 => Some(self.name),
            3 => Some(self.namespace),
            4 => self.implementation.value().ok(),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(ExportedTypeRaw {
            flags: reader.read_u32()?,
            type_def_id: reader.read_u32()?,
            name: reader.read_index()?,
            namespace: reader.read_index()?,
            implementation: reader.read_coded(CodedIndexType::Implementation)?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_u32(self.flags)?;
        writer.write_u32(self.type_def_id)?;
        writer.write_index(self.name)?;
        writer.write_index(self.namespace)?;
        writer.write_coded(&self.implementation)?;
        Ok(())
    }
}
