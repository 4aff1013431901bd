use crate::{
    metadata::tables::{CodedIndex, CodedIndexType, MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `MethodImpl` table holds explicit method overrides. `TableId` = 0x19
pub struct MethodImplRaw {
    /// an index into the `TypeDef` table
    pub class: u32,
    /// a `MethodDefOrRef` coded index, the implementation
    pub method_body: CodedIndex,
    /// a `MethodDefOrRef` coded index, the overridden method
    pub method_declaration: CodedIndex,
}

impl MetadataRow for MethodImplRaw {
    const TABLE_ID: TableId = TableId::MethodImpl;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.class),
            1 => self.method_body.value().ok(),
            2 => self.method_declaration.value().ok(),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(MethodImplRaw {
            class: reader.read_index()?,
            method_body: reader.read_coded(CodedIndexType::MethodDefOrRef)?,
            method_declaration: reader.read_coded(CodedIndexType::MethodDefOrRef)?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_index(self.class)?;
        writer.write_coded(&self.method_body)?;
        writer.write_coded(&self.method_declaration)?;
        Ok(())
    }
}
