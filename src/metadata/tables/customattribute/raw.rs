use crate::{
    metadata::tables::{CodedIndex, CodedIndexType, MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `CustomAttribute` table holds the custom attributes applied to metadata entities. `TableId` = 0x0C
pub struct CustomAttributeRaw {
    /// a `HasCustomAttribute` coded index
    pub parent: CodedIndex,
    /// a `CustomAttributeType` coded index
    pub constructor: CodedIndex,
    /// an index into the Blob heap
    pub value: u32,
}

impl MetadataRow for CustomAttributeRaw {
    const TABLE_ID: TableId = TableId::CustomAttribute;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => self.parent.value().ok(),
            1 => self.constructor.value().ok(),
            2 => Some(self.value),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(CustomAttributeRaw {
            parent: reader.read_coded(CodedIndexType::HasCustomAttribute)?,
            constructor: reader.read_coded(CodedIndexType::CustomAttributeType)?,
            value: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_coded(&self.parent)?;
        writer.write_coded(&self.constructor)?;
        writer.write_index(self.value)?;
        Ok(())
    }
}
