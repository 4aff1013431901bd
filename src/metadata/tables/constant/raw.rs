use crate::{
    metadata::tables::{CodedIndex, CodedIndexType, MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `Constant` table holds compile-time constant values of fields, parameters and properties. `TableId` = 0x0B
pub struct ConstantRaw {
    /// a 1-byte constant, the `ELEMENT_TYPE` of the value
    pub base: u8,
    /// a 1-byte padding zero
    pub padding: u8,
    /// a `HasConstant` coded index
    pub parent: CodedIndex,
    /// an index into the Blob heap
    pub value: u32,
}

impl MetadataRow for ConstantRaw {
    const TABLE_ID: TableId = TableId::Constant;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(u32::from(self.base)),
            1 => Some(u32::from(self.padding)),
            2 => self.parent.value().ok(),
            3 => Some(self.value),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(ConstantRaw {
            base: reader.read_u8()?,
            padding: reader.read_u8()?,
            parent: reader.read_coded(CodedIndexType::HasConstant)?,
            value: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_u8(self.base)?;
        writer.write_u8(self.padding)?;
        writer.write_coded(&self.parent)?;
        writer.write_index(self.value)?;
        Ok(())
    }
}
