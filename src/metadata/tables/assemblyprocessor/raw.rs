use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `AssemblyProcessor` table holds the processor of the assembly. Should be empty. `TableId` = 0x21
pub struct AssemblyProcessorRaw {
    /// a 4-byte constant
    pub processor: u32,
}

impl MetadataRow for AssemblyProcessorRaw {
    const TABLE_ID: TableId = TableId::AssemblyProcessor;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.processor),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(AssemblyProcessorRaw {
            processor: reader.read_u32()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_u32(self.processor)?;
        Ok(())
    }
}
