use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `LocalConstant` table holds the local constants of scopes. `TableId` = 0x34
pub struct LocalConstantRaw {
    /// an index into the String heap
    pub name: u32,
    /// an index into the Blob heap
    pub signature: u32,
}

impl MetadataRow for LocalConstantRaw {
    const TABLE_ID: TableId = TableId::LocalConstant;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.name),
            1 => Some(self.signature),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(LocalConstantRaw {
            name: reader.read_index()?,
            signature: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_index(self.name)?;
        writer.write_index(self.signature)?;
        Ok(())
    }
}
